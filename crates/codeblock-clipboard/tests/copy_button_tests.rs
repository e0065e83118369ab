//! Timing tests for the copy button. Time is paused, so sleeps complete
//! instantly in virtual time.

use std::time::Duration;

use codeblock_clipboard::{COPY_RESET_AFTER, CopyButton, Error, MemoryClipboard};
use pretty_assertions::assert_eq;
use tokio::time::sleep;

const SOURCE: &str = "#highlight-start\nexperiment = replicate.init()\n#highlight-end";

#[tokio::test(start_paused = true)]
async fn test_copies_unmodified_source() {
    let mut button = CopyButton::new(MemoryClipboard::new());

    button.copy(SOURCE).unwrap();

    assert_eq!(button.clipboard().contents().unwrap().as_deref(), Some(SOURCE));
}

#[tokio::test(start_paused = true)]
async fn test_state_lasts_two_seconds() {
    let mut button = CopyButton::new(MemoryClipboard::new());
    assert!(!button.is_copied());
    assert_eq!(button.label(), "Copy");
    assert_eq!(button.reset_after(), COPY_RESET_AFTER);

    button.copy(SOURCE).unwrap();
    assert!(button.is_copied());
    assert_eq!(button.label(), "Copied");

    sleep(Duration::from_millis(1999)).await;
    assert!(button.is_copied());

    sleep(Duration::from_millis(2)).await;
    assert!(!button.is_copied());
    assert_eq!(button.label(), "Copy");
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_restarts_window() {
    let mut button = CopyButton::new(MemoryClipboard::new());

    button.copy("a").unwrap();
    sleep(Duration::from_millis(1500)).await;
    button.copy("b").unwrap();

    sleep(Duration::from_millis(1000)).await;
    assert!(button.is_copied());

    sleep(Duration::from_millis(1001)).await;
    assert!(!button.is_copied());
}

#[tokio::test(start_paused = true)]
async fn test_custom_duration() {
    let mut button =
        CopyButton::new(MemoryClipboard::new()).with_reset_after(Duration::from_millis(100));

    button.copy("x").unwrap();
    sleep(Duration::from_millis(101)).await;
    assert!(!button.is_copied());
}

#[tokio::test(start_paused = true)]
async fn test_subscriber_sees_both_transitions() {
    let mut button = CopyButton::new(MemoryClipboard::new());
    let mut rx = button.subscribe();

    button.copy("x").unwrap();
    rx.changed().await.unwrap();
    assert!(*rx.borrow_and_update());

    rx.changed().await.unwrap();
    assert!(!*rx.borrow_and_update());
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_pending_reset() {
    let mut button = CopyButton::new(MemoryClipboard::new());
    let mut rx = button.subscribe();

    button.copy("x").unwrap();
    rx.borrow_and_update();
    drop(button);

    // The sender is gone with the button; no reset ever arrives.
    sleep(Duration::from_millis(5000)).await;
    assert!(rx.changed().await.is_err());
    assert!(*rx.borrow());
}

#[tokio::test(start_paused = true)]
async fn test_old_reset_does_not_clear_newer_copy() {
    let mut button =
        CopyButton::new(MemoryClipboard::new()).with_reset_after(Duration::from_millis(100));
    let mut rx = button.subscribe();

    for _ in 0..5 {
        button.copy("x").unwrap();
        sleep(Duration::from_millis(99)).await;
        assert!(button.is_copied());
    }
    rx.borrow_and_update();

    sleep(Duration::from_millis(2)).await;
    assert!(!button.is_copied());
    assert!(rx.has_changed().unwrap());
}

#[test]
fn test_copy_outside_runtime_fails() {
    let clipboard = MemoryClipboard::new();
    let mut button = CopyButton::new(clipboard.clone());

    let err = button.copy("x").unwrap_err();

    assert!(matches!(err, Error::NoRuntime));
    assert_eq!(clipboard.contents().unwrap(), None);
}
