use std::sync::{Arc, Mutex};
use std::thread;

use tinyfront_core::{
    DialogPresenter, GreetingAction, UiDispatcher, GREETING_MESSAGE, GREETING_TITLE,
};

/// Records every presentation instead of opening a dialog.
#[derive(Default)]
struct RecordingPresenter {
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingPresenter {
    fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }
}

impl DialogPresenter for RecordingPresenter {
    fn present(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_owned(), message.to_owned()));
    }
}

#[test]
fn invoke_on_ui_thread_presents_before_returning() {
    let (dispatcher, _queue) = UiDispatcher::new();
    let presenter = Arc::new(RecordingPresenter::default());
    let greeting = GreetingAction::new(dispatcher, presenter.clone());

    greeting.invoke();

    let shown = presenter.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, "Hello");
    assert_eq!(shown[0].1, "Hello, world!");
}

#[test]
fn greeting_strings_are_fixed() {
    assert_eq!(GREETING_TITLE, "Hello");
    assert_eq!(GREETING_MESSAGE, "Hello, world!");
}

#[test]
fn invoke_from_another_thread_is_deferred() {
    let (dispatcher, queue) = UiDispatcher::new();
    let presenter = Arc::new(RecordingPresenter::default());
    let greeting = GreetingAction::new(dispatcher, presenter.clone());

    thread::spawn(move || greeting.invoke()).join().unwrap();

    // Nothing presented on the calling thread.
    assert!(presenter.shown().is_empty());

    // The UI thread picks it up on the next drain.
    assert_eq!(queue.drain(), 1);
    assert_eq!(presenter.shown().len(), 1);
}

#[test]
fn repeated_invokes_present_once_each() {
    let (dispatcher, _queue) = UiDispatcher::new();
    let presenter = Arc::new(RecordingPresenter::default());
    let greeting = GreetingAction::new(dispatcher, presenter.clone());

    for _ in 0..3 {
        greeting.invoke();
    }

    let shown = presenter.shown();
    assert_eq!(shown.len(), 3);
    assert!(shown
        .iter()
        .all(|(title, message)| title == GREETING_TITLE && message == GREETING_MESSAGE));
}

#[test]
fn cloned_action_shares_the_presenter() {
    let (dispatcher, _queue) = UiDispatcher::new();
    let presenter = Arc::new(RecordingPresenter::default());
    let greeting = GreetingAction::new(dispatcher, presenter.clone());

    let clone = greeting.clone();
    greeting.invoke();
    clone.invoke();

    assert_eq!(presenter.shown().len(), 2);
}
