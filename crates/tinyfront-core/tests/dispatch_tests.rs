use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use tinyfront_core::UiDispatcher;

#[test]
fn creating_thread_is_the_ui_thread() {
    let (dispatcher, _queue) = UiDispatcher::new();
    assert!(dispatcher.is_ui_thread());
}

#[test]
fn other_threads_are_not_the_ui_thread() {
    let (dispatcher, _queue) = UiDispatcher::new();
    let on_ui = thread::spawn(move || dispatcher.is_ui_thread())
        .join()
        .unwrap();
    assert!(!on_ui);
}

#[test]
fn task_runs_inline_on_the_ui_thread() {
    let (dispatcher, queue) = UiDispatcher::new();
    let ran = Arc::new(AtomicUsize::new(0));

    let counter = ran.clone();
    dispatcher.run_on_ui_thread(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Executed synchronously, nothing left in the queue.
    assert_eq!(ran.load(Ordering::SeqCst), 1);
    assert_eq!(queue.drain(), 0);
}

#[test]
fn task_from_another_thread_is_deferred() {
    let (dispatcher, queue) = UiDispatcher::new();
    let ran = Arc::new(AtomicUsize::new(0));

    let counter = ran.clone();
    thread::spawn(move || {
        dispatcher.run_on_ui_thread(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        // run_on_ui_thread returned without executing the task here.
    })
    .join()
    .unwrap();

    assert_eq!(ran.load(Ordering::SeqCst), 0);
    assert_eq!(queue.drain(), 1);
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

#[test]
fn drain_runs_tasks_in_fifo_order() {
    let (dispatcher, queue) = UiDispatcher::new();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for i in 0..3 {
            let tx = tx.clone();
            dispatcher.run_on_ui_thread(move || tx.send(i).unwrap());
        }
    })
    .join()
    .unwrap();

    assert_eq!(queue.drain(), 3);
    let order: Vec<i32> = rx.try_iter().collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn waker_fires_only_for_cross_thread_enqueues() {
    let (dispatcher, queue) = UiDispatcher::new();
    let woken = Arc::new(AtomicUsize::new(0));

    let counter = woken.clone();
    dispatcher.set_waker(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Inline execution does not need a wakeup.
    dispatcher.run_on_ui_thread(|| {});
    assert_eq!(woken.load(Ordering::SeqCst), 0);

    let remote = dispatcher.clone();
    thread::spawn(move || remote.run_on_ui_thread(|| {}))
        .join()
        .unwrap();
    assert_eq!(woken.load(Ordering::SeqCst), 1);
    assert_eq!(queue.drain(), 1);
}

#[test]
fn enqueue_after_queue_dropped_is_a_no_op() {
    let (dispatcher, queue) = UiDispatcher::new();
    drop(queue);

    // Must be a cross-thread call: the inline path would still run.
    thread::spawn(move || {
        dispatcher.run_on_ui_thread(|| panic!("task must not run"));
    })
    .join()
    .unwrap();
}

#[test]
fn drain_on_empty_queue_returns_zero() {
    let (_dispatcher, queue) = UiDispatcher::new();
    assert_eq!(queue.drain(), 0);
}
