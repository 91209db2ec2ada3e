//! UI-thread dispatch
//!
//! The GUI toolkit owns exactly one thread: the one the event loop runs on.
//! All widget work must happen there. [`UiDispatcher`] is the
//! "run on UI thread" primitive: callers already on the UI thread execute
//! their task inline, everyone else enqueues it onto a channel that the
//! event loop drains on its own thread.

use std::sync::Arc;
use std::thread::{self, ThreadId};

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use tracing::{trace, warn};

/// A deferred unit of work destined for the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

type Waker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Handle for scheduling work onto the UI thread.
///
/// Cheap to clone and safe to hand to any thread. Created with
/// [`UiDispatcher::new`] on the thread that will run the event loop.
#[derive(Clone)]
pub struct UiDispatcher {
    ui_thread: ThreadId,
    sender: Sender<UiTask>,
    waker: Arc<Mutex<Option<Waker>>>,
}

/// Receiving end of the dispatcher's task channel.
///
/// Owned by the event loop and drained on the UI thread only.
pub struct UiTaskQueue {
    receiver: Receiver<UiTask>,
}

impl UiDispatcher {
    /// Creates a dispatcher bound to the calling thread.
    ///
    /// Must be called on the thread that will run the event loop; that
    /// thread becomes the UI thread for affinity checks.
    pub fn new() -> (Self, UiTaskQueue) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        let dispatcher = Self {
            ui_thread: thread::current().id(),
            sender,
            waker: Arc::new(Mutex::new(None)),
        };
        (dispatcher, UiTaskQueue { receiver })
    }

    /// Returns true if the calling thread is the UI thread.
    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.ui_thread
    }

    /// Runs `task` on the UI thread.
    ///
    /// On the UI thread the task executes inline before this returns. From
    /// any other thread the task is enqueued, the waker (if registered) is
    /// fired so the event loop picks it up, and the call returns without
    /// waiting. Enqueueing after the queue has been dropped means the event
    /// loop is gone; the task is dropped with a warning.
    pub fn run_on_ui_thread(&self, task: impl FnOnce() + Send + 'static) {
        if self.is_ui_thread() {
            task();
            return;
        }

        if self.sender.send(Box::new(task)).is_err() {
            warn!("UI task queue is gone, dropping task");
            return;
        }
        if let Some(waker) = self.waker.lock().clone() {
            waker();
        }
    }

    /// Registers a callback fired after each cross-thread enqueue.
    ///
    /// The application wires this to the event-loop proxy so a waiting
    /// event loop wakes up and drains the queue.
    pub fn set_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self.waker.lock() = Some(Arc::new(waker));
    }
}

impl UiTaskQueue {
    /// Runs all queued tasks in FIFO order and returns how many ran.
    ///
    /// Must only be called on the UI thread.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            count += 1;
        }
        if count > 0 {
            trace!("drained {} UI task(s)", count);
        }
        count
    }
}
