//! The greeting operation.
//!
//! One stateless action: present a modal, informational dialog with a fixed
//! title and message. Presentation is behind the [`DialogPresenter`] trait
//! so the trigger path can be exercised without a display.

use std::sync::Arc;

use tracing::debug;

use crate::dispatch::UiDispatcher;

/// Title of the greeting dialog.
pub const GREETING_TITLE: &str = "Hello";

/// Body text of the greeting dialog.
pub const GREETING_MESSAGE: &str = "Hello, world!";

/// Something that can put a message dialog in front of the user.
///
/// The application installs a native implementation; tests install a
/// recorder. Implementations are expected to be modal: `present` should not
/// return until the user has dismissed the dialog.
pub trait DialogPresenter: Send + Sync {
    /// Shows an informational dialog with the given title and message.
    fn present(&self, title: &str, message: &str);
}

/// The "say hello" action.
///
/// [`invoke`](Self::invoke) has no inputs, no output, and no error states.
/// It guarantees the presenter runs on the UI thread: called from the UI
/// thread the dialog is presented before `invoke` returns, called from
/// anywhere else the presentation is scheduled onto the UI thread and the
/// caller does not wait.
#[derive(Clone)]
pub struct GreetingAction {
    dispatcher: UiDispatcher,
    presenter: Arc<dyn DialogPresenter>,
}

impl GreetingAction {
    /// Creates the action with the given dispatcher and presenter.
    pub fn new(dispatcher: UiDispatcher, presenter: Arc<dyn DialogPresenter>) -> Self {
        Self {
            dispatcher,
            presenter,
        }
    }

    /// Presents the greeting dialog on the UI thread.
    pub fn invoke(&self) {
        let presenter = Arc::clone(&self.presenter);
        self.dispatcher.run_on_ui_thread(move || {
            debug!("presenting greeting dialog");
            presenter.present(GREETING_TITLE, GREETING_MESSAGE);
        });
    }
}
