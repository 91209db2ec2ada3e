//! Native dialogs
//!
//! Presents the greeting through the platform's own message box. The show
//! call blocks the GUI thread until the user dismisses the dialog, which is
//! what makes it modal. No parent window is set, so the platform centers
//! the dialog on the primary display.

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tinyfront_core::DialogPresenter;

/// [`DialogPresenter`] backed by `rfd` native message boxes.
pub struct NativeDialogs;

impl DialogPresenter for NativeDialogs {
    fn present(&self, title: &str, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::Ok)
            .set_title(title)
            .set_description(message)
            .show();
    }
}
