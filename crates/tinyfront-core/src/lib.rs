//! Tinyfront Core - greeting operation and UI-thread dispatch
//!
//! This crate is the "backend" half of the hello demo. It contains:
//! - The greeting operation and the dialog-presenter seam
//! - The UI-thread dispatcher used by cross-thread callers
//! - Logging configuration
//!
//! Nothing in here touches a display, so the whole crate is unit testable
//! in headless environments.

#![warn(missing_docs)]

pub mod dispatch;
pub mod greeting;
pub mod logging;

pub use dispatch::{UiDispatcher, UiTask, UiTaskQueue};
pub use greeting::{DialogPresenter, GreetingAction, GREETING_MESSAGE, GREETING_TITLE};
pub use logging::{LogConfig, LoggingError};
