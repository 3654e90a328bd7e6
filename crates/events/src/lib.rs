//! CamQuest rental notifications.
//!
//! - [`RentalNotifier`] is the dispatcher contract called after a rental
//!   request is created. Failures are reported as `false`, never as errors.
//! - [`EmailNotifier`] delivers admin and customer emails over SMTP.
//! - [`LogNotifier`] logs the request when no SMTP relay is configured.
//! - [`message`] renders the email subjects and bodies.

pub mod email;
pub mod message;
pub mod notifier;

pub use email::{EmailConfig, EmailNotifier};
pub use notifier::{LogNotifier, RentalNotifier};
