//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing the form controller, focus, notifications and submission timing.

pub mod controller;
pub mod notification;
pub mod state;

pub use controller::*;
pub use notification::*;
pub use state::*;
