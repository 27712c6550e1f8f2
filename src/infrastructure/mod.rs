//! Infrastructure layer providing external service integrations.
//!
//! This module contains the submission gateway, configuration loading and
//! log file setup.

pub mod submission;
pub mod config;
pub mod logging;

pub use submission::*;
pub use config::*;
pub use logging::*;
