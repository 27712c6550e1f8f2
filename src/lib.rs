//! applyform - Terminal Job Application Form Library
//!
//! A job application form for the terminal with field validation, a progress
//! gauge and a simulated submission flow, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
