pub mod models;
pub mod validation;
pub mod progress;
pub mod errors;

pub use models::*;
pub use validation::*;
pub use progress::*;
pub use errors::*;
