pub mod error_handler;

pub use error_handler::{json_error_handler, log_error};
