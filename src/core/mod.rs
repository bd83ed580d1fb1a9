pub mod error;
pub mod numeric;
pub mod percent;

pub use error::{AppError, Result};
pub use percent::{AttainmentBand, GoalPercent};
