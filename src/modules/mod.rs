pub mod health;
pub mod registry;
pub mod reports;
