mod registration_service;

pub use registration_service::{RegistrationOutcome, RegistrationService};
