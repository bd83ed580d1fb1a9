//! Registration of the regional dashboard in the host's report registry.
//!
//! The host only lists reports that have a `tabReport` record. Built-in
//! ("standard") records refuse edits through the document layer, so the
//! record is kept custom and updated with plain SQL.

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{default_report_script, ReportDefinition};
pub use repositories::{MySqlRegistryRepository, RegistryRepository};
pub use services::{RegistrationOutcome, RegistrationService};
