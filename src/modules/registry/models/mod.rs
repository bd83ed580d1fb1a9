pub mod report_definition;

pub use report_definition::{default_report_script, ReportDefinition, REPORT_NAME};
