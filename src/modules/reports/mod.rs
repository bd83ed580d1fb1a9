pub mod models;
pub mod repositories;
pub mod services;
pub mod controllers;

pub use models::GoalReport;
pub use services::ReportService;
pub use repositories::{MySqlReportRepository, ReportRepository};
