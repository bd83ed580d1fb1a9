use crate::modules::reports::models::{goal_report_columns, GoalCategories, ReportColumn};

/// Registry name of the report
pub const REPORT_NAME: &str = "Regional Dashboard";

/// Roles granted access when the report is first registered
const DEFAULT_ROLES: [&str; 2] = ["Sales User", "Sales Manager"];

/// Script body shipped with the service, with goal-group placeholders
const REPORT_SCRIPT_TEMPLATE: &str = include_str!("../../../../scripts/regional_dashboard.py");

/// The bundled Script Report body for `categories`
pub fn default_report_script(categories: &GoalCategories) -> String {
    REPORT_SCRIPT_TEMPLATE
        .replace("{{sales_goal_group}}", &categories.sales_goal)
        .replace("{{sil_group}}", &categories.sil)
        .trim()
        .to_string()
}

/// Field values of the host's `Report` record for this report
#[derive(Debug, Clone)]
pub struct ReportDefinition {
    pub name: String,
    pub report_type: String,
    pub ref_doctype: String,
    /// "Yes" / "No" as stored by the host; always "No" here
    pub is_standard: String,
    pub module: String,
    /// Never empty; a blank script falls back to the bundled one
    pub report_script: String,
    pub javascript: String,
    pub disabled: bool,
    pub columns: Vec<ReportColumn>,
    pub roles: Vec<String>,
}

impl ReportDefinition {
    /// Definition of the regional dashboard carrying `report_script`
    pub fn regional_dashboard(report_script: impl Into<String>) -> Self {
        let report_script = report_script.into().trim().to_string();
        let report_script = if report_script.is_empty() {
            default_report_script(&GoalCategories::default())
        } else {
            report_script
        };

        Self {
            name: REPORT_NAME.to_string(),
            report_type: "Script Report".to_string(),
            ref_doctype: "Sales Person".to_string(),
            is_standard: "No".to_string(),
            module: "Selling".to_string(),
            report_script,
            javascript: String::new(),
            disabled: false,
            columns: goal_report_columns(),
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }
}
