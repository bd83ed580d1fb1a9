use crate::core::{AppError, Result};
use crate::modules::registry::default_report_script;
use crate::modules::reports::models::GoalCategories;
use serde::Deserialize;
use std::env;

/// Report-specific settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Item group whose targets make up the account (sales) goal
    pub sales_goal_group: String,
    /// Item group tracked as the SIL sub-goal
    pub sil_group: String,
    /// Upsert the report registry entry when the service starts
    pub register_on_startup: bool,
    /// File overriding the bundled script body stored on the registry entry
    pub script_file: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sales_goal_group: "Products".to_string(),
            sil_group: "SIL".to_string(),
            register_on_startup: true,
            script_file: None,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(ReportConfig {
            sales_goal_group: env::var("REPORT_SALES_GOAL_GROUP")
                .unwrap_or(defaults.sales_goal_group),
            sil_group: env::var("REPORT_SIL_GROUP").unwrap_or(defaults.sil_group),
            register_on_startup: env::var("REPORT_REGISTER_ON_STARTUP")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid REPORT_REGISTER_ON_STARTUP".to_string())
                })?,
            script_file: env::var("REPORT_SCRIPT_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.sales_goal_group.trim().is_empty() || self.sil_group.trim().is_empty() {
            return Err(AppError::Configuration(
                "Report item groups must not be empty".to_string(),
            ));
        }

        // Group names are written into the registered script as string literals
        for group in [&self.sales_goal_group, &self.sil_group] {
            if group.contains(['"', '\'', '\\', '\n', '\r']) {
                return Err(AppError::Configuration(format!(
                    "Report item group '{}' contains quotes or line breaks",
                    group
                )));
            }
        }

        // Goals are summed per group; sharing one group would count targets twice
        if self.sales_goal_group == self.sil_group {
            return Err(AppError::Configuration(format!(
                "REPORT_SALES_GOAL_GROUP and REPORT_SIL_GROUP are both '{}'",
                self.sil_group
            )));
        }

        Ok(())
    }

    /// Item groups the goals are computed for
    pub fn categories(&self) -> GoalCategories {
        GoalCategories {
            sales_goal: self.sales_goal_group.clone(),
            sil: self.sil_group.clone(),
        }
    }

    /// Script body for the registry entry
    ///
    /// `REPORT_SCRIPT_FILE` overrides the bundled script; an override that is
    /// blank is rejected rather than wiping the registered script.
    pub fn load_script(&self) -> Result<String> {
        let Some(path) = &self.script_file else {
            return Ok(default_report_script(&self.categories()));
        };

        let script = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read REPORT_SCRIPT_FILE {}: {}", path, e))
        })?;

        if script.trim().is_empty() {
            return Err(AppError::Configuration(format!(
                "REPORT_SCRIPT_FILE {} is empty",
                path
            )));
        }

        Ok(script)
    }
}
