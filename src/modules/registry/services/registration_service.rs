use std::sync::Arc;

use tracing::{error, info};

use crate::core::{AppError, Result};
use crate::modules::registry::models::ReportDefinition;
use crate::modules::registry::repositories::RegistryRepository;

/// What `ensure_registered` did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created,
    Updated,
}

/// Keeps the report registry entry in line with this service
pub struct RegistrationService {
    registry_repo: Arc<dyn RegistryRepository>,
    definition: ReportDefinition,
}

impl RegistrationService {
    pub fn new(registry_repo: Arc<dyn RegistryRepository>, definition: ReportDefinition) -> Self {
        Self {
            registry_repo,
            definition,
        }
    }

    pub fn definition(&self) -> &ReportDefinition {
        &self.definition
    }

    /// Create the registry entry, or overwrite it if it already exists
    ///
    /// Roles are only granted on creation; an existing entry keeps whatever
    /// roles the site has assigned since. A definition without a script body
    /// is refused.
    pub async fn ensure_registered(&self) -> Result<RegistrationOutcome> {
        if self.definition.report_script.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Report '{}' has no script body",
                self.definition.name
            )));
        }

        if self.registry_repo.report_exists(&self.definition.name).await? {
            self.registry_repo.update_report(&self.definition).await?;
            info!(report = %self.definition.name, "Report registry entry updated");
            return Ok(RegistrationOutcome::Updated);
        }

        self.registry_repo.insert_report(&self.definition).await?;
        info!(
            report = %self.definition.name,
            roles = ?self.definition.roles,
            "Report registry entry created"
        );
        Ok(RegistrationOutcome::Created)
    }

    /// Post-migration hook: register the report, never fail the caller
    ///
    /// On a fresh site the host tables may not exist yet; the error is logged
    /// and startup carries on.
    pub async fn after_migrate(&self) -> Option<RegistrationOutcome> {
        match self.ensure_registered().await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(
                    report = %self.definition.name,
                    "Failed to upsert report registry entry: {}", e
                );
                None
            }
        }
    }
}

// Covered by tests/integration/report_registration_test.rs
