// Writes to the host's report registry
//
// `tabReport` holds the record; `tabReport Column` and `tabHas Role` are its
// child tables. Child rows follow the host's conventions: random 10-character
// names, `parent`/`parenttype`/`parentfield` back-references, 1-based `idx`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySql, MySqlPool, Transaction};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::registry::models::ReportDefinition;

const OWNER: &str = "Administrator";

/// Persistence of the report registry record
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    /// Whether a report record with this name exists
    async fn report_exists(&self, name: &str) -> Result<bool>;

    /// Overwrite the record's fields and column schema in place
    ///
    /// Must not run the host's document validation and must leave
    /// `modified` untouched. An empty `report_script` keeps the stored one.
    async fn update_report(&self, definition: &ReportDefinition) -> Result<()>;

    /// Insert the record with its columns and roles
    async fn insert_report(&self, definition: &ReportDefinition) -> Result<()>;
}

pub struct MySqlRegistryRepository {
    pool: MySqlPool,
}

impl MySqlRegistryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Replace the column child rows of a report within an existing transaction
    async fn replace_columns_with_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        definition: &ReportDefinition,
    ) -> Result<()> {
        sqlx::query("DELETE FROM `tabReport Column` WHERE parent = ? AND parenttype = 'Report'")
            .bind(&definition.name)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to clear report columns: {}", e)))?;

        let now = Utc::now().naive_utc();
        for (idx, column) in definition.columns.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO `tabReport Column` (
                    name, creation, modified, modified_by, owner, docstatus, idx,
                    parent, parentfield, parenttype,
                    fieldname, label, fieldtype, options, width
                ) VALUES (?, ?, ?, ?, ?, 0, ?, ?, 'columns', 'Report', ?, ?, ?, ?, ?)
                "#,
            )
            .bind(child_name())
            .bind(now)
            .bind(now)
            .bind(OWNER)
            .bind(OWNER)
            .bind((idx + 1) as i64)
            .bind(&definition.name)
            .bind(column.fieldname)
            .bind(column.label)
            .bind(column.fieldtype.as_str())
            .bind(column.options)
            .bind(column.width)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to insert report column: {}", e)))?;
        }

        Ok(())
    }
}

/// Child row name in the host's style
fn child_name() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_string()
}

#[async_trait]
impl RegistryRepository for MySqlRegistryRepository {
    async fn report_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM `tabReport` WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn update_report(&self, definition: &ReportDefinition) -> Result<()> {
        let mut tx = self.pool.begin().await
            .map_err(|e| AppError::Internal(format!("Failed to start transaction: {}", e)))?;

        sqlx::query(
            r#"
            UPDATE `tabReport`
            SET report_type = ?,
                ref_doctype = ?,
                is_standard = ?,
                module = ?,
                report_script = IF(? = '', report_script, ?),
                javascript = ?,
                disabled = ?
            WHERE name = ?
            "#,
        )
        .bind(&definition.report_type)
        .bind(&definition.ref_doctype)
        .bind(&definition.is_standard)
        .bind(&definition.module)
        .bind(&definition.report_script)
        .bind(&definition.report_script)
        .bind(&definition.javascript)
        .bind(definition.disabled)
        .bind(&definition.name)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to update report: {}", e)))?;

        self.replace_columns_with_tx(&mut tx, definition).await?;

        tx.commit().await
            .map_err(|e| AppError::Internal(format!("Failed to commit transaction: {}", e)))?;

        Ok(())
    }

    async fn insert_report(&self, definition: &ReportDefinition) -> Result<()> {
        let mut tx = self.pool.begin().await
            .map_err(|e| AppError::Internal(format!("Failed to start transaction: {}", e)))?;

        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO `tabReport` (
                name, creation, modified, modified_by, owner, docstatus,
                report_name, report_type, ref_doctype, is_standard, module,
                report_script, javascript, disabled
            ) VALUES (?, ?, ?, ?, ?, 0, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&definition.name)
        .bind(now)
        .bind(now)
        .bind(OWNER)
        .bind(OWNER)
        .bind(&definition.name)
        .bind(&definition.report_type)
        .bind(&definition.ref_doctype)
        .bind(&definition.is_standard)
        .bind(&definition.module)
        .bind(&definition.report_script)
        .bind(&definition.javascript)
        .bind(definition.disabled)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::validation(format!(
                        "Report '{}' already exists",
                        definition.name
                    ));
                }
            }
            AppError::Internal(format!("Failed to insert report: {}", e))
        })?;

        self.replace_columns_with_tx(&mut tx, definition).await?;

        for (idx, role) in definition.roles.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO `tabHas Role` (
                    name, creation, modified, modified_by, owner, docstatus, idx,
                    parent, parentfield, parenttype, role
                ) VALUES (?, ?, ?, ?, ?, 0, ?, ?, 'roles', 'Report', ?)
                "#,
            )
            .bind(child_name())
            .bind(now)
            .bind(now)
            .bind(OWNER)
            .bind(OWNER)
            .bind((idx + 1) as i64)
            .bind(&definition.name)
            .bind(role)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to insert report role: {}", e)))?;
        }

        tx.commit().await
            .map_err(|e| AppError::Internal(format!("Failed to commit transaction: {}", e)))?;

        Ok(())
    }
}
