use std::sync::Arc;

use futures_util::future::try_join3;
use tracing::{debug, info, warn};

use crate::core::Result;
use crate::modules::reports::models::{
    GoalAttainmentRow, GoalCategories, GoalReport, ReportFilters,
};
use crate::modules::reports::repositories::ReportRepository;

/// Builds the regional goal-attainment report
///
/// Every enabled sales person gets one row comparing submitted revenue with
/// their targets. Sales persons are independent of each other; the three
/// lookups for one sales person run concurrently.
#[derive(Clone)]
pub struct ReportService {
    report_repo: Arc<dyn ReportRepository>,
    categories: GoalCategories,
}

impl ReportService {
    /// Create a new report service
    pub fn new(report_repo: Arc<dyn ReportRepository>, categories: GoalCategories) -> Self {
        Self {
            report_repo,
            categories,
        }
    }

    /// Produce the column schema and one row per enabled sales person
    ///
    /// # Arguments
    /// * `filters` - Inclusive posting-date window; open bounds mean all time
    ///
    /// # Returns
    /// GoalReport with rows ordered by sales person. No enabled sales persons
    /// gives an empty row set, not an error.
    ///
    /// # Errors
    /// Returns an error if the window is reversed or any query fails. A failing
    /// sales person fails the whole report rather than dropping the row.
    pub async fn produce_report(&self, filters: &ReportFilters) -> Result<GoalReport> {
        filters.validate()?;

        info!(
            "Generating regional dashboard: from={:?}, to={:?}",
            filters.from_date, filters.to_date
        );

        let sales_persons = self.report_repo.list_enabled_sales_persons().await?;

        if sales_persons.is_empty() {
            warn!("No enabled sales persons; regional dashboard is empty");
            return Ok(GoalReport::new(Vec::new()));
        }

        let mut rows = Vec::with_capacity(sales_persons.len());
        for sales_person in &sales_persons {
            rows.push(self.build_row(&sales_person.name, filters).await?);
        }

        let report = GoalReport::new(rows);

        info!(
            "Regional dashboard generated: {} sales persons, total sales {}",
            report.rows.len(),
            report.total_sales()
        );

        Ok(report)
    }

    async fn build_row(
        &self,
        sales_person: &str,
        filters: &ReportFilters,
    ) -> Result<GoalAttainmentRow> {
        let (quota, total_sales, current_sil) = try_join3(
            self.report_repo
                .get_quota_totals(sales_person, &self.categories),
            self.report_repo.get_total_sales(sales_person, filters),
            self.report_repo
                .get_category_sales(sales_person, &self.categories.sil, filters),
        )
        .await?;

        let row = GoalAttainmentRow::new(sales_person, quota, total_sales, current_sil);

        debug!(
            sales_person = %row.sales_person,
            total_sales = %row.total_sales,
            sales_goal = %row.sales_goal,
            current_sil = %row.current_sil,
            sil_goal = %row.sil_goal,
            "Computed goal attainment"
        );

        Ok(row)
    }
}

// Service behaviour is covered with an in-memory repository in
// tests/integration/report_aggregation_test.rs
