use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use super::report_column::{goal_report_columns, ReportColumn};
use crate::core::GoalPercent;

/// Enabled sales person as listed by the host
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, FromRow)]
pub struct SalesPerson {
    pub name: String,
}

impl SalesPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Item groups whose targets feed the two goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalCategories {
    /// Targets in this group make up the account goal
    pub sales_goal: String,
    /// Targets in this group make up the SIL goal, and its items the SIL revenue
    pub sil: String,
}

impl Default for GoalCategories {
    fn default() -> Self {
        Self {
            sales_goal: "Products".to_string(),
            sil: "SIL".to_string(),
        }
    }
}

/// Target amounts of one sales person, summed per goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuotaTotals {
    pub sales_goal: Decimal,
    pub sil_goal: Decimal,
}

/// A summed revenue figure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RevenueTotal {
    pub total: Decimal,
}

impl RevenueTotal {
    pub fn new(total: Decimal) -> Self {
        Self { total }
    }
}

/// One report line: a sales person's revenue measured against their goals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalAttainmentRow {
    pub sales_person: String,
    pub total_sales: Decimal,
    pub sales_goal: Decimal,
    pub current_sil: Decimal,
    pub sil_goal: Decimal,
    pub sales_goal_percent: GoalPercent,
    pub sil_goal_percent: GoalPercent,
}

impl GoalAttainmentRow {
    /// Assemble a row, deriving both attainment percentages
    pub fn new(
        sales_person: impl Into<String>,
        quota: QuotaTotals,
        total_sales: RevenueTotal,
        current_sil: RevenueTotal,
    ) -> Self {
        Self {
            sales_person: sales_person.into(),
            total_sales: total_sales.total,
            sales_goal: quota.sales_goal,
            current_sil: current_sil.total,
            sil_goal: quota.sil_goal,
            sales_goal_percent: GoalPercent::of(total_sales.total, quota.sales_goal),
            sil_goal_percent: GoalPercent::of(current_sil.total, quota.sil_goal),
        }
    }
}

/// Column schema plus one row per enabled sales person
#[derive(Debug, Clone, Serialize)]
pub struct GoalReport {
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<GoalAttainmentRow>,
}

impl GoalReport {
    /// Build a report from rows, ordering them by sales person
    ///
    /// Names compare case-insensitively first, as the host's collation does.
    pub fn new(mut rows: Vec<GoalAttainmentRow>) -> Self {
        rows.sort_by_cached_key(|r| (r.sales_person.to_lowercase(), r.sales_person.clone()));
        Self {
            columns: goal_report_columns(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the row for a sales person
    pub fn row(&self, sales_person: &str) -> Option<&GoalAttainmentRow> {
        self.rows.iter().find(|r| r.sales_person == sales_person)
    }

    /// Revenue across all rows
    pub fn total_sales(&self) -> Decimal {
        self.rows.iter().map(|r| r.total_sales).sum()
    }
}
