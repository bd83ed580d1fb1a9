// Read-only queries against the host ERP schema
//
// Tables are owned by the host (Frappe naming, `tab<DocType>`):
// - `tabSales Person`         representatives, `enabled` flag
// - `tabTarget Detail`        quota lines, child of Sales Person
// - `tabSales Invoice`        invoices, `docstatus` 1 = submitted
// - `tabSales Team`           invoice to sales person credit
// - `tabSales Invoice Item`   invoice lines
// - `tabItem`                 item master, `item_group` category

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use crate::core::error::AppError;
use crate::core::numeric::or_zero;
use crate::modules::reports::models::{
    GoalCategories, QuotaTotals, ReportFilters, RevenueTotal, SalesPerson,
};

/// Query interface the goal report is computed from
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Enabled sales persons, ordered by name ascending
    async fn list_enabled_sales_persons(&self) -> Result<Vec<SalesPerson>, AppError>;

    /// Target amounts of a sales person summed per goal category
    async fn get_quota_totals(
        &self,
        sales_person: &str,
        categories: &GoalCategories,
    ) -> Result<QuotaTotals, AppError>;

    /// Grand total of submitted invoices credited to a sales person
    async fn get_total_sales(
        &self,
        sales_person: &str,
        filters: &ReportFilters,
    ) -> Result<RevenueTotal, AppError>;

    /// Line amounts of submitted invoices credited to a sales person,
    /// limited to items of one item group
    async fn get_category_sales(
        &self,
        sales_person: &str,
        item_group: &str,
        filters: &ReportFilters,
    ) -> Result<RevenueTotal, AppError>;
}

#[derive(Debug, FromRow)]
struct QuotaRow {
    sales_goal: Option<Decimal>,
    sil_goal: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct TotalRow {
    total: Option<Decimal>,
}

pub struct MySqlReportRepository {
    pool: MySqlPool,
}

impl MySqlReportRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Append the inclusive posting-date bounds that are set
fn push_posting_window(builder: &mut QueryBuilder<'_, MySql>, filters: &ReportFilters) {
    if let Some(from_date) = filters.from_date {
        builder.push(" AND si.posting_date >= ").push_bind(from_date);
    }
    if let Some(to_date) = filters.to_date {
        builder.push(" AND si.posting_date <= ").push_bind(to_date);
    }
}

#[async_trait]
impl ReportRepository for MySqlReportRepository {
    async fn list_enabled_sales_persons(&self) -> Result<Vec<SalesPerson>, AppError> {
        let sales_persons = sqlx::query_as::<_, SalesPerson>(
            r#"
            SELECT name
            FROM `tabSales Person`
            WHERE enabled = 1
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales_persons)
    }

    async fn get_quota_totals(
        &self,
        sales_person: &str,
        categories: &GoalCategories,
    ) -> Result<QuotaTotals, AppError> {
        let row = sqlx::query_as::<_, QuotaRow>(
            r#"
            SELECT
                CAST(SUM(CASE WHEN item_group = ? THEN target_amount ELSE 0 END) AS DECIMAL(21, 9)) AS sales_goal,
                CAST(SUM(CASE WHEN item_group = ? THEN target_amount ELSE 0 END) AS DECIMAL(21, 9)) AS sil_goal
            FROM `tabTarget Detail`
            WHERE parent = ?
                AND parenttype = 'Sales Person'
            "#,
        )
        .bind(&categories.sales_goal)
        .bind(&categories.sil)
        .bind(sales_person)
        .fetch_one(&self.pool)
        .await?;

        Ok(QuotaTotals {
            sales_goal: or_zero(row.sales_goal),
            sil_goal: or_zero(row.sil_goal),
        })
    }

    async fn get_total_sales(
        &self,
        sales_person: &str,
        filters: &ReportFilters,
    ) -> Result<RevenueTotal, AppError> {
        let mut builder = QueryBuilder::<MySql>::new(
            r#"
            SELECT CAST(SUM(si.grand_total) AS DECIMAL(21, 9)) AS total
            FROM `tabSales Invoice` si
            INNER JOIN `tabSales Team` st
                ON st.parent = si.name AND st.parenttype = 'Sales Invoice'
            WHERE si.docstatus = 1
                AND st.sales_person = "#,
        );
        builder.push_bind(sales_person);
        push_posting_window(&mut builder, filters);

        let row = builder
            .build_query_as::<TotalRow>()
            .fetch_one(&self.pool)
            .await?;

        Ok(RevenueTotal::new(or_zero(row.total)))
    }

    async fn get_category_sales(
        &self,
        sales_person: &str,
        item_group: &str,
        filters: &ReportFilters,
    ) -> Result<RevenueTotal, AppError> {
        let mut builder = QueryBuilder::<MySql>::new(
            r#"
            SELECT CAST(SUM(sii.amount) AS DECIMAL(21, 9)) AS total
            FROM `tabSales Invoice` si
            INNER JOIN `tabSales Team` st
                ON st.parent = si.name AND st.parenttype = 'Sales Invoice'
            INNER JOIN `tabSales Invoice Item` sii ON sii.parent = si.name
            INNER JOIN `tabItem` item ON item.name = sii.item_code
            WHERE si.docstatus = 1
                AND st.sales_person = "#,
        );
        builder.push_bind(sales_person);
        builder.push(" AND item.item_group = ").push_bind(item_group);
        push_posting_window(&mut builder, filters);

        let row = builder
            .build_query_as::<TotalRow>()
            .fetch_one(&self.pool)
            .await?;

        Ok(RevenueTotal::new(or_zero(row.total)))
    }
}

// Query behaviour against a live schema is covered by
// tests/integration/mysql_report_repository_test.rs
