use actix_web::{web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::{AttainmentBand, Result};
use crate::modules::reports::models::{GoalAttainmentRow, GoalReport, ReportColumn, ReportFilters};
use crate::modules::reports::services::ReportService;

/// Query parameters for the regional dashboard endpoint
///
/// Other filters the report viewer sends along (company, fiscal_year, ...)
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct GoalReportQuery {
    /// Start of the posting-date window (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub from_date: Option<String>,
    /// End of the posting-date window (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub to_date: Option<String>,
}

/// Report payload in the viewer's `columns` / `result` shape
#[derive(Debug, Serialize)]
pub struct GoalReportResponse {
    pub columns: Vec<ReportColumn>,
    pub result: Vec<GoalAttainmentRowResponse>,
}

/// One report row
#[derive(Debug, Serialize)]
pub struct GoalAttainmentRowResponse {
    pub sales_person: String,
    pub total_sales: String, // Decimal as string for JSON precision
    pub sales_goal: String,
    pub current_sil: String,
    pub sil_goal: String,
    pub sales_goal_percent: String, // e.g. "42.86%"
    pub sil_goal_percent: String,
    pub sales_goal_indicator: AttainmentBand,
    pub sil_goal_indicator: AttainmentBand,
}

impl From<GoalReport> for GoalReportResponse {
    fn from(report: GoalReport) -> Self {
        Self {
            columns: report.columns,
            result: report
                .rows
                .into_iter()
                .map(GoalAttainmentRowResponse::from)
                .collect(),
        }
    }
}

impl From<GoalAttainmentRow> for GoalAttainmentRowResponse {
    fn from(row: GoalAttainmentRow) -> Self {
        Self {
            sales_goal_indicator: row.sales_goal_percent.band(),
            sil_goal_indicator: row.sil_goal_percent.band(),
            sales_person: row.sales_person,
            total_sales: row.total_sales.normalize().to_string(),
            sales_goal: row.sales_goal.normalize().to_string(),
            current_sil: row.current_sil.normalize().to_string(),
            sil_goal: row.sil_goal.normalize().to_string(),
            sales_goal_percent: row.sales_goal_percent.to_string(),
            sil_goal_percent: row.sil_goal_percent.to_string(),
        }
    }
}

/// GET /reports/regional-dashboard
///
/// Returns goal attainment per enabled sales person for the optional
/// `from_date` / `to_date` window.
pub async fn get_regional_dashboard(
    service: web::Data<ReportService>,
    query: web::Query<GoalReportQuery>,
) -> HttpResponse {
    match handle_get_regional_dashboard(service, query).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to generate regional dashboard: {}", e);
            e.error_response()
        }
    }
}

async fn handle_get_regional_dashboard(
    service: web::Data<ReportService>,
    query: web::Query<GoalReportQuery>,
) -> Result<GoalReportResponse> {
    let filters = ReportFilters::parse(query.from_date.as_deref(), query.to_date.as_deref())?;

    let report = service.produce_report(&filters).await?;

    Ok(GoalReportResponse::from(report))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/regional-dashboard", web::get().to(get_regional_dashboard)),
    );
}
