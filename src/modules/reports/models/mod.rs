pub mod goal_report;
pub mod report_column;
pub mod report_filters;

pub use goal_report::{
    GoalAttainmentRow, GoalCategories, GoalReport, QuotaTotals, RevenueTotal, SalesPerson,
};
pub use report_column::{goal_report_columns, ColumnType, ReportColumn};
pub use report_filters::ReportFilters;
