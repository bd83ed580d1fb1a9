use serde::Serialize;

/// Field types understood by the report viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Link,
    Currency,
    Data,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Link => "Link",
            ColumnType::Currency => "Currency",
            ColumnType::Data => "Data",
        }
    }
}

/// Column descriptor in the shape the report viewer expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    pub fieldname: &'static str,
    pub label: &'static str,
    pub fieldtype: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static str>,
    pub width: u32,
}

impl ReportColumn {
    const fn new(
        fieldname: &'static str,
        label: &'static str,
        fieldtype: ColumnType,
        width: u32,
    ) -> Self {
        Self {
            fieldname,
            label,
            fieldtype,
            options: None,
            width,
        }
    }
}

/// Fixed column schema of the regional dashboard, in display order
pub fn goal_report_columns() -> Vec<ReportColumn> {
    vec![
        ReportColumn {
            options: Some("Sales Person"),
            ..ReportColumn::new("sales_person", "REP", ColumnType::Link, 180)
        },
        ReportColumn::new("total_sales", "Current Account Rev", ColumnType::Currency, 150),
        ReportColumn::new("sales_goal", "Account Goal", ColumnType::Currency, 130),
        ReportColumn::new("current_sil", "Current SIL", ColumnType::Currency, 130),
        ReportColumn::new("sil_goal", "Goal SIL", ColumnType::Currency, 130),
        // Percentages are pre-formatted text ("42.86%"), hence Data
        ReportColumn::new("sales_goal_percent", "REV Goal", ColumnType::Data, 120),
        ReportColumn::new("sil_goal_percent", "SIL Goal", ColumnType::Data, 120),
    ]
}
