use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Posting-date window applied to invoice aggregates
///
/// Both bounds are inclusive. A missing bound leaves that side of the window
/// open, so the default value covers all time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl ReportFilters {
    pub fn new(from_date: Option<NaiveDate>, to_date: Option<NaiveDate>) -> Self {
        Self { from_date, to_date }
    }

    /// Build filters from raw form values as sent by the report viewer
    ///
    /// Blank values mean "no bound". Anything else must be `YYYY-MM-DD`.
    pub fn parse(from_date: Option<&str>, to_date: Option<&str>) -> Result<Self> {
        let filters = Self {
            from_date: parse_date("from_date", from_date)?,
            to_date: parse_date("to_date", to_date)?,
        };
        filters.validate()?;
        Ok(filters)
    }

    /// Reject windows whose lower bound lies after the upper bound
    pub fn validate(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.from_date, self.to_date) {
            if from > to {
                return Err(AppError::validation(format!(
                    "from_date ({}) must be before or equal to to_date ({})",
                    from, to
                )));
            }
        }
        Ok(())
    }

    /// Whether an invoice posted on `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from_date.map_or(true, |from| date >= from)
            && self.to_date.map_or(true, |to| date <= to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from_date.is_none() && self.to_date.is_none()
    }
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            AppError::validation(format!(
                "Invalid {} format: '{}'. Expected YYYY-MM-DD",
                field, raw
            ))
        })
}
