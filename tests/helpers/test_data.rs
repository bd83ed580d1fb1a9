// Test Data Factory
//
// Generates unique names so tests sharing a database do not collide.

use chrono::NaiveDate;
use uuid::Uuid;

/// Test data factory for generating unique test data
pub struct TestDataFactory;

impl TestDataFactory {
    /// Random document name with a TEST prefix, e.g. "TEST-SP-1a2b3c4d"
    pub fn random_name(prefix: &str) -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("TEST-{}-{}", prefix, &id[..8])
    }
}

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
