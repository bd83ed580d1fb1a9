use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// Goal attainment as a percentage, held at two decimal places
///
/// Rendered for display with a `%` suffix and trailing zeros trimmed:
/// `50%`, `42.86%`, `0%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GoalPercent(Decimal);

/// Attainment bands used by the report viewer to colour percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttainmentBand {
    /// 100% or more of the goal
    Achieved,
    /// At least 75% of the goal
    Near,
    /// Some progress, under 75%
    Below,
    /// Nothing recorded against the goal
    Idle,
}

impl GoalPercent {
    pub const ZERO: GoalPercent = GoalPercent(Decimal::ZERO);

    const SCALE: u32 = 2;

    /// Percentage of `goal` reached by `actual`
    ///
    /// A goal of zero (or less) yields `ZERO` without dividing. Results too
    /// large for a decimal saturate at `Decimal::MAX`, or `Decimal::MIN` when
    /// `actual` is negative.
    pub fn of(actual: Decimal, goal: Decimal) -> Self {
        if goal <= Decimal::ZERO {
            return Self::ZERO;
        }

        let saturated = if actual.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        };
        let percent = actual
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(goal))
            .unwrap_or(saturated);

        GoalPercent(percent.round_dp(Self::SCALE))
    }

    /// The percentage as a number (e.g. `42.86`)
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn band(&self) -> AttainmentBand {
        if self.0 >= Decimal::ONE_HUNDRED {
            AttainmentBand::Achieved
        } else if self.0 >= Decimal::from(75) {
            AttainmentBand::Near
        } else if self.0 > Decimal::ZERO {
            AttainmentBand::Below
        } else {
            AttainmentBand::Idle
        }
    }
}

impl fmt::Display for GoalPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

impl Serialize for GoalPercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl AttainmentBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttainmentBand::Achieved => "achieved",
            AttainmentBand::Near => "near",
            AttainmentBand::Below => "below",
            AttainmentBand::Idle => "idle",
        }
    }
}

impl fmt::Display for AttainmentBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
