//! Numeric interval bounds with per-end inclusivity.

use serde::{Deserialize, Serialize};

/// A numeric interval with independently inclusive or exclusive ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower end of the interval.
    pub lower: f64,
    /// Upper end of the interval.
    pub upper: f64,
    /// Whether the lower end itself is inside the interval.
    pub lower_inclusive: bool,
    /// Whether the upper end itself is inside the interval.
    pub upper_inclusive: bool,
}

impl Bounds {
    /// Creates an interval from its four parameters.
    pub fn new(lower: f64, upper: f64, lower_inclusive: bool, upper_inclusive: bool) -> Bounds {
        Bounds {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        }
    }

    /// The interval `(lower, +inf]` backing a greater-than check.
    pub fn above(lower: f64) -> Bounds {
        Bounds::new(lower, f64::INFINITY, false, true)
    }

    /// The interval `[lower, +inf]` backing a greater-or-equal check.
    pub fn at_least(lower: f64) -> Bounds {
        Bounds::new(lower, f64::INFINITY, true, true)
    }

    /// The interval `[-inf, upper)` backing a less-than check.
    pub fn below(upper: f64) -> Bounds {
        Bounds::new(f64::NEG_INFINITY, upper, true, false)
    }

    /// The interval `[-inf, upper]` backing a less-or-equal check.
    pub fn at_most(upper: f64) -> Bounds {
        Bounds::new(f64::NEG_INFINITY, upper, true, true)
    }

    /// Tests whether the interval contains `value`.
    pub fn contains(&self, value: f64) -> bool {
        !(value < self.lower
            || value > self.upper
            || (value == self.lower && !self.lower_inclusive)
            || (value == self.upper && !self.upper_inclusive))
    }

    /// Renders the interval around a labelled quantity, e.g.
    /// `42 <= "foo" < 84`.
    pub fn describe(&self, label: &str) -> String {
        let low_symbol = if self.lower_inclusive { "<=" } else { "<" };
        let up_symbol = if self.upper_inclusive { "<=" } else { "<" };
        format!(
            "{} {} \"{}\" {} {}",
            self.lower, low_symbol, label, up_symbol, self.upper
        )
    }
}
