//! Monetary display and rounding utilities
//!
//! The engine does no currency conversion: a [`Currency`] is a display label
//! that picks the symbol and minor-unit count when amounts are rendered.
//! Cents helpers back the allocator's exact-sum arithmetic.

use serde::{Deserialize, Serialize};

/// Display currency label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
}

impl Currency {
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Jpy => "¥",
        }
    }

    /// Digits rendered after the decimal point
    #[must_use]
    pub fn minor_units(&self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Format an amount with symbol, thousands separators, and the
    /// currency's minor-unit count.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let scale = 10_i64.pow(self.minor_units());
        let total_minor = (value.abs() * scale as f64).round() as i64;
        let major = total_minor / scale;
        let minor = total_minor % scale;

        // Thousands separators, built from the right
        let digits = major.to_string();
        let mut reversed = String::new();
        for (i, c) in digits.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                reversed.push(',');
            }
            reversed.push(c);
        }
        let grouped: String = reversed.chars().rev().collect();

        let sign = if value < 0.0 && total_minor > 0 { "-" } else { "" };
        if self.minor_units() == 0 {
            format!("{sign}{}{grouped}", self.symbol())
        } else {
            format!(
                "{sign}{}{grouped}.{minor:0width$}",
                self.symbol(),
                width = self.minor_units() as usize
            )
        }
    }
}

/// Round a major-unit amount to integer cents
#[must_use]
pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Convert integer cents back to a major-unit amount
#[must_use]
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}
