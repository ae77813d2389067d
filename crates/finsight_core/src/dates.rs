//! Date helpers for due-date math and goal projections
//!
//! Every function takes explicit dates; nothing in the engine reads a clock.
//! A "month" in projections is a fixed 30-day window, which keeps month
//! counts stable regardless of which calendar month the report runs in.

use jiff::civil::Date;

/// Days from `today` until `date`; negative when `date` is in the past.
#[must_use]
pub fn days_until(today: Date, date: Date) -> i32 {
    (date - today).get_days()
}

/// Whole 30-day months from `today` until `date`, floored at one.
///
/// Past or same-day targets still yield one month so division by a
/// remaining-month count is always defined.
#[must_use]
pub fn months_until(today: Date, date: Date) -> u32 {
    let days = days_until(today, date);
    if days <= 0 {
        return 1;
    }
    (days as u32).div_ceil(30).max(1)
}

/// Add whole calendar months, clamping the day to the target month's end.
#[must_use]
pub fn add_months(date: Date, months: i32) -> Date {
    let total = i32::from(date.year()) * 12 + i32::from(date.month()) - 1 + months;
    let year = total.div_euclid(12) as i16;
    let month = (total.rem_euclid(12) + 1) as i8;
    let last = jiff::civil::date(year, month, 1).days_in_month();
    jiff::civil::date(year, month, date.day().min(last))
}

/// True when both dates fall in the same calendar month
#[must_use]
pub fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn days_until_is_signed() {
        let today = date(2025, 6, 15);
        assert_eq!(days_until(today, date(2025, 6, 18)), 3);
        assert_eq!(days_until(today, date(2025, 6, 15)), 0);
        assert_eq!(days_until(today, date(2025, 6, 10)), -5);
    }

    #[test]
    fn months_until_uses_thirty_day_windows() {
        let today = date(2025, 1, 1);
        assert_eq!(months_until(today, date(2025, 1, 31)), 1);
        assert_eq!(months_until(today, date(2025, 2, 1)), 2);
        // 360 days out is exactly twelve 30-day months
        assert_eq!(months_until(today, date(2025, 12, 27)), 12);
    }

    #[test]
    fn past_targets_count_as_one_month() {
        let today = date(2025, 6, 15);
        assert_eq!(months_until(today, date(2024, 1, 1)), 1);
        assert_eq!(months_until(today, today), 1);
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 11, 15), 3), date(2026, 2, 15));
    }

    #[test]
    fn same_month_requires_year_and_month() {
        assert!(same_month(date(2025, 6, 1), date(2025, 6, 30)));
        assert!(!same_month(date(2025, 6, 1), date(2024, 6, 1)));
        assert!(!same_month(date(2025, 6, 1), date(2025, 7, 1)));
    }
}
