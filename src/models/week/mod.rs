//! Week navigation: the displayed week is a pure function of today's date
//! and a non-negative offset in weeks. Weeks always start on Monday.

use chrono::{Duration, NaiveDate};

use crate::utils::date::{week_days, week_start_monday};

/// Offset-based week navigator.
///
/// Forward navigation is unbounded; backward navigation clamps at 0, so
/// the current week is the earliest navigable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeekNavigator {
    offset: u32,
}

impl WeekNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn next(&mut self) {
        self.offset += 1;
    }

    pub fn previous(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn can_go_previous(&self) -> bool {
        self.offset > 0
    }

    /// Monday of the displayed week.
    pub fn week_start(&self, today: NaiveDate) -> NaiveDate {
        week_start_monday(today) + Duration::weeks(i64::from(self.offset))
    }

    /// The 7 consecutive dates of the displayed week.
    pub fn days(&self, today: NaiveDate) -> [NaiveDate; 7] {
        week_days(self.week_start(today))
    }

    /// Parenthesized qualifier shown under the week header.
    pub fn offset_label(&self) -> String {
        match self.offset {
            0 => "(This Week)".to_string(),
            1 => "(Next Week)".to_string(),
            n => format!("({n} weeks ahead)"),
        }
    }

    /// Date range header, e.g. "Aug 25 - Aug 31, 2026".
    pub fn range_label(&self, today: NaiveDate) -> String {
        let days = self.days(today);
        format!(
            "{} - {}",
            days[0].format("%b %-d"),
            days[6].format("%b %-d, %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use chrono::Datelike;

    fn wednesday() -> NaiveDate {
        // Wednesday, Dec 4, 2024
        NaiveDate::from_ymd_opt(2024, 12, 4).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday() {
        let nav = WeekNavigator::new();
        let start = nav.week_start(wednesday());
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
        assert_eq!(start.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_previous_at_zero_is_a_no_op() {
        let mut nav = WeekNavigator::new();
        assert!(!nav.can_go_previous());
        nav.previous();
        assert_eq!(nav.offset(), 0);
        assert_eq!(nav.week_start(wednesday()), WeekNavigator::new().week_start(wednesday()));
    }

    #[test]
    fn test_next_shifts_dates_by_seven_days_per_step() {
        let mut nav = WeekNavigator::new();
        let base = nav.week_start(wednesday());
        for step in 1..=5u32 {
            nav.next();
            assert_eq!(nav.week_start(wednesday()), base + Duration::days(7 * i64::from(step)));
        }
        nav.previous();
        assert_eq!(nav.offset(), 4);
        assert!(nav.can_go_previous());
    }

    #[test]
    fn test_days_are_seven_consecutive_dates() {
        let nav = WeekNavigator::new();
        let days = nav.days(wednesday());
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6].weekday(), Weekday::Sun);
    }

    #[test]
    fn test_offset_labels() {
        let mut nav = WeekNavigator::new();
        assert_eq!(nav.offset_label(), "(This Week)");
        nav.next();
        assert_eq!(nav.offset_label(), "(Next Week)");
        nav.next();
        nav.next();
        assert_eq!(nav.offset_label(), "(3 weeks ahead)");
    }

    #[test]
    fn test_range_label() {
        let nav = WeekNavigator::new();
        assert_eq!(nav.range_label(wednesday()), "Dec 2 - Dec 8, 2024");
    }
}
