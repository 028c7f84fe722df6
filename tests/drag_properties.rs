// Property-based tests for the selection model: toggle involution,
// drag-box laws, and week offset arithmetic.

use availability_calendar::models::selection::{drag_box, SelectionStore};
use availability_calendar::models::slot::{IntervalType, SelectedSlot};
use availability_calendar::models::week::WeekNavigator;
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

fn any_slot() -> impl Strategy<Value = SelectedSlot> {
    (0..7u8, 0..24u8, prop::sample::select(vec![0u8, 15, 30, 45]))
        .prop_map(|(day, hour, minute)| SelectedSlot::new(day, hour, minute))
}

fn any_interval() -> impl Strategy<Value = IntervalType> {
    prop::sample::select(IntervalType::ALL.to_vec())
}

proptest! {
    /// Toggling the same triple twice always restores membership.
    #[test]
    fn prop_toggle_is_an_involution(s in any_slot(), seed in prop::collection::vec(any_slot(), 0..20)) {
        let mut store = SelectionStore::new();
        for pre in seed {
            store.toggle(pre);
        }
        let before = store.is_selected(s);
        store.toggle(s);
        store.toggle(s);
        prop_assert_eq!(store.is_selected(s), before);
    }

    /// The box fill does not depend on which endpoint was the anchor.
    #[test]
    fn prop_drag_box_is_endpoint_symmetric(a in any_slot(), b in any_slot(), interval in any_interval()) {
        prop_assert_eq!(drag_box(a, b, interval), drag_box(b, a, interval));
    }

    /// Every filled slot lies inside the day/hour bounds and on a minute
    /// step of the active interval.
    #[test]
    fn prop_drag_box_stays_in_bounds(a in any_slot(), b in any_slot(), interval in any_interval()) {
        let min_day = a.day.min(b.day);
        let max_day = a.day.max(b.day);
        let min_hour = a.hour.min(b.hour);
        let max_hour = a.hour.max(b.hour);
        for s in drag_box(a, b, interval) {
            prop_assert!((min_day..=max_day).contains(&s.day));
            prop_assert!((min_hour..=max_hour).contains(&s.hour));
            prop_assert!(interval.minutes().contains(&s.minute));
        }
    }

    /// Hours strictly between the endpoints fill every minute step, for
    /// every day in the range.
    #[test]
    fn prop_drag_box_fills_middle_hours(a in any_slot(), b in any_slot(), interval in any_interval()) {
        let min_day = a.day.min(b.day);
        let max_day = a.day.max(b.day);
        let min_hour = a.hour.min(b.hour);
        let max_hour = a.hour.max(b.hour);
        let box_fill = drag_box(a, b, interval);
        for day in min_day..=max_day {
            for hour in (min_hour + 1)..max_hour {
                for &minute in interval.minutes() {
                    prop_assert!(box_fill.contains(&SelectedSlot::new(day, hour, minute)));
                }
            }
        }
    }

    /// A drag replaces whatever was selected before: once the pointer has
    /// moved, the store equals the box fill exactly.
    #[test]
    fn prop_drag_replaces_prior_selection(
        prior in prop::collection::vec(any_slot(), 0..30),
        anchor in any_slot(),
        current in any_slot(),
        interval in any_interval(),
    ) {
        prop_assume!(anchor != current);
        let mut store = SelectionStore::new();
        for s in prior {
            store.toggle(s);
        }
        store.begin_drag(anchor);
        store.update_drag(current, interval);
        store.end_drag();

        let got: std::collections::HashSet<_> = store.iter().copied().collect();
        prop_assert_eq!(got, drag_box(anchor, current, interval));
    }

    /// Forward navigation shifts the Monday by exactly 7 days per step and
    /// backward navigation never crosses the current week.
    #[test]
    fn prop_week_offset_arithmetic(
        forward in 0..200u32,
        backward in 0..400u32,
        days_from_epoch in 0..20000i64,
    ) {
        let today = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days_from_epoch);
        let mut nav = WeekNavigator::new();
        for _ in 0..forward {
            nav.next();
        }
        for _ in 0..backward {
            nav.previous();
        }
        prop_assert_eq!(nav.offset(), forward.saturating_sub(backward));
        let start = nav.week_start(today);
        prop_assert_eq!(start.weekday(), Weekday::Mon);
        prop_assert!(start + chrono::Duration::days(6) >= today || nav.offset() > 0);
    }
}
