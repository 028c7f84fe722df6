//! Slot grid models: the (day, hour, minute) cell identity and the
//! interval granularity that decides which minute rows exist.

/// One selectable grid cell.
///
/// `day` is the column index into the displayed week (0 = Monday through
/// 6 = Sunday), not a calendar date; the week model resolves it to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedSlot {
    /// Day column, 0..=6 (Monday first)
    pub day: u8,
    /// Hour of day, 0..=23
    pub hour: u8,
    /// Minute within the hour; one of 0, 15, 30, 45
    pub minute: u8,
}

impl SelectedSlot {
    pub fn new(day: u8, hour: u8, minute: u8) -> Self {
        Self { day, hour, minute }
    }
}

/// Minute-level granularity of the grid.
///
/// Changing the interval never rescales or deletes stored selections;
/// slots whose minute is not a step of the new interval simply stop
/// rendering as distinct cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalType {
    #[default]
    FifteenMin,
    ThirtyMin,
    OneHour,
}

impl IntervalType {
    pub const ALL: [IntervalType; 3] = [
        IntervalType::FifteenMin,
        IntervalType::ThirtyMin,
        IntervalType::OneHour,
    ];

    /// The minute rows rendered for each hour at this granularity.
    pub fn minutes(self) -> &'static [u8] {
        match self {
            IntervalType::FifteenMin => &[0, 15, 30, 45],
            IntervalType::ThirtyMin => &[0, 30],
            IntervalType::OneHour => &[0],
        }
    }

    pub fn rows_per_hour(self) -> usize {
        self.minutes().len()
    }

    pub fn label(self) -> &'static str {
        match self {
            IntervalType::FifteenMin => "15 min",
            IntervalType::ThirtyMin => "30 min",
            IntervalType::OneHour => "1 hour",
        }
    }
}
