// Settings module
// In-memory only; nothing is persisted across sessions.

use chrono_tz::Tz;

use crate::models::slot::IntervalType;

/// Clock rendering preference for slot times and the hour gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

pub struct Settings {
    /// Zone the recipient's times are shown in.
    pub target_timezone: Tz,
    pub time_format: TimeFormat,
    pub interval: IntervalType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_timezone: Tz::America__New_York,
            time_format: TimeFormat::TwelveHour,
            interval: IntervalType::FifteenMin,
        }
    }
}
