//! Timezone conversion and clock formatting for grid slots.
//!
//! A slot's wall-clock is assembled in the user's local zone and converted
//! to the chosen target zone as a true fixed-instant conversion before
//! formatting. The target-zone catalog is fixed and not user-extensible.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::models::settings::TimeFormat;

/// One entry of the target-zone catalog: an IANA zone plus the label shown
/// in the picker.
#[derive(Debug, Clone, Copy)]
pub struct TimezoneOption {
    pub zone: Tz,
    pub label: &'static str,
}

/// Representative global offsets, grouped roughly west to east.
pub const TIMEZONE_OPTIONS: [TimezoneOption; 36] = [
    // Americas
    TimezoneOption { zone: Tz::America__Los_Angeles, label: "Los Angeles (GMT-8/-7)" },
    TimezoneOption { zone: Tz::America__Denver, label: "Denver (GMT-7/-6)" },
    TimezoneOption { zone: Tz::America__Chicago, label: "Chicago (GMT-6/-5)" },
    TimezoneOption { zone: Tz::America__New_York, label: "New York (GMT-5/-4)" },
    TimezoneOption { zone: Tz::America__Halifax, label: "Halifax (GMT-4/-3)" },
    TimezoneOption { zone: Tz::America__St_Johns, label: "St. Johns (GMT-3:30/-2:30)" },
    TimezoneOption { zone: Tz::America__Sao_Paulo, label: "São Paulo (GMT-3)" },
    TimezoneOption { zone: Tz::America__Argentina__Buenos_Aires, label: "Buenos Aires (GMT-3)" },
    TimezoneOption { zone: Tz::Atlantic__Azores, label: "Azores (GMT-1/0)" },
    // Europe & Africa
    TimezoneOption { zone: Tz::Europe__London, label: "London (GMT+0/+1)" },
    TimezoneOption { zone: Tz::Europe__Paris, label: "Paris (GMT+1/+2)" },
    TimezoneOption { zone: Tz::Europe__Berlin, label: "Berlin (GMT+1/+2)" },
    TimezoneOption { zone: Tz::Europe__Rome, label: "Rome (GMT+1/+2)" },
    TimezoneOption { zone: Tz::Europe__Athens, label: "Athens (GMT+2/+3)" },
    TimezoneOption { zone: Tz::Europe__Helsinki, label: "Helsinki (GMT+2/+3)" },
    TimezoneOption { zone: Tz::Europe__Istanbul, label: "Istanbul (GMT+3)" },
    TimezoneOption { zone: Tz::Europe__Moscow, label: "Moscow (GMT+3)" },
    TimezoneOption { zone: Tz::Africa__Cairo, label: "Cairo (GMT+2)" },
    TimezoneOption { zone: Tz::Africa__Johannesburg, label: "Johannesburg (GMT+2)" },
    TimezoneOption { zone: Tz::Africa__Lagos, label: "Lagos (GMT+1)" },
    // Middle East
    TimezoneOption { zone: Tz::Asia__Dubai, label: "Dubai (GMT+4)" },
    TimezoneOption { zone: Tz::Asia__Tehran, label: "Tehran (GMT+3:30/+4:30)" },
    TimezoneOption { zone: Tz::Asia__Jerusalem, label: "Jerusalem (GMT+2/+3)" },
    // Asia
    TimezoneOption { zone: Tz::Asia__Kolkata, label: "Mumbai/Delhi (GMT+5:30)" },
    TimezoneOption { zone: Tz::Asia__Dhaka, label: "Dhaka (GMT+6)" },
    TimezoneOption { zone: Tz::Asia__Bangkok, label: "Bangkok (GMT+7)" },
    TimezoneOption { zone: Tz::Asia__Singapore, label: "Singapore (GMT+8)" },
    TimezoneOption { zone: Tz::Asia__Shanghai, label: "Shanghai/Beijing (GMT+8)" },
    TimezoneOption { zone: Tz::Asia__Hong_Kong, label: "Hong Kong (GMT+8)" },
    TimezoneOption { zone: Tz::Asia__Tokyo, label: "Tokyo (GMT+9)" },
    TimezoneOption { zone: Tz::Asia__Seoul, label: "Seoul (GMT+9)" },
    // Australia & Pacific
    TimezoneOption { zone: Tz::Australia__Perth, label: "Perth (GMT+8)" },
    TimezoneOption { zone: Tz::Australia__Adelaide, label: "Adelaide (GMT+9:30/+10:30)" },
    TimezoneOption { zone: Tz::Australia__Sydney, label: "Sydney/Melbourne (GMT+10/+11)" },
    TimezoneOption { zone: Tz::Pacific__Auckland, label: "Auckland (GMT+12/+13)" },
    TimezoneOption { zone: Tz::Pacific__Fiji, label: "Fiji (GMT+12/+13)" },
];

/// Human label for a catalog zone; falls back to the IANA name.
pub fn zone_label(zone: Tz) -> &'static str {
    TIMEZONE_OPTIONS
        .iter()
        .find(|opt| opt.zone == zone)
        .map(|opt| opt.label)
        .unwrap_or_else(|| zone.name())
}

/// Service for converting and formatting slot times.
pub struct TimezoneService;

impl TimezoneService {
    /// Detect the host's IANA zone name once at startup.
    pub fn detect_local() -> String {
        match iana_time_zone::get_timezone() {
            Ok(name) => name,
            Err(err) => {
                log::warn!("Could not detect local timezone, assuming UTC: {err}");
                "UTC".to_string()
            }
        }
    }

    /// The local instant a slot stands for.
    ///
    /// Returns `None` only when the wall-clock falls inside a DST gap; on
    /// an ambiguous fold the earlier instant is taken.
    pub fn slot_local_datetime(date: NaiveDate, hour: u8, minute: u8) -> Option<DateTime<Local>> {
        date.and_hms_opt(u32::from(hour), u32::from(minute), 0)?
            .and_local_timezone(Local)
            .earliest()
    }

    /// The same instant seen from `zone`.
    pub fn slot_in_zone(
        date: NaiveDate,
        hour: u8,
        minute: u8,
        zone: Tz,
    ) -> Option<DateTime<Tz>> {
        Self::slot_local_datetime(date, hour, minute).map(|dt| dt.with_timezone(&zone))
    }

    /// Format any zoned time per the 12h/24h preference.
    pub fn format_clock<Z: TimeZone>(time: &DateTime<Z>, format: TimeFormat) -> String
    where
        Z::Offset: std::fmt::Display,
    {
        match format {
            TimeFormat::TwentyFourHour => time.format("%H:%M").to_string(),
            TimeFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
        }
    }

    /// Cell text: the slot's clock time as seen in the target zone.
    ///
    /// A slot that falls in a local DST gap has no instant to convert, so
    /// its raw local wall-clock is shown instead.
    pub fn slot_display(
        date: NaiveDate,
        hour: u8,
        minute: u8,
        zone: Tz,
        format: TimeFormat,
    ) -> String {
        match Self::slot_in_zone(date, hour, minute, zone) {
            Some(target) => Self::format_clock(&target, format),
            None => format!("{hour:02}:{minute:02}"),
        }
    }

    /// Tooltip text: local time followed by the target-zone time.
    pub fn slot_tooltip(
        date: NaiveDate,
        hour: u8,
        minute: u8,
        zone: Tz,
        format: TimeFormat,
    ) -> String {
        match Self::slot_local_datetime(date, hour, minute) {
            Some(local) => {
                let target = local.with_timezone(&zone);
                format!(
                    "{} ({})",
                    Self::format_clock(&local, format),
                    Self::format_clock(&target, format)
                )
            }
            None => format!("{hour:02}:{minute:02}"),
        }
    }

    /// Hour-gutter label, e.g. "09:00" or "9:00 AM" (midnight "12:00 AM",
    /// noon "12:00 PM").
    pub fn hour_label(hour: u8, format: TimeFormat) -> String {
        match format {
            TimeFormat::TwentyFourHour => format!("{hour:02}:00"),
            TimeFormat::TwelveHour => match hour {
                0 => "12:00 AM".to_string(),
                h if h < 12 => format!("{h}:00 AM"),
                12 => "12:00 PM".to_string(),
                h => format!("{}:00 PM", h - 12),
            },
        }
    }
}
