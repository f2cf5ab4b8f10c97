// Time label utilities
// Display-only formatting of slot and range labels; never used for stored data

use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::settings::GridConfig;
use crate::models::slot::{TimeRange, MINUTES_PER_HOUR};
use crate::services::slot_index::SlotIndex;
use crate::utils::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    TwentyFour,
    Twelve,
}

impl HourCycle {
    /// `a` (am/pm marker) anywhere in the pattern selects the 12-hour clock.
    pub fn from_pattern(pattern: &str) -> Self {
        if pattern.contains('a') {
            HourCycle::Twelve
        } else {
            HourCycle::TwentyFour
        }
    }

    fn chrono_format(self) -> &'static str {
        match self {
            HourCycle::TwentyFour => "%H:%M",
            HourCycle::Twelve => "%I:%M %p",
        }
    }
}

/// Maps a BCP 47 tag (`en-US`) or POSIX name (`en_US`, `de_DE.UTF-8`) to a
/// chrono locale. Unknown tags fall back to `POSIX`.
pub fn parse_locale(tag: &str) -> Locale {
    let name = tag.trim().split('.').next().unwrap_or_default().replace('-', "_");
    match Locale::try_from(name.as_str()) {
        Ok(locale) => locale,
        Err(_) => {
            log::warn!("Unknown locale '{}', falling back to POSIX labels", tag);
            Locale::POSIX
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimeLabelFormatter {
    index: SlotIndex,
    cycle: HourCycle,
    locale: Locale,
}

impl TimeLabelFormatter {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            index: SlotIndex::new(config.clone()),
            cycle: HourCycle::from_pattern(config.time_format()),
            locale: parse_locale(config.locale()),
        }
    }

    pub fn cycle(&self) -> HourCycle {
        self.cycle
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Clock time in the configured hour cycle, with the locale's am/pm markers.
    pub fn format_time(&self, hour: u16, minute: u16) -> String {
        let time = NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), 0);
        let anchor = NaiveDate::from_ymd_opt(2000, 1, 1);
        match (anchor, time) {
            (Some(date), Some(time)) => Utc
                .from_utc_datetime(&date.and_time(time))
                .format_localized(self.cycle.chrono_format(), self.locale)
                .to_string()
                .trim_end()
                .to_string(),
            _ => format!("{:02}:{:02}", hour, minute),
        }
    }

    /// Row label such as `09:00–09:09`.
    pub fn slot_label(&self, start: u16) -> String {
        let (end_hour, end_minute) = self.index.slot_end_label(start);
        format!(
            "{}–{}",
            self.format_time(start / MINUTES_PER_HOUR, start % MINUTES_PER_HOUR),
            self.format_time(end_hour, end_minute)
        )
    }

    /// Label for a persisted range, e.g. `Wednesday 14:00–15:29`.
    pub fn range_label(&self, day: usize, range: &TimeRange) -> Result<String, ParseError> {
        let day_label = self
            .index
            .day_label(day)
            .ok_or(ParseError::UnknownDay(day))?;
        let start = SlotIndex::to_minutes(range.start())?;
        let end = SlotIndex::to_minutes(range.end())?;
        Ok(format!(
            "{} {}–{}",
            day_label,
            self.format_time(start / MINUTES_PER_HOUR, start % MINUTES_PER_HOUR),
            self.format_time(end / MINUTES_PER_HOUR, end % MINUTES_PER_HOUR)
        ))
    }
}
