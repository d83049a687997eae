use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

/// Display strings for the dashboard header, derived from one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockFields {
    /// 12-hour time, e.g. "3:07 PM".
    pub time: String,
    pub day_name: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

impl ClockFields {
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let (is_pm, hour) = now.hour12();
        Self {
            time: format!("{}:{:02} {}", hour, now.minute(), if is_pm { "PM" } else { "AM" }),
            day_name: weekday_name(now.weekday()).to_string(),
            day: now.day().to_string(),
            month: month_name(now.month()).to_string(),
            year: now.year().to_string(),
        }
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
