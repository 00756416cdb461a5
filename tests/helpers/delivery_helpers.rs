#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime};
use dormshop::models::{CutoffTime, ShopEvent};

/// Business-local timestamp
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .expect("Invalid test timestamp")
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
}

/// Open event with the given lead days and optional "HH:MM" cutoff
pub fn open_event(lead_days: u32, cutoff: Option<&str>) -> ShopEvent {
    let cutoff = cutoff.map(|c| c.parse::<CutoffTime>().expect("Invalid test cutoff"));
    ShopEvent::new(lead_days, cutoff)
}

pub fn scheduled_event(lead_days: u32, cutoff: Option<&str>) -> ShopEvent {
    ShopEvent {
        allow_scheduled_delivery: true,
        ..open_event(lead_days, cutoff)
    }
}

/// Wednesday, December 17, 2025 at 09:00
pub fn wednesday_morning() -> NaiveDateTime {
    at(2025, 12, 17, 9, 0, 0)
}
