use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::domain::errors::ScheduleError;

/// Longest lead time an event may configure
pub const MAX_LEAD_DAYS: u32 = 365;

/// Daily order cutoff, a wall-clock time in the business timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CutoffTime(NaiveTime);

impl CutoffTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(CutoffTime)
            .ok_or_else(|| ScheduleError::InvalidCutoffTime(format!("{:02}:{:02}", hour, minute)))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

/// Parse a zero-padded 24-hour "HH:MM" cutoff string
pub fn parse_cutoff_time(value: &str) -> Result<CutoffTime, ScheduleError> {
    static CUTOFF_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = CUTOFF_REGEX
        .get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("Invalid cutoff regex"));

    let caps = re
        .captures(value.trim())
        .ok_or_else(|| ScheduleError::InvalidCutoffTime(value.to_string()))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| ScheduleError::InvalidCutoffTime(value.to_string()))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| ScheduleError::InvalidCutoffTime(value.to_string()))?;

    CutoffTime::new(hour, minute)
}

impl FromStr for CutoffTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cutoff_time(s)
    }
}

impl TryFrom<String> for CutoffTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_cutoff_time(&value)
    }
}

impl From<CutoffTime> for String {
    fn from(cutoff: CutoffTime) -> Self {
        cutoff.to_string()
    }
}

impl fmt::Display for CutoffTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Delivery configuration of a shop event, validated at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ShopEventInput")]
pub struct ShopEvent {
    pub daily_cutoff_time: Option<CutoffTime>,
    pub delivery_lead_days: u32,
    pub is_shop_closed: bool,
    pub closure_message: Option<String>,
    pub allow_scheduled_delivery: bool,
}

impl ShopEvent {
    pub fn new(delivery_lead_days: u32, daily_cutoff_time: Option<CutoffTime>) -> Self {
        Self {
            daily_cutoff_time,
            delivery_lead_days,
            is_shop_closed: false,
            closure_message: None,
            allow_scheduled_delivery: false,
        }
    }

    pub fn closed(closure_message: Option<String>) -> Self {
        Self {
            daily_cutoff_time: None,
            delivery_lead_days: 0,
            is_shop_closed: true,
            closure_message,
            allow_scheduled_delivery: false,
        }
    }
}

/// Event configuration as stored by the shop admin, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEventInput {
    #[serde(default)]
    pub daily_cutoff_time: Option<String>,
    #[serde(default)]
    pub delivery_lead_days: i64,
    #[serde(default)]
    pub is_shop_closed: bool,
    #[serde(default)]
    pub closure_message: Option<String>,
    #[serde(default)]
    pub allow_scheduled_delivery: bool,
}

impl TryFrom<ShopEventInput> for ShopEvent {
    type Error = ScheduleError;

    fn try_from(input: ShopEventInput) -> Result<Self, Self::Error> {
        let daily_cutoff_time = match input.daily_cutoff_time.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_cutoff_time(raw)?),
        };

        let lead_days = input.delivery_lead_days;
        if lead_days < 0 {
            return Err(ScheduleError::NegativeLeadDays(lead_days));
        }
        let delivery_lead_days = u32::try_from(lead_days)
            .ok()
            .filter(|days| *days <= MAX_LEAD_DAYS)
            .ok_or(ScheduleError::LeadDaysOutOfRange {
                value: lead_days,
                max: MAX_LEAD_DAYS,
            })?;

        Ok(ShopEvent {
            daily_cutoff_time,
            delivery_lead_days,
            is_shop_closed: input.is_shop_closed,
            closure_message: input.closure_message,
            allow_scheduled_delivery: input.allow_scheduled_delivery,
        })
    }
}
