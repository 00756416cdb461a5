use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::shop_event::CutoffTime;
use crate::domain::errors::ScheduleError;

pub const DEFAULT_CLOSED_REASON: &str = "Shop is currently closed";

/// Delivery windows offered for every open schedule, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "Morning (8:00 AM - 12:00 PM)")]
    Morning,
    #[serde(rename = "Afternoon (12:00 PM - 3:00 PM)")]
    Afternoon,
    #[serde(rename = "Late Afternoon (3:00 PM - 6:00 PM)")]
    LateAfternoon,
    #[serde(rename = "Evening (6:00 PM - 9:00 PM)")]
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::LateAfternoon,
        TimeSlot::Evening,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (8:00 AM - 12:00 PM)",
            TimeSlot::Afternoon => "Afternoon (12:00 PM - 3:00 PM)",
            TimeSlot::LateAfternoon => "Late Afternoon (3:00 PM - 6:00 PM)",
            TimeSlot::Evening => "Evening (6:00 PM - 9:00 PM)",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TimeSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.label() == trimmed)
            .ok_or_else(|| ScheduleError::InvalidTimeSlot(s.to_string()))
    }
}

/// Derived delivery dates and flags for one event at one instant.
///
/// Recomputed on every read; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySchedule {
    pub can_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub earliest_delivery_date: NaiveDateTime,
    pub suggested_delivery_date: NaiveDateTime,
    pub is_past_cutoff: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_time: Option<CutoffTime>,
    pub available_time_slots: Vec<TimeSlot>,
}

impl DeliverySchedule {
    pub fn closed(reason: Option<String>, now: NaiveDateTime) -> Self {
        Self {
            can_order: false,
            reason: Some(reason.unwrap_or_else(|| DEFAULT_CLOSED_REASON.to_string())),
            earliest_delivery_date: now,
            suggested_delivery_date: now,
            is_past_cutoff: false,
            cutoff_time: None,
            available_time_slots: Vec::new(),
        }
    }
}

/// Outcome of checking a customer-chosen delivery date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDateValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryDateValidation {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Date and slot an order is fulfilled on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAssignment {
    pub delivery_date: NaiveDate,
    pub time_slot: Option<TimeSlot>,
    pub customer_selected: bool,
}
