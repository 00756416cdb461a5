use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

use crate::domain::errors::{ScheduleError, ScheduleResult};
use crate::models::{
    CutoffTime, DeliveryAssignment, DeliveryDateValidation, DeliverySchedule, ShopEvent, TimeSlot,
};

/// Number of calendar days scanned for selectable delivery dates
pub const DEFAULT_OPTION_DAYS: u32 = 7;

/// Largest selectable-date window a caller may ask for
pub const MAX_OPTION_DAYS: u32 = 60;

const UNAVAILABLE_MESSAGE: &str = "Ordering is currently unavailable.";

/// Compute the delivery schedule of `event` as seen at `now`.
///
/// `now` must already be expressed in the business timezone. The daily cutoff
/// is inclusive: an order placed exactly at the cutoff minute rolls over.
/// Fails only when the projected dates fall outside chrono's date range.
pub fn calculate_delivery_schedule(
    event: &ShopEvent,
    now: NaiveDateTime,
) -> ScheduleResult<DeliverySchedule> {
    if event.is_shop_closed {
        tracing::debug!("Shop closed, no delivery schedule");
        return Ok(DeliverySchedule::closed(event.closure_message.clone(), now));
    }

    let is_past_cutoff = event
        .daily_cutoff_time
        .map(|cutoff| past_cutoff_at(now, cutoff))
        .unwrap_or(false);

    let lead_days = event.delivery_lead_days;
    let total_days = lead_days
        .checked_add(u32::from(is_past_cutoff))
        .ok_or(ScheduleError::DateOutOfRange)?;

    let earliest_delivery_date = add_days_to_datetime(now, lead_days)?;
    let suggested_delivery_date = add_days_to_datetime(now, total_days)?;

    tracing::debug!(
        lead_days,
        is_past_cutoff,
        earliest = %earliest_delivery_date,
        suggested = %suggested_delivery_date,
        "Calculated delivery schedule"
    );

    Ok(DeliverySchedule {
        can_order: true,
        reason: None,
        earliest_delivery_date,
        suggested_delivery_date,
        is_past_cutoff,
        cutoff_time: event.daily_cutoff_time,
        available_time_slots: TimeSlot::ALL.to_vec(),
    })
}

fn past_cutoff_at(now: NaiveDateTime, cutoff: CutoffTime) -> bool {
    let cutoff_instant = now.date().and_time(cutoff.as_naive_time());
    now >= cutoff_instant
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn checked_add(date: NaiveDate, days: u64) -> ScheduleResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(ScheduleError::DateOutOfRange)
}

/// Advance `date` by `days` days.
///
/// With `skip_weekends`, Saturdays and Sundays are stepped over without being
/// counted. Every 7 calendar days hold exactly 5 weekdays, so whole weeks are
/// jumped and only the last 1..=5 counted days are walked.
pub fn add_days(date: NaiveDate, days: u32, skip_weekends: bool) -> ScheduleResult<NaiveDate> {
    if !skip_weekends {
        return checked_add(date, u64::from(days));
    }
    if days == 0 {
        return Ok(date);
    }

    let whole_weeks = u64::from((days - 1) / 5);
    let mut current = checked_add(date, whole_weeks * 7)?;
    let mut remaining = days - (days - 1) / 5 * 5;

    while remaining > 0 {
        current = checked_add(current, 1)?;
        if is_weekend(current) {
            continue;
        }
        remaining -= 1;
    }

    Ok(current)
}

fn add_days_to_datetime(datetime: NaiveDateTime, days: u32) -> ScheduleResult<NaiveDateTime> {
    Ok(add_days(datetime.date(), days, false)?.and_time(datetime.time()))
}

/// Check a customer-chosen delivery date against the current schedule
pub fn is_valid_delivery_date(
    selected_date: NaiveDate,
    event: &ShopEvent,
    now: NaiveDateTime,
) -> ScheduleResult<DeliveryDateValidation> {
    let schedule = calculate_delivery_schedule(event, now)?;

    if !schedule.can_order {
        return Ok(DeliveryDateValidation {
            valid: false,
            error: schedule.reason,
        });
    }

    if selected_date < now.date() {
        return Ok(DeliveryDateValidation::invalid(
            "Delivery date cannot be in the past.",
        ));
    }

    let earliest = schedule.earliest_delivery_date.date();
    if selected_date < earliest {
        return Ok(DeliveryDateValidation::invalid(format!(
            "Earliest delivery date is {}.",
            format_delivery_date(earliest)
        )));
    }

    Ok(DeliveryDateValidation::valid())
}

/// Weekday delivery dates within `days_ahead` calendar days of the earliest date.
///
/// `days_ahead` above [`MAX_OPTION_DAYS`] is rejected. The window stops early
/// if it would run past the last representable date.
pub fn get_delivery_date_options(
    event: &ShopEvent,
    days_ahead: u32,
    now: NaiveDateTime,
) -> ScheduleResult<Vec<NaiveDate>> {
    if days_ahead > MAX_OPTION_DAYS {
        return Err(ScheduleError::OptionWindowOutOfRange {
            value: days_ahead,
            max: MAX_OPTION_DAYS,
        });
    }

    let schedule = calculate_delivery_schedule(event, now)?;
    if !schedule.can_order {
        return Ok(Vec::new());
    }

    let start = schedule.earliest_delivery_date.date();
    Ok(start
        .iter_days()
        .take(days_ahead as usize)
        .filter(|date| !is_weekend(*date))
        .collect())
}

/// Long-form English date, e.g. "Wednesday, December 17, 2025"
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// 12-hour rendering of a cutoff, e.g. "2:00 PM"
pub fn format_cutoff_time(cutoff: CutoffTime) -> String {
    cutoff.as_naive_time().format("%-I:%M %p").to_string()
}

/// Customer-facing summary of a schedule
pub fn get_delivery_message(schedule: &DeliverySchedule) -> String {
    if !schedule.can_order {
        return schedule
            .reason
            .clone()
            .unwrap_or_else(|| UNAVAILABLE_MESSAGE.to_string());
    }

    let suggested = format_delivery_date(schedule.suggested_delivery_date.date());

    match (schedule.is_past_cutoff, schedule.cutoff_time) {
        (true, Some(cutoff)) => format!(
            "Orders placed after {} will be delivered on {}.",
            format_cutoff_time(cutoff),
            suggested
        ),
        _ => format!("Expected delivery: {}", suggested),
    }
}

/// Resolve the delivery date and slot for a checkout.
///
/// Events without scheduled delivery always get the suggested date and ignore
/// whatever the customer sent.
pub fn assign_delivery(
    event: &ShopEvent,
    requested_date: Option<NaiveDate>,
    requested_slot: Option<TimeSlot>,
    now: NaiveDateTime,
) -> ScheduleResult<DeliveryAssignment> {
    let schedule = calculate_delivery_schedule(event, now)?;

    if !schedule.can_order {
        return Err(ScheduleError::ShopClosed(
            schedule.reason.unwrap_or_else(|| UNAVAILABLE_MESSAGE.to_string()),
        ));
    }

    if !event.allow_scheduled_delivery {
        return Ok(DeliveryAssignment {
            delivery_date: schedule.suggested_delivery_date.date(),
            time_slot: None,
            customer_selected: false,
        });
    }

    let delivery_date = requested_date.ok_or(ScheduleError::DeliveryDateRequired)?;

    let validation = is_valid_delivery_date(delivery_date, event, now)?;
    if !validation.valid {
        return Err(ScheduleError::InvalidDeliveryDate(
            validation.error.unwrap_or_default(),
        ));
    }

    if let Some(slot) = requested_slot {
        if !schedule.available_time_slots.contains(&slot) {
            return Err(ScheduleError::InvalidTimeSlot(slot.to_string()));
        }
    }

    Ok(DeliveryAssignment {
        delivery_date,
        time_slot: requested_slot,
        customer_selected: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_counts_every_calendar_day() {
        // Friday + 3 lands on Monday
        assert_eq!(add_days(date(2025, 12, 19), 3, false).unwrap(), date(2025, 12, 22));
        assert_eq!(add_days(date(2025, 12, 19), 0, false).unwrap(), date(2025, 12, 19));
    }

    #[test]
    fn test_add_days_skipping_weekends() {
        // Friday + 1 business day is Monday
        assert_eq!(add_days(date(2025, 12, 19), 1, true).unwrap(), date(2025, 12, 22));
        // Wednesday + 5 business days is next Wednesday
        assert_eq!(add_days(date(2025, 12, 17), 5, true).unwrap(), date(2025, 12, 24));
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(add_days(date(2025, 12, 30), 3, false).unwrap(), date(2026, 1, 2));
        assert_eq!(add_days(date(2024, 2, 28), 1, false).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_add_days_skipping_weekends_matches_day_by_day_walk() {
        let walk = |start: NaiveDate, days: u32| {
            let mut current = start;
            let mut remaining = days;
            while remaining > 0 {
                current = current.succ_opt().unwrap();
                if !is_weekend(current) {
                    remaining -= 1;
                }
            }
            current
        };

        // one start date for every weekday, Monday 2025-12-15 .. Sunday 2025-12-21
        for start_day in 15..=21 {
            let start = date(2025, 12, start_day);
            for days in 0..=23 {
                assert_eq!(add_days(start, days, true).unwrap(), walk(start, days));
            }
        }
    }

    #[test]
    fn test_add_days_saturday_start_ends_on_friday() {
        assert_eq!(add_days(date(2025, 12, 20), 5, true).unwrap(), date(2025, 12, 26));
    }

    #[test]
    fn test_add_days_past_max_date_is_error() {
        assert_eq!(add_days(NaiveDate::MAX, 1, false), Err(ScheduleError::DateOutOfRange));
        assert_eq!(add_days(NaiveDate::MAX, 1, true), Err(ScheduleError::DateOutOfRange));
        assert_eq!(
            add_days(date(2025, 12, 17), u32::MAX, false),
            Err(ScheduleError::DateOutOfRange)
        );
        assert_eq!(
            add_days(date(2025, 12, 17), u32::MAX, true),
            Err(ScheduleError::DateOutOfRange)
        );
        assert_eq!(add_days(NaiveDate::MAX, 0, true), Ok(NaiveDate::MAX));
    }

    #[test]
    fn test_format_delivery_date() {
        assert_eq!(
            format_delivery_date(date(2025, 12, 17)),
            "Wednesday, December 17, 2025"
        );
        assert_eq!(format_delivery_date(date(2026, 1, 5)), "Monday, January 5, 2026");
    }

    #[test]
    fn test_format_cutoff_time() {
        assert_eq!(format_cutoff_time(CutoffTime::new(14, 0).unwrap()), "2:00 PM");
        assert_eq!(format_cutoff_time(CutoffTime::new(0, 30).unwrap()), "12:30 AM");
        assert_eq!(format_cutoff_time(CutoffTime::new(12, 5).unwrap()), "12:05 PM");
        assert_eq!(format_cutoff_time(CutoffTime::new(9, 45).unwrap()), "9:45 AM");
    }
}
