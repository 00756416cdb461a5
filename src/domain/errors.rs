use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid cutoff time: {0}. Expected 24-hour HH:MM")]
    InvalidCutoffTime(String),
    #[error("Delivery lead days must not be negative, got {0}")]
    NegativeLeadDays(i64),
    #[error("Delivery lead days must be at most {max}, got {value}")]
    LeadDaysOutOfRange { value: i64, max: u32 },
    #[error("Date option window must be at most {max} days, got {value}")]
    OptionWindowOutOfRange { value: u32, max: u32 },
    #[error("Delivery date out of supported range")]
    DateOutOfRange,
    #[error("Unknown delivery time slot: {0}")]
    InvalidTimeSlot(String),
    #[error("Shop is closed: {0}")]
    ShopClosed(String),
    #[error("A delivery date is required for scheduled delivery")]
    DeliveryDateRequired,
    #[error("Invalid delivery date: {0}")]
    InvalidDeliveryDate(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
