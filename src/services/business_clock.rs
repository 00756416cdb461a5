use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Wall-clock source expressed in the shop's business timezone.
///
/// The scheduler only sees naive business-local times, so every default
/// "now" has to come through here instead of the host's local clock.
#[derive(Debug, Clone, Copy)]
pub struct BusinessClock {
    timezone: Tz,
}

impl BusinessClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn now(&self) -> NaiveDateTime {
        self.localize(Utc::now())
    }

    pub fn localize(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.timezone).naive_local()
    }
}

impl Default for BusinessClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Manila)
    }
}
