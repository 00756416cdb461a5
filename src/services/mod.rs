pub mod business_clock;
pub mod delivery_scheduler;

pub use business_clock::*;
pub use delivery_scheduler::*;
