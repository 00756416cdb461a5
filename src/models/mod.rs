pub mod delivery;
pub mod shop_event;

pub use delivery::*;
pub use shop_event::*;
