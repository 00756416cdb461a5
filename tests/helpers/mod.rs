#![allow(unused_imports)]
pub mod delivery_helpers;

pub use delivery_helpers::*;
