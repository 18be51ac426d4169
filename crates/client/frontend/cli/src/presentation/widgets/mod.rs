//! Dashboard widgets, each rendering one panel of the display set.

pub mod economy;
pub mod header;
pub mod hero;
pub mod messages;
pub mod vitals;
