//! Command implementations and terminal rendering

pub mod analyze;
pub mod profiles;
pub mod setup;
pub mod ui;
