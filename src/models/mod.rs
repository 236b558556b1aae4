// Module exports for models

pub mod dua;
pub mod schedule;
pub mod texts;
