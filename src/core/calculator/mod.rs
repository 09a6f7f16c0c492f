pub mod aggregate;
pub mod shift;

pub use aggregate::{daily_series, summarize};
pub use shift::{ShiftCalculator, ShiftResult};
