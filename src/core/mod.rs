pub mod add;
pub mod backup;
pub mod calculator;
pub mod calendar;
pub mod del;
pub mod edit;
pub mod log;
pub mod summary;
