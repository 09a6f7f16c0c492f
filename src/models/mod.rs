pub mod record;
pub mod summary;

pub use record::DailyRecord;
pub use summary::{DailyPoint, Summary};
