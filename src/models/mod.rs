pub mod client;
pub mod month;
pub mod record;

pub use client::{Client, ClientRevenue};
pub use month::YearMonth;
pub use record::DailyRecord;
