pub mod add;
pub mod auth;
pub mod calculator;
pub mod del;
pub mod form;
pub mod log;
pub mod report;
