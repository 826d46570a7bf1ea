pub mod collector;
pub mod gameapi;
pub mod rate_limit;
pub mod report;
