pub mod mocks;
pub mod payloads;

#[allow(unused_imports)]
pub use mocks::{CountingLimiter, FakeLadder, RecordingReporter};
#[allow(unused_imports)]
pub use payloads::{match_detail, match_detail_with_teams};
