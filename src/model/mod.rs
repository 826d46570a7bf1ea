pub mod fields;
pub mod ids;
pub mod matches;
pub mod summoner;
pub mod tier;
