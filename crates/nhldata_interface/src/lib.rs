pub mod errors;
pub mod nhl;
pub mod stats;
pub mod storage;
