pub mod crawler;
pub mod export;
pub mod logger;
pub mod player_stats;
