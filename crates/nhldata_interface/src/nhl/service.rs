use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::nhl::model::{DateRange, GameBoxScore, Schedule};

#[async_trait]
pub trait NhlService {
    async fn get_schedule(&self, range: &DateRange) -> Result<Schedule>;
    async fn get_game_box_score(&self, game_id: u64) -> Result<GameBoxScore>;
}

pub type NhlServiceHandle = Arc<dyn NhlService + Send + Sync>;
