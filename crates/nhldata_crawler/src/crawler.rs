use tracing::{debug, info, instrument};

use nhldata_interface::errors::Result;
use nhldata_interface::nhl::model::DateRange;
use nhldata_interface::nhl::service::NhlServiceHandle;
use nhldata_interface::storage::model::StorageKey;
use nhldata_interface::storage::service::StorageServiceHandle;

use crate::export::to_csv;
use crate::player_stats::player_rows;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    pub dates: usize,
    pub games: usize,
    pub rows: usize,
}

/// Writes one CSV file of skater stats per game, keyed by date and game id.
///
/// Games are processed strictly in schedule order and each file is written
/// before the next box score is fetched. The first failure aborts the crawl;
/// files already written stay in place and are overwritten on the next run.
pub struct Crawler {
    nhl_service: NhlServiceHandle,
    storage_service: StorageServiceHandle,
}

impl Crawler {
    pub fn new(nhl_service: NhlServiceHandle, storage_service: StorageServiceHandle) -> Self {
        Self {
            nhl_service,
            storage_service,
        }
    }

    #[instrument(skip_all, fields(start = %range.start(), end = %range.end()))]
    pub async fn crawl(&self, range: &DateRange) -> Result<CrawlSummary> {
        info!("starting crawl");

        let schedule = self.nhl_service.get_schedule(range).await?;
        let mut summary = CrawlSummary::default();

        for schedule_date in &schedule.dates {
            let game_date = schedule_date.game_date()?;
            summary.dates += 1;

            for game in &schedule_date.games {
                let box_score = self.nhl_service.get_game_box_score(game.gamePk).await?;
                debug!(game_id = game.gamePk, %game_date, "fetched box score");

                let rows = player_rows(&box_score);
                let key = StorageKey::new(game.gamePk, game_date);

                self.storage_service.store_game(&key, to_csv(&rows)?).await?;
                info!(
                    key = %key,
                    bucket = self.storage_service.bucket(),
                    rows = rows.len(),
                    "wrote game file"
                );

                summary.games += 1;
                summary.rows += rows.len();
            }
        }

        info!(
            dates = summary.dates,
            games = summary.games,
            rows = summary.rows,
            "file writes complete"
        );
        Ok(summary)
    }
}
