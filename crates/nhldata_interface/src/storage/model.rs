use std::fmt;

use chrono::NaiveDate;

// Object key of a single game file: "<YYYYMMDD>_<game id>.csv".
// The date part is fixed width, so distinct (date, game) pairs never collide
// and re-running a date range overwrites the same objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    game_id: u64,
    game_date: NaiveDate,
}

impl StorageKey {
    pub fn new(game_id: u64, game_date: NaiveDate) -> Self {
        Self { game_id, game_date }
    }

    pub fn key(&self) -> String {
        format!("{}_{}.csv", self.game_date.format("%Y%m%d"), self.game_id)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.key())
    }
}
