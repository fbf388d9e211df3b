use csv::{Terminator, WriterBuilder};

use nhldata_interface::errors::{AppError, Result};
use nhldata_interface::stats::model::{PlayerRow, PLAYER_COLUMNS};

fn csv_error(e: impl std::fmt::Display) -> AppError {
    AppError::CsvError { msg: e.to_string() }
}

/// Serializes the rows of one game into CSV text.
///
/// The header is always written, so a game without skaters still yields a
/// header-only file.
pub fn to_csv(rows: &[PlayerRow]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(PLAYER_COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }

    writer.into_inner().map_err(csv_error)
}
