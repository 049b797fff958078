use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Reader;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::shot_record::ShotRecord;

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads shot records from a CSV file whose header uses the external keys
/// (`gameID`, `playerID`, `gameDate`, ...).
pub fn read_shot_records_csv(path: &Path) -> Result<Vec<ShotRecord>> {
    let records = read_shot_records_csv_from(open(path)?)?;
    info!(path = %path.display(), records = records.len(), "loaded CSV shot records");
    Ok(records)
}

pub fn read_shot_records_csv_from<R: Read>(reader: R) -> Result<Vec<ShotRecord>> {
    let mut rdr = Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: ShotRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Reads shot records from a JSON array of objects.
pub fn read_shot_records_json(path: &Path) -> Result<Vec<ShotRecord>> {
    let records = read_shot_records_json_from(open(path)?)?;
    info!(path = %path.display(), records = records.len(), "loaded JSON shot records");
    Ok(records)
}

pub fn read_shot_records_json_from<R: Read>(reader: R) -> Result<Vec<ShotRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Picks the reader by file extension: `.json` is JSON, anything else CSV.
pub fn read_shot_records(path: &Path) -> Result<Vec<ShotRecord>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(path = %path.display(), is_json, "reading shot records");

    if is_json {
        read_shot_records_json(path)
    } else {
        read_shot_records_csv(path)
    }
}
