use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::efficiency::true_shooting_percentage;
use crate::shot_record::ShotRecord;

/// Running tally of qualifying players for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAggregate {
    pub game_id: u64,
    pub game_date: NaiveDate,
    pub qualified_count: usize,
}

/// Tallies, per game, the players whose True Shooting percentage is at least
/// `cutoff`.
///
/// Only games with one or more qualifying records appear. Entries are in the
/// order each game first qualified, and carry the date of that first
/// qualifying record.
pub fn aggregate_qualifiers(records: &[ShotRecord], cutoff: f64) -> Vec<GameAggregate> {
    let mut aggregates: Vec<GameAggregate> = Vec::new();
    let mut positions: HashMap<u64, usize> = HashMap::new();

    for record in records {
        let ts_percentage = true_shooting_percentage(record);
        // NaN never qualifies
        if ts_percentage >= cutoff {
            let index = *positions.entry(record.game_id).or_insert_with(|| {
                aggregates.push(GameAggregate {
                    game_id: record.game_id,
                    game_date: record.game_date,
                    qualified_count: 0,
                });
                aggregates.len() - 1
            });
            aggregates[index].qualified_count += 1;
        }
    }

    aggregates
}

/// Returns the distinct ids of games where at least `player_count` players
/// reached `cutoff`, most recent game first.
///
/// Games sharing a date keep the order in which they first qualified.
pub fn find_qualified_games(records: &[ShotRecord], cutoff: f64, player_count: usize) -> Vec<u64> {
    let aggregates = aggregate_qualifiers(records, cutoff);
    let tracked = aggregates.len();

    let mut qualified: Vec<GameAggregate> = aggregates
        .into_iter()
        .filter(|game| game.qualified_count >= player_count)
        .collect();

    // stable: equal dates stay in first-qualifying order
    qualified.sort_by(|a, b| b.game_date.cmp(&a.game_date));

    debug!(
        records = records.len(),
        tracked,
        qualified = qualified.len(),
        cutoff,
        player_count,
        "filtered qualified games"
    );

    qualified.into_iter().map(|game| game.game_id).collect()
}
