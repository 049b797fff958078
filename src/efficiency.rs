use crate::shot_record::ShotRecord;

/// Possessions used by one free throw attempt.
pub const FREE_THROW_WEIGHT: f64 = 0.44;

/// True Shooting percentage (0-100 scale, unrounded) for one player's game.
///
/// Returns exactly `0.0` when the player took no field goal and no free
/// throw attempts.
pub fn true_shooting_percentage(record: &ShotRecord) -> f64 {
    let points = record.points() as f64;
    let fga = record.field_goal_attempts() as f64;
    let fta = f64::from(record.ft_attempted);

    let total_attempts = fga + FREE_THROW_WEIGHT * fta;
    if total_attempts == 0.0 {
        return 0.0;
    }

    (points / (2.0 * total_attempts)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot_record::parse_game_date;

    fn record(fg2: (u32, u32), fg3: (u32, u32), ft: (u32, u32)) -> ShotRecord {
        ShotRecord {
            game_id: 1,
            player_id: 1,
            game_date: parse_game_date("01/02/2023").unwrap(),
            fg2_attempted: fg2.0,
            fg2_made: fg2.1,
            fg3_attempted: fg3.0,
            fg3_made: fg3.1,
            ft_attempted: ft.0,
            ft_made: ft.1,
        }
    }

    #[test]
    fn test_no_attempts_is_zero() {
        assert_eq!(true_shooting_percentage(&record((0, 0), (0, 0), (0, 0))), 0.0);
    }

    #[test]
    fn test_no_attempts_ignores_makes() {
        // makes without attempts are not validated
        assert_eq!(true_shooting_percentage(&record((0, 3), (0, 2), (0, 1))), 0.0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(
            true_shooting_percentage(&record((4, 2), (7, 2), (3, 3))),
            52.75974025974026
        );
        assert_eq!(
            true_shooting_percentage(&record((8, 5), (5, 1), (2, 2))),
            54.034582132564836
        );
    }

    #[test]
    fn test_two_point_only_shooting() {
        assert_eq!(true_shooting_percentage(&record((10, 5), (0, 0), (0, 0))), 50.0);
    }

    #[test]
    fn test_three_point_only_shooting() {
        assert_eq!(true_shooting_percentage(&record((0, 0), (4, 2), (0, 0))), 75.0);
    }

    #[test]
    fn test_free_throws_only_can_exceed_one_hundred() {
        assert_eq!(
            true_shooting_percentage(&record((0, 0), (0, 0), (4, 4))),
            113.63636363636364
        );
    }
}
