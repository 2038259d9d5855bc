use crate::roster::Player;

/// Default reception weight (full-point PPR).
pub const DEFAULT_PPR: f64 = 1.0;

/// Points awarded per unit of a stat.
#[derive(Debug, Clone, Copy)]
enum Weight {
    Fixed(f64),
    PerReception,
}

/// Canonical scoring table. Breakdown lines render in this order.
const STAT_WEIGHTS: [(&str, &str, Weight); 9] = [
    ("passing_yards", "Passing Yards", Weight::Fixed(0.04)),
    ("passing_tds", "Passing TDs", Weight::Fixed(4.0)),
    ("interceptions", "Interceptions", Weight::Fixed(-2.0)),
    ("rushing_yards", "Rushing Yards", Weight::Fixed(0.1)),
    ("rushing_tds", "Rushing TDs", Weight::Fixed(6.0)),
    ("receiving_yards", "Receiving Yards", Weight::Fixed(0.1)),
    ("receiving_tds", "Receiving TDs", Weight::Fixed(6.0)),
    ("receptions", "Receptions", Weight::PerReception),
    ("fumbles_lost", "Fumbles Lost", Weight::Fixed(-2.0)),
];

#[derive(Debug, Clone)]
pub struct StatContribution {
    pub label: &'static str, // e.g. "Passing Yards"
    pub raw: f64,            // value as recorded in the stat sheet
    pub points: f64,         // contribution to the total, unrounded
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: Vec<StatContribution>,
}

/// Score a player's stat sheet with the given reception weight.
///
/// Pure function of the sheet and `ppr`: absent keys contribute 0, unknown
/// keys are ignored, and the total is rounded to 2 decimal places. The
/// breakdown lists only stats the sheet actually records, in canonical order.
pub fn calculate_score(player: &Player, ppr: f64) -> ScoreResult {
    let mut total = 0.0;
    let mut breakdown = Vec::new();

    for (key, label, weight) in STAT_WEIGHTS {
        let per_unit = match weight {
            Weight::Fixed(points) => points,
            Weight::PerReception => ppr,
        };
        let raw = player.stats.get(key);
        let points = raw * per_unit;
        total += points;

        if player.stats.contains(key) {
            breakdown.push(StatContribution { label, raw, points });
        }
    }

    ScoreResult {
        score: round_points(total),
        breakdown,
    }
}

/// Round to 2 decimal places, half away from zero.
fn round_points(points: f64) -> f64 {
    (points * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::StatSheet;
    use std::collections::HashMap;

    fn sheet(pairs: &[(&str, f64)]) -> StatSheet {
        StatSheet::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn sample_player(stats: StatSheet) -> Player {
        Player::new(
            1,
            "Test Player".to_string(),
            "QB".to_string(),
            "TST".to_string(),
            None,
            stats,
        )
    }

    #[test]
    fn test_empty_stats_score_zero() {
        let player = sample_player(StatSheet::default());
        assert_eq!(calculate_score(&player, 1.0).score, 0.0);
        assert_eq!(calculate_score(&player, 0.5).score, 0.0);
        assert_eq!(calculate_score(&player, 0.0).score, 0.0);
    }

    #[test]
    fn test_passing_line() {
        // 300*0.04 + 2*4.0 + 1*(-2.0) = 12 + 8 - 2
        let player = sample_player(sheet(&[
            ("passing_yards", 300.0),
            ("passing_tds", 2.0),
            ("interceptions", 1.0),
        ]));
        assert_eq!(calculate_score(&player, 1.0).score, 18.0);
    }

    #[test]
    fn test_receiving_line() {
        // 100*0.1 + 5*1.0 = 10 + 5
        let player = sample_player(sheet(&[
            ("receiving_yards", 100.0),
            ("receptions", 5.0),
        ]));
        assert_eq!(calculate_score(&player, 1.0).score, 15.0);
    }

    #[test]
    fn test_reception_weight_scales_receptions() {
        let player = sample_player(sheet(&[("receptions", 5.0)]));
        assert_eq!(calculate_score(&player, 0.5).score, 2.5);
        assert_eq!(calculate_score(&player, 1.0).score, 5.0);
    }

    #[test]
    fn test_linearity_in_reception_weight() {
        let player = sample_player(sheet(&[
            ("receptions", 7.0),
            ("receiving_yards", 83.0),
            ("rushing_tds", 1.0),
        ]));
        let low = calculate_score(&player, 0.5).score;
        let high = calculate_score(&player, 1.5).score;
        // delta is receptions * (w2 - w1), within rounding tolerance
        assert!((high - low - 7.0).abs() < 0.01);
    }

    #[test]
    fn test_determinism() {
        let player = sample_player(sheet(&[
            ("passing_yards", 4183.0),
            ("passing_tds", 26.0),
            ("rushing_yards", 307.0),
        ]));
        let first = calculate_score(&player, 1.0).score;
        let second = calculate_score(&player, 1.0).score;
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_stats_subtract() {
        let player = sample_player(sheet(&[
            ("interceptions", 3.0),
            ("fumbles_lost", 2.0),
        ]));
        assert_eq!(calculate_score(&player, 1.0).score, -10.0);
    }

    #[test]
    fn test_unknown_stat_keys_ignored() {
        let player = sample_player(sheet(&[
            ("kick_return_yards", 500.0),
            ("passing_tds", 1.0),
        ]));
        assert_eq!(calculate_score(&player, 1.0).score, 4.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 123 rushing yards = 12.3 points; 37 passing yards = 1.48
        let player = sample_player(sheet(&[
            ("rushing_yards", 123.0),
            ("passing_yards", 37.0),
        ]));
        assert_eq!(calculate_score(&player, 1.0).score, 13.78);
    }

    #[test]
    fn test_breakdown_lists_only_recorded_stats() {
        let player = sample_player(sheet(&[("passing_yards", 300.0)]));
        let result = calculate_score(&player, 1.0);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].label, "Passing Yards");
        assert_eq!(result.breakdown[0].raw, 300.0);
    }

    #[test]
    fn test_breakdown_canonical_order() {
        let player = sample_player(sheet(&[
            ("fumbles_lost", 1.0),
            ("receptions", 5.0),
            ("passing_yards", 300.0),
        ]));
        let result = calculate_score(&player, 1.0);
        let labels: Vec<&str> = result.breakdown.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Passing Yards", "Receptions", "Fumbles Lost"]);
    }

    #[test]
    fn test_breakdown_empty_for_empty_sheet() {
        let player = sample_player(StatSheet::default());
        let result = calculate_score(&player, 1.0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_points_sum_to_score() {
        let player = sample_player(sheet(&[
            ("passing_yards", 300.0),
            ("passing_tds", 2.0),
            ("interceptions", 1.0),
        ]));
        let result = calculate_score(&player, 1.0);
        let sum: f64 = result.breakdown.iter().map(|c| c.points).sum();
        assert!((sum - result.score).abs() < 0.005);
    }
}
