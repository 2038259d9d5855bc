use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::roster::Player;
use crate::scoring::ScoreResult;

/// A player with its calculated score for display
pub struct ScoredPlayer<'a> {
    pub player: &'a Player,
    pub score: f64,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a point total with two decimals, e.g. "18.00"
pub fn format_points(points: f64) -> String {
    format!("{:.2}", points)
}

/// Format a raw stat value, dropping ".0" on whole numbers (300, 10.5)
fn format_stat_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format players as a ranked table with columns: Index, Name, Pos, Team, Pts
/// Index column: 3 chars (fits "99."), right-aligned
/// Pts column is right-aligned, 8 chars wide (fits "-9999.99")
pub fn format_roster_table(players: &[ScoredPlayer], use_colors: bool) -> String {
    if players.is_empty() {
        return "No players found.".to_string();
    }

    let term_width = get_terminal_width();

    // Index 3 + space, two-space separators, Pos 4, Team 4, Pts 8
    let fixed_width = 3 + 1 + 2 + 4 + 2 + 4 + 2 + 8;
    let longest_name = players
        .iter()
        .map(|row| row.player.name.chars().count())
        .max()
        .unwrap_or(0);

    let name_width = match term_width {
        Some(width) if width > fixed_width + 10 => longest_name.min(width - fixed_width),
        Some(_) => longest_name.min(20),
        // No terminal (pipe), don't truncate
        None => longest_name,
    };

    players
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let name = truncate_name(&row.player.name, name_width);
            let name_padded = format!("{:<width$}", name, width = name_width);
            let position_padded = format!("{:<4}", row.player.position);
            let team_padded = format!("{:<4}", row.player.team);
            let points_padded = format!("{:>8}", format_points(row.score));

            if use_colors {
                format!(
                    "{} {}  {}  {}  {}",
                    index_str.dimmed(),
                    name_padded.cyan(),
                    position_padded.magenta(),
                    team_padded.green(),
                    points_padded.bold()
                )
            } else {
                format!(
                    "{} {}  {}  {}  {}",
                    index_str, name_padded, position_padded, team_padded, points_padded
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format search results as one line per player
/// Format: " - {name} ({team}, {position}) => {points} pts"
pub fn format_search_results(players: &[ScoredPlayer], use_colors: bool) -> String {
    if players.is_empty() {
        return "No players found.".to_string();
    }

    players
        .iter()
        .map(|row| format_search_line(row, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_search_line(row: &ScoredPlayer, use_colors: bool) -> String {
    let points = format_points(row.score);
    if use_colors {
        format!(
            " - {} ({}, {}) => {} pts",
            row.player.name.bold(),
            row.player.team.green(),
            row.player.position.magenta(),
            points.yellow()
        )
    } else {
        format!(
            " - {} ({}, {}) => {} pts",
            row.player.name, row.player.team, row.player.position, points
        )
    }
}

/// Format a single player's scoring breakdown as a multi-line panel
pub fn format_score_panel(
    player: &Player,
    result: &ScoreResult,
    ppr: f64,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(player.display_tag().bold().to_string());
    } else {
        lines.push(player.display_tag());
    }

    if let Some(bye) = player.bye_week {
        lines.push(format!("  Bye Week: {}", bye));
    }

    if result.breakdown.is_empty() {
        lines.push("  No recorded stats for this player.".to_string());
    } else {
        for contribution in &result.breakdown {
            lines.push(format!(
                "  {}: {} -> {} pts",
                contribution.label,
                format_stat_value(contribution.raw),
                format_points(contribution.points)
            ));
        }
    }

    lines.push(String::new());
    let total = format!("Total: {} pts (PPR: {})", format_points(result.score), ppr);
    if use_colors {
        lines.push(format!("  {}", total.bold()));
    } else {
        lines.push(format!("  {}", total));
    }

    lines.join("\n")
}

/// Format players as tab-separated values for scripting
/// Columns: points, name, position, team (no headers, no colors)
pub fn format_tsv(players: &[ScoredPlayer]) -> String {
    if players.is_empty() {
        return String::new();
    }

    players
        .iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}",
                format_points(row.score),
                row.player.name,
                row.player.position,
                row.player.team
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
