pub mod formatter;

pub use formatter::{
    format_points, format_roster_table, format_score_panel, format_search_results, format_tsv,
    should_use_colors, ScoredPlayer,
};
