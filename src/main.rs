use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use gridiron::output::{self, ScoredPlayer};
use gridiron::query;
use gridiron::roster::Player;
use gridiron::scoring;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_CONFIG: i32 = 2;

const DEFAULT_DATA_FILE: &str = "data/players.json";

#[derive(Subcommand, Debug)]
enum Commands {
    /// List players ranked by fantasy score
    List {
        /// Keep only players at this position (e.g. QB, RB)
        #[arg(long)]
        position: Option<String>,

        /// Keep only players on this team (e.g. KC, BUF)
        #[arg(long)]
        team: Option<String>,

        /// Show only the top N players after ranking
        #[arg(long)]
        top: Option<usize>,

        /// Points per reception
        #[arg(long)]
        ppr: Option<f64>,

        /// Tab-separated output for scripting (no colors, no headers)
        #[arg(long)]
        tsv: bool,
    },
    /// Search for players by name
    Search {
        /// Case-insensitive substring of the player name
        query: String,

        /// Points per reception
        #[arg(long)]
        ppr: Option<f64>,
    },
    /// Show the scoring breakdown for a single player
    Score {
        /// Player name, or a unique part of it
        name: String,

        /// Points per reception
        #[arg(long)]
        ppr: Option<f64>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "gridiron")]
#[command(about = "Fantasy football roster CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gridiron/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the roster file (overrides the configured data_file)
    #[arg(short, long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = match gridiron::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate configured scoring weight at startup
    if let Some(ppr) = config.ppr {
        if !ppr.is_finite() {
            eprintln!("Config error: ppr must be a finite number");
            std::process::exit(EXIT_CONFIG);
        }
    }

    // Roster path: CLI flag, then config, then built-in default
    let data_file = cli
        .file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    let players = match gridiron::roster::load_players(Path::new(&data_file)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    if players.is_empty() {
        eprintln!("Error: No players loaded from {}", data_file);
        std::process::exit(EXIT_DATA);
    }

    if cli.verbose {
        eprintln!(
            "Loaded {} players from {} in {:?}",
            players.len(),
            data_file,
            start_time.elapsed()
        );
    }

    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::List {
            position,
            team,
            top,
            ppr,
            tsv,
        } => {
            let ppr = resolve_ppr(ppr, config.ppr);
            handle_list(players, position, team, top, ppr, tsv, use_colors);
        }
        Commands::Search { query, ppr } => {
            let ppr = resolve_ppr(ppr, config.ppr);
            handle_search(players, &query, ppr, use_colors);
        }
        Commands::Score { name, ppr } => {
            let ppr = resolve_ppr(ppr, config.ppr);
            handle_score(players, &name, ppr, use_colors);
        }
    }

    if cli.verbose {
        eprintln!();
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

fn resolve_ppr(flag: Option<f64>, config: Option<f64>) -> f64 {
    flag.or(config).unwrap_or(scoring::DEFAULT_PPR)
}

fn score_rows(players: &[Player], ppr: f64) -> Vec<ScoredPlayer> {
    players
        .iter()
        .map(|p| ScoredPlayer {
            player: p,
            score: scoring::calculate_score(p, ppr).score,
        })
        .collect()
}

fn handle_list(
    players: Vec<Player>,
    position: Option<String>,
    team: Option<String>,
    top: Option<usize>,
    ppr: f64,
    tsv: bool,
    use_colors: bool,
) {
    let filtered = query::filter_by_attributes(players, position.as_deref(), team.as_deref());

    if filtered.is_empty() {
        println!("No players found with the given filters.");
        return;
    }

    let ranked = query::limit_top(query::sort_by_score(filtered, ppr), top);
    let rows = score_rows(&ranked, ppr);

    if tsv {
        println!("{}", output::format_tsv(&rows));
        return;
    }

    // Describe active filters, e.g. "Pos=QB | Team=KC | Top=5"
    let mut filter_parts = Vec::new();
    if let Some(pos) = &position {
        filter_parts.push(format!("Pos={}", pos.to_uppercase()));
    }
    if let Some(team) = &team {
        filter_parts.push(format!("Team={}", team.to_uppercase()));
    }
    if let Some(n) = top {
        if n > 0 {
            filter_parts.push(format!("Top={}", n));
        }
    }
    let filter_desc = if filter_parts.is_empty() {
        "All Players".to_string()
    } else {
        filter_parts.join(" | ")
    };

    println!("Player Projections: {}", filter_desc);
    println!("Total: {}", rows.len());
    println!();
    println!("{}", output::format_roster_table(&rows, use_colors));
}

fn handle_search(players: Vec<Player>, query_str: &str, ppr: f64, use_colors: bool) {
    let results = query::search_by_name(players, query_str);

    if results.is_empty() {
        println!("No players found matching '{}'", query_str);
        return;
    }

    println!("Found {} matches for '{}':", results.len(), query_str);
    println!();
    let rows = score_rows(&results, ppr);
    println!("{}", output::format_search_results(&rows, use_colors));
}

fn handle_score(players: Vec<Player>, name: &str, ppr: f64, use_colors: bool) {
    let matches = query::search_by_name(players, name);

    if matches.is_empty() {
        println!("No players found matching '{}'", name);
        return;
    }

    if matches.len() > 1 {
        println!("Multiple players matched '{}'. Please be more specific:", name);
        for player in &matches {
            println!(" - {}", player.display_tag());
        }
        return;
    }

    let player = &matches[0];
    let result = scoring::calculate_score(player, ppr);
    println!("{}", output::format_score_panel(player, &result, ppr, use_colors));
}
