//! Battle command - AI-vs-AI games between two configurations
//!
//! - run(): orchestration
//! - play_battle(), report_results(): phases
//! - play_single_game(), compute_battle_statistics(): steps

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use checkers_core::{AiConfig, AlphaBetaAI, GameResult, GameState, Heuristic, Move, Player};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct BattleArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// White AI search depth
    #[arg(long, default_value = "4")]
    pub white_depth: u32,

    /// White AI heuristic: material or weighted
    #[arg(long, default_value = "material")]
    pub white_heuristic: Heuristic,

    /// White AI config JSON file (replaces the white depth/heuristic flags)
    #[arg(long, value_name = "FILE")]
    pub white_config: Option<PathBuf>,

    /// Black AI search depth
    #[arg(long, default_value = "4")]
    pub black_depth: u32,

    /// Black AI heuristic: material or weighted
    #[arg(long, default_value = "material")]
    pub black_heuristic: Heuristic,

    /// Black AI config JSON file (replaces the black depth/heuristic flags)
    #[arg(long, value_name = "FILE")]
    pub black_config: Option<PathBuf>,

    /// Plies after which an undecided game counts as a draw
    #[arg(long, default_value = "300")]
    pub max_plies: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    result: GameResult,
    plies: u32,
    moves: Vec<Move>,
}

/// Aggregated battle results
#[derive(Clone, Debug)]
struct BattleResults {
    games: Vec<GameRecord>,
    white_wins: usize,
    black_wins: usize,
    draws: usize,
    avg_plies: f32,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run battle command
pub fn run(args: BattleArgs, seed: Option<u64>) -> Result<()> {
    let (white, black) = load_configs(&args)?;

    tracing::info!(
        "Starting battle: white depth={} {} vs black depth={} {} ({} games)",
        white.depth,
        white.heuristic,
        black.depth,
        black.heuristic,
        args.games
    );

    let results = play_battle(&white, &black, &args, seed);
    report_results(&results, &args)
}

// ============================================================================
// PHASES
// ============================================================================

/// Build both AI configs from files or flags
fn load_configs(args: &BattleArgs) -> Result<(AiConfig, AiConfig)> {
    let white = match &args.white_config {
        Some(path) => AiConfig::load(path)
            .with_context(|| format!("Failed to load white config: {}", path.display()))?,
        None => AiConfig::alpha_beta(args.white_depth).with_heuristic(args.white_heuristic),
    };
    let black = match &args.black_config {
        Some(path) => AiConfig::load(path)
            .with_context(|| format!("Failed to load black config: {}", path.display()))?,
        None => AiConfig::alpha_beta(args.black_depth).with_heuristic(args.black_heuristic),
    };
    Ok((white, black))
}

/// Play all games in the battle
fn play_battle(white: &AiConfig, black: &AiConfig, args: &BattleArgs, seed: Option<u64>) -> BattleResults {
    let mut rng = create_rng(seed);
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        let record = play_single_game(white, black, game_num + 1, args.max_plies, &mut rng);

        tracing::info!(
            "Game {}: {:?} ({} plies)",
            record.game_number,
            record.result,
            record.plies
        );
        tracing::debug!(
            "Game {} moves: {}",
            record.game_number,
            record.moves.iter().map(|mv| mv.to_string()).collect::<Vec<_>>().join(" ")
        );

        games.push(record);
    }

    compute_battle_statistics(games)
}

/// Report battle results
fn report_results(results: &BattleResults, args: &BattleArgs) -> Result<()> {
    if args.json {
        println!("{}", json_results(results)?);
    } else {
        print!("{}", text_results(results));
    }
    Ok(())
}

// ============================================================================
// STEPS
// ============================================================================

/// Play one game from the starting position. Config seeds, when present,
/// are offset by the game number so games differ but stay reproducible.
fn play_single_game(
    white: &AiConfig,
    black: &AiConfig,
    game_number: usize,
    max_plies: u32,
    rng: &mut ChaCha8Rng,
) -> GameRecord {
    let mut white_ai = create_ai(white, game_number, rng);
    let mut black_ai = create_ai(black, game_number, rng);

    let mut state = GameState::new_game();
    let mut moves = Vec::new();

    while state.ply() < max_plies && state.result() == GameResult::Ongoing {
        let ai = match state.side_to_move() {
            Player::White => &mut white_ai,
            Player::Black => &mut black_ai,
        };
        let Ok(mv) = ai.best_move(&state) else {
            break;
        };
        state = match state.apply_move(&mv) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!("AI produced a rejected move: {}", e);
                break;
            }
        };
        moves.push(mv);
    }

    GameRecord {
        game_number,
        result: state.outcome(),
        plies: state.ply(),
        moves,
    }
}

fn create_ai(config: &AiConfig, game_number: usize, rng: &mut ChaCha8Rng) -> AlphaBetaAI {
    let seed = match config.seed {
        Some(seed) => seed.wrapping_add(game_number as u64),
        None => rng.gen(),
    };
    AlphaBetaAI::with_seed(config.depth, config.heuristic, seed)
}

/// Compute aggregate statistics from game records
fn compute_battle_statistics(games: Vec<GameRecord>) -> BattleResults {
    let white_wins = games
        .iter()
        .filter(|g| g.result == GameResult::WhiteWins)
        .count();
    let black_wins = games
        .iter()
        .filter(|g| g.result == GameResult::BlackWins)
        .count();
    let draws = games
        .iter()
        .filter(|g| g.result == GameResult::Ongoing)
        .count();

    let total_plies: u32 = games.iter().map(|g| g.plies).sum();
    let avg_plies = if games.is_empty() {
        0.0
    } else {
        total_plies as f32 / games.len() as f32
    };

    BattleResults {
        games,
        white_wins,
        black_wins,
        draws,
        avg_plies,
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Render results as pretty-printed JSON, moves included
fn json_results(results: &BattleResults) -> Result<String> {
    #[derive(serde::Serialize)]
    struct JsonGame<'a> {
        game_number: usize,
        result: GameResult,
        plies: u32,
        moves: &'a [Move],
    }

    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        total_games: usize,
        white_wins: usize,
        black_wins: usize,
        draws: usize,
        avg_plies: f32,
        white_win_rate: f32,
        games: Vec<JsonGame<'a>>,
    }

    let total = results.games.len();
    let output = JsonOutput {
        total_games: total,
        white_wins: results.white_wins,
        black_wins: results.black_wins,
        draws: results.draws,
        avg_plies: results.avg_plies,
        white_win_rate: percent(results.white_wins, total) / 100.0,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                result: g.result,
                plies: g.plies,
                moves: &g.moves,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize battle results")
}

/// Render results as a text report
fn text_results(results: &BattleResults) -> String {
    let total = results.games.len();
    let mut out = String::new();

    out.push_str("\n=== Battle Results ===\n");
    out.push_str(&format!("Total games: {}\n", total));
    out.push_str(&format!("White wins:  {} ({:.1}%)\n", results.white_wins, percent(results.white_wins, total)));
    out.push_str(&format!("Black wins:  {} ({:.1}%)\n", results.black_wins, percent(results.black_wins, total)));
    out.push_str(&format!("Draws:       {} ({:.1}%)\n", results.draws, percent(results.draws, total)));
    out.push_str(&format!("Avg plies:   {:.1}\n", results.avg_plies));

    out.push_str("\nGame details:\n");
    for game in &results.games {
        out.push_str(&format!("  Game {}: {:?} in {} plies\n", game.game_number, game.result, game.plies));
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
