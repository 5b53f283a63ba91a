//! Play command - a human plays white against the AI
//!
//! The loop reads moves in dash notation (`40-33`, `26-8-26`) and re-prompts
//! until a legal one is entered. End of input quits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use checkers_core::{AiConfig, AlphaBetaAI, GameResult, GameState, Heuristic, Move, Player};

use crate::render::{render, render_unicode};

#[derive(Args)]
pub struct PlayArgs {
    /// AI search depth
    #[arg(long)]
    pub depth: Option<u32>,

    /// AI heuristic: material or weighted
    #[arg(long)]
    pub heuristic: Option<Heuristic>,

    /// AI config JSON file (flags override its values)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Draw the board with unicode draughts glyphs
    #[arg(long)]
    pub unicode: bool,
}

/// Default AI strength for interactive play
const DEFAULT_DEPTH: u32 = 10;

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = resolve_config(&args, seed)?;
    tracing::info!(
        "Starting game: AI plays black (depth={}, heuristic={})",
        config.depth,
        config.heuristic
    );

    let mut ai = AlphaBetaAI::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(&mut stdin.lock(), &mut stdout.lock(), &mut ai, args.unicode)?;
    Ok(())
}

/// Merge config file, flags and seed
fn resolve_config(args: &PlayArgs, seed: Option<u64>) -> Result<AiConfig> {
    let mut config = match &args.config {
        Some(path) => AiConfig::load(path)
            .with_context(|| format!("Failed to load AI config: {}", path.display()))?,
        None => AiConfig::alpha_beta(DEFAULT_DEPTH),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(heuristic) = args.heuristic {
        config.heuristic = heuristic;
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

/// Drive one game. Returns the final result, or `None` if input ran out.
pub fn run_game<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    ai: &mut AlphaBetaAI,
    unicode: bool,
) -> Result<Option<GameResult>> {
    let draw = |state: &GameState| if unicode { render_unicode(state) } else { render(state) };
    let mut state = GameState::new_game();
    write!(out, "{}", draw(&state))?;

    loop {
        let result = state.outcome();
        if let Some(winner) = result.winner() {
            writeln!(out, "{} Wins in {} moves", side_name(winner), state.ply())?;
            return Ok(Some(result));
        }

        writeln!(out, "\n{} To Play", side_name(state.side_to_move()))?;

        let mv = match state.side_to_move() {
            Player::White => match read_human_move(input, out, &state)? {
                Some(mv) => {
                    writeln!(out, "Player chooses {}", mv)?;
                    mv
                }
                None => {
                    writeln!(out, "Goodbye")?;
                    return Ok(None);
                }
            },
            Player::Black => {
                writeln!(out, "AI is thinking...")?;
                let mv = ai.best_move(&state)?;
                writeln!(out, "AI chooses {}", mv)?;
                mv
            }
        };

        state = state.apply_move(&mv)?;
        write!(out, "{}", draw(&state))?;
    }
}

/// Prompt until a legal move is entered; `None` on end of input
fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    state: &GameState,
) -> Result<Option<Move>> {
    let legal = state.legal_moves();
    let options: Vec<String> = legal.iter().map(|mv| mv.to_string()).collect();

    loop {
        writeln!(out, "Move options are: [{}]", options.join(", "))?;
        write!(out, "Please Enter Move: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<Move>() {
            Ok(mv) if legal.contains(&mv) => return Ok(Some(mv)),
            Ok(mv) => {
                tracing::debug!("rejected illegal move {}", mv);
                writeln!(out, "Sorry that move isn't legal, please try again")?;
            }
            Err(e) => writeln!(out, "Sorry, {}", e)?,
        }
    }
}

fn side_name(player: Player) -> &'static str {
    match player {
        Player::White => "White",
        Player::Black => "Black",
    }
}
