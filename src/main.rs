use anyhow::{bail, Context, Result};
use chess_coach::core::{init_logging, load_from_path, load_settings, save_settings, CoachSettings};
use chess_coach::game::ai::{parse_coordinate_move, AIDifficulty, AIOpponent, ChessAIConfig, GameMode};
use chess_coach::game::MoveFeedback;
use chess_engine::constants::START_FEN;
use chess_engine::{GameSession, PieceKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "chess-coach",
    about = "Position analysis, move feedback and a bounded-strength AI opponent"
)]
struct Args {
    /// Read settings from this file instead of the platform config directory
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a position and show the expected line
    Analyze {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        /// Search depth (defaults to the configured analysis depth)
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Recommend a move
    BestMove {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Play a move in coordinate notation (e.g. e2e4) and rate it
    ScoreMove {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(value_name = "MOVE")]
        mv: String,
        /// Promotion piece: q, r, b or n
        #[arg(long)]
        promote: Option<char>,
    },
    /// Let the AI play itself from a position
    Play {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        /// Maximum number of plies
        #[arg(long, default_value_t = 20)]
        plies: usize,
        /// easy, medium or hard (defaults to the configured difficulty)
        #[arg(long)]
        difficulty: Option<AIDifficulty>,
    },
    /// Write the current settings (defaults if none exist) to the config directory
    SaveSettings,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose { "debug" } else { "info" });

    let settings = match &args.settings {
        Some(path) => load_from_path(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => load_settings(),
    };

    match args.command {
        Command::Analyze { fen, depth } => analyze(&settings, &fen, depth),
        Command::BestMove { fen, depth } => best_move(&settings, &fen, depth),
        Command::ScoreMove { fen, mv, promote } => score_move(&settings, &fen, &mv, promote),
        Command::Play {
            fen,
            plies,
            difficulty,
        } => play(&settings, &fen, plies, difficulty),
        Command::SaveSettings => {
            let path = save_settings(&settings)?;
            println!("Settings written to {}", path.display());
            Ok(())
        }
    }
}

fn session_at(settings: &CoachSettings, fen: &str, depth: Option<u32>) -> Result<GameSession> {
    let mut session = GameSession::with_settings(
        settings.eval_weights,
        depth.unwrap_or(settings.analysis_depth),
    );
    session
        .set_fen(fen)
        .with_context(|| format!("cannot load position '{fen}'"))?;
    Ok(session)
}

fn analyze(settings: &CoachSettings, fen: &str, depth: Option<u32>) -> Result<()> {
    let session = session_at(settings, fen, depth)?;
    let analysis = session.analyze()?;

    println!("Position:  {}", session.fen());
    println!("Status:    {:?}", session.status());
    println!(
        "Score:     {:+.2} (depth {}, positive favours White)",
        analysis.score, analysis.depth
    );
    let line: Vec<String> = analysis.best_line.iter().map(|m| m.to_uci()).collect();
    println!("Line:      {}", line.join(" "));

    let features = analysis.positional_features;
    println!("Mobility:  {:+.1}", features.mobility);
    println!("Center:    {:+.1}", features.center_control);
    println!("Activity:  {:+.1}", features.piece_activity);
    println!("King:      {:+.1}", features.king_safety);
    for threat in &analysis.threats {
        println!(
            "Threat:    {}{} ({:?} takes {:?})",
            threat.from, threat.to, threat.attacker, threat.target
        );
    }
    Ok(())
}

fn best_move(settings: &CoachSettings, fen: &str, depth: Option<u32>) -> Result<()> {
    let session = session_at(settings, fen, None)?;
    let depth = depth.unwrap_or_else(|| settings.difficulty.search_depth());
    match session.best_move(depth)? {
        Some(mv) => println!("{}", mv.to_uci()),
        None => println!("(none): {:?}", session.status()),
    }
    Ok(())
}

fn score_move(settings: &CoachSettings, fen: &str, text: &str, promote: Option<char>) -> Result<()> {
    let mut session = session_at(settings, fen, None)?;
    let (from, to) = parse_coordinate_move(text)?;
    let promotion = match promote {
        None => None,
        Some('q') => Some(PieceKind::Queen),
        Some('r') => Some(PieceKind::Rook),
        Some('b') => Some(PieceKind::Bishop),
        Some('n') => Some(PieceKind::Knight),
        Some(other) => bail!("unknown promotion piece '{other}'"),
    };

    if !session.make_move(from, to, promotion) {
        bail!("{text} is not legal in {fen}");
    }
    let Some(assessment) = session.last_move_quality() else {
        bail!("no assessment recorded for {text}");
    };
    let feedback = MoveFeedback::from_assessment(assessment);
    println!("{}{} {}", text, feedback.grade.symbol(), feedback.summary());
    Ok(())
}

fn play(
    settings: &CoachSettings,
    fen: &str,
    plies: usize,
    difficulty: Option<AIDifficulty>,
) -> Result<()> {
    let mut session = session_at(settings, fen, None)?;
    let opponent = AIOpponent::new(ChessAIConfig {
        mode: GameMode::AIvsAI,
        difficulty: difficulty.unwrap_or(settings.difficulty),
    });
    info!("[AI] Self-play from {} at {}", fen, opponent.config.difficulty);

    for ply in 1..=plies {
        let Some(mv) = opponent.play_turn(&mut session)? else {
            break;
        };
        let grade = session
            .last_move_quality()
            .map(|q| MoveFeedback::from_assessment(q).grade.symbol())
            .unwrap_or("");
        println!("{:>3}. {}{}", ply, mv.to_uci(), grade);
    }

    println!("Final:  {}", session.fen());
    println!("Status: {:?}", session.status());
    Ok(())
}
