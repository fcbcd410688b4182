use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stickfight_shared::*;
use stickfight_sim::scripts::{DancerFeed, RusherFeed};
use stickfight_sim::{run_match, ControlFeed, IdleFeed};

#[derive(Parser)]
#[command(name = "stickfight", about = "Stick-figure fighting demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless match between two scripted control feeds
    Run {
        /// Control feed for player 0 (idle, rusher, or dancer)
        #[arg(long, default_value = "rusher")]
        p0: String,

        /// Control feed for player 1 (idle, rusher, or dancer)
        #[arg(long, default_value = "idle")]
        p1: String,

        /// Maximum number of ticks before the match times out
        #[arg(long, default_value_t = MAX_TICKS)]
        ticks: u32,

        /// Arena width in pixels
        #[arg(long, default_value_t = DEFAULT_ARENA_WIDTH)]
        width: f32,

        /// Arena height in pixels
        #[arg(long, default_value_t = DEFAULT_ARENA_HEIGHT)]
        height: f32,

        /// Output path for replay JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Start the match server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 3001)]
        port: u16,
    },
}

/// Resolve a feed name to a boxed ControlFeed trait object.
///
/// Supported names:
/// - "idle" -> IdleFeed
/// - "rusher" -> RusherFeed (walks toward the opponent and swings)
/// - "dancer" -> DancerFeed (bobs vertically with occasional jabs)
fn resolve_feed(name: &str, slot: usize) -> Box<dyn ControlFeed> {
    match name {
        "idle" => Box::new(IdleFeed),
        "rusher" => Box::new(RusherFeed::for_slot(slot)),
        "dancer" => Box::new(DancerFeed),
        other => {
            eprintln!(
                "Unknown feed '{}'. Valid options: idle, rusher, dancer.",
                other
            );
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            p0,
            p1,
            ticks,
            width,
            height,
            output,
        } => cmd_run(&p0, &p1, ticks, width, height, output),

        Commands::Serve { port } => cmd_serve(port),
    }
}

fn cmd_run(p0_name: &str, p1_name: &str, ticks: u32, width: f32, height: f32, output: Option<PathBuf>) {
    let mut p0 = resolve_feed(p0_name, 0);
    let mut p1 = resolve_feed(p1_name, 1);

    let config = MatchConfig {
        p0_name: p0.name().to_string(),
        p1_name: p1.name().to_string(),
        width,
        height,
        max_ticks: ticks,
    };

    println!(
        "Running match: {} vs {} (arena {}x{})",
        p0.name(),
        p1.name(),
        width,
        height
    );

    let replay = run_match(&config, p0.as_mut(), p1.as_mut());
    let result = &replay.result;

    println!();
    println!("=== Match Result ===");
    println!("Outcome:    {:?}", result.outcome);
    println!("Reason:     {:?}", result.reason);
    println!("Final tick: {} ({:.1}s)", result.final_tick, result.final_tick as f32 / TICK_RATE as f32);
    println!();
    println!("--- Stats ---");
    println!(
        "  {} (P0): Health={}, Hits={}, Swings={}",
        config.p0_name, result.stats.p0_health, result.stats.p0_hits, result.stats.p0_swings
    );
    println!(
        "  {} (P1): Health={}, Hits={}, Swings={}",
        config.p1_name, result.stats.p1_health, result.stats.p1_hits, result.stats.p1_swings
    );

    if let Some(path) = output {
        match serde_json::to_string_pretty(&replay) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => println!("\nReplay written to {}", path.display()),
                Err(e) => eprintln!("\nFailed to write replay: {}", e),
            },
            Err(e) => eprintln!("\nFailed to serialize replay: {}", e),
        }
    }
}

fn cmd_serve(port: u16) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    rt.block_on(async {
        if let Err(e) = stickfight_server::run_server(port).await {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
    });
}
