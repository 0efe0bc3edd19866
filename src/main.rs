use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

use handsign::replay;
use handsign::{Gesture, Session, SessionConfig, StabilityPolicy};

#[derive(Parser)]
#[command(name = "handsign")]
#[command(about = "Classify recorded hand landmarks into stable gestures")]
struct Cli {
    /// Recorded detector output (JSON Lines, one frame per line)
    #[arg(value_name = "RECORDING")]
    recording: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Frames of history per hand used for smoothing
    #[arg(long, default_value_t = StabilityPolicy::DEFAULT_CAPACITY)]
    history: usize,

    /// Share of the history the winning gesture must hold
    #[arg(long, default_value_t = StabilityPolicy::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Save an annotated image per frame to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Print how often each gesture was reported
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "handsign=debug" } else { "handsign=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let frames = replay::read_frames(&args.recording)?;
    info!("Loaded {} frames from {}", frames.len(), args.recording.display());

    let mut config = SessionConfig::default()
        .with_policy(StabilityPolicy::new(args.history, args.threshold)?);
    if let Some(dir) = args.debug_out {
        config = config.with_debug_dir(dir);
    }
    let mut session = Session::new(config)?;

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut rejected = 0usize;

    for (i, frame) in frames.iter().enumerate() {
        let output = session.process(frame.size(), &frame.hands)?;
        rejected += output.rejected.len();

        println!("Frame {} (FPS: {})", i + 1, output.fps as u32);
        for hand in &output.hands {
            println!("  Hand {}: {}", hand.slot + 1, hand.gesture);
            if let Some(action) = session.actions().describe(hand.gesture) {
                println!("    {}", action);
            }
            *counts.entry(hand.gesture.as_str()).or_default() += 1;
        }
    }

    if args.summary {
        println!("\n=== Gesture Summary ===");
        println!("Frames processed: {}", session.frames_processed());
        println!("Hand slots tracked: {}", session.slots().slot_count());
        for gesture in Gesture::ALL {
            let count = counts.get(gesture.as_str()).copied().unwrap_or(0);
            println!("  {:<10} {}", gesture.as_str(), count);
        }
        if rejected > 0 {
            println!("  Rejected hands: {}", rejected);
        }
    }

    Ok(())
}
