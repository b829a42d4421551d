//! wave-harness: headless driver for the SWARM engine.
//!
//! Usage:
//!   wave-harness [--config swarm.json] [--frames 600] [--seed 7] [--draw]
//!
//! Feeds the world a synthetic 60 Hz clock, records draw calls, and prints
//! the final snapshot (and optionally the last frame's draw calls) as JSON.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use swarm_core::constants::FRAME_PERIOD_MS;
use swarm_core::WorldConfig;
use swarm_sim::{CommandRecorder, DrawCommand, FrameDriver, World};

struct Options {
    config: Option<PathBuf>,
    frames: u64,
    seed: Option<u64>,
    draw: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    if let Err(e) = parse_args(&args).and_then(|opts| run(&opts)) {
        eprintln!("Error: {e:#}");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "wave-harness: run the SWARM engine headless\n\
         \n\
           --config <path>  JSON world config (optional, defaults otherwise)\n\
           --frames <N>     Number of 60 Hz frames to run (default: 600)\n\
           --seed <S>       Override the config's RNG seed\n\
           --draw           Also print the last frame's draw calls\n"
    );
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options {
        config: None,
        frames: 600,
        seed: None,
        draw: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).context("--config needs a path")?;
                opts.config = Some(PathBuf::from(path));
            }
            "--frames" => {
                i += 1;
                let value = args.get(i).context("--frames needs a count")?;
                opts.frames = value
                    .parse()
                    .with_context(|| format!("invalid frame count: {value}"))?;
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).context("--seed needs a value")?;
                opts.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid seed: {value}"))?,
                );
            }
            "--draw" => opts.draw = true,
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(opts)
}

fn run(opts: &Options) -> Result<()> {
    let mut config = match &opts.config {
        Some(path) => WorldConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WorldConfig::default(),
    };
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }

    let world = World::new(config).context("building world")?;
    let mut driver = FrameDriver::new(world);
    let mut sink = CommandRecorder::new();
    let mut last_frame: Vec<DrawCommand> = Vec::new();
    let mut peak = 0;

    // The host's first callback arrives at timestamp zero.
    let mut timestamp = 0.0;
    for _ in 0..opts.frames {
        driver.frame(timestamp, &mut sink);
        timestamp += FRAME_PERIOD_MS;

        if !sink.is_balanced() {
            warn!(depth = sink.depth(), alpha = sink.alpha(), "draw state leaked");
        }
        peak = peak.max(driver.world().live_count());
        last_frame = sink.take();
    }

    let snapshot = driver.world().snapshot();
    info!(
        frames = opts.frames,
        elapsed_ms = snapshot.time.elapsed_ms,
        live = snapshot.live().count(),
        peak,
        "run complete"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?
    );
    if opts.draw {
        println!(
            "{}",
            serde_json::to_string_pretty(&last_frame).context("serializing draw calls")?
        );
    }
    Ok(())
}
