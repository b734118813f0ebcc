mod autopilot;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use autopilot::{Autopilot, Mode};
use clap::Parser;
use match_core::{Config, MatchSimulator};
use match_proto::Frame;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about = "Run a paddle match without a renderer")]
struct Args {
    /// Field width
    #[clap(long, default_value = "800")]
    width: f32,
    /// Field height
    #[clap(long, default_value = "500")]
    height: f32,
    /// Seed for serve angles and sides
    #[clap(short, long, default_value = "12345")]
    seed: u64,
    /// Number of ticks to simulate
    #[clap(short, long, default_value = "3600")]
    ticks: u64,
    /// Wall-clock milliseconds credited to each tick
    #[clap(long, default_value_t = 1000.0 / 60.0)]
    frame_ms: f32,
    /// Write length-prefixed postcard frames to this file
    #[clap(long)]
    record: Option<PathBuf>,
    /// Steer with a pointer instead of keys
    #[clap(long)]
    pointer: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = Config::for_field(args.width, args.height);
    config.frame_ms = args.frame_ms;
    config.validate()?;

    let mut sim = MatchSimulator::with_seed(config, args.seed);
    let mode = if args.pointer { Mode::Pointer } else { Mode::Keys };
    let mut pilot = Autopilot::new(mode, args.height / 2.0);

    let mut recorder = match &args.record {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    log::info!(
        "Running {} ticks (seed {}, {:?} input)",
        args.ticks,
        args.seed,
        mode
    );

    for _ in 0..args.ticks {
        for event in pilot.events(&sim) {
            event.apply(&mut sim);
        }
        sim.update();

        let events = sim.events();
        if events.player_scored || events.computer_scored {
            let score = sim.score();
            log::info!(
                "Tick {}: score {} - {}",
                sim.tick(),
                score.player,
                score.computer
            );
        }

        if let Some(out) = recorder.as_mut() {
            let bytes = Frame::from(&sim.snapshot())
                .to_bytes()
                .map_err(|e| format!("frame encoding failed: {}", e))?;
            out.write_all(&(bytes.len() as u32).to_le_bytes())?;
            out.write_all(&bytes)?;
        }
    }

    if let Some(mut out) = recorder {
        out.flush()?;
    }

    let score = sim.score();
    println!("Final score: player {} - computer {}", score.player, score.computer);
    Ok(())
}
