use anyhow::{Context, Result};
use clap::Parser;
use music_player::demo::run_demo;
use music_player::{DeviceType, MusicPlayer, PlayerConfig, StrategyKind};

#[derive(Parser, Debug)]
#[command(name = "music-player")]
#[command(about = "Console music player demo", long_about = None)]
struct Args {
    /// Output device to connect
    #[arg(short = 'd', long, value_enum, default_value = "headphones")]
    device: DeviceType,

    /// Play order for the playlist
    #[arg(short = 's', long, value_enum, default_value = "sequential")]
    strategy: StrategyKind,

    /// Seed for the random play order (reproducible shuffles)
    #[arg(long)]
    seed: Option<u64>,

    /// Name of the simulated Bluetooth speaker
    #[arg(long, default_value = "Bluetooth Speaker")]
    bluetooth_name: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = PlayerConfig::new()
        .with_device(args.device)
        .with_strategy(args.strategy)
        .with_seed(args.seed)
        .with_bluetooth_name(args.bluetooth_name);

    let mut player = MusicPlayer::new(config);

    match run_demo(&mut player).context("Demo script failed") {
        Ok(summary) => log::info!(
            "Demo complete: {} song(s) on first pass, {} after removal",
            summary.first_pass,
            summary.second_pass
        ),
        Err(err) => log::error!("An unexpected error occurred: {:#}", err),
    }

    // Cleanup always runs and cannot fail
    let report = player.shutdown();
    println!("\nApplication finished and all resources cleaned up.");
    log::debug!("Shutdown: {}", report);

    Ok(())
}
