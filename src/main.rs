//! Glossplay CLI - Play token sequences from a JSON player configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use glossplay::{
    clip::{ClipMap, DirSource},
    player::{JointSink, PlaybackState, Player, RecordingSink},
    schema::{BindingConfig, PlayerConfig},
    sequence::SequenceBuilder,
    transport::{Adapter, Command},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 4 {
        eprintln!("Usage: {} <config.json> <assets-dir> <tokens...>", args[0]);
        eprintln!();
        eprintln!("Play a token sequence against the clips in <assets-dir>.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Player configuration (bindings, fps, gains)");
        eprintln!("  assets-dir   Root holding gloss2anim.json and the clip subdirectory");
        eprintln!("  tokens       Tokens, or one JSON/pipe-delimited payload");
        eprintln!();
        eprintln!("Example configuration is printed with --example.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let assets_dir = PathBuf::from(&args[2]);
    let payload = args[3..].join(" ");

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: PlayerConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    // Stand-in scene graph: one joint per configured binding, at rest.
    let mut sink = RecordingSink::new();
    for binding in &config.bindings {
        if sink.joint_id(&binding.joint).is_none() {
            sink.add_joint(&binding.joint);
        }
    }

    let source = DirSource::new(&assets_dir);
    let map = ClipMap::load(&source);

    let mut player = Player::new(config.clone(), &sink).unwrap_or_else(|e| {
        eprintln!("Error creating player: {}", e);
        std::process::exit(1);
    });
    let adapter = Adapter::new(SequenceBuilder::new(&map, &source, &config));

    println!("Glossplay");
    println!("=========");
    println!("Assets: {}", assets_dir.display());
    println!("Clip map entries: {}", map.len());
    println!("Bindings: {}", config.bindings.len());
    println!(
        "Tick rate: {} fps x{} ({:.2} ms/tick)",
        config.fps,
        config.speed_multiplier,
        config.tick_interval().as_secs_f32() * 1000.0
    );
    println!();

    adapter.dispatch(&mut player, &mut sink, Command::PlayTokensJson(payload));

    let total = match player.sequence_len() {
        Some(len) => len,
        None => {
            println!("Nothing to play.");
            return;
        }
    };
    println!("Sequence: {} frames", total);

    // The host normally schedules ticks at tick_interval(); here we just
    // run the sequence out and report.
    let start = Instant::now();
    let mut ticks = 0u64;
    while player.state() == PlaybackState::Playing {
        player.tick(&mut sink);
        ticks += 1;

        if ticks % (total as u64 / 10).max(1) == 0 {
            println!("  Frame {}/{}", player.cursor().min(total), total);
        }
    }
    let elapsed = start.elapsed();

    println!();
    println!(
        "Played {} frames in {:.2} ms (wall-clock at {} fps would be {:.2} s)",
        total,
        elapsed.as_secs_f32() * 1000.0,
        config.fps,
        total as f32 * player.config().tick_interval().as_secs_f32()
    );
}

fn print_example_config() {
    let config = PlayerConfig {
        bindings: vec![
            BindingConfig::new("Spine", 0),
            BindingConfig::new("Head", 36),
            BindingConfig::new("LeftHand", 99),
            BindingConfig::new("RightHand", 162),
        ],
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
