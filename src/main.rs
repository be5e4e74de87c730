mod cli;

use clubber::{
    batch::{BatchEvent, BatchPlan, BatchRunner},
    clock::ZonedClock,
    config::{self, Config},
    console::Console,
};
use clubber_av::FfmpegMuxer;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, PathArgs};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "clubber=debug,clubber_av=debug".to_string()
        } else {
            "clubber=info,clubber_av=info".to_string()
        }
    });

    // Logs go to stderr; stdout carries the batch progress lines
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or_else(Commands::default_run) {
        Commands::Run { paths, dry_run } => run_batch(cli.config.as_deref(), &paths, dry_run),
        Commands::Plan { paths, json } => show_plan(cli.config.as_deref(), &paths, json),
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Validate { file } => {
            // Same lookup as `run`, so the checked file is the one that gets used
            let path = file.or(cli.config).or_else(config::find_config_file);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("clubber {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_effective_config(config_path: Option<&Path>, overrides: &PathArgs) -> Result<Config> {
    let mut config = config::load_config_or_default(config_path)?;
    overrides.apply(&mut config.paths);
    config::validate_config(&config)?;
    Ok(config)
}

fn build_muxer(config: &Config) -> FfmpegMuxer {
    let configured = config.tools.ffmpeg_path.as_deref();
    let program = match clubber_av::get_tool_path("ffmpeg", configured) {
        Ok(path) => path,
        Err(e) => {
            // Keep going: every pair will then report the failure on its own
            tracing::warn!("{}; each pair will fail until ffmpeg is installed", e);
            configured
                .map(Path::to_path_buf)
                .unwrap_or_else(|| "ffmpeg".into())
        }
    };

    let muxer = FfmpegMuxer::new(program)
        .with_audio_codec(config.encode.audio_codec)
        .with_audio_bitrate(config.encode.audio_bitrate.clone())
        .with_overwrite(config.encode.overwrite);

    tracing::debug!(
        "Using ffmpeg at {:?} with audio codec {}",
        muxer.program(),
        muxer.audio_codec()
    );

    muxer
}

fn run_batch(config_path: Option<&Path>, overrides: &PathArgs, dry_run: bool) -> Result<()> {
    let config = load_effective_config(config_path, overrides)?;

    if dry_run {
        let plan = BatchPlan::discover(&config.paths, &config.media)?;
        println!("[DRY RUN] Would mux {} pairs", plan.pair_count());
        print_plan(&plan, &config);
        return Ok(());
    }

    let console = Console::new(ZonedClock::from_config(&config.clock)?);
    let runner = BatchRunner::new(build_muxer(&config), config.paths.clone())
        .with_event_callback(Box::new(move |event: &BatchEvent<'_>| {
            println!("{}", console.line(event))
        }));

    runner.run(&config.media)?;

    Ok(())
}

fn show_plan(config_path: Option<&Path>, overrides: &PathArgs, json: bool) -> Result<()> {
    let config = load_effective_config(config_path, overrides)?;
    let plan = BatchPlan::discover(&config.paths, &config.media)?;

    if json {
        let json_str = serde_json::to_string_pretty(&plan.summary(&config.paths))?;
        println!("{}", json_str);
    } else {
        print_plan(&plan, &config);
    }

    Ok(())
}

fn print_plan(plan: &BatchPlan, config: &Config) {
    println!("Video: {}", config.paths.video_dir.display());
    println!("Audio: {}", config.paths.audio_dir.display());
    println!("Output: {}", config.paths.output_dir.display());

    println!("\nPairs: {}", plan.pair_count());
    for pair in plan.pairs() {
        println!(
            "  {}. {} + {} -> {}",
            pair.index,
            pair.video_name(),
            pair.audio_name(),
            pair.output_path(&config.paths).display()
        );
    }

    if !plan.unpaired_videos().is_empty() {
        println!("\nUnpaired video files: {}", plan.unpaired_videos().len());
        for name in plan.unpaired_videos() {
            println!("  {}", name.to_string_lossy());
        }
    }
    if !plan.unpaired_audio().is_empty() {
        println!("\nUnpaired audio files: {}", plan.unpaired_audio().len());
        for name in plan.unpaired_audio() {
            println!("  {}", name.to_string_lossy());
        }
    }
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    println!("Checking external tools...\n");

    let tools = clubber_av::check_tools(config.tools.ffmpeg_path.as_deref());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install ffmpeg to mux files.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file found, using defaults");
            Config::default()
        }
    };

    println!("  Audio dir: {}", config.paths.audio_dir.display());
    println!("  Video dir: {}", config.paths.video_dir.display());
    println!("  Output dir: {}", config.paths.output_dir.display());
    println!(
        "  Extensions: video [{}], audio [{}]",
        config.media.video_extensions.join(", "),
        config.media.audio_extensions.join(", ")
    );
    println!("  Audio codec: {}", config.encode.audio_codec);
    if let Some(ref bitrate) = config.encode.audio_bitrate {
        println!("  Audio bitrate: {}", bitrate);
    }
    println!("  Overwrite: {}", config.encode.overwrite);
    println!(
        "  Clock: UTC{:+} min ({})",
        config.clock.utc_offset_minutes, config.clock.zone_label
    );

    Ok(())
}
