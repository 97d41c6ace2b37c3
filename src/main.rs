mod cli;

use tvrecode::{
    config::{self, ConfigSource, LoadedConfig, LoggingConfig},
    logging,
    recode::{self, RecodeRequest},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use tvrecode_av::ProbeResult;
use tvrecode_plan::{CodecAction, Plan, StreamKind};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            output,
            dry_run,
            force,
        } => {
            let loaded = load(cli.config.as_deref(), cli.verbose)?;
            let request = RecodeRequest {
                input,
                output,
                force,
            };
            run_file(&request, &loaded, dry_run)
        }
        Commands::Plan { input, json } => {
            let loaded = load(cli.config.as_deref(), cli.verbose)?;
            plan_file(&input, &loaded, json)
        }
        Commands::Probe { file, json } => {
            let loaded = load(cli.config.as_deref(), cli.verbose)?;
            probe_file(&file, &loaded, json)
        }
        Commands::CheckTools => {
            logging::init_logging(&LoggingConfig::default(), cli.verbose)?;
            check_tools()
        }
        Commands::Validate {
            config: config_path,
        } => {
            logging::init_logging(&LoggingConfig::default(), cli.verbose)?;
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::InitConfig { path, force } => {
            logging::init_logging(&LoggingConfig::default(), cli.verbose)?;
            let path = path.or(cli.config).unwrap_or_else(config::default_config_path);
            init_config(&path, force)
        }
        Commands::Version => {
            println!("tvrecode {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load the configuration and start logging with it.
fn load(config_path: Option<&Path>, verbosity: u8) -> Result<LoadedConfig> {
    let loaded = config::load_config_or_default(config_path)?;
    logging::init_logging(&loaded.config.logging, verbosity)?;

    match &loaded.source {
        ConfigSource::Created(path) => {
            tracing::warn!("Created default config file {:?}", path)
        }
        ConfigSource::Default(path) if loaded.filled_missing_keys => {
            tracing::warn!("Added missing keys to config file {:?}", path)
        }
        source => tracing::debug!("Using config {:?}", source),
    }

    Ok(loaded)
}

fn run_file(request: &RecodeRequest, loaded: &LoadedConfig, dry_run: bool) -> Result<()> {
    let config = &loaded.config;
    let prepared = recode::prepare(request, config)?;

    if dry_run {
        let ffmpeg = recode::tool_path("ffmpeg", config.tools.ffmpeg_path.as_deref())
            .unwrap_or_else(|_| PathBuf::from("ffmpeg"));
        println!("{}", prepared.invocation.to_command(ffmpeg).display());
        return Ok(());
    }

    let code = recode::execute(&prepared, &config.tools)?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

fn plan_file(input: &Path, loaded: &LoadedConfig, json: bool) -> Result<()> {
    let request = RecodeRequest {
        input: input.to_path_buf(),
        output: None,
        force: true,
    };
    let prepared = recode::prepare(&request, &loaded.config)?;

    if json {
        let json_str = serde_json::to_string_pretty(&prepared.plan)
            .with_context(|| "Failed to serialize plan")?;
        println!("{}", json_str);
        return Ok(());
    }

    print_plan(&prepared.plan);
    Ok(())
}

fn describe_action(action: &CodecAction) -> String {
    match action {
        CodecAction::Copy => "copy".to_string(),
        CodecAction::Transcode { codec } => format!("transcode to {}", codec),
    }
}

fn print_plan(plan: &Plan) {
    let decisions = &plan.decisions;

    let video = &decisions.video;
    print!("Video:    #{} {}", video.index, describe_action(&video.action));
    if let Some(scale) = video.scale {
        print!(", scale to {}x{}", scale.width, scale.height);
    }
    if let Some(ref quality) = video.quality {
        print!(" ({})", quality);
    }
    println!();

    match decisions.audio {
        Some(ref audio) => {
            print!(
                "Audio:    #{} {} \"{}\" {}",
                audio.index,
                audio.language,
                audio.title,
                describe_action(&audio.action)
            );
            if audio.downmix.is_some() {
                print!(", downmix to stereo");
            }
            println!();
        }
        None => println!("Audio:    none"),
    }

    match decisions.subtitle {
        Some(ref subtitle) => println!(
            "Subtitle: #{} {} \"{}\" {}",
            subtitle.index,
            subtitle.language,
            subtitle.title,
            describe_action(&subtitle.action)
        ),
        None => println!("Subtitle: none"),
    }
}

fn probe_file(file: &Path, loaded: &LoadedConfig, json: bool) -> Result<()> {
    let ffprobe = recode::tool_path("ffprobe", loaded.config.tools.ffprobe_path.as_deref())?;
    let raw = tvrecode_av::ffprobe_json_with(ffprobe, file)?;
    let result = tvrecode_av::parse_probe(&raw)?;

    if json {
        let json_str = serde_json::to_string_pretty(&result.streams)
            .with_context(|| "Failed to serialize streams")?;
        println!("{}", json_str);
        return Ok(());
    }

    print_probe(file, &result);
    Ok(())
}

fn print_probe(file: &Path, result: &ProbeResult) {
    let container = &result.container;

    println!("File: {}", file.display());
    if let Some(ref format) = container.format_name {
        println!("Container: {}", format);
    }
    if let Some(size) = container.size_bytes {
        println!("Size: {} bytes", size);
    }
    if let Some(duration) = container.duration_secs {
        let secs = duration as u64;
        println!(
            "Duration: {:02}:{:02}:{:02}",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60
        );
    }

    println!("\nStreams: {}", result.streams.len());
    for stream in &result.streams {
        print!("  [{}] ", stream.index);
        match &stream.kind {
            StreamKind::Video { width, height } => {
                print!("video {} {}x{}", stream.codec_name, width, height)
            }
            StreamKind::Audio { channels } => {
                print!("audio {} {}ch", stream.codec_name, channels)
            }
            StreamKind::Subtitle => print!("subtitle {}", stream.codec_name),
            StreamKind::Other { codec_type } => print!("{} {}", codec_type, stream.codec_name),
        }
        print!(" ({})", stream.language);
        if stream.is_default {
            print!(" [default]");
        }
        if stream.is_forced {
            print!(" [forced]");
        }
        if let Some(ref title) = stream.title {
            print!(" - {}", title);
        }
        println!();
    }
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = tvrecode_av::check_tools();
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
        println!("Some tools are missing. Install ffmpeg to recode files.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_config_path);

    println!("Validating config: {:?}", path);
    let config = config::load_config(&path)?;
    let recoding = &config.recoding;

    println!("✓ Configuration is valid");
    println!(
        "  Audio languages: {}",
        recoding.preferred_languages.audio.join(", ")
    );
    println!(
        "  Subtitle languages: {}",
        recoding.preferred_languages.subtitles.join(", ")
    );
    println!(
        "  Max dimensions: {}x{}",
        recoding.dimensions.max.width, recoding.dimensions.max.height
    );
    println!(
        "  Output: <input>-{}.{}",
        config.files.output.suffix, config.files.output.extension
    );

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file {:?} already exists (use --force to overwrite)",
            path
        );
    }

    config::persist::save_config(path, &config::Config::default())?;
    println!("Wrote default config to {:?}", path);

    Ok(())
}
