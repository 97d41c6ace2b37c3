//! Recoding a single file: output naming, pre-flight checks, planning and
//! running ffmpeg.

use crate::config::{Config, OutputConfig, ToolsConfig};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tvrecode_av::{FfmpegInvocation, ProbeResult};
use tvrecode_plan::{ContainerInfo, Plan};

/// Errors raised before or while recoding a file.
#[derive(Debug, thiserror::Error)]
pub enum RecodeError {
    #[error("File '{}' does not exist", .0.display())]
    InputMissing(PathBuf),

    #[error("File '{}' already exists", .0.display())]
    OutputExists(PathBuf),

    #[error(transparent)]
    Plan(#[from] tvrecode_plan::Error),

    #[error(transparent)]
    Av(#[from] tvrecode_av::Error),
}

pub type Result<T> = std::result::Result<T, RecodeError>;

/// What the caller asked for.
#[derive(Debug, Clone)]
pub struct RecodeRequest {
    pub input: PathBuf,
    /// Explicit output path; derived from the input when `None`.
    pub output: Option<PathBuf>,
    pub force: bool,
}

/// A file that passed the checks and has a plan, ready for ffmpeg.
#[derive(Debug, Clone)]
pub struct PreparedRecode {
    pub probe: ProbeResult,
    pub plan: Plan,
    pub invocation: FfmpegInvocation,
}

/// `<input without extension>-<suffix>.<extension>`
pub fn output_path(input: &Path, output: &OutputConfig) -> PathBuf {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(format!("-{}.{}", output.suffix, output.extension));
    input.with_file_name(name)
}

/// The configured tool when that file exists, otherwise the one on `PATH`.
pub fn tool_path(name: &str, configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(path) if path.exists() => Ok(path.to_path_buf()),
        _ => Ok(tvrecode_av::require_tool(name)?),
    }
}

/// Check the input and output paths.
pub fn check_paths(request: &RecodeRequest, config: &Config) -> Result<PathBuf> {
    if !request.input.exists() {
        return Err(RecodeError::InputMissing(request.input.clone()));
    }

    let output = request
        .output
        .clone()
        .unwrap_or_else(|| output_path(&request.input, &config.files.output));

    if output.exists() && !request.force {
        return Err(RecodeError::OutputExists(output));
    }

    Ok(output)
}

/// Build the ffmpeg invocation for a probed file.
pub fn plan_probe(
    probe: ProbeResult,
    request: &RecodeRequest,
    output: &Path,
    config: &Config,
) -> Result<PreparedRecode> {
    let policy = config.recoding.policy();
    let plan = tvrecode_plan::plan(&probe.streams, &policy)?;

    let invocation = FfmpegInvocation::new(&request.input, output, plan.directives.clone())
        .with_extra(config.recoding.extra.clone())
        .with_overwrite(request.force);

    Ok(PreparedRecode {
        probe,
        plan,
        invocation,
    })
}

/// Check paths, probe the input and plan the recode.
pub fn prepare(request: &RecodeRequest, config: &Config) -> Result<PreparedRecode> {
    let output = check_paths(request, config)?;
    tracing::debug!("Output file: {:?}", output);

    let ffprobe = tool_path("ffprobe", config.tools.ffprobe_path.as_deref())?;
    let raw = tvrecode_av::ffprobe_json_with(ffprobe, &request.input)?;
    let probe = ProbeResult {
        streams: tvrecode_plan::normalize(&raw)?,
        container: ContainerInfo::from_probe(&raw),
    };

    plan_probe(probe, request, &output, config)
}

/// Run ffmpeg for a prepared recode and return its exit code.
pub fn execute(prepared: &PreparedRecode, tools: &ToolsConfig) -> Result<i32> {
    let ffmpeg = tool_path("ffmpeg", tools.ffmpeg_path.as_deref())?;
    let command = prepared.invocation.to_command(ffmpeg);

    tracing::info!("command: {}", command.display());

    let status = command.status()?;
    let code = status.code().unwrap_or(1);

    if status.success() {
        tracing::info!("Recoded {:?}", prepared.invocation.output);
    } else {
        tracing::error!("ffmpeg exited with {}", code);
    }

    Ok(code)
}
