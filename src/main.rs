use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use pipeplay::{Config, FormatProfile, RelayOutcome, RelaySession, SessionConfig, StdioChannel};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// 8kHz A-law
    Alaw,
    /// 8kHz 16-bit signed linear
    Slin16,
}

impl FormatArg {
    fn profile(self) -> FormatProfile {
        match self {
            FormatArg::Alaw => FormatProfile::ALAW_8K,
            FormatArg::Slin16 => FormatProfile::SLIN_8K,
        }
    }
}

/// Relay a generator process's raw sample stream into a media channel.
///
/// The generator is any executable that writes raw samples to stdout, for
/// example a script around `ffmpeg -v 0 -i $1 -f alaw -ar 8000 -ac 1 -`.
/// It is invoked with the source reference as its single argument; no other
/// parameters are forwarded. Frame payloads go to stdout, Ctrl-C stops
/// playback gracefully.
#[derive(Debug, Parser)]
#[command(name = "pipeplay", version)]
struct Cli {
    /// Path to the generator executable
    generator: PathBuf,

    /// Source reference handed to the generator (a path, a URL, ...)
    source: String,

    /// Sample format the generator emits
    #[arg(long, value_enum, default_value = "alaw")]
    format: FormatArg,

    /// Configuration file
    #[arg(long, default_value = "config/pipeplay")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Frame payloads own stdout; keep logs on stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    let profile = cli.format.profile();
    let mut session_config = SessionConfig::new(cli.generator, cli.source, profile);
    session_config.timeouts = cfg.timeouts;

    let mut channel = StdioChannel::new(profile.format);
    let report = RelaySession::new(session_config).run(&mut channel).await;

    info!(
        "Relay finished ({:?}): {} frames, {}ms of audio",
        report.outcome, report.frames_emitted, report.audio_ms_emitted
    );

    if report.outcome == RelayOutcome::Failed {
        anyhow::bail!("relay session failed");
    }

    Ok(())
}
