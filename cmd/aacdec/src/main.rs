//! aacdec - decode AAC streams to 16-bit PCM through libfdk-aac.

use clap::{Parser, Subcommand};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{CodecsCommand, ConfigCommand, DecodeCommand, InfoCommand};

/// aacdec - decode AAC streams to 16-bit PCM through libfdk-aac.
///
/// Input is a self-framed ADTS stream.
///
/// Logging goes to stderr at warn level, or debug with --verbose. RUST_LOG
/// overrides both.
///
/// Presets are stored in ~/.aacbridge/aacdec/ and are managed like kubectl
/// contexts.
#[derive(Parser)]
#[command(name = "aacdec")]
#[command(about = "AAC decoder CLI tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.aacbridge/aacdec/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Preset name to use
    #[arg(short = 'p', long, global = true)]
    pub preset: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a stream to PCM or WAV
    Decode(DecodeCommand),
    /// Print stream parameters
    Info(InfoCommand),
    /// List registered decoders
    Codecs(CodecsCommand),
    /// Manage decode presets
    Config(ConfigCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, env.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Decode(cmd) => cmd.run(&cli),
        Commands::Info(cmd) => cmd.run(&cli),
        Commands::Codecs(cmd) => cmd.run(&cli),
        Commands::Config(cmd) => cmd.run(&cli),
    }
}

/// Builds the log filter. Directives from `RUST_LOG` replace the default level.
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}
