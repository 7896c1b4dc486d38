//! Preset management commands.

use aacbridge_cli::Preset;
use clap::{Args, Subcommand};

use super::{get_config, print_success};
use crate::Cli;

/// Manage decode presets.
///
/// Presets bundle the stream parameters a source needs (channel count, chunk
/// size, output format), similar to kubectl's context management.
///
/// Configuration is stored in ~/.aacbridge/aacdec/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Add or replace a preset
    #[command(name = "add-preset")]
    AddPreset {
        /// Preset name
        name: String,
        /// Channel count
        #[arg(long)]
        channels: Option<usize>,
        /// Bytes read per decode call
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Output format: pcm or wav
        #[arg(long)]
        output: Option<String>,
    },
    /// Delete a preset
    #[command(name = "delete-preset")]
    DeletePreset {
        /// Preset name
        name: String,
    },
    /// Set the current preset
    #[command(name = "use-preset")]
    UsePreset {
        /// Preset name
        name: String,
    },
    /// Display the current preset
    #[command(name = "get-preset")]
    GetPreset,
    /// List all presets
    #[command(name = "list-presets", alias = "get-presets")]
    ListPresets,
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::AddPreset {
                name,
                channels,
                chunk_size,
                output,
            } => {
                let mut cfg = get_config(cli)?;
                let preset = Preset {
                    channels: channels.unwrap_or(0),
                    chunk_size: chunk_size.unwrap_or(0),
                    output: output.clone().unwrap_or_default(),
                    ..Default::default()
                };
                cfg.add_preset(name, preset)?;
                print_success(&format!("Preset \"{}\" added successfully", name));
                Ok(())
            }

            ConfigSubcommand::DeletePreset { name } => {
                let mut cfg = get_config(cli)?;
                cfg.delete_preset(name)?;
                print_success(&format!("Preset \"{}\" deleted", name));
                Ok(())
            }

            ConfigSubcommand::UsePreset { name } => {
                let mut cfg = get_config(cli)?;
                cfg.use_preset(name)?;
                print_success(&format!("Switched to preset \"{}\"", name));
                Ok(())
            }

            ConfigSubcommand::GetPreset => {
                let cfg = get_config(cli)?;
                if cfg.current_preset.is_empty() {
                    println!("No current preset set");
                } else {
                    println!("{}", cfg.current_preset);
                }
                Ok(())
            }

            ConfigSubcommand::ListPresets => {
                let cfg = get_config(cli)?;
                if cfg.presets.is_empty() {
                    println!("No presets configured");
                    return Ok(());
                }

                println!(
                    "{:<8} {:<20} {:<9} {:<10} {}",
                    "CURRENT", "NAME", "CHANNELS", "CHUNK", "OUTPUT"
                );
                for name in cfg.list_presets() {
                    let Some(p) = cfg.get_preset(name) else {
                        continue;
                    };
                    let current = if name == cfg.current_preset { "*" } else { "" };
                    println!(
                        "{:<8} {:<20} {:<9} {:<10} {}",
                        current,
                        name,
                        or_auto(p.channels),
                        or_auto(p.chunk_size),
                        if p.output.is_empty() { "(auto)" } else { p.output.as_str() }
                    );
                }
                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;
                println!("Config file: {}", cfg.path().display());
                println!("Current preset: {}", cfg.current_preset);
                println!("Presets: {}", cfg.presets.len());
                Ok(())
            }
        }
    }
}

fn or_auto(n: usize) -> String {
    if n == 0 { "(auto)".to_string() } else { n.to_string() }
}
