//! Shadeplay CLI
//!
//! Inspect and check the parameter records shared with the GPU kernels:
//! - Dump record layouts (offsets, kinds, sizes)
//! - Verify host layouts against WGSL declarations
//! - Encode a shader's parameter block after simulated frames
//! - Manage saved presets

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shader parameter playground tools
#[derive(Parser, Debug)]
#[command(name = "shadeplay")]
#[command(about = "Inspect, verify and encode shader parameter records")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = "shadeplay.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the byte layout of one record, or of all of them
    Layout {
        /// Shader-side record name, e.g. SDFParams
        name: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check host layouts against WGSL declarations
    Verify {
        /// WGSL file to check instead of the built-in declarations.
        /// Records the file does not declare are skipped.
        #[arg(long)]
        wgsl: Option<PathBuf>,
    },

    /// List every shader
    Shaders,

    /// Print the parameter block a shader would bind
    Encode {
        /// Kernel name, e.g. sdfDrawing
        shader: Option<String>,

        /// Start from a saved preset instead of defaults
        #[arg(short, long, conflicts_with = "shader")]
        preset: Option<String>,

        /// Frames to simulate before encoding
        #[arg(long, default_value = "1")]
        frames: u32,

        /// Seconds per simulated frame
        #[arg(long, default_value = "0.016666668")]
        dt: f64,

        /// Control override, `id=value` (repeatable)
        #[arg(short, long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,
    },

    /// Manage saved presets
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },

    /// Print the built-in WGSL declarations
    Wgsl,

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand, Debug)]
enum PresetAction {
    /// List preset names
    List,

    /// Print one preset as JSON
    Show { name: String },

    /// Save a shader's settings under a name
    Save {
        name: String,

        /// Kernel name
        #[arg(short, long)]
        shader: String,

        /// Control override, `id=value` (repeatable)
        #[arg(long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,
    },

    /// Delete a preset
    Remove { name: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(&cli.config)?;

    match cli.command {
        Command::Layout { name, json } => commands::layout(name.as_deref(), json),
        Command::Verify { wgsl } => commands::verify(wgsl.as_deref()),
        Command::Shaders => commands::shaders(),
        Command::Encode {
            shader,
            preset,
            frames,
            dt,
            set,
        } => commands::encode(
            &config,
            shader.as_deref(),
            preset.as_deref(),
            frames,
            dt,
            &set,
        ),
        Command::Presets { action } => match action {
            PresetAction::List => commands::preset_list(&config),
            PresetAction::Show { name } => commands::preset_show(&config, &name),
            PresetAction::Save { name, shader, set } => {
                commands::preset_save(&config, &name, &shader, &set)
            }
            PresetAction::Remove { name } => commands::preset_remove(&config, &name),
        },
        Command::Wgsl => {
            print!("{}", shadeplay_params::PARAMS_WGSL);
            Ok(())
        }
        Command::Config => commands::print_config(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_arguments() {
        let cli = Cli::try_parse_from([
            "shadeplay",
            "encode",
            "sdfDrawing",
            "--frames",
            "3",
            "--set",
            "shape=heart",
            "--set",
            "auto_rotate=true",
        ])
        .unwrap();

        match cli.command {
            Command::Encode {
                shader,
                frames,
                set,
                preset,
                ..
            } => {
                assert_eq!(shader.as_deref(), Some("sdfDrawing"));
                assert_eq!(preset, None);
                assert_eq!(frames, 3);
                assert_eq!(set, vec!["shape=heart", "auto_rotate=true"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("shadeplay.toml"));
    }

    #[test]
    fn test_preset_conflicts_with_shader() {
        let result = Cli::try_parse_from([
            "shadeplay",
            "encode",
            "sdfDrawing",
            "--preset",
            "mine",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["shadeplay", "verify", "--config", "other.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Command::Verify { wgsl: None }));
    }
}
