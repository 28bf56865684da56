//! Subcommand implementations

use anyhow::{bail, Context, Result};
use serde_json::json;
use shadeplay_params::{record_layout, record_layouts, RecordLayout, ShaderDeclarations};
use shadeplay_shaders::{
    ComputeShaderDefinition, ControlValue, PlaygroundConfig, PresetStore, ShaderDefinition,
    ShaderKind, ShaderState,
};
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<PlaygroundConfig> {
    PlaygroundConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

pub fn layout(name: Option<&str>, as_json: bool) -> Result<()> {
    let layouts = match name {
        Some(name) => match record_layout(name) {
            Some(layout) => vec![layout],
            None => bail!("No record named {name}. Run `shadeplay layout` to list them."),
        },
        None => record_layouts(),
    };

    if as_json {
        let value: Vec<_> = layouts.iter().map(layout_json).collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for (i, layout) in layouts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} ({} bytes, align {})",
            layout.name, layout.size, layout.shader_align()
        );
        for field in layout.fields {
            let ty = field.kind.wgsl_type().unwrap_or("padding");
            println!("  @{:<3} {:<24} {}", field.offset, field.name, ty);
        }
    }
    Ok(())
}

fn layout_json(layout: &RecordLayout) -> serde_json::Value {
    let fields: Vec<_> = layout
        .fields
        .iter()
        .map(|f| {
            json!({
                "name": f.name,
                "offset": f.offset,
                "size": f.size(),
                "type": f.kind.wgsl_type(),
            })
        })
        .collect();
    json!({
        "name": layout.name,
        "size": layout.size,
        "align": layout.shader_align(),
        "fields": fields,
    })
}

pub fn verify(wgsl: Option<&Path>) -> Result<()> {
    let Some(path) = wgsl else {
        let decls = ShaderDeclarations::parse()?;
        let count = decls.verify_all()?;
        println!("ok: {count} records match the built-in declarations");
        return Ok(());
    };

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (checked, constants) = verify_source(&source)
        .with_context(|| format!("Failed to verify {}", path.display()))?;

    if checked == 0 && constants == 0 {
        tracing::warn!(path = %path.display(), "no known records or constants declared");
    }
    println!(
        "ok: {checked} records and {constants} shape constants match {}",
        path.display()
    );
    Ok(())
}

/// Check whatever records and `SDF_*` constants a WGSL source declares.
/// Returns (records, constants) checked.
fn verify_source(source: &str) -> Result<(usize, usize)> {
    let decls = ShaderDeclarations::parse_source(source)?;

    let mut checked = 0;
    for layout in record_layouts() {
        if decls.struct_layout(layout.name).is_none() {
            tracing::debug!(record = layout.name, "not declared, skipping");
            continue;
        }
        decls.verify_layout(&layout)?;
        checked += 1;
    }
    let constants = decls.verify_declared_primitives()?;
    Ok((checked, constants))
}

pub fn shaders() -> Result<()> {
    for kind in ShaderKind::ALL {
        let definition = kind.definition();
        println!(
            "{:<22} {:<16} {:>3} bytes  {}",
            kind.id(),
            kind.group().display_name(),
            definition.byte_length(),
            kind.display_name()
        );
    }
    Ok(())
}

/// Split `id=value` and parse the value
fn parse_assignment(assignment: &str) -> Result<(&str, ControlValue)> {
    let Some((id, value)) = assignment.split_once('=') else {
        bail!("Expected ID=VALUE, got {assignment:?}");
    };
    let value = value
        .parse::<ControlValue>()
        .with_context(|| format!("Invalid value for {id}"))?;
    Ok((id.trim(), value))
}

fn apply_overrides(definition: &mut ShaderDefinition, overrides: &[String]) -> Result<()> {
    for assignment in overrides {
        let (id, value) = parse_assignment(assignment)?;
        definition.set_control(id, value)?;
    }
    Ok(())
}

/// Default definition for a kernel, honoring the configured SDF revision
fn definition_for(config: &PlaygroundConfig, shader: &str) -> Result<ShaderDefinition> {
    let mut definition = shader.parse::<ShaderKind>()?.definition();
    if let ShaderDefinition::Sdf(sdf) = &mut definition {
        sdf.revision = config.layout.sdf_revision;
    }
    Ok(definition)
}

pub fn encode(
    config: &PlaygroundConfig,
    shader: Option<&str>,
    preset: Option<&str>,
    frames: u32,
    dt: f64,
    overrides: &[String],
) -> Result<()> {
    if config.layout.verify_on_startup {
        ShaderDeclarations::parse()?.verify_all()?;
    }

    let mut definition = match (shader, preset) {
        (_, Some(name)) => {
            let store = PresetStore::load(&config.playground.presets_path)?;
            match store.get(name) {
                Some(definition) => definition.clone(),
                None => bail!("No preset named {name:?}"),
            }
        }
        (Some(shader), None) => definition_for(config, shader)?,
        (None, None) => definition_for(config, &config.playground.default_shader)?,
    };
    apply_overrides(&mut definition, overrides)?;

    let mut state = ShaderState::new(definition);
    for _ in 0..frames {
        state.update_with_delta(dt);
    }
    let frame = state.encode()?;

    println!("{} ({} bytes)", frame.function_name, frame.bytes.len());
    if !frame.bytes.is_empty() {
        println!("{}", hex_words(&frame.bytes));
    }
    Ok(())
}

/// Lowercase hex, one space between 4-byte words
fn hex_words(bytes: &[u8]) -> String {
    bytes
        .chunks(4)
        .map(|word| word.iter().map(|b| format!("{b:02x}")).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn open_presets(config: &PlaygroundConfig) -> Result<PresetStore> {
    let path = &config.playground.presets_path;
    PresetStore::load(path).with_context(|| format!("Failed to load presets {}", path.display()))
}

pub fn preset_list(config: &PlaygroundConfig) -> Result<()> {
    let store = open_presets(config)?;
    if store.is_empty() {
        println!("No presets in {}", store.path().display());
    }
    for (name, definition) in store.iter() {
        println!("{name:<24} {}", definition.function_name());
    }
    Ok(())
}

pub fn preset_show(config: &PlaygroundConfig, name: &str) -> Result<()> {
    let store = open_presets(config)?;
    let Some(definition) = store.get(name) else {
        bail!("No preset named {name:?}");
    };
    println!("{}", serde_json::to_string_pretty(definition)?);
    Ok(())
}

pub fn preset_save(
    config: &PlaygroundConfig,
    name: &str,
    shader: &str,
    overrides: &[String],
) -> Result<()> {
    let mut definition = definition_for(config, shader)?;
    apply_overrides(&mut definition, overrides)?;

    let mut store = open_presets(config)?;
    if store.insert(name, definition)?.is_some() {
        tracing::info!(preset = name, "replaced existing preset");
    }
    store.save()?;
    Ok(())
}

pub fn preset_remove(config: &PlaygroundConfig, name: &str) -> Result<()> {
    let mut store = open_presets(config)?;
    store.remove(name)?;
    store.save()?;
    Ok(())
}

pub fn print_config(config: &PlaygroundConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
