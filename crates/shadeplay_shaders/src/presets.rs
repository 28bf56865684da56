//! Named shader settings persisted as JSON

use crate::catalog::ShaderDefinition;
use crate::error::{Result, ShaderError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Presets keyed by name, backed by one JSON file
#[derive(Clone, Debug, PartialEq)]
pub struct PresetStore {
    path: PathBuf,
    presets: BTreeMap<String, ShaderDefinition>,
}

impl PresetStore {
    /// Empty store that will save to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            presets: BTreeMap::new(),
        }
    }

    /// Read `path`; a missing file is an empty store
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no preset file yet");
                return Ok(Self::new(path));
            }
            Err(source) => return Err(ShaderError::Io { path, source }),
        };

        let presets = serde_json::from_str(&content).map_err(|source| {
            ShaderError::PresetFormat {
                path: path.clone(),
                source,
            }
        })?;
        let store = Self { path, presets };
        tracing::debug!(count = store.len(), path = %store.path.display(), "loaded presets");
        Ok(store)
    }

    /// Write every preset as pretty JSON, creating parent directories
    pub fn save(&self) -> Result<()> {
        let io_err = |source| ShaderError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json =
            serde_json::to_string_pretty(&self.presets).map_err(ShaderError::PresetSerialize)?;
        fs::write(&self.path, json).map_err(io_err)?;
        tracing::info!(count = self.len(), path = %self.path.display(), "saved presets");
        Ok(())
    }

    /// Add or replace a preset; returns the one it replaced
    pub fn insert(
        &mut self,
        name: &str,
        definition: ShaderDefinition,
    ) -> Result<Option<ShaderDefinition>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShaderError::EmptyPresetName);
        }
        Ok(self.presets.insert(name.to_string(), definition))
    }

    pub fn get(&self, name: &str) -> Option<&ShaderDefinition> {
        self.presets.get(name.trim())
    }

    pub fn remove(&mut self, name: &str) -> Result<ShaderDefinition> {
        self.presets
            .remove(name.trim())
            .ok_or_else(|| ShaderError::UnknownPreset(name.to_string()))
    }

    /// Preset names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShaderDefinition)> {
        self.presets.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShaderKind;

    #[test]
    fn test_blank_names_are_rejected() {
        let mut store = PresetStore::new("unused.json");
        assert!(matches!(
            store.insert("   ", ShaderDefinition::default()),
            Err(ShaderError::EmptyPresetName)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_names_are_sorted_and_trimmed() {
        let mut store = PresetStore::new("unused.json");
        store.insert(" zeta ", ShaderKind::Sinc.definition()).unwrap();
        store.insert("alpha", ShaderKind::Sdf.definition()).unwrap();

        assert_eq!(store.names().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
        assert_eq!(store.get("zeta").map(|d| d.kind()), Some(ShaderKind::Sinc));
    }

    #[test]
    fn test_insert_returns_replaced() {
        let mut store = PresetStore::new("unused.json");
        assert_eq!(store.insert("a", ShaderKind::Step.definition()).unwrap(), None);
        let replaced = store.insert("a", ShaderKind::Log.definition()).unwrap();
        assert_eq!(replaced.map(|d| d.kind()), Some(ShaderKind::Step));
    }

    #[test]
    fn test_remove_unknown() {
        let mut store = PresetStore::new("unused.json");
        assert!(matches!(
            store.remove("nope"),
            Err(ShaderError::UnknownPreset(name)) if name == "nope"
        ));
    }
}
