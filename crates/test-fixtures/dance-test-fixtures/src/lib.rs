//! Shared JSON fixtures for the dance crates' tests and benches.
//!
//! `fixtures/manifest.json` at the workspace root maps fixture names to files
//! under `fixtures/`, grouped by [`FixtureSet`].

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    movements: BTreeMap<String, String>,
    #[serde(default)]
    configs: BTreeMap<String, String>,
}

/// A named group of fixtures in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSet {
    Movements,
    Configs,
}

impl FixtureSet {
    fn entries(self) -> &'static BTreeMap<String, String> {
        match self {
            FixtureSet::Movements => &MANIFEST.movements,
            FixtureSet::Configs => &MANIFEST.configs,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FixtureSet::Movements => "movements",
            FixtureSet::Configs => "config",
        }
    }

    /// Sorted fixture names in this set.
    pub fn names(self) -> Vec<&'static str> {
        self.entries().keys().map(String::as_str).collect()
    }

    /// Absolute path of fixture `name`.
    pub fn path(self, name: &str) -> Result<PathBuf> {
        let rel = self
            .entries()
            .get(name)
            .ok_or_else(|| anyhow!("no {} fixture named '{name}'", self.label()))?;
        Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    pub fn read(self, name: &str) -> Result<String> {
        let path = self.path(name)?;
        fs::read_to_string(&path).with_context(|| format!("reading fixture {}", path.display()))
    }

    pub fn load<T: DeserializeOwned>(self, name: &str) -> Result<T> {
        let text = self.read(name)?;
        serde_json::from_str(&text)
            .with_context(|| format!("{} fixture '{name}' is not valid JSON for the target type", self.label()))
    }
}

/// Movement lists in the JSON interchange shape (`timing` as number or text).
pub mod movements {
    use super::*;

    pub fn keys() -> Vec<&'static str> {
        FixtureSet::Movements.names()
    }

    pub fn json(name: &str) -> Result<String> {
        FixtureSet::Movements.read(name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        FixtureSet::Movements.path(name)
    }
}

/// Session configs.
pub mod configs {
    use super::*;

    pub fn json(name: &str) -> Result<String> {
        FixtureSet::Configs.read(name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        FixtureSet::Configs.load(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_exists() {
        for set in [FixtureSet::Movements, FixtureSet::Configs] {
            for name in set.names() {
                let path = set.path(name).unwrap();
                assert!(path.exists(), "{name}: {}", path.display());
            }
        }
    }

    #[test]
    fn movement_fixtures_are_arrays() {
        for name in movements::keys() {
            let value: serde_json::Value = serde_json::from_str(&movements::json(name).unwrap()).unwrap();
            assert!(value.is_array(), "{name} should be a movement array");
        }
        let cfg: serde_json::Value = configs::load("wide-canvas").unwrap();
        assert_eq!(cfg["width"], 640);
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        let err = movements::json("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}
