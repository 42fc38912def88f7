//! Named keyframe fixtures shared by the curve crates' tests and benches.
//!
//! Fixtures are listed in `fixtures/manifest.json` at the workspace root and
//! stored as exported curve maps (`{"kind": "linear", "keys": [...]}`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    curves: HashMap<String, CurveEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurveEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        value: Option<String>,
    },
}

impl CurveEntry {
    fn as_path(&self) -> &str {
        match self {
            CurveEntry::Path(path) => path,
            CurveEntry::Detailed { path, .. } => path,
        }
    }

    fn value_type(&self) -> Option<&str> {
        match self {
            CurveEntry::Path(_) => None,
            CurveEntry::Detailed { value, .. } => value.as_deref(),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod curves {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.curves.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Names of fixtures whose values have the given type tag (e.g. "scalar").
    pub fn keys_with_value(value_type: &str) -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST
            .curves
            .iter()
            .filter(|(_, entry)| entry.value_type() == Some(value_type))
            .map(|(name, _)| name.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.curves, "curve", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.curves, "curve", name)?;
        super::load_json(entry.as_path())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.curves, "curve", name)?;
        Ok(resolve_path(entry.as_path()))
    }
}
