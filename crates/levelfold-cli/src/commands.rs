//! Subcommand implementations.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use levelfold_core::errors::ExportError;
use levelfold_core::LevelfoldConfig;
use levelfold_factor::{FactorEngine, GroupDocument, JsonWriter};
use levelfold_gems::{convert_all, GemRecord};
use serde_json::{Map, Value};
use tracing::info;

type LevelGroups = BTreeMap<String, BTreeMap<u32, Value>>;

/// `levelfold factor`: writes `{ group: { "per_level": .., "static": .. } }`.
pub fn factor(config: &LevelfoldConfig, writer: &JsonWriter, input: &Path, name: &str) -> Result<Vec<PathBuf>> {
    let groups = parse_groups(read_json(input)?)?;
    info!(groups = groups.len(), input = %input.display(), "factoring level groups");

    let engine = FactorEngine::new(config.factor.clone());
    let factored = engine.factor_groups(groups)?;

    let out: Map<String, Value> = factored
        .into_iter()
        .map(|(id, group)| (id, GroupDocument::new(Map::new(), group).to_value()))
        .collect();

    Ok(writer.write(name, &out)?)
}

/// `levelfold gems`: writes `<name>.json` and `<name>_minimal.json`.
pub fn gems(config: &LevelfoldConfig, writer: &JsonWriter, input: &Path, name: &str) -> Result<Vec<PathBuf>> {
    let records: Vec<GemRecord> = serde_json::from_value(read_json(input)?).map_err(|e| {
        ExportError::MalformedInput {
            expected: "an array of gem records".to_string(),
            message: e.to_string(),
        }
    })?;
    info!(gems = records.len(), input = %input.display(), "exporting gems");

    let engine = FactorEngine::new(config.factor.clone());
    let export = convert_all(&records, &engine)?;

    let mut written = writer.write(name, &export.full_value())?;
    written.extend(writer.write(&format!("{name}_minimal"), &export.minimal_value())?);
    Ok(written)
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_str(&text).map_err(|e| ExportError::MalformedInput {
        expected: "JSON".to_string(),
        message: e.to_string(),
    })?;
    Ok(value)
}

/// `{ group: { "1": value, "2": value } }` → ordered level groups.
fn parse_groups(input: Value) -> Result<LevelGroups, ExportError> {
    let Value::Object(groups) = input else {
        return Err(malformed("top level must be an object of groups"));
    };

    groups
        .into_iter()
        .map(|(id, levels)| {
            let Value::Object(levels) = levels else {
                return Err(malformed(format!("group {id} must be an object of levels")));
            };
            let mut parsed = BTreeMap::new();
            for (key, value) in levels {
                let level = key
                    .parse::<u32>()
                    .map_err(|_| malformed(format!("group {id}: level {key:?} is not a number")))?;
                if parsed.insert(level, value).is_some() {
                    return Err(malformed(format!("group {id}: level {level} appears more than once")));
                }
            }
            Ok((id, parsed))
        })
        .collect()
}

fn malformed(message: impl Into<String>) -> ExportError {
    ExportError::MalformedInput {
        expected: "level groups".to_string(),
        message: message.into(),
    }
}
