//! Row → per-level tree mapping, and per-gem factoring.

use std::collections::BTreeMap;

use levelfold_core::errors::{LevelfoldResult, RecordError};
use levelfold_factor::{FactorEngine, GroupDocument};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::cooldown::CooldownBypassType;
use crate::rows::{GemLevelRow, GemRecord, QualityStatRow, QUALITY_SETS};
use crate::translate::StatTranslator;

/// Build the per-level tree for one row.
///
/// `gem` only labels errors. Optional fields are omitted rather than written
/// as zero so that absent data stays absent after factoring.
pub fn convert_level(
    gem: &str,
    row: &GemLevelRow,
    is_support: bool,
    experience: Option<&BTreeMap<u32, u64>>,
    translator: &dyn StatTranslator,
) -> Result<Value, RecordError> {
    let mut r = Map::new();
    r.insert(
        "experience".into(),
        experience
            .and_then(|xp| xp.get(&row.level))
            .map_or(Value::Null, |xp| json!(xp)),
    );
    r.insert("required_level".into(), integral_or_float(row.player_level_req));

    if row.cooldown > 0 {
        r.insert("cooldown".into(), json!(row.cooldown));
        if let Some(name) = CooldownBypassType::from_index(row.cooldown_bypass_type)?.name() {
            r.insert("cooldown_bypass_type".into(), json!(name));
        }
    }
    if row.stored_uses > 0 {
        r.insert("stored_uses".into(), json!(row.stored_uses));
    }

    if is_support {
        r.insert("cost_multiplier".into(), json!(row.cost_multiplier));
    } else {
        insert_active_fields(gem, row, &mut r)?;
    }

    r.insert("reservations".into(), reservations(row));
    r.insert("stats".into(), stats(gem, row, translator)?);
    r.insert(
        "quality_stats".into(),
        quality_stats(&row.quality_stats, translator)?,
    );

    if let Some(requirements) = &row.stat_requirements {
        r.insert(
            "stat_requirements".into(),
            Value::Object(requirements.clone()),
        );
    }

    Ok(Value::Object(r))
}

/// Convert every level of a gem and factor them into a document.
///
/// Rows are sorted by level first; the lowest level is the representative.
pub fn convert_gem(
    record: &GemRecord,
    engine: &FactorEngine,
    translator: &dyn StatTranslator,
) -> LevelfoldResult<GroupDocument> {
    let mut rows: Vec<&GemLevelRow> = record.levels.iter().collect();
    rows.sort_by_key(|row| row.level);

    let mut levels = BTreeMap::new();
    for row in rows {
        let value = convert_level(
            &record.id,
            row,
            record.is_support,
            record.experience.as_ref(),
            translator,
        )?;
        if levels.insert(row.level, value).is_some() {
            return Err(RecordError::DuplicateLevel {
                gem: record.id.clone(),
                level: row.level,
            }
            .into());
        }
    }

    debug!(gem = %record.id, levels = levels.len(), "gem levels converted");
    let group = engine.factor_group(&record.id, levels)?;

    let mut metadata = Map::new();
    metadata.insert("is_support".into(), json!(record.is_support));
    for (key, value) in &record.metadata {
        metadata.insert(key.clone(), value.clone());
    }

    Ok(GroupDocument::new(metadata, group))
}

fn insert_active_fields(
    gem: &str,
    row: &GemLevelRow,
    r: &mut Map<String, Value>,
) -> Result<(), RecordError> {
    check_columns(gem, row.level, "costs", row.cost_types.len(), row.cost_amounts.len())?;
    let costs: Map<String, Value> = row
        .cost_types
        .iter()
        .zip(&row.cost_amounts)
        .map(|(kind, amount)| (kind.clone(), json!(amount)))
        .collect();
    r.insert("costs".into(), Value::Object(costs));

    if row.damage_effectiveness != 0 {
        r.insert(
            "damage_effectiveness".into(),
            json!(row.damage_effectiveness.div_euclid(100)),
        );
    }
    if row.base_multiplier != 0 {
        r.insert("damage_multiplier".into(), json!(row.base_multiplier));
    }
    if row.spell_crit_chance > 0 {
        r.insert("crit_chance".into(), json!(row.spell_crit_chance));
    }
    if row.attack_speed_multiplier != 0 {
        r.insert(
            "attack_speed_multiplier".into(),
            json!(row.attack_speed_multiplier),
        );
    }
    if row.vaal_souls > 0 {
        r.insert(
            "vaal".into(),
            json!({"souls": row.vaal_souls, "stored_uses": row.vaal_stored_uses}),
        );
    }
    Ok(())
}

fn reservations(row: &GemLevelRow) -> Value {
    let mut r = Map::new();
    if row.mana_reservation_flat > 0 {
        r.insert("mana_flat".into(), json!(row.mana_reservation_flat));
    }
    if row.mana_reservation_percent > 0 {
        r.insert(
            "mana_percent".into(),
            json!(row.mana_reservation_percent as f64 / 100.0),
        );
    }
    if row.life_reservation_flat > 0 {
        r.insert("life_flat".into(), json!(row.life_reservation_flat));
    }
    if row.life_reservation_percent > 0 {
        r.insert(
            "life_percent".into(),
            json!(row.life_reservation_percent as f64 / 100.0),
        );
    }
    Value::Object(r)
}

fn stats(gem: &str, row: &GemLevelRow, translator: &dyn StatTranslator) -> Result<Value, RecordError> {
    check_columns(gem, row.level, "float_stats", row.float_stats.len(), row.float_stat_values.len())?;
    check_columns(
        gem,
        row.level,
        "constant_stats",
        row.constant_stats.len(),
        row.constant_stat_values.len(),
    )?;
    check_columns(
        gem,
        row.level,
        "additional_stats",
        row.additional_stats.len(),
        row.additional_stat_values.len(),
    )?;

    let stat = |id: &str, value: Value, numeric: f64, kind: &str| {
        json!({
            "id": id,
            "value": value,
            "stat": translator.translate(id, numeric),
            "type": kind,
        })
    };

    let mut out = Vec::new();
    for (id, v) in row.float_stats.iter().zip(&row.float_stat_values) {
        out.push(stat(id, json!(v), *v, "float"));
    }
    for (id, v) in row.constant_stats.iter().zip(&row.constant_stat_values) {
        out.push(stat(id, json!(v), *v as f64, "constant"));
    }
    for (id, v) in row.additional_stats.iter().zip(&row.additional_stat_values) {
        out.push(stat(id, json!(v), *v as f64, "additional"));
    }
    for id in &row.implicit_stats {
        out.push(stat(id, json!(1), 1.0, "implicit"));
    }
    for id in &row.flags {
        out.push(stat(id, json!(1), 1.0, "flag"));
    }
    Ok(Value::Array(out))
}

fn quality_stats(
    rows: &[QualityStatRow],
    translator: &dyn StatTranslator,
) -> Result<Value, RecordError> {
    rows.iter()
        .map(|q| -> Result<Value, RecordError> {
            let set_name = QUALITY_SETS.get(q.set as usize).ok_or_else(|| {
                RecordError::UnknownQualitySet {
                    set: q.set,
                    stat: q.id.clone(),
                }
            })?;
            Ok(json!({
                "id": q.id,
                "value": q.value,
                "set": q.set,
                "set_name": set_name,
                "weight": q.weight,
                "stat": translator.translate(&q.id, q.value as f64),
            }))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn check_columns(
    gem: &str,
    level: u32,
    field: &str,
    keys: usize,
    values: usize,
) -> Result<(), RecordError> {
    if keys == values {
        return Ok(());
    }
    Err(RecordError::MismatchedColumns {
        gem: gem.to_string(),
        level,
        field: field.to_string(),
        keys,
        values,
    })
}

/// `10.0` → `10`, `10.5` stays a float.
fn integral_or_float(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}
