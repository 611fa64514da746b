//! Typed input rows, one per gem level, as produced by the upstream reader.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Quality set names, indexed by `QualityStatRow::set`.
pub const QUALITY_SETS: [&str; 4] = ["Superior", "Anomalous", "Divergent", "Phantasmal"];

/// One quality stat granted per point of quality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityStatRow {
    pub id: String,
    /// Per-mille value per quality point.
    pub value: i64,
    pub set: u32,
    pub weight: i64,
}

/// Per-level data for one gem. Parallel id/value columns mirror the source
/// tables and must have equal lengths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GemLevelRow {
    pub level: u32,
    pub player_level_req: f64,

    pub cooldown: u32,
    pub cooldown_bypass_type: u32,
    pub stored_uses: u32,

    // Supports
    pub cost_multiplier: i64,

    // Actives
    pub cost_types: Vec<String>,
    pub cost_amounts: Vec<i64>,
    pub damage_effectiveness: i64,
    pub base_multiplier: i64,
    pub spell_crit_chance: i64,
    pub attack_speed_multiplier: i64,
    pub vaal_souls: u32,
    pub vaal_stored_uses: u32,

    // Reservations; percentages are in hundredths.
    pub mana_reservation_flat: i64,
    pub mana_reservation_percent: i64,
    pub life_reservation_flat: i64,
    pub life_reservation_percent: i64,

    pub float_stats: Vec<String>,
    pub float_stat_values: Vec<f64>,
    pub constant_stats: Vec<String>,
    pub constant_stat_values: Vec<i64>,
    pub additional_stats: Vec<String>,
    pub additional_stat_values: Vec<i64>,
    pub implicit_stats: Vec<String>,
    pub flags: Vec<String>,

    pub quality_stats: Vec<QualityStatRow>,

    /// Attribute requirements, resolved upstream.
    pub stat_requirements: Option<Map<String, Value>>,
}

/// A gem with all of its level rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GemRecord {
    pub id: String,
    pub is_support: bool,
    /// Non-level fields, copied verbatim into the document.
    pub metadata: Map<String, Value>,
    /// Experience required per level, when the gem levels up.
    pub experience: Option<BTreeMap<u32, u64>>,
    /// Stat id → display text.
    pub translations: BTreeMap<String, String>,
    pub levels: Vec<GemLevelRow>,
}
