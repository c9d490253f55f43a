//! Render model handed from the lookup pipeline to the UI.

use crate::model::Pokemon;
use bytes::Bytes;
use cutil::str::{capitalize, join_capitalized};
use std::collections::HashMap;

pub const STAT_MAX: u32 = 255;
pub const PLACEHOLDER: &str = "-";

/// `(api name, label)` of the stats that get a bar.
pub const DISPLAYED_STATS: [(&str, &str); 4] = [
    ("hp", "HP"),
    ("attack", "Attack"),
    ("defense", "Defense"),
    ("speed", "Speed"),
];

#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub id: u32,
    pub name: String,

    /// lower-case API names, in slot order
    pub types: Vec<String>,

    pub height_m: f64,
    pub weight_kg: f64,
    pub stats: HashMap<String, u32>,
    pub abilities: Vec<String>,
    pub sprite: Option<Bytes>,
    pub species_url: String,
}

impl From<Pokemon> for Profile {
    fn from(p: Pokemon) -> Self {
        let mut types = p.types;
        types.sort_by_key(|t| t.slot);

        Profile {
            id: p.id,
            name: capitalize(&p.name),
            types: types.into_iter().map(|t| t.kind.name).collect(),
            height_m: p.height as f64 / 10.0,
            weight_kg: p.weight as f64 / 10.0,
            stats: p
                .stats
                .into_iter()
                .map(|s| (s.stat.name, s.base_stat))
                .collect(),
            abilities: p
                .abilities
                .into_iter()
                .map(|a| capitalize(&a.ability.name))
                .collect(),
            sprite: None,
            species_url: p.species.url,
        }
    }
}

impl Profile {
    pub fn id_text(&self) -> String {
        format!("ID: {}", self.id)
    }

    pub fn name_text(&self) -> String {
        format!("Name: {}", self.name)
    }

    pub fn types_text(&self) -> String {
        format!("Types: {}", join_capitalized(&self.types, ", "))
    }

    pub fn height_text(&self) -> String {
        format!("Height: {:.1} m", self.height_m)
    }

    pub fn weight_text(&self) -> String {
        format!("Weight: {:.1} kg", self.weight_kg)
    }

    pub fn abilities_text(&self) -> String {
        format!("Abilities: {}", self.abilities.join(", "))
    }

    pub fn stat_lines(&self) -> Vec<StatLine> {
        DISPLAYED_STATS
            .iter()
            .map(|&(key, label)| StatLine {
                label,
                value: self.stats.get(key).copied(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: Option<u32>,
}

impl StatLine {
    /// Missing stats sit at zero.
    pub fn bar_value(&self) -> u32 {
        self.value.unwrap_or(0).min(STAT_MAX)
    }

    pub fn text(&self) -> String {
        match self.value {
            Some(v) => format!("{}: {v}", self.label),
            None => format!("{}: {PLACEHOLDER}", self.label),
        }
    }
}

pub fn evolution_text(paths: &[String]) -> String {
    if paths.is_empty() {
        "Evolution: No evolution found.".to_string()
    } else {
        format!("Evolution: {}", paths.join("\n"))
    }
}
