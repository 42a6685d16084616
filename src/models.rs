use serde::{Deserialize, Serialize};

/// Base stat block of a Pokemon.
///
/// Wire labels (including the space-containing ones) are fixed by the
/// upstream stored procedure and must round-trip exactly. Every field is
/// required; a missing stat is a decode error, never a default zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "HP")]
    pub hp: i32,

    #[serde(rename = "Speed")]
    pub speed: i32,

    #[serde(rename = "Attack")]
    pub attack: i32,

    #[serde(rename = "Defense")]
    pub defense: i32,

    #[serde(rename = "Special Attack")]
    pub special_attack: i32,

    #[serde(rename = "Special Defense")]
    pub special_defense: i32,
}

/// A Pokemon, localized to the language requested by the caller.
///
/// Constructed fresh per request from the database payload and discarded
/// after serialization; instances are never cached or shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    #[serde(rename = "ID")]
    pub id: i32,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub types: Vec<String>,

    #[serde(rename = "Base Stats")]
    pub base_stats: BaseStats,

    #[serde(rename = "Generation")]
    pub generation: i32,
}
