//! # Animal Records
//!
//! The immutable data model for the catalogue. Records are built once when
//! the catalogue loads and shared read-only for the rest of the process.
//!
//! ```text
//! AnimalRecord
//! ├── id, name, title, topic, author
//! ├── category: Category            // mammal, bird, ...
//! ├── conservation_status: ConservationStatus  // ordinal, IUCN-style
//! ├── habitat, description
//! ├── location: Location            // continent, countries, coordinates
//! ├── physical: PhysicalCharacteristics
//! ├── behavior: Behavior
//! ├── facts, threats
//! └── image, gallery
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mammal,
    Bird,
    Reptile,
    Amphibian,
    Fish,
    Invertebrate,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mammal,
        Category::Bird,
        Category::Reptile,
        Category::Amphibian,
        Category::Fish,
        Category::Invertebrate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mammal => "Mammal",
            Category::Bird => "Bird",
            Category::Reptile => "Reptile",
            Category::Amphibian => "Amphibian",
            Category::Fish => "Fish",
            Category::Invertebrate => "Invertebrate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extinction risk, ordered from least to most severe.
///
/// The derived `Ord` follows declaration order, so
/// `LeastConcern < NearThreatened < ... < Extinct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConservationStatus {
    #[serde(rename = "Least Concern")]
    LeastConcern,
    #[serde(rename = "Near Threatened")]
    NearThreatened,
    #[serde(rename = "Vulnerable")]
    Vulnerable,
    #[serde(rename = "Endangered")]
    Endangered,
    #[serde(rename = "Critically Endangered")]
    CriticallyEndangered,
    #[serde(rename = "Extinct in the Wild")]
    ExtinctInWild,
    #[serde(rename = "Extinct")]
    Extinct,
}

impl ConservationStatus {
    pub const ALL: [ConservationStatus; 7] = [
        ConservationStatus::LeastConcern,
        ConservationStatus::NearThreatened,
        ConservationStatus::Vulnerable,
        ConservationStatus::Endangered,
        ConservationStatus::CriticallyEndangered,
        ConservationStatus::ExtinctInWild,
        ConservationStatus::Extinct,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "Least Concern",
            ConservationStatus::NearThreatened => "Near Threatened",
            ConservationStatus::Vulnerable => "Vulnerable",
            ConservationStatus::Endangered => "Endangered",
            ConservationStatus::CriticallyEndangered => "Critically Endangered",
            ConservationStatus::ExtinctInWild => "Extinct in the Wild",
            ConservationStatus::Extinct => "Extinct",
        }
    }

    /// Two-letter IUCN abbreviation (LC, NT, VU, EN, CR, EW, EX).
    pub fn code(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "LC",
            ConservationStatus::NearThreatened => "NT",
            ConservationStatus::Vulnerable => "VU",
            ConservationStatus::Endangered => "EN",
            ConservationStatus::CriticallyEndangered => "CR",
            ConservationStatus::ExtinctInWild => "EW",
            ConservationStatus::Extinct => "EX",
        }
    }
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub continent: String,
    pub countries: Vec<String>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalCharacteristics {
    pub weight: String,
    pub height: String,
    pub length: Option<String>,
    pub lifespan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    pub diet: String,
    pub social_structure: String,
    pub activity_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub habitat: String,
    pub conservation_status: ConservationStatus,
    pub facts: Vec<String>,
    pub location: Location,
    pub physical: PhysicalCharacteristics,
    pub behavior: Behavior,
    pub threats: Vec<String>,
    pub gallery: Vec<String>,
}
