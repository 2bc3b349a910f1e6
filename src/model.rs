//! Core data models for the star map.
//!
//! The catalogue document is a map of constellation name to [`Constellation`];
//! every star inside carries its celestial coordinates plus whatever identity
//! placeholders the static catalogue ships with. Live roster data is overlaid
//! by [`crate::merge::merge`].

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single catalogue entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Right ascension in degrees, used as the polar angle around the pole.
    pub ra: f64,
    /// Declination in degrees, used as the radial distance from the pole.
    pub dec: f64,
    /// Lower magnitude = brighter = larger disc.
    pub magnitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Set only by the merge, and only when a roster member claimed this star.
    #[serde(default)]
    pub clickable: bool,
}

impl Star {
    /// Name to show for this star, falling back to its catalogue key.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => key,
        }
    }
}

/// A named group of stars joined by edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    #[serde(default)]
    pub stars: BTreeMap<String, Star>,
    /// Edges between star keys. Endpoints missing from `stars` are skipped when drawing.
    #[serde(default)]
    pub lines: Vec<(String, String)>,
    #[serde(default)]
    pub team: String,
}

impl Constellation {
    pub fn claimed_count(&self) -> usize {
        self.stars.values().filter(|s| s.clickable).count()
    }
}

/// The full catalogue keyed by constellation name.
pub type Constellations = BTreeMap<String, Constellation>;

/// A member record from the live roster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterMember {
    /// A `null` email reads as empty, so the member is skipped rather than
    /// failing the whole roster.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub designations: Option<Vec<String>>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifies one star inside the catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarKey {
    pub constellation: String,
    pub star: String,
}

impl StarKey {
    pub fn new(constellation: &str, star: &str) -> Self {
        Self {
            constellation: constellation.to_string(),
            star: star.to_string(),
        }
    }

    pub fn matches(&self, constellation: &str, star: &str) -> bool {
        self.constellation == constellation && self.star == star
    }

    pub fn resolve<'a>(&self, catalogue: &'a Constellations) -> Option<&'a Star> {
        catalogue
            .get(&self.constellation)
            .and_then(|c| c.stars.get(&self.star))
    }
}

/// A star handed to the profile panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedStar {
    pub key: StarKey,
    pub star: Star,
    pub team: String,
}
