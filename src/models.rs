//! Frontend Models
//!
//! Data structures for the embedded adhkar catalog.

use serde::{Deserialize, Deserializer};

/// Repetition count requested for one dhikr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSpec {
    /// Count down from a fixed target
    Times(u32),
    /// Count up with no target
    Unbounded,
}

impl Default for CountSpec {
    fn default() -> Self {
        CountSpec::Times(1)
    }
}

impl<'de> Deserialize<'de> for CountSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        // The generated data writes "infinity" for open-ended counters;
        // accept "unbounded" as well. Non-positive counts clamp to 1.
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) if n >= 1 => CountSpec::Times(n as u32),
            Raw::Number(_) => CountSpec::Times(1),
            Raw::Text(s) if s == "infinity" || s == "unbounded" => CountSpec::Unbounded,
            Raw::Text(_) => CountSpec::Times(1),
        })
    }
}

/// One dhikr entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub count: CountSpec,
}

/// A named, ordered group of items
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Category {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The full content catalog: categories plus their display ordering
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    /// Category keys in preferred display order; keys not listed here
    /// sort after all listed ones, keeping their catalog order
    #[serde(default)]
    pub priority: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Categories in display order per the priority list
    pub fn ordered(&self) -> Vec<&Category> {
        let rank = |key: &str| {
            self.priority
                .iter()
                .position(|p| p == key)
                .unwrap_or(usize::MAX)
        };
        let mut cats: Vec<&Category> = self.categories.iter().collect();
        cats.sort_by_key(|c| rank(&c.key));
        cats
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Key of the first category in display order
    pub fn first_key(&self) -> Option<String> {
        self.ordered().first().map(|c| c.key.clone())
    }
}
