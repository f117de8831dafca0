//! Persisted preset collections.
//!
//! The surrounding application stores pattern fields in their text form
//! (`"S S K S"`, `"4 4 4 4"`). This module models that document: the
//! identity metadata around each pattern, the text-backed pattern fields,
//! and the collection wrapper with its version identifier. Conversion to
//! and from the engine's [`Pattern`] goes through the token codec at both
//! edges.

use crate::error::EngineError;
use crate::types::pattern::Pattern;
use crate::types::time::TimeSignature;
use crate::types::token;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Free-text identity fields attached to a stored preset.
///
/// The engine only ever reads these (the rudiment and accent matchers run
/// over them); it never rewrites them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PresetMetadata {
    /// Everything the text matchers look at, concatenated and case-folded.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.name, self.description);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }
}

fn default_repeat() -> u32 {
    1
}

/// One stored preset: identity plus pattern fields in their text form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    #[serde(flatten)]
    pub metadata: PresetMetadata,
    #[serde(default)]
    pub category: String,
    pub time_signature: String,
    pub subdivision: u32,
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub drum: String,
    #[serde(default)]
    pub sticking: String,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accents: Vec<u32>,
}

impl Preset {
    /// Parse the stored text fields into an engine [`Pattern`].
    pub fn to_pattern(&self) -> Result<Pattern, EngineError> {
        let time_signature: TimeSignature = self.time_signature.parse()?;
        Ok(Pattern {
            time_signature,
            subdivision: self.subdivision,
            phrase: token::parse_counts(&self.phrase)?,
            drum: token::parse(&self.drum),
            sticking: token::parse(&self.sticking),
            repeat: self.repeat,
            accents: self.accents.iter().copied().collect::<BTreeSet<u32>>(),
        })
    }

    /// Copy of this preset with its pattern fields re-rendered from
    /// `pattern`. Identity metadata is carried over untouched.
    pub fn with_pattern(&self, pattern: &Pattern) -> Preset {
        let mut stored = self.clone();
        stored.time_signature = pattern.time_signature.to_string();
        stored.subdivision = pattern.subdivision;
        stored.phrase = token::format(&pattern.phrase);
        stored.drum = token::format(&pattern.drum);
        stored.sticking = token::format(&pattern.sticking);
        stored.repeat = pattern.repeat;
        stored.accents = pattern.accents.iter().copied().collect();
        stored
    }
}

/// A whole stored collection: version identifier plus ordered entries.
///
/// Batch tools read the entire document, repair every entry, and rewrite
/// the entire document; there are no partial writes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetCollection {
    pub version: u64,
    pub presets: Vec<Preset>,
}

impl PresetCollection {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_preset() -> Preset {
        Preset {
            id: "p-001".to_string(),
            metadata: PresetMetadata {
                name: "Basic Groove".to_string(),
                description: "A funk workout".to_string(),
                tags: vec!["Funk".to_string(), "beginner".to_string()],
            },
            category: "grooves".to_string(),
            time_signature: "4/4".to_string(),
            subdivision: 16,
            phrase: "4 4 4 4".to_string(),
            drum: "K S K S".to_string(),
            sticking: "R L".to_string(),
            repeat: 2,
            accents: vec![0, 10],
        }
    }

    #[test]
    fn test_search_text_concatenates_and_folds_case() {
        let text = sample_preset().metadata.search_text();
        assert_eq!(text, "basic groove a funk workout funk beginner");
    }

    #[test]
    fn test_pattern_roundtrip_normalizes_text() {
        let mut preset = sample_preset();
        preset.drum = "K  S\tK S".to_string();
        let pattern = preset.to_pattern().unwrap();
        let stored = preset.with_pattern(&pattern);
        assert_eq!(stored.drum, "K S K S");
        assert_eq!(stored.phrase, "4 4 4 4");
        assert_eq!(stored.id, preset.id);
        assert_eq!(stored.metadata, preset.metadata);
    }

    #[test]
    fn test_to_pattern_rejects_bad_text() {
        let mut preset = sample_preset();
        preset.time_signature = "common time".to_string();
        assert!(matches!(preset.to_pattern(), Err(EngineError::Format(_))));

        let mut preset = sample_preset();
        preset.phrase = "4 four 4 4".to_string();
        assert!(matches!(preset.to_pattern(), Err(EngineError::Format(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let collection = PresetCollection {
            version: 3,
            presets: vec![sample_preset()],
        };
        let text = collection.to_json().unwrap();
        let reloaded = PresetCollection::from_json(&text).unwrap();
        assert_eq!(reloaded, collection);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let text = r#"{
            "version": 1,
            "presets": [{
                "id": "p-002",
                "name": "Sparse",
                "time_signature": "3/4",
                "subdivision": 8
            }]
        }"#;
        let collection = PresetCollection::from_json(text).unwrap();
        let preset = &collection.presets[0];
        assert_eq!(preset.repeat, 1);
        assert_eq!(preset.drum, "");
        assert!(preset.accents.is_empty());
    }
}
