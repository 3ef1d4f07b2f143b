//! Segments — minimal addressable text units.
//!
//! A segment pairs a structured content identifier (`scid`, dot/colon
//! delimited, e.g. `"mn1:3.2"`) with one text string per language/translator
//! property (`"en"`, `"pli"`, ...). Segments arrive in canonical document
//! order; adjacency is semantically significant for template inference.
//!
//! The serde shape matches the document provider's JSON, where properties
//! sit beside `scid` in a flat object:
//!
//! ```json
//! { "scid": "mn1:3.2", "en": "...", "pli": "..." }
//! ```

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The default language/translator property.
pub const DEFAULT_PROP: &str = "en";

/// A minimal addressable text unit, identified by `scid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Structured content identifier.
    pub scid: String,
    /// Text per language/translator key.
    #[serde(flatten)]
    pub properties: BTreeMap<String, String>,
}

impl Segment {
    /// A segment with a single text property.
    pub fn new(
        scid: impl Into<String>,
        prop: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(prop.into(), text.into());
        Segment {
            scid: scid.into(),
            properties,
        }
    }

    /// The text for `prop`, if this segment carries it.
    pub fn text(&self, prop: &str) -> Option<&str> {
        self.properties.get(prop).map(String::as_str)
    }
}

/// Indexes of segments whose `prop` text satisfies `matches`.
///
/// Segments without a `prop` text never match.
pub fn find_indexes<F>(segments: &[Segment], prop: &str, matches: F) -> Vec<usize>
where
    F: Fn(&str) -> bool,
{
    segments
        .iter()
        .enumerate()
        .filter_map(|(i, seg)| match seg.text(prop) {
            Some(text) if matches(text) => Some(i),
            _ => None,
        })
        .collect()
}

/// Indexes of segments whose `prop` text matches `re`.
pub fn find_indexes_matching(segments: &[Segment], prop: &str, re: &Regex) -> Vec<usize> {
    find_indexes(segments, prop, |text| re.is_match(text))
}
