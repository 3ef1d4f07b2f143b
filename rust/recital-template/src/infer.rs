//! Template inference — recovering the repeating skeleton behind elided text.
//!
//! Canonical transcripts abbreviate repeating passages by writing the first
//! instance in full and closing later instances with an ellipsis:
//!
//! ```text
//! mn1:3.1  They grow rightly focused on earth.
//! mn1:3.2  They grow rightly focused on water …
//! mn1:3.3  They grow rightly focused on fire …
//! ```
//!
//! [`find_alternates`] scans such a sequence, aligns the first elided segment
//! against its nearest written-out neighbor via a shared anchor phrase, and
//! reports the repeating skeleton together with the concrete values that were
//! elided. The caller typically feeds the result into a
//! [`Template`](crate::Template) to expand abbreviated segments.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use recital_text::{DEFAULT_MIN_PHRASE, common_phrase};

use crate::error::TemplateError;
use crate::segment::{Segment, find_indexes, find_indexes_matching};

/// Trailing ellipsis (U+2026), optionally followed by spaces.
static RE_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("… *$").expect("ellipsis pattern"));

/// Everything from the first trailing separator (comma, period, semicolon,
/// or ellipsis, with optional leading whitespace) to the end.
static RE_TRIM_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,.;…].*$").expect("trim pattern"));

/// Everything from the first closing punctuation mark to the end.
static RE_PUNCT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,;].*$").expect("punctuation pattern"));

/// The outcome of a successful inference pass.
///
/// Computed per call and never mutated; all text is copied out of the input
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceResult {
    /// Anchor phrase shared by the first elided segment and its nearest
    /// written-out neighbor.
    pub phrase: String,
    /// Literal text preceding the substitution slot in the skeleton.
    pub prefix: String,
    /// Concrete values observed for the substitution slot, in document order.
    pub values: Vec<String>,
    /// Indexes of the segments each value was extracted from.
    pub indexes: Vec<usize>,
    /// The literal repeating skeleton.
    pub template: Vec<Segment>,
    /// First segment index covered by the pattern, after extending backward
    /// over lead-in repeats of the first value.
    pub start: usize,
    /// Total segment span of the pattern.
    pub length: usize,
}

fn trim_tail(text: &str, re: &Regex) -> String {
    re.replace(text, "").into_owned()
}

/// Collapse a "repeated trailing word" value: `"earth as earth"` → `"earth"`.
fn strip_value(value: &str) -> String {
    let words: Vec<&str> = value.split(' ').collect();
    let len = words.len();
    if len >= 3 && words[len - 1] == words[len - 3] {
        words[len - 1].to_string()
    } else {
        value.to_string()
    }
}

/// The portion of `text` following the first occurrence of `phrase`.
///
/// When the phrase occurs more than once this is the portion *between* the
/// first and second occurrences, which is what splitting on the phrase
/// yields and what value extraction relies on.
fn after_phrase<'t>(text: &'t str, phrase: &str) -> Option<&'t str> {
    text.split(phrase).nth(1)
}

/// Detect an abbreviation pattern in `segments` and describe it.
///
/// Returns `Ok(None)` when the document is fully expanded (no trailing
/// ellipsis anywhere) or when no anchor phrase can be found for the first
/// elided segment (logged as a diagnostic; the caller treats it as "nothing
/// to expand"). A single elided segment cannot be aligned and is reported as
/// [`TemplateError::UnsupportedPattern`].
pub fn find_alternates(
    segments: &[Segment],
    prop: &str,
) -> Result<Option<InferenceResult>, TemplateError> {
    let ie = find_indexes_matching(segments, prop, &RE_ELLIPSIS);
    if ie.is_empty() {
        return Ok(None);
    }
    if ie.len() == 1 {
        return Err(TemplateError::UnsupportedPattern {
            scid: segments[ie[0]].scid.clone(),
        });
    }

    let text1 = segments[ie[0]].text(prop).unwrap_or("");

    // The anchor phrase is found by searching back from the first elided
    // segment for the nearest neighbor sharing enough literal wording.
    let mut phrase = String::new();
    let mut anchor = ie[0];
    while phrase.is_empty() && anchor > 0 {
        anchor -= 1;
        if let Some(prior) = segments[anchor].text(prop) {
            phrase = common_phrase(text1, prior, DEFAULT_MIN_PHRASE);
        }
    }
    if phrase.is_empty() {
        tracing::warn!(
            scid = %segments[ie[0]].scid,
            "no expansion template for alternate segment"
        );
        return Ok(None);
    }

    // Substitution prefix: the elided segment's text through the anchor
    // phrase plus one trailing separator character.
    let phrase_at = text1.find(&phrase).unwrap_or(0);
    let mut prefix_end = phrase_at + phrase.len();
    if let Some(c) = text1[prefix_end..].chars().next() {
        prefix_end += c.len_utf8();
    }
    let mut prefix = text1[..prefix_end].to_string();

    let mut values: Vec<String>;
    let mut indexes: Vec<usize>;
    if ie[0] + 1 != ie[1] {
        // Discontiguous alternates: each instance of the pattern spans
        // several segments, so every segment containing the anchor phrase
        // marks one instance. Only the first maximal run of index-adjacent
        // matches is collected; later disjoint runs are ignored.
        tracing::debug!(%phrase, "discontiguous alternates");
        let matched = find_indexes(segments, prop, |t| t.contains(phrase.as_str()));
        values = Vec::new();
        indexes = Vec::new();
        let mut prev: Option<usize> = None;
        for &iseg in &matched {
            if let Some(p) = prev {
                if iseg != p + 1 {
                    break;
                }
            }
            let text = segments[iseg].text(prop).unwrap_or("");
            let alt = after_phrase(text, &phrase).unwrap_or("").trim();
            values.push(trim_tail(alt, &RE_TRIM_ELLIPSIS));
            indexes.push(iseg);
            prev = Some(iseg);
        }
    } else {
        // Contiguous alternates: one elided segment per instance. The first
        // value comes from the written-out anchor segment itself.
        tracing::debug!(%phrase, anchor, "contiguous alternates");
        indexes = vec![anchor];
        let anchor_text = segments[anchor].text(prop).unwrap_or("");
        let alt0 = after_phrase(anchor_text, &phrase).unwrap_or("").trim();
        let alt0 = trim_tail(alt0, &RE_PUNCT_END);
        values = vec![strip_value(&alt0)];

        for (i, &idx) in ie.iter().enumerate() {
            if i > 0 && ie[i - 1] + 1 != idx {
                // Non-consecutive; later alternates belong to another run.
                break;
            }
            let text = segments[idx].text(prop).unwrap_or("");
            let alt = match after_phrase(text, &phrase) {
                Some(tail) => trim_tail(tail.trim(), &RE_TRIM_ELLIPSIS),
                None => trim_tail(text, &RE_TRIM_ELLIPSIS),
            };
            if i == 1 {
                // Second collected value: try to re-derive a tighter prefix
                // from the wording the values themselves share.
                let tighter = common_phrase(&values[1], &alt, DEFAULT_MIN_PHRASE);
                if tighter.is_empty() {
                    // Keep only the trailing words matching the new
                    // alternate's word count and recompute the prefix as
                    // everything before that trimmed value.
                    let trimmed = {
                        let words1: Vec<&str> = values[1].split(' ').collect();
                        let words2: Vec<&str> = alt.split(' ').collect();
                        let keep = words1.len().saturating_sub(words2.len());
                        words1[keep..].join(" ")
                    };
                    values[1] = trimmed;
                    let first_elided = segments[ie[0]].text(prop).unwrap_or("");
                    prefix = match first_elided.find(values[1].as_str()) {
                        Some(at) => first_elided[..at].to_string(),
                        None => first_elided.to_string(),
                    };
                } else {
                    prefix = tighter;
                }
            }
            values.push(alt);
            indexes.push(idx);
        }
    }

    // A multi-segment skeleton may close with one last written-out
    // alternate, aligned by a second anchor phrase between the skeleton's
    // continuation line and its counterpart after the final elision.
    if indexes.len() > 1 && indexes[1] - indexes[0] > 1 {
        let i_end = indexes[indexes.len() - 1] + 1;
        let template2 = segments.get(indexes[0] + 1).and_then(|s| s.text(prop));
        let end2 = segments.get(i_end + 1).and_then(|s| s.text(prop));
        if let (Some(template2), Some(end2)) = (template2, end2) {
            let end_phrase = common_phrase(template2, end2, DEFAULT_MIN_PHRASE);
            if !end_phrase.is_empty() {
                let alt_end = trim_tail(segments[i_end].text(prop).unwrap_or(""), &RE_PUNCT_END);
                if !alt_end.is_empty() {
                    indexes.push(i_end);
                    let alt_end = alt_end.replacen(prefix.as_str(), "", 1);
                    values.push(strip_value(&alt_end));
                }
            }
        }
    }

    // The skeleton runs from the first collected index up to the second,
    // stopping early at any segment that already carries the second value.
    let stop_value = values.get(1).cloned();
    let template_end = indexes.get(1).copied().unwrap_or(indexes[0]);
    let mut template = Vec::new();
    for i in indexes[0]..template_end {
        let text = segments[i].text(prop).unwrap_or("");
        if let Some(v) = &stop_value {
            if text.contains(v.as_str()) {
                break;
            }
        }
        template.push(segments[i].clone());
    }

    // Lead-in repeats of the first value extend the covered span backward.
    let mut start = indexes[0];
    while start > 0
        && segments[start - 1]
            .text(prop)
            .is_some_and(|t| t.contains(values[0].as_str()))
    {
        start -= 1;
    }

    let last = indexes[indexes.len() - 1];
    let length = last - start + template.len();
    Ok(Some(InferenceResult {
        phrase,
        prefix,
        values,
        indexes,
        template,
        start,
        length,
    }))
}
