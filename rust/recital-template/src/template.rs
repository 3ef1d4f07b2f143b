//! Expansion of abbreviated segments against an inferred template.

use regex::Regex;

use crate::error::TemplateError;
use crate::segment::{DEFAULT_PROP, Segment};

/// Substitution markers for a template: one or more literal strings.
///
/// A single string promotes to a one-element list, so callers can pass a
/// marker directly or hand over the `values` of an inference result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternates(Vec<String>);

impl From<&str> for Alternates {
    fn from(value: &str) -> Self {
        Alternates(vec![value.to_string()])
    }
}

impl From<String> for Alternates {
    fn from(value: String) -> Self {
        Alternates(vec![value])
    }
}

impl From<Vec<String>> for Alternates {
    fn from(values: Vec<String>) -> Self {
        Alternates(values)
    }
}

impl From<Vec<&str>> for Alternates {
    fn from(values: Vec<&str>) -> Self {
        Alternates(values.into_iter().map(str::to_string).collect())
    }
}

/// Builder for [`Template`], covering the optional construction inputs.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    segments: Vec<Segment>,
    alternates: Vec<String>,
    prop: String,
    prefix: Option<String>,
    candidates: Option<Vec<String>>,
}

impl TemplateBuilder {
    pub fn new(segments: Vec<Segment>, alternates: impl Into<Alternates>) -> Self {
        TemplateBuilder {
            segments,
            alternates: alternates.into().0,
            prop: DEFAULT_PROP.to_string(),
            prefix: None,
            candidates: None,
        }
    }

    /// Language/translator property the template reads (default `"en"`).
    pub fn prop(mut self, prop: impl Into<String>) -> Self {
        self.prop = prop.into();
        self
    }

    /// Override the prefix derived from the first template segment.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Candidate values carried alongside the template for callers.
    pub fn candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    pub fn build(self) -> Result<Template, TemplateError> {
        let TemplateBuilder {
            segments,
            alternates,
            prop,
            prefix,
            candidates,
        } = self;
        if segments.is_empty() {
            return Err(TemplateError::NoSegments);
        }
        if alternates.is_empty() {
            return Err(TemplateError::NoAlternates);
        }
        let mut seg0_text = "";
        for (i, seg) in segments.iter().enumerate() {
            let Some(text) = seg.text(&prop) else {
                return Err(TemplateError::MissingProperty {
                    scid: seg.scid.clone(),
                    prop,
                });
            };
            if i == 0 {
                seg0_text = text;
            }
        }

        let derived = seg0_text
            .split(alternates[0].as_str())
            .next()
            .unwrap_or("")
            .to_string();
        let prefix = prefix.unwrap_or(derived);
        let prefix_len = prefix.chars().count();

        // Markers are literal text; escape each before joining into the
        // alternation so metacharacters in source text cannot alter it.
        let pattern = alternates
            .iter()
            .map(|alt| regex::escape(alt))
            .collect::<Vec<_>>()
            .join("|");
        let re_alternates = Regex::new(&pattern)?;

        Ok(Template {
            segments,
            alternates,
            prop,
            prefix,
            prefix_len,
            re_alternates,
            candidates,
        })
    }
}

/// A repeating text skeleton with substitution slots.
///
/// Built from segments written out in full (typically the `template` of an
/// [`InferenceResult`](crate::InferenceResult)) plus the markers standing in
/// the slots. [`expand`](Template::expand) instantiates the skeleton for one
/// abbreviated segment. The instance is read-only; expansion never mutates
/// it or its input.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
    alternates: Vec<String>,
    prop: String,
    prefix: String,
    prefix_len: usize,
    re_alternates: Regex,
    candidates: Option<Vec<String>>,
}

impl Template {
    /// A template over `segments` with default options.
    ///
    /// ```
    /// use recital_template::{Segment, Template};
    ///
    /// let segments = vec![Segment::new("x:1.1", "en", "...with earth as earth")];
    /// let template = Template::new(segments, "earth").unwrap();
    /// assert_eq!(template.prefix(), "...with ");
    /// assert_eq!(template.prefix_len(), 8);
    /// ```
    pub fn new(
        segments: Vec<Segment>,
        alternates: impl Into<Alternates>,
    ) -> Result<Self, TemplateError> {
        TemplateBuilder::new(segments, alternates).build()
    }

    pub fn builder(segments: Vec<Segment>, alternates: impl Into<Alternates>) -> TemplateBuilder {
        TemplateBuilder::new(segments, alternates)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn alternates(&self) -> &[String] {
        &self.alternates
    }

    pub fn prop(&self) -> &str {
        &self.prop
    }

    /// Literal text of the first template segment up to the first marker.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prefix length in Unicode scalar values.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }

    /// Expand one abbreviated segment into the full sub-segments it elides.
    ///
    /// The input must contain at least one marker occurrence; the text the
    /// marker matched becomes the substitution value for every template
    /// segment. Only the first marker (`alternates[0]`) is a substitution
    /// target inside the skeleton; the remaining alternates exist to locate
    /// prefixes and split points. Output `scid`s extend the input's with a
    /// 1-based position suffix.
    pub fn expand(&self, segment: &Segment) -> Result<Vec<Segment>, TemplateError> {
        let dst = segment
            .text(&self.prop)
            .ok_or_else(|| TemplateError::MissingProperty {
                scid: segment.scid.clone(),
                prop: self.prop.clone(),
            })?;
        let tokens: Vec<&str> = self.re_alternates.split(dst).collect();
        if tokens.len() < 2 {
            return Err(TemplateError::Expansion {
                text: dst.to_string(),
            });
        }

        // Every marker occurrence renders as equal-length text, so the
        // value's length falls out of the split arithmetic.
        let total = dst.chars().count();
        let joined: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let value_len = (total - joined) / (tokens.len() - 1);
        let value_start = tokens[0].chars().count();
        let replacement: String = dst.chars().skip(value_start).take(value_len).collect();

        let alt0 = self.alternates[0].as_str();
        let expanded = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, seg)| {
                let text = seg.text(&self.prop).unwrap_or("");
                let mut expanded = text.replace(alt0, &replacement);
                if i == 0 {
                    // Keep whatever literal prefix the input actually used
                    // (capitalization, punctuation), falling back to the
                    // template's own when the input starts at the marker.
                    let lead = if tokens[0].is_empty() {
                        self.prefix.as_str()
                    } else {
                        tokens[0]
                    };
                    let tail: String = expanded.chars().skip(self.prefix_len).collect();
                    expanded = format!("{lead}{tail}");
                }
                Segment::new(
                    format!("{}.{}", segment.scid, i + 1),
                    self.prop.clone(),
                    expanded,
                )
            })
            .collect();
        Ok(expanded)
    }
}
