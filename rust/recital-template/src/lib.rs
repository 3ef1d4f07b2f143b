//! # recital-template
//!
//! Segment-template inference and expansion for canonical-text transcripts.
//!
//! A transcript is an ordered sequence of [`Segment`]s, each addressed by a
//! structured content identifier and carrying one text string per
//! language/translator property. Repeating passages are conventionally
//! abbreviated: the first instance is written out in full and later
//! instances close with an ellipsis (`…`), eliding everything but the word
//! that changes.
//!
//! This crate recovers what the ellipsis hides:
//!
//! - [`find_alternates`] detects the abbreviation pattern and reports the
//!   repeating skeleton, the anchor phrase aligning it, and the concrete
//!   values that were elided.
//! - [`Template`] turns a skeleton plus its markers into an expander:
//!   [`Template::expand`] rewrites one abbreviated segment into the full
//!   sub-segments it stands for.
//!
//! ## Example
//!
//! ```
//! use recital_template::{Segment, Template, find_alternates};
//!
//! let segments = vec![
//!     Segment::new("mn1:3.1", "en", "They grow rightly focused on earth."),
//!     Segment::new("mn1:3.2", "en", "They grow rightly focused on water …"),
//!     Segment::new("mn1:3.3", "en", "They grow rightly focused on fire …"),
//! ];
//!
//! let inferred = find_alternates(&segments, "en").unwrap().unwrap();
//! assert_eq!(inferred.values, vec!["earth", "water", "fire"]);
//!
//! let template = Template::new(inferred.template, inferred.values).unwrap();
//! let expanded = template.expand(&segments[2]).unwrap();
//! assert_eq!(expanded[0].scid, "mn1:3.3.1");
//! assert_eq!(
//!     expanded[0].text("en"),
//!     Some("They grow rightly focused on fire.")
//! );
//! ```
//!
//! Everything is synchronous and CPU-bound: no I/O, no shared mutable
//! state. Inference results and templates are read-only once built, so
//! independent calls may run from concurrent workers without coordination.

pub mod error;
pub mod infer;
pub mod segment;
pub mod template;

pub use error::TemplateError;
pub use infer::{InferenceResult, find_alternates};
pub use segment::{DEFAULT_PROP, Segment, find_indexes, find_indexes_matching};
pub use template::{Alternates, Template, TemplateBuilder};
