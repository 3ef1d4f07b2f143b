//! End-to-end inference → template → expansion over provider-shaped fixtures.

use anyhow::Result;
use recital_template::{Segment, Template, find_alternates};

/// A contiguously-abbreviated run, in the flat JSON shape the document
/// provider delivers.
fn element_transcript() -> Result<Vec<Segment>> {
    let segments = serde_json::from_str(
        r#"[
            { "scid": "mn1:2.1", "en": "Take a mendicant who has not comprehended earth.",
              "pli": "pathaviṁ pathavito sañjānāti" },
            { "scid": "mn1:3.1", "en": "They grow rightly focused on earth." },
            { "scid": "mn1:3.2", "en": "They grow rightly focused on water …" },
            { "scid": "mn1:3.3", "en": "They grow rightly focused on fire …" },
            { "scid": "mn1:3.4", "en": "They grow rightly focused on wind …" },
            { "scid": "mn1:4.1", "en": "That is how a mendicant trains." }
        ]"#,
    )?;
    Ok(segments)
}

#[test]
fn infer_then_expand_contiguous_run() -> Result<()> {
    let segments = element_transcript()?;
    let inferred = find_alternates(&segments, "en")?.expect("pattern expected");

    assert_eq!(inferred.phrase, "They grow rightly focused on");
    assert_eq!(inferred.values, vec!["earth", "water", "fire", "wind"]);
    assert_eq!(inferred.indexes, vec![1, 2, 3, 4]);
    // Segment mn1:2.1 mentions "earth", so the covered span starts there.
    assert_eq!(inferred.start, 0);
    assert_eq!(inferred.length, 5);

    let template = Template::new(inferred.template, inferred.values)?;
    for (scid, value) in [("mn1:3.2", "water"), ("mn1:3.3", "fire"), ("mn1:3.4", "wind")] {
        let input = segments
            .iter()
            .find(|seg| seg.scid == scid)
            .expect("fixture segment");
        let expanded = template.expand(input)?;
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].scid, format!("{scid}.1"));
        assert_eq!(
            expanded[0].text("en"),
            Some(format!("They grow rightly focused on {value}.").as_str())
        );
    }
    Ok(())
}

#[test]
fn infer_then_expand_with_closing_alternate() -> Result<()> {
    let segments = vec![
        Segment::new("an4:1.1", "en", "They focus on the element of earth;"),
        Segment::new("an4:1.2", "en", "this is the first absorption."),
        Segment::new("an4:2.1", "en", "They focus on the element of water …"),
        Segment::new("an4:2.2", "en", "They focus on the element of fire …"),
        Segment::new("an4:3.1", "en", "They focus on the element of wind"),
        Segment::new("an4:3.2", "en", "this is the second absorption."),
    ];
    let inferred = find_alternates(&segments, "en")?.expect("pattern expected");
    assert_eq!(inferred.values, vec!["earth", "water", "fire", "wind"]);
    assert_eq!(inferred.indexes, vec![0, 2, 3, 4]);
    assert_eq!(inferred.template.len(), 2);

    let template = Template::new(inferred.template, inferred.values)?;
    let expanded = template.expand(&segments[4])?;
    assert_eq!(expanded.len(), 2);
    assert_eq!(expanded[0].scid, "an4:3.1.1");
    assert_eq!(
        expanded[0].text("en"),
        Some("They focus on the element of wind;")
    );
    assert_eq!(expanded[1].scid, "an4:3.1.2");
    assert_eq!(expanded[1].text("en"), Some("this is the first absorption."));
    Ok(())
}

#[test]
fn expansion_output_never_mutates_inputs() -> Result<()> {
    let segments = element_transcript()?;
    let inferred = find_alternates(&segments, "en")?.expect("pattern expected");
    let template = Template::new(inferred.template.clone(), inferred.values.clone())?;

    let before = segments.clone();
    let _ = template.expand(&segments[2])?;
    let _ = template.expand(&segments[3])?;
    assert_eq!(segments, before);
    assert_eq!(template.segments(), inferred.template.as_slice());
    assert_eq!(template.prefix(), "They grow rightly focused on ");
    Ok(())
}

#[test]
fn non_default_property_is_honored() -> Result<()> {
    let segments = vec![
        Segment::new("sn1:1.1", "de", "Sie betrachten unentwegt das Element Erde."),
        Segment::new("sn1:1.2", "de", "Sie betrachten unentwegt das Element Wasser …"),
        Segment::new("sn1:1.3", "de", "Sie betrachten unentwegt das Element Feuer …"),
    ];
    let inferred = find_alternates(&segments, "de")?.expect("pattern expected");
    assert_eq!(inferred.values, vec!["Erde", "Wasser", "Feuer"]);

    let template = Template::builder(inferred.template, inferred.values)
        .prop("de")
        .build()?;
    let expanded = template.expand(&segments[1])?;
    assert_eq!(
        expanded[0].text("de"),
        Some("Sie betrachten unentwegt das Element Wasser.")
    );
    Ok(())
}
