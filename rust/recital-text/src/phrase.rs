//! Longest common phrase between two strings.
//!
//! A "phrase" is a run of space-separated words occurring verbatim in both
//! inputs. The finder seeds a candidate from a longest-common-subsequence
//! pass over words, then trims it from both ends until the remainder occurs
//! literally in both strings.
//!
//! When several equal-length common subsequences exist, the candidate keeps
//! whichever word was discovered last during the scan. The tie-break is
//! deterministic and load-bearing: downstream alignment picks its anchor
//! phrase from this result, so changing it changes which anchor ambiguous
//! documents get.

/// Minimum character length for a usable phrase.
pub const DEFAULT_MIN_PHRASE: usize = 8;

/// The longest word sequence occurring verbatim in both `a` and `b`, or the
/// empty string when no shared phrase reaches `min_length` characters.
///
/// A non-empty result is always a literal substring of both inputs.
///
/// ```
/// use recital_text::{DEFAULT_MIN_PHRASE, common_phrase};
///
/// let a = "He perceives earth as earth";
/// let b = "He perceives water as water";
/// assert_eq!(common_phrase(a, b, DEFAULT_MIN_PHRASE), "He perceives");
/// ```
pub fn common_phrase(a: &str, b: &str, min_length: usize) -> String {
    let x: Vec<&str> = a.split(' ').collect();
    let y: Vec<&str> = b.split(' ').collect();

    // LCS length table over words. `recorded[len]` remembers the word that
    // most recently extended a subsequence to `len`.
    let mut c = vec![vec![0usize; y.len() + 1]; x.len() + 1];
    let mut recorded: Vec<Option<&str>> = vec![None; x.len().min(y.len()) + 1];
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            if x[i - 1] == y[j - 1] {
                c[i][j] = c[i - 1][j - 1] + 1;
                recorded[c[i][j]] = Some(x[i - 1]);
            } else {
                c[i][j] = c[i][j - 1].max(c[i - 1][j]);
            }
        }
    }
    let mut words: Vec<&str> = recorded.into_iter().flatten().collect();

    while words.len() > 1 {
        let mut dropped = false;
        if !a.contains(&format!("{} {}", words[0], words[1])) {
            words.remove(0);
            dropped = true;
        } else if !a.contains(&format!(
            "{} {}",
            words[words.len() - 2],
            words[words.len() - 1]
        )) {
            words.pop();
            dropped = true;
        }

        let phrase = words.join(" ");
        if a.contains(&phrase) && b.contains(&phrase) {
            if phrase.chars().count() < min_length {
                return String::new();
            }
            return phrase;
        }
        if !dropped {
            // Both end pairs occur in `a` but the joined phrase does not
            // occur in both inputs; shorten from the end to make progress.
            words.pop();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn phrase(a: &str, b: &str) -> String {
        common_phrase(a, b, DEFAULT_MIN_PHRASE)
    }

    #[test]
    fn shared_leading_phrase() {
        let a = "Having been reborn as a god, he perceives earth as earth.";
        let b = "Having been reborn as a god, he perceives water as water.";
        let p = phrase(a, b);
        assert!(a.contains(&p) && b.contains(&p), "{p:?} not in both");
        assert_eq!(p, "Having been reborn as a god, he perceives");
    }

    #[test]
    fn shared_inner_phrase() {
        let a = "directly knows earth as earth";
        let b = "Then he directly knows water as water";
        assert_eq!(phrase(a, b), "directly knows");
    }

    #[test]
    fn no_shared_words() {
        assert_eq!(phrase("alpha beta gamma", "delta epsilon zeta"), "");
    }

    #[test]
    fn below_min_length_is_rejected() {
        // "near at" is shared but only 7 chars
        assert_eq!(common_phrase("we sat near at dusk", "they ran near at dawn", 8), "");
        assert_eq!(
            common_phrase("we sat near at dusk", "they ran near at dawn", 4),
            "near at"
        );
    }

    #[test]
    fn single_common_word_is_unusable() {
        // One shared word never survives the trim loop
        assert_eq!(phrase("impermanence is stressful", "contemplate impermanence daily"), "");
    }

    #[test]
    fn result_is_substring_of_both() {
        let a = "Take a mendicant who, reflecting rationally, lives restraining the eye faculty.";
        let b = "Take a mendicant who, reflecting rationally, lives restraining the ear faculty.";
        let p = phrase(a, b);
        assert!(!p.is_empty());
        assert!(a.contains(&p));
        assert!(b.contains(&p));
        assert!(p.chars().count() >= DEFAULT_MIN_PHRASE);
    }

    #[test]
    fn unicode_text() {
        let a = "pathaviṁ pathavito sañjānāti extra tail";
        let b = "pathaviṁ pathavito sañjānāti other ending";
        assert_eq!(phrase(a, b), "pathaviṁ pathavito sañjānāti");
    }
}
