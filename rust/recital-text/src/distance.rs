//! Levenshtein edit distance.
//!
//! Counts the minimum number of single-character insertions, deletions, and
//! substitutions turning one string into the other. Characters are Unicode
//! scalar values, so `"ṁ"` and `"m"` differ by one substitution, not a
//! code-unit mismatch.

/// Edit distance between `s` and `t`.
///
/// ```
/// use recital_text::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("dukkha", "dukkha"), 0);
/// ```
pub fn distance(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();
    if s.is_empty() {
        return t.len();
    }
    if t.is_empty() {
        return s.len();
    }

    let mut d = vec![vec![0usize; t.len() + 1]; s.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=s.len() {
        for j in 1..=t.len() {
            let cost = if s[i - 1] == t[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[s.len()][t.len()]
}
