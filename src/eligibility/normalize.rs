// src/eligibility/normalize.rs

//! Text canonicalization for grade matching.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Compact grade tokens such as `P4`, `lsc10` or `NO2`.
static COMPACT_GRADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(P|D|G|SB|LSC|NO)([0-9]+)\b").expect("compact grade regex")
});

/// Fold dash-like code points to an ASCII hyphen.
fn fold_dash(c: char) -> char {
    match c {
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}' => '-',
        other => other,
    }
}

/// Canonicalize free text: NFKD, uppercase, dash folding, compact grade
/// expansion (`P4` -> `P-4`) and whitespace collapse.
///
/// Uppercasing follows decomposition: `ª` and `ᵖ` decompose to lowercase.
/// Total and idempotent.
pub fn normalize(text: &str) -> String {
    let decomposed: String = text.nfkd().collect();
    let folded: String = decomposed
        .to_uppercase()
        .nfkd()
        .map(fold_dash)
        .collect();
    let expanded = COMPACT_GRADE.replace_all(&folded, "${1}-${2}");
    expanded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_compact_grades() {
        assert_eq!(normalize("Officer p4"), "OFFICER P-4");
        assert_eq!(normalize("LSC10 and sb2"), "LSC-10 AND SB-2");
        assert_eq!(normalize("NO3 D1"), "NO-3 D-1");
    }

    #[test]
    fn test_leaves_embedded_tokens_alone() {
        assert_eq!(normalize("COVP4 P4X"), "COVP4 P4X");
    }

    #[test]
    fn test_folds_unicode_dashes() {
        assert_eq!(normalize("P\u{2013}3"), "P-3");
        assert_eq!(normalize("D\u{2014}1"), "D-1");
        assert_eq!(normalize("G\u{2212}5"), "G-5");
        assert_eq!(normalize("SB\u{FF0D}2"), "SB-2");
        assert_eq!(normalize("LSC\u{FE63}4"), "LSC-4");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            normalize("  Senior\u{00A0}Protection \n\t Officer  "),
            "SENIOR PROTECTION OFFICER"
        );
    }

    #[test]
    fn test_compatibility_decomposition() {
        // Fullwidth letters and digits decompose to ASCII.
        assert_eq!(normalize("\u{FF30}\u{FF14}"), "P-4");
    }

    #[test]
    fn test_uppercases_decomposed_letters() {
        assert_eq!(normalize("\u{AA}"), "A");
        assert_eq!(normalize("\u{207F}"), "N");
        assert_eq!(normalize("Officer \u{1D56}4"), "OFFICER P-4");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Protection Officer P3",
            "  Assistant\u{2013}G5  Consultant ",
            "NOB lsc12 fellowship",
            "Ünïcödé — text\u{2010}with\u{FE58}dashes d2",
            "ﬁnance ofﬁcer p-5",
            "\u{AA}",
            "\u{207F}",
            "Officer \u{1D56}4",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
