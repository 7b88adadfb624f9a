// src/eligibility/mod.rs

//! Eligibility policy for postings.
//!
//! Included: professional and director grades (P-1..P-5, D-1, D-2) and
//! internships/fellowships. Excluded: consultancies, general service (G),
//! national officer (NO), service contract (SB) and local service contract
//! (LSC) grades.
//!
//! The checks run in strict priority order:
//!
//! 1. consultant mention -> reject
//! 2. excluded grade -> reject
//! 3. included grade -> accept
//! 4. internship/fellowship keyword -> accept
//! 5. otherwise undecided (rejected when no more text is available)

mod normalize;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

pub use normalize::normalize;

/// Grade codes that qualify a posting.
pub const INCLUDED_GRADES: [&str; 7] = ["P-1", "P-2", "P-3", "P-4", "P-5", "D-1", "D-2"];

static EXCLUDED_GRADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:G-[1-7]|NO-?[A-D]|SB-[1-4]|LSC-[0-9]{1,2})\b").expect("excluded grade regex")
});

static CONSULTANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bCONSULTAN").expect("consultant regex"));

static INTERN_OR_FELLOWSHIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:INTERN(?:SHIP)?S?|FELLOWSHIPS?)\b").expect("intern regex")
});

/// Outcome of one classification stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
    Undecided,
}

impl Verdict {
    pub fn is_decided(self) -> bool {
        self != Verdict::Undecided
    }
}

/// Included grade codes present in `text`, sorted.
pub fn detected_grades(text: &str) -> BTreeSet<&'static str> {
    let normalized = normalize(text);
    INCLUDED_GRADES
        .iter()
        .copied()
        .filter(|grade| normalized.contains(grade))
        .collect()
}

/// Whether `text` mentions a G, NO, SB or LSC grade.
pub fn is_excluded_grade(text: &str) -> bool {
    EXCLUDED_GRADE.is_match(&normalize(text))
}

/// Whether `text` mentions a consultant or consultancy.
pub fn is_consultant(text: &str) -> bool {
    CONSULTANT.is_match(text)
}

/// Whether `text` mentions an internship or fellowship.
pub fn is_intern_or_fellowship(text: &str) -> bool {
    INTERN_OR_FELLOWSHIP.is_match(text)
}

/// Every classification signal of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    pub included_grades: BTreeSet<&'static str>,
    pub is_excluded_grade: bool,
    pub is_consultant: bool,
    pub is_intern_or_fellowship: bool,
}

impl Signals {
    pub fn from_text(text: &str) -> Self {
        Self {
            included_grades: detected_grades(text),
            is_excluded_grade: is_excluded_grade(text),
            is_consultant: is_consultant(text),
            is_intern_or_fellowship: is_intern_or_fellowship(text),
        }
    }

    /// Apply the priority order; `Undecided` when no rule fires.
    pub fn verdict(&self) -> Verdict {
        if self.is_consultant || self.is_excluded_grade {
            Verdict::Reject
        } else if !self.included_grades.is_empty() || self.is_intern_or_fellowship {
            Verdict::Accept
        } else {
            Verdict::Undecided
        }
    }
}

/// Classify `text`, short-circuiting on the first rule that fires.
pub fn classify(text: &str) -> Verdict {
    if is_consultant(text) || is_excluded_grade(text) {
        return Verdict::Reject;
    }
    if !detected_grades(text).is_empty() || is_intern_or_fellowship(text) {
        return Verdict::Accept;
    }
    Verdict::Undecided
}

/// Final inclusion decision for `text`.
pub fn should_include(text: &str) -> bool {
    classify(text) == Verdict::Accept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consultant_beats_any_grade() {
        assert!(!should_include("P-4 Consultant"));
        assert!(!should_include("Senior consultancy, D-1"));
        assert!(!should_include("CONSULTANT internship P3"));
    }

    #[test]
    fn test_excluded_grade_beats_included_grade() {
        assert!(!should_include("P4 G-5"));
        assert!(!should_include("Associate NOB P-2"));
        assert!(!should_include("Clerk LSC-3 P-3"));
        assert!(!should_include("Driver SB2 internship"));
    }

    #[test]
    fn test_compact_grade_is_detected() {
        let grades = detected_grades("Protection Officer P4");
        assert_eq!(grades.into_iter().collect::<Vec<_>>(), vec!["P-4"]);
        assert!(should_include("Protection Officer P4"));
    }

    #[test]
    fn test_compatibility_letter_grade_is_detected() {
        let text = "Officer \u{1D56}4";
        assert_eq!(detected_grades(text).into_iter().collect::<Vec<_>>(), vec!["P-4"]);
        assert!(should_include(text));
    }

    #[test]
    fn test_internship_alone_is_included() {
        assert!(should_include("Internship"));
        assert!(should_include("Legal Intern - Geneva"));
        assert!(should_include("Junior Professional Fellowship"));
        assert!(should_include("Summer interns"));
    }

    #[test]
    fn test_intern_keyword_is_a_whole_word() {
        assert!(!is_intern_or_fellowship("International Protection"));
        assert!(!is_intern_or_fellowship("Internal Audit"));
    }

    #[test]
    fn test_excluded_grade_forms() {
        for text in ["G-1", "g7", "NOA", "NOD", "NO-C", "SB-4", "LSC-3", "lsc12"] {
            assert!(is_excluded_grade(text), "{text} should be excluded");
        }
        for text in ["G-8", "SB-5", "LSC-100", "NOE", "P-3"] {
            assert!(!is_excluded_grade(text), "{text} should not be excluded");
        }
    }

    #[test]
    fn test_consultant_requires_word_start() {
        assert!(is_consultant("consultancy"));
        assert!(is_consultant("Senior CONSULTANT"));
        assert!(!is_consultant("Subconsultants"));
    }

    #[test]
    fn test_nothing_recognised_is_undecided() {
        assert_eq!(classify("Senior Protection Officer Geneva"), Verdict::Undecided);
        assert!(!should_include("Senior Protection Officer Geneva"));
    }

    #[test]
    fn test_signals_match_classify() {
        for text in [
            "P-4 Consultant",
            "P4 G-5",
            "Protection Officer P3",
            "Internship",
            "Driver",
            "D2 Director fellowship",
        ] {
            assert_eq!(Signals::from_text(text).verdict(), classify(text), "{text}");
        }
    }

    #[test]
    fn test_grades_are_sorted_and_deduplicated() {
        let grades = detected_grades("D-1 or P5, p-5, d1");
        assert_eq!(grades.into_iter().collect::<Vec<_>>(), vec!["D-1", "P-5"]);
    }
}
