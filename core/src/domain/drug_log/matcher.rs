//! Comparison of a user-reported reaction with officially reported terms.
//!
//! Matching is a loose substring test: a reported term matches when it
//! contains the normalized reaction anywhere. Short or common words
//! ("pain") therefore match many terms.

use crate::domain::drug_log::{entities::ReactionAssessment, value_objects::AdverseEventReport};

/// Number of other reported terms quoted back in a positive advice.
pub const MAX_OTHER_TERMS: usize = 5;

pub const MATCH_MARKER: &str = "✅";
pub const NO_MATCH_MARKER: &str = "⚠️";

/// Every reaction term across all reports, lowercased, in report order.
pub fn collect_reaction_terms(reports: &[AdverseEventReport]) -> Vec<String> {
    reports
        .iter()
        .flat_map(|report| report.reactions.iter())
        .map(|term| term.to_lowercase())
        .collect()
}

pub fn normalize_reaction(reaction: &str) -> String {
    reaction.trim().to_lowercase()
}

pub fn reaction_matches(terms: &[String], reaction: &str) -> bool {
    let needle = normalize_reaction(reaction);
    terms.iter().any(|term| term.contains(&needle))
}

/// Up to [`MAX_OTHER_TERMS`] distinct terms other than the reaction itself.
pub fn other_terms<'a>(terms: &'a [String], reaction: &str) -> Vec<&'a str> {
    let needle = normalize_reaction(reaction);
    let mut others: Vec<&str> = Vec::new();

    for term in terms {
        if others.len() == MAX_OTHER_TERMS {
            break;
        }
        if *term == needle || others.contains(&term.as_str()) {
            continue;
        }
        others.push(term.as_str());
    }

    others
}

pub fn assess_reaction(drug_name: &str, reaction: &str, terms: &[String]) -> ReactionAssessment {
    if reaction_matches(terms, reaction) {
        let others = other_terms(terms, reaction).join(", ");
        ReactionAssessment {
            matched: true,
            advice: format!(
                "{MATCH_MARKER} Your reaction matches a known side effect of {drug_name}. Here are other common side effects: {others}"
            ),
        }
    } else {
        ReactionAssessment {
            matched: false,
            advice: format!(
                "{NO_MATCH_MARKER} Your reaction (\"{reaction}\") is not listed as a common side effect of {drug_name}. If symptoms persist, please consult a doctor."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_collect_reaction_terms_flattens_and_lowercases() {
        let reports = vec![
            AdverseEventReport::new(["Nausea", "HEADACHE"]),
            AdverseEventReport::default(),
            AdverseEventReport::new(["Dizziness", "nausea"]),
        ];

        assert_eq!(
            collect_reaction_terms(&reports),
            terms(&["nausea", "headache", "dizziness", "nausea"])
        );
    }

    #[test]
    fn test_no_terms_never_match() {
        assert!(!reaction_matches(&[], "nausea"));
    }

    #[test]
    fn test_match_is_case_insensitive_and_trimmed() {
        let reported = terms(&["nausea", "headache"]);
        assert!(reaction_matches(&reported, "  NaUsEa \n"));
    }

    #[test]
    fn test_match_is_substring_not_token() {
        let reported = terms(&["abdominal pain upper"]);
        assert!(reaction_matches(&reported, "pain"));
        assert!(reaction_matches(&reported, "nal pa"));
        assert!(!reaction_matches(&reported, "upper abdominal pain"));
    }

    #[test]
    fn test_reported_term_must_contain_reaction_not_the_reverse() {
        let reported = terms(&["rash"]);
        assert!(!reaction_matches(&reported, "rash on arms"));
    }

    #[test]
    fn test_other_terms_excludes_reaction_dedups_and_caps() {
        let reported = terms(&[
            "nausea", "headache", "headache", "dizziness", "nausea", "rash", "fatigue", "vomiting",
            "insomnia",
        ]);

        assert_eq!(
            other_terms(&reported, "Nausea"),
            vec!["headache", "dizziness", "rash", "fatigue", "vomiting"]
        );
    }

    #[test]
    fn test_other_terms_keeps_terms_that_only_contain_reaction() {
        let reported = terms(&["nausea", "nausea and vomiting"]);
        assert_eq!(other_terms(&reported, "nausea"), vec!["nausea and vomiting"]);
    }

    #[test]
    fn test_assess_reaction_ibuprofen_nausea() {
        let reported = terms(&["nausea", "headache", "dizziness"]);
        let assessment = assess_reaction("Ibuprofen", "nausea", &reported);

        assert!(assessment.matched);
        assert!(assessment.advice.starts_with(MATCH_MARKER));
        assert_eq!(
            assessment.advice,
            "✅ Your reaction matches a known side effect of Ibuprofen. Here are other common side effects: headache, dizziness"
        );
    }

    #[test]
    fn test_assess_reaction_no_match_echoes_original_text() {
        let reported = terms(&["nausea"]);
        let assessment = assess_reaction("Ibuprofen", "Itchy Eyes", &reported);

        assert!(!assessment.matched);
        assert!(assessment.advice.starts_with(NO_MATCH_MARKER));
        assert!(assessment.advice.contains("(\"Itchy Eyes\")"));
        assert!(assessment.advice.ends_with("please consult a doctor."));
    }

    #[test]
    fn test_assess_reaction_with_empty_terms_is_cautionary() {
        let assessment = assess_reaction("Unknownium", "nausea", &[]);
        assert!(!assessment.matched);
        assert!(assessment.advice.contains("Unknownium"));
    }
}
