//! Normalized skill sets shared by screening and recommendations.
//!
//! Students and recruiters enter skills as free text ("Python, React , sql"). Everything
//! downstream compares the normalized tokens only, so equality and hashing of a
//! [`SkillSet`] are plain set semantics over trimmed, lowercased, non-empty entries.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized set of skill tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Parse a comma-separated skill list. Never fails; blank input yields an empty set.
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(&normalize_token(skill))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when the sets share at least one skill. An empty `self` never overlaps.
    pub fn overlaps(&self, other: &SkillSet) -> bool {
        !self.is_empty() && self.0.intersection(&other.0).next().is_some()
    }
}

/// Free-function form of [`SkillSet::parse`].
pub fn normalize(raw: &str) -> SkillSet {
    SkillSet::parse(raw)
}

/// Free-function form of [`SkillSet::overlaps`].
pub fn overlaps(a: &SkillSet, b: &SkillSet) -> bool {
    a.overlaps(b)
}

fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|token| normalize_token(token.as_ref()))
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(tokens: Vec<String>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(skills: SkillSet) -> Self {
        skills.0.into_iter().collect()
    }
}

impl FromStr for SkillSet {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(raw))
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for skill in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(skill)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_folds_case_and_drops_blanks() {
        let skills = normalize("Python, , React ,react");
        let expected: SkillSet = ["python", "react"].into_iter().collect();
        assert_eq!(skills, expected);
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn normalize_handles_empty_and_single_values() {
        assert!(normalize("").is_empty());
        assert!(normalize(" ,  , ").is_empty());
        assert_eq!(normalize("  SQL ").iter().collect::<Vec<_>>(), vec!["sql"]);
    }

    #[test]
    fn empty_set_never_overlaps() {
        let anything = normalize("python, react");
        assert!(!overlaps(&SkillSet::default(), &anything));
        assert!(!overlaps(&SkillSet::default(), &SkillSet::default()));
    }

    #[test]
    fn any_shared_skill_overlaps() {
        let student = normalize("Python, SQL");
        let job = normalize("sql, excel");
        assert!(overlaps(&student, &job));
        assert!(!overlaps(&student, &normalize("react, css")));
    }

    #[test]
    fn contains_normalizes_the_query() {
        let skills = normalize("Machine Learning");
        assert!(skills.contains("  machine LEARNING "));
    }

    #[test]
    fn display_joins_sorted_tokens() {
        assert_eq!(normalize("React, CSS,javascript").to_string(), "css, javascript, react");
    }

    #[test]
    fn deserialization_renormalizes_tokens() {
        let skills: SkillSet =
            serde_json::from_str(r#"[" Rust ", "rust", "", "Go"]"#).expect("valid json");
        assert_eq!(skills, normalize("go, rust"));
        let encoded = serde_json::to_string(&skills).expect("serializes");
        assert_eq!(encoded, r#"["go","rust"]"#);
    }
}
