//! Whole-word usage search
//!
//! A candidate name counts as used when it appears as a complete identifier
//! token: `<Card />`, `import Card from`, `components: { Card }` and
//! `:is="Card"` all match, `CardList` does not.

use crate::discovery::{Corpus, CorpusEntry};
use regex::Regex;
use std::path::Path;

/// Compiled whole-word matcher for one component's candidate names
#[derive(Debug, Clone)]
pub struct UsageMatcher {
    pattern: Option<Regex>,
}

impl UsageMatcher {
    /// Build a matcher for `names`. An empty set never matches.
    pub fn new<'a, I>(names: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let alternatives: Vec<String> = names
            .into_iter()
            .filter(|name| !name.is_empty())
            .map(regex::escape)
            .collect();

        let pattern = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))?)
        };

        Ok(Self { pattern })
    }

    /// Whether any candidate appears as a whole word in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .map(|pattern| pattern.is_match(text))
            .unwrap_or(false)
    }

    /// First entry (in path order) mentioning a candidate, skipping `exclude`
    pub fn find_usage<'c>(
        &self,
        corpus: &'c Corpus,
        exclude: Option<&Path>,
    ) -> Option<CorpusEntry<'c>> {
        corpus
            .iter()
            .filter(|entry| exclude != Some(entry.path))
            .find(|entry| self.matches(entry.contents))
    }
}

/// Whether any of `candidate_names` appears as a whole word in any text
pub fn is_used<S, T>(candidate_names: &[S], corpus_texts: &[T]) -> Result<bool, regex::Error>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let matcher = UsageMatcher::new(candidate_names.iter().map(|name| name.as_ref()))?;
    Ok(corpus_texts.iter().any(|text| matcher.matches(text.as_ref())))
}
