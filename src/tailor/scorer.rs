//! Keyword relevance scoring against a job description
//!
//! Matching is whole-word and case-insensitive over case-folded text. The
//! match result is a plain return value; nothing accumulates on the scorer.

use crate::error::{CvTailorError, Result};
use crate::profile::model::ScoringText;
use crate::tailor::keywords::SKILL_CATEGORIES;
use regex::Regex;
use std::collections::HashMap;

/// Relevance scorer with one precompiled whole-word pattern per keyword.
pub struct RelevanceScorer {
    compiled: Vec<CompiledKeyword>,
}

struct CompiledKeyword {
    category: usize,
    keyword: &'static str,
    pattern: Regex,
}

/// Per-category match state for one job description.
///
/// `keywords` is the subset of the category's keywords found at least once;
/// `occurrences` accumulates total occurrences across those keywords and is
/// used only for the human-readable report.
#[derive(Debug, Clone)]
pub struct CategoryMatches {
    pub category: &'static str,
    pub keywords: Vec<&'static str>,
    pub occurrences: usize,
}

/// Result of scanning a job description, one entry per built-in category in
/// declaration order. Produced by [`RelevanceScorer::extract_keywords`].
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub categories: Vec<CategoryMatches>,
}

impl MatchResult {
    pub fn has_matches(&self) -> bool {
        self.categories.iter().any(|c| !c.keywords.is_empty())
    }

    /// Matched categories ordered by occurrence count, highest first.
    /// Ties keep category declaration order.
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryMatches> {
        let mut matched: Vec<&CategoryMatches> = self
            .categories
            .iter()
            .filter(|c| !c.keywords.is_empty())
            .collect();
        matched.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        matched.truncate(limit);
        matched
    }

    /// Whether a skill string contains any matched keyword as a substring.
    pub fn highlights(&self, skill: &str) -> bool {
        let lowered = skill.to_lowercase();
        self.categories
            .iter()
            .flat_map(|c| c.keywords.iter())
            .any(|keyword| lowered.contains(keyword))
    }
}

/// Per-category score weights. Every category defaults to 1.0.
#[derive(Debug, Clone, Default)]
pub struct CategoryWeights(HashMap<&'static str, f64>);

impl CategoryWeights {
    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(1.0)
    }

    pub fn set(&mut self, category: &'static str, weight: f64) {
        self.0.insert(category, weight);
    }
}

/// An entry together with its relevance score.
#[derive(Debug)]
pub struct ScoredEntry<'a, T> {
    pub entry: &'a T,
    pub score: f64,
}

impl RelevanceScorer {
    pub fn new() -> Result<Self> {
        let mut compiled = Vec::new();
        for (index, category) in SKILL_CATEGORIES.iter().enumerate() {
            for keyword in category.keywords {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
                    .map_err(|e| {
                        CvTailorError::Scoring(format!("keyword pattern '{}': {}", keyword, e))
                    })?;
                compiled.push(CompiledKeyword {
                    category: index,
                    keyword,
                    pattern,
                });
            }
        }
        Ok(Self { compiled })
    }

    /// Scan a job description for every built-in keyword.
    pub fn extract_keywords(&self, job_text: &str) -> MatchResult {
        let lowered = job_text.to_lowercase();
        let mut categories: Vec<CategoryMatches> = SKILL_CATEGORIES
            .iter()
            .map(|c| CategoryMatches {
                category: c.name,
                keywords: Vec::new(),
                occurrences: 0,
            })
            .collect();

        for entry in &self.compiled {
            let count = entry.pattern.find_iter(&lowered).count();
            if count > 0 {
                let matches = &mut categories[entry.category];
                matches.keywords.push(entry.keyword);
                matches.occurrences += count;
            }
        }

        MatchResult { categories }
    }

    /// Total occurrence count of every matched keyword in `text`,
    /// all categories weighted 1.0.
    pub fn score_text(&self, text: &str, matches: &MatchResult) -> f64 {
        self.score_weighted(text, matches, &CategoryWeights::default())
    }

    pub fn score_weighted(
        &self,
        text: &str,
        matches: &MatchResult,
        weights: &CategoryWeights,
    ) -> f64 {
        let lowered = text.to_lowercase();
        let mut score = 0.0;

        for entry in &self.compiled {
            let Some(category) = matches.categories.get(entry.category) else {
                continue;
            };
            if category.keywords.contains(&entry.keyword) {
                let count = entry.pattern.find_iter(&lowered).count();
                score += count as f64 * weights.get(category.category);
            }
        }

        score
    }

    /// Score every entry and order highest first. The sort is stable, so
    /// entries with equal scores keep their input order; with no matches at
    /// all the ranking is the identity.
    pub fn rank<'a, T: ScoringText>(
        &self,
        entries: &'a [T],
        matches: &MatchResult,
    ) -> Vec<ScoredEntry<'a, T>> {
        let mut scored: Vec<ScoredEntry<'a, T>> = entries
            .iter()
            .map(|entry| ScoredEntry {
                score: self.score_text(&entry.scoring_text(), matches),
                entry,
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::Experience;

    fn experience(description: &str) -> Experience {
        Experience {
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn extracts_category_tagged_keywords() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("We need Python and MPC control experience");

        let programming = &matches.categories[0];
        assert_eq!(programming.category, "programming");
        assert_eq!(programming.keywords, vec!["python"]);

        let control = matches
            .categories
            .iter()
            .find(|c| c.category == "control")
            .unwrap();
        assert!(control.keywords.contains(&"control"));
        assert!(control.keywords.contains(&"mpc"));
    }

    #[test]
    fn matching_is_whole_word_only() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("pythonic scripts and controllers");
        let programming = &matches.categories[0];
        assert!(programming.keywords.is_empty());

        // "controllers" must not count as "controller" but "controller" does
        let control = matches
            .categories
            .iter()
            .find(|c| c.category == "control")
            .unwrap();
        assert!(!control.keywords.contains(&"controller"));
    }

    #[test]
    fn occurrences_accumulate_totals_not_presence() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("python python python");
        assert_eq!(matches.categories[0].occurrences, 3);
        assert_eq!(matches.categories[0].keywords, vec!["python"]);
    }

    #[test]
    fn empty_job_description_yields_identity_ranking() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("");
        assert!(!matches.has_matches());

        let entries = vec![experience("first"), experience("second"), experience("third")];
        let ranked = scorer.rank(&entries, &matches);
        let order: Vec<&str> = ranked.iter().map(|s| s.entry.description.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
        assert!(ranked.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn ranking_is_stable_for_equal_scores() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("python");

        let entries = vec![
            experience("Used Python daily"),
            experience("Also used Python daily"),
            experience("No relevant tools"),
        ];
        let ranked = scorer.rank(&entries, &matches);
        assert_eq!(ranked[0].entry.description, "Used Python daily");
        assert_eq!(ranked[1].entry.description, "Also used Python daily");
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn relevant_entry_ranks_first() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("We need Python and MPC control experience");

        let entries = vec![
            experience("Led team meetings"),
            experience("Designed MPC controllers in Python"),
        ];
        let ranked = scorer.rank(&entries, &matches);
        assert_eq!(ranked[0].entry.description, "Designed MPC controllers in Python");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn weights_scale_category_contributions() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("python");

        let mut weights = CategoryWeights::default();
        weights.set("programming", 2.0);

        let unweighted = scorer.score_text("python here", &matches);
        let weighted = scorer.score_weighted("python here", &matches, &weights);
        assert_eq!(weighted, unweighted * 2.0);
    }

    #[test]
    fn top_categories_order_by_occurrences() {
        let scorer = RelevanceScorer::new().unwrap();
        let matches = scorer.extract_keywords("control control control python");
        let top = matches.top_categories(2);
        assert_eq!(top[0].category, "control");
        assert_eq!(top[1].category, "programming");
    }
}
