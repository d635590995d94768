//! Job description tailoring: keyword extraction, relevance scoring and
//! the match report shown after a tailored generation.

pub mod keywords;
pub mod scorer;

pub use keywords::{KeywordCategory, SKILL_CATEGORIES};
pub use scorer::{CategoryMatches, CategoryWeights, MatchResult, RelevanceScorer, ScoredEntry};

use crate::error::Result;
use colored::Colorize;

/// A scorer paired with the matches for one job description. Renderers take
/// this to reorder sections and emphasize matching skills.
pub struct Tailoring {
    pub scorer: RelevanceScorer,
    pub matches: MatchResult,
}

impl Tailoring {
    pub fn from_job_description(job_text: &str) -> Result<Self> {
        let scorer = RelevanceScorer::new()?;
        let matches = scorer.extract_keywords(job_text);
        Ok(Self { scorer, matches })
    }
}

/// Human-readable summary of which categories matched and with which
/// keywords, highest occurrence count first.
pub fn match_report(matches: &MatchResult) -> String {
    let mut report = String::new();
    report.push_str(&format!("\n{}\n", "=".repeat(60)));
    report.push_str(&format!("{}\n", "CV TAILORING REPORT".bold()));
    report.push_str(&format!("{}\n\n", "=".repeat(60)));

    report.push_str("MATCHED KEYWORD CATEGORIES:\n");
    report.push_str(&format!("{}\n", "-".repeat(40)));

    if !matches.has_matches() {
        report.push_str("No keywords matched from job description.\n");
    } else {
        for category in matches.top_categories(usize::MAX) {
            let title = SKILL_CATEGORIES
                .iter()
                .find(|c| c.name == category.category)
                .map(|c| c.title())
                .unwrap_or_else(|| category.category.to_string());
            report.push_str(&format!(
                "\n{}: {} matches\n",
                title.cyan().bold(),
                category.occurrences
            ));
            report.push_str(&format!(
                "  Keywords: {}\n",
                category.keywords.join(", ").green()
            ));
        }
    }

    report.push_str(&format!("\n{}\n", "=".repeat(60)));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_matched_categories() {
        let tailoring =
            Tailoring::from_job_description("Python and MPC control for biogas plants").unwrap();
        let report = match_report(&tailoring.matches);
        assert!(report.contains("CV TAILORING REPORT"));
        assert!(report.contains("matches"));
        assert!(report.contains("python"));
    }

    #[test]
    fn report_handles_no_matches() {
        let tailoring = Tailoring::from_job_description("nothing relevant here").unwrap();
        let report = match_report(&tailoring.matches);
        assert!(report.contains("No keywords matched"));
    }
}
