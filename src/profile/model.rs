//! CV profile data structures
//!
//! Every field a renderer reads is tolerant of absence: a missing field
//! deserializes to its empty value and is never an error.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub personal: Personal,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub hobbies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Personal {
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub social: Social,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub researchgate: String,
    #[serde(default)]
    pub google_scholar: String,
    #[serde(default)]
    pub orcid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thesis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: String,
}

/// A publication record, either hand-maintained in the data file or merged
/// from the bibliography-fetch collaborator. Fetched records carry `authors`
/// as a string or a list and `year` as a string or a number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub authors: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub doi: String,
    #[serde(default)]
    pub citations: u32,
}

impl Publication {
    /// Numeric year for newest-first ordering; unparseable years sort last.
    pub fn year_value(&self) -> i32 {
        self.year.trim().parse().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub event: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub process_engineering: Vec<String>,
    #[serde(default)]
    pub data_science: Vec<String>,
    #[serde(default)]
    pub programming: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Skills {
    /// The four skill groups in render order, with display titles.
    pub fn groups(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Process Engineering", &self.process_engineering),
            ("Data Science", &self.data_science),
            ("Programming", &self.programming),
            ("Languages", &self.languages),
        ]
    }
}

/// The text an entry exposes to the relevance scorer.
pub trait ScoringText {
    fn scoring_text(&self) -> String;
}

impl<T: ScoringText> ScoringText for &T {
    fn scoring_text(&self) -> String {
        (**self).scoring_text()
    }
}

impl ScoringText for Experience {
    fn scoring_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.position,
            self.organization,
            self.description,
            self.responsibilities.join(" ")
        )
    }
}

impl ScoringText for Project {
    fn scoring_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.organization)
    }
}

impl ScoringText for Publication {
    fn scoring_text(&self) -> String {
        format!("{} {} {}", self.title, self.abstract_text, self.venue)
    }
}

fn string_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s,
        StringOrList::Many(list) => list.join(", "),
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_empty_values() {
        let exp: Experience = serde_json::from_str(r#"{"position": "Engineer"}"#).unwrap();
        assert_eq!(exp.position, "Engineer");
        assert_eq!(exp.organization, "");
        assert!(exp.responsibilities.is_empty());
    }

    #[test]
    fn scoring_text_concatenates_entry_fields() {
        let exp = Experience {
            position: "Research Fellow".to_string(),
            organization: "University".to_string(),
            description: "MPC design".to_string(),
            responsibilities: vec!["Modelling".to_string(), "Teaching".to_string()],
            ..Default::default()
        };
        let text = exp.scoring_text();
        assert!(text.contains("Research Fellow"));
        assert!(text.contains("MPC design"));
        assert!(text.contains("Modelling Teaching"));
    }

    #[test]
    fn publication_authors_accept_string_or_list() {
        let from_string: Publication =
            serde_json::from_str(r#"{"title": "t", "authors": "A and B"}"#).unwrap();
        assert_eq!(from_string.authors, "A and B");

        let from_list: Publication =
            serde_json::from_str(r#"{"title": "t", "authors": ["A", "B"]}"#).unwrap();
        assert_eq!(from_list.authors, "A, B");
    }

    #[test]
    fn publication_year_accepts_string_or_number() {
        let from_number: Publication =
            serde_json::from_str(r#"{"title": "t", "year": 2023}"#).unwrap();
        assert_eq!(from_number.year, "2023");
        assert_eq!(from_number.year_value(), 2023);

        let from_string: Publication =
            serde_json::from_str(r#"{"title": "t", "year": "2021"}"#).unwrap();
        assert_eq!(from_string.year_value(), 2021);

        let empty: Publication = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
        assert_eq!(empty.year_value(), 0);
    }

    #[test]
    fn full_profile_parses() {
        let json = r#"{
            "personal": {"name": {"first": "Ada", "last": "Lovelace"}, "title": "Engineer"},
            "experience": [{"position": "Analyst"}],
            "skills": {"programming": ["Python", "Rust"]},
            "hobbies": {"outdoor_activities": "Hiking, cycling"}
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.personal.name.first, "Ada");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.skills.programming.len(), 2);
        assert_eq!(
            profile.hobbies.get("outdoor_activities").map(String::as_str),
            Some("Hiking, cycling")
        );
    }
}
