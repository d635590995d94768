//! Configuration for CV generation
//!
//! A JSON document with three top-level maps: `cv_sections` (which sections
//! render), `cv_settings` (limits and filters) and `latex_settings`
//! (document preamble knobs). Merging user values over the defaults is a
//! SHALLOW top-level merge: a user-supplied top-level key replaces the whole
//! default key, so a partial `cv_sections` map leaves every unnamed section
//! disabled. Keys absent inside a user-supplied map do not fall back to the
//! documented defaults.

use crate::error::{CvTailorError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cv_sections: SectionToggles,
    pub cv_settings: CvSettings,
    pub latex_settings: LatexSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionToggles {
    #[serde(default)]
    pub about: bool,
    #[serde(default)]
    pub experience: bool,
    #[serde(default)]
    pub education: bool,
    #[serde(default)]
    pub projects: bool,
    #[serde(default)]
    pub publications: bool,
    #[serde(default)]
    pub activities: bool,
    #[serde(default)]
    pub skills: bool,
    #[serde(default)]
    pub hobbies: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvSettings {
    #[serde(default)]
    pub max_experience: Option<usize>,
    #[serde(default)]
    pub max_projects: Option<usize>,
    #[serde(default)]
    pub max_publications: Option<usize>,
    #[serde(default)]
    pub max_activities: Option<usize>,
    #[serde(default)]
    pub include_abstracts: bool,
    #[serde(default)]
    pub projects_status_filter: Option<String>,
    #[serde(default)]
    pub activities_type_filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatexSettings {
    #[serde(default)]
    pub document_class: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub geometry: String,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            about: true,
            experience: true,
            education: true,
            projects: true,
            publications: false,
            activities: false,
            skills: true,
            hobbies: true,
        }
    }
}

impl Default for CvSettings {
    fn default() -> Self {
        Self {
            max_experience: None,
            max_projects: None,
            max_publications: Some(5),
            max_activities: None,
            include_abstracts: false,
            projects_status_filter: None,
            activities_type_filter: None,
        }
    }
}

impl Default for LatexSettings {
    fn default() -> Self {
        Self {
            document_class: "moderncv".to_string(),
            style: "classic".to_string(),
            color: "blue".to_string(),
            geometry: "scale=0.8".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cv_sections: SectionToggles::default(),
            cv_settings: CvSettings::default(),
            latex_settings: LatexSettings::default(),
        }
    }
}

impl SectionToggles {
    /// Every section flag in document order.
    pub fn all(&self) -> [(&'static str, bool); 8] {
        [
            ("about", self.about),
            ("experience", self.experience),
            ("education", self.education),
            ("projects", self.projects),
            ("publications", self.publications),
            ("activities", self.activities),
            ("skills", self.skills),
            ("hobbies", self.hobbies),
        ]
    }

    /// Enabled section names in document order.
    pub fn enabled(&self) -> Vec<&'static str> {
        self.all()
            .into_iter()
            .filter_map(|(name, on)| on.then_some(name))
            .collect()
    }
}

impl Config {
    /// Load the configuration, creating the file with defaults on first run.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let user: Value =
                serde_json::from_str(&content).map_err(|e| CvTailorError::MalformedInput {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            merge_config(&Config::default(), &user)
        } else {
            let config = Config::default();
            config.save(path)?;
            info!("created default config file: {}", path.display());
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Merge a user-supplied configuration document over the defaults.
///
/// Shallow by design: each top-level key present in `user` overwrites the
/// corresponding default key entirely. Unknown keys are ignored.
pub fn merge_config(default: &Config, user: &Value) -> Result<Config> {
    let mut merged = serde_json::to_value(default)?;

    match (merged.as_object_mut(), user.as_object()) {
        (Some(base), Some(overrides)) => {
            for (key, value) in overrides {
                base.insert(key.clone(), value.clone());
            }
        }
        (_, None) => {
            return Err(CvTailorError::Configuration(
                "configuration document must be a JSON object".to_string(),
            ));
        }
        _ => {}
    }

    serde_json::from_value(merged)
        .map_err(|e| CvTailorError::Configuration(format!("invalid configuration: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert!(config.cv_sections.about);
        assert!(!config.cv_sections.publications);
        assert!(!config.cv_sections.activities);
        assert_eq!(config.cv_settings.max_publications, Some(5));
        assert_eq!(config.latex_settings.document_class, "moderncv");
        assert_eq!(
            config.cv_sections.enabled(),
            vec!["about", "experience", "education", "projects", "skills", "hobbies"]
        );
    }

    #[test]
    fn partial_cv_sections_replaces_the_whole_map() {
        let user = json!({"cv_sections": {"skills": false}});
        let merged = merge_config(&Config::default(), &user).unwrap();

        // Shallow merge: every section not named by the user resolves to
        // disabled, not to its default.
        assert!(!merged.cv_sections.skills);
        assert!(!merged.cv_sections.about);
        assert!(!merged.cv_sections.experience);
        assert!(merged.cv_sections.enabled().is_empty());

        // Untouched top-level keys keep their defaults.
        assert_eq!(merged.cv_settings.max_publications, Some(5));
        assert_eq!(merged.latex_settings.style, "classic");
    }

    #[test]
    fn replaced_settings_map_loses_unnamed_defaults() {
        let user = json!({"cv_settings": {"max_experience": 3}});
        let merged = merge_config(&Config::default(), &user).unwrap();
        assert_eq!(merged.cv_settings.max_experience, Some(3));
        assert_eq!(merged.cv_settings.max_publications, None);
        assert!(!merged.cv_settings.include_abstracts);
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let user = json!({"html_settings": {"theme": "dark"}});
        let merged = merge_config(&Config::default(), &user).unwrap();
        assert!(merged.cv_sections.about);
    }

    #[test]
    fn non_object_config_is_rejected() {
        let user = json!(["not", "a", "map"]);
        assert!(merge_config(&Config::default(), &user).is_err());
    }

    #[test]
    fn load_creates_default_file_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv-config.json");

        let config = Config::load(&path).unwrap();
        assert!(path.exists());
        assert!(config.cv_sections.experience);

        // Second load parses the file it just wrote.
        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.cv_settings.max_publications, Some(5));
    }

    #[test]
    fn load_merges_user_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv-config.json");
        fs::write(&path, r#"{"cv_sections": {"publications": true}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.cv_sections.publications);
        assert!(!config.cv_sections.about);
        assert_eq!(config.latex_settings.color, "blue");
    }

    #[test]
    fn malformed_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv-config.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(CvTailorError::MalformedInput { .. })
        ));
    }
}
