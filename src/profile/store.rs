//! Loading the profile from disk

use crate::error::{CvTailorError, Result};
use crate::profile::model::Profile;
use log::info;
use std::fs;
use std::path::Path;

/// Load the CV data file. An absent file aborts the run before any output
/// is written; so does a parse failure, reported with the underlying error.
pub fn load_profile(path: &Path) -> Result<Profile> {
    if !path.exists() {
        return Err(CvTailorError::MissingInput(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let profile: Profile =
        serde_json::from_str(&content).map_err(|e| CvTailorError::MalformedInput {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(
        "loaded profile: {} experience, {} projects, {} publications",
        profile.experience.len(),
        profile.projects.len(),
        profile.publications.len()
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match load_profile(&path) {
            Err(CvTailorError::MissingInput(p)) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn malformed_json_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{{ not json").unwrap();

        match load_profile(&path) {
            Err(CvTailorError::MalformedInput { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected MalformedInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn valid_profile_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv-data.json");
        fs::write(
            &path,
            r#"{"personal": {"name": {"first": "Ada", "last": "Lovelace"}}}"#,
        )
        .unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.personal.name.last, "Lovelace");
    }
}
