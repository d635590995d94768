//! Merging fetched publication records into the CV data file
//!
//! The bibliography-fetch collaborator produces a JSON list of records
//! (title, authors, venue, year, abstract, url, citations). Only the
//! `publications` key of the data file is rewritten; every other section
//! stays as the user wrote it.

use crate::error::{CvTailorError, Result};
use crate::profile::model::Publication;
use log::info;
use serde_json::Value;
use std::cmp::Reverse;
use std::fs;
use std::path::Path;

/// Load a fetched-records file.
pub fn load_records(path: &Path) -> Result<Vec<Publication>> {
    if !path.exists() {
        return Err(CvTailorError::MissingInput(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CvTailorError::MalformedInput {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Merge fetched records into an existing publication list. A record
/// replaces the entry with the same normalized title, otherwise it is
/// appended; the result is ordered newest-first by numeric year.
pub fn merge_records(existing: &[Publication], fetched: &[Publication]) -> Vec<Publication> {
    let mut merged: Vec<Publication> = existing.to_vec();

    for record in fetched {
        let key = normalize_title(&record.title);
        match merged.iter_mut().find(|p| normalize_title(&p.title) == key) {
            Some(slot) => *slot = record.clone(),
            None => merged.push(record.clone()),
        }
    }

    merged.sort_by_key(|p| Reverse(p.year_value()));
    merged
}

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Merge a fetched-records file into the data file on disk.
/// Returns the total number of publications after the merge.
pub fn merge_into_data_file(data_path: &Path, records_path: &Path) -> Result<usize> {
    let records = load_records(records_path)?;

    if !data_path.exists() {
        return Err(CvTailorError::MissingInput(data_path.to_path_buf()));
    }
    let content = fs::read_to_string(data_path)?;
    let mut data: Value =
        serde_json::from_str(&content).map_err(|e| CvTailorError::MalformedInput {
            path: data_path.to_path_buf(),
            source: e,
        })?;

    let map = data.as_object_mut().ok_or_else(|| {
        CvTailorError::InvalidInput("data file must be a JSON object".to_string())
    })?;

    let existing: Vec<Publication> = match map.get("publications") {
        Some(value) => serde_json::from_value(value.clone())?,
        None => Vec::new(),
    };

    let merged = merge_records(&existing, &records);
    let total = merged.len();
    map.insert("publications".to_string(), serde_json::to_value(&merged)?);

    fs::write(data_path, serde_json::to_string_pretty(&data)?)?;
    info!(
        "merged {} fetched records into {} ({} publications total)",
        records.len(),
        data_path.display(),
        total
    );

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(title: &str, year: &str) -> Publication {
        Publication {
            title: title.to_string(),
            year: year.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn merge_appends_new_and_replaces_matching_titles() {
        let existing = vec![publication("Old paper", "2019")];
        let fetched = vec![
            Publication {
                title: "old paper".to_string(),
                year: "2019".to_string(),
                citations: 12,
                ..Default::default()
            },
            publication("New paper", "2023"),
        ];

        let merged = merge_records(&existing, &fetched);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "New paper");
        assert_eq!(merged[1].citations, 12, "fetched record replaces the stale entry");
    }

    #[test]
    fn merge_sorts_newest_first() {
        let merged = merge_records(
            &[publication("a", "2018"), publication("b", "2024")],
            &[publication("c", "2021")],
        );
        let years: Vec<&str> = merged.iter().map(|p| p.year.as_str()).collect();
        assert_eq!(years, vec!["2024", "2021", "2018"]);
    }

    #[test]
    fn data_file_merge_touches_only_publications() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("cv-data.json");
        let records_path = dir.path().join("fetched.json");

        fs::write(
            &data_path,
            r#"{"personal": {"name": {"first": "Ada"}}, "publications": []}"#,
        )
        .unwrap();
        fs::write(
            &records_path,
            r#"[{"title": "Fetched", "authors": ["A", "B"], "year": 2024, "citations": 1}]"#,
        )
        .unwrap();

        let total = merge_into_data_file(&data_path, &records_path).unwrap();
        assert_eq!(total, 1);

        let data: Value = serde_json::from_str(&fs::read_to_string(&data_path).unwrap()).unwrap();
        assert_eq!(data["personal"]["name"]["first"], "Ada");
        assert_eq!(data["publications"][0]["title"], "Fetched");
        assert_eq!(data["publications"][0]["authors"], "A, B");
    }

    #[test]
    fn missing_records_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_records(&dir.path().join("nope.json")),
            Err(CvTailorError::MissingInput(_))
        ));
    }
}
