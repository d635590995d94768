//! Output rendering for the two target formats: the LaTeX CV document and
//! the static website pages.

pub mod html;
pub mod latex;

pub use html::write_pages;
pub use latex::LatexRenderer;

/// Display form of a snake_case key ("outdoor_activities" -> "Outdoor Activities").
pub fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_splits_on_underscores() {
        assert_eq!(title_case("outdoor_activities"), "Outdoor Activities");
        assert_eq!(title_case("music"), "Music");
    }
}
