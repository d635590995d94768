//! Static website rendering
//!
//! One page per navigation section, all sharing the sidebar shell from
//! `templates/base.html`. Values are HTML-escaped by the template engine.

use crate::error::{CvTailorError, Result};
use crate::profile::model::{Education, Profile, Publication};
use crate::render::title_case;
use askama::Template;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

const INDEX_REDIRECT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="refresh" content="0; url=home.html">
    <title>Redirecting...</title>
</head>
<body>
    <p>Redirecting to <a href="home.html">home page</a>...</p>
</body>
</html>
"#;

/// Sidebar data shared by every page.
struct Shell {
    name: String,
    title: String,
    email: String,
    socials: Vec<SocialLink>,
    page: String,
}

struct SocialLink {
    href: String,
    icon: &'static str,
}

impl Shell {
    fn new(profile: &Profile, page: &str) -> Self {
        let personal = &profile.personal;
        let social = &personal.social;

        let mut socials = Vec::new();
        for (href, icon) in [
            (&social.github, "fab fa-github"),
            (&social.linkedin, "fab fa-linkedin"),
            (&social.twitter, "fab fa-twitter"),
            (&social.researchgate, "ai ai-researchgate"),
            (&social.google_scholar, "ai ai-google-scholar"),
            (&social.orcid, "ai ai-orcid"),
        ] {
            if !href.is_empty() {
                socials.push(SocialLink {
                    href: href.clone(),
                    icon,
                });
            }
        }

        Self {
            name: format!("{} {}", personal.name.first, personal.name.last)
                .trim()
                .to_string(),
            title: personal.title.clone(),
            email: personal.contact.email.clone(),
            socials,
            page: page.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage {
    shell: Shell,
    about: String,
    research_interests: Vec<String>,
    keyword_items: Vec<KeywordItem>,
}

struct KeywordItem {
    icon: &'static str,
    label: String,
}

#[derive(Template)]
#[template(path = "education.html")]
struct EducationPage {
    shell: Shell,
    entries: Vec<EducationView>,
}

struct EducationView {
    degree: String,
    institution: String,
    location: String,
    start_date: String,
    end_date: String,
    thesis: String,
    supervisors: String,
    co_direction: String,
    mobility: Vec<String>,
}

impl EducationView {
    fn new(edu: &Education) -> Self {
        Self {
            degree: edu.degree.clone(),
            institution: edu.institution.clone(),
            location: edu.location.clone(),
            start_date: edu.start_date.clone(),
            end_date: edu.end_date.clone(),
            thesis: edu.thesis.clone().unwrap_or_default(),
            supervisors: edu
                .supervisors
                .as_deref()
                .map(|s| s.join(" & "))
                .unwrap_or_default(),
            co_direction: edu.co_direction.clone().unwrap_or_default(),
            mobility: edu.mobility.clone().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "experience.html")]
struct ExperiencePage {
    shell: Shell,
    entries: Vec<ExperienceView>,
}

struct ExperienceView {
    position: String,
    organization: String,
    location: String,
    start_date: String,
    end_date: String,
    description: String,
    responsibilities: Vec<String>,
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsPage {
    shell: Shell,
    entries: Vec<ProjectView>,
}

struct ProjectView {
    title: String,
    organization: String,
    start_date: String,
    end_date: String,
    description: String,
    status: String,
    status_label: String,
}

#[derive(Template)]
#[template(path = "publications.html")]
struct PublicationsPage {
    shell: Shell,
    entries: Vec<PublicationView>,
}

struct PublicationView {
    title: String,
    authors: String,
    venue: String,
    year: String,
    abstract_text: String,
    link: String,
    citations: u32,
}

impl PublicationView {
    fn new(publication: &Publication) -> Self {
        let link = if !publication.doi.is_empty() {
            publication.doi.clone()
        } else {
            publication.url.clone()
        };
        Self {
            title: publication.title.clone(),
            authors: publication.authors.clone(),
            venue: publication.venue.clone(),
            year: publication.year.clone(),
            abstract_text: publication.abstract_text.clone(),
            link,
            citations: publication.citations,
        }
    }
}

#[derive(Template)]
#[template(path = "skills.html")]
struct SkillsPage {
    shell: Shell,
    skill_groups: Vec<SkillGroup>,
    activities: Vec<ActivityView>,
    hobbies: Vec<HobbyView>,
}

struct SkillGroup {
    title: String,
    items: Vec<String>,
}

struct ActivityView {
    date: String,
    icon: &'static str,
    description: String,
    location: String,
}

struct HobbyView {
    title: String,
    text: String,
}

fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "conference" => "\u{1F4CA}",
        "workshop" => "\u{1F6E0}\u{FE0F}",
        "training" => "\u{1F4DA}",
        "presentation" => "\u{1F3A4}",
        "summer_school" => "\u{1F3EB}",
        "spring_school" => "\u{1F331}",
        "webinar" => "\u{1F4BB}",
        "symposium" => "\u{1F3AF}",
        "seminar" => "\u{1F4CB}",
        _ => "\u{1F4C5}",
    }
}

fn render<T: Template>(template: &T) -> Result<String> {
    template
        .render()
        .map_err(|e| CvTailorError::Rendering(e.to_string()))
}

/// Render every page as (file name, content) pairs, including the
/// `index.html` redirect.
pub fn render_pages(profile: &Profile) -> Result<Vec<(&'static str, String)>> {
    let home = HomePage {
        shell: Shell::new(profile, "home"),
        about: profile.personal.about.clone(),
        research_interests: profile.skills.data_science.clone(),
        keyword_items: profile
            .skills
            .process_engineering
            .iter()
            .map(|s| KeywordItem {
                icon: "\u{1F33F}",
                label: s.clone(),
            })
            .chain(profile.skills.programming.iter().map(|s| KeywordItem {
                icon: "\u{1F5A5}\u{FE0F}",
                label: s.clone(),
            }))
            .collect(),
    };

    let education = EducationPage {
        shell: Shell::new(profile, "education"),
        entries: profile.education.iter().map(EducationView::new).collect(),
    };

    let experience = ExperiencePage {
        shell: Shell::new(profile, "experience"),
        entries: profile
            .experience
            .iter()
            .map(|exp| ExperienceView {
                position: exp.position.clone(),
                organization: exp.organization.clone(),
                location: exp.location.clone(),
                start_date: exp.start_date.clone(),
                end_date: exp.end_date.clone(),
                description: exp.description.clone(),
                responsibilities: exp.responsibilities.clone(),
            })
            .collect(),
    };

    let projects = ProjectsPage {
        shell: Shell::new(profile, "projects"),
        entries: profile
            .projects
            .iter()
            .map(|project| ProjectView {
                title: project.title.clone(),
                organization: project.organization.clone(),
                start_date: project.start_date.clone(),
                end_date: project.end_date.clone(),
                description: project.description.clone(),
                status: project.status.clone(),
                status_label: title_case(&project.status),
            })
            .collect(),
    };

    let publications = PublicationsPage {
        shell: Shell::new(profile, "publications"),
        entries: profile
            .publications
            .iter()
            .map(PublicationView::new)
            .collect(),
    };

    let skills = SkillsPage {
        shell: Shell::new(profile, "skills"),
        skill_groups: profile
            .skills
            .groups()
            .into_iter()
            .map(|(title, items)| SkillGroup {
                title: title.to_string(),
                items: items.to_vec(),
            })
            .collect(),
        activities: profile
            .activities
            .iter()
            .map(|activity| ActivityView {
                date: activity.date.clone(),
                icon: activity_icon(&activity.kind),
                description: activity.description.clone(),
                location: activity.location.clone(),
            })
            .collect(),
        hobbies: profile
            .hobbies
            .iter()
            .map(|(key, text)| HobbyView {
                title: title_case(key),
                text: text.clone(),
            })
            .collect(),
    };

    Ok(vec![
        ("home.html", render(&home)?),
        ("education.html", render(&education)?),
        ("experience.html", render(&experience)?),
        ("projects.html", render(&projects)?),
        ("publications.html", render(&publications)?),
        ("skills.html", render(&skills)?),
        ("index.html", INDEX_REDIRECT.to_string()),
    ])
}

/// Render and write every page into `out_dir`.
pub fn write_pages(profile: &Profile, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for (name, content) in render_pages(profile)? {
        let path = out_dir.join(name);
        fs::write(&path, content)?;
        info!("generated: {}", path.display());
        written.push(path);
    }
    Ok(written)
}
