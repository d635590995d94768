//! LaTeX CV document rendering
//!
//! Each section honors its `cv_sections` flag (disabled means the empty
//! string, not a hidden block) and applies, in order: field-equality
//! filtering, truncation to the configured limit, relevance reordering when
//! a job description was supplied, then escaped formatting.

use crate::config::Config;
use crate::profile::model::{Activity, Education, Experience, Profile, Project, Publication};
use crate::render::title_case;
use crate::tailor::{Tailoring, SKILL_CATEGORIES};

/// Abstracts longer than this are cut to the prefix plus an ellipsis marker.
pub const ABSTRACT_MAX_CHARS: usize = 200;

/// Escape LaTeX special characters in one pass over the original text, so
/// each character is escaped exactly once and no replacement output is ever
/// re-escaped.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str(r"\&"),
            '%' => escaped.push_str(r"\%"),
            '$' => escaped.push_str(r"\$"),
            '#' => escaped.push_str(r"\#"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            '_' => escaped.push_str(r"\_"),
            '{' => escaped.push_str(r"\{"),
            '}' => escaped.push_str(r"\}"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '\\' => escaped.push_str(r"\textbackslash{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inverse of [`escape_latex`] for the defined character set.
/// Longest replacements go first so shorter ones never match inside them.
pub fn unescape_latex(text: &str) -> String {
    const REPLACEMENTS: &[(&str, &str)] = &[
        (r"\textasciicircum{}", "^"),
        (r"\textasciitilde{}", "~"),
        (r"\textbackslash{}", "\\"),
        (r"\&", "&"),
        (r"\%", "%"),
        (r"\$", "$"),
        (r"\#", "#"),
        (r"\_", "_"),
        (r"\{", "{"),
        (r"\}", "}"),
    ];

    let mut result = text.to_string();
    for (from, to) in REPLACEMENTS {
        result = result.replace(from, to);
    }
    result
}

/// Truncate an abstract to [`ABSTRACT_MAX_CHARS`] characters, appending an
/// ellipsis marker only when something was cut.
pub fn truncate_abstract(text: &str) -> String {
    if text.chars().count() > ABSTRACT_MAX_CHARS {
        let prefix: String = text.chars().take(ABSTRACT_MAX_CHARS).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}

/// `start--end`, with any spelling of "present" normalized for display.
pub fn format_date_range(start: &str, end: &str) -> String {
    if end.eq_ignore_ascii_case("present") {
        format!("{}--Present", start)
    } else {
        format!("{}--{}", start, end)
    }
}

pub struct LatexRenderer<'a> {
    profile: &'a Profile,
    config: &'a Config,
    tailoring: Option<&'a Tailoring>,
}

impl<'a> LatexRenderer<'a> {
    pub fn new(profile: &'a Profile, config: &'a Config) -> Self {
        Self {
            profile,
            config,
            tailoring: None,
        }
    }

    pub fn with_tailoring(mut self, tailoring: &'a Tailoring) -> Self {
        self.tailoring = Some(tailoring);
        self
    }

    pub fn render(&self) -> String {
        let mut document = String::new();
        document.push_str(&self.header());
        document.push_str(&self.about_section());
        document.push_str(&self.experience_section());
        document.push_str(&self.education_section());
        document.push_str(&self.projects_section());
        document.push_str(&self.publications_section());
        document.push_str(&self.activities_section());
        document.push_str(&self.skills_section());
        document.push_str(&self.hobbies_section());
        document.push_str("\\end{document}\n");
        document
    }

    fn header(&self) -> String {
        let personal = &self.profile.personal;
        let latex = &self.config.latex_settings;

        let mut header = format!(
            "% Generated by cv-tailor on {}\n\
             \\documentclass[11pt,a4paper]{{{}}}\n\
             \\moderncvstyle{{{}}}\n\
             \\moderncvcolor{{{}}}\n\
             \\usepackage[{}]{{geometry}}\n\
             \\usepackage{{multicol}}\n\
             \\usepackage{{academicons}}\n\
             \\usepackage{{lmodern}}\n\n\
             % Personal Information\n",
            chrono::Local::now().format("%Y-%m-%d"),
            latex.document_class,
            latex.style,
            latex.color,
            latex.geometry,
        );

        header.push_str(&format!(
            "\\name{{{}}}{{{}}}\n",
            escape_latex(&personal.name.first),
            escape_latex(&personal.name.last)
        ));
        header.push_str(&format!("\\title{{{}}}\n", escape_latex(&personal.title)));

        let contact = &personal.contact;
        let social = &personal.social;
        let mut info_lines = Vec::new();
        if !contact.email.is_empty() {
            info_lines.push(format!(
                "    \\faEnvelope\\enspace\\href{{mailto:{0}}}{{{0}}}",
                contact.email
            ));
        }
        if !contact.phone.is_empty() {
            info_lines.push(format!("    \\faMobile\\enspace{}", contact.phone));
        }
        if !contact.website.is_empty() {
            info_lines.push(format!(
                "    \\faGlobe\\enspace\\href{{{}}}{{Webpage}}",
                contact.website
            ));
        }
        if !social.google_scholar.is_empty() {
            info_lines.push(format!(
                "    \\faGraduationCap\\enspace\\href{{{}}}{{Google Scholar}}",
                social.google_scholar
            ));
        }
        if !social.researchgate.is_empty() {
            info_lines.push(format!(
                "    \\faResearchgate\\enspace\\href{{{}}}{{ResearchGate}}",
                social.researchgate
            ));
        }
        if !social.linkedin.is_empty() {
            info_lines.push(format!(
                "    \\faLinkedin\\enspace\\href{{{}}}{{LinkedIn}}",
                social.linkedin
            ));
        }
        if !social.github.is_empty() {
            info_lines.push(format!(
                "    \\faGithub\\enspace\\href{{{}}}{{GitHub}}",
                social.github
            ));
        }
        if !info_lines.is_empty() {
            header.push_str("\\extrainfo{\n");
            header.push_str(&info_lines.join(" \\quad\n"));
            header.push_str("\n}\n");
        }

        header.push_str("\n\\begin{document}\n\n\\makecvtitle\n\n");
        header
    }

    fn about_section(&self) -> String {
        if !self.config.cv_sections.about {
            return String::new();
        }

        let mut section = String::from("\\section{About Me}\n");
        section.push_str(&format!(
            "\\cvitem{{}}{{\\textit{{{}}}}}\n",
            escape_latex(&self.profile.personal.about)
        ));

        if let Some(tailoring) = self.tailoring {
            let top = tailoring.matches.top_categories(3);
            if !top.is_empty() {
                let highlight: Vec<String> = top
                    .iter()
                    .map(|c| {
                        SKILL_CATEGORIES
                            .iter()
                            .find(|cat| cat.name == c.category)
                            .map(|cat| cat.title())
                            .unwrap_or_else(|| c.category.to_string())
                    })
                    .collect();
                section.push_str(&format!("% Tailored for: {}\n", highlight.join(", ")));
            }
        }

        section.push('\n');
        section
    }

    fn experience_section(&self) -> String {
        if !self.config.cv_sections.experience {
            return String::new();
        }

        let mut entries: Vec<&Experience> = self.profile.experience.iter().collect();
        if let Some(max) = self.config.cv_settings.max_experience {
            entries.truncate(max);
        }

        let mut section = String::from("\\section{Work Experience}\n");
        if let Some(tailoring) = self.tailoring {
            for scored in tailoring.scorer.rank(&entries, &tailoring.matches) {
                section.push_str(&format!("% Relevance score: {:.2}\n", scored.score));
                section.push_str(&self.format_experience(scored.entry));
            }
        } else {
            for exp in &entries {
                section.push_str(&self.format_experience(exp));
            }
        }
        section.push('\n');
        section
    }

    fn format_experience(&self, exp: &Experience) -> String {
        let mut entry = format!(
            "\\cventry{{{}}}{{{}}}{{{}}}{{{}}}{{}}{{\\begin{{itemize}}",
            format_date_range(&exp.start_date, &exp.end_date),
            escape_latex(&exp.position),
            escape_latex(&exp.organization),
            escape_latex(&exp.location),
        );
        for responsibility in &exp.responsibilities {
            entry.push_str(&format!("\\item {}", escape_latex(responsibility)));
        }
        entry.push_str("\\end{itemize}}\n");
        entry
    }

    fn education_section(&self) -> String {
        if !self.config.cv_sections.education {
            return String::new();
        }

        let mut section = String::from("\\section{Education}\n");
        for edu in &self.profile.education {
            section.push_str(&self.format_education(edu));
        }
        section.push('\n');
        section
    }

    fn format_education(&self, edu: &Education) -> String {
        let mut entry = format!(
            "\\cventry{{{}}}{{{}}}{{{}}}{{{}}}{{}}{{%\n",
            format_date_range(&edu.start_date, &edu.end_date),
            escape_latex(&edu.degree),
            escape_latex(&edu.institution),
            escape_latex(&edu.location),
        );

        if let Some(thesis) = &edu.thesis {
            entry.push_str(&format!(
                "\\textbf{{Thesis:}} ``{}''\\\\\n",
                escape_latex(thesis)
            ));
        }
        if let Some(supervisors) = &edu.supervisors {
            let joined = supervisors
                .iter()
                .map(|s| escape_latex(s))
                .collect::<Vec<_>>()
                .join(" \\& ");
            entry.push_str(&format!("\\textbf{{Supervisors:}} {}\\\\\n", joined));
        }
        if let Some(co_direction) = &edu.co_direction {
            entry.push_str(&format!(
                "\\textbf{{Co-direction:}} {}\\\\\n",
                escape_latex(co_direction)
            ));
        }
        if let Some(mobility) = &edu.mobility {
            entry.push_str("\\textbf{International Mobility:}\n\\begin{itemize}\n");
            for stay in mobility {
                entry.push_str(&format!("\\item {}\n", escape_latex(stay)));
            }
            entry.push_str("\\end{itemize}\n");
        }

        entry.push_str("}\n");
        entry
    }

    fn projects_section(&self) -> String {
        if !self.config.cv_sections.projects {
            return String::new();
        }

        let settings = &self.config.cv_settings;
        let mut entries: Vec<&Project> = self
            .profile
            .projects
            .iter()
            .filter(|p| match &settings.projects_status_filter {
                Some(status) => p.status == *status,
                None => true,
            })
            .collect();
        if let Some(max) = settings.max_projects {
            entries.truncate(max);
        }

        let mut section = String::from("\\section{Research Projects}\n");
        if let Some(tailoring) = self.tailoring {
            for scored in tailoring.scorer.rank(&entries, &tailoring.matches) {
                section.push_str(&format!("% Relevance score: {:.2}\n", scored.score));
                section.push_str(&self.format_project(scored.entry));
            }
        } else {
            for project in &entries {
                section.push_str(&self.format_project(project));
            }
        }
        section.push('\n');
        section
    }

    fn format_project(&self, project: &Project) -> String {
        format!(
            "\\cventry{{{}}}{{{}}}{{{}}}{{}}{{}}{{{}}}\n",
            format_date_range(&project.start_date, &project.end_date),
            escape_latex(&project.title),
            escape_latex(&project.organization),
            escape_latex(&project.description),
        )
    }

    fn publications_section(&self) -> String {
        if !self.config.cv_sections.publications {
            return String::new();
        }

        let settings = &self.config.cv_settings;
        let mut entries: Vec<&Publication> = self.profile.publications.iter().collect();
        if let Some(max) = settings.max_publications {
            entries.truncate(max);
        }

        let mut section = String::from("\\section{Publications}\n");
        for publication in &entries {
            section.push_str(&self.format_publication(publication, settings.include_abstracts));
        }
        section.push('\n');
        section
    }

    fn format_publication(&self, publication: &Publication, include_abstract: bool) -> String {
        let title = escape_latex(&publication.title);
        let venue = escape_latex(&publication.venue);

        if include_abstract && !publication.abstract_text.is_empty() {
            let abstract_text = escape_latex(&truncate_abstract(&publication.abstract_text));
            format!(
                "\\cvitem{{{}}}{{\\textit{{{}}}. {}. \\\\\\textbf{{Abstract:}} {}}}\n",
                publication.year, title, venue, abstract_text
            )
        } else {
            format!(
                "\\cvitem{{{}}}{{\\textit{{{}}}. {}.}}\n",
                publication.year, title, venue
            )
        }
    }

    fn activities_section(&self) -> String {
        if !self.config.cv_sections.activities {
            return String::new();
        }

        let settings = &self.config.cv_settings;
        let mut entries: Vec<&Activity> = self
            .profile
            .activities
            .iter()
            .filter(|a| match &settings.activities_type_filter {
                Some(kind) => a.kind == *kind,
                None => true,
            })
            .collect();
        if let Some(max) = settings.max_activities {
            entries.truncate(max);
        }

        let mut section = String::from("\\section{Activities}\n");
        for activity in &entries {
            section.push_str(&self.format_activity(activity));
        }
        section.push('\n');
        section
    }

    fn format_activity(&self, activity: &Activity) -> String {
        let date = escape_latex(&activity.date);
        let event = escape_latex(&activity.event);
        let description = escape_latex(&activity.description);

        if activity.location.is_empty() {
            format!("\\cvitem{{{}}}{{\\textbf{{{}}}. {}}}\n", date, event, description)
        } else {
            format!(
                "\\cvitem{{{}}}{{\\textbf{{{}}}, {}. {}}}\n",
                date,
                event,
                escape_latex(&activity.location),
                description
            )
        }
    }

    fn skills_section(&self) -> String {
        if !self.config.cv_sections.skills {
            return String::new();
        }

        let mut section = String::from("\\section{Technical Skills}\n");
        for (title, skills) in self.profile.skills.groups() {
            let formatted: Vec<String> = skills.iter().map(|s| self.format_skill(s)).collect();
            section.push_str(&format!(
                "\\cvitem{{{}}}{{{}}}\n",
                title,
                formatted.join(", ")
            ));
        }
        section.push('\n');
        section
    }

    /// Skills matching a found job keyword are emphasized in tailored mode.
    fn format_skill(&self, skill: &str) -> String {
        let escaped = escape_latex(skill);
        match self.tailoring {
            Some(tailoring) if tailoring.matches.highlights(skill) => {
                format!("\\textbf{{{}}}", escaped)
            }
            _ => escaped,
        }
    }

    fn hobbies_section(&self) -> String {
        if !self.config.cv_sections.hobbies {
            return String::new();
        }

        let mut section = String::from("\\section{Hobbies \\& Interests}\n");
        for (category, items) in &self.profile.hobbies {
            section.push_str(&format!(
                "\\cvitem{{{}: }}{{{}}}\n",
                title_case(category),
                escape_latex(items)
            ));
        }
        section.push('\n');
        section
    }
}
