//! Built-in keyword categories used for job description matching
//!
//! Fixed at compile time; not user-editable. Keywords are lowercase
//! literals matched whole-word against case-folded text.

pub struct KeywordCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordCategory {
    /// Display form of the category name ("machine_learning" -> "Machine Learning").
    pub fn title(&self) -> String {
        self.name
            .split('_')
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
}

pub const SKILL_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "programming",
        keywords: &[
            "python",
            "matlab",
            "simulink",
            "c++",
            "c#",
            "java",
            "javascript",
            "r",
            "julia",
            "sql",
            "pytorch",
            "tensorflow",
            "keras",
            "scikit-learn",
            "pandas",
            "numpy",
            "scipy",
            "pyomo",
            "gurobi",
            "cplex",
        ],
    },
    KeywordCategory {
        name: "machine_learning",
        keywords: &[
            "machine learning",
            "ml",
            "deep learning",
            "neural network",
            "lstm",
            "gaussian process",
            "bayesian",
            "optimization",
            "reinforcement learning",
            "supervised learning",
            "unsupervised learning",
            "regression",
            "classification",
            "data-driven",
            "data driven",
            "ai",
            "artificial intelligence",
        ],
    },
    KeywordCategory {
        name: "control",
        keywords: &[
            "control",
            "mpc",
            "model predictive control",
            "pid",
            "feedback",
            "state estimation",
            "kalman filter",
            "observer",
            "controller",
            "automation",
            "automatics",
            "dynamical systems",
            "system identification",
        ],
    },
    KeywordCategory {
        name: "process_engineering",
        keywords: &[
            "biogas",
            "anaerobic digestion",
            "bioenergy",
            "renewable energy",
            "process optimization",
            "process modelling",
            "process modeling",
            "cfd",
            "adm1",
            "am2",
            "chemostat",
            "bioreactor",
            "digester",
            "htc",
            "hydrothermal",
            "waste treatment",
            "bioprocess",
        ],
    },
    KeywordCategory {
        name: "data_science",
        keywords: &[
            "data science",
            "data analysis",
            "statistics",
            "time series",
            "forecasting",
            "prediction",
            "modelling",
            "modeling",
            "simulation",
            "dmd",
            "dynamic mode decomposition",
            "koopman",
            "sindy",
        ],
    },
    KeywordCategory {
        name: "research",
        keywords: &[
            "research",
            "phd",
            "publication",
            "journal",
            "conference",
            "academic",
            "thesis",
            "dissertation",
            "paper",
            "manuscript",
        ],
    },
    KeywordCategory {
        name: "industry",
        keywords: &[
            "industry",
            "industrial",
            "commercial",
            "scale-up",
            "pilot",
            "plant",
            "operations",
            "real-time",
            "deployment",
            "production",
        ],
    },
    KeywordCategory {
        name: "soft_skills",
        keywords: &[
            "communication",
            "teamwork",
            "collaboration",
            "leadership",
            "presentation",
            "teaching",
            "mentoring",
            "project management",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_nonempty_and_lowercase() {
        assert_eq!(SKILL_CATEGORIES.len(), 8);
        for category in SKILL_CATEGORIES {
            assert!(!category.keywords.is_empty());
            for keyword in category.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn category_titles_are_human_readable() {
        let ml = SKILL_CATEGORIES
            .iter()
            .find(|c| c.name == "machine_learning")
            .unwrap();
        assert_eq!(ml.title(), "Machine Learning");
    }
}
