//! Degree and spoken languages.

use super::tint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: EducationEntry = EducationEntry {
    degree: "B.Tech in Electrical and Electronics Engineering",
    institution: "Sri Krishnadevaraya University",
    period: "2019 – 2023",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
    pub tint: &'static str,
}

impl Language {
    /// "Telugu (Native)" form used on the printed résumé.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.name, self.level)
    }
}

pub const LANGUAGES: &[Language] = &[
    Language { name: "Telugu", level: "Native", tint: tint::ORANGE },
    Language { name: "English", level: "Professional", tint: tint::INDIGO },
    Language { name: "Hindi", level: "Conversational", tint: tint::LIME },
];
