//! Work history for the Experience section.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    role: "Machine Learning Engineer",
    company: "Pavaman Technologies",
    period: "April 2025 – Present",
    highlights: &[
        "Built a confidential Enterprise ML Solution, managing the pipeline from data processing to inference.",
        "Developed an Internal Data Acquisition System (Mobile App + Admin Dashboard) to streamline image/video collection for model training.",
    ],
}];
