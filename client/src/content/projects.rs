//! Featured projects.

use super::tint;

/// Illustration drawn in the project card's image area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectMotif {
    /// Large brain outline with a bouncing sparkle.
    Brain,
    /// Rounded phone tile.
    App,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub outcome: Option<&'static str>,
    pub features: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub tint: &'static str,
    pub motif: ProjectMotif,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Agentic RAG Pathologist System",
        description: "A \"Pathologist Brain\" using LangChain and GPT-4o. Multi-agent setup (Disease Expert, Chemical Advisor).",
        outcome: Some("Accurate chemical dosage and organic prevention methods."),
        features: None,
        tech: &["LangChain", "GPT-4o", "Pinecone", "FAISS"],
        tint: tint::PURPLE,
        motif: ProjectMotif::Brain,
    },
    Project {
        title: "PlantCare App",
        description: "Deployed 3 custom models (ViT + CLIP) to detect diseases in Cotton, Guava, and Lemon.",
        outcome: None,
        features: Some("Localization (Telugu), Weather dashboard, Auth."),
        tech: &["Flutter", "Firebase", "Python Flask", "ViT"],
        tint: tint::GREEN,
        motif: ProjectMotif::App,
    },
];

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;
