//! Printable résumé text.
//!
//! The résumé duplicates the on-page sections in a denser, print-oriented
//! wording. Its skill groupings intentionally differ from the Skills cards
//! (extra "Tools" row, merged Mobile & Full-Stack label).

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

pub const SUMMARY: &str = "Innovative Machine Learning Engineer with a strong background in \
Electrical and Electronics Engineering. Specialized in building end-to-end AI-driven \
applications. Experienced in architecting Agentic RAG systems, deploying Computer Vision \
models using ViT and CLIP, and developing cross-platform mobile solutions using Flutter. \
Proven ability to bridge the gap between complex ML research and user-centric production \
environments, handling everything from data collection to cloud deployment.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillLine {
    pub label: &'static str,
    pub items: &'static str,
}

pub const SKILL_LINES: &[SkillLine] = &[
    SkillLine { label: "Machine Learning", items: "TensorFlow, PyTorch, Scikit-learn, ViT, CLIP, FAISS" },
    SkillLine { label: "Generative AI", items: "LangChain, LlamaIndex, GPT-4o, Gemini Pro, Agentic Workflows" },
    SkillLine { label: "Backend & Web", items: "Flask, Python, REST APIs, Docker" },
    SkillLine { label: "Mobile & Full-Stack", items: "Flutter, Dart, Firebase, Supabase" },
    SkillLine { label: "Cloud & DevOps", items: "GCP, Cloud Buckets, Model Deployment, Git" },
    SkillLine { label: "Tools", items: "VS Code, GitHub Copilot, Stitch UI" },
];

/// Résumé bullet with an optional bold lead-in and nested sub-points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub lead: Option<&'static str>,
    pub text: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub bullets: &'static [Bullet],
}

impl Role {
    /// "Company | Title" heading line.
    pub fn heading(&self) -> String {
        format!("{} | {}", self.company, self.title)
    }
}

pub const ROLES: &[Role] = &[Role {
    company: "Pavaman Technologies",
    title: "Machine Learning Engineer",
    period: "April 2025 – Present",
    bullets: &[
        Bullet {
            lead: Some("Confidential Enterprise ML Solution:"),
            text: "Architected and deployed a scalable machine learning system for a proprietary business use case. Managed the pipeline from data processing to model inference optimization.",
            details: &[],
        },
        Bullet {
            lead: Some("Internal Data Acquisition System:"),
            text: "Developed a custom mobile application to streamline organizational data collection (Images/Videos) for model training.",
            details: &[
                "Built an Admin Dashboard featuring real-time analytics and charts to monitor data upload statistics.",
                "Reduced data cleaning time by implementing validation checks at the source of upload.",
            ],
        },
    ],
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyProject {
    pub title: &'static str,
    pub tagline: &'static str,
    pub points: &'static [&'static str],
}

pub const KEY_PROJECTS: &[KeyProject] = &[
    KeyProject {
        title: "Agentic RAG Pathologist System (Agricultural AI)",
        tagline: "A Multi-Agent System for Disease Diagnosis and Treatment",
        points: &[
            "Designed a \"Pathologist Brain\" using LangChain and GPT-4o/Gemini Pro as an intelligent agent.",
            "Utilizes a multi-agent setup (Disease Expert, Chemical Advisor, Safety Validator) to analyze CV model predictions.",
            "Integrated Pinecone/FAISS to retrieve context from research papers and government PDFs.",
            "Outcome: Provides farmers with precise chemical dosages and organic prevention methods.",
        ],
    },
    KeyProject {
        title: "PlantCare: End-to-End AI Mobile Application",
        tagline: "Full-Stack Flutter App with Custom ML Deployment",
        points: &[
            "Solo Development: Built complete mobile ecosystem independently (UI/UX, Backend, Auth, ML).",
            "ML Engine: Deployed 3 custom models (ViT + CLIP) on GCP via Flask for leaf disease detection.",
            "Localization: Implemented multi-language support (Telugu) for accessibility.",
            "Features: Real-time weather dashboards, Firebase Auth, and persistent profiles.",
        ],
    },
];

/// Numbered project heading, e.g. "1. PlantCare: ...".
pub fn numbered_title(index: usize, project: &KeyProject) -> String {
    format!("{}. {}", index + 1, project.title)
}

pub const DECLARATION: &str = "I hereby declare that the above-mentioned information is true and \
correct to the best of my knowledge and belief.";
