//! Skill categories for the Skills section.

use super::tint;
use crate::components::icon::IconKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: IconKind,
    pub skills: &'static [&'static str],
    pub tint: &'static str,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Machine Learning",
        icon: IconKind::Brain,
        skills: &["TensorFlow", "PyTorch", "Scikit-learn", "ViT", "CLIP", "FAISS"],
        tint: tint::ORANGE,
    },
    SkillCategory {
        title: "Generative AI",
        icon: IconKind::Sparkles,
        skills: &["LangChain", "LlamaIndex", "OpenAI GPT-4o", "Gemini Pro", "Agentic Workflows"],
        tint: tint::PURPLE,
    },
    SkillCategory {
        title: "Backend & Web",
        icon: IconKind::Code,
        skills: &["Flask", "Python", "REST APIs", "Docker"],
        tint: tint::TEAL,
    },
    SkillCategory {
        title: "Mobile",
        icon: IconKind::Smartphone,
        skills: &["Flutter", "Dart", "Firebase", "Supabase"],
        tint: tint::GREEN,
    },
    SkillCategory {
        title: "Cloud",
        icon: IconKind::Cloud,
        skills: &["GCP", "Cloud Buckets", "Model Deployment"],
        tint: tint::BLUE,
    },
];

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;
