//! Identity, contact handles, and page metadata.

pub const NAME: &str = "B Pavan Kumar";
pub const INITIALS: &str = "BPK";
pub const ROLE: &str = "Machine Learning Engineer";
pub const LOCATION: &str = "Hyderabad, Telangana";
pub const AVAILABILITY: &str = "Available for Opportunities";

pub const PHONE: &str = "+91 9381238714";
pub const PHONE_HREF: &str = "tel:+919381238714";
pub const EMAIL: &str = "pavandhanush9581@gmail.com";
pub const EMAIL_HREF: &str = "mailto:pavandhanush9581@gmail.com";
pub const GITHUB_USER: &str = "pavanpavaman";
pub const GITHUB_URL: &str = "https://github.com/pavanpavaman";
pub const GITHUB_DISPLAY: &str = "github.com/pavanpavaman";

pub const PHOTO_SRC: &str = "/profile/my_profile_photo.png";
pub const PHOTO_ALT: &str = "Pavan Kumar Profile";

/// Biography shown in the About section.
pub const SUMMARY: &str = "Innovative Machine Learning Engineer with a strong background in \
Electrical and Electronics Engineering. Specialized in building end-to-end AI-driven \
applications. Experienced in architecting Agentic RAG systems, deploying Computer Vision \
models using ViT and CLIP, and developing cross-platform mobile solutions using Flutter. \
Proven ability to bridge the gap between complex ML research and user-centric production \
environments.";

pub const PAGE_TITLE: &str = "B Pavan Kumar | Machine Learning Engineer";
pub const META_DESCRIPTION: &str = "Innovative Machine Learning Engineer specialized in building \
end-to-end AI-driven applications, Agentic RAG systems, Computer Vision models, and \
cross-platform mobile solutions.";
pub const OG_DESCRIPTION: &str =
    "Innovative Machine Learning Engineer specialized in building end-to-end AI-driven applications.";
pub const KEYWORDS: &[&str] = &[
    "Machine Learning",
    "AI",
    "Deep Learning",
    "Flutter",
    "Python",
    "LangChain",
    "Computer Vision",
    "RAG",
    "GPT-4",
];
