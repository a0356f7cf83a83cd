// Static copy for the landing page sections, plus the small style strings
// derived from primitive state.

use crate::constants::GLOW_RADIUS_PX;
use glam::Vec2;

pub const HERO_TITLE: &str = "PromptShield AI";
pub const HERO_SUBTITLE: &str = "Securing AI Conversations";
pub const TAGLINE: &str = "Your AI firewall \u{2014} Detect. Defend. Deliver Safe Prompts.";
pub const HERO_CTA: &str = "Get Started";
pub const SCROLL_HINT: &str = "Scroll";

// 3D background: a Spline scene rendered by the `spline-viewer` custom
// element, which index.html registers by loading SCENE_VIEWER_SCRIPT.
pub const BACKGROUND_SCENE_URL: &str =
    "https://prod.spline.design/DtQLjBkD1UpownGS/scene.splinecode";
pub const SCENE_VIEWER_TAG: &str = "spline-viewer";
pub const SCENE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer/build/spline-viewer.js";

// Inline icons (lucide outlines), drawn with currentColor.
pub const SHIELD_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/></svg>"#;
pub const ARROW_DOWN_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 5v14"/><path d="m19 12-7 7-7-7"/></svg>"#;

pub struct Feature {
    pub label: &'static str,
}

pub const ABOUT_TITLE: &str = "Built for AI Safety";
pub const ABOUT_BODY: &str = "PromptShield AI filters harmful or jailbreak prompts before they reach AI agents like ChatGPT or Gemini. Combining rule-based and ML detection, it ensures ethical and secure AI communication.";
pub const ABOUT_FEATURES: [Feature; 3] = [
    Feature {
        label: "Dual Security Layers",
    },
    Feature {
        label: "ML-Powered Detection",
    },
    Feature {
        label: "API Middleware Integration",
    },
];

/// One stage of the architecture diagram and its hover tooltip.
pub struct PipelineStep {
    pub label: &'static str,
    pub detail: &'static str,
}

pub const PIPELINE: [PipelineStep; 6] = [
    PipelineStep {
        label: "Prompt Intake",
        detail: "Receives prompts from apps or chat interfaces.",
    },
    PipelineStep {
        label: "NLP Pre-processing",
        detail: "Cleans, normalizes, and tokenizes input for analysis.",
    },
    PipelineStep {
        label: "Rule-Based Detection",
        detail: "Fast patterns catch obvious jailbreaks and unsafe instructions.",
    },
    PipelineStep {
        label: "ML Detection",
        detail: "Classifier scores nuanced risks based on learned signals.",
    },
    PipelineStep {
        label: "Decision Engine",
        detail: "Combines signals to allow, block, or request clarification.",
    },
    PipelineStep {
        label: "Dashboard",
        detail: "Monitor incidents, adjust rules, and export reports.",
    },
];

pub const TECH_STACK: [&str; 4] = ["React", "Node", "Python", "MongoDB"];
pub const TECH_FLOW_NOTE: &str =
    "Animated data flow connects UI \u{2192} middleware \u{2192} ML scoring service.";

pub const PROS: [&str; 3] = ["AI Safety", "Multi-Model Protection", "Scalable Middleware"];
pub const CONS: [&str; 3] = [
    "Dataset Dependency",
    "False Positives Risk",
    "Model Maintenance Required",
];

pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub id: &'static str,
}

pub const TEAM: [Member; 3] = [
    Member {
        name: "Ava Flux",
        role: "Product Lead",
        id: "CMS-PS001",
    },
    Member {
        name: "Noah Cipher",
        role: "ML Engineer",
        id: "CMS-PS002",
    },
    Member {
        name: "Kai Vector",
        role: "Security Researcher",
        id: "CMS-PS003",
    },
];

pub const FOOTER: &str = "\u{a9} 2025 PromptShield AI \u{2014} Powered by flames.blue";

/// Section anchors in page order, with heading and optional subtitle.
pub const SECTIONS: [(&str, &str, Option<&str>); 5] = [
    ("about", ABOUT_TITLE, None),
    (
        "architecture",
        "Architecture Flow",
        Some("Interactive pipeline with dual-layer protection"),
    ),
    (
        "tech",
        "Tech Stack",
        Some("Connected frontends, backends, and ML services"),
    ),
    ("pros", "Pros & Cons", None),
    (
        "team",
        "The Team",
        Some("Holographic profiles with roles and IDs"),
    ),
];

/// Hero background following the pointer (section-local pixels).
pub fn hero_glow_gradient(pos: Vec2) -> String {
    format!(
        "radial-gradient({}px circle at {}px {}px, rgba(56,189,248,0.18), transparent 60%)",
        GLOW_RADIUS_PX, pos.x, pos.y
    )
}

/// Empty titles still need to occupy a line while the text types in.
pub fn title_or_placeholder(revealed: &str) -> &str {
    if revealed.is_empty() {
        "\u{a0}"
    } else {
        revealed
    }
}
