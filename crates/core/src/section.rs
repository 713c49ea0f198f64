//! Section registry.
//!
//! Every issue is laid out as the same five cards. The `section_name`
//! column in `column_content` holds the display name of one of these
//! sections; rows with any other name are ignored by the page.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Section names
// ---------------------------------------------------------------------------

pub const SECTION_KNOWLEDGE_BASE: &str = "Knowledge Base";
pub const SECTION_RELEASE_NOTES: &str = "Release Notes";
pub const SECTION_FINE_TUNING: &str = "Fine Tuning";
pub const SECTION_HALLUCINATION: &str = "Hallucination";
pub const SECTION_ALIGNMENT: &str = "Alignment";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How an item's `full_text` column is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Pre-sanitized HTML with a preview/full toggle.
    RichText,
    /// `full_text` holds an image URL or path.
    Image,
}

/// Static display configuration for one section card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionConfig {
    pub title: &'static str,
    pub category: &'static str,
    pub accent_color: &'static str,
    /// Columns spanned on the 12-column desktop grid.
    pub span: u8,
    pub render_mode: RenderMode,
    /// Heading rendered inside the card body above the items.
    pub heading: Option<&'static str>,
}

/// The fixed set of newsletter sections, declared in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    KnowledgeBase,
    ReleaseNotes,
    FineTuning,
    Hallucination,
    Alignment,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static KNOWLEDGE_BASE: SectionConfig = SectionConfig {
    title: SECTION_KNOWLEDGE_BASE,
    category: "New in Every",
    accent_color: "rgb(168, 85, 247)",
    span: 3,
    render_mode: RenderMode::RichText,
    heading: None,
};

static RELEASE_NOTES: SectionConfig = SectionConfig {
    title: SECTION_RELEASE_NOTES,
    category: "Field Report",
    accent_color: "rgb(34, 197, 94)",
    span: 6,
    render_mode: RenderMode::RichText,
    heading: Some("Release notes"),
};

static FINE_TUNING: SectionConfig = SectionConfig {
    title: SECTION_FINE_TUNING,
    category: "Market Signals",
    accent_color: "rgb(234, 179, 8)",
    span: 3,
    render_mode: RenderMode::RichText,
    heading: None,
};

static HALLUCINATION: SectionConfig = SectionConfig {
    title: SECTION_HALLUCINATION,
    category: "Imagine",
    accent_color: "rgb(244, 63, 94)",
    span: 6,
    render_mode: RenderMode::Image,
    heading: None,
};

static ALIGNMENT: SectionConfig = SectionConfig {
    title: SECTION_ALIGNMENT,
    category: "Refresh",
    accent_color: "rgb(74, 158, 255)",
    span: 6,
    render_mode: RenderMode::RichText,
    heading: None,
};

impl Section {
    /// Canonical on-page order, independent of database row order.
    pub const ALL: [Section; 5] = [
        Section::KnowledgeBase,
        Section::ReleaseNotes,
        Section::FineTuning,
        Section::Hallucination,
        Section::Alignment,
    ];

    pub fn config(self) -> &'static SectionConfig {
        match self {
            Section::KnowledgeBase => &KNOWLEDGE_BASE,
            Section::ReleaseNotes => &RELEASE_NOTES,
            Section::FineTuning => &FINE_TUNING,
            Section::Hallucination => &HALLUCINATION,
            Section::Alignment => &ALIGNMENT,
        }
    }

    /// The `section_name` value stored in `column_content`.
    pub fn name(self) -> &'static str {
        self.config().title
    }

    /// Look up a section by its stored name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.name() == name)
    }

    /// URL-safe key used in query strings and element ids.
    pub fn slug(self) -> &'static str {
        match self {
            Section::KnowledgeBase => "knowledge-base",
            Section::ReleaseNotes => "release-notes",
            Section::FineTuning => "fine-tuning",
            Section::Hallucination => "hallucination",
            Section::Alignment => "alignment",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// Display configuration for a raw `section_name`, or `None` for names
/// outside the fixed set.
pub fn config_for(section_name: &str) -> Option<&'static SectionConfig> {
    Section::from_name(section_name).map(Section::config)
}
