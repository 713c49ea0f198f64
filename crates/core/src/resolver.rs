//! Section resolver.
//!
//! Turns the flat `column_content` rows of one issue into the ordered list
//! of section blocks the page renders.

use serde::Serialize;

use crate::html::TrustedHtml;
use crate::section::{RenderMode, Section, SectionConfig};
use crate::types::{DbId, IssueNumber};
use crate::view::ExpandState;

/// Read access to one column content row.
///
/// Implemented by the database model so the resolver stays free of any
/// storage dependency.
pub trait ColumnRow {
    fn id(&self) -> DbId;
    fn issue_number(&self) -> Option<IssueNumber>;
    fn section_name(&self) -> Option<&str>;
    fn preview_text(&self) -> Option<&str>;
    fn full_text(&self) -> &str;
}

/// What a resolved item shows in its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayBody {
    Html(TrustedHtml),
    /// Image URL or path taken from `full_text`.
    Image(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedItem {
    pub id: DbId,
    pub body: DisplayBody,
    pub render_mode: RenderMode,
}

/// One card worth of content. `items` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSection {
    pub section: Section,
    pub config: &'static SectionConfig,
    pub expanded: bool,
    pub items: Vec<ResolvedItem>,
}

/// Pick the body shown for a rich-text item.
///
/// Expanded sections show the full text. Collapsed sections show the
/// preview, falling back to the full text when the preview is null or
/// the empty string.
pub fn display_html(preview_text: Option<&str>, full_text: &str, expanded: bool) -> TrustedHtml {
    match preview_text {
        Some(preview) if !expanded && !preview.is_empty() => TrustedHtml::from_store(preview),
        _ => TrustedHtml::from_store(full_text),
    }
}

/// Group `rows` into section blocks in canonical order.
///
/// Rows belonging to another issue or carrying an unknown section name are
/// skipped, and sections without rows are omitted. Within a section, rows
/// keep their input order.
pub fn resolve_sections<R: ColumnRow>(
    issue_number: IssueNumber,
    rows: &[R],
    expand: &ExpandState,
) -> Vec<ResolvedSection> {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let config = section.config();
            let expanded = expand.is_expanded(section);

            let items: Vec<ResolvedItem> = rows
                .iter()
                .filter(|row| row.issue_number() == Some(issue_number))
                .filter(|row| row.section_name().and_then(Section::from_name) == Some(section))
                .map(|row| ResolvedItem {
                    id: row.id(),
                    body: match config.render_mode {
                        RenderMode::RichText => DisplayBody::Html(display_html(
                            row.preview_text(),
                            row.full_text(),
                            expanded,
                        )),
                        RenderMode::Image => DisplayBody::Image(row.full_text().to_string()),
                    },
                    render_mode: config.render_mode,
                })
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(ResolvedSection {
                    section,
                    config,
                    expanded,
                    items,
                })
            }
        })
        .collect()
}

/// Count rows that will never be rendered because their section name is
/// outside the registry.
pub fn count_unknown_sections<R: ColumnRow>(rows: &[R]) -> usize {
    rows.iter()
        .filter(|row| row.section_name().and_then(Section::from_name).is_none())
        .count()
}
