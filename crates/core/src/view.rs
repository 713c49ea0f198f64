//! Per-viewer presentation state.
//!
//! Nothing here is persisted: the page threads this state through its
//! query string, so a plain reload starts over with every section
//! collapsed and no overlay open.

use std::collections::BTreeMap;

use crate::section::Section;
use crate::types::IssueNumber;

// ---------------------------------------------------------------------------
// Expand flags
// ---------------------------------------------------------------------------

/// One expand flag per section, all initially `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    flags: BTreeMap<Section, bool>,
}

impl ExpandState {
    pub fn is_expanded(&self, section: Section) -> bool {
        self.flags.get(&section).copied().unwrap_or(false)
    }

    /// Flip the flag of a single section.
    pub fn toggle(&mut self, section: Section) {
        let flag = self.flags.entry(section).or_insert(false);
        *flag = !*flag;
    }

    pub fn set_expanded(&mut self, section: Section) {
        self.flags.insert(section, true);
    }

    /// Parse a comma-separated list of section slugs. Unknown slugs are
    /// ignored.
    pub fn from_slugs(raw: &str) -> Self {
        let mut state = Self::default();
        raw.split(',')
            .map(str::trim)
            .filter_map(Section::from_slug)
            .for_each(|section| state.set_expanded(section));
        state
    }

    /// Expanded sections as comma-separated slugs, in canonical order.
    pub fn to_slugs(&self) -> String {
        self.expanded_sections()
            .map(Section::slug)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn expanded_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.flags
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(section, _)| *section)
    }
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Expand flags plus the section currently open in the full-view overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub expand: ExpandState,
    pub full_view: Option<Section>,
}

impl ViewState {
    /// Build from the `expanded` and `full` query parameters.
    ///
    /// A `full` section is always expanded, matching what
    /// [`ViewState::request_full_view`] would have produced.
    pub fn from_query(expanded: Option<&str>, full: Option<&str>) -> Self {
        let mut state = Self {
            expand: expanded.map(ExpandState::from_slugs).unwrap_or_default(),
            full_view: None,
        };
        if let Some(section) = full.map(str::trim).and_then(Section::from_slug) {
            state.request_full_view(section);
        }
        state
    }

    /// Flip the expand flag of `section`. Collapsing the section shown in
    /// the overlay also closes the overlay, since an open overlay always
    /// implies an expanded section.
    pub fn toggle_section(&mut self, section: Section) {
        self.expand.toggle(section);
        if !self.expand.is_expanded(section) && self.full_view == Some(section) {
            self.full_view = None;
        }
    }

    /// Expand `section` and open it in the overlay.
    pub fn request_full_view(&mut self, section: Section) {
        self.expand.set_expanded(section);
        self.full_view = Some(section);
    }

    /// Close the overlay. Expand flags are kept.
    pub fn close_full_view(&mut self) {
        self.full_view = None;
    }

    /// Query string encoding this state, without the leading `?`.
    /// Empty when everything is at its default.
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        let expanded = self.expand.to_slugs();
        if !expanded.is_empty() {
            parts.push(format!("expanded={expanded}"));
        }
        if let Some(section) = self.full_view {
            parts.push(format!("full={}", section.slug()));
        }
        parts.join("&")
    }

    /// The state after toggling `section`.
    pub fn with_toggled(&self, section: Section) -> Self {
        let mut next = self.clone();
        next.toggle_section(section);
        next
    }

    /// The state after requesting the full view of `section`.
    pub fn with_full_view(&self, section: Section) -> Self {
        let mut next = self.clone();
        next.request_full_view(section);
        next
    }

    /// The state after closing the overlay.
    pub fn with_overlay_closed(&self) -> Self {
        let mut next = self.clone();
        next.close_full_view();
        next
    }
}

// ---------------------------------------------------------------------------
// Issue loading
// ---------------------------------------------------------------------------

/// Load progress for the issue a viewer is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// The issue a single viewer is looking at, its load state, and its view
/// state.
///
/// Fetches are started for a specific issue number and may complete after
/// the viewer has moved on. [`IssueView::commit`] only applies a result
/// when it belongs to the issue still being viewed.
#[derive(Debug, Clone)]
pub struct IssueView<T> {
    issue_number: IssueNumber,
    state: LoadState<T>,
    pub view: ViewState,
}

impl<T> IssueView<T> {
    pub fn new(issue_number: IssueNumber) -> Self {
        Self::with_view(issue_number, ViewState::default())
    }

    pub fn with_view(issue_number: IssueNumber, view: ViewState) -> Self {
        Self {
            issue_number,
            state: LoadState::Loading,
            view,
        }
    }

    pub fn issue_number(&self) -> IssueNumber {
        self.issue_number
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Switch to another issue. Load state and view state start over.
    pub fn navigate(&mut self, issue_number: IssueNumber) {
        self.issue_number = issue_number;
        self.state = LoadState::Loading;
        self.view = ViewState::default();
    }

    /// Apply the outcome of a fetch started for `requested`.
    ///
    /// Returns `false` and leaves the view untouched when `requested` is no
    /// longer the issue being viewed.
    pub fn commit(&mut self, requested: IssueNumber, outcome: Result<T, String>) -> bool {
        if requested != self.issue_number {
            return false;
        }
        self.state = match outcome {
            Ok(payload) => LoadState::Loaded(payload),
            Err(message) => LoadState::Failed(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- ExpandState ---------------------------------------------------------

    #[test]
    fn flags_start_collapsed() {
        let state = ExpandState::default();
        assert!(Section::ALL.into_iter().all(|s| !state.is_expanded(s)));
    }

    #[test]
    fn toggle_is_reversible_and_isolated() {
        let mut state = ExpandState::default();
        state.toggle(Section::FineTuning);
        assert!(state.is_expanded(Section::FineTuning));
        assert!(!state.is_expanded(Section::Alignment));

        state.toggle(Section::FineTuning);
        assert!(!state.is_expanded(Section::FineTuning));
    }

    #[test]
    fn slugs_parse_and_print_in_canonical_order() {
        let state = ExpandState::from_slugs("alignment, knowledge-base,bogus,");
        assert!(state.is_expanded(Section::Alignment));
        assert!(state.is_expanded(Section::KnowledgeBase));
        assert_eq!(state.to_slugs(), "knowledge-base,alignment");
    }

    #[test]
    fn collapsed_flags_are_not_printed() {
        let mut state = ExpandState::default();
        state.toggle(Section::ReleaseNotes);
        state.toggle(Section::ReleaseNotes);
        assert_eq!(state.to_slugs(), "");
    }

    // -- ViewState -----------------------------------------------------------

    #[test]
    fn full_view_expands_and_opens_overlay() {
        let mut view = ViewState::default();
        view.request_full_view(Section::Hallucination);
        assert_eq!(view.full_view, Some(Section::Hallucination));
        assert!(view.expand.is_expanded(Section::Hallucination));

        view.close_full_view();
        assert_eq!(view.full_view, None);
        assert!(view.expand.is_expanded(Section::Hallucination));
    }

    #[test]
    fn full_view_keeps_section_expanded_when_already_expanded() {
        let mut view = ViewState::default();
        view.toggle_section(Section::Alignment);
        view.request_full_view(Section::Alignment);
        assert!(view.expand.is_expanded(Section::Alignment));
    }

    #[test]
    fn collapsing_overlay_section_survives_query_round_trip() {
        let view = ViewState::from_query(None, Some("alignment"));
        let collapsed = view.with_toggled(Section::Alignment);

        assert_eq!(collapsed.full_view, None);
        assert_eq!(collapsed.to_query(), "");

        let reparsed = ViewState::from_query(Some(""), None);
        assert!(!reparsed.expand.is_expanded(Section::Alignment));
        assert_eq!(reparsed.full_view, None);
        assert_eq!(reparsed.to_query(), collapsed.to_query());
    }

    #[test]
    fn toggling_another_section_keeps_overlay_open() {
        let view = ViewState::from_query(None, Some("alignment"));
        let next = view.with_toggled(Section::FineTuning);

        assert_eq!(next.full_view, Some(Section::Alignment));
        let reparsed = ViewState::from_query(Some("fine-tuning,alignment"), Some("alignment"));
        assert_eq!(next.to_query(), reparsed.to_query());
        assert!(reparsed.expand.is_expanded(Section::FineTuning));
    }

    #[test]
    fn query_round_trip() {
        let view = ViewState::from_query(Some("fine-tuning"), Some("alignment"));
        assert_eq!(view.to_query(), "expanded=fine-tuning,alignment&full=alignment");
        assert_eq!(
            ViewState::from_query(Some("fine-tuning,alignment"), Some("alignment")),
            view
        );
    }

    #[test]
    fn default_view_has_empty_query() {
        assert_eq!(ViewState::default().to_query(), "");
        assert_eq!(ViewState::from_query(None, Some("nope")), ViewState::default());
    }

    #[test]
    fn derived_states_do_not_mutate_the_original() {
        let view = ViewState::default();
        let toggled = view.with_toggled(Section::KnowledgeBase);
        assert!(toggled.expand.is_expanded(Section::KnowledgeBase));
        assert!(!view.expand.is_expanded(Section::KnowledgeBase));

        let opened = view.with_full_view(Section::FineTuning);
        assert_eq!(opened.with_overlay_closed().full_view, None);
        assert_eq!(view.full_view, None);
    }

    // -- IssueView -----------------------------------------------------------

    #[test]
    fn matching_result_is_applied() {
        let mut view: IssueView<&str> = IssueView::new(1222);
        assert_matches!(view.state(), LoadState::Loading);

        assert!(view.commit(1222, Ok("content")));
        assert_matches!(view.state(), LoadState::Loaded("content"));
    }

    #[test]
    fn stale_result_is_discarded_after_navigation() {
        let mut view: IssueView<&str> = IssueView::new(1222);
        view.navigate(1223);

        assert!(!view.commit(1222, Ok("old issue")));
        assert_matches!(view.state(), LoadState::Loading);
        assert_eq!(view.issue_number(), 1223);
    }

    #[test]
    fn failure_is_recorded_for_current_issue() {
        let mut view: IssueView<()> = IssueView::new(7);
        assert!(view.commit(7, Err("store unavailable".to_string())));
        assert_matches!(view.state(), LoadState::Failed(msg) if msg == "store unavailable");
    }

    #[test]
    fn navigation_resets_view_state() {
        let mut view: IssueView<()> = IssueView::new(7);
        view.view.request_full_view(Section::Alignment);
        view.navigate(8);
        assert_eq!(view.view, ViewState::default());
    }
}
