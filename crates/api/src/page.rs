//! Server-rendered issue page.
//!
//! The page is assembled as a plain HTML string. Labels, headlines, dates
//! and image references are escaped; column bodies and the editor's note
//! are [`TrustedHtml`] and are written verbatim.

use std::fmt::Write;

use newsletter_core::html::{escape_text, TrustedHtml};
use newsletter_core::resolver::{DisplayBody, ResolvedItem, ResolvedSection};
use newsletter_core::section::RenderMode;
use newsletter_core::types::IssueNumber;
use newsletter_core::view::{LoadState, ViewState};
use newsletter_db::models::issue::NewsletterIssue;

use crate::handlers::content::IssueContent;

pub const SITE_TITLE: &str = "Context Window";
pub const SITE_TAGLINE: &str = "Dispatches from the frontiers of AI";

const STYLES: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f6f8fa;color:#0f172a}\
.page{max-width:80rem;margin:0 auto;padding:2rem}\
.site-header{display:flex;justify-content:space-between;align-items:center}\
.grid{display:grid;grid-template-columns:repeat(12,1fr);gap:2rem}\
.card{background:#fff;border-radius:.75rem;border-top:4px solid var(--accent);padding:1.5rem;display:flex;flex-direction:column}\
.card-body{max-height:400px;overflow-y:auto}\
.overlay{position:fixed;inset:0;background:rgba(15,23,42,.6);display:flex;align-items:center;justify-content:center}\
.overlay-content{background:#fff;max-width:48rem;max-height:90vh;overflow-y:auto;padding:2rem;border-radius:.75rem}\
img{max-width:100%;border-radius:1rem}\
@media(max-width:768px){.grid{grid-template-columns:1fr}.card{grid-column:auto!important}}";

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Render issue `issue_number` in load state `state` with view state
/// `view`. `base_path` is the URL the state links are relative to (`/` or
/// `/issues/{n}`).
pub fn render_issue_page(
    issue_number: IssueNumber,
    state: &LoadState<IssueContent>,
    view: &ViewState,
    base_path: &str,
) -> String {
    match state {
        LoadState::Loading => layout(
            &format!("Issue {issue_number}"),
            &site_header(issue_number, None),
            "<p class=\"status\">Loading...</p>",
        ),
        LoadState::Failed(message) => layout(
            &format!("Issue {issue_number}"),
            &site_header(issue_number, None),
            &failure_block(message),
        ),
        LoadState::Loaded(content) => {
            let sections = content.sections(&view.expand);
            let mut body = masthead(&content.issue);

            body.push_str("<div class=\"grid\">");
            for section in &sections {
                body.push_str(&section_card(section, view, base_path));
            }
            body.push_str("</div>");

            if let Some(open) = view.full_view {
                if let Some(section) = sections.iter().find(|s| s.section == open) {
                    body.push_str(&overlay(section, view, base_path));
                }
            }

            let title = content
                .issue
                .headline
                .clone()
                .unwrap_or_else(|| format!("Issue {issue_number}"));
            layout(
                &title,
                &site_header(issue_number, content.issue.publication_date.as_deref()),
                &body,
            )
        }
    }
}

/// Render a standalone error page, used when no issue could be selected.
pub fn render_error_page(message: &str) -> String {
    layout(SITE_TITLE, &site_header_plain(), &failure_block(message))
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

fn layout(title: &str, header: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {site}</title>\n\
         <style>{STYLES}</style>\n\
         </head>\n<body>\n<main class=\"page\">\n{header}\n{body}\n</main>\n</body>\n</html>\n",
        title = escape_text(title),
        site = SITE_TITLE,
    )
}

fn site_header_plain() -> String {
    format!(
        "<header class=\"site-header\"><div><h1>{SITE_TITLE}</h1>\
         <p class=\"tagline\">{SITE_TAGLINE}</p></div></header>"
    )
}

fn site_header(issue_number: IssueNumber, publication_date: Option<&str>) -> String {
    let mut nav = format!("<span>Issue {issue_number}</span>");
    if let Some(date) = publication_date {
        let _ = write!(nav, "<span>/</span><span>{}</span>", escape_text(date));
    }
    format!(
        "<header class=\"site-header\"><div><h1>{SITE_TITLE}</h1>\
         <p class=\"tagline\">{SITE_TAGLINE}</p></div>\
         <nav class=\"issue-nav\">{nav}</nav></header>"
    )
}

fn failure_block(message: &str) -> String {
    format!(
        "<div class=\"status status-error\" role=\"alert\">\
         <p>This issue could not be displayed.</p><p>{}</p></div>",
        escape_text(message)
    )
}

/// Cover image, headline, subheadline, date and editor's note.
fn masthead(issue: &NewsletterIssue) -> String {
    let mut out = String::from("<section class=\"masthead\">");
    if let Some(cover) = issue.cover_image.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(
            out,
            "<img class=\"cover\" src=\"{}\" alt=\"Cover\">",
            escape_text(cover)
        );
    }
    if let Some(headline) = issue.headline.as_deref() {
        let _ = write!(out, "<h2 class=\"headline\">{}</h2>", escape_text(headline));
    }
    if let Some(subheadline) = issue.subheadline.as_deref() {
        let _ = write!(
            out,
            "<p class=\"subheadline\">{}</p>",
            escape_text(subheadline)
        );
    }
    if let Some(date) = issue.publication_date.as_deref() {
        let _ = write!(out, "<p class=\"date\">{}</p>", escape_text(date));
    }
    if let Some(note) = issue.editors_note.as_deref().filter(|n| !n.is_empty()) {
        let _ = write!(
            out,
            "<div class=\"editors-note\">{}</div>",
            TrustedHtml::from_store(note)
        );
    }
    out.push_str("</section>");
    out
}

fn section_card(section: &ResolvedSection, view: &ViewState, base_path: &str) -> String {
    let config = section.config;
    let slug = section.section.slug();
    let title = escape_text(config.title);

    let mut out = format!(
        "<section class=\"card\" id=\"section-{slug}\" data-expanded=\"{expanded}\" \
         style=\"--accent: {accent}; grid-column: span {span};\">\
         <header class=\"card-header\">\
         <p class=\"card-category\">{category}</p>\
         <h2 class=\"card-title\">{title}</h2>\
         <a class=\"card-maximize\" href=\"{full_href}\" aria-label=\"Expand {title}\">Full view</a>\
         </header>",
        expanded = section.expanded,
        accent = escape_text(config.accent_color),
        span = config.span,
        category = escape_text(config.category),
        full_href = link(base_path, &view.with_full_view(section.section), slug),
    );

    out.push_str("<div class=\"card-body\">");
    out.push_str(&section_items(section));
    out.push_str("</div>");

    if config.render_mode == RenderMode::RichText {
        let label = if section.expanded { "Show less" } else { "Show more" };
        let _ = write!(
            out,
            "<footer class=\"card-footer\"><a class=\"card-toggle\" href=\"{}\">{label}</a></footer>",
            link(base_path, &view.with_toggled(section.section), slug),
        );
    }

    out.push_str("</section>");
    out
}

fn section_items(section: &ResolvedSection) -> String {
    let mut out = String::new();
    if let Some(heading) = section.config.heading {
        let _ = write!(out, "<h3 class=\"card-heading\">{}</h3>", escape_text(heading));
    }
    for item in &section.items {
        out.push_str(&item_block(item, section.config.title));
    }
    out
}

fn item_block(item: &ResolvedItem, section_title: &str) -> String {
    match &item.body {
        DisplayBody::Html(html) => format!(
            "<div class=\"item prose\" data-item-id=\"{}\">{html}</div>",
            item.id
        ),
        DisplayBody::Image(src) => format!(
            "<figure class=\"item\" data-item-id=\"{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>",
            item.id,
            escape_text(src),
            escape_text(section_title),
        ),
    }
}

fn overlay(section: &ResolvedSection, view: &ViewState, base_path: &str) -> String {
    format!(
        "<div class=\"overlay\" role=\"dialog\" aria-modal=\"true\" aria-labelledby=\"overlay-title\">\
         <div class=\"overlay-content\">\
         <header class=\"overlay-header\"><h2 id=\"overlay-title\">{title}</h2>\
         <a class=\"overlay-close\" href=\"{close_href}\">Close</a></header>\
         {items}</div></div>",
        title = escape_text(section.config.title),
        close_href = link(
            base_path,
            &view.with_overlay_closed(),
            section.section.slug()
        ),
        items = section_items(section),
    )
}

/// Escaped href for `state`, anchored on the card it was clicked from.
fn link(base_path: &str, state: &ViewState, anchor: &str) -> String {
    let query = state.to_query();
    let href = if query.is_empty() {
        format!("{base_path}#section-{anchor}")
    } else {
        format!("{base_path}?{query}#section-{anchor}")
    };
    escape_text(&href)
}
