//! Integration tests for the newsletter repositories.
//!
//! Rows are inserted with raw SQL: the crate itself has no write path.

use newsletter_core::resolver::{resolve_sections, ColumnRow};
use newsletter_core::section::Section;
use newsletter_core::view::ExpandState;
use newsletter_db::repositories::{ColumnContentRepo, IssueRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_issue(pool: &PgPool, issue_number: i32, headline: &str) {
    sqlx::query(
        "INSERT INTO newsletter_issues
            (issue_number, publication_date, headline, subheadline, editors_note, cover_image)
         VALUES ($1, 'December 15, 2024', $2, 'Plus: Introducing TLDR', '<p>Hello</p>', '/covers/1.png')",
    )
    .bind(issue_number)
    .bind(headline)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_content(
    pool: &PgPool,
    issue_number: i32,
    section_name: &str,
    preview_text: Option<&str>,
    full_text: &str,
    display_order: i32,
) -> i32 {
    let row: (i32,) = sqlx::query_as(
        "INSERT INTO column_content
            (issue_number, section_name, preview_text, full_text, display_order)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(issue_number)
    .bind(section_name)
    .bind(preview_text)
    .bind(full_text)
    .bind(display_order)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_passes_after_migrations(pool: PgPool) {
    newsletter_db::health_check(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// IssueRepo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_issue_by_number(pool: PgPool) {
    insert_issue(&pool, 1222, "How to Win at AI and Influence People").await;

    let issue = IssueRepo::find_by_number(&pool, 1222)
        .await
        .unwrap()
        .expect("issue 1222 should exist");

    assert_eq!(issue.issue_number, 1222);
    assert_eq!(
        issue.headline.as_deref(),
        Some("How to Win at AI and Influence People")
    );
    assert_eq!(issue.publication_date.as_deref(), Some("December 15, 2024"));
    assert_eq!(issue.editors_note.as_deref(), Some("<p>Hello</p>"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_issue_returns_none(pool: PgPool) {
    let issue = IssueRepo::find_by_number(&pool, 404).await.unwrap();
    assert!(issue.is_none());
}

// ---------------------------------------------------------------------------
// ColumnContentRepo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_content_is_scoped_to_issue(pool: PgPool) {
    insert_issue(&pool, 1215, "Older").await;
    insert_issue(&pool, 1222, "Current").await;
    insert_content(&pool, 1215, "Alignment", None, "<p>old</p>", 1).await;
    let id = insert_content(&pool, 1222, "Alignment", None, "<p>new</p>", 1).await;

    let rows = ColumnContentRepo::list_by_issue(&pool, 1222).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].full_text, "<p>new</p>");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_content_for_unknown_issue_is_empty(pool: PgPool) {
    let rows = ColumnContentRepo::list_by_issue(&pool, 9999).await.unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_content_orders_by_display_order_within_section(pool: PgPool) {
    insert_issue(&pool, 1222, "Current").await;
    let second = insert_content(&pool, 1222, "Knowledge Base", Some("B"), "<p>B</p>", 2).await;
    let first = insert_content(&pool, 1222, "Knowledge Base", Some("A"), "<p>A</p>", 1).await;

    let rows = ColumnContentRepo::list_by_issue(&pool, 1222).await.unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_preview_survives_the_round_trip(pool: PgPool) {
    insert_issue(&pool, 1222, "Current").await;
    insert_content(&pool, 1222, "Fine Tuning", None, "<p>F</p>", 1).await;

    let rows = ColumnContentRepo::list_by_issue(&pool, 1222).await.unwrap();

    assert_eq!(rows[0].preview_text(), None);
    assert_eq!(rows[0].section_name(), Some("Fine Tuning"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stored_rows_resolve_into_canonical_sections(pool: PgPool) {
    insert_issue(&pool, 1222, "Current").await;
    insert_content(&pool, 1222, "Alignment", Some("<p>AP</p>"), "<p>AF</p>", 1).await;
    insert_content(&pool, 1222, "Hallucination", None, "/img/h.png", 1).await;
    insert_content(&pool, 1222, "Knowledge Base", Some("<p>KP</p>"), "<p>KF</p>", 1).await;
    insert_content(&pool, 1222, "Classifieds", None, "<p>?</p>", 1).await;

    let rows = ColumnContentRepo::list_by_issue(&pool, 1222).await.unwrap();
    let resolved = resolve_sections(1222, &rows, &ExpandState::default());
    let order: Vec<_> = resolved.iter().map(|s| s.section).collect();

    assert_eq!(
        order,
        vec![Section::KnowledgeBase, Section::Hallucination, Section::Alignment]
    );
}
