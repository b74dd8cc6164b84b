use axum::http::StatusCode;
use tower::ServiceExt;

use super::test_helpers::{app, body_text, draft, get, memory_pool, repo};

fn section_offset(body: &str, slug: &str) -> usize {
    let marker = format!("id=\"{slug}\"");
    body.find(&marker).expect("quadrant section present")
}

#[tokio::test]
async fn pay_rent_and_call_dentist_land_in_their_quadrants() {
    let pool = memory_pool().await;
    let repo = repo(&pool);
    let app = app(&pool);

    repo.add(&draft("Pay rent", true, true, Some("2025-01-01")))
        .await
        .expect("add");
    repo.add(&draft("Call dentist", false, false, None))
        .await
        .expect("add");

    let response = app.oneshot(get("/?view_mode=matrix")).await.expect("request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    // Counts per quadrant: do 1, schedule 0, delegate 0, eliminate 1.
    assert!(body.contains("Do <small>(1)</small>"));
    assert!(body.contains("Schedule <small>(0)</small>"));
    assert!(body.contains("Delegate <small>(0)</small>"));
    assert!(body.contains("Eliminate <small>(1)</small>"));

    // "Pay rent" sits inside the Do section, "Call dentist" inside Eliminate.
    let do_at = section_offset(&body, "do");
    let schedule_at = section_offset(&body, "schedule");
    let eliminate_at = section_offset(&body, "eliminate");
    let pay_rent_at = body.find("Pay rent").expect("pay rent rendered");
    let dentist_at = body.find("Call dentist").expect("dentist rendered");

    assert!(do_at < pay_rent_at && pay_rent_at < schedule_at);
    assert!(eliminate_at < dentist_at);
}

#[tokio::test]
async fn matrix_view_renders_all_four_sections_when_empty() {
    let pool = memory_pool().await;
    let app = app(&pool);

    let response = app.oneshot(get("/?view_mode=matrix")).await.expect("request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    for slug in ["do", "schedule", "delegate", "eliminate"] {
        assert!(body.contains(&format!("id=\"{slug}\"")));
    }
    assert!(body.contains("(0)"));
}

#[tokio::test]
async fn list_view_is_the_default() {
    let pool = memory_pool().await;
    let repo = repo(&pool);
    let app = app(&pool);

    repo.add(&draft("Just one", true, false, None)).await.expect("add");

    let response = app.oneshot(get("/")).await.expect("request");
    let body = body_text(response).await;
    assert!(body.contains("Just one"));
    // Flat list carries the quadrant badge instead of grouped sections.
    assert!(body.contains("Delegate"));
    assert!(!body.contains("id=\"do\""));
}

#[tokio::test]
async fn filtered_matrix_only_shows_matching_tasks() {
    let pool = memory_pool().await;
    let repo = repo(&pool);
    let app = app(&pool);

    repo.add(&draft("Urgent thing", true, false, None)).await.expect("add");
    repo.add(&draft("Calm thing", false, true, None)).await.expect("add");

    let response = app
        .oneshot(get("/?view_mode=matrix&urgent=true"))
        .await
        .expect("request");
    let body = body_text(response).await;
    assert!(body.contains("Urgent thing"));
    assert!(!body.contains("Calm thing"));
    assert!(body.contains("Delegate <small>(1)</small>"));
    assert!(body.contains("Schedule <small>(0)</small>"));
}

#[tokio::test]
async fn task_content_is_html_escaped() {
    let pool = memory_pool().await;
    let repo = repo(&pool);
    let app = app(&pool);

    repo.add(&draft("<script>alert(1)</script>", false, false, None))
        .await
        .expect("add");

    let response = app.oneshot(get("/")).await.expect("request");
    let body = body_text(response).await;
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;"));
}
