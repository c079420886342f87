//! Comment CRUD scenarios against the local stand-in server.
//!
//! These tests exercise the request layer end to end with real HTTP:
//! route interpolation, status assertions, typed extraction, and the
//! collection reads, against a server that reproduces the placeholder
//! service's behaviors.

use anyhow::Result;
use http::StatusCode;
use integration_tests::{fixtures, init_logging, FakePlaceholderServer};
use placeholder_client::{ApiConfig, Comment, Error, PlaceholderApi};
use tracing::info;

async fn start_api() -> Result<(FakePlaceholderServer, PlaceholderApi)> {
    init_logging();
    let server = FakePlaceholderServer::start().await?;
    let api = PlaceholderApi::new(ApiConfig::new(&server.base_url())?)?;
    Ok((server, api))
}

/// Test the basic create flow.
///
/// Verifies the server answers 201 Created, assigns an id, and echoes
/// the submitted fields back unchanged.
#[tokio::test]
async fn test_create_comment_returns_201_and_assigned_id() -> Result<()> {
    let (_server, api) = start_api().await?;
    let comments = api.comments();

    let payload = Comment {
        id: None,
        post_id: 1,
        name: "a".to_string(),
        email: "a@example.com".to_string(),
        body: "hi".to_string(),
    };

    let response = comments
        .create_expecting(&payload, StatusCode::CREATED)
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Comment = response.json()?;
    assert_eq!(created.id, Some(1));
    assert_eq!(created.post_id, 1);
    assert_eq!(created.name, "a");
    assert_eq!(created.email, "a@example.com");
    assert_eq!(created.body, "hi");

    Ok(())
}

/// Test a full create, read, update, delete pass.
///
/// Verifies each step observes the previous one's effect, and that a
/// deleted comment is gone afterwards.
#[tokio::test]
async fn test_comment_crud_lifecycle() -> Result<()> {
    let (_server, api) = start_api().await?;
    let comments = api.comments();

    let payload = fixtures::sample_comment(1);
    let created = comments.create(&payload).await?;
    let id = created.id.expect("create assigns an id");
    info!(id, "created comment");
    assert_eq!(created.post_id, payload.post_id);
    assert_eq!(created.email, payload.email);

    let fetched = comments.get_by_id(id).await?;
    assert_eq!(fetched, created);

    let mut changed = fetched.clone();
    changed.body = "revised text".to_string();
    let updated = comments.update(id, &changed).await?;
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.body, "revised text");

    let reread = comments.get_by_id(id).await?;
    assert_eq!(reread.body, "revised text");

    comments.delete(id).await?;

    let after = comments
        .get_by_id_expecting(id, StatusCode::NOT_FOUND)
        .await?;
    assert_eq!(after.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Test that collection reads are stable.
///
/// Verifies two list calls without interleaved writes return the same
/// comments in the same order.
#[tokio::test]
async fn test_listing_is_stable_between_reads() -> Result<()> {
    let (_server, api) = start_api().await?;
    let comments = api.comments();

    comments.create(&fixtures::sample_comment(1)).await?;
    comments.create(&fixtures::sample_comment(1)).await?;
    comments.create(&fixtures::sample_comment(2)).await?;

    let first = comments.get_all().await?;
    let second = comments.get_all().await?;

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);

    Ok(())
}

/// Test server-side filtering of the collection.
///
/// Verifies a postId query returns exactly the comments created for
/// that post.
#[tokio::test]
async fn test_filtering_comments_by_post() -> Result<()> {
    let (_server, api) = start_api().await?;
    let comments = api.comments();

    let first = comments.create(&fixtures::sample_comment(1)).await?;
    let second = comments.create(&fixtures::sample_comment(1)).await?;
    comments.create(&fixtures::sample_comment(2)).await?;

    let matching = comments.get_matching(&[("postId", "1")]).await?;

    assert_eq!(matching.len(), 2);
    assert!(matching.iter().all(|comment| comment.post_id == 1));
    let ids: Vec<_> = matching.iter().map(|comment| comment.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}

/// Test the miss behavior on single-item reads.
///
/// Verifies a lookup of an id that was never assigned answers 404 with
/// an empty object body, and that asserting 404 hands the raw response
/// back instead of failing.
#[tokio::test]
async fn test_missing_comment_answers_404_with_empty_object() -> Result<()> {
    let (_server, api) = start_api().await?;

    let response = api
        .comments()
        .get_by_id_expecting(999999, StatusCode::NOT_FOUND)
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "{}");

    Ok(())
}

/// Test the status mismatch error carries full context.
///
/// Verifies deleting the same comment twice surfaces the expected and
/// actual statuses plus the request path.
#[tokio::test]
async fn test_unexpected_status_reports_context() -> Result<()> {
    let (_server, api) = start_api().await?;
    let comments = api.comments();

    let created = comments.create(&fixtures::sample_comment(1)).await?;
    let id = created.id.expect("create assigns an id");
    comments.delete(id).await?;

    let error = comments.delete(id).await.unwrap_err();

    match error {
        Error::StatusMismatch {
            expected,
            actual,
            path,
        } => {
            assert_eq!(expected, StatusCode::OK);
            assert_eq!(actual, StatusCode::NOT_FOUND);
            assert_eq!(path, format!("/comments/{id}"));
        }
        other => panic!("expected StatusMismatch, got {other:?}"),
    }

    Ok(())
}
