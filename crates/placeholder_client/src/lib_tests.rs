//! Unit tests for the placeholder_client crate.

use super::*; // Import items from lib.rs
use std::sync::Mutex;

use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> PlaceholderApi {
    let config = ApiConfig::new(&server.uri()).unwrap();
    PlaceholderApi::new(config).unwrap()
}

fn sample_comment() -> Comment {
    Comment {
        id: None,
        post_id: 1,
        name: "a".to_string(),
        email: "a@example.com".to_string(),
        body: "hi".to_string(),
    }
}

#[tokio::test]
async fn test_create_comment_success() {
    let mock_server = MockServer::start().await;

    // The payload must arrive without an id; the server assigns one.
    Mock::given(method("POST"))
        .and(path("/comments"))
        .and(body_json(json!({
            "postId": 1,
            "name": "a",
            "email": "a@example.com",
            "body": "hi"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "postId": 1,
            "id": 501,
            "name": "a",
            "email": "a@example.com",
            "body": "hi"
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    let created = api.comments().create(&sample_comment()).await.unwrap();

    assert_eq!(created.id, Some(501));
    assert_eq!(created.post_id, 1);
    assert_eq!(created.body, "hi");
}

#[tokio::test]
async fn test_create_comment_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/comments"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "database unavailable"
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    let error = api.comments().create(&sample_comment()).await.unwrap_err();

    match error {
        Error::StatusMismatch {
            expected,
            actual,
            path,
        } => {
            assert_eq!(expected, StatusCode::CREATED);
            assert_eq!(actual, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(path, "/comments");
        }
        other => panic!("expected StatusMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_user_by_id_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    let user = api.users().get_by_id(1).await.unwrap();

    assert_eq!(user.id, Some(1));
    assert_eq!(user.username, "Bret");
    assert_eq!(user.company.unwrap().name, "Romaguera-Crona");
    assert!(user.address.is_none());
}

#[tokio::test]
async fn test_get_missing_comment_as_raw_response() {
    let mock_server = MockServer::start().await;

    // The placeholder API answers a miss with 404 and an empty object.
    Mock::given(method("GET"))
        .and(path("/comments/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    let response = api
        .comments()
        .get_by_id_expecting(9999, StatusCode::NOT_FOUND)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "{}");
}

#[tokio::test]
async fn test_get_matching_comments_by_post() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("postId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "postId": 1,
            "id": 3,
            "name": "odio adipisci rerum aut animi",
            "email": "Nikita@garfield.biz",
            "body": "quia molestiae reprehenderit"
        }])))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    let comments = api
        .comments()
        .get_matching(&[("postId", "1")])
        .await
        .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, Some(3));
    assert_eq!(comments[0].post_id, 1);
}

#[tokio::test]
async fn test_delete_comment_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/comments/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    api.comments().delete(5).await.unwrap();
}

#[tokio::test]
async fn test_custom_resource_route() {
    #[derive(Debug, Clone, Deserialize, Serialize)]
    struct Todo {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        title: String,
        completed: bool,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "title": "et porro tempora",
            "completed": true
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let route = ResourceRoute::new("Todo", "/todos", "/todos/{id}").unwrap();
    let todos = api.resource::<Todo, u64>(route);

    let todo = todos.get_by_id(4).await.unwrap();

    assert_eq!(todo.id, Some(4));
    assert!(todo.completed);
}

#[tokio::test]
async fn test_facade_observer_sees_every_client() {
    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<(Operation, String)>>,
    }

    impl RequestObserver for Recording {
        fn observe(&self, event: RequestEvent<'_>) {
            self.seen
                .lock()
                .unwrap()
                .push((event.operation, event.resource.to_string()));
        }
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let observer = Arc::new(Recording::default());
    let api = api_for(&mock_server).with_observer(Arc::clone(&observer) as Arc<dyn RequestObserver>);

    api.comments().get_all().await.unwrap();
    api.users().get_all().await.unwrap();

    let seen = observer.seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            (Operation::GetAll, "Comment".to_string()),
            (Operation::GetAll, "User".to_string()),
        ]
    );
}

#[test]
fn test_built_in_routes_point_at_expected_paths() {
    let mock_uri = "http://127.0.0.1:1";
    let api = PlaceholderApi::new(ApiConfig::new(mock_uri).unwrap()).unwrap();

    assert_eq!(api.comments().route().collection(), "/comments");
    assert_eq!(api.comments().route().item_path(&17u64), "/comments/17");
    assert_eq!(api.users().route().collection(), "/users");
    assert_eq!(api.users().route().name(), "User");
}

#[test]
fn test_facade_and_clients_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<PlaceholderApi>();
    assert_send_sync::<ResourceClient<Comment>>();
    assert_send_sync::<ResourceClient<User>>();
}
