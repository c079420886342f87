//! Test fixtures for integration tests.
//!
//! This module provides payload builders for the scenario tests. Each
//! builder embeds a short random token in the human-readable fields so
//! concurrently running tests never collide on lookups by name or email.

use placeholder_client::models::{Address, Comment, Company, Geo, User};
use uuid::Uuid;

/// Short unique token for embedding in fixture fields.
pub fn unique_token() -> String {
    Uuid::new_v4().simple().to_string()[..6].to_string()
}

/// Comment create payload for the given post, with unique name and email.
pub fn sample_comment(post_id: u64) -> Comment {
    let token = unique_token();
    Comment {
        id: None,
        post_id,
        name: format!("integration comment {token}"),
        email: format!("commenter-{token}@example.com"),
        body: "sed ut perspiciatis unde omnis iste natus".to_string(),
    }
}

/// User create payload with only the required fields set.
pub fn minimal_user() -> User {
    let token = unique_token();
    User {
        name: format!("Test User {token}"),
        username: format!("user-{token}"),
        email: format!("user-{token}@example.com"),
        ..Default::default()
    }
}

/// User create payload with the full nested profile filled in.
pub fn full_user() -> User {
    let token = unique_token();
    User {
        id: None,
        name: format!("Test User {token}"),
        username: format!("user-{token}"),
        email: format!("user-{token}@example.com"),
        address: Some(Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        }),
        phone: Some("1-770-736-8031 x56442".to_string()),
        website: Some(format!("{token}.example.org")),
        company: Some(Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        }),
    }
}
