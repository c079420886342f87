//! # Models
//!
//! This module contains the data models for the resources exposed by the
//! placeholder API.
//!
//! The structs mirror the JSON documents the service exchanges. Server-assigned
//! identifiers are modelled as `Option<u64>` and skipped during serialization
//! while unset, so the same struct doubles as a create payload and as a parsed
//! response. Wire names that are camelCase on the server are renamed at the
//! field level.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a comment attached to a post.
///
/// # Examples
///
/// Building a create payload leaves the identifier unset; the server assigns
/// it and echoes it back:
///
/// ```
/// use placeholder_client::models::Comment;
///
/// let payload = Comment {
///     id: None,
///     post_id: 1,
///     name: "a".to_string(),
///     email: "a@example.com".to_string(),
///     body: "hi".to_string(),
/// };
/// assert!(payload.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Comment {
    /// The unique ID of the comment, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The ID of the post this comment belongs to
    #[serde(rename = "postId")]
    pub post_id: u64,
    /// The display name of the comment
    pub name: String,
    /// The email address of the commenter
    pub email: String,
    /// The text of the comment
    pub body: String,
}

/// Represents a registered user of the service.
///
/// Only `name`, `username`, and `email` are required to create a user; the
/// remaining profile fields are optional and omitted from payloads while
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    /// The unique ID of the user, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The full name of the user
    pub name: String,
    /// The login name of the user
    pub username: String,
    /// The email address of the user
    pub email: String,
    /// The postal address of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// The phone number of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The website of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// The company the user works for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// Represents the postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Address {
    /// The street name and number
    pub street: String,
    /// The suite or apartment
    pub suite: String,
    /// The city name
    pub city: String,
    /// The postal code
    pub zipcode: String,
    /// The geographic coordinates of the address
    pub geo: Geo,
}

/// Represents geographic coordinates.
///
/// The service transmits coordinates as decimal strings, so they are kept as
/// strings here rather than parsed into floats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Geo {
    /// The latitude as a decimal string
    pub lat: String,
    /// The longitude as a decimal string
    pub lng: String,
}

/// Represents the company a user works for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    /// The name of the company
    pub name: String,
    /// The marketing catch phrase of the company
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    /// The line of business of the company
    pub bs: String,
}
