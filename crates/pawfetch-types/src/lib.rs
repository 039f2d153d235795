//! Shared data model for the adoption service (dogs, search pages, identity).

use serde::{Deserialize, Serialize};

/// Opaque identity blob returned by the service at login.
///
/// The service owns this shape (name/email plus whatever fields it assigns);
/// nothing in this workspace inspects it beyond storing and handing it back.
pub type Identity = serde_json::Value;

/// A dog available for adoption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    /// URL of the dog's photo.
    pub img: String,
    pub name: String,
    pub age: u8,
    pub zip_code: String,
    pub breed: String,
}

/// One page of search results: matching dog IDs plus pagination cursors.
///
/// The `next`/`prev` cursors are opaque query strings minted by the service;
/// they are absent on the last/first page respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(rename = "resultIds")]
    pub result_ids: Vec<String>,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// The single dog the service picked from a list of candidate IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "match")]
    pub dog_id: String,
}
