//! Wire types for the Crelate REST API.

use crate::error::{CrelateError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag category id meaning "uncategorized".
pub const UNCATEGORIZED: &str = "00000000-0000-0000-0000-000000000000";

/// Entity name used when a note's parent is a contact.
pub const CONTACTS_ENTITY: &str = "Contacts";

/// Tags on a contact, bucketed by tag-category id.
///
/// Buckets are kept as raw JSON so categories this client does not touch
/// are written back exactly as received, in the order the API sent them.
pub type TagMap = Map<String, Value>;

/// Reference from one record to another, e.g. a note's parent contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityReference {
    pub id: String,
    pub title: Option<String>,
    pub entity_name: String,
}

impl EntityReference {
    /// Reference to a contact by id.
    pub fn contact(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            entity_name: CONTACTS_ENTITY.to_string(),
        }
    }
}

/// Body of a note to create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NoteEntity {
    pub display: String,
    pub parent_id: EntityReference,
    /// Serialized as `null` when absent.
    pub when: Option<DateTime<Utc>>,
}

/// Partial contact update carrying only the tag map.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagsEntity<'a> {
    pub tags: &'a TagMap,
}

/// The `{"entity": ...}` wrapper every write endpoint expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub entity: T,
}

/// HTTP methods used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body as JSON, if there is one.
    pub fn json_body(&self) -> Option<Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Raw HTTP response. Non-2xx statuses are not errors at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body).map_err(|source| CrelateError::Parse {
            context: "response body",
            source,
        })
    }
}
