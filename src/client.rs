//! Client for the Crelate REST API.

use crate::connection::Connection;
use crate::error::{CrelateError, Result};
use crate::protocol::{
    EntityReference, Envelope, HttpRequest, HttpResponse, Method, NoteEntity, TagMap, TagsEntity,
};
use crate::tags;
use crate::transport::{ReqwestTransport, Transport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://app.crelate.com/api3";

/// Outcome of [`Client::remove_tag_on_contact`].
#[derive(Debug, Clone, PartialEq)]
pub enum TagRemoval {
    /// The contact had no bucket for the category; nothing was sent.
    CategoryAbsent,
    /// The updated tag map was written back.
    Patched { removed: usize, response: HttpResponse },
}

/// Client for the Crelate API.
///
/// Each client owns its [`Connection`]; replacing it requires `&mut self`,
/// so a key cannot change underneath a request in flight.
pub struct Client<T: Transport = ReqwestTransport> {
    connection: Connection,
    base_url: String,
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Create a client that talks to the production API over `reqwest`.
    pub fn new(connection: Connection) -> Self {
        Self::with_transport(connection, ReqwestTransport::new())
    }
}

impl<T: Transport> Client<T> {
    /// Create a client using a custom transport.
    pub fn with_transport(connection: Connection, transport: T) -> Self {
        Self {
            connection,
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Override the API root (trailing slashes are ignored).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Get the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the current connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Replace the connection, silently dropping the previous key.
    pub fn set_connection(&mut self, connection: Connection) {
        self.connection = connection;
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build and send a request. Fails before any I/O if no key is set.
    fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse> {
        let api_key = self.connection.require()?;
        let url = format!("{}{}", self.base_url, path);

        log::debug!("{} {}", method, url);

        let request = HttpRequest {
            method,
            url,
            headers: vec![
                ("X-API-KEY".to_string(), api_key.to_string()),
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        };

        let response = self.transport.send(&request)?;
        if !response.is_success() {
            log::warn!("{} {} returned status {}", request.method, request.url, response.status);
        }

        Ok(response)
    }

    fn request_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<HttpResponse> {
        let payload = serde_json::to_string(body).map_err(CrelateError::Serialize)?;
        self.request(method, path, Some(payload))
    }

    /// Retrieve all contacts carrying a tag. Returns the response's `Data`.
    pub fn retrieve_contacts_by_tag(&self, tag_name: &str) -> Result<Value> {
        let path = format!("/contacts?tag_names={}", urlencoding::encode(tag_name));
        let response = self.request(Method::Get, &path, None)?;
        into_data(parse_success(response)?)
    }

    /// Create a note on a contact. `when` is sent as `null` when omitted.
    ///
    /// Returns the full parsed response body.
    pub fn create_note_on_contact(&self, contact_id: &str, body: &str, when: Option<DateTime<Utc>>) -> Result<Value> {
        let note = Envelope {
            entity: NoteEntity {
                display: body.to_string(),
                parent_id: EntityReference::contact(contact_id),
                when,
            },
        };
        let response = self.request_json(Method::Post, "/notes", &note)?;
        parse_success(response)
    }

    /// Fetch a contact by id. Returns the response's `Data`.
    pub fn fetch_contact(&self, id: &str) -> Result<Value> {
        let path = format!("/contacts/{}", urlencoding::encode(id));
        let response = self.request(Method::Get, &path, None)?;
        into_data(parse_success(response)?)
    }

    /// Overwrite a contact's tags. Returns the raw, unparsed response.
    pub(crate) fn update_contact_tags(&self, tags: &TagMap, contact_id: &str) -> Result<HttpResponse> {
        let path = format!("/contacts/{}", urlencoding::encode(contact_id));
        let update = Envelope {
            entity: TagsEntity { tags },
        };
        self.request_json(Method::Patch, &path, &update)
    }

    /// Remove every tag titled `tag` from one category of a contact.
    ///
    /// Use [`crate::UNCATEGORIZED`] for tags without a category. When the
    /// category is absent or `null` nothing is written back. Other
    /// categories are sent back exactly as fetched.
    pub fn remove_tag_on_contact(&self, contact_id: &str, tag: &str, category_id: &str) -> Result<TagRemoval> {
        self.connection.require()?;

        let mut contact = self.fetch_contact(contact_id)?;
        let mut tags = match contact.get_mut("Tags").map(Value::take) {
            Some(Value::Object(tags)) => tags,
            _ => {
                log::info!("Contact {} has no tags", contact_id);
                return Ok(TagRemoval::CategoryAbsent);
            }
        };

        let Some(removed) = tags::remove_tag(&mut tags, category_id, tag)? else {
            log::info!("Contact {} has no tag category {}", contact_id, category_id);
            return Ok(TagRemoval::CategoryAbsent);
        };

        let response = self.update_contact_tags(&tags, contact_id)?;
        log::info!(
            "Removed {} '{}' tag(s) from contact {} (status {})",
            removed,
            tag,
            contact_id,
            response.status
        );

        Ok(TagRemoval::Patched { removed, response })
    }
}

/// Reject non-2xx responses, then parse the body.
fn parse_success(response: HttpResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(CrelateError::Api {
            status: response.status,
            body: response.body,
        });
    }
    response.json()
}

fn into_data(body: Value) -> Result<Value> {
    match body {
        Value::Object(mut map) => map.remove("Data").ok_or(CrelateError::MissingData),
        _ => Err(CrelateError::MissingData),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_data_returns_field_verbatim() {
        let data = json!([{ "Id": "1", "Nested": { "x": [1, 2] } }]);
        let body = json!({ "Data": data.clone(), "TotalCount": 1 });
        assert_eq!(into_data(body).unwrap(), data);
    }

    #[test]
    fn test_into_data_missing() {
        assert!(matches!(into_data(json!({ "Errors": [] })), Err(CrelateError::MissingData)));
        assert!(matches!(into_data(json!([1, 2])), Err(CrelateError::MissingData)));
    }

    #[test]
    fn test_parse_success_rejects_error_status() {
        let err = parse_success(HttpResponse::new(500, "boom")).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = Client::new(Connection::new("k")).with_base_url("http://localhost:9000/api3/");
        assert_eq!(client.base_url(), "http://localhost:9000/api3");
    }
}
