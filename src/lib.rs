//! Crelate: a minimal blocking client for the Crelate CRM REST API.
//!
//! Fetch contacts, create notes and remove tags using an API key.
//!
//! # Example
//!
//! ```no_run
//! use crelate::{Client, Connection, UNCATEGORIZED};
//!
//! let client = Client::new(Connection::new("YOUR_CRELATE_API_KEY"));
//!
//! // Contacts carrying a tag
//! let contacts = client.retrieve_contacts_by_tag("Prospect").unwrap();
//! println!("{}", contacts);
//!
//! // Leave a note on one of them
//! client.create_note_on_contact("contact-id", "Called, left voicemail", None).unwrap();
//!
//! // Drop an uncategorized tag
//! client.remove_tag_on_contact("contact-id", "Prospect", UNCATEGORIZED).unwrap();
//! ```

mod tags;

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod protocol;
pub mod transport;

// Re-export public API
pub use client::{Client, DEFAULT_BASE_URL, TagRemoval};
pub use config::{Config, Overrides};
pub use connection::Connection;
pub use error::CrelateError;
pub use protocol::{EntityReference, HttpRequest, HttpResponse, Method, TagMap, UNCATEGORIZED};
pub use transport::{ReqwestTransport, Transport};
