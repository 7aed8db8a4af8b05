//! # Collection Store Module
//!
//! REST client for the external service that persists the personal album
//! collection. The store exposes a single `/albums` resource with the usual
//! CRUD verbs; records are identified by a store-assigned `id` that is
//! unrelated to the Spotify catalog id carried in each record's `spotifyId`
//! field.
//!
//! The store is schema-less and enforces nothing: uniqueness of `spotifyId`,
//! the 1-5 rating range and every other invariant are maintained by the
//! management layer before a request is made. This module only moves JSON.
//!
//! ## API Coverage
//!
//! - `GET /albums` - Full collection, no pagination
//! - `GET /albums/{id}` - One record
//! - `POST /albums` - Create a record from a catalog result
//! - `PUT /albums/{id}` - Partial update (only the rating is ever written)
//! - `DELETE /albums/{id}` - Remove a record
//!
//! All functions convert non-success HTTP statuses into errors and perform
//! no retries, mirroring the catalog client's error policy.

use reqwest::Client;

use crate::config;

pub mod albums;

/// HTTP client for the collection store.
///
/// Holds the store base URL so tests can point it at a local server; the
/// default constructor reads the configured endpoint.
#[derive(Debug, Clone)]
pub struct ShelfClient {
    client: Client,
    base_url: String,
}

impl ShelfClient {
    pub fn new() -> Self {
        Self::with_base_url(config::shelf_apiurl())
    }

    pub fn with_base_url(base_url: String) -> Self {
        ShelfClient {
            client: Client::new(),
            base_url,
        }
    }
}
