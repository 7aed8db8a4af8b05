//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the album
//! shelf: token acquisition, catalog search and track listings. It is the only
//! place in the application that talks to Spotify, handling HTTP communication,
//! authentication headers and response decoding for the higher-level logic.
//!
//! ## Overview
//!
//! The shelf only reads public catalog data, so the integration surface is
//! deliberately small: one grant to obtain a token and two read endpoints.
//! Everything user-specific (the collection itself) lives in the collection
//! store behind [`crate::shelf`], not in Spotify.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Catalog Search (albums by free-text query)
//!     └── Track Listings (tracks of one album)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **Basic Authorization**: Sends `base64(client_id:client_secret)` to the
//!   token endpoint
//! - **App-Only Tokens**: The resulting token carries no user identity and
//!   only reaches public catalog data
//! - **No Refresh**: Client-credentials tokens cannot be refreshed; when one
//!   expires a new grant is requested by re-running the auth command
//!
//! ### Search Module
//!
//! [`search`] - Free-text album search:
//! - **Album Scope**: Queries are restricted to `type=album` results
//! - **Query Encoding**: User input is percent-encoded through the HTTP
//!   client's query API, never by string concatenation
//! - **Envelope Tolerance**: A response without an `albums` payload decodes
//!   to an empty result list instead of an error
//!
//! ### Tracks Module
//!
//! [`tracks`] - Track listings for a single album:
//! - **Detail Enrichment**: Used to show live track data for a shelved album
//!   without persisting tracks in the collection store
//! - **Empty Tolerance**: A missing or empty `items` payload decodes to an
//!   empty track list
//!
//! ## Authentication Strategy
//!
//! The client-credentials grant fits this application because no user data is
//! requested from Spotify:
//!
//! 1. **Credential Lookup**: Client id and secret come from the environment
//! 2. **Token Request**: `POST` to the token endpoint with
//!    `grant_type=client_credentials` and a Basic authorization header
//! 3. **Token Storage**: The CLI persists the token with its lifetime so
//!    subsequent commands can reuse it until it expires
//!
//! ## Error Handling Philosophy
//!
//! Every function returns `Result` and converts non-success HTTP statuses
//! into errors at this boundary. There is no retry logic: a failed search or
//! track fetch is reported to the caller, which degrades to an empty display
//! instead of tearing the session down.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token grant
//! - `GET /search?q={query}&type=album` - Album search
//! - `GET /albums/{id}/tracks` - Track listing for one album
//!
//! ## Usage Patterns
//!
//! ```rust
//! use shelfcli::spotify::{self, CatalogClient};
//!
//! // Obtain a token (credentials from the environment)
//! let response = spotify::auth::request_token().await?;
//!
//! // Search the catalog
//! let catalog = CatalogClient::new();
//! let albums = catalog.search_albums("thriller", &response.access_token).await?;
//!
//! // List the tracks of one result
//! let tracks = catalog.album_tracks(&albums[0].id, &response.access_token).await?;
//! ```
//!
//! ## Thread Safety
//!
//! All operations are async and the client is cheap to clone; shared state is
//! not held here. Concurrency discipline (such as at most one in-flight
//! search) is the responsibility of the management layer.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde** / **serde_json** - Response deserialization
//! - **base64** - Basic authorization header for the token grant

use reqwest::Client;

use crate::config;

pub mod auth;
pub mod search;
pub mod tracks;

/// HTTP client for the public Spotify catalog endpoints.
///
/// Holds the API base URL so tests can point it at a local server; the
/// default constructor reads the configured endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(config::spotify_apiurl())
    }

    pub fn with_base_url(base_url: String) -> Self {
        CatalogClient {
            client: Client::new(),
            base_url,
        }
    }
}
