//! # CLI Module
//!
//! This module provides the command-line interface layer for the album shelf,
//! a client for cataloguing Spotify albums into a personal collection. It
//! implements all user-facing commands and coordinates between the catalog
//! client, the collection store and the management layer.
//!
//! ## Overview
//!
//! The CLI is the terminal rendition of a three-surface application:
//!
//! - **Search**: find albums in the Spotify catalog and toggle them in and
//!   out of the collection
//! - **Collection**: browse the shelved albums with text and rating filters
//! - **Detail**: inspect one album, rate it, or remove it
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Requests an app-only token via the client-credentials grant
//!   and caches it for the other commands
//!
//! ### Search Operations
//!
//! - [`search`] - One-shot catalog search, or an interactive session where
//!   every submitted line re-queries through the debounced controller and
//!   `+N` toggles result N in or out of the collection
//!
//! ### Collection Operations
//!
//! - [`list`] - Prints the collection filtered by free text and a minimum
//!   rating; albums without cover art stay out of the rendered grid
//!
//! ### Detail Operations
//!
//! - [`show`] - Full record display with live track data from the catalog
//! - [`rate`] - Validates and stores a 1-5 rating
//! - [`remove`] - Deletes a record after an explicit confirmation
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Search/Browse/Detail State)
//!     ↓
//! API Layer (Catalog + Collection Store)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Commands render outcomes; every decision (debounce windows, duplicate
//! checks, validation) lives in the management layer so it can be tested
//! without a terminal.
//!
//! ## Error Handling Philosophy
//!
//! - **Graceful Degradation**: A failed collection fetch or track lookup
//!   degrades to an empty display instead of aborting the command
//! - **Helpful Messages**: Failures tell the user what to do next, usually
//!   to run `shelfcli auth`
//! - **No Retries**: A failed request is reported once; the user decides
//!   whether to try again
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! shelfcli auth                    # Request and cache a catalog token
//! shelfcli search                  # Interactive search session
//! ```
//!
//! ### Regular Usage
//! ```bash
//! shelfcli search "thriller"       # One-shot catalog search
//! shelfcli list --min-rating 4     # Highly rated shelf entries
//! shelfcli show 17 --open          # Inspect one album, open it on Spotify
//! shelfcli rate 17 5               # Update a rating
//! shelfcli remove 17               # Delete after confirmation
//! ```

mod auth;
mod detail;
mod list;
mod search;

pub use auth::auth;
pub use detail::rate;
pub use detail::remove;
pub use detail::show;
pub use list::list;
pub use search::search;
