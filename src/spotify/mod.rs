//! # Spotify Integration Module
//!
//! This module is the integration layer between spotq and the Spotify Web
//! API. It covers the token endpoint of the OAuth 2.0 authorization-code
//! flow and the two read-only resources spotq queries.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (prompt loop, one-shot commands)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization URL, code exchange, refresh)
//!     ├── Top Items (GET /me/top/{type})
//!     ├── Search (GET /search)
//!     └── Normalization (raw JSON -> flat records)
//!          ↓
//! HTTP Layer (reqwest blocking, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Token Handling
//!
//! Resource calls never deal with tokens themselves. They ask the
//! [`crate::management::TokenManager`] they are handed for a valid bearer
//! token, which restores, authorizes or refreshes as required. A refresh is
//! therefore invisible to callers of [`top`] and [`search`].
//!
//! ## Error Handling
//!
//! - Non-2xx answers from resource endpoints degrade to an empty result.
//! - Non-2xx answers from the authorization page or the token endpoint are
//!   validation errors with a readable message.
//! - Transport and JSON failures propagate as [`crate::Error::Http`] and
//!   [`crate::Error::Json`].
//!
//! ## API Coverage
//!
//! - `GET /authorize` - Authorization page (checked, then opened in the browser)
//! - `POST /api/token` - Code exchange and token refresh
//! - `GET /me/top/{tracks|artists}` - Personalized top items
//! - `GET /search` - Catalog search

pub mod auth;
pub mod normalize;
pub mod search;
pub mod top;
