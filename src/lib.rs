//! # meeting-roster
//!
//! A typed Rust client for REST APIs that expose meeting participants as a
//! `Link`-header paginated collection.
//!
//! The interesting part lives in [`pagination`]: a [`PageWalker`] that
//! transparently follows RFC 5988 `rel="next"` continuation links,
//! concatenating every page into one ordered result, with either an
//! unbounded walk or an "at least N items" cutoff. Everything else is a
//! thin HTTP wrapper around it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meeting_roster::{Client, ListParticipantsQuery, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::builder()
//!         .base_url("https://meetings.example.com/v1")
//!         .bearer_token("token")
//!         .build()?;
//!
//!     // Walk every page of the collection.
//!     let query = ListParticipantsQuery::new("meeting-42").paginate(true);
//!     let participants = client.participants().list(&query).await?;
//!
//!     for p in participants {
//!         println!("{} ({})", p.display_name, p.email);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Request authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Page traversal over continuation links
pub mod pagination;

/// Meeting participant resources
pub mod participants;

mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::AuthConfig;
pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use pagination::{Page, PageFetcher, PageLink, PageLocator, PageWalker, TerminationPolicy};
pub use participants::{
    BreakoutSessionAttended, ListParticipantsQuery, Participant, ParticipantDevice,
    ParticipantsService,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
