//! Page traversal over continuation links
//!
//! # Overview
//!
//! A remote collection is exposed as a linked list of pages: each fetched
//! page carries its items plus at most one continuation link discovered in
//! response metadata. [`PageWalker`] drives the strictly sequential walk
//! over that list, concatenating every page into one ordered result and
//! stopping according to a [`TerminationPolicy`]. Actual fetching is
//! delegated to a [`PageFetcher`], which performs exactly one request per
//! call and never paginates on its own.
//!
//! Failure semantics are fail-fast: the first fetch error aborts the whole
//! walk and nothing accumulated so far is returned. A page without a
//! `next` link, or with unparseable link metadata, ends the walk cleanly.

mod link;
mod types;
mod walker;

pub use link::{next_link, REL_NEXT};
pub use types::{Page, PageFetcher, PageLink, PageLocator, TerminationPolicy};
pub use walker::PageWalker;
