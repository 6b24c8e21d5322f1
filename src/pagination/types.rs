//! Pagination types and the fetcher trait

use crate::error::Result;
use async_trait::async_trait;

/// Opaque locator for the next page of a collection
///
/// Wraps the URL taken from a page's continuation metadata. The walker
/// never interprets it beyond handing it back to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink(String);

impl PageLink {
    /// Create a link from a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The link as a URL string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One fetched slice of a remote collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in this page, in server order
    pub items: Vec<T>,
    /// Continuation link, if the collection has more pages
    pub next: Option<PageLink>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next: Option<PageLink>) -> Self {
        Self { items, next }
    }

    /// A terminal page with no items and no continuation
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next: None,
        }
    }
}

/// Where to fetch a page from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLocator {
    /// Resource path plus encoded query parameters, for the first request
    Query {
        /// Resource path relative to the API base URL
        path: String,
        /// Query parameters, in insertion order
        params: Vec<(String, String)>,
    },
    /// Continuation link taken from a previously fetched page
    Link(PageLink),
}

impl PageLocator {
    /// Create a query locator
    pub fn query(path: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self::Query {
            path: path.into(),
            params,
        }
    }
}

/// When to stop following continuation links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationPolicy {
    /// Follow links until the collection is exhausted
    Unbounded,
    /// Stop at the first page boundary at or past `n` accumulated items
    ///
    /// Pages are appended whole, so the result may exceed `n` by up to one
    /// page; it is never trimmed back to exactly `n`. A cap of zero stops
    /// after the first page.
    BoundedAtLeast(usize),
}

impl TerminationPolicy {
    /// Check whether `fetched` accumulated items satisfy this policy
    pub fn is_satisfied(self, fetched: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::BoundedAtLeast(n) => fetched >= n,
        }
    }
}

/// A collaborator that fetches and decodes a single page
///
/// Implementations perform one network round trip per call and must report
/// transport failures and non-success statuses as errors, never as empty
/// pages. Continuation is the walker's sole responsibility; fetchers do
/// not retry and do not follow links themselves.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// The decoded record type; the walker treats it as opaque
    type Item: Send;

    /// Fetch the page at the given locator
    async fn fetch(&self, locator: &PageLocator) -> Result<Page<Self::Item>>;
}
