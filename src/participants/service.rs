//! Participant listing and lookup
//!
//! `list` is the pagination entry point: it issues the first fetch itself
//! and hands continuation to the page walker. The termination mode comes
//! from the query: `paginate` walks everything, otherwise `max` acts as an
//! "at least this many" cutoff evaluated at page boundaries.

use super::types::{Participant, ParticipantPage};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{
    next_link, Page, PageFetcher, PageLocator, PageWalker, TerminationPolicy, REL_NEXT,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

const PARTICIPANTS_PATH: &str = "/meetingParticipants";

/// Query for listing the participants of a meeting
#[derive(Debug, Clone, Default)]
pub struct ListParticipantsQuery {
    /// Meeting to list participants for
    pub meeting_id: String,
    /// Page-size hint, and the bounded-mode cutoff; 0 leaves it to the
    /// server and fetches a single page
    pub max: usize,
    /// Only include participants who joined at or after this time
    pub join_time_from: Option<DateTime<Utc>>,
    /// Walk every page regardless of `max`
    pub paginate: bool,
}

impl ListParticipantsQuery {
    /// Create a query for the given meeting
    pub fn new(meeting_id: impl Into<String>) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            ..Self::default()
        }
    }

    /// Set the page-size hint and bounded-mode cutoff
    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    /// Only include participants who joined at or after `from`
    #[must_use]
    pub fn join_time_from(mut self, from: DateTime<Utc>) -> Self {
        self.join_time_from = Some(from);
        self
    }

    /// Select between walking every page (`true`) and the bounded cutoff
    #[must_use]
    pub fn paginate(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    /// Encoded query parameters for the first page fetch
    pub(crate) fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("meetingId".to_string(), self.meeting_id.clone())];
        if self.max > 0 {
            params.push(("max".to_string(), self.max.to_string()));
        }
        if let Some(from) = self.join_time_from {
            params.push(("joinTimeFrom".to_string(), from.to_rfc3339()));
        }
        params
    }

    /// Locator of the first page
    pub(crate) fn locator(&self) -> PageLocator {
        PageLocator::query(PARTICIPANTS_PATH, self.query_params())
    }

    /// Termination policy this query selects
    pub(crate) fn termination(&self) -> TerminationPolicy {
        if self.paginate {
            TerminationPolicy::Unbounded
        } else {
            TerminationPolicy::BoundedAtLeast(self.max)
        }
    }
}

/// HTTP-backed page fetcher for the participants collection
///
/// One GET per call; the continuation link comes from the `Link` response
/// header and a body without an `items` field decodes as an empty page.
struct ParticipantPageFetcher<'a> {
    http: &'a HttpClient,
}

#[async_trait]
impl PageFetcher for ParticipantPageFetcher<'_> {
    type Item = Participant;

    async fn fetch(&self, locator: &PageLocator) -> Result<Page<Participant>> {
        let response = match locator {
            PageLocator::Query { path, params } => {
                let config = RequestConfig {
                    query: params.clone(),
                    ..RequestConfig::default()
                };
                self.http.get_with_config(path, config).await?
            }
            PageLocator::Link(link) => self.http.get(link.as_str()).await?,
        };

        let next = next_link(response.headers(), REL_NEXT);
        let text = response.text().await.map_err(Error::Http)?;
        let body: ParticipantPage = serde_json::from_str(&text)?;
        Ok(Page::new(body.items, next))
    }
}

/// Access to the meeting participants resource
#[derive(Debug, Clone, Copy)]
pub struct ParticipantsService<'a> {
    http: &'a HttpClient,
}

impl<'a> ParticipantsService<'a> {
    /// Create a service view over the given transport
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List participants of a meeting, following continuation links
    ///
    /// Returns either the complete result for the query's termination mode
    /// or the first fetch error; a failed continuation fetch discards all
    /// pages accumulated before it.
    pub async fn list(&self, query: &ListParticipantsQuery) -> Result<Vec<Participant>> {
        let walker = PageWalker::new(ParticipantPageFetcher { http: self.http });
        walker.fetch_all(query.locator(), query.termination()).await
    }

    /// Fetch a single participant by id
    pub async fn get(&self, participant_id: &str) -> Result<Participant> {
        self.http
            .get_json(&format!("{PARTICIPANTS_PATH}/{participant_id}"))
            .await
    }

    /// Admit a participant waiting in the lobby
    pub async fn admit(&self, participant_id: &str) -> Result<()> {
        self.http
            .post(&format!("{PARTICIPANTS_PATH}/{participant_id}/admit"))
            .await?;
        Ok(())
    }
}
