//! The sequential page walk

use super::types::{PageFetcher, PageLocator, TerminationPolicy};
use crate::error::Result;
use tracing::debug;

/// Drives a strictly sequential traversal of a paginated collection
///
/// Each page's continuation link is only known after decoding that page,
/// so pages are fetched one at a time; the walk is one synchronous call
/// chain with a single continuation decision per page. Concurrent walks
/// are safe because every call owns its own accumulator.
#[derive(Debug)]
pub struct PageWalker<F> {
    fetcher: F,
}

impl<F: PageFetcher> PageWalker<F> {
    /// Create a walker over the given fetcher
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// The underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the page at `start` and every continuation page the policy
    /// asks for, returning all items in page order.
    ///
    /// The policy is evaluated after each successful fetch, so a bounded
    /// walk always includes the first page whole even when the cap is
    /// smaller than its item count. Any fetch error aborts the walk and
    /// discards what was accumulated.
    pub async fn fetch_all(
        &self,
        start: PageLocator,
        policy: TerminationPolicy,
    ) -> Result<Vec<F::Item>> {
        let first = self.fetcher.fetch(&start).await?;
        let mut items = first.items;
        let mut next = first.next;
        let mut pages = 1usize;

        loop {
            if policy.is_satisfied(items.len()) {
                break;
            }
            let Some(link) = next.take() else {
                break;
            };

            let page = self.fetcher.fetch(&PageLocator::Link(link)).await?;
            items.extend(page.items);
            next = page.next;
            pages += 1;
        }

        debug!("Walked {} page(s), {} item(s)", pages, items.len());
        Ok(items)
    }
}
