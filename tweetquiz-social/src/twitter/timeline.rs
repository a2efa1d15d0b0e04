//! Backwards pagination over an account's timeline.
//!
//! The API serves at most the newest 3200 statuses of an account, 200 at a time,
//! newest first. Each follow-up request asks for statuses strictly older than the
//! oldest one seen (`max_id = oldest - 1`). Paging stops at the first empty page
//! or once 3200 statuses are held.
use crate::twitter::types::Tweet;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Statuses requested per page (the endpoint maximum).
pub const PAGE_SIZE: u32 = 200;
/// Upper bound on statuses kept per account.
pub const MAX_TIMELINE_POSTS: usize = 3200;

/// Parameters of one `user_timeline` page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineQuery {
    pub screen_name: String,
    pub count: u32,
    pub include_rts: bool,
    /// Only statuses with an id at or below this one.
    pub max_id: Option<u64>,
}

impl TimelineQuery {
    pub fn first_page(screen_name: &str) -> Self {
        Self {
            screen_name: screen_name.to_string(),
            count: PAGE_SIZE,
            include_rts: true,
            max_id: None,
        }
    }

    /// Query for the page right below `oldest_id`, or `None` when nothing can be older.
    pub fn older_than(&self, oldest_id: u64) -> Option<Self> {
        let max_id = oldest_id.checked_sub(1)?;
        Some(Self {
            max_id: Some(max_id),
            ..self.clone()
        })
    }
}

/// Anything that can serve one page of an account's timeline, newest first.
#[async_trait]
pub trait TimelineSource: Send + Sync {
    async fn user_timeline(&self, query: &TimelineQuery) -> Result<Vec<Tweet>>;
}

/// Fetch up to [`MAX_TIMELINE_POSTS`] statuses of `account`, newest first.
///
/// Ids in the result strictly decrease. A page that repeats or jumps back over
/// already-seen ids has those statuses dropped; a page that contributes nothing
/// new ends the walk. Any error from `source` aborts the fetch.
pub async fn fetch_timeline<S>(source: &S, account: &str) -> Result<Vec<Tweet>>
where
    S: TimelineSource + ?Sized,
{
    let mut collected: Vec<Tweet> = Vec::new();
    let mut oldest: Option<u64> = None;
    let mut query = TimelineQuery::first_page(account);
    let mut page_no = 0usize;

    loop {
        page_no += 1;
        let page = source
            .user_timeline(&query)
            .await
            .with_context(|| format!("fetching page {page_no} of @{account}'s timeline"))?;

        if page.is_empty() {
            tracing::debug!(account, page = page_no, "timeline.page.empty");
            break;
        }

        let received = page.len();
        let before = collected.len();
        for tweet in page {
            if oldest.is_some_and(|seen| tweet.id >= seen) {
                continue;
            }
            oldest = Some(tweet.id);
            collected.push(tweet);
        }
        let accepted = collected.len() - before;

        if accepted < received {
            tracing::warn!(
                account,
                page = page_no,
                received,
                accepted,
                "timeline.page.out_of_order"
            );
        }

        tracing::info!(
            account,
            page = page_no,
            received,
            total = collected.len(),
            oldest_id = ?oldest,
            "timeline.page"
        );

        if accepted == 0 || collected.len() >= MAX_TIMELINE_POSTS {
            break;
        }

        // `oldest` is set once anything was accepted.
        match oldest.and_then(|id| query.older_than(id)) {
            Some(next) => query = next,
            None => break,
        }
    }

    collected.truncate(MAX_TIMELINE_POSTS);
    tracing::info!(account, fetched = collected.len(), "timeline.done");
    Ok(collected)
}
