//! Fetch → filter → project for one account.
use crate::twitter::filter::{filter_eligible, project_texts};
use crate::twitter::timeline::{TimelineSource, fetch_timeline};
use anyhow::Result;

/// What one account contributed to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHarvest {
    pub account: String,
    /// Statuses pulled from the timeline before filtering.
    pub fetched: usize,
    /// Texts of the eligible statuses, newest first.
    pub texts: Vec<String>,
}

impl AccountHarvest {
    pub fn eligible(&self) -> usize {
        self.texts.len()
    }
}

pub async fn harvest_account<S>(source: &S, account: &str) -> Result<AccountHarvest>
where
    S: TimelineSource + ?Sized,
{
    let posts = fetch_timeline(source, account).await?;
    let texts = project_texts(filter_eligible(&posts, account));

    tracing::info!(
        account,
        fetched = posts.len(),
        eligible = texts.len(),
        "harvest.done"
    );

    Ok(AccountHarvest {
        account: account.to_string(),
        fetched: posts.len(),
        texts,
    })
}
