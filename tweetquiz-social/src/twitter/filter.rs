//! Eligibility rules for quiz material.
//!
//! A post is kept only when it stands on its own as something the account itself
//! said: no mentions, no links, no attached media, no retweets, and no replies to
//! anybody but the account itself (self-reply threads are fine).
use crate::twitter::types::Tweet;
use tweetquiz_common::normalize_handle;

/// Whether `tweet`, fetched from `account`'s timeline, is usable in the quiz.
pub fn is_eligible(tweet: &Tweet, account: &str) -> bool {
    !tweet.has_mentions()
        && !tweet.has_urls()
        && !tweet.has_media()
        && !tweet.is_repost()
        && tweet
            .reply_target()
            .is_none_or(|target| is_same_account(target, account))
}

/// Order-preserving subset of `posts` that passes [`is_eligible`].
pub fn filter_eligible<'a>(posts: &'a [Tweet], account: &str) -> Vec<&'a Tweet> {
    posts.iter().filter(|t| is_eligible(t, account)).collect()
}

/// Full text of each post, same order.
pub fn project_texts<'a, I>(posts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Tweet>,
{
    posts.into_iter().map(|t| t.full_text.clone()).collect()
}

// Screen names are case-insensitive on the platform.
fn is_same_account(target: &str, account: &str) -> bool {
    normalize_handle(target).eq_ignore_ascii_case(&normalize_handle(account))
}
