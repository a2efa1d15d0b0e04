//! Thin wrapper around the v1.1 `user_timeline` endpoint.
//!
//! Handles OAuth 1.0a signing and request parameter shaping before delegating to
//! the shared HTTP client. Requests are never retried.
use crate::twitter::oauth::{OAuthCredentials, authorization_header};
use crate::twitter::timeline::{TimelineQuery, TimelineSource};
use crate::twitter::types::Tweet;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::borrow::Cow;
use std::time::Duration;
use tweetquiz_http::{Auth, HttpClient, RequestOpts};

pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";
const USER_TIMELINE_PATH: &str = "1.1/statuses/user_timeline.json";

#[derive(Clone, Debug)]
pub struct TwitterApi {
    http: HttpClient,
    credentials: OAuthCredentials,
}

impl TwitterApi {
    pub fn new(credentials: OAuthCredentials) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE, credentials)
    }

    /// Point the client at another host (a proxy or a mock server).
    pub fn with_base_url(base: &str, credentials: OAuthCredentials) -> Result<Self> {
        let http = HttpClient::new(base).with_context(|| format!("invalid API base {base}"))?;
        Ok(Self { http, credentials })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    pub async fn fetch_user_timeline(&self, query: &TimelineQuery) -> Result<Vec<Tweet>> {
        let count = query.count.to_string();
        let max_id = query.max_id.map(|id| id.to_string());

        let mut params: Vec<(&str, Cow<'_, str>)> = vec![
            ("screen_name", query.screen_name.as_str().into()),
            ("count", count.as_str().into()),
            ("include_rts", if query.include_rts { "true" } else { "false" }.into()),
            ("tweet_mode", "extended".into()),
        ];
        if let Some(max_id) = &max_id {
            params.push(("max_id", max_id.as_str().into()));
        }

        let url = self.http.endpoint(USER_TIMELINE_PATH)?;
        let signed_params: Vec<(&str, &str)> =
            params.iter().map(|(k, v)| (*k, v.as_ref())).collect();
        let header = authorization_header(&self.credentials, "GET", &url, &signed_params)?;
        let value = HeaderValue::from_str(&header).context("OAuth header is not a valid header")?;

        let page: Vec<Tweet> = self
            .http
            .get_json(
                USER_TIMELINE_PATH,
                RequestOpts {
                    auth: Some(Auth::Header {
                        name: AUTHORIZATION,
                        value,
                    }),
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await?;

        tracing::debug!(
            account = %query.screen_name,
            max_id = ?query.max_id,
            received = page.len(),
            "twitter.user_timeline"
        );
        Ok(page)
    }
}

#[async_trait]
impl TimelineSource for TwitterApi {
    async fn user_timeline(&self, query: &TimelineQuery) -> Result<Vec<Tweet>> {
        self.fetch_user_timeline(query).await
    }
}
