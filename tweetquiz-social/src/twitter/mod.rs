//! Twitter/X API integration surface used by the game.
//!
//! `client` signs and sends `user_timeline` requests, `timeline` walks the history
//! page by page, `filter` decides which posts are quiz material, and `pipeline`
//! chains the three for one account.
pub mod client;
pub mod filter;
pub mod oauth;
pub mod pipeline;
pub mod timeline;
pub mod types;

pub use client::TwitterApi;
pub use oauth::OAuthCredentials;
pub use pipeline::{AccountHarvest, harvest_account};
pub use timeline::{TimelineQuery, TimelineSource, fetch_timeline};
pub use types::Tweet;
