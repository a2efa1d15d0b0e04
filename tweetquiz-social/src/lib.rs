//! Social network clients and the retrieval pipeline used by tweetquiz.
//!
//! Only the Twitter/X pipeline exists: page through an account's timeline, keep the
//! self-contained text posts, and hand their bodies to the quiz.
pub mod twitter;
