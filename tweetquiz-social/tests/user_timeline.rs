use serde_json::json;
use tweetquiz_social::twitter::{OAuthCredentials, TwitterApi, harvest_account};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMELINE: &str = "/1.1/statuses/user_timeline.json";

fn credentials() -> OAuthCredentials {
    OAuthCredentials {
        consumer_key: "ck".into(),
        consumer_secret: "cs".into(),
        access_token: "at".into(),
        access_secret: "as".into(),
    }
}

fn status(id: u64, text: &str, extra: serde_json::Value) -> serde_json::Value {
    let mut v = json!({
        "id": id,
        "id_str": id.to_string(),
        "full_text": text,
        "in_reply_to_screen_name": null,
        "entities": { "hashtags": [], "symbols": [], "user_mentions": [], "urls": [] },
        "user": { "screen_name": "kanyewest" }
    });
    for (k, val) in extra.as_object().unwrap() {
        v[k] = val.clone();
    }
    v
}

#[tokio::test]
async fn harvests_a_signed_paginated_timeline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TIMELINE))
        .and(query_param("screen_name", "kanyewest"))
        .and(query_param("count", "200"))
        .and(query_param("include_rts", "true"))
        .and(query_param("tweet_mode", "extended"))
        .and(query_param_is_missing("max_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            status(30, "I love pizza", json!({})),
            status(20, "RT @x: hi", json!({ "retweeted_status": { "id": 1, "full_text": "hi" } })),
            status(10, "continuing my thought", json!({ "in_reply_to_screen_name": "kanyewest" })),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(TIMELINE))
        .and(query_param("max_id", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = TwitterApi::with_base_url(&server.uri(), credentials()).unwrap();
    let harvest = harvest_account(&api, "kanyewest").await.unwrap();

    assert_eq!(harvest.fetched, 3);
    assert_eq!(harvest.texts, vec!["I love pizza", "continuing my thought"]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for req in &requests {
        let auth = req.headers.get("authorization").unwrap().to_str().unwrap();
        assert!(auth.starts_with("OAuth oauth_consumer_key=\"ck\", "));
        assert!(auth.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(auth.contains("oauth_token=\"at\""));
    }
}

#[tokio::test]
async fn bad_credentials_are_fatal_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMELINE))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "code": 32, "message": "Could not authenticate you." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TwitterApi::with_base_url(&server.uri(), credentials()).unwrap();
    let err = harvest_account(&api, "elonmusk").await.unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("@elonmusk"));
    assert!(chain.contains("Could not authenticate you."));
}
