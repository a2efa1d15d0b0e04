use serde::{Deserialize, Serialize};

/// One status from `statuses/user_timeline.json` requested with `tweet_mode=extended`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: u64,
    #[serde(default)]
    pub id_str: Option<String>,
    pub full_text: String,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub in_reply_to_screen_name: Option<String>,
    #[serde(default)]
    pub in_reply_to_status_id: Option<u64>,

    #[serde(default)]
    pub entities: Entities,
    #[serde(default)]
    pub extended_entities: Option<ExtendedEntities>,

    // Present only on retweets; carries the original status.
    #[serde(default)]
    pub retweeted_status: Option<Box<Tweet>>,

    #[serde(default)]
    pub user: Option<User>,
}

impl Tweet {
    pub fn has_mentions(&self) -> bool {
        !self.entities.user_mentions.is_empty()
    }

    pub fn has_urls(&self) -> bool {
        !self.entities.urls.is_empty()
    }

    /// Any attached photo, video or gif. The API only emits `entities.media` when
    /// something is attached, so the key's presence is the signal.
    pub fn has_media(&self) -> bool {
        self.entities.media.is_some()
            || self
                .extended_entities
                .as_ref()
                .is_some_and(|ext| !ext.media.is_empty())
    }

    pub fn is_repost(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// Screen name this post replies to, if it is a reply.
    pub fn reply_target(&self) -> Option<&str> {
        self.in_reply_to_screen_name.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Vec<HashTag>,
    #[serde(default)]
    pub user_mentions: Vec<MentionEntity>,
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub media: Option<Vec<Media>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtendedEntities {
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub screen_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub media_url_https: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlEntity {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub expanded_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionEntity {
    pub screen_name: String,
    #[serde(default)]
    pub id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashTag {
    pub text: String,
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_extended_status_with_media_and_reply() {
        let tw: Tweet = serde_json::from_value(json!({
            "id": 1309000000000000001u64,
            "id_str": "1309000000000000001",
            "full_text": "look at this",
            "in_reply_to_screen_name": "elonmusk",
            "in_reply_to_status_id": 1308999999999999999u64,
            "entities": {
                "hashtags": [{ "text": "rust", "indices": [0, 5] }],
                "user_mentions": [{ "screen_name": "jack", "id": 12, "indices": [0, 5] }],
                "urls": [],
                "media": [{ "id": 5, "type": "photo", "media_url_https": "https://pbs.twimg.com/x.jpg" }]
            },
            "extended_entities": { "media": [{ "id": 5, "type": "photo" }] },
            "user": { "screen_name": "kanyewest", "name": "ye" }
        }))
        .unwrap();

        assert_eq!(tw.id, 1309000000000000001);
        assert!(tw.has_media());
        assert!(tw.has_mentions());
        assert!(!tw.has_urls());
        assert!(!tw.is_repost());
        assert_eq!(tw.reply_target(), Some("elonmusk"));
    }

    #[test]
    fn missing_entity_lists_mean_empty() {
        let tw: Tweet = serde_json::from_value(json!({ "id": 7, "full_text": "bare" })).unwrap();
        assert!(!tw.has_mentions());
        assert!(!tw.has_urls());
        assert!(!tw.has_media());
        assert_eq!(tw.reply_target(), None);
    }

    #[test]
    fn retweet_carries_original_status() {
        let tw: Tweet = serde_json::from_value(json!({
            "id": 9,
            "full_text": "RT @someone: hi",
            "retweeted_status": { "id": 3, "full_text": "hi" }
        }))
        .unwrap();
        assert!(tw.is_repost());
        assert_eq!(tw.retweeted_status.unwrap().full_text, "hi");
    }
}
