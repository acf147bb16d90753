use crate::domain::entities::quote::Quote;
use crate::domain::error::RemoteError;
use crate::domain::ports::remote_source::RemoteSource;
use async_trait::async_trait;
use std::time::Duration;

/// Remote source backed by a JSONPlaceholder-style `/posts` endpoint.
/// Each post title becomes a quote; all fetched quotes share one category.
pub struct PlaceholderSource {
    base_url: String,
    /// Maximum number of posts taken per fetch
    limit: usize,
    /// Category assigned to fetched quotes
    category: String,
    client: reqwest::Client,
}

impl PlaceholderSource {
    pub fn new(base_url: String, limit: usize, category: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            limit,
            category,
            client: reqwest::Client::builder()
                .user_agent("quotesync/0.1")
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn to_quote(&self, post: Post) -> Quote {
        Quote {
            text: post.title.unwrap_or_default(),
            category: self.category.clone(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct Post {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct NewPost<'a> {
    title: &'a str,
    body: &'a str,
    user_id: u32,
}

#[async_trait]
impl RemoteSource for PlaceholderSource {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn fetch(&self) -> Result<Vec<Quote>, RemoteError> {
        let resp = self
            .client
            .get(self.posts_url())
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(RemoteError::Status(resp.status().as_u16()));
        }

        let posts: Vec<Post> = resp
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        let quotes: Vec<Quote> = posts
            .into_iter()
            .take(self.limit)
            .map(|p| self.to_quote(p))
            .collect();
        tracing::debug!(source = self.name(), count = quotes.len(), "fetched remote quotes");
        Ok(quotes)
    }

    async fn publish(&self, quote: &Quote) -> Result<(), RemoteError> {
        let resp = self
            .client
            .post(self.posts_url())
            .json(&NewPost {
                title: &quote.text,
                body: &quote.category,
                user_id: 1,
            })
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(RemoteError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let src = PlaceholderSource::new("https://example.test/".into(), 5, "Remote".into());
        assert_eq!(src.posts_url(), "https://example.test/posts");
        assert_eq!(src.name(), "placeholder");
    }

    #[test]
    fn test_post_maps_to_quote() {
        let src = PlaceholderSource::new("https://example.test".into(), 5, "Server".into());
        let posts: Vec<Post> =
            serde_json::from_str(r#"[{"userId":1,"id":1,"title":"sunt aut","body":"x"},{"id":2}]"#)
                .unwrap();
        let quotes: Vec<Quote> = posts.into_iter().map(|p| src.to_quote(p)).collect();
        assert_eq!(quotes[0], Quote::new("sunt aut", "Server").unwrap());
        // Missing titles become blank text and are dropped later by the merge.
        assert!(!quotes[1].is_well_formed());
    }

    #[test]
    fn test_new_post_body_shape() {
        let body = serde_json::to_value(NewPost {
            title: "t",
            body: "c",
            user_id: 1,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"title": "t", "body": "c", "userId": 1}));
    }
}
