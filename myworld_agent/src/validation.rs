//! Supportive-comment generation for freshly composed reflections.
//!
//! [`ValidationGenerator::generate`] never fails: every error coming out of
//! the [`CommentSource`] is logged and replaced by [`fallback_comments`].

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;

use crate::config::GeneratorConfig;
use crate::llm_client::GeminiClient;
use crate::models::ValidationComment;

/// Anything that can produce comments for a post, fallibly.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_comments(&self, post_content: &str) -> Result<Vec<ValidationComment>>;
}

pub fn build_prompt(post_content: &str) -> String {
    format!(
        "Generate 3-5 high-quality, supportive, and realistic social media comments for the \
         following personal post: \"{post_content}\". The comments should sound like they are \
         coming from close friends or supportive community members. Keep them reflective and \
         personal."
    )
}

/// Array of `{authorName, content}` objects, both fields required strings.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "authorName": { "type": "STRING" },
                "content": { "type": "STRING" }
            },
            "required": ["authorName", "content"]
        }
    })
}

pub fn fallback_comments() -> Vec<ValidationComment> {
    vec![
        ValidationComment::new(
            "Kind Soul",
            "This is so beautifully expressed. Thank you for sharing.",
        ),
        ValidationComment::new("Old Friend", "I'm always here for you. You've got this!"),
    ]
}

/// Parses the service's JSON text, keeping the service's order.
pub fn parse_comments(raw: &str) -> Result<Vec<ValidationComment>> {
    let comments: Vec<ValidationComment> =
        serde_json::from_str(raw.trim()).context("Response is not a comment array")?;

    if comments.is_empty() {
        anyhow::bail!("Response contained no comments");
    }
    if let Some(blank) = comments
        .iter()
        .position(|c| c.author_name.trim().is_empty() || c.content.trim().is_empty())
    {
        anyhow::bail!("Comment {} has a blank author or content", blank);
    }
    Ok(comments)
}

#[async_trait]
impl CommentSource for GeminiClient {
    async fn fetch_comments(&self, post_content: &str) -> Result<Vec<ValidationComment>> {
        let raw = self
            .generate_json(&build_prompt(post_content), response_schema())
            .await?;
        parse_comments(&raw)
    }
}

#[derive(Clone)]
pub struct ValidationGenerator {
    source: Arc<dyn CommentSource>,
}

impl ValidationGenerator {
    pub fn new(source: Arc<dyn CommentSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(Arc::new(GeminiClient::from_config(config)))
    }

    pub async fn generate(&self, post_content: &str) -> Vec<ValidationComment> {
        match self.source.fetch_comments(post_content).await {
            Ok(comments) => {
                tracing::debug!("Generated {} validation comments", comments.len());
                comments
            }
            Err(err) => {
                tracing::error!("Error generating validation: {:#}", err);
                fallback_comments()
            }
        }
    }
}
