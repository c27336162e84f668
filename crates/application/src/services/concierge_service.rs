//! Concierge service - the chat-based operations
//!
//! One method per operation. Each composes a prompt, makes exactly one
//! completion call through the [`ChatModel`] port and returns the
//! provider's text untouched. Nothing here caches or retries.

use std::sync::Arc;

use ai_core::ChatModel;
use domain::{GeoLocation, MenuConstraints};
use tracing::instrument;

use crate::error::ApplicationError;
use crate::images::encode_image;
use crate::prompts;

/// Service for photo, location and menu analysis
pub struct ConciergeService {
    chat: Arc<dyn ChatModel>,
}

impl ConciergeService {
    /// Create a new concierge service
    #[must_use]
    pub fn new(chat: Arc<dyn ChatModel>) -> Self {
        Self { chat }
    }

    /// Analyze an uploaded photo and return the concierge story
    #[instrument(skip(self, image_bytes), fields(image_bytes = image_bytes.len()))]
    pub async fn photo_story(&self, image_bytes: &[u8]) -> Result<String, ApplicationError> {
        let request = prompts::compose_photo_prompt(&encode_image(image_bytes));
        let story = self.chat.complete(request).await?;
        Ok(story)
    }

    /// Narrate the surroundings of the given coordinates
    #[instrument(skip(self))]
    pub async fn location_guide(&self, location: GeoLocation) -> Result<String, ApplicationError> {
        let request = prompts::compose_location_prompt(location);
        let guide_text = self.chat.complete(request).await?;
        Ok(guide_text)
    }

    /// Recommend a menu for the party, optionally informed by a photo
    #[instrument(skip(self, image_bytes))]
    pub async fn menu_plan(
        &self,
        constraints: &MenuConstraints,
        image_bytes: Option<&[u8]>,
    ) -> Result<String, ApplicationError> {
        let encoded = image_bytes.map(encode_image);
        let request = prompts::compose_menu_prompt(constraints, encoded.as_deref());
        let menu = self.chat.complete(request).await?;
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use ai_core::{ChatError, ChatRequest, MessageContent};
    use mockall::mock;
    use mockall::predicate::function;

    use super::*;

    mock! {
        Chat {}

        #[async_trait::async_trait]
        impl ChatModel for Chat {
            async fn complete(&self, request: ChatRequest) -> Result<String, ChatError>;
            fn model_name(&self) -> &str;
        }
    }

    fn service(mock: MockChat) -> ConciergeService {
        ConciergeService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn photo_story_returns_completion_text() {
        let mut chat = MockChat::new();
        chat.expect_complete()
            .times(1)
            .returning(|_| Ok("test story".to_string()));

        let story = service(chat).photo_story(b"fake image").await.expect("story");
        assert_eq!(story, "test story");
    }

    #[tokio::test]
    async fn photo_story_sends_encoded_image() {
        let mut chat = MockChat::new();
        chat.expect_complete()
            .with(function(|request: &ChatRequest| {
                let json = serde_json::to_value(request).expect("serialize");
                json["messages"][1]["content"][1]["image_url"]["url"]
                    == "data:image/jpeg;base64,QUJD"
            }))
            .times(1)
            .returning(|_| Ok("ok".to_string()));

        service(chat).photo_story(b"ABC").await.expect("story");
    }

    #[tokio::test]
    async fn location_guide_interpolates_coordinates() {
        let mut chat = MockChat::new();
        chat.expect_complete()
            .with(function(|request: &ChatRequest| {
                matches!(
                    &request.messages[1].content,
                    MessageContent::Text(text) if text.contains("48.8584") && text.contains("2.2945")
                )
            }))
            .times(1)
            .returning(|_| Ok("the Eiffel Tower is to your left".to_string()));

        let guide = service(chat)
            .location_guide(GeoLocation::new(48.8584, 2.2945))
            .await
            .expect("guide");
        assert_eq!(guide, "the Eiffel Tower is to your left");
    }

    #[tokio::test]
    async fn menu_plan_without_photo() {
        let constraints = MenuConstraints::new(4, "80 euros", "vegetarian").expect("valid");

        let mut chat = MockChat::new();
        chat.expect_complete()
            .with(function(|request: &ChatRequest| {
                matches!(&request.messages[1].content, MessageContent::Parts(parts) if parts.len() == 1)
            }))
            .times(1)
            .returning(|_| Ok("order the ratatouille".to_string()));

        let menu = service(chat).menu_plan(&constraints, None).await.expect("menu");
        assert_eq!(menu, "order the ratatouille");
    }

    #[tokio::test]
    async fn menu_plan_with_photo_adds_image_part() {
        let constraints = MenuConstraints::new(2, "cheap", "spicy").expect("valid");

        let mut chat = MockChat::new();
        chat.expect_complete()
            .with(function(|request: &ChatRequest| {
                matches!(&request.messages[1].content, MessageContent::Parts(parts) if parts.len() == 2)
            }))
            .times(1)
            .returning(|_| Ok("menu".to_string()));

        service(chat)
            .menu_plan(&constraints, Some(b"menu photo"))
            .await
            .expect("menu");
    }

    #[tokio::test]
    async fn provider_error_propagates_with_message() {
        let mut chat = MockChat::new();
        chat.expect_complete()
            .times(1)
            .returning(|_| Err(ChatError::Provider("Invalid API Key".to_string())));

        let err = service(chat)
            .photo_story(b"img")
            .await
            .expect_err("provider failure");
        assert_eq!(err.to_string(), "Provider error: Invalid API Key");
    }
}
