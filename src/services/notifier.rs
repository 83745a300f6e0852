// src/services/notifier.rs

//! Telegram delivery with suppression of repeated messages.

use async_trait::async_trait;
use teloxide::Bot;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, Recipient};
use teloxide::{ApiError, RequestError};

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::log::CRITICAL;

/// Outbound message channel.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver one text message.
    ///
    /// A rejected credential must be reported as [`AppError::Authorization`].
    async fn send(&self, text: &str) -> Result<()>;
}

/// Sends messages to a single chat through the Telegram Bot API.
pub struct TelegramSender {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramSender {
    /// Create a sender for the configured bot and chat.
    pub fn new(config: &Config) -> Self {
        Self {
            bot: Bot::new(&config.telegram_token),
            recipient: parse_recipient(&config.chat_id),
        }
    }
}

/// Numeric ids address chats directly, anything else is a channel username.
fn parse_recipient(chat_id: &str) -> Recipient {
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send(&self, text: &str) -> Result<()> {
        match self.bot.send_message(self.recipient.clone(), text).await {
            Ok(_) => Ok(()),
            Err(RequestError::Api(ApiError::InvalidToken)) => {
                Err(AppError::Authorization(ApiError::InvalidToken.to_string()))
            }
            Err(e) => Err(AppError::delivery(e)),
        }
    }
}

/// Best-effort notifier remembering the last delivered message.
pub struct Notifier<S> {
    sender: S,
    last_sent: Option<String>,
}

impl<S: MessageSender> Notifier<S> {
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            last_sent: None,
        }
    }

    /// Text of the last successfully delivered message.
    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// Send `message` unless it repeats the previous delivery.
    ///
    /// Delivery failures are logged and swallowed. Only a rejected bot
    /// token is returned, since no later attempt can succeed.
    pub async fn notify(&mut self, message: &str) -> Result<()> {
        if self.last_sent.as_deref() == Some(message) {
            log::debug!("Duplicate message suppressed: {message}");
            return Ok(());
        }

        match self.sender.send(message).await {
            Ok(()) => {
                log::debug!("Message sent: {message}");
                self.last_sent = Some(message.to_string());
                Ok(())
            }
            Err(err) if err.is_fatal() => {
                log::error!(target: CRITICAL, "{err}");
                Err(err)
            }
            Err(err) => {
                log::error!("Message not sent: {err}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::testing::RecordingSender;

    /// Sender whose bot talks to `server` instead of api.telegram.org.
    fn sender_for(server: &MockServer) -> TelegramSender {
        let api_url = url::Url::parse(&server.uri()).unwrap();
        TelegramSender {
            bot: Bot::new("123:abc").set_api_url(api_url),
            recipient: parse_recipient("100500"),
        }
    }

    async fn send_with_reply(status: u16, description: &str) -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "ok": false,
                "error_code": status,
                "description": description
            })))
            .expect(1)
            .mount(&server)
            .await;

        sender_for(&server).send("hello").await
    }

    #[tokio::test]
    async fn test_unauthorized_token_is_fatal() {
        let result = send_with_reply(401, "Unauthorized").await;
        assert!(matches!(result, Err(AppError::Authorization(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_unknown_bot_is_fatal() {
        let result = send_with_reply(404, "Not Found").await;
        assert!(matches!(result, Err(AppError::Authorization(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_missing_chat_is_delivery_error() {
        let result = send_with_reply(400, "Bad Request: chat not found").await;
        match result {
            Err(err @ AppError::Delivery(_)) => assert!(!err.is_fatal()),
            other => panic!("expected delivery error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_recipient() {
        assert_eq!(parse_recipient("100500"), Recipient::Id(ChatId(100500)));
        assert_eq!(
            parse_recipient("-1001234567890"),
            Recipient::Id(ChatId(-1001234567890))
        );
        assert_eq!(
            parse_recipient("@homework_news"),
            Recipient::ChannelUsername("@homework_news".to_string())
        );
    }

    #[tokio::test]
    async fn test_duplicate_is_sent_once() {
        let sender = RecordingSender::default();
        let mut notifier = Notifier::new(sender.clone());

        notifier.notify("hello").await.unwrap();
        notifier.notify("hello").await.unwrap();

        assert_eq!(sender.sent(), vec!["hello"]);
        assert_eq!(notifier.last_sent(), Some("hello"));
    }

    #[tokio::test]
    async fn test_distinct_messages_are_all_sent() {
        let sender = RecordingSender::default();
        let mut notifier = Notifier::new(sender.clone());

        notifier.notify("first").await.unwrap();
        notifier.notify("second").await.unwrap();
        notifier.notify("first").await.unwrap();

        assert_eq!(sender.sent(), vec!["first", "second", "first"]);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_swallowed() {
        let sender = RecordingSender::default();
        sender.fail_next(AppError::delivery("network down"));
        let mut notifier = Notifier::new(sender.clone());

        assert!(notifier.notify("hello").await.is_ok());
        assert_eq!(notifier.last_sent(), None);

        // The failed message was never delivered, so a retry goes out.
        notifier.notify("hello").await.unwrap();
        assert_eq!(sender.sent(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_authorization_failure_is_returned() {
        let sender = RecordingSender::default();
        sender.fail_next(AppError::Authorization("Unauthorized".into()));
        let mut notifier = Notifier::new(sender.clone());

        let err = notifier.notify("hello").await.unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
        assert!(sender.sent().is_empty());
    }
}
