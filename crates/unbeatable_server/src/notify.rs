//! Outbound game notifications.
//!
//! Notifications are best-effort: they run as detached tasks and the game
//! never waits for, or looks at, their result.

use crate::config::ServerConfig;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// A game event worth telling the operator about.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Notification {
    /// The human won and received a promo code.
    #[display("Victory! Promo code issued: {}", promo_code)]
    Victory {
        /// The issued promo code.
        promo_code: String,
    },
    /// The computer won.
    #[display("Loss")]
    Loss,
}

/// Sends notification text somewhere.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text`, returning whether delivery succeeded.
    async fn send(&self, text: &str) -> bool;
}

/// Posts messages to a chat through the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    bot_token: Option<String>,
    chat_id: Option<String>,
    timeout: Duration,
}

impl TelegramNotifier {
    /// Creates a notifier. Without both a token and a chat ID, messages are
    /// only logged.
    pub fn new(
        api_base: impl Into<String>,
        bot_token: Option<String>,
        chat_id: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            bot_token,
            chat_id,
            timeout,
        }
    }

    /// Creates a notifier from server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.telegram_api_base().clone(),
            config.telegram_bot_token().clone(),
            config.telegram_chat_id().clone(),
            config.notify_timeout(),
        )
    }

    /// Checks if both the token and the chat ID are set.
    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }

    /// Posts `text` to the chat.
    ///
    /// Errors carry no URL: the bot token is part of the request path.
    async fn post_message(
        &self,
        token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<reqwest::StatusCode, reqwest::Error> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        self.client
            .post(&url)
            .timeout(self.timeout)
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map(|response| response.status())
            .map_err(reqwest::Error::without_url)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip(self))]
    async fn send(&self, text: &str) -> bool {
        let (Some(token), Some(chat_id)) = (&self.bot_token, &self.chat_id) else {
            info!(message = text, "Telegram not configured, skipping notification");
            return false;
        };

        match self.post_message(token, chat_id, text).await {
            Ok(status) => {
                debug!(%status, "Telegram message sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to send Telegram message");
                false
            }
        }
    }
}

/// Sends `notification` on a detached task.
///
/// The handle is only useful to tests; callers in the game flow drop it.
#[instrument(skip(notifier))]
pub fn spawn_notification(
    notifier: Arc<dyn Notifier>,
    notification: Notification,
) -> JoinHandle<bool> {
    tokio::spawn(async move { notifier.send(&notification.to_string()).await })
}
