//! Outbound notification channel

use teloxide::{
    Bot,
    prelude::Requester,
    types::{ChatId, Recipient},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The configured chat id is neither numeric nor an `@channel` name.
    #[error("invalid Telegram chat id `{0}`")]
    InvalidChatId(String),

    #[error("failed to deliver Telegram message: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Something that can push a plain-text message to the fixed destination
#[allow(async_fn_in_trait)]
pub trait Notifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Telegram delivery via the Bot API
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    /// Create a notifier for the given bot token and destination chat.
    ///
    /// The chat id is resolved up front so a malformed destination fails at
    /// startup rather than on the first status change.
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self, NotifyError> {
        let chat = parse_chat_id(chat_id)?;
        Ok(Self {
            bot: Bot::new(bot_token),
            chat,
        })
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.bot.send_message(self.chat.clone(), text).await?;
        debug!("telegram message delivered");
        Ok(())
    }
}

fn parse_chat_id(raw: &str) -> Result<Recipient, NotifyError> {
    if let Some(channel) = raw.strip_prefix('@') {
        if channel.is_empty() {
            return Err(NotifyError::InvalidChatId(raw.to_owned()));
        }
        return Ok(Recipient::ChannelUsername(raw.to_owned()));
    }

    raw.parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|_| NotifyError::InvalidChatId(raw.to_owned()))
}
