//! Rich message content model.
//!
//! A rich message carries a structured text payload (XML card, JSON, app
//! card) instead of plain text. [`RichMessage`] is the closed set of kinds:
//! - [`LightApp`]: app card, raw content only.
//! - [`ServiceMessage`]: content plus a numeric service id; its
//!   [`ServiceKind`] distinguishes JSON, XML, long and forward messages.
//!
//! Values are immutable once built. The string operations of [`RichContent`]
//! all delegate to `content`; nothing else is stored.

pub mod key;
pub mod light_app;
pub mod service;
mod wire;

use std::cmp::Ordering;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub use key::{MessageKey, MessageType};
pub use light_app::LightApp;
pub use service::{ServiceKind, ServiceMessage};

/// Read-only view shared by every rich message.
///
/// Character positions are counted in `char`s, not bytes.
pub trait RichContent {
    /// The raw payload.
    fn content(&self) -> &str;

    /// Plain-text projection; for rich messages this is the payload itself.
    fn content_to_string(&self) -> String {
        self.content().to_string()
    }

    fn length(&self) -> usize {
        self.content().chars().count()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.content().chars().nth(index)
    }

    /// Characters `start..end`, or `None` when the range is out of bounds.
    fn sub_sequence(&self, start: usize, end: usize) -> Option<&str> {
        if start > end {
            return None;
        }
        let content = self.content();
        let byte_offset = |index: usize| {
            content
                .char_indices()
                .map(|(offset, _)| offset)
                .chain(std::iter::once(content.len()))
                .nth(index)
        };
        let from = byte_offset(start)?;
        let to = byte_offset(end)?;
        content.get(from..to)
    }

    /// Lexicographic comparison of the payload against `other`.
    fn compare_to(&self, other: &str) -> Ordering {
        self.content().cmp(other)
    }

    /// Payload bytes for the protocol encoder. No framing is added.
    fn payload(&self) -> Bytes {
        Bytes::copy_from_slice(self.content().as_bytes())
    }
}

/// Any rich message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "wire::MessageRecord", into = "wire::MessageRecord")]
pub enum RichMessage {
    LightApp(LightApp),
    Service(ServiceMessage),
}

impl RichMessage {
    /// Runtime type tag of the concrete kind.
    pub fn message_type(&self) -> MessageType {
        match self {
            RichMessage::LightApp(_) => MessageType::LightApp,
            RichMessage::Service(m) => m.message_type(),
        }
    }

    pub fn service_id(&self) -> Option<i32> {
        self.as_service().map(ServiceMessage::service_id)
    }

    pub fn as_service(&self) -> Option<&ServiceMessage> {
        match self {
            RichMessage::Service(m) => Some(m),
            RichMessage::LightApp(_) => None,
        }
    }

    pub fn as_light_app(&self) -> Option<&LightApp> {
        match self {
            RichMessage::LightApp(m) => Some(m),
            RichMessage::Service(_) => None,
        }
    }
}

impl MessageKey for RichMessage {
    const TYPE_NAME: &'static str = "RichMessage";
}

impl RichContent for RichMessage {
    fn content(&self) -> &str {
        match self {
            RichMessage::LightApp(m) => m.content(),
            RichMessage::Service(m) => m.content(),
        }
    }
}

impl fmt::Display for RichMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RichMessage::LightApp(m) => fmt::Display::fmt(m, f),
            RichMessage::Service(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl From<LightApp> for RichMessage {
    fn from(m: LightApp) -> Self {
        RichMessage::LightApp(m)
    }
}

impl From<ServiceMessage> for RichMessage {
    fn from(m: ServiceMessage) -> Self {
        RichMessage::Service(m)
    }
}

impl PartialEq<str> for RichMessage {
    fn eq(&self, other: &str) -> bool {
        self.content() == other
    }
}
