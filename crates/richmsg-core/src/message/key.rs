//! Type tags for rich message kinds.
//!
//! The surrounding message model registers content types by name. This module
//! only declares the names and ties them to the Rust types; it holds no
//! registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RichMessageError};

/// Static type tag of a message content type.
pub trait MessageKey {
    /// Stable registration name.
    const TYPE_NAME: &'static str;
}

/// Every rich message kind known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum MessageType {
    RichMessage,
    LightApp,
    ServiceMessage,
    JsonMessage,
    XmlMessage,
    LongMessage,
    ForwardMessage,
}

impl MessageType {
    pub const ALL: [MessageType; 7] = [
        MessageType::RichMessage,
        MessageType::LightApp,
        MessageType::ServiceMessage,
        MessageType::JsonMessage,
        MessageType::XmlMessage,
        MessageType::LongMessage,
        MessageType::ForwardMessage,
    ];

    /// Registration name, e.g. `"XmlMessage"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::RichMessage => "RichMessage",
            MessageType::LightApp => "LightApp",
            MessageType::ServiceMessage => "ServiceMessage",
            MessageType::JsonMessage => "JsonMessage",
            MessageType::XmlMessage => "XmlMessage",
            MessageType::LongMessage => "LongMessage",
            MessageType::ForwardMessage => "ForwardMessage",
        }
    }

    /// Whether values of this kind carry a service id.
    pub fn is_service(self) -> bool {
        !matches!(self, MessageType::RichMessage | MessageType::LightApp)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = RichMessageError;

    fn from_str(s: &str) -> Result<Self> {
        MessageType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RichMessageError::UnknownType(s.to_string()))
    }
}

impl TryFrom<String> for MessageType {
    type Error = RichMessageError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MessageType> for &'static str {
    fn from(t: MessageType) -> Self {
        t.as_str()
    }
}
