//! Service messages: rich payloads tagged with a numeric service id.
//!
//! JSON, XML, long-message and merged-forward payloads all share the same
//! two fields (`service_id`, `content`). They are one type here; the
//! [`ServiceKind`] tag says which kind a value is and carries the little
//! per-kind data there is.

use std::fmt;

use super::{MessageKey, MessageType, RichContent};

/// Service id of JSON messages.
pub const JSON_SERVICE_ID: i32 = 1;
/// Service id used by XML messages when none is given.
pub const XML_DEFAULT_SERVICE_ID: i32 = 60;
/// Service id of long messages.
pub const LONG_SERVICE_ID: i32 = 35;
/// Service id of merged-forward messages. Same as [`LONG_SERVICE_ID`] on the wire.
pub const FORWARD_SERVICE_ID: i32 = 35;

/// Which service message this is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// Plain service message with a caller-chosen id.
    Generic,
    /// JSON payload (service id 1).
    Json,
    /// XML card, e.g. a share.
    Xml,
    /// Reference to long-message content stored elsewhere.
    Long {
        /// Resource id of the stored body. The content is only a preview.
        res_id: String,
    },
    /// Merged-forward summary.
    Forward,
}

impl ServiceKind {
    pub fn message_type(&self) -> MessageType {
        match self {
            ServiceKind::Generic => MessageType::ServiceMessage,
            ServiceKind::Json => MessageType::JsonMessage,
            ServiceKind::Xml => MessageType::XmlMessage,
            ServiceKind::Long { .. } => MessageType::LongMessage,
            ServiceKind::Forward => MessageType::ForwardMessage,
        }
    }
}

/// A rich message with a service id. Both fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceMessage {
    service_id: i32,
    content: String,
    kind: ServiceKind,
}

impl ServiceMessage {
    /// Generic service message.
    pub fn new(service_id: i32, content: impl Into<String>) -> Self {
        Self::with_kind(ServiceKind::Generic, service_id, content)
    }

    /// JSON message. Some JSON payloads are really [`LightApp`](super::LightApp)s.
    pub fn json(content: impl Into<String>) -> Self {
        Self::with_kind(ServiceKind::Json, JSON_SERVICE_ID, content)
    }

    /// XML message, e.g. a share or a card.
    pub fn xml(service_id: i32, content: impl Into<String>) -> Self {
        Self::with_kind(ServiceKind::Xml, service_id, content)
    }

    /// XML message with service id [`XML_DEFAULT_SERVICE_ID`].
    pub fn xml_with_default_service_id(content: impl Into<String>) -> Self {
        Self::xml(XML_DEFAULT_SERVICE_ID, content)
    }

    /// Long message referencing externally stored content by `res_id`.
    pub fn long(content: impl Into<String>, res_id: impl Into<String>) -> Self {
        Self::with_kind(
            ServiceKind::Long {
                res_id: res_id.into(),
            },
            LONG_SERVICE_ID,
            content,
        )
    }

    /// Merged-forward message wrapping its summary payload.
    pub fn forward(content: impl Into<String>) -> Self {
        Self::with_kind(ServiceKind::Forward, FORWARD_SERVICE_ID, content)
    }

    pub(crate) fn with_kind(kind: ServiceKind, service_id: i32, content: impl Into<String>) -> Self {
        Self {
            service_id,
            content: content.into(),
            kind,
        }
    }

    pub fn service_id(&self) -> i32 {
        self.service_id
    }

    pub fn kind(&self) -> &ServiceKind {
        &self.kind
    }

    /// Runtime type tag, e.g. [`MessageType::XmlMessage`].
    pub fn message_type(&self) -> MessageType {
        self.kind.message_type()
    }

    /// Resource id of a long message; `None` for every other kind.
    pub fn res_id(&self) -> Option<&str> {
        match &self.kind {
            ServiceKind::Long { res_id } => Some(res_id),
            _ => None,
        }
    }

    pub fn is_xml(&self) -> bool {
        matches!(self.kind, ServiceKind::Xml)
    }

    pub fn is_json(&self) -> bool {
        matches!(self.kind, ServiceKind::Json)
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl MessageKey for ServiceMessage {
    const TYPE_NAME: &'static str = "ServiceMessage";
}

impl RichContent for ServiceMessage {
    fn content(&self) -> &str {
        &self.content
    }
}

/// Same format for every kind.
impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[mirai:service:{},{}]", self.service_id, self.content)
    }
}
