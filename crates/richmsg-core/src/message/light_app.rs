//! Mini-program cards ("light apps"), e.g. music shares.

use std::fmt;

use super::{MessageKey, RichContent};

/// App card holding its raw payload, usually JSON.
///
/// Some JSON payloads are app cards rather than generic service messages,
/// which is why this is not a [`ServiceMessage`](super::ServiceMessage).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LightApp {
    content: String,
}

impl LightApp {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl MessageKey for LightApp {
    const TYPE_NAME: &'static str = "LightApp";
}

impl RichContent for LightApp {
    fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for LightApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[mirai:app:{}]", self.content)
    }
}
