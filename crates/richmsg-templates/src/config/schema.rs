use richmsg_core::error::{Result, RichMessageError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    pub version: u32,

    #[serde(default)]
    pub share: ShareTemplate,
}

impl TemplatesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RichMessageError::UnsupportedVersion);
        }

        self.share.validate()?;

        Ok(())
    }
}

/// Constants of the link-share card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareTemplate {
    #[serde(default = "default_template_id")]
    pub template_id: i32,

    /// `serviceID` attribute written into the XML.
    #[serde(default = "default_service_id")]
    pub service_id: i32,

    /// Service id of the resulting message; differs from `service_id`.
    #[serde(default = "default_message_service_id")]
    pub message_service_id: i32,

    #[serde(default = "default_action")]
    pub action: String,

    /// Prepended to the title to form `brief`.
    #[serde(default = "default_brief_prefix")]
    pub brief_prefix: String,

    #[serde(default = "default_layout")]
    pub layout: i32,
}

impl Default for ShareTemplate {
    fn default() -> Self {
        Self {
            template_id: default_template_id(),
            service_id: default_service_id(),
            message_service_id: default_message_service_id(),
            action: default_action(),
            brief_prefix: default_brief_prefix(),
            layout: default_layout(),
        }
    }
}

impl ShareTemplate {
    pub fn validate(&self) -> Result<()> {
        if self.action.is_empty() {
            return Err(RichMessageError::InvalidConfig(
                "share.action must not be empty".into(),
            ));
        }
        if self.layout < 0 {
            return Err(RichMessageError::InvalidConfig(
                "share.layout must not be negative".into(),
            ));
        }
        Ok(())
    }
}

fn default_template_id() -> i32 {
    12345
}
fn default_service_id() -> i32 {
    1
}
fn default_message_service_id() -> i32 {
    60
}
fn default_action() -> String {
    "web".into()
}
fn default_brief_prefix() -> String {
    "[分享] ".into()
}
fn default_layout() -> i32 {
    2
}
