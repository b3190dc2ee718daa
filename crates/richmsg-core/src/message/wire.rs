//! Serde record for rich messages: `{"type": "...", "serviceId": .., "content": "..", "resId": ..}`.

use serde::{Deserialize, Serialize};

use super::service::{
    FORWARD_SERVICE_ID, JSON_SERVICE_ID, LONG_SERVICE_ID, XML_DEFAULT_SERVICE_ID,
};
use super::{LightApp, MessageType, RichContent, RichMessage, ServiceKind, ServiceMessage};
use crate::error::{Result, RichMessageError};

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(crate) struct MessageRecord {
    #[serde(rename = "type")]
    message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_id: Option<i32>,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    res_id: Option<String>,
}

impl From<RichMessage> for MessageRecord {
    fn from(m: RichMessage) -> Self {
        let message_type = m.message_type();
        match m {
            RichMessage::LightApp(app) => MessageRecord {
                message_type,
                service_id: None,
                content: app.content().to_string(),
                res_id: None,
            },
            RichMessage::Service(svc) => MessageRecord {
                message_type,
                service_id: Some(svc.service_id()),
                res_id: svc.res_id().map(str::to_string),
                content: svc.into_content(),
            },
        }
    }
}

impl TryFrom<MessageRecord> for RichMessage {
    type Error = RichMessageError;

    fn try_from(r: MessageRecord) -> Result<Self> {
        let t = r.message_type;
        if t != MessageType::LongMessage && r.res_id.is_some() {
            return Err(malformed(t, "resId is only valid on LongMessage"));
        }

        let msg: RichMessage = match t {
            MessageType::RichMessage => {
                return Err(malformed(t, "abstract type has no values"));
            }
            MessageType::LightApp => {
                if r.service_id.is_some() {
                    return Err(malformed(t, "serviceId is not valid on LightApp"));
                }
                LightApp::new(r.content).into()
            }
            MessageType::ServiceMessage => {
                let id = r
                    .service_id
                    .ok_or_else(|| malformed(t, "serviceId is required"))?;
                ServiceMessage::new(id, r.content).into()
            }
            MessageType::JsonMessage => {
                fixed_id(t, r.service_id, JSON_SERVICE_ID)?;
                ServiceMessage::json(r.content).into()
            }
            MessageType::XmlMessage => {
                let id = r.service_id.unwrap_or(XML_DEFAULT_SERVICE_ID);
                ServiceMessage::xml(id, r.content).into()
            }
            MessageType::LongMessage => {
                fixed_id(t, r.service_id, LONG_SERVICE_ID)?;
                let res_id = r.res_id.ok_or_else(|| malformed(t, "resId is required"))?;
                ServiceMessage::with_kind(ServiceKind::Long { res_id }, LONG_SERVICE_ID, r.content)
                    .into()
            }
            MessageType::ForwardMessage => {
                fixed_id(t, r.service_id, FORWARD_SERVICE_ID)?;
                ServiceMessage::forward(r.content).into()
            }
        };
        Ok(msg)
    }
}

fn fixed_id(t: MessageType, got: Option<i32>, want: i32) -> Result<()> {
    match got {
        Some(id) if id != want => Err(malformed(t, &format!("serviceId must be {want}, got {id}"))),
        _ => Ok(()),
    }
}

fn malformed(t: MessageType, why: &str) -> RichMessageError {
    RichMessageError::Malformed(format!("{t}: {why}"))
}
