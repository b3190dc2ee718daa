//! XML card payloads.
//!
//! Output shape (attribute order and single quotes are fixed):
//! `<?xml version='1.0' encoding='UTF-8' standalone='yes' ?><msg templateID='..'
//! serviceID='..' action='..' actionData='..' brief='..' flag='..' url='..'>`
//! followed by the `<item>` blocks in append order, then
//! `<source name='..' icon='..'/></msg>`.

pub mod builder;
pub mod item;

use tracing::debug;

use crate::message::service::XML_DEFAULT_SERVICE_ID;
use crate::message::ServiceMessage;

pub use builder::XmlMessageBuilder;
pub use item::ItemBuilder;

/// Build an XML message.
///
/// The builder starts with `service_id` and defaults everywhere else; the
/// returned message carries `service_id` regardless of what `configure` does
/// to the builder's own field.
pub fn build_xml_message(
    service_id: i32,
    configure: impl FnOnce(&mut XmlMessageBuilder),
) -> ServiceMessage {
    let mut builder = XmlMessageBuilder::with_service_id(service_id);
    configure(&mut builder);
    let text = builder.render();
    debug!(service_id, items = builder.item_count(), "xml message built");
    ServiceMessage::xml(service_id, text)
}

/// [`build_xml_message`] with service id 60.
#[deprecated(note = "specify service_id explicitly: build_xml_message(60, configure)")]
pub fn build_xml_message_default(configure: impl FnOnce(&mut XmlMessageBuilder)) -> ServiceMessage {
    build_xml_message(XML_DEFAULT_SERVICE_ID, configure)
}
