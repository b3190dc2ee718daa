//! Link-share card.

use richmsg_core::{build_xml_message, ServiceMessage};
use tracing::debug;

use crate::config::ShareTemplate;

/// Share `url` as a card using the built-in [`ShareTemplate`].
///
/// The single item holds, in order, a picture if `cover_url` is given, a
/// title if `title` is given and a summary if `content` is given. Missing
/// values produce no element at all.
pub fn share(
    url: &str,
    title: Option<&str>,
    content: Option<&str>,
    cover_url: Option<&str>,
) -> ServiceMessage {
    share_with(&ShareTemplate::default(), url, title, content, cover_url)
}

/// [`share`] with a configured template.
pub fn share_with(
    template: &ShareTemplate,
    url: &str,
    title: Option<&str>,
    content: Option<&str>,
    cover_url: Option<&str>,
) -> ServiceMessage {
    let msg = build_xml_message(template.message_service_id, |b| {
        b.template_id = template.template_id;
        b.service_id = template.service_id;
        b.action = template.action.clone();
        b.brief = format!("{}{}", template.brief_prefix, title.unwrap_or_default());
        b.url = url.to_string();
        b.item(|item| {
            item.layout = template.layout;
            if let Some(cover_url) = cover_url {
                item.picture(cover_url);
            }
            if let Some(title) = title {
                item.title(title);
            }
            if let Some(content) = content {
                item.summary(content);
            }
        });
    });
    debug!(
        url,
        has_title = title.is_some(),
        has_summary = content.is_some(),
        has_cover = cover_url.is_some(),
        "share card built"
    );
    msg
}
