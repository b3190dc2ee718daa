//! Top-level XML card builder.

use tracing::trace;

use super::item::ItemBuilder;

const XML_HEADER: &str = "<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>";

/// Card-level fields plus the `<item>` blocks rendered so far.
///
/// Fields are public and unvalidated: any value is written as-is, including
/// negative ids and empty strings. Nothing is escaped either (see the crate
/// docs). A builder belongs to one call stack; build it, render it once,
/// drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlMessageBuilder {
    pub template_id: i32,
    pub service_id: i32,
    pub action: String,
    /// Usually the link opened when the card is clicked.
    pub action_data: String,
    /// Summary shown in the conversation list.
    pub brief: String,
    pub flag: i32,
    pub url: String,
    pub source_name: String,
    pub source_icon_url: String,
    items: Vec<String>,
}

impl Default for XmlMessageBuilder {
    fn default() -> Self {
        Self {
            template_id: 1,
            service_id: 1,
            action: "plugin".into(),
            action_data: String::new(),
            brief: String::new(),
            flag: 3,
            url: String::new(),
            source_name: String::new(),
            source_icon_url: String::new(),
            items: Vec::new(),
        }
    }
}

impl XmlMessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults everywhere except `serviceID`.
    pub fn with_service_id(service_id: i32) -> Self {
        Self {
            service_id,
            ..Self::default()
        }
    }

    /// Append one `<item bg='0' layout='4'>` block configured by `configure`.
    pub fn item(&mut self, configure: impl FnOnce(&mut ItemBuilder)) -> &mut Self {
        self.item_with(0, 4, configure)
    }

    /// Append one `<item>` block with explicit `bg` / `layout`.
    ///
    /// `configure` may still change both before the block is rendered.
    pub fn item_with(
        &mut self,
        bg: i32,
        layout: i32,
        configure: impl FnOnce(&mut ItemBuilder),
    ) -> &mut Self {
        let mut item = ItemBuilder::new(bg, layout);
        configure(&mut item);
        self.items.push(item.render());
        self
    }

    /// Source with an empty icon.
    pub fn source(&mut self, name: &str) -> &mut Self {
        self.source_with(name, "")
    }

    pub fn source_with(&mut self, name: &str, icon_url: &str) -> &mut Self {
        self.source_name = name.to_string();
        self.source_icon_url = icon_url.to_string();
        self
    }

    /// Number of `<item>` blocks appended so far.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Render the full document. Same state, same text.
    pub fn render(&self) -> String {
        let head = format!(
            "<msg templateID='{}' serviceID='{}' action='{}' actionData='{}' brief='{}' flag='{}' url='{}'>",
            self.template_id,
            self.service_id,
            self.action,
            self.action_data,
            self.brief,
            self.flag,
            self.url,
        );
        let source = format!(
            "<source name='{}' icon='{}'/>",
            self.source_name, self.source_icon_url
        );

        let mut text = String::with_capacity(
            XML_HEADER.len()
                + head.len()
                + self.items.iter().map(String::len).sum::<usize>()
                + source.len()
                + "</msg>".len(),
        );
        text.push_str(XML_HEADER);
        text.push_str(&head);
        for item in &self.items {
            text.push_str(item);
        }
        text.push_str(&source);
        text.push_str("</msg>");

        trace!(
            template_id = self.template_id,
            service_id = self.service_id,
            items = self.items.len(),
            bytes = text.len(),
            "xml card rendered"
        );
        text
    }
}
