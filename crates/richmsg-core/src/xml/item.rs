//! One `<item>` block of an XML card.

/// Text color used when none is given.
pub const DEFAULT_COLOR: &str = "#000000";
/// Title font size used when none is given.
pub const DEFAULT_TITLE_SIZE: i32 = 25;

/// Accumulates inline elements (picture / title / summary) for one `<item>`.
///
/// Elements are kept in call order; repeats are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBuilder {
    pub bg: i32,
    pub layout: i32,
    elements: String,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new(0, 4)
    }
}

impl ItemBuilder {
    pub fn new(bg: i32, layout: i32) -> Self {
        Self {
            bg,
            layout,
            elements: String::new(),
        }
    }

    /// `<picture cover='..'/>`
    pub fn picture(&mut self, cover_url: &str) -> &mut Self {
        self.elements
            .push_str(&format!("<picture cover='{cover_url}'/>"));
        self
    }

    /// Title with size 25 and color `#000000`.
    pub fn title(&mut self, text: &str) -> &mut Self {
        self.title_with(text, DEFAULT_TITLE_SIZE, DEFAULT_COLOR)
    }

    pub fn title_with(&mut self, text: &str, size: i32, color: &str) -> &mut Self {
        self.elements
            .push_str(&format!("<title size='{size}' color='{color}'>{text}</title>"));
        self
    }

    /// Summary in color `#000000`.
    pub fn summary(&mut self, text: &str) -> &mut Self {
        self.summary_with(text, DEFAULT_COLOR)
    }

    pub fn summary_with(&mut self, text: &str, color: &str) -> &mut Self {
        self.elements
            .push_str(&format!("<summary color='{color}'>{text}</summary>"));
        self
    }

    /// `<item bg='..' layout='..'>..</item>`
    pub fn render(&self) -> String {
        format!(
            "<item bg='{}' layout='{}'>{}</item>",
            self.bg, self.layout, self.elements
        )
    }
}
