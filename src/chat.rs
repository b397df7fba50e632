#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatColor {
    pub const ALL: [ChatColor; 22] = [
        ChatColor::Black,
        ChatColor::DarkBlue,
        ChatColor::DarkGreen,
        ChatColor::DarkAqua,
        ChatColor::DarkRed,
        ChatColor::DarkPurple,
        ChatColor::Gold,
        ChatColor::Gray,
        ChatColor::DarkGray,
        ChatColor::Blue,
        ChatColor::Green,
        ChatColor::Aqua,
        ChatColor::Red,
        ChatColor::LightPurple,
        ChatColor::Yellow,
        ChatColor::White,
        ChatColor::Obfuscated,
        ChatColor::Bold,
        ChatColor::Strikethrough,
        ChatColor::Underline,
        ChatColor::Italic,
        ChatColor::Reset,
    ];

    /// The token vanilla uses in the `color` field. Always lowercase.
    pub fn as_str(self) -> &'static str {
        match self {
            ChatColor::Black => "black",
            ChatColor::DarkBlue => "dark_blue",
            ChatColor::DarkGreen => "dark_green",
            ChatColor::DarkAqua => "dark_aqua",
            ChatColor::DarkRed => "dark_red",
            ChatColor::DarkPurple => "dark_purple",
            ChatColor::Gold => "gold",
            ChatColor::Gray => "gray",
            ChatColor::DarkGray => "dark_gray",
            ChatColor::Blue => "blue",
            ChatColor::Green => "green",
            ChatColor::Aqua => "aqua",
            ChatColor::Red => "red",
            ChatColor::LightPurple => "light_purple",
            ChatColor::Yellow => "yellow",
            ChatColor::White => "white",
            ChatColor::Obfuscated => "obfuscated",
            ChatColor::Bold => "bold",
            ChatColor::Strikethrough => "strikethrough",
            ChatColor::Underline => "underline",
            ChatColor::Italic => "italic",
            ChatColor::Reset => "reset",
        }
    }

    /// Exact match only, the vanilla client rejects anything but lowercase.
    pub fn from_token(token: &str) -> Option<ChatColor> {
        ChatColor::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}

impl Default for ChatColor {
    fn default() -> Self {
        ChatColor::Reset
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    None,
}

impl ClickAction {
    /// `None` maps to the empty string, which is what goes on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::None => "",
        }
    }

    pub fn from_token(token: &str) -> Option<ClickAction> {
        match token {
            "open_url" => Some(ClickAction::OpenUrl),
            "open_file" => Some(ClickAction::OpenFile),
            "run_command" => Some(ClickAction::RunCommand),
            "suggest_command" => Some(ClickAction::SuggestCommand),
            _ => None,
        }
    }
}

impl Default for ClickAction {
    fn default() -> Self {
        ClickAction::None
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverAction {
    ShowText,
    ShowAchievement,
    ShowItem,
    None,
}

impl HoverAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HoverAction::ShowText => "show_text",
            HoverAction::ShowAchievement => "show_achievement",
            HoverAction::ShowItem => "show_item",
            HoverAction::None => "",
        }
    }

    pub fn from_token(token: &str) -> Option<HoverAction> {
        match token {
            "show_text" => Some(HoverAction::ShowText),
            "show_achievement" => Some(HoverAction::ShowAchievement),
            "show_item" => Some(HoverAction::ShowItem),
            _ => None,
        }
    }
}

impl Default for HoverAction {
    fn default() -> Self {
        HoverAction::None
    }
}

/// One styled fragment of a chat message.
///
/// Style flags are stored as given on this node only. A renderer is expected
/// to inherit them from ancestors when drawing, but the tree never copies them
/// down.
///
/// Equality ignores the raw input string kept for diagnostics.
#[derive(Clone, Debug, Default)]
pub struct ChatComponent {
    pub(crate) raw: Option<String>,
    pub(crate) text: String,
    pub(crate) color: ChatColor,
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    pub(crate) underlined: bool,
    pub(crate) strikethrough: bool,
    pub(crate) obfuscated: bool,
    pub(crate) click_action: ClickAction,
    pub(crate) click_value: String,
    pub(crate) hover_action: HoverAction,
    pub(crate) hover_value: String,
    pub(crate) is_legacy_command: bool,
    pub(crate) extra: Vec<ChatComponent>,
}

impl ChatComponent {
    pub fn new(text: impl Into<String>) -> Self {
        ChatComponent {
            text: text.into(),
            ..Default::default()
        }
    }

    /// A plain string that isn't a JSON component. Only command detection is kept.
    pub fn legacy(message: &str) -> Self {
        ChatComponent {
            raw: Some(message.to_owned()),
            text: message.to_owned(),
            is_legacy_command: message.starts_with('/'),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: ChatColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underlined(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    pub fn with_obfuscated(mut self, obfuscated: bool) -> Self {
        self.obfuscated = obfuscated;
        self
    }

    /// Setting `ClickAction::None` drops the value.
    pub fn with_click(mut self, action: ClickAction, value: impl Into<String>) -> Self {
        self.click_action = action;
        self.click_value = match action {
            ClickAction::None => String::new(),
            _ => value.into(),
        };
        self
    }

    pub fn with_hover(mut self, action: HoverAction, value: impl Into<String>) -> Self {
        self.hover_action = action;
        self.hover_value = match action {
            HoverAction::None => String::new(),
            _ => value.into(),
        };
        self
    }

    pub fn with_child(mut self, child: ChatComponent) -> Self {
        self.extra.push(child);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> ChatColor {
        self.color
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn is_underlined(&self) -> bool {
        self.underlined
    }

    pub fn is_strikethrough(&self) -> bool {
        self.strikethrough
    }

    pub fn is_obfuscated(&self) -> bool {
        self.obfuscated
    }

    pub fn click_action(&self) -> ClickAction {
        self.click_action
    }

    pub fn click_value(&self) -> &str {
        &self.click_value
    }

    pub fn hover_action(&self) -> HoverAction {
        self.hover_action
    }

    pub fn hover_value(&self) -> &str {
        &self.hover_value
    }

    pub fn is_legacy_command(&self) -> bool {
        self.is_legacy_command
    }

    pub fn children(&self) -> &[ChatComponent] {
        &self.extra
    }

    /// The input this node was decoded from, if it was the root of a decode
    /// or came in as a bare string.
    pub fn raw_message(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Text of this node followed by every descendant, depth first.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    /// Number of components on the longest path from this node down, itself included.
    pub fn depth(&self) -> usize {
        1 + self.extra.iter().map(ChatComponent::depth).max().unwrap_or(0)
    }

    fn push_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.extra {
            child.push_text(out);
        }
    }
}

impl PartialEq for ChatComponent {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.color == other.color
            && self.bold == other.bold
            && self.italic == other.italic
            && self.underlined == other.underlined
            && self.strikethrough == other.strikethrough
            && self.obfuscated == other.obfuscated
            && self.click_action == other.click_action
            && self.click_value == other.click_value
            && self.hover_action == other.hover_action
            && self.hover_value == other.hover_value
            && self.is_legacy_command == other.is_legacy_command
            && self.extra == other.extra
    }
}

impl Eq for ChatComponent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tokens_are_unique_and_lowercase() {
        for color in ChatColor::ALL.iter() {
            let token = color.as_str();
            assert_eq!(token, token.to_lowercase());
            assert_eq!(ChatColor::from_token(token), Some(*color));
        }
        assert_eq!(ChatColor::from_token("Red"), None);
        assert_eq!(ChatColor::from_token(""), None);
    }

    #[test]
    fn action_tokens() {
        assert_eq!(ClickAction::from_token("run_command"), Some(ClickAction::RunCommand));
        assert_eq!(ClickAction::from_token("change_page"), None);
        assert_eq!(ClickAction::from_token(""), None);
        assert_eq!(HoverAction::from_token("show_item"), Some(HoverAction::ShowItem));
        assert_eq!(HoverAction::from_token("show_entity"), None);
    }

    #[test]
    fn new_has_defaults() {
        let c = ChatComponent::new("hi");
        assert_eq!(c.text(), "hi");
        assert_eq!(c.color(), ChatColor::Reset);
        assert!(!c.is_bold() && !c.is_italic() && !c.is_underlined());
        assert!(!c.is_strikethrough() && !c.is_obfuscated());
        assert_eq!(c.click_action(), ClickAction::None);
        assert_eq!(c.hover_action(), HoverAction::None);
        assert!(c.children().is_empty());
        assert_eq!(c.raw_message(), None);
    }

    #[test]
    fn legacy_detects_commands() {
        let cmd = ChatComponent::legacy("/tp 0 64 0");
        assert!(cmd.is_legacy_command());
        assert_eq!(cmd.raw_message(), Some("/tp 0 64 0"));
        assert!(!ChatComponent::legacy("hello /there").is_legacy_command());
        assert!(!ChatComponent::legacy("").is_legacy_command());
    }

    #[test]
    fn click_none_drops_value() {
        let c = ChatComponent::new("x").with_click(ClickAction::None, "ignored");
        assert_eq!(c.click_value(), "");
        let c = ChatComponent::new("x").with_hover(HoverAction::None, "ignored");
        assert_eq!(c.hover_value(), "");
    }

    #[test]
    fn full_text_is_depth_first() {
        let tree = ChatComponent::new("a")
            .with_child(ChatComponent::new("b").with_child(ChatComponent::new("c")))
            .with_child(ChatComponent::new("d"));
        assert_eq!(tree.full_text(), "abcd");
        assert_eq!(ChatComponent::default().full_text(), "");
        assert_eq!(tree.depth(), 3);
        assert_eq!(ChatComponent::default().depth(), 1);
    }

    #[test]
    fn equality_ignores_raw() {
        let mut a = ChatComponent::new("same");
        a.raw = Some("{\"text\":\"same\"}".to_owned());
        assert_eq!(a, ChatComponent::new("same"));
        assert_ne!(a, ChatComponent::new("same").with_bold(true));
    }
}
