use crate::page::Page;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open,
    Close,
    Toggle,
    Back,
    Chip { index: usize },
    Search { text: String },
    Push { page: Page },
    Reset { page: Page },
    Show,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Open,
    Close,
    Toggle,
    Back,
    Chip,
    Search,
    Push,
    Reset,
    Show,
    Quit,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Toggle => "toggle",
            Self::Back => "back",
            Self::Chip => "chip",
            Self::Search => "search",
            Self::Push => "push",
            Self::Reset => "reset",
            Self::Show => "show",
            Self::Quit => "quit",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::Open => ActionId::Open,
            Self::Close => ActionId::Close,
            Self::Toggle => ActionId::Toggle,
            Self::Back => ActionId::Back,
            Self::Chip { .. } => ActionId::Chip,
            Self::Search { .. } => ActionId::Search,
            Self::Push { .. } => ActionId::Push,
            Self::Reset { .. } => ActionId::Reset,
            Self::Show => ActionId::Show,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Usize,
    String,
    Json,
}

impl ArgKind {
    /// Usage suffix; free text carries none.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Usize => Some("usize"),
            Self::String => None,
            Self::Json => Some("json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub args: &'static [ArgSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
