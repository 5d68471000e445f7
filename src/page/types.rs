use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::PageKind;

/// Icon identifier handed to the view layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(String);

impl IconId {
    pub const CHEVRON_LEFT: &'static str = "IconChevronLeft";
    pub const CLOSE: &'static str = "IconX";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One navigation destination of the command menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub kind: PageKind,
    pub title: String,
    pub icon: IconId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Page {
    pub fn new(kind: PageKind, title: impl Into<String>, icon: IconId) -> Self {
        Self {
            kind,
            title: title.into(),
            icon,
            metadata: None,
        }
    }

    /// Sentinel returned as the active page of an empty stack.
    pub fn root() -> Self {
        Self::new(PageKind::Root, String::new(), IconId::default())
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_root(&self) -> bool {
        self.kind.is_root()
    }
}
