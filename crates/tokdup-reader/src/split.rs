//! Token delimiter detection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    #[default]
    Space,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
        }
    }
}

/// Splits token lists, switching from SPACE to TAB for good once a token list
/// containing a TAB is seen.
#[derive(Debug, Clone, Default)]
pub struct TokenSplitter {
    delimiter: Delimiter,
}

impl TokenSplitter {
    pub fn new(force_tab: bool) -> Self {
        Self {
            delimiter: if force_tab {
                Delimiter::Tab
            } else {
                Delimiter::Space
            },
        }
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Non-empty tokens of `text` under the current delimiter.
    pub fn split<'a>(&mut self, text: &'a str) -> impl Iterator<Item = &'a str> + use<'a> {
        if self.delimiter == Delimiter::Space && text.contains('\t') {
            tracing::debug!(target: "tokdup::reader", "TAB found in token list; splitting on TAB");
            self.delimiter = Delimiter::Tab;
        }
        let delim = self.delimiter.as_char();
        text.split(delim).filter(|t| !t.is_empty())
    }
}
