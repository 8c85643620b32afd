use crate::render::{indent, is_blank};

/// Indentation levels a block can sit at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indent {
    /// Top level sections (`# Action`, `+ Request`, `+ Response`).
    Flush,
    /// One level in, e.g. `+ Headers` under a request.
    Section,
    /// Payload under a top level section.
    Nested,
    /// Payload under a nested section.
    Deep,
}

impl Indent {
    pub fn spaces(self) -> usize {
        match self {
            Indent::Flush => 0,
            Indent::Section => 4,
            Indent::Nested => 8,
            Indent::Deep => 12,
        }
    }
}

/// A piece of text and the indentation it is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    indent: Indent,
    text: String,
}

impl Block {
    pub fn new<S: Into<String>>(indent: Indent, text: S) -> Self {
        Self { indent, text: text.into() }
    }

    pub fn flush<S: Into<String>>(text: S) -> Self {
        Self::new(Indent::Flush, text)
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with every line shifted right by the block's indentation.
    pub fn render(&self) -> String {
        indent(&self.text, self.indent.spaces())
    }

    /// Blank blocks are left out of the rendered document.
    pub fn is_visible(&self) -> bool {
        !is_blank(&self.text)
    }
}
