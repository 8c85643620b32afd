//! One rendered documentation artifact.
//!
//! A [`Document`] is an ordered list of [`Block`]s plus the name of the file it
//! ends up in. Documents are built by [`ContentBlockBuilder`], rendered once
//! and then dropped; nothing is kept between test cases.
//!
//! Rendered layout (sections only appear when they have content):
//!
//! ```text
//! # <Action>
//!
//! + Request <content-type>
//!
//!     + Headers
//!     Authorization: <value>
//!
//!     + Body
//!
//!             <pretty-printed body>
//!
//! + Response <status> <content-type>
//!
//!         <pretty-printed body>
//! ```
use crate::errors::BlueprintError;
use crate::render::{join_blocks, BLOCK_SEPARATOR};

pub mod block;
pub mod builder;

pub use block::{Block, Indent};
pub use builder::ContentBlockBuilder;

#[derive(Debug)]
pub struct Document {
    file_identifier: String,
    blocks: Vec<Block>,
    /// Recoverable problems hit while assembling the blocks (unparseable bodies).
    diagnostics: Vec<BlueprintError>,
}

impl Document {
    pub fn new<S: Into<String>>(file_identifier: S, blocks: Vec<Block>, diagnostics: Vec<BlueprintError>) -> Self {
        Self {
            file_identifier: file_identifier.into(),
            blocks,
            diagnostics,
        }
    }

    pub fn file_identifier(&self) -> &str {
        &self.file_identifier
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn diagnostics(&self) -> &[BlueprintError] {
        &self.diagnostics
    }

    /// Visible blocks joined by blank lines, followed by a trailing blank line.
    pub fn render(&self) -> String {
        let mut out = join_blocks(self.blocks.iter().filter(|b| b.is_visible()).map(Block::render));
        out.push_str(BLOCK_SEPARATOR);
        out
    }
}
