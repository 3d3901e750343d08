use super::{Block, TranscriptFormat};
use crate::conversation::Role;
use crate::tokenizer::trim_blank;

/// Fallback format: the whole text is one assistant message
pub struct WholeText;

impl TranscriptFormat for WholeText {
    fn parse_blocks(&self, text: &str) -> Vec<Block> {
        let text = trim_blank(text);
        if text.is_empty() {
            return vec![];
        }
        vec![Block::new(Role::Assistant, text)]
    }
}
