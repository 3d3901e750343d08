use super::{
    Block, ExplicitRoles, SectionSeparators, TranscriptError, TranscriptFormat, WholeText,
};
use crate::conversation::ChatNode;
use crate::tokenizer::trim_blank;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Ordered list of transcript formats; the first to produce blocks wins
pub struct FormatChain {
    formats: Vec<Box<dyn TranscriptFormat>>,
    /// Used when no format recognizes the text
    fallback: Box<dyn TranscriptFormat>,
}

impl FormatChain {
    /// Explicit role markers, then `---` sections, then whole-text fallback
    pub fn new() -> Self {
        let mut chain = Self::fallback_only();
        chain.register(ExplicitRoles);
        chain.register(SectionSeparators);
        chain
    }

    /// A chain that treats every transcript as a single message
    pub fn fallback_only() -> Self {
        Self {
            fallback: Box::new(WholeText),
            formats: Vec::new(),
        }
    }

    /// Append a format, tried after those already registered
    pub fn register(&mut self, format: impl TranscriptFormat + 'static) {
        self.formats.push(Box::new(format));
    }

    /// Number of registered formats (excluding fallback)
    pub fn format_count(&self) -> usize {
        self.formats.len()
    }

    /// Blocks from the first format that recognizes `text`
    pub fn parse_blocks(&self, text: &str) -> Vec<Block> {
        let text = trim_blank(text);
        if text.is_empty() {
            return vec![];
        }

        for (position, format) in self.formats.iter().enumerate() {
            let blocks = format.parse_blocks(text);
            if !blocks.is_empty() {
                debug!(format = position, blocks = blocks.len(), "transcript format matched");
                return blocks;
            }
        }

        self.fallback.parse_blocks(text)
    }

    /// Parse a transcript into a single-branch conversation tree
    pub fn parse(&self, text: &str) -> Result<ChatNode, TranscriptError> {
        build_thread(self.parse_blocks(text)).ok_or(TranscriptError::Empty)
    }
}

impl Default for FormatChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse transcript text with the default formats
pub fn parse_transcript(text: &str) -> Result<ChatNode, TranscriptError> {
    FormatChain::new().parse(text)
}

/// Chain blocks into a linear thread, each node the only child of the previous
fn build_thread(blocks: Vec<Block>) -> Option<ChatNode> {
    let now = Utc::now();
    let ids: Vec<String> = blocks.iter().map(|_| Uuid::new_v4().to_string()).collect();

    let mut chain: Vec<ChatNode> = blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            let parent_id = i.checked_sub(1).map(|p| ids[p].clone());
            ChatNode::new(ids[i].clone(), block.role, block.content, parent_id, now)
        })
        .collect();

    // Fold from the leaf upward
    let mut child = chain.pop()?;
    while let Some(mut parent) = chain.pop() {
        parent.children.push(child);
        child = parent;
    }

    Some(child)
}
