mod block;
mod chain;
mod error;
mod explicit;
mod sections;
mod whole;


pub use block::Block;
pub use chain::{FormatChain, parse_transcript};
pub use error::TranscriptError;
pub use explicit::ExplicitRoles;
pub use sections::SectionSeparators;
pub use whole::WholeText;

/// Core trait for transcript layouts
pub trait TranscriptFormat: Send + Sync {
    /// Split trimmed transcript text into role-tagged blocks
    ///
    /// # Returns
    /// The blocks in conversation order, or an empty vec if the text
    /// does not look like this format
    fn parse_blocks(&self, text: &str) -> Vec<Block>;
}
