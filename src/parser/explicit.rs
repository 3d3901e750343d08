use super::{Block, TranscriptFormat};
use crate::conversation::Role;
use crate::tokenizer::trim_blank;

/// Cursor-style transcripts: a line reading `user:` or `assistant:` opens a block
pub struct ExplicitRoles;

impl TranscriptFormat for ExplicitRoles {
    fn parse_blocks(&self, text: &str) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut current_role: Option<Role> = None;
        let mut current_lines: Vec<&str> = Vec::new();

        for line in text.lines() {
            match Self::role_marker(line) {
                Some(role) => {
                    Self::flush(&mut blocks, current_role, &mut current_lines);
                    current_role = Some(role);
                }
                // Lines before the first marker are dropped
                None if current_role.is_some() => current_lines.push(line),
                None => {}
            }
        }
        Self::flush(&mut blocks, current_role, &mut current_lines);

        blocks
    }
}

impl ExplicitRoles {
    /// Case-insensitive `user:` / `assistant:` with optional trailing whitespace
    fn role_marker(line: &str) -> Option<Role> {
        let line = line.trim_end();
        if line.eq_ignore_ascii_case("user:") {
            Some(Role::User)
        } else if line.eq_ignore_ascii_case("assistant:") {
            Some(Role::Assistant)
        } else {
            None
        }
    }

    fn flush(blocks: &mut Vec<Block>, role: Option<Role>, lines: &mut Vec<&str>) {
        if let Some(role) = role {
            if !lines.is_empty() {
                blocks.push(Block::new(role, trim_blank(&lines.join("\n"))));
                lines.clear();
            }
        }
    }
}
