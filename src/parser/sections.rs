use super::{Block, TranscriptFormat};
use crate::conversation::Role;
use crate::tokenizer::trim_blank;

/// Segments split by `---` rules, alternating assistant, user, assistant, ...
///
/// A rule needs a line break on both sides, and the break after a rule is
/// consumed by it. A second rule separated from the first only by blank
/// lines is therefore content: `"a\n---\n---\nb"` gives `"a"` and `"---\nb"`.
pub struct SectionSeparators;

impl TranscriptFormat for SectionSeparators {
    fn parse_blocks(&self, text: &str) -> Vec<Block> {
        let lines: Vec<&str> = text.split('\n').collect();
        let last = lines.len() - 1;

        let mut parts: Vec<String> = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut after_rule = false;

        for (i, &line) in lines.iter().enumerate() {
            let trimmed = trim_blank(line);
            if i > 0 && i < last && trimmed == "---" && !after_rule {
                parts.push(current.join("\n"));
                current.clear();
                after_rule = true;
            } else {
                current.push(line);
                if !trimmed.is_empty() {
                    after_rule = false;
                }
            }
        }
        parts.push(current.join("\n"));

        parts
            .iter()
            .map(|p| trim_blank(p))
            .filter(|p| !p.is_empty())
            .enumerate()
            .map(|(i, content)| {
                let role = if i % 2 == 0 {
                    Role::Assistant
                } else {
                    Role::User
                };
                Block::new(role, content)
            })
            .collect()
    }
}
