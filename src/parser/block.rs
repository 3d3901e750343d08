use crate::conversation::Role;

/// One message recovered from a transcript, before it becomes a tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub role: Role,
    pub content: String,
}

impl Block {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
