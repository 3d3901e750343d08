use crate::topics::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Short tag for list views
    pub fn short_name(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Asst",
        }
    }
}

/// A message in a branching conversation; children are alternative continuations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatNode {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub parent_id: Option<String>,
    pub children: Vec<ChatNode>,
    pub created_at: DateTime<Utc>,
}

impl ChatNode {
    pub fn new(
        id: impl Into<String>,
        role: Role,
        content: impl Into<String>,
        parent_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            parent_id,
            children: Vec::new(),
            created_at,
        }
    }

    /// Depth-first lookup
    pub fn find(&self, id: &str) -> Option<&ChatNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Ids from this node down to `target`, inclusive
    pub fn branch_path_to(&self, target: &str) -> Option<Vec<String>> {
        if self.id == target {
            return Some(vec![self.id.clone()]);
        }

        self.children.iter().find_map(|child| {
            child.branch_path_to(target).map(|mut path| {
                path.insert(0, self.id.clone());
                path
            })
        })
    }

    /// Resolve a path of ids to nodes, skipping ids not in the tree
    pub fn linear_thread(&self, path: &[String]) -> Vec<&ChatNode> {
        path.iter().filter_map(|id| self.find(id)).collect()
    }

    /// Distance from this node to `id`; this node is depth 0
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        if self.id == id {
            return Some(0);
        }
        self.children
            .iter()
            .find_map(|child| child.depth_of(id))
            .map(|d| d + 1)
    }

    /// Copy of the tree with `child` appended under `parent_id`.
    ///
    /// An unknown parent yields an unchanged copy.
    pub fn with_child(&self, parent_id: &str, child: ChatNode) -> ChatNode {
        let mut root = self.clone();
        if let Some(parent) = root.find_mut(parent_id) {
            parent.children.push(child);
        }
        root
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut ChatNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Pre-order walk, children in order
    pub fn flatten(&self) -> Vec<&ChatNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&ChatNode> = vec![self];

        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }

        out
    }

    /// Every message in the tree as clustering input
    pub fn documents(&self) -> Vec<Document> {
        self.flatten()
            .into_iter()
            .map(|n| Document::new(n.id.clone(), n.content.clone()))
            .collect()
    }
}
