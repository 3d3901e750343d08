mod node;

#[cfg(test)]
mod tests;

pub use node::{ChatNode, Role};
