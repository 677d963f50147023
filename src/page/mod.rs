//! Page parsing: document queries, the typed comment node tree, and the
//! headline/body splitter

mod node;
pub mod splitter;
mod tree;

pub use node::PageNode;
pub use tree::{CommentRow, PageTree, TOP_LEVEL_INDENT};
