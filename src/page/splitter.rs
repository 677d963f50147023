//! Headline/body splitting of a comment subtree
//!
//! A job comment reads like "Company | Role | Location" followed by prose
//! paragraphs. The split walks the comment's immediate children in document
//! order: everything before the first `<p>` is headline material (bare text
//! and link text), everything from that `<p>` onward is body. `<div>`
//! children are quoted-reply containers and are skipped entirely.

use crate::page::node::PageNode;

/// Splits a comment subtree into (headline, body)
///
/// A comment with no paragraph child yields the entire content as headline
/// and an empty body. Both sides are space-joined and trimmed.
pub fn split(comment: &PageNode) -> (String, String) {
    let mut headline_parts: Vec<String> = Vec::new();
    let mut body_parts: Vec<String> = Vec::new();
    let mut found_paragraph = false;

    for child in comment.children() {
        if child.is_element("div") {
            continue;
        }

        if child.is_element("p") {
            found_paragraph = true;
        }

        if !found_paragraph {
            // Headline phase: bare text runs and link text only
            match child {
                PageNode::Text(text) => headline_parts.push(text.clone()),
                node if node.is_element("a") => headline_parts.push(node.text_content()),
                _ => {}
            }
        } else {
            body_parts.push(child.text_content());
        }
    }

    let headline = headline_parts.join(" ").trim().to_string();
    let body = body_parts.join(" ").trim().to_string();

    (headline, body)
}
