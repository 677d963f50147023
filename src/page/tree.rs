//! Parsed page queries
//!
//! `PageTree` wraps a parsed HTML document and exposes the handful of
//! queries the paginators need. Missing optional elements come back as
//! None or an empty list; deciding whether that is fatal is the caller's
//! job.
//!
//! Site markup contract: comment rows are `tr.comtr`, each carrying its
//! indent in `td.ind[indent]`; the comment text block is `span.commtext`;
//! listing pages link onward via an anchor whose visible text is "More".

use crate::page::node::PageNode;
use scraper::{ElementRef, Html, Node, Selector};

/// Indent attribute value that marks a direct reply to the thread root
pub const TOP_LEVEL_INDENT: &str = "0";

/// One comment row from a thread page
#[derive(Debug, Clone)]
pub struct CommentRow {
    /// Value of the row's indent attribute, if present
    pub indent: Option<String>,

    /// The comment text subtree, if the row has one
    pub comment: Option<PageNode>,
}

impl CommentRow {
    /// Returns true if this row is a direct reply to the thread root
    pub fn is_top_level(&self) -> bool {
        self.indent.as_deref() == Some(TOP_LEVEL_INDENT)
    }
}

/// A parsed page with selector-based queries
pub struct PageTree {
    doc: Html,
}

impl PageTree {
    /// Parses raw HTML into a queryable page
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Returns the page title text, trimmed; None if absent or empty
    pub fn title_text(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.doc
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Returns the page's comment rows in document order
    pub fn comment_rows(&self) -> Vec<CommentRow> {
        let mut rows = Vec::new();

        let row_selector = match Selector::parse("tr.comtr") {
            Ok(s) => s,
            Err(_) => return rows,
        };
        let indent_selector = match Selector::parse("td.ind") {
            Ok(s) => s,
            Err(_) => return rows,
        };
        let comment_selector = match Selector::parse("span.commtext") {
            Ok(s) => s,
            Err(_) => return rows,
        };

        for row in self.doc.select(&row_selector) {
            let indent = row
                .select(&indent_selector)
                .next()
                .and_then(|td| td.value().attr("indent"))
                .map(|v| v.to_string());

            let comment = row
                .select(&comment_selector)
                .next()
                .map(|span| lift_element(&span));

            rows.push(CommentRow { indent, comment });
        }

        rows
    }

    /// Returns the href of the "More" navigation anchor, if present
    pub fn more_link(&self) -> Option<String> {
        let selector = Selector::parse("a[href]").ok()?;
        self.doc
            .select(&selector)
            .find(|a| a.text().collect::<String>() == "More")
            .and_then(|a| a.value().attr("href"))
            .map(|href| href.to_string())
    }

    /// Returns hrefs of anchors whose visible text contains `marker`, in order
    pub fn listing_anchors(&self, marker: &str) -> Vec<String> {
        let selector = match Selector::parse("a[href]") {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        self.doc
            .select(&selector)
            .filter(|a| a.text().collect::<String>().contains(marker))
            .filter_map(|a| a.value().attr("href"))
            .map(|href| href.to_string())
            .collect()
    }
}

/// Lifts a parsed element into an owned `PageNode` subtree
fn lift_element(element: &ElementRef) -> PageNode {
    let value = element.value();
    let attrs = value
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut children = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => children.push(PageNode::Text(text.to_string())),
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    children.push(lift_element(&child_ref));
                }
            }
            // Comments, doctypes etc. carry no comment text
            _ => {}
        }
    }

    PageNode::Element {
        tag: value.name().to_string(),
        attrs,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREAD_PAGE: &str = r#"
        <html><head><title>Ask HN: Who is hiring? (June 2024) | Hacker News</title></head>
        <body><table>
        <tr class="comtr"><td class="ind" indent="0"></td>
            <td><span class="commtext c00">Acme Corp <a href="https://acme.example">acme.example</a><p>We are hiring.</p></span></td></tr>
        <tr class="comtr"><td class="ind" indent="1"></td>
            <td><span class="commtext c00">A reply.</span></td></tr>
        </table></body></html>
    "#;

    #[test]
    fn test_title_text() {
        let tree = PageTree::parse(THREAD_PAGE);
        assert_eq!(
            tree.title_text(),
            Some("Ask HN: Who is hiring? (June 2024) | Hacker News".to_string())
        );
    }

    #[test]
    fn test_no_title() {
        let tree = PageTree::parse("<html><head></head><body></body></html>");
        assert_eq!(tree.title_text(), None);
    }

    #[test]
    fn test_empty_title_is_none() {
        let tree = PageTree::parse("<html><head><title>  </title></head><body></body></html>");
        assert_eq!(tree.title_text(), None);
    }

    #[test]
    fn test_comment_rows_and_indent() {
        let tree = PageTree::parse(THREAD_PAGE);
        let rows = tree.comment_rows();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_top_level());
        assert!(!rows[1].is_top_level());
        assert_eq!(rows[1].indent.as_deref(), Some("1"));
    }

    #[test]
    fn test_comment_subtree_lifted() {
        let tree = PageTree::parse(THREAD_PAGE);
        let rows = tree.comment_rows();
        let comment = rows[0].comment.as_ref().unwrap();

        assert!(comment.is_element("span"));
        assert_eq!(comment.children().len(), 3);
        assert!(comment.children()[1].is_element("a"));
        assert!(comment.children()[2].is_element("p"));
    }

    #[test]
    fn test_row_without_indent_attribute() {
        let html = r#"<html><body><table>
            <tr class="comtr"><td class="ind"></td>
            <td><span class="commtext">orphan</span></td></tr>
            </table></body></html>"#;
        let tree = PageTree::parse(html);
        let rows = tree.comment_rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].indent, None);
        assert!(!rows[0].is_top_level());
    }

    #[test]
    fn test_more_link() {
        let html = r#"<html><body>
            <a href="submitted?id=whoishiring&next=1">More</a>
            </body></html>"#;
        let tree = PageTree::parse(html);
        assert_eq!(
            tree.more_link(),
            Some("submitted?id=whoishiring&next=1".to_string())
        );
    }

    #[test]
    fn test_more_link_requires_exact_text() {
        let html = r#"<html><body><a href="x">More results</a></body></html>"#;
        let tree = PageTree::parse(html);
        assert_eq!(tree.more_link(), None);
    }

    #[test]
    fn test_no_more_link() {
        let tree = PageTree::parse("<html><body></body></html>");
        assert_eq!(tree.more_link(), None);
    }

    #[test]
    fn test_listing_anchors_match_and_order() {
        let html = r#"<html><body>
            <a href="item?id=1">Ask HN: Who is hiring? (June 2024)</a>
            <a href="item?id=2">Ask HN: Freelancer? Seeking freelancer?</a>
            <a href="item?id=3">Ask HN: Who is hiring? (May 2024)</a>
            </body></html>"#;
        let tree = PageTree::parse(html);
        let anchors = tree.listing_anchors("Ask HN: Who is hiring?");

        assert_eq!(anchors, vec!["item?id=1", "item?id=3"]);
    }

    #[test]
    fn test_listing_anchors_empty_when_no_match() {
        let tree = PageTree::parse("<html><body><a href=\"x\">Other</a></body></html>");
        assert!(tree.listing_anchors("Ask HN: Who is hiring?").is_empty());
    }
}
