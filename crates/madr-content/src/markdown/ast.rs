//! Markdown node tree.
//!
//! `pulldown-cmark` produces a flat stream of start/end events. This module
//! folds that stream into a small, closed tree of [`Node`]s that only keeps
//! the distinctions MADR extraction cares about: headings, lists, list
//! items, and "everything else that carries text".
//!
//! Inline formatting (emphasis, strong, links, images, strikethrough) is
//! transparent: its text is spliced into the enclosing block, so
//! `# Use **plain** JUnit5` becomes a heading with the text
//! `Use plain JUnit5`.
//!
//! # Example
//!
//! ```rust
//! use madr_content::markdown::ast::{parse_ast, Node};
//!
//! let nodes = parse_ast("# Title\n\n## Options\n\n* A\n* B\n");
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[0].heading_level(), Some(1));
//! assert_eq!(nodes[0].flatten_text(), "Title");
//!
//! let Node::List { items, .. } = &nodes[2] else {
//!     unreachable!("expected a list");
//! };
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[1].flatten_text(), "B");
//! ```

use pulldown_cmark::{Event, Options, Parser, Tag};

/// One element of a parsed Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `#` through `######` heading.
    Heading {
        /// Heading level, 1 through 6.
        level: u8,
        /// Inline text of the heading.
        children: Vec<Node>,
    },
    /// Bullet or ordered list. Every item is a [`Node::ListItem`].
    List {
        /// Whether the list is numbered.
        ordered: bool,
        /// The list items, in document order.
        items: Vec<Node>,
    },
    /// A single list item.
    ListItem {
        /// Inline text, paragraphs, or nested lists.
        children: Vec<Node>,
    },
    /// Paragraphs, block quotes, code blocks, tables, and any other block
    /// that carries text.
    TextBlock {
        /// Inline text or nested blocks.
        children: Vec<Node>,
    },
    /// A run of inline text.
    Text(String),
}

impl Node {
    /// Direct child nodes. Empty for [`Node::Text`].
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading { children, .. }
            | Node::ListItem { children }
            | Node::TextBlock { children } => children,
            Node::List { items, .. } => items,
            Node::Text(_) => &[],
        }
    }

    /// The node's own raw text. Only [`Node::Text`] carries any.
    pub fn raw_text(&self) -> &str {
        match self {
            Node::Text(text) => text,
            Node::Heading { .. }
            | Node::List { .. }
            | Node::ListItem { .. }
            | Node::TextBlock { .. } => "",
        }
    }

    /// Heading level, if this node is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Node::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Whether this node is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List { .. })
    }

    /// Visible text of the node and all its descendants.
    ///
    /// Leaf text is concatenated depth-first with no separators, and the
    /// result is trimmed once, at the top level. Line breaks inside a
    /// paragraph survive as `\n`.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out.trim().to_string()
    }

    /// Text of a list item as an entry: the non-empty flattened children
    /// joined by newlines, trimmed.
    ///
    /// A nested list counts as one child, so `* a` with sub-items `b` and
    /// `c` yields `"a\nbc"`.
    pub fn item_text(&self) -> String {
        self.children()
            .iter()
            .map(Node::flatten_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            _ => self.children().iter().for_each(|child| child.write_text(out)),
        }
    }
}

/// Free-function form of [`Node::flatten_text`].
pub fn flatten_text(node: &Node) -> String {
    node.flatten_text()
}

/// Parse Markdown into its top-level nodes.
///
/// Tables, strikethrough, and task lists are enabled so that documents using
/// those GitHub extensions still produce sensible text.
pub fn parse_ast(markdown: &str) -> Vec<Node> {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(markdown, options) {
        builder.push(event);
    }
    builder.finish()
}

// ============================================================================
// Event folding
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum FrameKind {
    Root,
    Heading(u8),
    List { ordered: bool },
    Item,
    Block,
    Inline,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    children: Vec<Node>,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// Stack of open containers. Every `End` event closes the innermost frame,
/// which relies on the parser emitting well-nested events.
struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::new(FrameKind::Root)],
        }
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(frame_kind(&tag)),
            Event::End(_) => self.close(),
            Event::Text(text)
            | Event::Code(text)
            | Event::Html(text)
            | Event::InlineHtml(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => self.current().push_text(&text),
            Event::SoftBreak | Event::HardBreak => self.current().push_text("\n"),
            other => log::trace!("Ignoring markdown event: {other:?}"),
        }
    }

    fn open(&mut self, kind: FrameKind) {
        self.stack.push(Frame::new(kind));
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            log::warn!("Unbalanced markdown end event ignored");
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let parent = self.current();
        match frame.kind {
            FrameKind::Inline => {
                for child in frame.children {
                    match child {
                        Node::Text(text) => parent.push_text(&text),
                        block => parent.children.push(block),
                    }
                }
            }
            FrameKind::Heading(level) => parent.children.push(Node::Heading {
                level,
                children: frame.children,
            }),
            FrameKind::List { ordered } => parent.children.push(Node::List {
                ordered,
                items: frame.children,
            }),
            FrameKind::Item => parent.children.push(Node::ListItem {
                children: frame.children,
            }),
            FrameKind::Block | FrameKind::Root => parent.children.push(Node::TextBlock {
                children: frame.children,
            }),
        }
    }

    fn current(&mut self) -> &mut Frame {
        // The root frame is never popped.
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn finish(mut self) -> Vec<Node> {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack.pop().map(|root| root.children).unwrap_or_default()
    }
}

fn frame_kind(tag: &Tag<'_>) -> FrameKind {
    match tag {
        Tag::Heading { level, .. } => FrameKind::Heading(*level as u8),
        Tag::List(start) => FrameKind::List {
            ordered: start.is_some(),
        },
        Tag::Item => FrameKind::Item,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. } => {
            FrameKind::Inline
        }
        _ => FrameKind::Block,
    }
}

// ============================================================================
// Tests
// ============================================================================
