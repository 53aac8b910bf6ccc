//! Tree construction over the source cursor.
//!
//! The builder walks the input once, maintaining an explicit work-stack of
//! open elements instead of recursing, so nesting depth is bounded
//! deterministically by [`MAX_NESTING_DEPTH`] rather than by the call
//! stack. Each stack frame corresponds to one element whose closing tag has
//! not been seen yet.

use marten_common::warning::warn_once;
use marten_dom::{DocumentTree, NodeId};

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Maximum element nesting depth the builder accepts.
///
/// The work-stack, root frame included, never grows past this; deeper input
/// fails with [`ParseError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 256;

/// One open element on the builder's work-stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// The element being filled in.
    node: NodeId,
    /// Whether a text run was already accumulated at this nesting level.
    /// Later runs at the same level skip insignificant whitespace first;
    /// the distinction affects nothing but that skipping.
    first_text_seen: bool,
}

/// Markup parser: builds a [`DocumentTree`] from tag-delimited input.
///
/// The parser caches its source buffer, so invoking [`parse`] again reuses
/// it and rebuilds the tree from scratch. Attribute-like content between a
/// tag name and its `>` is recognized and discarded, never stored; that is
/// a documented limitation of the grammar this parser accepts.
///
/// [`parse`]: MarkupParser::parse
#[derive(Debug, Clone)]
pub struct MarkupParser {
    /// Cursor over the cached source buffer.
    cursor: Cursor,
    /// Sticky error state. Once set, every core operation short-circuits
    /// and re-returns it until a fresh parse call begins.
    error: Option<ParseError>,
    /// The tree being built. Rebuilt from scratch on every parse call;
    /// kept accessible (possibly partial) after a failed parse.
    tree: DocumentTree,
}

impl MarkupParser {
    /// Create a parser over the given source.
    ///
    /// The buffer is materialized here once; nothing is parsed until
    /// [`parse`](MarkupParser::parse) is called.
    #[must_use]
    pub fn new(source: &str) -> Self {
        MarkupParser {
            cursor: Cursor::new(source),
            error: None,
            tree: DocumentTree::new(),
        }
    }

    /// Parse the cached source into a fresh document tree.
    ///
    /// A fresh call begins a new session: the sticky error from any
    /// previous session is discarded, the cursor is repositioned at the
    /// start of the buffer, and a prior tree is dropped.
    ///
    /// # Errors
    ///
    /// Returns the structural failure that aborted the parse. The
    /// partially built tree remains accessible through
    /// [`document`](MarkupParser::document); nothing already attached is
    /// rolled back.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.error = None;
        self.cursor.reset();
        self.save_checkpoint();
        self.tree = DocumentTree::new();

        self.build_tree()
    }

    /// The document tree from the most recent parse, possibly partial if
    /// that parse failed.
    #[must_use]
    pub fn document(&self) -> &DocumentTree {
        &self.tree
    }

    /// The sticky error state: `None` means clean.
    #[must_use]
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Record the current cursor position in the checkpoint slot, but only
    /// if no error is currently set. Restoring is unconditional.
    fn save_checkpoint(&mut self) {
        if self.error.is_none() {
            self.cursor.save_checkpoint();
        }
    }

    /// Record a structural failure: roll the cursor back to the last
    /// checkpoint, build the diagnostic at the restored position (near the
    /// offending tag), log it, and freeze the session.
    fn parsing_error(&mut self, build: impl FnOnce(usize, usize) -> ParseError) -> ParseError {
        self.cursor.restore_checkpoint();

        let err = build(self.cursor.current_line(), self.cursor.current_column());
        warn_once("Markup Parser", &err.to_string());
        self.error = Some(err.clone());

        err
    }
}

// =============================================================================
// Tag Name Scanner
// =============================================================================

impl MarkupParser {
    /// Consume a tag's name up to its terminating delimiter.
    ///
    /// Characters accumulate until a consumed `>`, space, or newline; the
    /// terminator is excluded from the name. If the terminator was a space
    /// or newline, everything up to and including the tag's closing `>` is
    /// skipped as well, which is how attribute-like content is discarded
    /// without being parsed.
    ///
    /// Always succeeds: if input ends before a terminator, whatever
    /// accumulated (possibly nothing) is the name. A checkpoint is saved
    /// before scanning begins so a caller detecting a downstream
    /// inconsistency can roll the cursor back to just before this tag.
    pub fn scan_tag_name(&mut self) -> String {
        self.save_checkpoint();

        let mut name = String::new();
        while let Some(c) = self.cursor.consume() {
            match c {
                '>' => return name,
                ' ' | '\n' => {
                    self.cursor.skip_until('>');
                    return name;
                }
                _ => name.push(c),
            }
        }

        name
    }
}

// =============================================================================
// Tree Builder
// =============================================================================

impl MarkupParser {
    /// Build the document tree by walking the whole input once.
    ///
    /// The work-stack holds one frame per open element, the root frame at
    /// the bottom. Consuming a `<` dispatches between a closing tag (pop)
    /// and a child element (push); anything else is a text run accumulated
    /// into the innermost open element.
    fn build_tree(&mut self) -> Result<(), ParseError> {
        let mut stack = vec![Frame {
            node: self.tree.root(),
            first_text_seen: false,
        }];
        self.cursor.skip_insignificant_whitespace();

        loop {
            // Sticky error state short-circuits every further step.
            if let Some(err) = self.error.clone() {
                return Err(err);
            }

            let Some(&Frame {
                node,
                first_text_seen,
            }) = stack.last()
            else {
                // The root itself was closed by a bare `</>`; whatever input
                // remains is left unread.
                return Ok(());
            };

            let Some(c) = self.cursor.consume() else {
                break;
            };

            if c == '<' {
                self.cursor.skip_insignificant_whitespace();
                match self.cursor.peek() {
                    // A `<` followed only by insignificant whitespace and
                    // end of input ends the whole parse cleanly.
                    None => return Ok(()),

                    Some('/') => {
                        let _ = self.cursor.consume();
                        let found = self.scan_tag_name();
                        let expected = self.tree.tag(node).unwrap_or_default().to_string();

                        if found != expected {
                            return Err(self.parsing_error(|line, column| {
                                ParseError::TagMismatch {
                                    expected,
                                    found,
                                    line,
                                    column,
                                }
                            }));
                        }

                        // Element complete; unwind to the enclosing frame.
                        let _ = stack.pop();
                    }

                    Some(_) => {
                        let child = self.tree.alloc("");
                        self.tree.append_child(node, child);

                        let name = self.scan_tag_name();
                        self.tree.set_tag(child, &name);

                        if stack.len() >= MAX_NESTING_DEPTH {
                            return Err(self.parsing_error(|line, column| {
                                ParseError::NestingTooDeep {
                                    limit: MAX_NESTING_DEPTH,
                                    line,
                                    column,
                                }
                            }));
                        }

                        stack.push(Frame {
                            node: child,
                            first_text_seen: false,
                        });
                        self.cursor.skip_insignificant_whitespace();
                    }
                }
            } else {
                self.cursor.rewind(1);

                if first_text_seen {
                    self.cursor.skip_insignificant_whitespace();
                } else if let Some(frame) = stack.last_mut() {
                    frame.first_text_seen = true;
                }

                self.accumulate_text(node);
            }
        }

        // Input exhausted. Open elements above the root mean the document
        // was cut off mid-element.
        if stack.len() > 1
            && let Some(&Frame { node, .. }) = stack.last()
        {
            let tag = self.tree.tag(node).unwrap_or_default().to_string();
            return Err(self.parsing_error(|line, column| ParseError::UnterminatedElement {
                tag,
                line,
                column,
            }));
        }

        Ok(())
    }

    /// Accumulate one text run into `node`.
    ///
    /// Consumes until a `<`, which is rewound and ends the run; newlines
    /// are dropped; everything else is appended to the node's existing
    /// text, so separate runs concatenate with no separator.
    fn accumulate_text(&mut self, node: NodeId) {
        let mut run = String::new();

        while let Some(c) = self.cursor.consume() {
            match c {
                '<' => {
                    self.cursor.rewind(1);
                    break;
                }
                '\n' => {}
                _ => run.push(c),
            }
        }

        self.tree.append_text(node, &run);
    }
}

// =============================================================================
// Debug Printing
// =============================================================================

/// Print an indented rendition of the subtree rooted at `id`.
///
/// Read-only traversal for inspection: the tag (or `Document` for the
/// unnamed root), the node's accumulated text with spaces made visible,
/// then the children one level deeper.
pub fn print_tree(tree: &DocumentTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(node) = tree.get(id) {
        if node.tag.is_empty() {
            println!("{prefix}Document");
        } else {
            println!("{prefix}<{}>", node.tag);
        }

        if !node.text.is_empty() {
            let display = node.text.replace('\n', "\\n").replace(' ', "\u{00B7}");
            println!("{prefix}  \"{display}\"");
        }

        for &child_id in tree.children(id) {
            print_tree(tree, child_id, indent + 1);
        }
    }
}
