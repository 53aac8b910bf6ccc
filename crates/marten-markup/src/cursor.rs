//! Source cursor over the raw markup buffer.
//!
//! The cursor owns the character buffer and a read position with
//! line/column bookkeeping. On top of the `peek`/`consume`/`rewind`
//! primitives it provides the scanning operations the tag scanner and tree
//! builder are built from, plus a single-slot checkpoint for rollback when
//! a structural inconsistency is detected downstream.

/// A saved cursor position usable for rollback on detected failure.
///
/// The slot holds one `(offset, line, column)` triple; saving again
/// overwrites it. No caller needs more than one level of rollback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Checkpoint {
    pos: usize,
    line: usize,
    column: usize,
}

/// Character cursor with line/column tracking and checkpoint/rollback.
///
/// The buffer is materialized once per parser instance and reused across
/// parse calls; `reset` repositions the cursor without touching it.
/// Offsets count characters, not bytes.
#[derive(Debug, Clone)]
pub struct Cursor {
    /// The full source, as characters for O(1) positional access.
    chars: Vec<char>,
    /// Current read offset into `chars`.
    pos: usize,
    /// 0-based line of the character at `pos`.
    line: usize,
    /// 0-based column of the character at `pos`.
    column: usize,
    /// Last saved position. A single slot: saves overwrite, never push.
    checkpoint: Checkpoint,
}

impl Cursor {
    /// Create a cursor over the given source, positioned at the start.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            pos: 0,
            line: 0,
            column: 0,
            checkpoint: Checkpoint::default(),
        }
    }

    /// Return the next character without advancing, or `None` at end of
    /// input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume and return the next character, or `None` at end of input.
    ///
    /// A newline increments the line and resets the column to 0; any other
    /// character increments the column.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Move the read offset back by `n` characters, clamped at the start
    /// of the buffer.
    ///
    /// Line and column are walked back consistently, so diagnostics stay
    /// accurate after a putback even across newlines.
    pub fn rewind(&mut self, n: usize) {
        let target = self.pos.saturating_sub(n);

        while self.pos > target {
            self.pos -= 1;
            match self.chars.get(self.pos) {
                Some('\n') => {
                    self.line = self.line.saturating_sub(1);
                    // Column of the newline itself: its distance from the
                    // start of the line it terminates.
                    let line_start = self
                        .chars
                        .iter()
                        .take(self.pos)
                        .rposition(|&c| c == '\n')
                        .map_or(0, |p| p + 1);
                    self.column = self.pos - line_start;
                }
                _ => self.column = self.column.saturating_sub(1),
            }
        }
    }

    /// Whether the cursor has consumed the entire buffer.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Current character offset from the start of the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Current 1-based line number, for diagnostics.
    #[must_use]
    pub const fn current_line(&self) -> usize {
        self.line + 1
    }

    /// Current 0-based column, for diagnostics.
    #[must_use]
    pub const fn current_column(&self) -> usize {
        self.column
    }

    /// Reposition the cursor at the start of the buffer.
    ///
    /// The buffer itself is kept; a new parse over the same source never
    /// re-reads it from storage.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 0;
        self.column = 0;
    }

    /// Record the current `(offset, line, column)` triple in the checkpoint
    /// slot, overwriting any previous save.
    pub fn save_checkpoint(&mut self) {
        self.checkpoint = Checkpoint {
            pos: self.pos,
            line: self.line,
            column: self.column,
        };
    }

    /// Unconditionally reset the cursor to the last saved checkpoint.
    pub fn restore_checkpoint(&mut self) {
        self.pos = self.checkpoint.pos;
        self.line = self.checkpoint.line;
        self.column = self.checkpoint.column;
    }
}

// =============================================================================
// Scanning Primitives
// =============================================================================

impl Cursor {
    /// Consume characters while the predicate holds or input ends.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            let _ = self.consume();
        }
    }

    /// Consume characters until a `delimiter` is consumed, or input ends.
    ///
    /// The delimiter itself is consumed.
    pub fn skip_until(&mut self, delimiter: char) {
        self.skip_while(|c| c != delimiter);
        let _ = self.consume();
    }

    /// Consume a maximal run of exactly `target`.
    ///
    /// If a non-`target` lookahead character was consumed to detect the end
    /// of the run, it is rewound, so the cursor always sits just after the
    /// run and never over-consumes.
    pub fn skip_run(&mut self, target: char) {
        while let Some(c) = self.consume() {
            if c != target {
                self.rewind(1);
                break;
            }
        }
    }

    /// Skip insignificant whitespace: a maximal run of spaces, then,
    /// independently, a maximal run of newlines.
    ///
    /// Exactly two sequential passes, not a fixpoint: `"  \n  "` followed
    /// by more spaces leaves the trailing spaces in place for this call.
    pub fn skip_insignificant_whitespace(&mut self) {
        if self.peek() == Some(' ') {
            self.skip_run(' ');
        }

        if self.peek() == Some('\n') {
            self.skip_run('\n');
        }
    }
}
