//! Comment scanner.
//!
//! A single forward pass over the text that finds comments and blank-line
//! runs while skipping over string literals and template literals. Template
//! substitution slices (`${ ... }`) are rescanned recursively, so comments
//! inside them are found and a `}` belonging to nested code does not end
//! the slice early.
//!
//! The scanner only knows enough of the language to avoid misreading
//! comment-like or quote-like sequences. It never fails: unterminated
//! strings and comments run to the end of the text.

use super::lexical::{is_line_terminator, is_whitespace};
use crate::span::Span;
use serde::Serialize;
use std::ops::AddAssign;

/// Counters collected during one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Line comments removed (always all of them)
    pub line_comments_removed: usize,
    /// Block comments the predicate chose to remove
    pub block_comments_removed: usize,
    /// Block comments the predicate chose to keep
    pub block_comments_kept: usize,
    /// Runs of blank lines collapsed
    pub blank_runs_collapsed: usize,
}

impl ScanStats {
    /// Total comments removed, line and block.
    #[must_use]
    pub fn comments_removed(&self) -> usize {
        self.line_comments_removed + self.block_comments_removed
    }
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, other: Self) {
        self.line_comments_removed += other.line_comments_removed;
        self.block_comments_removed += other.block_comments_removed;
        self.block_comments_kept += other.block_comments_kept;
        self.blank_runs_collapsed += other.blank_runs_collapsed;
    }
}

/// Spans to remove from one text, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentScan {
    /// Non-overlapping removal spans
    pub removals: Vec<Span>,
    /// What the scan found
    pub stats: ScanStats,
}

/// Scan `code` for comments and blank-line runs.
///
/// `should_remove` sees the literal text of every block comment, markers
/// included, and decides whether it goes. Line comments are always removed.
pub fn scan_comments<P>(code: &str, should_remove: P) -> CommentScan
where
    P: FnMut(&str) -> bool,
{
    let mut scanner = Scanner {
        code,
        should_remove,
        removals: Vec::new(),
        stats: ScanStats::default(),
        cleared: None,
    };
    scanner.scan(0, Context::Code);

    CommentScan {
        removals: scanner.removals,
        stats: scanner.stats,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Top-level code
    Code,
    /// Inside `${ ... }`; a balancing `}` returns to the template
    Substitution,
}

/// End of the most recent removal.
#[derive(Debug, Clone, Copy)]
struct Cleared {
    end: usize,
    /// Only indentation was left before `end` on its line
    from_line_start: bool,
}

struct Scanner<'a, P> {
    code: &'a str,
    should_remove: P,
    removals: Vec<Span>,
    stats: ScanStats,
    cleared: Option<Cleared>,
}

impl<P> Scanner<'_, P>
where
    P: FnMut(&str) -> bool,
{
    /// Scan from `pos` and return where scanning stopped: the end of the
    /// text, or just past the `}` closing a substitution slice.
    fn scan(&mut self, mut pos: usize, context: Context) -> usize {
        let mut depth = 0usize;

        while let Some(ch) = self.char_at(pos) {
            match ch {
                '/' => {
                    pos = match self.byte_at(pos + 1) {
                        Some(b'/') => self.line_comment(pos),
                        Some(b'*') => self.block_comment(pos),
                        _ => pos + 1,
                    };
                }
                '"' | '\'' => pos = self.skip_string(pos, ch),
                '`' => pos = self.skip_template(pos),
                '{' if context == Context::Substitution => {
                    depth += 1;
                    pos += 1;
                }
                '}' if context == Context::Substitution => {
                    pos += 1;
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return pos;
                    }
                }
                _ => {
                    pos += ch.len_utf8();
                    if is_line_terminator(ch) {
                        pos = self.collapse_blank_lines(pos, ch);
                    }
                }
            }
        }

        pos
    }

    fn line_comment(&mut self, slash: usize) -> usize {
        let start = self.trim_whitespace_before(slash);
        let line_start = self.at_line_start(start);

        let mut end = self.line_end(slash + 2);
        if line_start {
            end = self.skip_line_terminator(end);
        }

        self.remove(start, end, line_start);
        self.stats.line_comments_removed += 1;
        end
    }

    fn block_comment(&mut self, slash: usize) -> usize {
        let code = self.code;
        let end = code[slash + 2..]
            .find("*/")
            .map_or(code.len(), |i| slash + 2 + i + 2);

        if !(self.should_remove)(&code[slash..end]) {
            self.stats.block_comments_kept += 1;
            return end;
        }

        let before = self.trim_whitespace_before(slash);
        let line_start = self.at_line_start(before);
        let after = self.skip_whitespace(end);

        let span = match self.char_at(after) {
            // Alone on its line: the whole line goes.
            Some(c) if is_line_terminator(c) && line_start => {
                Span::new(before, self.skip_line_terminator(after))
            }
            // Trailing code comment: keep the code and the terminator.
            Some(c) if is_line_terminator(c) => Span::new(before, after),
            None => Span::new(before, after),
            // Leading code comment: keep the indentation.
            Some(_) if line_start => Span::new(slash, after),
            Some(_) => Span::new(before, end),
        };

        self.remove(span.start, span.end, line_start);
        self.stats.block_comments_removed += 1;
        span.end
    }

    fn skip_string(&self, quote_pos: usize, quote: char) -> usize {
        let mut pos = quote_pos + 1;
        while let Some(ch) = self.char_at(pos) {
            match ch {
                '\\' => pos = self.skip_escape(pos),
                c if c == quote => return pos + 1,
                _ => pos += ch.len_utf8(),
            }
        }
        pos
    }

    fn skip_template(&mut self, backtick: usize) -> usize {
        let mut pos = backtick + 1;
        while let Some(ch) = self.char_at(pos) {
            match ch {
                '\\' => pos = self.skip_escape(pos),
                '`' => return pos + 1,
                '$' if self.byte_at(pos + 1) == Some(b'{') => {
                    pos = self.scan(pos + 1, Context::Substitution);
                }
                _ => pos += ch.len_utf8(),
            }
        }
        pos
    }

    /// Turn the run of line terminators following the one just consumed
    /// into a single removal. `pos` points past `terminator`.
    fn collapse_blank_lines(&mut self, mut pos: usize, terminator: char) -> usize {
        if terminator == '\r' && self.byte_at(pos) == Some(b'\n') {
            pos += 1;
        }

        let start = pos;
        while let Some(c) = self.char_at(pos).filter(|&c| is_line_terminator(c)) {
            pos += c.len_utf8();
        }

        if pos > start {
            self.remove(start, pos, true);
            self.stats.blank_runs_collapsed += 1;
        }
        pos
    }

    fn remove(&mut self, start: usize, end: usize, from_line_start: bool) {
        if start < end {
            self.removals.push(Span::new(start, end));
            self.cleared = Some(Cleared {
                end,
                from_line_start,
            });
        }
    }

    /// Step back over horizontal whitespace, never into an earlier removal.
    fn trim_whitespace_before(&self, mut pos: usize) -> usize {
        let floor = self.cleared.map_or(0, |c| c.end);
        while pos > floor {
            match self.char_before(pos) {
                Some(c) if is_whitespace(c) => pos -= c.len_utf8(),
                _ => break,
            }
        }
        pos
    }

    fn skip_whitespace(&self, mut pos: usize) -> usize {
        while let Some(c) = self.char_at(pos).filter(|&c| is_whitespace(c)) {
            pos += c.len_utf8();
        }
        pos
    }

    /// Whether `pos` begins a line, looking through a removal that left
    /// nothing but indentation behind.
    fn at_line_start(&self, pos: usize) -> bool {
        if let Some(cleared) = self.cleared {
            if cleared.end == pos && cleared.from_line_start {
                return true;
            }
        }
        self.char_before(pos).map_or(true, is_line_terminator)
    }

    fn line_end(&self, from: usize) -> usize {
        self.code[from..]
            .find(is_line_terminator)
            .map_or(self.code.len(), |i| from + i)
    }

    /// Step over one line terminator at `pos`, CRLF counting as one.
    fn skip_line_terminator(&self, pos: usize) -> usize {
        match self.char_at(pos) {
            Some('\r') if self.byte_at(pos + 1) == Some(b'\n') => pos + 2,
            Some(c) if is_line_terminator(c) => pos + c.len_utf8(),
            _ => pos,
        }
    }

    fn skip_escape(&self, backslash: usize) -> usize {
        let next = backslash + 1;
        next + self.char_at(next).map_or(0, char::len_utf8)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.code.get(pos..).and_then(|rest| rest.chars().next())
    }

    fn char_before(&self, pos: usize) -> Option<char> {
        self.code.get(..pos).and_then(|head| head.chars().next_back())
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.code.as_bytes().get(pos).copied()
    }
}
