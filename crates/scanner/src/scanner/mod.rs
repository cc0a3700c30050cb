//! The token recognizer: acceptance-set-driven dispatch into one of three
//! finite-state scanning procedures.

use crate::cursor::Cursor;
use crate::token::{COMMENT_KINDS, TokenKind, TokenSet};


/// The supplemental token recognizer.
///
/// Carries no state between scan calls: creating a scanner, scanning, and
/// dropping it is equivalent to calling a pure function, and concurrent scans
/// against independent cursors are safe by construction. The serialization
/// hooks exist for hosts that persist scanner state across parses; they
/// round-trip zero bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scanner;

impl Scanner {
    /// Creates a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Serializes the scanner's state. Always empty.
    pub fn serialize(&self) -> &'static [u8] {
        &[]
    }

    /// Restores state previously produced by [`serialize`](Self::serialize).
    ///
    /// Nothing is ever serialized, so this is a no-op.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        debug_assert!(buffer.is_empty(), "scanner state is always zero bytes");
    }

    /// Attempts to recognize one content token at the cursor's position.
    ///
    /// On success the cursor's marked end denotes the exclusive end of the
    /// recognized body; the closing delimiter is left unconsumed for the
    /// grammar to tokenize separately. On `None` the caller falls back to its
    /// ordinary grammar-driven tokenization.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndf_scanner::{Scanner, StrCursor, TokenKind, TokenSet};
    ///
    /// // The grammar has consumed `/*` and asks for a comment body.
    /// let mut cursor = StrCursor::new(" contents */");
    /// let kind = Scanner::new().scan(&mut cursor, TokenSet::COMMENTS);
    /// assert_eq!(kind, Some(TokenKind::ClassicComment));
    /// assert_eq!(cursor.marked_text(), " contents ");
    /// ```
    #[instrument(name = "scan", level = "debug", skip_all, fields(accepted = ?accepted))]
    pub fn scan(&mut self, cursor: &mut impl Cursor, accepted: TokenSet) -> Option<TokenKind> {
        // Error recovery belongs to the host; bail before consuming anything
        // so it is never shadowed by speculative content matching.
        if accepted.contains(TokenSet::ERROR_SENTINEL) {
            trace!("error sentinel accepted, bailing");
            return None;
        }
        if accepted.intersects(TokenSet::COMMENTS) {
            return block_comment_body(cursor, accepted);
        }
        if accepted.contains(TokenSet::CURLY_BRACKETS) {
            return curly_body(cursor);
        }
        if accepted.intersects(TokenSet::STRINGS) {
            return string_body(cursor, accepted);
        }
        None
    }
}

/// States of the block comment body machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockCommentState {
    /// Consuming ordinary body characters.
    Body,
    /// Advanced past one `*`; consuming the rest of the run.
    Run,
}

/// Scans a block comment body until an asterisk run followed by the
/// terminator of an accepted comment kind.
///
/// The body greedily includes every `*` of a closing run except the last:
/// for `xy**/` the recognized body is `xy*`, leaving exactly `*/` for the
/// grammar to close the comment with.
fn block_comment_body(cursor: &mut impl Cursor, accepted: TokenSet) -> Option<TokenKind> {
    cursor.mark_end();
    let mut state = BlockCommentState::Body;
    loop {
        match state {
            BlockCommentState::Body => {
                if cursor.is_eof() {
                    trace!("eof in block comment body");
                    return None;
                }
                if cursor.first() == '*' {
                    // The mark stays put: a lone `*` before a terminator is
                    // not part of the body.
                    cursor.bump();
                    state = BlockCommentState::Run;
                } else {
                    cursor.bump();
                    cursor.mark_end();
                }
            }
            BlockCommentState::Run => {
                if cursor.first() == '*' {
                    // The mark trails the run's final star.
                    cursor.mark_end();
                    cursor.bump();
                } else {
                    for kind in COMMENT_KINDS {
                        if accepted.accepts(kind) && cursor.first() == kind.terminator() {
                            trace!(?kind, "comment terminator");
                            return Some(kind);
                        }
                    }
                    // Not a closing sequence: the run and the character after
                    // it are ordinary body content. That character is consumed
                    // without re-examination.
                    cursor.bump();
                    cursor.mark_end();
                    state = BlockCommentState::Body;
                }
            }
        }
    }
}

/// States of the curly-brace and quoted-string body machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DelimitedState {
    /// Consuming ordinary body characters.
    Body,
    /// Advanced past a `\`; the next character is consumed blindly and can
    /// neither terminate the body nor fail the scan.
    Escaped,
}

/// Scans a curly-brace body until an unescaped `}`.
///
/// Bodies may span lines; a leading `}` yields an empty body.
fn curly_body(cursor: &mut impl Cursor) -> Option<TokenKind> {
    let mut state = DelimitedState::Body;
    loop {
        match state {
            DelimitedState::Body => {
                if cursor.is_eof() {
                    trace!("eof in curly body");
                    return None;
                }
                match cursor.first() {
                    '\\' => {
                        cursor.bump();
                        state = DelimitedState::Escaped;
                    }
                    '}' => {
                        trace!("curly terminator");
                        return Some(TokenKind::CurlyBrackets);
                    }
                    _ => {
                        cursor.bump();
                        cursor.mark_end();
                    }
                }
            }
            DelimitedState::Escaped => {
                cursor.bump();
                cursor.mark_end();
                state = DelimitedState::Body;
            }
        }
    }
}

/// Scans a quoted string body until the quote of an accepted string kind.
///
/// A quote character whose kind is not accepted is ordinary content. A raw
/// CR or LF fails the scan: string bodies may not span a physical line,
/// though an escaped line break is consumed as content.
fn string_body(cursor: &mut impl Cursor, accepted: TokenSet) -> Option<TokenKind> {
    let mut state = DelimitedState::Body;
    loop {
        match state {
            DelimitedState::Body => {
                if cursor.is_eof() {
                    trace!("eof in string body");
                    return None;
                }
                match cursor.first() {
                    '\\' => {
                        cursor.bump();
                        state = DelimitedState::Escaped;
                    }
                    '"' if accepted.contains(TokenSet::DOUBLE_QUOTED) => {
                        trace!("double quote terminator");
                        return Some(TokenKind::DoubleQuoted);
                    }
                    '\'' if accepted.contains(TokenSet::SINGLE_QUOTED) => {
                        trace!("single quote terminator");
                        return Some(TokenKind::SingleQuoted);
                    }
                    '\r' | '\n' => {
                        trace!("line break in string body");
                        return None;
                    }
                    _ => {
                        cursor.bump();
                        cursor.mark_end();
                    }
                }
            }
            DelimitedState::Escaped => {
                cursor.bump();
                cursor.mark_end();
                state = DelimitedState::Body;
            }
        }
    }
}
