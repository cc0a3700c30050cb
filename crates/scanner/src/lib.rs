//! Supplemental content scanner for the NDF grammar.
//!
//! The grammar engine hands control to this scanner at positions where its
//! regular rules cannot unambiguously tokenize the input: the bodies of
//! `/* … */` and `(* … *)` block comments, of `{ … }` blocks (which may
//! contain escaped braces), and of single- or double-quoted strings.
//!
//! One scan call reads the input one character of lookahead at a time through
//! a borrowed [`Cursor`], constrained by the [`TokenSet`] of kinds the parser
//! currently accepts, and either recognizes a single [`TokenKind`] — leaving
//! the tentative token end marked on the cursor, with the closing delimiter
//! unconsumed for the grammar to tokenize separately — or cleanly refuses so
//! the parser falls back to its ordinary tokenization.
//!
//! The scanner carries no state between calls; see [`Scanner`].

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod cursor;
pub use cursor::{Cursor, EOF_CHAR, StrCursor};

mod scanner;
pub use scanner::Scanner;

mod token;
pub use token::{TokenKind, TokenSet};
