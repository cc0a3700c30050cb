//! Token kinds recognized by the scanner, and the caller-supplied set of
//! kinds that are acceptable at the current parse position.

/// A content token kind produced by a successful scan.
///
/// Exactly one kind (or none) is produced per scan call. On success the
/// recognized body excludes the closing delimiter, which is left for the
/// grammar to tokenize separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Body of a `/* … */` comment.
    ClassicComment,
    /// Body of a `(* … *)` comment.
    RoundComment,
    /// Body of a `{ … }` block. Also used for GUID bodies.
    CurlyBrackets,
    /// Body of a `"…"` string.
    DoubleQuoted,
    /// Body of a `'…'` string.
    SingleQuoted,
}

/// Block comment kinds in terminator-check order: classic before round.
///
/// When an asterisk run ends and both comment kinds are acceptable, the
/// terminators are tried in this order.
pub(crate) const COMMENT_KINDS: [TokenKind; 2] =
    [TokenKind::ClassicComment, TokenKind::RoundComment];

impl TokenKind {
    /// The single character that closes this token kind's body.
    pub const fn terminator(self) -> char {
        match self {
            Self::ClassicComment => '/',
            Self::RoundComment => ')',
            Self::CurlyBrackets => '}',
            Self::DoubleQuoted => '"',
            Self::SingleQuoted => '\'',
        }
    }

    /// Returns `true` if this kind is a block comment body.
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::ClassicComment | Self::RoundComment)
    }
}

bitflags::bitflags! {
    /// The set of token kinds the caller will currently accept.
    ///
    /// Supplied fresh by the parser on every scan call and never mutated by
    /// the scanner. Flag declaration order mirrors the grammar's external
    /// token order and is a contract with the grammar definition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TokenSet: u8 {
        /// A `/* … */` comment body is acceptable.
        const CLASSIC_COMMENT = 1 << 0;
        /// A `(* … *)` comment body is acceptable.
        const ROUND_COMMENT = 1 << 1;
        /// A `{ … }` body is acceptable.
        const CURLY_BRACKETS = 1 << 2;
        /// A `"…"` string body is acceptable.
        const DOUBLE_QUOTED = 1 << 3;
        /// A `'…'` string body is acceptable.
        const SINGLE_QUOTED = 1 << 4;
        /// The parser is in error recovery; the scanner must refuse to match
        /// so that recovery tokenization is never shadowed.
        const ERROR_SENTINEL = 1 << 5;
    }
}

impl TokenSet {
    /// Both block comment body kinds.
    pub const COMMENTS: Self = Self::CLASSIC_COMMENT.union(Self::ROUND_COMMENT);
    /// Both quoted string body kinds.
    pub const STRINGS: Self = Self::DOUBLE_QUOTED.union(Self::SINGLE_QUOTED);

    /// Returns `true` if `kind` is acceptable.
    pub fn accepts(self, kind: TokenKind) -> bool {
        self.contains(kind.into())
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::ClassicComment => Self::CLASSIC_COMMENT,
            TokenKind::RoundComment => Self::ROUND_COMMENT,
            TokenKind::CurlyBrackets => Self::CURLY_BRACKETS,
            TokenKind::DoubleQuoted => Self::DOUBLE_QUOTED,
            TokenKind::SingleQuoted => Self::SINGLE_QUOTED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators() {
        let expected = [
            (TokenKind::ClassicComment, '/'),
            (TokenKind::RoundComment, ')'),
            (TokenKind::CurlyBrackets, '}'),
            (TokenKind::DoubleQuoted, '"'),
            (TokenKind::SingleQuoted, '\''),
        ];
        for (kind, term) in expected {
            assert_eq!(kind.terminator(), term, "{kind:?}");
        }
    }

    #[test]
    fn comment_kind_order() {
        // Classic is tried before round; both are comments, nothing else is.
        assert_eq!(COMMENT_KINDS, [TokenKind::ClassicComment, TokenKind::RoundComment]);
        for kind in COMMENT_KINDS {
            assert!(kind.is_comment());
        }
        assert!(!TokenKind::CurlyBrackets.is_comment());
        assert!(!TokenKind::DoubleQuoted.is_comment());
        assert!(!TokenKind::SingleQuoted.is_comment());
    }

    #[test]
    fn accepts() {
        let set = TokenSet::CLASSIC_COMMENT | TokenSet::SINGLE_QUOTED;
        assert!(set.accepts(TokenKind::ClassicComment));
        assert!(set.accepts(TokenKind::SingleQuoted));
        assert!(!set.accepts(TokenKind::RoundComment));
        assert!(!set.accepts(TokenKind::CurlyBrackets));
        assert!(!set.accepts(TokenKind::DoubleQuoted));

        assert_eq!(TokenSet::COMMENTS, TokenSet::CLASSIC_COMMENT | TokenSet::ROUND_COMMENT);
        assert_eq!(TokenSet::STRINGS, TokenSet::DOUBLE_QUOTED | TokenSet::SINGLE_QUOTED);
    }
}
