//! Tokenizer for the automaton text format.
//!
//! Logos recognizes the tokens; comments are dropped here so the parser only
//! ever sees punctuation and labels.

use super::error::{ParseError, Position};
use logos::Logos;
use std::fmt;

#[derive(Logos, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum TokenKind {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Any run of characters that is not whitespace or punctuation.
    #[regex(r"[^ \t\r\n\f(){},=#]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Label(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => f.write_str("`(`"),
            Self::CloseParen => f.write_str("`)`"),
            Self::OpenBrace => f.write_str("`{`"),
            Self::CloseBrace => f.write_str("`}`"),
            Self::Comma => f.write_str("`,`"),
            Self::Equals => f.write_str("`=`"),
            Self::Comment => f.write_str("comment"),
            Self::Label(label) => write!(f, "label `{label}`"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

/// Maps byte offsets to 1-based line/column positions.
struct LineIndex<'a> {
    source: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { source, starts }
    }

    fn position(&self, offset: usize) -> Position {
        let line = self.starts.partition_point(|&start| start <= offset);
        let start = self.starts[line - 1];
        Position {
            line,
            column: self.source[start..offset].chars().count() + 1,
        }
    }
}

/// Split `input` into tokens, dropping comments.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let lines = LineIndex::new(input);
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let position = lines.position(lexer.span().start);
        match result {
            Ok(TokenKind::Comment) => {}
            Ok(kind) => tokens.push(Token { kind, position }),
            Err(()) => {
                return Err(ParseError::UnrecognizedInput {
                    text: lexer.slice().to_string(),
                    position,
                })
            }
        }
    }

    Ok(tokens)
}
