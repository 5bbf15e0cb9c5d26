//! Parser for the textual automaton format.
//!
//! An automaton is written as a 5-tuple of states, alphabet, transitions,
//! start state and accepting states:
//!
//! ```text
//! (
//!     {q0, q1, q2},        # states
//!     {a, b},              # alphabet
//!     {
//!         d(q0, a) = q1,
//!         d(q1, b) = q2,
//!     },
//!     q0,                  # start
//!     {q2}                 # accepting
//! )
//! ```
//!
//! Whitespace is insignificant, `#` starts a comment that runs to the end of
//! the line and every brace-delimited list accepts a trailing comma.
//!
//! # Example
//!
//! ```rust
//! use dfascope::parser::parse;
//!
//! let description = parse("({A, B}, {x}, {d(A, x) = B}, A, {B})").unwrap();
//! let graph = description.to_graph().unwrap();
//!
//! assert_eq!(graph.accessible_states().len(), 2);
//! assert!(!graph.is_language_empty());
//! ```

pub mod description;
pub mod error;
mod lexer;

pub use description::{AutomatonDescription, TransitionRule};
pub use error::{ParseError, Position};

use crate::core::State;
use lexer::{Token, TokenKind};
use log::debug;

/// Keyword that introduces a transition inside the transition set.
const TRANSITION_KEYWORD: &str = "d";

/// Parse a complete automaton description.
pub fn parse(input: &str) -> Result<AutomatonDescription, ParseError> {
    let tokens = lexer::tokenize(input)?;
    debug!("tokenized automaton description into {} token(s)", tokens.len());
    Parser::new(tokens).automaton()
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    fn automaton(mut self) -> Result<AutomatonDescription, ParseError> {
        self.expect(TokenKind::OpenParen, "`(` opening the automaton")?;
        let states = self.label_set("set of states")?;
        self.expect(TokenKind::Comma, "`,` after the set of states")?;
        let alphabet = self.label_set("alphabet")?;
        self.expect(TokenKind::Comma, "`,` after the alphabet")?;
        let transitions = self.transition_set()?;
        self.expect(TokenKind::Comma, "`,` after the transitions")?;
        let start = self.label("start state")?;
        self.expect(TokenKind::Comma, "`,` after the start state")?;
        let accepting = self.label_set("set of accepting states")?;
        self.eat(&TokenKind::Comma);
        self.expect(TokenKind::CloseParen, "`)` closing the automaton")?;

        if let Some(token) = self.tokens.get(self.cursor) {
            return Err(ParseError::TrailingInput {
                found: token.kind.to_string(),
                position: token.position,
            });
        }

        Ok(AutomatonDescription {
            states: states.into_iter().map(State::from).collect(),
            alphabet,
            transitions,
            start: State::from(start),
            accepting: accepting.into_iter().map(State::from).collect(),
        })
    }

    fn label_set(&mut self, what: &'static str) -> Result<Vec<String>, ParseError> {
        self.expect(TokenKind::OpenBrace, what)?;
        let mut labels = Vec::new();
        while !self.eat(&TokenKind::CloseBrace) {
            labels.push(self.label("label or `}`")?);
            if !self.eat(&TokenKind::Comma) {
                self.expect(TokenKind::CloseBrace, "`,` or `}`")?;
                break;
            }
        }
        Ok(labels)
    }

    fn transition_set(&mut self) -> Result<Vec<TransitionRule>, ParseError> {
        self.expect(TokenKind::OpenBrace, "set of transitions")?;
        let mut transitions = Vec::new();
        while !self.eat(&TokenKind::CloseBrace) {
            transitions.push(self.transition()?);
            if !self.eat(&TokenKind::Comma) {
                self.expect(TokenKind::CloseBrace, "`,` or `}`")?;
                break;
            }
        }
        Ok(transitions)
    }

    /// `d(from, symbol) = to`
    fn transition(&mut self) -> Result<TransitionRule, ParseError> {
        const EXPECTED: &str = "transition `d(state, symbol) = state` or `}`";
        match self.next() {
            Some(Token {
                kind: TokenKind::Label(keyword),
                ..
            }) if keyword == TRANSITION_KEYWORD => {}
            Some(token) => return Err(unexpected(EXPECTED, &token)),
            None => return Err(ParseError::UnexpectedEnd { expected: EXPECTED }),
        }
        self.expect(TokenKind::OpenParen, "`(` after `d`")?;
        let from = self.label("source state")?;
        self.expect(TokenKind::Comma, "`,` after the source state")?;
        let symbol = self.label("input symbol")?;
        self.expect(TokenKind::CloseParen, "`)` after the input symbol")?;
        self.expect(TokenKind::Equals, "`=`")?;
        let to = self.label("target state")?;

        Ok(TransitionRule::new(from, symbol, to))
    }

    fn label(&mut self, expected: &'static str) -> Result<String, ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Label(label),
                ..
            }) => Ok(label),
            Some(token) => Err(unexpected(expected, &token)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        match self.next() {
            Some(token) if token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(expected, &token)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    /// Consume the next token if it is `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        let matches = self.tokens.get(self.cursor).is_some_and(|t| t.kind == *kind);
        if matches {
            self.cursor += 1;
        }
        matches
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }
}

fn unexpected(expected: &'static str, token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: token.kind.to_string(),
        position: token.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
        (
            {q0, q1, q2},       # states
            {a, b},             # alphabet
            {
                d(q0, a) = q1,
                d(q1, b) = q2,
                d(q2, a) = q2,
            },
            q0,
            {q2}
        )
    ";

    #[test]
    fn parses_full_description() {
        let description = parse(SAMPLE).unwrap();

        assert_eq!(
            description.states,
            vec![State::from("q0"), State::from("q1"), State::from("q2")]
        );
        assert_eq!(description.alphabet, vec!["a", "b"]);
        assert_eq!(
            description.transitions,
            vec![
                TransitionRule::new("q0", "a", "q1"),
                TransitionRule::new("q1", "b", "q2"),
                TransitionRule::new("q2", "a", "q2"),
            ]
        );
        assert_eq!(description.start, State::from("q0"));
        assert_eq!(description.accepting, vec![State::from("q2")]);
    }

    #[test]
    fn parsed_graph_answers_queries() {
        let graph = parse(SAMPLE).unwrap().to_graph().unwrap();

        assert!(!graph.accepts_empty_string());
        assert_eq!(graph.useful_states().len(), 3);
        assert!(!graph.is_language_finite());
    }

    #[test]
    fn empty_sets_are_allowed() {
        let description = parse("({}, {}, {}, s, {})").unwrap();

        assert!(description.states.is_empty());
        assert!(description.alphabet.is_empty());
        assert!(description.transitions.is_empty());
        assert!(description.accepting.is_empty());
        assert_eq!(description.start, State::from("s"));
    }

    #[test]
    fn trailing_comma_after_accepting_set_is_allowed() {
        let description = parse("({A,}, {x,}, {d(A, x) = A,}, A, {A,},)").unwrap();
        assert_eq!(description.transitions.len(), 1);
    }

    #[test]
    fn missing_comma_reports_position() {
        let err = parse("({A} {x}, {}, A, {})").unwrap_err();

        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "`,` after the set of states",
                found: "`{`".to_string(),
                position: Position { line: 1, column: 6 },
            }
        );
    }

    #[test]
    fn transition_without_keyword_is_rejected() {
        let err = parse("({A}, {x}, {f(A, x) = A}, A, {})").unwrap_err();

        match err {
            ParseError::UnexpectedToken { found, position, .. } => {
                assert_eq!(found, "label `f`");
                assert_eq!(position, Position { line: 1, column: 13 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn truncated_input_reports_end() {
        let err = parse("({A}, {x}, {d(A, x) =").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEnd { expected: "target state" });
    }

    #[test]
    fn empty_input_reports_end() {
        let err = parse("   # only a comment").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    }

    #[test]
    fn content_after_closing_paren_is_rejected() {
        let err = parse("({}, {}, {}, A, {})\nextra").unwrap_err();

        assert_eq!(
            err,
            ParseError::TrailingInput {
                found: "label `extra`".to_string(),
                position: Position { line: 2, column: 1 },
            }
        );
    }

    #[test]
    fn error_messages_include_position() {
        let err = parse("(\n  {A}\n  {x}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "3:3: expected `,` after the set of states, found `{`"
        );
    }
}
