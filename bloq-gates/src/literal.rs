//! Strict literal parsing for custom gate text
//!
//! User-supplied matrix text is interpreted as a literal nested numeric
//! array and nothing else. The accepted grammar is:
//!
//! - sequences delimited by `[` `]` or `(` `)`, comma-separated, trailing
//!   comma allowed,
//! - numeric literals: optional leading `-`, decimal digits with optional
//!   fraction and exponent, and an optional trailing `i` or `j` marking a
//!   pure-imaginary value (`2i`, `-0.5j`; digits are required, so `i` alone
//!   is not a number),
//! - whitespace between tokens.
//!
//! Identifiers, calls, operators, strings, and every other construct are
//! rejected with a parse error carrying the byte offset. This is a hard
//! boundary: the parser only ever builds a value tree, it never evaluates
//! anything.

use bloq_core::{Complex64, InvalidGateError};

/// A parsed literal value: a number or an arbitrarily nested list
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A numeric scalar (real or pure-imaginary literal)
    Number(Complex64),
    /// A bracketed sequence of literals
    List(Vec<Literal>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delim {
    Bracket,
    Paren,
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Open(Delim),
    Close(Delim),
    Comma,
    Number(Complex64),
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    offset: usize,
}

/// Parse a string as a literal nested numeric array
///
/// # Errors
/// [`InvalidGateError::Parse`] on any input outside the literal grammar.
///
/// # Example
/// ```
/// use bloq_gates::{parse_literal, Literal};
///
/// let value = parse_literal("[1, -2.5, 3i]").unwrap();
/// assert!(matches!(value, Literal::List(ref items) if items.len() == 3));
///
/// // Anything that is not literal data is rejected
/// assert!(parse_literal("system('rm -rf /')").is_err());
/// ```
pub fn parse_literal(input: &str) -> Result<Literal, InvalidGateError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        eof_offset: input.len(),
    };

    let value = parser.parse_value()?;
    if let Some(token) = parser.peek() {
        return Err(InvalidGateError::parse(
            token.offset,
            "trailing input after literal",
        ));
    }
    Ok(value)
}

fn tokenize(input: &str) -> Result<Vec<Token>, InvalidGateError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '[' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Open(Delim::Bracket),
                    offset,
                });
            }
            ']' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Close(Delim::Bracket),
                    offset,
                });
            }
            '(' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Open(Delim::Paren),
                    offset,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Close(Delim::Paren),
                    offset,
                });
            }
            ',' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    offset,
                });
            }
            '-' | '.' | '0'..='9' => {
                let value = lex_number(input, &mut chars, offset)?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    offset,
                });
            }
            _ => {
                return Err(InvalidGateError::parse(
                    offset,
                    format!("unexpected character '{}'", c),
                ));
            }
        }
    }

    Ok(tokens)
}

type CharStream<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn bump(chars: &mut CharStream<'_>, end: &mut usize) {
    if let Some((offset, c)) = chars.next() {
        *end = offset + c.len_utf8();
    }
}

fn lex_number(
    input: &str,
    chars: &mut CharStream<'_>,
    start: usize,
) -> Result<Complex64, InvalidGateError> {
    let mut end = start;
    let mut digits = 0usize;

    if matches!(chars.peek(), Some(&(_, '-'))) {
        bump(chars, &mut end);
    }
    while matches!(chars.peek(), Some(&(_, '0'..='9'))) {
        bump(chars, &mut end);
        digits += 1;
    }
    if matches!(chars.peek(), Some(&(_, '.'))) {
        bump(chars, &mut end);
        while matches!(chars.peek(), Some(&(_, '0'..='9'))) {
            bump(chars, &mut end);
            digits += 1;
        }
    }
    if digits == 0 {
        return Err(InvalidGateError::parse(start, "expected a number"));
    }

    if matches!(chars.peek(), Some(&(_, 'e' | 'E'))) {
        bump(chars, &mut end);
        if matches!(chars.peek(), Some(&(_, '+' | '-'))) {
            bump(chars, &mut end);
        }
        let mut exp_digits = 0usize;
        while matches!(chars.peek(), Some(&(_, '0'..='9'))) {
            bump(chars, &mut end);
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return Err(InvalidGateError::parse(
                start,
                "expected digits in exponent",
            ));
        }
    }

    let magnitude: f64 = input[start..end].parse().map_err(|_| {
        InvalidGateError::parse(start, format!("malformed number '{}'", &input[start..end]))
    })?;

    // Optional imaginary-unit suffix
    if matches!(chars.peek(), Some(&(_, 'i' | 'j'))) {
        bump(chars, &mut end);
        Ok(Complex64::new(0.0, magnitude))
    } else {
        Ok(Complex64::new(magnitude, 0.0))
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof_offset: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_value(&mut self) -> Result<Literal, InvalidGateError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Number(value),
                ..
            }) => Ok(Literal::Number(*value)),
            Some(Token {
                kind: TokenKind::Open(delim),
                ..
            }) => self.parse_list(*delim),
            Some(Token {
                kind: TokenKind::Close(_),
                offset,
            }) => Err(InvalidGateError::parse(
                *offset,
                "unexpected closing delimiter",
            )),
            Some(Token {
                kind: TokenKind::Comma,
                offset,
            }) => Err(InvalidGateError::parse(*offset, "unexpected ','")),
            None => Err(InvalidGateError::parse(
                self.eof_offset,
                "unexpected end of input",
            )),
        }
    }

    fn parse_list(&mut self, open: Delim) -> Result<Literal, InvalidGateError> {
        let mut items = Vec::new();

        loop {
            match self.peek() {
                Some(Token {
                    kind: TokenKind::Close(delim),
                    offset,
                }) => {
                    if *delim != open {
                        return Err(InvalidGateError::parse(
                            *offset,
                            "mismatched closing delimiter",
                        ));
                    }
                    self.next();
                    return Ok(Literal::List(items));
                }
                Some(_) => {
                    items.push(self.parse_value()?);
                    match self.peek() {
                        Some(Token {
                            kind: TokenKind::Comma,
                            ..
                        }) => {
                            self.next();
                        }
                        Some(Token {
                            kind: TokenKind::Close(_),
                            ..
                        }) => {} // handled at loop top
                        Some(token) => {
                            return Err(InvalidGateError::parse(
                                token.offset,
                                "expected ',' or closing delimiter",
                            ));
                        }
                        None => {
                            return Err(InvalidGateError::parse(
                                self.eof_offset,
                                "unclosed delimiter",
                            ));
                        }
                    }
                }
                None => {
                    return Err(InvalidGateError::parse(self.eof_offset, "unclosed delimiter"));
                }
            }
        }
    }
}
