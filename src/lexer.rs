use crate::error::Error;
use crate::token::{Op, Token};
use crate::util::{CONSTANTS, FUNCTIONS};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

/// An helper struct for lexing the input.
///
/// Positions are character offsets, not byte offsets, so an error after a
/// `π` still points at what the user typed.
pub struct Lexer<'a> {
    input: Peekable<Enumerate<Chars<'a>>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().enumerate().peekable(),
        }
    }

    /// Tokenize the whole input, pairing every token with the character
    /// offset it starts at.
    pub fn tokenize(&mut self) -> Result<Vec<(usize, Token)>, Error> {
        let mut tokens: Vec<(usize, Token)> = Vec::new();

        while let Some(&(position, c)) = self.input.peek() {
            match c {
                ' ' | '\t' | '\n' | '\r' => {
                    self.input.next();
                }
                '0'..='9' | '.' => {
                    let token = self.number(position, String::new())?;
                    tokens.push((position, token));
                }
                // A sign in prefix position directly before a number folds
                // into the literal, so `-3!` is the factorial of -3 and
                // `25 - -3` is a subtraction of -3.
                '+' | '-' => {
                    self.input.next();
                    if prefix_position(tokens.last()) && self.at_number_start() {
                        let mut lexeme = String::new();
                        if c == '-' {
                            lexeme.push('-');
                        }
                        let token = self.number(position, lexeme)?;
                        tokens.push((position, token));
                    } else if c == '+' {
                        tokens.push((position, Token::Op(Op::Plus)));
                    } else {
                        tokens.push((position, Token::Op(Op::Minus)));
                    }
                }
                '*' => {
                    self.input.next();
                    tokens.push((position, Token::Op(Op::Mul)));
                }
                '/' => {
                    self.input.next();
                    tokens.push((position, Token::Op(Op::Div)));
                }
                '^' => {
                    self.input.next();
                    tokens.push((position, Token::Op(Op::Exp)));
                }
                '(' => {
                    self.input.next();
                    tokens.push((position, Token::LParen));
                }
                ')' => {
                    self.input.next();
                    tokens.push((position, Token::RParen));
                }
                '!' => {
                    self.input.next();
                    tokens.push((position, Token::Factorial));
                }
                'π' => {
                    self.input.next();
                    tokens.push((position, Token::Constant("π".into())));
                }
                c if c.is_ascii_alphabetic() => {
                    let mut ident = String::new();
                    while let Some(&(_, c)) = self.input.peek() {
                        if c.is_ascii_alphabetic() {
                            ident.push(c);
                            self.input.next();
                        } else {
                            break;
                        }
                    }
                    if FUNCTIONS.contains_key(&ident) {
                        tokens.push((position, Token::Function(ident)));
                    } else if CONSTANTS.contains_key(&ident) {
                        tokens.push((position, Token::Constant(ident)));
                    } else {
                        return Err(Error::LexError {
                            position,
                            character: c,
                        });
                    }
                }
                other => {
                    return Err(Error::LexError {
                        position,
                        character: other,
                    });
                }
            }
        }
        Ok(tokens)
    }

    /// Scan digits and at most one decimal point into `lexeme` (which may
    /// already hold a folded sign) and parse the result.
    fn number(&mut self, start: usize, mut lexeme: String) -> Result<Token, Error> {
        let mut seen_dot = false;
        while let Some(&(_, c)) = self.input.peek() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.input.next();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                lexeme.push(c);
                self.input.next();
            } else {
                break;
            }
        }
        match lexeme.parse() {
            Ok(number) => Ok(Token::Number(number)),
            // A lone `.` or `-` reaches here
            Err(_) => Err(Error::LexError {
                position: start,
                character: lexeme.chars().next().unwrap_or('.'),
            }),
        }
    }

    fn at_number_start(&mut self) -> bool {
        matches!(self.input.peek(), Some(&(_, c)) if c.is_ascii_digit() || c == '.')
    }
}

/// A sign is a prefix sign at the start of the input, after an operator, or
/// after an opening parenthesis.
fn prefix_position(last: Option<&(usize, Token)>) -> bool {
    match last {
        None => true,
        Some((_, Token::Op(_))) | Some((_, Token::LParen)) => true,
        Some(_) => false,
    }
}
