use crate::error::Error;
use crate::token::{Op, Token, NEG_PRECEDENCE};
use crate::util::{CONSTANTS, FUNCTIONS};

/// Ast nodes for the expressions
#[derive(Debug, Clone)]
pub enum Ast {
    /// A constant value
    Value(f64),
    /// -<inner>
    Neg(Box<Ast>),
    /// <left> + <right>
    Add(Box<Ast>, Box<Ast>),
    /// <left> - <right>
    Sub(Box<Ast>, Box<Ast>),
    /// <left> * <right>
    Mul(Box<Ast>, Box<Ast>),
    /// <left> / <right>
    Div(Box<Ast>, Box<Ast>),
    /// <left> ^ <right>
    Exp(Box<Ast>, Box<Ast>),
    /// fn(<arg>)
    Function(fn(f64) -> Result<f64, Error>, Box<Ast>),
    /// <arg>!
    Factorial(Box<Ast>),
}

impl Ast {
    /// Construct the AST from the lexer's spanned token stream by
    /// precedence climbing over [`Op::precedence`].
    pub fn from_tokens(tokens: &[(usize, Token)]) -> Result<Self, Error> {
        let mut parser = Parser { tokens, cursor: 0 };
        if tokens.is_empty() {
            return Err(parser.error("empty expression"));
        }
        let ast = parser.expression(1)?;
        if let Some(&(position, _)) = parser.peek() {
            return Err(Error::ParseError {
                position,
                message: "unexpected trailing input".into(),
            });
        }
        Ok(ast)
    }
}

struct Parser<'a> {
    tokens: &'a [(usize, Token)],
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn expression(&mut self, min_precedence: u8) -> Result<Ast, Error> {
        let mut left = self.operand()?;
        while let Some(&(_, Token::Op(op))) = self.peek() {
            if op.precedence() < min_precedence {
                break;
            }
            self.cursor += 1;
            let next_min = if op.is_left_associative() {
                op.precedence() + 1
            } else {
                op.precedence()
            };
            let right = Box::new(self.expression(next_min)?);
            let left_box = Box::new(left);
            left = match op {
                Op::Plus => Ast::Add(left_box, right),
                Op::Minus => Ast::Sub(left_box, right),
                Op::Mul => Ast::Mul(left_box, right),
                Op::Div => Ast::Div(left_box, right),
                Op::Exp => Ast::Exp(left_box, right),
            };
        }
        Ok(left)
    }

    fn operand(&mut self) -> Result<Ast, Error> {
        let (position, token) = match self.peek() {
            Some(&(position, ref token)) => (position, token.clone()),
            None => return Err(self.error("missing operand")),
        };
        self.cursor += 1;

        let node = match token {
            // `!` binds to the (signed) literal it follows, nothing else
            Token::Number(value) => {
                let mut node = Ast::Value(value);
                while let Some(&(_, Token::Factorial)) = self.peek() {
                    self.cursor += 1;
                    node = Ast::Factorial(Box::new(node));
                }
                return Ok(node);
            }
            Token::Constant(ref name) => match CONSTANTS.get(name) {
                Some(&value) => Ast::Value(value),
                None => {
                    return Err(Error::ParseError {
                        position,
                        message: format!("unknown constant {}", name),
                    })
                }
            },
            Token::Function(ref name) => {
                let func = match FUNCTIONS.get(name) {
                    Some(&func) => func,
                    None => {
                        return Err(Error::ParseError {
                            position,
                            message: format!("unknown function {}", name),
                        })
                    }
                };
                match self.peek() {
                    Some(&(_, Token::LParen)) => self.cursor += 1,
                    _ => {
                        return Err(Error::ParseError {
                            position,
                            message: format!("{} must be followed by a parenthesis", name),
                        })
                    }
                }
                let arg = self.expression(1)?;
                self.expect_rparen()?;
                Ast::Function(func, Box::new(arg))
            }
            Token::LParen => {
                let inner = self.expression(1)?;
                self.expect_rparen()?;
                inner
            }
            Token::Op(Op::Minus) => Ast::Neg(Box::new(self.expression(NEG_PRECEDENCE)?)),
            Token::Op(_) => {
                return Err(Error::ParseError {
                    position,
                    message: "missing operand before operator".into(),
                })
            }
            Token::RParen => {
                return Err(Error::ParseError {
                    position,
                    message: "mismatched parenthesis".into(),
                })
            }
            Token::Factorial => {
                return Err(Error::ParseError {
                    position,
                    message: "'!' must follow a number".into(),
                })
            }
        };

        if let Some(&(position, Token::Factorial)) = self.peek() {
            return Err(Error::ParseError {
                position,
                message: "'!' only applies to a number literal".into(),
            });
        }
        Ok(node)
    }

    fn expect_rparen(&mut self) -> Result<(), Error> {
        match self.peek() {
            Some(&(_, Token::RParen)) => {
                self.cursor += 1;
                Ok(())
            }
            Some(&(position, _)) => Err(Error::ParseError {
                position,
                message: "mismatched parenthesis".into(),
            }),
            None => Err(self.error("mismatched parenthesis")),
        }
    }

    fn peek(&self) -> Option<&(usize, Token)> {
        self.tokens.get(self.cursor)
    }

    /// An error at the current input position, or just past the last token
    /// when the input ended too early.
    fn error(&self, message: &str) -> Error {
        let position = match self.tokens.get(self.cursor) {
            Some(&(position, _)) => position,
            None => self.tokens.last().map_or(0, |&(position, _)| position + 1),
        };
        Error::ParseError {
            position,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ast;
    use crate::error::Error;
    use crate::lexer::Lexer;
    use test_case::test_case;

    fn parse(input: &str) -> Result<Ast, Error> {
        Ast::from_tokens(&Lexer::new(input).tokenize()?)
    }

    #[test]
    fn shapes() {
        assert!(matches!(parse("3").unwrap(), Ast::Value(_)));
        assert!(matches!(parse("3 + 5 * 2").unwrap(), Ast::Add(_, _)));
        assert!(matches!(parse("(3 + 5) * 2").unwrap(), Ast::Mul(_, _)));
        assert!(matches!(parse("-(3 + 5)").unwrap(), Ast::Neg(_)));
        assert!(matches!(parse("5!").unwrap(), Ast::Factorial(_)));
        assert!(matches!(parse("5!!").unwrap(), Ast::Factorial(_)));
        assert!(matches!(parse("sqrt(9)").unwrap(), Ast::Function(_, _)));
        // the folded sign makes -3 a literal, so the factorial attaches to it
        assert!(matches!(parse("-3!").unwrap(), Ast::Factorial(_)));
    }

    #[test_case("" ; "empty input")]
    #[test_case("   " ; "blank input")]
    #[test_case("(2+3" ; "unclosed parenthesis")]
    #[test_case("2+3)" ; "stray closing parenthesis")]
    #[test_case("2+" ; "trailing operator")]
    #[test_case("*3" ; "leading operator")]
    #[test_case("2 3" ; "adjacent values")]
    #[test_case("sin 30" ; "function call without parenthesis")]
    #[test_case("sin(30" ; "unclosed function call")]
    #[test_case("(2+3)!" ; "factorial of a parenthesized expression")]
    #[test_case("pi!" ; "factorial of a constant")]
    #[test_case("!5" ; "prefix factorial")]
    fn rejects(input: &str) {
        assert!(matches!(parse(input), Err(Error::ParseError { .. })));
    }

    #[test]
    fn error_positions() {
        match parse("(2+3") {
            Err(Error::ParseError { position, .. }) => assert_eq!(position, 4),
            other => panic!("expected a parse error, got {:?}", other),
        }
        match parse("2+3)") {
            Err(Error::ParseError { position, .. }) => assert_eq!(position, 3),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}
