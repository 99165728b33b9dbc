use crate::ast::Ast;
use crate::lexer::Lexer;
use crate::Error;
use tracing::{debug, trace};

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// tokenizing, parsing, or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use reckoner::{eval, Error};
/// assert_eq!(eval("45 - 2^3"), Ok(37.0));
/// assert_eq!(eval("5!"), Ok(120.0));
/// assert_eq!(eval("1/0"), Err(Error::DivisionByZero));
/// ```
pub fn eval(input: &str) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// A parsed mathematical expression.
///
/// Parsing and evaluation are separate so an expression can be kept around
/// and re-evaluated without re-parsing.
///
/// # Examples
/// ```
/// # use reckoner::Expr;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(), Ok(13.0));
///
/// // exponentiation is right-associative
/// let expr = Expr::parse("2^3^2").unwrap();
/// assert_eq!(expr.eval(), Ok(512.0));
/// ```
#[derive(Debug, Clone)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use reckoner::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3 +").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        trace!("parsing expression {:?}", expression);
        let tokens = Lexer::new(expression).tokenize()?;
        match Ast::from_tokens(&tokens) {
            Ok(ast) => Ok(Self { ast }),
            Err(err) => {
                debug!("failed to parse {:?}: {}", expression, err);
                Err(err)
            }
        }
    }

    /// Evaluate the expression to a single `f64`.
    ///
    /// The walk is total over the grammar: there is no code generation and
    /// no interpretation of anything but the fixed set of operators,
    /// functions, and constants.
    ///
    /// # Examples
    ///
    /// ```
    /// # use reckoner::Expr;
    /// let expr = Expr::parse("sqrt(16)").unwrap();
    /// assert_eq!(expr.eval(), Ok(4.0));
    ///
    /// // trigonometric functions take degrees
    /// let expr = Expr::parse("sin(30)").unwrap();
    /// assert!((expr.eval().unwrap() - 0.5).abs() < 1e-12);
    /// ```
    pub fn eval(&self) -> Result<f64, Error> {
        Self::inner_eval(&self.ast)
    }

    /// The underlying AST.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    fn inner_eval(ast: &Ast) -> Result<f64, Error> {
        match *ast {
            Ast::Value(number) => Ok(number),
            Ast::Neg(ref inner) => Ok(-Self::inner_eval(inner)?),
            Ast::Add(ref left, ref right) => {
                Ok(Self::inner_eval(left)? + Self::inner_eval(right)?)
            }
            Ast::Sub(ref left, ref right) => {
                Ok(Self::inner_eval(left)? - Self::inner_eval(right)?)
            }
            Ast::Mul(ref left, ref right) => {
                Ok(Self::inner_eval(left)? * Self::inner_eval(right)?)
            }
            Ast::Div(ref left, ref right) => {
                let numerator = Self::inner_eval(left)?;
                let denominator = Self::inner_eval(right)?;
                if denominator == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(numerator / denominator)
            }
            Ast::Exp(ref left, ref right) => Ok(libm::pow(
                Self::inner_eval(left)?,
                Self::inner_eval(right)?,
            )),
            Ast::Function(func, ref arg) => func(Self::inner_eval(arg)?),
            Ast::Factorial(ref arg) => factorial(Self::inner_eval(arg)?),
        }
    }
}

/// Iterative factorial over `f64`.
///
/// 170! is the largest factorial representable as a finite `f64`.
fn factorial(x: f64) -> Result<f64, Error> {
    if x < 0.0 {
        return Err(Error::DomainError(format!(
            "factorial of negative value {}",
            x
        )));
    }
    if x.fract() != 0.0 {
        return Err(Error::DomainError(format!(
            "factorial of non-integer value {}",
            x
        )));
    }
    if x > 170.0 {
        return Err(Error::OverflowError);
    }
    let n = x as u64;
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    Ok(result)
}
