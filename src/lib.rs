#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Reckoner, the numeric core of an interactive calculator.
//!
//! This crate provides three coupled-only-by-`f64` components: a
//! chained-entry calculator state machine, a one-shot evaluator for
//! free-form mathematical expressions, and a unit conversion engine.
//! Screen rendering, event wiring, and input widgets are the embedder's
//! concern; everything here is synchronous, in-memory, and side-effect
//! free.
//!
//! The easiest way to use the expression engine is the
//! [`eval`](fn.eval.html) function:
//!
//! ```
//! assert_eq!(reckoner::eval("3 + 5 * 2"), Ok(13.0));
//! assert_eq!(reckoner::eval("2^3^2"), Ok(512.0));
//! assert_eq!(reckoner::eval("5!"), Ok(120.0));
//! ```
//!
//! Chained entry goes through a caller-owned [`Calculator`]:
//!
//! ```
//! use reckoner::{Calculator, Operator};
//!
//! let mut calculator = Calculator::new();
//! calculator.append_digit(1);
//! calculator.append_digit(2);
//! calculator.choose_operator(Operator::Multiply).unwrap();
//! calculator.append_digit(3);
//! assert_eq!(calculator.evaluate().unwrap().display, "36");
//! ```
//!
//! And unit conversion is a pure function over static tables:
//!
//! ```
//! use reckoner::{convert, Category};
//!
//! assert_eq!(convert(Category::Weight, 2.0, "kilogram", "gram"), Ok(2000.0));
//! ```
//!
//! # Language definition
//!
//! The expression language contains the following elements:
//!
//! - decimal literal values: `12`, `0.5`, `.5`. A `+` or `-` directly
//!   before the digits in prefix position is part of the literal;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for (right
//!   associative) exponentiation;
//! - the postfix factorial `!`, applicable to integer literals only;
//! - the constants `pi` (also spelled `π`) and `e`;
//! - function calls: `sin(30)`, `sqrt(2)`. The available functions are
//!   `sin`, `cos`, `tan` (degrees in, matching calculator convention),
//!   `log` (base 10), `ln`, and `sqrt`, and the parenthesis is mandatory.
//!
//! Any other symbol is rejected with a position-carrying error.
//!
//! # Technical details
//!
//! The evaluator is an AST interpreter: a lexer produces position-tagged
//! tokens, a precedence climbing parser builds the tree, and a total
//! recursive walk computes the `f64`. Nothing is ever compiled or handed
//! to a host language, which closes the code-injection hole an expression
//! evaluator can otherwise open. Domain violations (`sqrt(-1)`,
//! `log(0)`, factorial of `2.5`), division by zero, and factorial
//! overflow are reported as typed errors, never panics.

#[macro_use]
extern crate lazy_static;

mod ast;
mod calculator;
mod error;
mod expr;
mod lexer;
mod token;
mod units;
mod util;

pub use ast::Ast;
pub use calculator::{Calculator, Operand, Operator, Readout};
pub use error::{ConversionError, Error};
pub use expr::{eval, Expr};
pub use token::{Op, Token};
pub use units::{convert, default_units, list_units, swap_units, Category};
pub use util::{CONSTANTS, FUNCTIONS};
