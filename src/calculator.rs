use crate::error::Error;
use crate::expr;
use std::fmt::{self, Display, Formatter};

/// The binary operators of the chained-entry state machine.
///
/// This is deliberately distinct from the expression [`Op`](crate::Op)
/// enum: percent only exists in chained entry, exponentiation only in
/// expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    /// The symbol shown on the preview line while the operator is pending
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }
}

/// A decimal operand: an `f64` carried as its canonical display string.
///
/// The string holds at most one decimal point, an optional leading minus,
/// and no leading zero except `"0"` or `"0.x"`. Every mutator re-establishes
/// that invariant, so the display never needs to be sanitized downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    text: String,
}

impl Operand {
    fn zero() -> Self {
        Operand { text: "0".into() }
    }

    fn from_value(value: f64) -> Self {
        // Rust's shortest round-trip formatting already satisfies the
        // display invariant: no leading zeros, one decimal point at most.
        Operand {
            text: value.to_string(),
        }
    }

    /// The display text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The numeric value of the display text
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push_digit(&mut self, digit: u8) {
        self.text.push((b'0' + digit) as char);
    }

    fn push_decimal_point(&mut self) {
        if !self.text.contains('.') {
            self.text.push('.');
        }
    }

    fn pop(&mut self) {
        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            self.text = "0".into();
        }
    }
}

impl Display for Operand {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(&self.text)
    }
}

/// What the embedding UI renders after every state machine operation
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// The current operand
    pub display: String,
    /// The pending computation (`"12 +"`), or the submitted expression
    /// (`"2^3 ="`), or empty
    pub preview: String,
}

/// The chained-entry calculator state machine.
///
/// One `Calculator` per session, owned by the caller; there is no global
/// instance. All transitions are synchronous and return the new
/// [`Readout`].
///
/// # Examples
///
/// ```
/// use reckoner::{Calculator, Operator};
///
/// let mut calculator = Calculator::new();
/// calculator.append_digit(3);
/// calculator.choose_operator(Operator::Add).unwrap();
/// calculator.append_digit(4);
/// let out = calculator.evaluate().unwrap();
/// assert_eq!(out.display, "7");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    current: Operand,
    previous: Option<Operand>,
    pending: Option<Operator>,
    reset_next: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator in its initial state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Calculator {
            current: Operand::zero(),
            previous: None,
            pending: None,
            reset_next: false,
        }
    }

    /// Append a digit to the current operand, replacing it after an
    /// evaluation or when it is `"0"`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in `0..=9`; the digit keys of a UI cannot
    /// produce anything else.
    pub fn append_digit(&mut self, digit: u8) -> Readout {
        assert!(digit <= 9, "digit out of range: {}", digit);
        if self.reset_next || self.current.text() == "0" {
            self.current = Operand {
                text: char::from(b'0' + digit).to_string(),
            };
            self.reset_next = false;
        } else {
            self.current.push_digit(digit);
        }
        self.readout()
    }

    /// Append the decimal point, once per operand.
    pub fn append_decimal_point(&mut self) -> Readout {
        if self.reset_next {
            self.current = Operand { text: "0.".into() };
            self.reset_next = false;
        } else {
            self.current.push_decimal_point();
        }
        self.readout()
    }

    /// Install `operator` as the pending operation, resolving any
    /// fully-formed pending computation first.
    ///
    /// A no-op when the current operand is empty. If resolving the previous
    /// computation fails with [`Error::DivisionByZero`], the state has been
    /// reset and the new operator is not installed.
    pub fn choose_operator(&mut self, operator: Operator) -> Result<Readout, Error> {
        if self.current.is_empty() {
            return Ok(self.readout());
        }
        if self.previous.is_some() && self.pending.is_some() {
            self.evaluate()?;
        }
        self.previous = Some(self.current.clone());
        self.pending = Some(operator);
        self.reset_next = true;
        Ok(self.readout())
    }

    /// Apply the pending operator to `previous` and `current`.
    ///
    /// A no-op unless both a previous operand and a pending operator exist.
    /// Division by zero resets the machine to its initial state and reports
    /// [`Error::DivisionByZero`]; this mirrors the hard-reset behavior of
    /// desk calculators. The result is rounded to 8 decimal digits to
    /// suppress floating point noise.
    pub fn evaluate(&mut self) -> Result<Readout, Error> {
        let (previous, operator) = match (&self.previous, self.pending) {
            (Some(previous), Some(operator)) => (previous.value(), operator),
            _ => return Ok(self.readout()),
        };
        let current = self.current.value();
        let result = match operator {
            Operator::Add => previous + current,
            Operator::Subtract => previous - current,
            Operator::Multiply => previous * current,
            Operator::Divide => {
                if current == 0.0 {
                    self.clear();
                    return Err(Error::DivisionByZero);
                }
                previous / current
            }
            Operator::Percent => previous * (current / 100.0),
        };
        self.current = Operand::from_value(round8(result));
        self.previous = None;
        self.pending = None;
        self.reset_next = true;
        Ok(self.readout())
    }

    /// Percent with no pending operator: divide the current operand by 100.
    ///
    /// With a fully-formed pending computation this resolves it instead,
    /// which is the percent-as-pending-operator path of [`evaluate`]
    /// (`Self::evaluate`).
    pub fn percent_immediate(&mut self) -> Result<Readout, Error> {
        if self.previous.is_some() && self.pending.is_some() {
            return self.evaluate();
        }
        self.current = Operand::from_value(self.current.value() / 100.0);
        Ok(self.readout())
    }

    /// Replace the current operand with its reciprocal.
    ///
    /// Unlike a chained division, a zero operand here is a recoverable
    /// error: the state is left untouched.
    pub fn reciprocal(&mut self) -> Result<Readout, Error> {
        let value = self.current.value();
        if value == 0.0 {
            return Err(Error::DivisionByZero);
        }
        self.current = Operand::from_value(1.0 / value);
        self.reset_next = true;
        Ok(self.readout())
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) -> Readout {
        *self = Self::new();
        self.readout()
    }

    /// Remove the last character of the current operand; a now-empty or
    /// single-character operand collapses to `"0"`.
    pub fn backspace(&mut self) -> Readout {
        self.current.pop();
        self.readout()
    }

    /// Evaluate a free-form expression and make its result the current
    /// operand.
    ///
    /// Empty input falls back to resolving any pending chained computation.
    /// The preview line echoes the expression (`"2^3 ="`). The result is
    /// not rounded; expression results are shown as computed.
    pub fn submit_expression(&mut self, expression: &str) -> Result<Readout, Error> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            if self.previous.is_some() && self.pending.is_some() {
                return self.evaluate();
            }
            return Ok(self.readout());
        }
        let value = expr::eval(trimmed)?;
        self.current = Operand::from_value(value);
        self.previous = None;
        self.pending = None;
        self.reset_next = true;
        Ok(Readout {
            display: self.current.text().into(),
            preview: format!("{} =", trimmed),
        })
    }

    /// The current display and preview line.
    pub fn readout(&self) -> Readout {
        let preview = match (&self.previous, self.pending) {
            (Some(previous), Some(operator)) => {
                format!("{} {}", previous, operator.symbol())
            }
            (Some(previous), None) => previous.to_string(),
            _ => String::new(),
        };
        Readout {
            display: self.current.text().into(),
            preview,
        }
    }
}

/// Round to 8 decimal digits, the display precision of chained results.
fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}
