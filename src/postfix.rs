//! Postfix (reverse Polish) integer expression evaluation on a [`Stack`].
//!
//! Tokens are separated by runs of whitespace. Each token is either a base-10
//! `i32` literal, which is pushed, or one of `+ - * / %`, which pops the right
//! operand, then the left operand, and pushes the result.
//!
//! ```rust
//! use indexed_collections::postfix::{evaluate, EvalError};
//!
//! assert_eq!(evaluate("-1 8 2 / +"), Ok(3));
//! assert_eq!(evaluate("8 0 /"), Err(EvalError::DivisionByZero));
//! assert_eq!(evaluate("1 2 3"), Err(EvalError::Inconsistent { size: 3 }));
//! ```

use core::fmt;

use crate::{CollectionError, Stack};

/// Failure to evaluate an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A token is not understood, or an operator lacks operands.
    #[error("malformed expression at `{token}`: {reason}")]
    MalformedExpression {
        /// The offending token.
        token: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// `/` or `%` with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in an `i32`.
    #[error("integer overflow in `{left} {operator} {right}`")]
    Overflow {
        left: i32,
        operator: Operator,
        right: i32,
    },

    /// Evaluation finished with other than exactly one value on the stack.
    #[error("expression left {size} values on the stack, expected exactly 1")]
    Inconsistent {
        /// Number of values left behind.
        size: usize,
    },

    #[error(transparent)]
    Stack(#[from] CollectionError),
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "%" => Some(Self::Remainder),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
        }
    }

    /// Computes `left <op> right`. Division and remainder truncate toward zero.
    ///
    /// Results that do not fit in an `i32` are an [`EvalError::Overflow`], never
    /// wrapped; this covers `i32::MIN / -1` and `i32::MIN % -1`.
    pub fn apply(self, left: i32, right: i32) -> Result<i32, EvalError> {
        if matches!(self, Self::Divide | Self::Remainder) && right == 0 {
            return Err(EvalError::DivisionByZero);
        }
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
            Self::Multiply => left.checked_mul(right),
            Self::Divide => left.checked_div(right),
            Self::Remainder => left.checked_rem(right),
        };
        result.ok_or(EvalError::Overflow {
            left,
            operator: self,
            right,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One whitespace-separated piece of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Operand(i32),
    Operator(Operator),
}

impl Token {
    /// Integer literals win over operators, so `-1` is an operand and `-` an operator.
    pub fn parse(text: &str) -> Result<Self, EvalError> {
        if let Ok(value) = text.parse::<i32>() {
            return Ok(Self::Operand(value));
        }
        Operator::parse(text)
            .map(Self::Operator)
            .ok_or_else(|| EvalError::MalformedExpression {
                token: text.to_owned(),
                reason: "neither an integer nor an operator",
            })
    }
}

/// Applies a single token to `stack`.
///
/// An operator with fewer than two operands available fails without
/// touching the stack.
pub fn apply_token(text: &str, stack: &mut Stack<i32>) -> Result<(), EvalError> {
    match Token::parse(text)? {
        Token::Operand(value) => stack.push(value),
        Token::Operator(operator) => {
            if stack.size() < 2 {
                return Err(EvalError::MalformedExpression {
                    token: text.to_owned(),
                    reason: "operator needs two operands",
                });
            }
            let right = stack.pop()?;
            let left = stack.pop()?;
            stack.push(operator.apply(left, right)?);
        }
    }
    Ok(())
}

/// Evaluates a whole expression and returns its single result.
///
/// Each applied token is logged at `debug` level with the resulting stack depth.
///
/// # Errors
///
/// Arithmetic is checked rather than wrapping: any intermediate result outside
/// the `i32` range, including `i32::MIN / -1` and `i32::MIN % -1`, fails with
/// [`EvalError::Overflow`]. Zero divisors give [`EvalError::DivisionByZero`],
/// unparsable tokens or missing operands give
/// [`EvalError::MalformedExpression`], and a final stack holding other than one
/// value gives [`EvalError::Inconsistent`].
pub fn evaluate(expression: &str) -> Result<i32, EvalError> {
    let mut stack = Stack::new();
    for token in expression.split_whitespace() {
        apply_token(token, &mut stack)?;
        tracing::debug!(token, depth = stack.size(), "applied token");
    }
    match stack.size() {
        1 => {
            let result = stack.pop()?;
            tracing::debug!(result, "expression evaluated");
            Ok(result)
        }
        size => {
            tracing::debug!(size, "expression left an inconsistent stack");
            Err(EvalError::Inconsistent { size })
        }
    }
}
