//! Expression evaluation and result formatting.
//!
//! Evaluation itself is delegated to the evalexpr library; this module owns
//! input trimming, the numeric model (arithmetic over the reals), the display
//! policy for results, and the translation of every failure into a
//! human-readable message. [`calculate`] is the single point where errors
//! become text — nothing below it escapes to the caller.

use evalexpr::{EvalexprError, Value};
use thiserror::Error;

/// Display precision for non-integer numeric results (significant figures).
pub const OUTPUT_PRECISION: usize = 3;

/// Errors raised while evaluating an expression.
///
/// Both variants are recovered inside [`calculate`] and rendered as a failure
/// string; the distinction exists only in the message text.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Expression cannot be empty")]
    EmptyExpression,
    #[error("{0}")]
    Evaluation(#[from] EvalexprError),
}

/// Trim and evaluate an expression, delegating to evalexpr.
///
/// Arithmetic is computed over the reals: integer literals are promoted to
/// floats before evaluation, so `1 / 3` divides exactly rather than
/// truncating.
pub fn evaluate_expression(expression: &str) -> Result<Value, CalcError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    Ok(evalexpr::eval(&promote_integer_literals(trimmed))?)
}

/// Rewrite integer literals as float literals (`3` becomes `3.0`).
///
/// evalexpr types its numbers, so `1 / 3` would otherwise truncate to `0`.
/// Literal tokens are maximal runs of the characters evalexpr itself groups
/// into one token; anything containing a letter, `.`, `_` or `:` fails the
/// integer parse and passes through untouched, as do string literals.
fn promote_integer_literals(expression: &str) -> String {
    fn is_token_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':')
    }

    let mut out = String::with_capacity(expression.len() + 8);
    let mut iter = expression.char_indices().peekable();
    let mut in_string = false;

    while let Some((start, c)) = iter.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some((_, escaped)) = iter.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }
        if !is_token_char(c) {
            out.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = iter.peek() {
            if !is_token_char(next) {
                break;
            }
            end = idx + next.len_utf8();
            iter.next();
        }

        let token = &expression[start..end];
        out.push_str(token);
        if token.parse::<i64>().is_ok() {
            out.push_str(".0");
        }
    }

    out
}

/// Render an evaluated value for display.
///
/// Integers and mathematically whole floats print with no decimal point.
/// Other floats round to [`OUTPUT_PRECISION`] significant figures with no
/// trailing zeros. Tuples format each element recursively at the same
/// precision. Everything else (booleans, strings, the empty value) uses
/// evalexpr's own display form.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Tuple(items) => {
            let parts: Vec<String> = items.iter().map(format_value).collect();
            format!("({})", parts.join(", "))
        }
        other => other.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Mathematically whole values keep their full precision; everything else
    // is rounded to OUTPUT_PRECISION significant figures via exponential
    // notation, letting f64's shortest-roundtrip parse drop trailing zeros.
    let rounded = if value.fract() == 0.0 {
        value
    } else {
        format!("{:.*e}", OUTPUT_PRECISION - 1, value)
            .parse::<f64>()
            .unwrap_or(value)
    };
    // f64 Display never switches to exponent form on its own; mirror the
    // usual 1e21 / 1e-6 cutoffs so extreme magnitudes stay readable.
    let magnitude = rounded.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        format!("{:e}", rounded)
    } else {
        rounded.to_string()
    }
}

/// Evaluate an expression and format the outcome as a single message.
///
/// Success: `Result: <expression> = <value>` with the trimmed expression
/// echoed back. Failure: `Calculation failed: <message>`. Errors are logged
/// and fully recovered here; this function never fails.
pub fn calculate(expression: &str) -> String {
    // Trimming for evaluation happens once, inside evaluate_expression; this
    // trim only shapes the echoed text.
    let trimmed = expression.trim();
    match evaluate_expression(expression) {
        Ok(value) => format!("Result: {} = {}", trimmed, format_value(&value)),
        Err(err) => {
            tracing::error!(expression = trimmed, error = %err, "calculation failed");
            format!("Calculation failed: {}", err)
        }
    }
}
