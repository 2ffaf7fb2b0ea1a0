pub mod ast;
pub mod error;
pub mod functions;

use ast::{Interpreter, Parser, Scanner, Value};
use error::CalcError;
use log::debug;
use rayon::prelude::*;

/// Scans, parses and evaluates a single expression with a fresh pipeline.
pub fn evaluate_expression(expression: &str) -> Result<Value, CalcError> {
    debug!("Evaluating expression: {}", expression);
    let parser = Parser::new(Scanner::new(expression))?;
    Interpreter::new(parser).interpret()
}

/// Evaluates independent expressions in parallel.
///
/// Results come back in input order; a failing expression does not affect the others.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<Value, CalcError>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| evaluate_expression(expression.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexError, RuntimeError};

    #[test]
    fn test_evaluate_expression() {
        assert_eq!(evaluate_expression("2+7*4"), Ok(Value::Int(30)));
        assert_eq!(evaluate_expression("  (2 + 7) * 4  "), Ok(Value::Int(36)));
        assert_eq!(evaluate_expression("3/2"), Ok(Value::Float(1.5)));
    }

    #[test]
    fn test_result_display() {
        assert_eq!(evaluate_expression("2+7*4").unwrap().to_string(), "30");
        assert_eq!(evaluate_expression("7-8/4").unwrap().to_string(), "5.0");
        assert_eq!(evaluate_expression("1E-1").unwrap().to_string(), "0.1");
        assert_eq!(evaluate_expression("1E-7").unwrap().to_string(), "1e-07");
        assert_eq!(
            evaluate_expression("2^64").unwrap().to_string(),
            "1.8446744073709552e+19"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            evaluate_expression("1/0").unwrap_err().to_string(),
            "Division by zero"
        );
        assert_eq!(
            evaluate_expression("2 # 3").unwrap_err().to_string(),
            "Invalid character: #"
        );
        assert_eq!(
            evaluate_expression("2^3^2").unwrap_err().to_string(),
            "Invalid syntax: expected end of input but received '^'"
        );
        assert_eq!(
            evaluate_expression("sin(1E400)").unwrap_err().to_string(),
            "Math domain error: SIN is undefined for inf"
        );
    }

    #[test]
    fn test_evaluate_batch_preserves_order() {
        let expressions = ["1+1", "1/0", "sqrt25", "foo", "2^10"];
        let expected: Vec<Result<Value, CalcError>> = vec![
            Ok(Value::Int(2)),
            Err(RuntimeError::DivisionByZero.into()),
            Ok(Value::Float(5.0)),
            Err(LexError::UnrecognizedFunction("FOO".to_string()).into()),
            Ok(Value::Int(1024)),
        ];
        assert_eq!(evaluate_batch(&expressions), expected);
    }

    #[test]
    fn test_evaluate_batch_matches_sequential() {
        let expressions: Vec<String> = (0..500).map(|i| format!("{i}*{i}-{i}/2")).collect();
        let sequential: Vec<_> = expressions
            .iter()
            .map(|expression| evaluate_expression(expression))
            .collect();
        assert_eq!(evaluate_batch(expressions.as_slice()), sequential);
    }
}
