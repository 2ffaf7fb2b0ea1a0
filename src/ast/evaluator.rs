use crate::ast::{ASTNode, Parser, Token, TokenKind, Value};
use crate::error::{CalcError, LexError, RuntimeError};
use log::{debug, trace};

/// Evaluates the tree produced by a parser.
pub struct Interpreter<I> {
    parser: Parser<I>,
}

impl<I> Interpreter<I>
where
    I: Iterator<Item = Result<Token, LexError>>,
{
    pub fn new(parser: Parser<I>) -> Self {
        Self { parser }
    }

    /// Pulls the full tree from the parser and computes its value.
    pub fn interpret(mut self) -> Result<Value, CalcError> {
        let tree = self.parser.parse()?;
        debug!("Evaluating tree of depth {}", tree.depth());
        let result = evaluate(&tree)?;
        debug!("Result: {}", result);
        Ok(result)
    }
}

/// Recursively evaluates a single node.
pub fn evaluate(node: &ASTNode) -> Result<Value, RuntimeError> {
    trace!("Visiting {:?}", node);
    match node {
        ASTNode::Number(value) => Ok(*value),
        ASTNode::UnaryOperation { operator, operand } => {
            let value = evaluate(operand)?;
            match operator {
                TokenKind::Plus => Ok(value),
                TokenKind::Minus => Ok(-value),
                other => Err(RuntimeError::NoHandler(format!("unary operator {}", other))),
            }
        }
        ASTNode::BinaryOperation {
            left,
            operator,
            right,
        } => {
            let left_value = evaluate(left)?;
            let right_value = evaluate(right)?;
            match operator {
                TokenKind::Plus => Ok(left_value + right_value),
                TokenKind::Minus => Ok(left_value - right_value),
                TokenKind::Multiply => Ok(left_value * right_value),
                TokenKind::Divide => left_value / right_value,
                TokenKind::Power => left_value.pow(right_value),
                other => Err(RuntimeError::NoHandler(format!(
                    "binary operator {}",
                    other
                ))),
            }
        }
        ASTNode::FunctionCall { function, operand } => function.apply(evaluate(operand)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Scanner;
    use crate::functions::Function;

    fn interpret(input: &str) -> Result<Value, CalcError> {
        let parser = Parser::new(Scanner::new(input))?;
        Interpreter::new(parser).interpret()
    }

    fn approx(input: &str, expected: f64) {
        let value = interpret(input).unwrap().as_f64();
        assert!(
            (value - expected).abs() < 1e-9,
            "{input} evaluated to {value}, expected {expected}"
        );
    }

    #[test]
    fn test_arithmetic() {
        let cases = [
            ("1+1", Value::Int(2)),
            ("1+1+1", Value::Int(3)),
            ("3-1", Value::Int(2)),
            ("4+5-2", Value::Int(7)),
            ("3", Value::Int(3)),
            ("2+7*4", Value::Int(30)),
            ("(2+7)*4", Value::Int(36)),
            ("7-8/4", Value::Float(5.0)),
            ("14+2*3-6/2", Value::Float(17.0)),
            ("3/2", Value::Float(1.5)),
            ("1.1", Value::Float(1.1)),
            ("1.5*2", Value::Float(3.0)),
        ];
        for (input, expected) in cases {
            assert_eq!(interpret(input), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_exponentiation() {
        let cases = [
            ("2^2", Value::Int(4)),
            ("3^(1+2)", Value::Int(27)),
            ("2^(2*5)", Value::Int(1024)),
            ("3*2^2", Value::Int(12)),
            ("3^2*2", Value::Int(18)),
            ("2^-1", Value::Float(0.5)),
            ("4^0.5", Value::Float(2.0)),
        ];
        for (input, expected) in cases {
            assert_eq!(interpret(input), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_unary_signs() {
        let cases = [
            ("-1", Value::Int(-1)),
            ("--1", Value::Int(1)),
            ("-+1", Value::Int(-1)),
            ("5--2", Value::Int(7)),
            ("5+-2", Value::Int(3)),
            ("5---2", Value::Int(3)),
            ("+2", Value::Int(2)),
            ("2++2", Value::Int(4)),
        ];
        for (input, expected) in cases {
            assert_eq!(interpret(input), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(interpret("1E-1"), Ok(Value::Float(0.1)));
        assert_eq!(interpret("2E4*2"), Ok(Value::Int(40000)));
        assert_eq!(interpret("2*3E3"), Ok(Value::Int(6000)));
        assert_eq!(interpret("2E1+2"), Ok(Value::Int(22)));
        assert_eq!(interpret("2e1+2"), Ok(Value::Int(22)));
    }

    #[test]
    fn test_functions() {
        approx("cos(45)", 45f64.to_radians().cos());
        approx("sin(30)", 0.5);
        approx("tan60", 60f64.to_radians().tan());
        approx("exp(4+9)", 13f64.exp());
        approx("ln4", 4f64.ln());
        approx("log100", 2.0);
        approx("sqrt25", 5.0);
        approx("acos0.5", 60.0);
        approx("asin(1/2)", 30.0);
        approx("atan(1)", 45.0);
        approx("cos-45", 45f64.to_radians().cos());
        approx("2*sqrt(sqrt 16)", 4.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            interpret("1/0"),
            Err(RuntimeError::DivisionByZero.into())
        );
        assert_eq!(
            interpret("1/(2-2.0)"),
            Err(RuntimeError::DivisionByZero.into())
        );
        assert_eq!(
            interpret("0^-1"),
            Err(RuntimeError::DivisionByZero.into())
        );
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            interpret("ln0"),
            Err(RuntimeError::Domain {
                function: "LN",
                operand: Value::Int(0),
            }
            .into())
        );
        assert!(matches!(
            interpret("sqrt-1"),
            Err(CalcError::Runtime(RuntimeError::Domain { function: "SQRT", .. }))
        ));
        assert!(matches!(
            interpret("log(1-1)"),
            Err(CalcError::Runtime(RuntimeError::Domain { function: "LOG", .. }))
        ));
        assert!(matches!(
            interpret("sin(1E400)"),
            Err(CalcError::Runtime(RuntimeError::Domain { function: "SIN", .. }))
        ));
        assert!(matches!(
            interpret("(-8)^(1/3)"),
            Err(CalcError::Runtime(RuntimeError::Domain { function: "^", .. }))
        ));
    }

    #[test]
    fn test_errors_from_earlier_stages() {
        assert_eq!(
            interpret("#"),
            Err(LexError::InvalidCharacter('#').into())
        );
        assert!(matches!(interpret("2^3^2"), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_unknown_operators_have_no_handler() {
        let node = ASTNode::unary(TokenKind::Multiply, ASTNode::number(1));
        assert_eq!(
            evaluate(&node),
            Err(RuntimeError::NoHandler("unary operator '*'".to_string()))
        );

        let node = ASTNode::binary(ASTNode::number(1), TokenKind::LeftParen, ASTNode::number(2));
        assert_eq!(
            evaluate(&node),
            Err(RuntimeError::NoHandler("binary operator '('".to_string()))
        );
    }

    #[test]
    fn test_hand_built_tree() {
        let node = ASTNode::call(
            Function::Sqrt,
            ASTNode::binary(ASTNode::number(9), TokenKind::Plus, ASTNode::number(16)),
        );
        assert_eq!(evaluate(&node), Ok(Value::Float(5.0)));
    }
}
