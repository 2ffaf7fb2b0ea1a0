use crate::error::RuntimeError;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric result of scanning or evaluating: an exact integer or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// Narrows a decoded float to `Int` when it has no fractional part and fits in an `i64`.
    pub fn from_decoded(value: f64) -> Self {
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Value::Int(value as i64)
        } else {
            Value::Float(value)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(n) => n as f64,
            Value::Float(x) => x,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Value::Int(n) => n == 0,
            Value::Float(x) => x == 0.0,
        }
    }

    /// Raises `self` to `exponent`.
    ///
    /// Two integers with a non-negative exponent stay integral unless the result overflows.
    /// Everything else is computed in floating point.
    pub fn pow(self, exponent: Value) -> Result<Value, RuntimeError> {
        if let (Value::Int(base), Value::Int(exp)) = (self, exponent) {
            if exp >= 0 {
                if let Some(result) = u32::try_from(exp)
                    .ok()
                    .and_then(|exp| base.checked_pow(exp))
                {
                    return Ok(Value::Int(result));
                }
            }
        }

        let (base, exp) = (self.as_f64(), exponent.as_f64());
        if base == 0.0 && exp < 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }
        if base < 0.0 && exp.fract() != 0.0 && exp.is_finite() {
            return Err(RuntimeError::Domain {
                function: "^",
                operand: self,
            });
        }

        let result = base.powf(exp);
        if result.is_infinite() && base.is_finite() && exp.is_finite() {
            return Err(RuntimeError::Overflow);
        }
        Ok(Value::Float(result))
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(b)
                .map_or(Value::Float(a as f64 + b as f64), Value::Int),
            (a, b) => Value::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_sub(b)
                .map_or(Value::Float(a as f64 - b as f64), Value::Int),
            (a, b) => Value::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_mul(b)
                .map_or(Value::Float(a as f64 * b as f64), Value::Int),
            (a, b) => Value::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl Div for Value {
    type Output = Result<Value, RuntimeError>;

    /// True division: the quotient is always a float, even for two integers.
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(Value::Float(self.as_f64() / rhs.as_f64()))
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        match self {
            Value::Int(n) => n.checked_neg().map_or(Value::Float(-(n as f64)), Value::Int),
            Value::Float(x) => Value::Float(-x),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) if x.is_nan() => f.write_str("nan"),
            Value::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "inf" } else { "-inf" })
            }
            // Very large and very small magnitudes switch to exponent form, e.g. "1e-07".
            Value::Float(x) if x != 0.0 && !(1e-4..1e16).contains(&x.abs()) => {
                let formatted = format!("{:e}", x);
                let (mantissa, exponent) = formatted
                    .split_once('e')
                    .unwrap_or((formatted.as_str(), "0"));
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            // Whole floats keep a trailing ".0" so they stay distinguishable from integers.
            Value::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}
