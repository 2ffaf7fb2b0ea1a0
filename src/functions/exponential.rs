//! Exponential, logarithmic and root functions.
//!
//! Each returns `None` where the real-valued function is undefined
//! (or, for `exp`, where the result overflows).

pub fn exp(x: f64) -> Option<f64> {
    let result = x.exp();
    (result.is_finite() || !x.is_finite()).then_some(result)
}

pub fn ln(x: f64) -> Option<f64> {
    (x > 0.0).then(|| x.ln())
}

pub fn log10(x: f64) -> Option<f64> {
    (x > 0.0).then(|| x.log10())
}

pub fn sqrt(x: f64) -> Option<f64> {
    (x >= 0.0).then(|| x.sqrt())
}
