//! Trigonometric functions working in degrees.
//!
//! `sin`, `cos` and `tan` take their argument in degrees; the inverse functions
//! return degrees. The forward functions are undefined for infinite input and
//! inverse sine and cosine are only defined on [-1, 1].

pub fn sin_degrees(x: f64) -> Option<f64> {
    x.is_finite().then(|| x.to_radians().sin())
}

pub fn cos_degrees(x: f64) -> Option<f64> {
    x.is_finite().then(|| x.to_radians().cos())
}

pub fn tan_degrees(x: f64) -> Option<f64> {
    x.is_finite().then(|| x.to_radians().tan())
}

pub fn asin_degrees(x: f64) -> Option<f64> {
    (-1.0..=1.0).contains(&x).then(|| x.asin().to_degrees())
}

pub fn acos_degrees(x: f64) -> Option<f64> {
    (-1.0..=1.0).contains(&x).then(|| x.acos().to_degrees())
}

pub fn atan_degrees(x: f64) -> f64 {
    x.atan().to_degrees()
}
