//! Elementary real functions and their composition.

/// The Heaviside step function, encoding the sign of its argument:
///
/// - H(x) = 0 for x < 0,
/// - H(0) = 0.5,
/// - H(x) = 1 for x > 0.
///
/// The comparison against zero is exact; −0.0 compares equal to zero.
#[must_use]
pub fn heaviside(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x == 0.0 {
        0.5
    } else {
        1.0
    }
}

/// Composes two unary functions, applying `fst` first.
pub fn compose<A, B, C, F: Fn(A) -> B, G: Fn(B) -> C>(fst: F, snd: G) -> impl Fn(A) -> C {
    move |x| snd(fst(x))
}

/// The square function x ↦ x².
#[must_use]
pub fn square(x: f64) -> f64 {
    x * x
}

/// The successor function y ↦ y + 1.
#[must_use]
pub fn successor(y: f64) -> f64 {
    y + 1.0
}

/// The composition of [`square`] and [`successor`], x ↦ x² + 1.
#[must_use]
pub fn square_successor(x: f64) -> f64 {
    compose(square, successor)(x)
}
