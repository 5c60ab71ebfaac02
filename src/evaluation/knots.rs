//! Level boundaries and cumulative sums of an isotonic fit.
//!
//! The fit is the left derivative of the greatest convex minorant of the
//! cumulative sum diagram `(i, C_i)`, with `C_0 = 0` and `C_i = y_0 + ... + y_(i-1)`.
//! Knots are the indices where that minorant changes slope, i.e. the last
//! index of every constant level of the fit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::Float;

/// 0-based index of the last position of every constant level in `fitted`.
///
/// For non-empty input the final index is always a knot.
pub fn knots<T: Float>(fitted: &[T]) -> Vec<usize> {
    let n = fitted.len();
    let mut out = Vec::new();
    for i in 0..n {
        if i + 1 == n || fitted[i] != fitted[i + 1] {
            out.push(i);
        }
    }
    out
}

/// Cumulative sums `[0, y_0, y_0 + y_1, ...]` of length `y.len() + 1`.
pub fn cumulative<T: Float>(y: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(y.len() + 1);
    let mut acc = T::zero();
    out.push(acc);
    for &v in y {
        acc = acc + v;
        out.push(acc);
    }
    out
}
