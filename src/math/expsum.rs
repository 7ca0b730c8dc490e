//! Exponential-sum curve generation.
//!
//! For a tuple `(p_1, …, p_k)` of positive integers, the curve is the sequence
//! of partial sums of
//!
//! `exp(2πi · (n/p_1 + n²/p_2 + … + n^k/p_k))`  for `n = 0 ..= lcm(p_1, …, p_k)`
//!
//! plotted in the complex plane. See <https://www.johndcook.com/expsum/details.html>.
//!
//! Numerical notes:
//! - The raw phase grows like `n^k`, and `sin`/`cos` of a large argument lose
//!   precision to range reduction. Since only the fractional part of each
//!   `n^e / p_e` matters, we reduce `n^e mod p_e` with exact integer
//!   arithmetic first, keeping the argument small. The phase is identical
//!   modulo 2π, so the curve is unchanged.
//! - The terms are periodic with period `lcm`, so the last partial sum
//!   usually returns to the first point. This closure is a number-theoretic
//!   property of the tuple, not a guarantee; rare tuples genuinely fail to
//!   close and must be rendered as-is, not "fixed".

use std::f64::consts::TAU;

use super::{CurveError, check_params};

/// Generate the exponential-sum polyline for a parameter tuple.
///
/// Returns `lcm(params) + 1` points in step order; the first is always
/// exactly `(1.0, 0.0)` since the sum at step 0 is `exp(0)`.
///
/// Pure function of its input: no shared state, safe to call concurrently.
pub fn generate_curve(params: &[i64]) -> Result<Vec<(f64, f64)>, CurveError> {
    check_params(params)?;
    let params: Vec<u64> = params.iter().map(|&p| p as u64).collect();
    let m = lcm_all(&params)?;

    let mut points = Vec::with_capacity(m as usize + 1);
    let (mut sum_re, mut sum_im) = (0.0_f64, 0.0_f64);
    for n in 0..=m {
        // Fractional number of turns: Σ_e (n^e mod p_e) / p_e, exact in the
        // integer part so the trig argument stays below 2π·k.
        let turns: f64 = params
            .iter()
            .enumerate()
            .map(|(i, &p)| pow_mod(n, (i + 1) as u32, p) as f64 / p as f64)
            .sum();
        let (sin, cos) = (TAU * turns).sin_cos();
        sum_re += cos;
        sum_im += sin;
        points.push((sum_re, sum_im));
    }

    Ok(points)
}

/// Least common multiple of a validated tuple.
pub fn lcm_all(params: &[u64]) -> Result<u64, CurveError> {
    let mut acc: u64 = 1;
    for &p in params {
        acc = acc
            .checked_div(gcd(acc, p))
            .and_then(|q| q.checked_mul(p))
            .ok_or(CurveError::LcmOverflow)?;
    }
    Ok(acc)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `base^exp mod modulus` by binary exponentiation, widened to `u128` so the
/// intermediate products cannot overflow.
fn pow_mod(base: u64, exp: u32, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = u128::from(modulus);
    let mut acc: u128 = 1;
    let mut b = u128::from(base % modulus);
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            acc = acc * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    acc as u64
}
