//! Polynomial arithmetic over GF(256)
//!
//! Coefficients are stored highest degree first, so `[1, 3]` is `x + 3`.

use super::reed_solomon::Gf256;

/// Product of two polynomials
pub fn mul(p1: &[u8], p2: &[u8]) -> Vec<u8> {
    if p1.is_empty() || p2.is_empty() {
        return Vec::new();
    }
    let mut coeff = vec![0u8; p1.len() + p2.len() - 1];
    for (i, &a) in p1.iter().enumerate() {
        for (j, &b) in p2.iter().enumerate() {
            coeff[i + j] ^= Gf256::mul(a, b);
        }
    }
    coeff
}

/// Remainder of `dividend` divided by `divisor`
///
/// `divisor` must be monic (leading coefficient 1), which every
/// generator polynomial is. Leading zero terms are stripped from the result.
pub fn rem(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut result = dividend.to_vec();

    while result.len() >= divisor.len() {
        let coeff = result[0];
        for (i, &d) in divisor.iter().enumerate() {
            result[i] ^= Gf256::mul(d, coeff);
        }

        let leading_zeros = result.iter().take_while(|&&c| c == 0).count();
        // The leading term always cancels, so at least one term is dropped
        result.drain(..leading_zeros.max(1));
    }

    result
}

/// Generator polynomial `(x - a^0)(x - a^1)...(x - a^(degree-1))`
pub fn generator(degree: usize) -> Vec<u8> {
    (0..degree).fold(vec![1u8], |poly, i| mul(&poly, &[1, Gf256::exp(i)]))
}
