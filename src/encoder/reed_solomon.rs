/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    pub fn mul(a: u8, b: u8) -> u8 {
        match (Self::log(a), Self::log(b)) {
            (Some(log_a), Some(log_b)) => Self::exp(log_a as usize + log_b as usize),
            _ => 0,
        }
    }

    /// alpha^n, with n reduced mod 255
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// Discrete log of a non-zero element
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 { None } else { Some(LOG_TABLE[a as usize]) }
    }
}

/// Reed-Solomon encoder producing EC codewords for one block
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build an encoder emitting `degree` EC codewords per block
    pub fn new(degree: usize) -> Self {
        Self {
            generator: super::polynomial::generator(degree),
        }
    }

    /// Number of EC codewords produced per block
    pub fn degree(&self) -> usize {
        self.generator.len() - 1
    }

    /// EC codewords for `data`: remainder of data * x^degree by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.degree();
        let mut padded = Vec::with_capacity(data.len() + degree);
        padded.extend_from_slice(data);
        padded.resize(data.len() + degree, 0);

        let remainder = super::polynomial::rem(&padded, &self.generator);

        // Left-pad short remainders so every block gets exactly `degree` bytes
        let mut ecc = vec![0u8; degree];
        let offset = degree - remainder.len();
        ecc[offset..].copy_from_slice(&remainder);
        ecc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Syndrome check: a valid codeword evaluates to zero at alpha^0..alpha^(n-1)
    fn syndromes(codeword: &[u8], num_ecc: usize) -> Vec<u8> {
        (0..num_ecc)
            .map(|i| {
                let x = Gf256::exp(i);
                codeword.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
            })
            .collect()
    }

    #[test]
    fn test_gf256_basic() {
        // 0 * anything = 0
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::mul(1, 123), 123);

        // alpha^8 = x^4 + x^3 + x^2 + 1
        assert_eq!(Gf256::exp(8), 0x1d);
        assert_eq!(Gf256::log(0), None);
        assert_eq!(Gf256::log(2), Some(1));
    }

    #[test]
    fn test_gf256_mul_wraps_exponent() {
        // alpha^200 * alpha^100 = alpha^45
        assert_eq!(Gf256::mul(Gf256::exp(200), Gf256::exp(100)), Gf256::exp(45));
        assert_eq!(Gf256::mul(0x80, 2), 0x1d);
        for a in 1..=255u8 {
            assert_eq!(Gf256::mul(a, 1), a);
        }
    }

    #[test]
    fn test_hello_world_1m() {
        // "HELLO WORLD" at version 1-M
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17];
        let rs = ReedSolomonEncoder::new(10);
        assert_eq!(rs.encode(&data), vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_encoded_block_has_zero_syndromes() {
        let data: Vec<u8> = (0u8..40).map(|i| i.wrapping_mul(37)).collect();
        for degree in [7, 10, 18, 30] {
            let rs = ReedSolomonEncoder::new(degree);
            let ecc = rs.encode(&data);
            assert_eq!(ecc.len(), degree);

            let mut codeword = data.clone();
            codeword.extend_from_slice(&ecc);
            assert!(syndromes(&codeword, degree).iter().all(|&s| s == 0));
        }
    }

    #[test]
    fn test_zero_data_gives_zero_ecc() {
        let rs = ReedSolomonEncoder::new(13);
        assert_eq!(rs.encode(&[0u8; 9]), vec![0u8; 13]);
    }
}
