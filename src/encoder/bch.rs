/// BCH codes protecting QR format and version info

/// Format info generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const G15: u32 = 0x537;
/// Version info generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const G18: u32 = 0x1f25;
/// XOR mask applied to format info so it is never all-light
pub const G15_MASK: u32 = 0x5412;

/// Position of the highest set bit plus one (0 for 0)
pub fn bch_digit(data: u32) -> u32 {
    u32::BITS - data.leading_zeros()
}

/// Remainder of `data * x^deg(generator)` divided by `generator`
pub fn remainder(data: u32, generator: u32) -> u32 {
    let gen_digit = bch_digit(generator);
    let mut d = data << (gen_digit - 1);
    while bch_digit(d) >= gen_digit {
        d ^= generator << (bch_digit(d) - gen_digit);
    }
    d
}

/// Full codeword: data followed by its BCH remainder
pub fn encode(data: u32, generator: u32) -> u32 {
    (data << (bch_digit(generator) - 1)) | remainder(data, generator)
}
