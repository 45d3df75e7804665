/// Reed-Solomon encoding for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use std::sync::OnceLock;

const PRIMITIVE_POLY: u16 = 0x11D;

struct Tables {
    // Doubled so that exp[log a + log b] never needs a modulo.
    exp: [u8; 512],
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Tables { exp, log }
    })
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// 2^n
    pub fn exp(n: usize) -> u8 {
        tables().exp[n % 255]
    }
}

/// Polynomial product, coefficients highest degree first
pub fn poly_mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] ^= Gf256::mul(ai, bj);
        }
    }
    out
}

/// Remainder of `dividend` divided by a monic `divisor`, highest degree
/// first. The result has `divisor.len() - 1` coefficients.
pub fn poly_mod(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    debug_assert!(!divisor.is_empty() && divisor[0] == 1);
    let rem_len = divisor.len() - 1;
    if dividend.len() < divisor.len() {
        let mut out = vec![0u8; rem_len - dividend.len()];
        out.extend_from_slice(dividend);
        return out;
    }
    let mut out = dividend.to_vec();
    for i in 0..=dividend.len() - divisor.len() {
        let coef = out[i];
        if coef == 0 {
            continue;
        }
        for (j, &g) in divisor.iter().enumerate() {
            out[i + j] ^= Gf256::mul(g, coef);
        }
    }
    out.split_off(dividend.len() - rem_len)
}

/// Generator polynomial (x - 2^0)(x - 2^1)...(x - 2^(n-1))
pub fn generator_poly(num_ecc: usize) -> Vec<u8> {
    (0..num_ecc).fold(vec![1u8], |acc, i| poly_mul(&acc, &[1, Gf256::exp(i)]))
}

/// Reed-Solomon encoder for a fixed number of EC codewords
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            generator: generator_poly(num_ecc_codewords),
        }
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len() - 1
    }

    /// EC codewords for one data block
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut padded = Vec::with_capacity(data.len() + self.num_ecc_codewords());
        padded.extend_from_slice(data);
        padded.resize(data.len() + self.num_ecc_codewords(), 0);
        poly_mod(&padded, &self.generator)
    }
}
