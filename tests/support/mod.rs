//! Minimal reader for encoded symbols, used to check round trips.
//!
//! Works on a clean module grid: reads format info, removes the mask,
//! walks the zigzag, deinterleaves, verifies RS syndromes and parses a
//! single byte-mode segment.

#![allow(dead_code)]

use upi_qr::QrCode;

const FORMAT_WORDS: [u16; 8] = [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0];

/// (total codewords, ec per block, group 1 (blocks, data), group 2 (blocks, data))
const VERSIONS: [(usize, usize, (usize, usize), (usize, usize)); 10] = [
    (26, 10, (1, 16), (0, 0)),
    (44, 16, (1, 28), (0, 0)),
    (70, 26, (1, 44), (0, 0)),
    (100, 18, (2, 32), (0, 0)),
    (134, 24, (2, 43), (0, 0)),
    (172, 16, (4, 27), (0, 0)),
    (196, 18, (4, 31), (0, 0)),
    (242, 22, (2, 38), (2, 39)),
    (292, 22, (3, 36), (2, 37)),
    (346, 26, (4, 43), (1, 44)),
];

const ALIGNMENT: [&[usize]; 10] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

/// What the reader recovered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub version: usize,
    pub mask: usize,
    pub payload: Vec<u8>,
}

/// Options mirroring the encoder's compliance modes
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Version info blocks are present (and reserved) for v7+
    pub version_info: bool,
    /// Version 10 uses a 16-bit character count
    pub wide_count_at_v10: bool,
}

impl ReadOptions {
    pub const FAITHFUL: ReadOptions = ReadOptions {
        version_info: false,
        wide_count_at_v10: false,
    };
    pub const STANDARD: ReadOptions = ReadOptions {
        version_info: true,
        wide_count_at_v10: true,
    };
}

fn function_mask(version: usize, size: usize, version_info: bool) -> Vec<bool> {
    let mut mask = vec![false; size * size];
    let mut set = |x: usize, y: usize| {
        if x < size && y < size {
            mask[y * size + x] = true;
        }
    };

    // Finder patterns + separators
    for (fx, fy) in [(0, 0), (size - 7, 0), (0, size - 7)] {
        for y in fy.saturating_sub(1)..(fy + 8).min(size) {
            for x in fx.saturating_sub(1)..(fx + 8).min(size) {
                set(x, y);
            }
        }
    }

    // Timing
    for i in 0..size {
        set(6, i);
        set(i, 6);
    }

    let align = ALIGNMENT[version - 1];
    for &cy in align {
        for &cx in align {
            let in_tl = cx <= 8 && cy <= 8;
            let in_tr = cx >= size - 9 && cy <= 8;
            let in_bl = cx <= 8 && cy >= size - 9;
            if in_tl || in_tr || in_bl {
                continue;
            }
            for dy in 0..5 {
                for dx in 0..5 {
                    set(cx - 2 + dx, cy - 2 + dy);
                }
            }
        }
    }

    // Format info and dark module
    for i in 0..9 {
        set(8, i);
        set(i, 8);
    }
    for i in 0..8 {
        set(size - 1 - i, 8);
        set(8, size - 1 - i);
    }

    if version_info && version >= 7 {
        for a in 0..6 {
            for b in 0..3 {
                set(size - 11 + b, a);
                set(a, size - 11 + b);
            }
        }
    }

    mask
}

fn masked(mask: usize, row: usize, col: usize) -> bool {
    let (i, j) = (row, col);
    match mask {
        0 => (i + j) % 2 == 0,
        1 => i % 2 == 0,
        2 => j % 3 == 0,
        3 => (i + j) % 3 == 0,
        4 => (i / 2 + j / 3) % 2 == 0,
        5 => (i * j) % 2 + (i * j) % 3 == 0,
        6 => ((i * j) % 2 + (i * j) % 3) % 2 == 0,
        _ => ((i + j) % 2 + (i * j) % 3) % 2 == 0,
    }
}

/// Both 15-bit format copies, MSB first
pub fn read_format_words(qr: &QrCode) -> (u16, u16) {
    let s = qr.size();
    let cols = [0, 1, 2, 3, 4, 5, 7, 8, s - 7, s - 6, s - 5, s - 4, s - 3, s - 2, s - 1];
    let rows = [s - 1, s - 2, s - 3, s - 4, s - 5, s - 6, s - 7, 8, 7, 5, 4, 3, 2, 1, 0];
    let mut horizontal = 0u16;
    let mut vertical = 0u16;
    for i in 0..15 {
        horizontal = (horizontal << 1) | u16::from(qr.get(cols[i], 8));
        vertical = (vertical << 1) | u16::from(qr.get(8, rows[i]));
    }
    (horizontal, vertical)
}

fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1D;
        }
        b >>= 1;
    }
    product
}

/// True when every syndrome S_i = c(2^i), i < num_ecc, is zero
pub fn syndromes_ok(block: &[u8], num_ecc: usize) -> bool {
    let mut alpha = 1u8;
    for _ in 0..num_ecc {
        let s = block.iter().fold(0u8, |acc, &c| gf_mul(acc, alpha) ^ c);
        if s != 0 {
            return false;
        }
        alpha = gf_mul(alpha, 2);
    }
    true
}

/// Read the payload back out of an encoded symbol
pub fn read(qr: &QrCode, options: ReadOptions) -> Result<Decoded, String> {
    let size = qr.size();
    if size < 21 || (size - 17) % 4 != 0 {
        return Err(format!("bad size {size}"));
    }
    let version = (size - 17) / 4;
    if version > VERSIONS.len() {
        return Err(format!("unsupported version {version}"));
    }

    let (horizontal, vertical) = read_format_words(qr);
    if horizontal != vertical {
        return Err(format!("format copies differ: {horizontal:#06x} vs {vertical:#06x}"));
    }
    let mask = FORMAT_WORDS
        .iter()
        .position(|&w| w == horizontal)
        .ok_or_else(|| format!("unknown format word {horizontal:#06x}"))?;

    let func = function_mask(version, size, options.version_info);
    let module = |x: usize, y: usize| {
        let bit = qr.get(x, y);
        if masked(mask, y, x) { !bit } else { bit }
    };

    // Zigzag, right column first, starting upward
    let mut bits = Vec::new();
    let mut upward = true;
    let mut col = size as i32 - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            for c in [col as usize, col as usize - 1] {
                if !func[row * size + c] {
                    bits.push(module(c, row));
                }
            }
        }
        upward = !upward;
        col -= 2;
    }

    let (total, ec_per_block, g1, g2) = VERSIONS[version - 1];
    if bits.len() < total * 8 {
        return Err(format!("only {} data modules for {} codewords", bits.len(), total));
    }
    let codewords: Vec<u8> = bits[..total * 8]
        .chunks(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
        .collect();

    // Deinterleave
    let lengths: Vec<usize> = std::iter::repeat(g1.1)
        .take(g1.0)
        .chain(std::iter::repeat(g2.1).take(g2.0))
        .collect();
    let mut blocks: Vec<Vec<u8>> = lengths.iter().map(|&n| Vec::with_capacity(n + ec_per_block)).collect();
    let mut it = codewords.iter().copied();
    let longest = lengths.iter().copied().max().unwrap_or(0);
    for i in 0..longest {
        for (b, &len) in lengths.iter().enumerate() {
            if i < len {
                blocks[b].push(it.next().ok_or("ran out of data codewords")?);
            }
        }
    }
    for _ in 0..ec_per_block {
        for block in blocks.iter_mut() {
            block.push(it.next().ok_or("ran out of ec codewords")?);
        }
    }

    let mut data = Vec::new();
    for (b, block) in blocks.iter().enumerate() {
        if !syndromes_ok(block, ec_per_block) {
            return Err(format!("block {b} has nonzero syndromes"));
        }
        data.extend_from_slice(&block[..lengths[b]]);
    }

    // Byte-mode segment
    let bit = |i: usize| (data[i / 8] >> (7 - i % 8)) & 1;
    let read_bits = |start: usize, n: usize| (start..start + n).fold(0usize, |acc, i| (acc << 1) | usize::from(bit(i)));
    let mode = read_bits(0, 4);
    if mode != 0b0100 {
        return Err(format!("unexpected mode {mode:#06b}"));
    }
    let count_bits = if options.wide_count_at_v10 && version >= 10 { 16 } else { 8 };
    let len = read_bits(4, count_bits);
    let start = 4 + count_bits;
    if start + len * 8 > data.len() * 8 {
        return Err(format!("count {len} overruns data"));
    }
    let payload = (0..len).map(|k| read_bits(start + k * 8, 8) as u8).collect();

    Ok(Decoded {
        version,
        mask,
        payload,
    })
}
