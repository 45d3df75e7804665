/// Data codeword assembly for byte mode
use crate::encoder::capacity::count_indicator_bits;
use crate::encoder::config::Compliance;
use crate::encoder::tables::version_info;
use crate::models::Version;

const BYTE_MODE: u32 = 0b0100;
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Append-only bit sequence, most significant bit first
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `count` bits of `value`, MSB first
    pub fn push_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes big-endian; a trailing partial byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.bits.len().div_ceil(8)];
        for (i, &bit) in self.bits.iter().enumerate() {
            bytes[i >> 3] |= u8::from(bit) << (7 - (i & 7));
        }
        bytes
    }
}

/// Data codewords for `payload`, filled to the version's data capacity.
///
/// The caller has already checked that the payload fits.
pub fn encode_data_codewords(payload: &[u8], version: Version, compliance: Compliance) -> Vec<u8> {
    let capacity_bits = version_info(version).data_capacity() * 8;
    let mut bb = BitBuffer::with_capacity(capacity_bits);

    bb.push_bits(BYTE_MODE, 4);
    bb.push_bits(payload.len() as u32, count_indicator_bits(version, compliance));
    for &byte in payload {
        bb.push_bits(u32::from(byte), 8);
    }
    debug_assert!(bb.len() <= capacity_bits);

    let terminator = (capacity_bits - bb.len()).min(4);
    bb.push_bits(0, terminator);
    let align = bb.len().wrapping_neg() & 7;
    bb.push_bits(0, align);

    for &pad in PAD_BYTES.iter().cycle() {
        if bb.len() >= capacity_bits {
            break;
        }
        bb.push_bits(u32::from(pad), 8);
    }
    debug_assert_eq!(bb.len(), capacity_bits);

    bb.to_bytes()
}
