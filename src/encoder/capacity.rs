//! Version selection by payload length.

use crate::encoder::config::Compliance;
use crate::encoder::tables::version_info;
use crate::error::EncodeError;
use crate::models::Version;

const MODE_BITS: usize = 4;

/// Width of the character count indicator for a version
pub fn count_indicator_bits(version: Version, compliance: Compliance) -> usize {
    match compliance {
        Compliance::Faithful => 8,
        Compliance::Standard if version.number() >= 10 => 16,
        Compliance::Standard => 8,
    }
}

/// Codewords reserved ahead of the payload for mode and count indicators
pub fn overhead_bytes(version: Version, compliance: Compliance) -> usize {
    (MODE_BITS + count_indicator_bits(version, compliance)).div_ceil(8)
}

/// Largest payload a version accepts
pub fn max_payload_len(version: Version, compliance: Compliance) -> usize {
    version_info(version).data_capacity() - overhead_bytes(version, compliance)
}

/// Smallest version whose capacity holds `len` payload bytes
pub fn select_version(len: usize, compliance: Compliance) -> Result<Version, EncodeError> {
    Version::all()
        .find(|&v| max_payload_len(v, compliance) >= len)
        .ok_or(EncodeError::CapacityExceeded {
            len,
            max: max_payload_len(Version::MAX, compliance),
        })
}
