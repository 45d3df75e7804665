use tracing::debug;

use crate::encoder::bitstream::encode_data_codewords;
use crate::encoder::blocks::add_ec_and_interleave;
use crate::encoder::capacity::select_version;
use crate::encoder::config::EncoderConfig;
use crate::encoder::function_mask::build_function_patterns;
use crate::encoder::mask::select_mask;
use crate::encoder::placement::place_codewords;
use crate::encoder::tables::version_info;
use crate::error::EncodeError;
use crate::models::{ECLevel, QrCode};

/// Run every encoding stage for one payload
pub(crate) fn encode_payload(payload: &[u8], config: &EncoderConfig) -> Result<QrCode, EncodeError> {
    let version = select_version(payload.len(), config.compliance)?;
    let info = version_info(version);
    debug!(
        len = payload.len(),
        version = version.number(),
        size = version.size(),
        "selected version"
    );

    let data = encode_data_codewords(payload, version, config.compliance);
    let codewords = add_ec_and_interleave(&data, info);
    debug!(
        data = data.len(),
        total = codewords.len(),
        blocks = info.num_blocks(),
        "built codeword stream"
    );

    let (mut grid, func) = build_function_patterns(version, config.compliance);
    place_codewords(&mut grid, &func, &codewords);
    debug_assert_eq!(grid.unset_count(), 0);

    let selection = select_mask(&grid, &func, config.compliance, config.parallel_masks);
    debug!(
        mask = selection.mask.index(),
        penalty = selection.penalties[selection.mask.index()],
        "selected mask"
    );

    Ok(QrCode::new(
        version,
        ECLevel::M,
        selection.mask,
        selection.grid.to_bit_matrix(),
        selection.penalties,
    ))
}
