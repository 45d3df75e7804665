/// Block splitting, EC generation and interleaving
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::VersionInfo;

/// Append EC codewords to `data` and interleave per the version layout.
///
/// `data` must hold exactly `info.data_capacity()` codewords.
pub fn add_ec_and_interleave(data: &[u8], info: &VersionInfo) -> Vec<u8> {
    debug_assert_eq!(data.len(), info.data_capacity());

    let rs = ReedSolomonEncoder::new(info.ec_per_block);
    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(info.num_blocks());
    let mut ec_blocks: Vec<Vec<u8>> = Vec::with_capacity(info.num_blocks());

    let mut offset = 0;
    for len in info.block_lengths() {
        let block = &data[offset..offset + len];
        offset += len;
        ec_blocks.push(rs.encode(block));
        data_blocks.push(block);
    }

    let mut result = Vec::with_capacity(info.total_codewords);
    let longest = info.group1.1.max(info.group2.1);
    for i in 0..longest {
        for block in &data_blocks {
            if let Some(&byte) = block.get(i) {
                result.push(byte);
            }
        }
    }
    for i in 0..info.ec_per_block {
        for ec in &ec_blocks {
            result.push(ec[i]);
        }
    }

    debug_assert_eq!(result.len(), info.total_codewords);
    result
}
