/// DC42 rolling checksum

use crate::format::constants::TAG_CHECKSUM_SKIP;

/// Compute the DC42 rolling checksum over a byte region.
///
/// The region is consumed as big-endian 16-bit words. For each word the
/// accumulator is advanced with a wrapping 32-bit add followed by a
/// rotate right by one bit. This is the additive-rotate hash used by
/// Disk Copy 4.2, not a standards-based CRC; both the wraparound and the
/// rotate direction must match bit-for-bit for interoperability with
/// existing DC42 tooling.
///
/// The format only defines checksums over even-length regions; a
/// trailing odd byte is not consumed.
pub fn checksum(data: &[u8]) -> u32 {
    let mut acc: u32 = 0;
    for word in data.chunks_exact(2) {
        acc = acc.wrapping_add(u16::from_be_bytes([word[0], word[1]]) as u32);
        acc = acc.rotate_right(1);
    }
    acc
}

/// Compute the checksum of a tag region.
///
/// The first 12 tag bytes are a reserved hardware/driver descriptor and
/// are never checksummed. A region of 12 bytes or fewer has a defined
/// checksum of 0 with no bytes consumed.
pub fn tag_checksum(tags: &[u8]) -> u32 {
    if tags.len() <= TAG_CHECKSUM_SKIP {
        return 0;
    }
    checksum(&tags[TAG_CHECKSUM_SKIP..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_region() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn test_two_word_scenario() {
        // Words 0x0001, 0x0002: acc = 1, rotate -> 0x80000000;
        // acc = 0x80000002, rotate -> 0x40000001.
        assert_eq!(checksum(&[0x00, 0x01, 0x00, 0x02]), 0x4000_0001);
    }

    #[test]
    fn test_single_word() {
        assert_eq!(checksum(&[0x00, 0x01]), 0x8000_0000);
    }

    #[test]
    fn test_wraparound() {
        // Enough 0xFFFF words to overflow a 32-bit accumulator; the
        // overflow is silently discarded.
        assert_eq!(checksum(&vec![0xFF; 4096]), 0xFFC1_FFFD);
    }

    #[test]
    fn test_order_sensitivity() {
        let forward = checksum(&[0x12, 0x34, 0x56, 0x78]);
        let reversed = checksum(&[0x56, 0x78, 0x12, 0x34]);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_trailing_odd_byte_not_consumed() {
        let even = checksum(&[0x12, 0x34]);
        let odd = checksum(&[0x12, 0x34, 0xFF]);
        assert_eq!(even, odd);
    }

    #[test]
    fn test_tag_region_at_most_12_bytes_is_zero() {
        assert_eq!(tag_checksum(&[]), 0);
        assert_eq!(tag_checksum(&[0xFF; 12]), 0);
    }

    #[test]
    fn test_tag_region_skips_reserved_prefix() {
        // 14 bytes: the reserved prefix hides the first 12, leaving one
        // word (bytes 12..14).
        let mut tags = vec![0xAA; 12];
        tags.extend_from_slice(&[0x00, 0x01]);
        assert_eq!(tag_checksum(&tags), checksum(&[0x00, 0x01]));

        // Prefix contents never influence the result.
        let mut other = vec![0x55; 12];
        other.extend_from_slice(&[0x00, 0x01]);
        assert_eq!(tag_checksum(&tags), tag_checksum(&other));
    }

    proptest! {
        #[test]
        fn prop_deterministic(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(checksum(&data), checksum(&data));
        }

        #[test]
        fn prop_distinct_word_swap_changes_result(a in any::<u16>(), b in any::<u16>()) {
            prop_assume!(a != b);
            let forward = [a.to_be_bytes(), b.to_be_bytes()].concat();
            let swapped = [b.to_be_bytes(), a.to_be_bytes()].concat();
            prop_assert_ne!(checksum(&forward), checksum(&swapped));
        }
    }
}
