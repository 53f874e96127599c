//! Capacity ladder used to size the slot store.
//!
//! Table sizes are picked from a fixed ascending list of primes, each roughly
//! double the previous one, which keeps `hash % slots` from clustering on
//! hashes that share small factors.

/// Ascending prime table sizes, from 53 up to roughly 1.38e19.
pub static PRIME_LADDER: [u64; 59] = [
    53,
    97,
    191,
    383,
    769,
    1_531,
    3_067,
    6_143,
    12_289,
    24_571,
    49_157,
    98_299,
    196_613,
    393_209,
    786_431,
    1_572_869,
    3_145_721,
    6_291_449,
    12_582_917,
    25_165_813,
    50_331_653,
    100_663_291,
    201_326_611,
    402_653_189,
    805_306_357,
    1_610_612_741,
    3_221_225_473,
    6_442_450_939,
    12_884_901_893,
    25_769_803_799,
    51_539_607_551,
    103_079_215_111,
    206_158_430_209,
    412_316_860_441,
    824_633_720_831,
    1_649_267_441_651,
    3_298_534_883_309,
    6_597_069_766_657,
    13_194_139_533_299,
    26_388_279_066_623,
    52_776_558_133_303,
    105_553_116_266_489,
    211_106_232_532_969,
    422_212_465_066_001,
    844_424_930_131_963,
    1_688_849_860_263_953,
    3_377_699_720_527_861,
    6_755_399_441_055_731,
    13_510_798_882_111_483,
    27_021_597_764_222_939,
    54_043_195_528_445_957,
    108_086_391_056_891_903,
    216_172_782_113_783_773,
    432_345_564_227_567_621,
    864_691_128_455_135_207,
    1_729_382_256_910_270_481,
    3_458_764_513_820_540_933,
    6_917_529_027_641_081_903,
    13_835_058_055_282_163_729,
];

/// Returns the smallest ladder size that is at least `required`.
///
/// Requests beyond the top of the ladder (or beyond what `usize` can address on
/// this target) are returned unchanged.
#[must_use]
pub fn calculate_size(required: usize) -> usize {
    PRIME_LADDER
        .iter()
        .filter_map(|&size| usize::try_from(size).ok())
        .find(|&size| size >= required)
        .unwrap_or(required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_ascending() {
        assert!(PRIME_LADDER.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_small_requests_round_up_to_first_rung() {
        assert_eq!(calculate_size(0), 53);
        assert_eq!(calculate_size(1), 53);
        assert_eq!(calculate_size(16), 53);
        assert_eq!(calculate_size(53), 53);
    }

    #[test]
    fn test_requests_pick_smallest_rung_at_least_required() {
        assert_eq!(calculate_size(54), 97);
        assert_eq!(calculate_size(97), 97);
        assert_eq!(calculate_size(98), 191);
        assert_eq!(calculate_size(2_000), 3_067);
    }

    #[test]
    fn test_oversized_request_is_returned_unchanged() {
        assert_eq!(calculate_size(usize::MAX), usize::MAX);
    }
}
