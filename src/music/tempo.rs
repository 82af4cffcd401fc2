//! Trace-global tempo.

/// Tempo of an empty trace.
pub const DEFAULT_TEMPO: u32 = 120;

/// Tempo tiers as (minimum step count, bpm), highest threshold first.
const TEMPO_TIERS: [(usize, u32); 3] = [(500, 150), (100, 120), (0, 90)];

/// Tempo in beats per minute for a trace of `step_count` steps.
///
/// Longer traces play faster: under 100 steps is 90 bpm, under 500 is
/// 120 bpm, anything longer 150 bpm.
pub fn compute_tempo(step_count: usize) -> u32 {
    if step_count == 0 {
        return DEFAULT_TEMPO;
    }

    TEMPO_TIERS
        .iter()
        .find(|(min, _)| step_count >= *min)
        .map(|&(_, bpm)| bpm)
        .unwrap_or(DEFAULT_TEMPO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(compute_tempo(1), 90);
        assert_eq!(compute_tempo(99), 90);
        assert_eq!(compute_tempo(100), 120);
        assert_eq!(compute_tempo(499), 120);
        assert_eq!(compute_tempo(500), 150);
        assert_eq!(compute_tempo(1_000_000), 150);
    }

    #[test]
    fn test_empty_trace_tempo() {
        assert_eq!(compute_tempo(0), 120);
    }

    proptest! {
        #[test]
        fn prop_monotonic_for_non_empty(a in 1usize..2000, b in 1usize..2000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_tempo(lo) <= compute_tempo(hi));
        }

        #[test]
        fn prop_tempo_is_a_known_tier(n in 0usize..5000) {
            prop_assert!([90, 120, 150].contains(&compute_tempo(n)));
        }
    }
}
