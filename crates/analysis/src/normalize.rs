//! Rescales prover-reported step counts onto a roughly comparable scale.

/// Rescale a raw step count by prover identity.
///
/// CVC4 and Z3 report steps on wildly different scales; the offsets and
/// divisors squash both into the same rough magnitude as the other
/// provers. The trailing `+ 1` keeps the result at least 1, so "ran with
/// zero reported steps" stays distinguishable from "never ran" (the latter
/// shows up as an absent accumulator, never as a zero).
pub fn normalized_steps(prover: &str, raw: u64) -> u64 {
    if prover.starts_with("CVC4") {
        raw.saturating_sub(15_000) / 35 + 1
    } else if prover.starts_with("Z3") {
        raw.saturating_sub(450_000) / 800 + 1
    } else {
        raw + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvc4_below_threshold() {
        assert_eq!(normalized_steps("CVC4", 0), 1);
        assert_eq!(normalized_steps("CVC4", 100), 1);
        assert_eq!(normalized_steps("CVC4", 15_000), 1);
    }

    #[test]
    fn test_cvc4_above_threshold() {
        assert_eq!(normalized_steps("CVC4", 15_034), 1);
        assert_eq!(normalized_steps("CVC4", 15_035), 2);
        assert_eq!(normalized_steps("CVC4", 15_000 + 35 * 10), 11);
    }

    #[test]
    fn test_z3_below_threshold() {
        assert_eq!(normalized_steps("Z3", 0), 1);
        assert_eq!(normalized_steps("Z3", 449_999), 1);
        assert_eq!(normalized_steps("Z3", 450_000), 1);
    }

    #[test]
    fn test_z3_above_threshold() {
        assert_eq!(normalized_steps("Z3", 450_800), 2);
        assert_eq!(normalized_steps("Z3", 450_000 + 800 * 5), 6);
    }

    #[test]
    fn test_other_provers_passthrough() {
        assert_eq!(normalized_steps("altergo", 0), 1);
        assert_eq!(normalized_steps("altergo", 42), 43);
        assert_eq!(normalized_steps("Coq", 1_000_000), 1_000_001);
    }

    #[test]
    fn test_versioned_prover_names_match_by_prefix() {
        assert_eq!(normalized_steps("CVC4 1.8", 15_035), 2);
        assert_eq!(normalized_steps("Z3 4.8.10", 450_800), 2);
        // Not a prefix match: treated as an unknown prover.
        assert_eq!(normalized_steps("cvc4", 42), 43);
    }

    #[test]
    fn test_at_least_one_for_all_inputs() {
        for raw in [0, 1, 14_999, 15_000, 449_999, 450_000, u64::MAX / 2] {
            assert!(normalized_steps("CVC4", raw) >= 1);
            assert!(normalized_steps("Z3", raw) >= 1);
            assert!(normalized_steps("altergo", raw) >= 1);
        }
    }

    #[test]
    fn test_non_decreasing_above_thresholds() {
        let mut last = 0;
        for raw in (15_000..16_000).step_by(7) {
            let n = normalized_steps("CVC4", raw);
            assert!(n >= last);
            last = n;
        }
        let mut last = 0;
        for raw in (450_000..460_000).step_by(131) {
            let n = normalized_steps("Z3", raw);
            assert!(n >= last);
            last = n;
        }
    }
}
