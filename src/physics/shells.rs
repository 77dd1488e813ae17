use crate::error::AtomError;

/// Capacity of the 1-indexed shell `n` under the 2n² rule.
pub fn shell_capacity(n: usize) -> usize {
    2 * n * n
}

/// Partitions an electron count into shells, filling innermost-first under
/// the 2n² rule. Zero electrons yields an empty partition.
pub fn allocate(electron_count: usize) -> Vec<usize> {
    let mut shells = Vec::new();
    let mut remaining = electron_count;
    let mut n = 1;

    while remaining > 0 {
        let count = shell_capacity(n).min(remaining);
        shells.push(count);
        remaining -= count;
        n += 1;
    }

    shells
}

/// Checks an explicitly supplied configuration. Explicit configurations are
/// trusted past the 2n² cap (isotopes and custom setups), but must be
/// internally consistent: no empty shells, and the total must match the
/// stated electron count when one is given.
pub fn validate_config(config: &[usize], expected_total: Option<usize>) -> Result<(), AtomError> {
    if config.iter().any(|&c| c == 0) {
        return Err(AtomError::InvalidShellConfig(
            "shell with zero electrons".into(),
        ));
    }

    if let Some(expected) = expected_total {
        let total: usize = config.iter().sum();
        if total != expected {
            return Err(AtomError::InvalidShellConfig(format!(
                "configuration sums to {total}, expected {expected} electrons"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_electrons_means_no_shells() {
        assert!(allocate(0).is_empty());
    }

    #[test]
    fn carbon_fills_two_shells() {
        assert_eq!(allocate(6), vec![2, 4]);
    }

    #[test]
    fn sodium_spills_into_third_shell() {
        assert_eq!(allocate(11), vec![2, 8, 1]);
    }

    #[test]
    fn allocation_respects_capacity_and_total() {
        for electron_count in 0..120 {
            let shells = allocate(electron_count);
            assert_eq!(shells.iter().sum::<usize>(), electron_count);
            for (i, &count) in shells.iter().enumerate() {
                assert!(count <= shell_capacity(i + 1));
            }
            // Every shell but the outermost is filled to capacity.
            for (i, &count) in shells.iter().enumerate().rev().skip(1) {
                assert_eq!(count, shell_capacity(i + 1));
            }
        }
    }

    #[test]
    fn explicit_config_total_must_match() {
        assert!(validate_config(&[2, 4], Some(6)).is_ok());
        assert!(matches!(
            validate_config(&[2, 3], Some(6)),
            Err(AtomError::InvalidShellConfig(_))
        ));
    }

    #[test]
    fn explicit_config_may_exceed_capacity() {
        // Over the 2n² cap for shell 1, still accepted: overrides are trusted.
        assert!(validate_config(&[3], Some(3)).is_ok());
    }

    #[test]
    fn empty_shell_entries_are_rejected() {
        assert!(matches!(
            validate_config(&[2, 0, 1], Some(3)),
            Err(AtomError::InvalidShellConfig(_))
        ));
    }
}
