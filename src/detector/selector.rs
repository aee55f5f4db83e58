//! Automatic strategy selection from sequence characteristics.

use crate::characteristics::Characteristics;
use crate::strategies::Strategy;

/// Pick a strategy for a sequence with the given characteristics.
///
/// Rules are evaluated top to bottom; the first match wins:
///
/// | rule | strategy |
/// |------|----------|
/// | length < 10 | simple |
/// | oscillatory and density > 0.1 | alternating |
/// | plateaus | window |
/// | noise > 0.1 × std | enhanced |
/// | density > 0.2 | strict |
/// | variability < 0.1 | slope |
/// | otherwise | enhanced |
pub fn select_strategy(c: &Characteristics) -> Strategy {
    if c.length < 10 {
        Strategy::Simple
    } else if c.is_oscillatory && c.extrema_density > 0.1 {
        Strategy::Alternating
    } else if c.has_plateaus {
        Strategy::Window
    } else if c.noise_level > c.std_dev * 0.1 {
        Strategy::Enhanced
    } else if c.extrema_density > 0.2 {
        Strategy::Strict
    } else if c.variability < 0.1 {
        Strategy::Slope
    } else {
        Strategy::Enhanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Characteristics {
        // Long, quiet, smooth, no patterns: falls through to the default.
        Characteristics {
            length: 100,
            std_dev: 1.0,
            noise_level: 0.05,
            variability: 0.3,
            extrema_density: 0.05,
            ..Default::default()
        }
    }

    #[test]
    fn fallthrough_is_enhanced() {
        assert_eq!(select_strategy(&base()), Strategy::Enhanced);
    }

    #[test]
    fn short_sequences_use_simple() {
        let c = Characteristics {
            length: 9,
            is_oscillatory: true,
            extrema_density: 0.9,
            ..base()
        };
        assert_eq!(select_strategy(&c), Strategy::Simple);
    }

    #[test]
    fn oscillation_needs_density() {
        let c = Characteristics {
            is_oscillatory: true,
            extrema_density: 0.15,
            has_plateaus: true,
            ..base()
        };
        assert_eq!(select_strategy(&c), Strategy::Alternating);

        let sparse = Characteristics {
            extrema_density: 0.1,
            ..c
        };
        assert_eq!(select_strategy(&sparse), Strategy::Window);
    }

    #[test]
    fn noisy_beats_dense() {
        let c = Characteristics {
            noise_level: 0.2,
            extrema_density: 0.5,
            ..base()
        };
        assert_eq!(select_strategy(&c), Strategy::Enhanced);
    }

    #[test]
    fn dense_quiet_sequences_use_strict() {
        let c = Characteristics {
            extrema_density: 0.25,
            variability: 0.01,
            ..base()
        };
        assert_eq!(select_strategy(&c), Strategy::Strict);
    }

    #[test]
    fn low_variability_uses_slope() {
        let c = Characteristics {
            variability: 0.05,
            ..base()
        };
        assert_eq!(select_strategy(&c), Strategy::Slope);
    }

    #[test]
    fn square_wave_selects_alternating() {
        let seq: Vec<f64> = (0..20).map(|i| (i % 2) as f64).collect();
        let c = Characteristics::analyze(&seq);
        assert_eq!(select_strategy(&c), Strategy::Alternating);
    }
}
