//! Predicted area yield after drying.

/// Constants for the area yield estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldConfig {
    /// Minimum predicted yield, in percent.
    pub floor: f64,

    /// Yield lost per unit of VBI above 1.0, in percent.
    pub loss_per_vbi: f64,
}

impl Default for YieldConfig {
    fn default() -> Self {
        Self {
            floor: 78.0,
            loss_per_vbi: 19.0,
        }
    }
}

/// Returns the predicted area yield in percent.
///
/// Not capped at 100: a VBI below 1.0 reports a yield above 100.
pub(super) fn area_yield(vbi: f64, config: &YieldConfig) -> f64 {
    (100.0 - (vbi - 1.0) * config.loss_per_vbi).max(config.floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn degrades_linearly_then_floors() {
        let config = YieldConfig::default();

        assert_relative_eq!(area_yield(1.0, &config), 100.0);
        assert_relative_eq!(area_yield(1.7415, &config), 85.9115, epsilon = 1e-9);
        assert_relative_eq!(area_yield(2.351_025, &config), 78.0);
        assert_relative_eq!(area_yield(50.0, &config), 78.0);
    }

    #[test]
    fn clean_vacuum_can_exceed_full_area() {
        assert_relative_eq!(area_yield(0.75, &YieldConfig::default()), 104.75, epsilon = 1e-9);
    }
}
