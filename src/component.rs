//! Resolved `(unit, magnitude)` pairs produced from matched segments.

use std::fmt;

use time::Duration;

use crate::unit::Unit;

/// One resolved piece of a relative expression.
///
/// The sign of `magnitude` carries the direction: negative values move
/// back from the origin, positive values move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    pub unit: Unit,
    pub magnitude: i64,
}

impl Component {
    /// Create a new component.
    ///
    /// # Parameters
    ///
    /// - `unit` - Duration unit of this component
    /// - `magnitude` - Signed number of units
    ///
    /// # Returns
    ///
    /// Returns a new `Component` instance.
    pub const fn new(unit: Unit, magnitude: i64) -> Self {
        Self { unit, magnitude }
    }

    /// Signed duration of this component, or `None` on overflow.
    pub fn duration(&self) -> Option<Duration> {
        self.unit
            .base_duration()
            .whole_seconds()
            .checked_mul(self.magnitude)
            .map(Duration::seconds)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

/// Sum the durations of all components.
///
/// # Returns
///
/// Returns the total duration, or `None` if any component or the running
/// total overflows.
pub fn sum_components(components: &[Component]) -> Option<Duration> {
    components.iter().try_fold(Duration::ZERO, |total, c| total.checked_add(c.duration()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test signed durations per unit.
    #[test]
    fn test_component_duration() {
        assert_eq!(Component::new(Unit::Day, 3).duration(), Some(Duration::days(3)));
        assert_eq!(Component::new(Unit::Hour, -1).duration(), Some(Duration::hours(-1)));
        assert_eq!(Component::new(Unit::Minute, 0).duration(), Some(Duration::ZERO));
        assert_eq!(Component::new(Unit::Second, 40).duration(), Some(Duration::seconds(40)));
    }

    /// Test that overflowing magnitudes are reported instead of wrapping.
    #[test]
    fn test_component_overflow() {
        assert_eq!(Component::new(Unit::Day, i64::MAX).duration(), None);
        assert_eq!(
            Component::new(Unit::Second, i64::MAX).duration(),
            Some(Duration::seconds(i64::MAX))
        );

        let parts = [Component::new(Unit::Second, i64::MAX), Component::new(Unit::Second, 1)];
        assert_eq!(sum_components(&parts), None);
    }

    /// Test that repeated units accumulate rather than overwrite.
    #[test]
    fn test_sum_accumulates() {
        let parts = [
            Component::new(Unit::Hour, 1),
            Component::new(Unit::Minute, 30),
            Component::new(Unit::Hour, 2),
        ];
        assert_eq!(sum_components(&parts), Some(Duration::minutes(210)));
        assert_eq!(sum_components(&[]), Some(Duration::ZERO));
    }

    /// Test the compact display form.
    #[test]
    fn test_component_display() {
        assert_eq!(Component::new(Unit::Minute, -30).to_string(), "-30m");
        assert_eq!(Component::new(Unit::Day, 2).to_string(), "2d");
    }
}
