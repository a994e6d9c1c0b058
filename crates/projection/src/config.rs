//! Policies that shape a projection.

/// Where a February 29 birthday lands in a common year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeapDayPolicy {
    /// Celebrate on February 28.
    #[default]
    ClampToFeb28,
    /// Celebrate on March 1.
    RollToMar1,
}

/// How a birth year later than the reference year is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FutureBirthPolicy {
    /// Fail with [`ProjectionError::FutureBirthDate`](crate::ProjectionError::FutureBirthDate).
    #[default]
    Reject,
    /// Project anyway: the current age clamps at 0 and the next age may be negative.
    Accept,
}

/// Configuration for [`project_with`](crate::project_with).
///
/// # Example
///
/// ```
/// use cake_projection::{FutureBirthPolicy, LeapDayPolicy, ProjectionConfig};
///
/// let config = ProjectionConfig::new()
///     .with_leap_day(LeapDayPolicy::RollToMar1)
///     .with_future_birth(FutureBirthPolicy::Accept);
/// assert_eq!(config.leap_day(), LeapDayPolicy::RollToMar1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionConfig {
    leap_day: LeapDayPolicy,
    future_birth: FutureBirthPolicy,
}

impl ProjectionConfig {
    /// Creates a configuration with the default policies
    /// (clamp to February 28, reject future births).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leap-day policy.
    pub fn with_leap_day(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day = policy;
        self
    }

    /// Sets the future-birth policy.
    pub fn with_future_birth(mut self, policy: FutureBirthPolicy) -> Self {
        self.future_birth = policy;
        self
    }

    /// Returns the leap-day policy.
    pub fn leap_day(&self) -> LeapDayPolicy {
        self.leap_day
    }

    /// Returns the future-birth policy.
    pub fn future_birth(&self) -> FutureBirthPolicy {
        self.future_birth
    }
}
