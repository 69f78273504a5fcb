use embassy_time::Duration;

/// What the sampling loop does when a cycle fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailurePolicy {
    /// Report the failure, wait the usual interval and try again.
    Skip,
    /// Report the failure and return it from [`Sampler::run`](crate::sampler::Sampler::run).
    Halt,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    pub(crate) interval: Duration,
    pub(crate) failure_policy: FailurePolicy,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            failure_policy: FailurePolicy::Skip,
        }
    }
}

impl SamplerConfig {
    /// Time to wait after each cycle, successful or not. Microsecond resolution.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;

        self
    }

    pub fn failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;

        self
    }

    /// The interval in microseconds, or `None` past `u32::MAX` (about 71 minutes).
    pub(crate) fn interval_us(&self) -> Option<u32> {
        u32::try_from(self.interval.as_micros()).ok()
    }

    /// The interval in whole milliseconds, saturating at `u32::MAX`.
    ///
    /// Only used for intervals too long for [`interval_us`](Self::interval_us).
    pub(crate) fn interval_ms(&self) -> u32 {
        u32::try_from(self.interval.as_millis()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_samples_every_second_and_skips_failures() {
        let config = SamplerConfig::default();

        assert_eq!(Some(1_000_000), config.interval_us());
        assert_eq!(FailurePolicy::Skip, config.failure_policy);
    }

    #[test]
    fn sub_millisecond_interval_is_kept() {
        let config = SamplerConfig::default().interval(Duration::from_micros(1500));

        assert_eq!(Some(1500), config.interval_us());
    }

    #[test]
    fn interval_saturates() {
        let config = SamplerConfig::default().interval(Duration::from_secs(10_000_000));

        assert_eq!(None, config.interval_us());
        assert_eq!(u32::MAX, config.interval_ms());
    }
}
