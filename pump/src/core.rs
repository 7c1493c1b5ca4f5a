use chrono::{DateTime, TimeDelta, Utc};
use pump_core::{
    Measure, Span, UnknownStartPolicy, UsageBreakdown, UsageConfig, Window, timeseries,
};

/// Computes pump usage over time windows.
///
/// The calculator only carries configuration; every call is a pure function of
/// its inputs and may run on any thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageCalculator {
    pub(crate) cfg: UsageConfig,
}

/// Builder for constructing a `UsageCalculator` with custom configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageCalculatorBuilder {
    cfg: UsageConfig,
}

impl UsageCalculatorBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults treat a window whose start state cannot be derived from data
    /// as unprocessable, yielding zero usage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: UsageConfig::default(),
        }
    }

    /// Select what happens when no measure exists at or before the window start.
    ///
    /// Behavior and trade-offs:
    /// - `Unprocessable`: zero usage; never reports on-time the data cannot
    ///   back, but discards everything observed inside such windows.
    /// - `AssumeOff`: counts on-time observed inside the window; under-reports
    ///   when the pump was in fact already running at `start`.
    #[must_use]
    pub const fn unknown_start(mut self, policy: UnknownStartPolicy) -> Self {
        self.cfg.unknown_start = policy;
        self
    }

    /// Replace the whole configuration, e.g. one deserialized from a file.
    #[must_use]
    pub const fn config(mut self, cfg: UsageConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `UsageCalculator`.
    #[must_use]
    pub const fn build(self) -> UsageCalculator {
        UsageCalculator { cfg: self.cfg }
    }
}

impl UsageCalculator {
    /// Start building a new `UsageCalculator`.
    ///
    /// ```
    /// use pump::{UnknownStartPolicy, UsageCalculator};
    ///
    /// let calc = UsageCalculator::builder()
    ///     .unknown_start(UnknownStartPolicy::AssumeOff)
    ///     .build();
    /// assert_eq!(calc.config().unknown_start, UnknownStartPolicy::AssumeOff);
    /// ```
    #[must_use]
    pub fn builder() -> UsageCalculatorBuilder {
        UsageCalculatorBuilder::new()
    }

    /// Calculator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &UsageConfig {
        &self.cfg
    }

    /// Total on-time within `[start, end]`.
    ///
    /// Never fails: empty input, inverted windows and windows whose start state
    /// cannot be inferred all yield zero.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pump::core::compute_usage",
            skip(self, measures),
            fields(measures = measures.len(), start = %start, end = %end),
            ret(Display),
        )
    )]
    #[must_use]
    pub fn compute_usage(
        &self,
        measures: &[Measure],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TimeDelta {
        timeseries::usage::compute_usage_with(&self.cfg, measures, start, end)
    }

    /// Total on-time within `window`.
    #[must_use]
    pub fn usage_in(&self, measures: &[Measure], window: Window) -> TimeDelta {
        self.compute_usage(measures, window.start, window.end)
    }

    /// On-time within `window` split into leading, between and trailing parts.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pump::core::breakdown",
            skip(self, measures),
            fields(measures = measures.len(), start = %window.start, end = %window.end),
        )
    )]
    #[must_use]
    pub fn breakdown(&self, measures: &[Measure], window: Window) -> UsageBreakdown {
        timeseries::usage::usage_breakdown(&self.cfg, measures, window)
    }

    /// Maximal on intervals clipped to `window`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pump::core::on_spans",
            skip(self, measures),
            fields(measures = measures.len(), start = %window.start, end = %window.end),
        )
    )]
    #[must_use]
    pub fn on_spans(&self, measures: &[Measure], window: Window) -> Vec<Span> {
        timeseries::usage::on_spans(&self.cfg, measures, window)
    }
}
