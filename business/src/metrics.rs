//! API usage graph data.

use std::future::Future;
use std::pin::Pin;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use turbo_states::{
    CancellationToken, Command, CommandSnapshot, LatestOnlyUpdater, impl_compute, impl_state,
};

use crate::BusinessConfig;
use crate::api::{self, ApiError};
use crate::auth::AuthCompute;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChartTab {
    #[default]
    WithOtp,
    Consolidated,
    WithoutOtp,
}

impl ChartTab {
    pub const ALL: [Self; 3] = [Self::WithOtp, Self::Consolidated, Self::WithoutOtp];

    pub fn label(self) -> &'static str {
        match self {
            Self::WithOtp => "With OTP",
            Self::Consolidated => "Consolidated",
            Self::WithoutOtp => "WithoutOTP",
        }
    }

    pub fn query_value(self) -> &'static str {
        match self {
            Self::WithOtp => "with_otp",
            Self::Consolidated => "consolidated",
            Self::WithoutOtp => "without_otp",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MetricsDuration {
    #[default]
    Week,
    Month,
    Quarter,
}

impl MetricsDuration {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Quarter];

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
        }
    }

    pub fn query_value(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }
}

/// One day of API traffic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub date: String,
    pub total: u64,
    pub successful: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageMetricsInput {
    pub tab: ChartTab,
    pub duration: MetricsDuration,
}

impl_state!(UsageMetricsInput, snapshot);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UsageMetricsResult {
    #[default]
    Idle,
    Loading {
        request: UsageMetricsInput,
    },
    Loaded {
        request: UsageMetricsInput,
        points: Vec<UsagePoint>,
    },
    Error {
        request: UsageMetricsInput,
        error: ApiError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageMetricsCompute {
    pub result: UsageMetricsResult,
}

impl_compute!(UsageMetricsCompute);

impl UsageMetricsCompute {
    pub fn is_idle(&self) -> bool {
        self.result == UsageMetricsResult::Idle
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, UsageMetricsResult::Loading { .. })
    }

    pub fn points(&self) -> Option<&[UsagePoint]> {
        match &self.result {
            UsageMetricsResult::Loaded { points, .. } => Some(points),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.result {
            UsageMetricsResult::Error { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Fetches the series selected by [`UsageMetricsInput`].
#[derive(Debug, Default)]
pub struct FetchUsageMetricsCommand;

impl Command for FetchUsageMetricsCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let request: UsageMetricsInput = snap.state();
        let config: BusinessConfig = snap.state();
        let auth: AuthCompute = snap.compute();

        updater.set(UsageMetricsCompute {
            result: UsageMetricsResult::Loading { request },
        });

        Box::pin(async move {
            let result = tokio::select! {
                () = cancel.cancelled() => return,
                result = api::fetch_usage_metrics(
                    &config,
                    auth.token(),
                    request.tab,
                    request.duration,
                ) => result,
            };

            let result = match result {
                Ok(points) => {
                    info!(
                        "FetchUsageMetricsCommand: {} points for {} / {}",
                        points.len(),
                        request.tab.label(),
                        request.duration.query_value()
                    );
                    UsageMetricsResult::Loaded { request, points }
                }
                Err(error) => {
                    warn!("FetchUsageMetricsCommand: {error}");
                    UsageMetricsResult::Error { request, error }
                }
            };
            updater.set(UsageMetricsCompute { result });
        })
    }
}
