//! Command implementations.

pub(crate) mod run;

use sakata_models::ModelError;
use sakata_report::PublishError;
use sakata_traits::UniverseError;
use thiserror::Error;

use crate::calendar::{self, MarketDay};
use crate::config::ConfigError;

/// Fatal run failures, mapped to process exit codes.
#[derive(Debug, Error)]
pub(crate) enum FatalError {
    /// Missing or malformed run parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An unusable model or quote-endpoint selection; operator error, so
    /// it exits like a configuration problem.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The quote client could not be constructed.
    #[error("{0}")]
    QuoteConfig(String),
    /// The universe could not be resolved; the run produces no report.
    #[error(transparent)]
    Universe(#[from] UniverseError),
    /// The report was built but could not be delivered.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl FatalError {
    /// Process exit code for this failure class.
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Model(_) | Self::QuoteConfig(_) => 2,
            Self::Universe(_) | Self::Publish(_) => 1,
        }
    }
}

/// Print today's calendar status.
pub(crate) fn calendar_status() {
    let today = calendar::today_jst();
    match calendar::classify(today, &calendar::extra_holidays_from_env()) {
        MarketDay::Open => println!("Market open: {today}"),
        MarketDay::Weekend => println!("Weekend: {today}"),
        MarketDay::Holiday(label) => println!("Holiday ({label}): {today}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_class() {
        assert_eq!(FatalError::Config(ConfigError::Missing).exit_code(), 2);
        assert_eq!(
            FatalError::Model(ModelError::UnknownModel("dcf".into())).exit_code(),
            2
        );
        assert_eq!(FatalError::Universe(UniverseError::TableNotFound).exit_code(), 1);
        assert_eq!(
            FatalError::Publish(PublishError::Status {
                status: 500,
                detail: String::new()
            })
            .exit_code(),
            1
        );
    }
}
