// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use annals_projection::ConfigError;

/// Errors reported by [`Timeline`](crate::Timeline).
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineError {
    /// The timeline config derived from the viewport or options is unusable.
    Config(ConfigError),
    /// No poet name contains the query.
    PoetNotFound {
        /// The name that was searched for.
        query: String,
    },
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid timeline config: {err}"),
            Self::PoetNotFound { query } => write!(f, "no poet matches {query:?}"),
        }
    }
}

impl core::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::PoetNotFound { .. } => None,
        }
    }
}

impl From<ConfigError> for TimelineError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
