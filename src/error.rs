// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DravenError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to fetch Draven {key}: {source}")]
    FetchError {
        key: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to update status of Draven {key}: {source}")]
    StatusUpdateError {
        key: String,
        #[source]
        source: kube::Error,
    },

    #[error("Object has no name: {0}")]
    MissingName(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, DravenError>;

impl DravenError {
    /// True when the API server reported the object as gone
    pub fn is_not_found(&self) -> bool {
        match self {
            DravenError::KubeError(e)
            | DravenError::FetchError { source: e, .. }
            | DravenError::StatusUpdateError { source: e, .. } => {
                matches!(e, kube::Error::Api(err) if err.code == 404)
            }
            _ => false,
        }
    }
}
