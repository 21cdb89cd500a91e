// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Error produced by test transforms and test sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("kaboom at item {0}")]
    Kaboom(u64),
    #[error("source broke before item {0}")]
    SourceBroken(u64),
    #[error("{0}")]
    Other(String),
}

impl TestError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
