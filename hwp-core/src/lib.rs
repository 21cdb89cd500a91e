// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod highwatermark;
pub mod hwp_task;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{BoxError, HwpError, Result};
pub use self::highwatermark::{Highwatermark, DEFAULT_HIGHWATERMARK};
pub use self::hwp_task::HwpTask;
