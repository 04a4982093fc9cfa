// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use front_desk_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while talking to a remote service.
///
/// `Transport` and `Status` indicate the service could not be reached or
/// answered outside the GraphQL protocol; `Service` carries the errors
/// member of an otherwise well-formed GraphQL response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request failed or the response body could not be decoded.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("service answered with HTTP status {0}")]
    Status(u16),

    /// The GraphQL response carried an errors member.
    #[error("service rejected the operation: {}", messages.join("; "))]
    Service {
        /// The messages from the GraphQL errors member.
        messages: Vec<String>,
    },

    /// The GraphQL response was missing an expected data field.
    #[error("service response was missing the '{field}' field")]
    MissingData {
        /// The field that was expected.
        field: &'static str,
    },

    /// A wire value could not be converted into a domain type.
    #[error("invalid wire value: {0}")]
    Domain(#[from] DomainError),
}
