// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// The request envelope every operation is posted in.
#[derive(Debug, Serialize)]
struct GraphqlRequest<V: Serialize> {
    query: &'static str,
    variables: V,
}

/// A single entry of a GraphQL errors member.
#[derive(Debug, Clone, serde::Deserialize)]
struct GraphqlError {
    message: String,
}

/// The response envelope every operation answers with.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
struct GraphqlResponse<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

/// A GraphQL-over-HTTP connection to one service endpoint.
#[derive(Debug, Clone)]
pub(crate) struct GraphqlTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlTransport {
    pub(crate) fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Posts one operation and unwraps the response envelope.
    ///
    /// A non-success HTTP status and a populated errors member are both
    /// reported as errors; a well-formed response without a data member
    /// is reported as `MissingData`.
    pub(crate) async fn execute<V, T>(
        &self,
        query: &'static str,
        variables: V,
    ) -> Result<T, ClientError>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        debug!(endpoint = %self.endpoint, "Executing GraphQL operation");

        let response: reqwest::Response = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = %status, "Service answered with an error status");
            return Err(ClientError::Status(status.as_u16()));
        }

        let envelope: GraphqlResponse<T> = response.json().await?;

        let errors: Vec<GraphqlError> = envelope.errors.unwrap_or_default();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|error| error.message).collect();
            warn!(endpoint = %self.endpoint, ?messages, "Service rejected the operation");
            return Err(ClientError::Service { messages });
        }

        envelope
            .data
            .ok_or(ClientError::MissingData { field: "data" })
    }
}
