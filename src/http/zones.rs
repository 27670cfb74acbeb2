use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::dispatch::{
    ExecutionOutcome, FailureKind, OperationDescriptor, OperationExecutor, OperationFailure,
    OperationRequest,
};
use crate::error::{AppError, AppResult, HttpError};
use crate::workload::normalize_zone_name;

use super::retry::RetryPolicy;

const ZONES_ENDPOINT: &str = "zones";

/// Entry of the zone listing. Every other field the server sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneSummary {
    pub name: String,
}

/// Zone operations against one PowerDNS server.
///
/// Holds a clone of the shared client, so one instance serves every worker.
pub struct ZoneApi {
    client: Client,
    server_base: Url,
    retry: RetryPolicy,
}

impl ZoneApi {
    /// # Errors
    ///
    /// Returns an error when `api_url` and `server_id` do not form a valid URL.
    pub fn new(
        client: Client,
        api_url: &str,
        server_id: &str,
        retry: RetryPolicy,
    ) -> AppResult<Self> {
        let raw = format!(
            "{}/api/v1/servers/{}/",
            api_url.trim_end_matches('/'),
            server_id
        );
        let server_base = Url::parse(&raw).map_err(|err| {
            AppError::http(HttpError::InvalidUrl {
                url: raw,
                source: err,
            })
        })?;
        Ok(Self {
            client,
            server_base,
            retry,
        })
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.server_base.join(path).map_err(|err| {
            AppError::http(HttpError::JoinUrlFailed {
                base: self.server_base.to_string(),
                endpoint: path.to_owned(),
                source: err,
            })
        })
    }

    /// Fetches every zone on the server.
    ///
    /// # Errors
    ///
    /// Returns an error on a transport failure, a non-200 status, or an
    /// undecodable body.
    pub async fn list_zones(&self) -> AppResult<Vec<ZoneSummary>> {
        let url = self.endpoint(ZONES_ENDPOINT)?;
        let response = self
            .send_with_retry(|| self.client.get(url.clone()))
            .await
            .map_err(|err| {
                AppError::http(HttpError::ListTransport {
                    message: err.to_string(),
                })
            })?;
        let status = response.status();
        if status != StatusCode::OK {
            drain(response).await;
            return Err(AppError::http(HttpError::ListStatus {
                status: status.as_u16(),
            }));
        }
        response
            .json::<Vec<ZoneSummary>>()
            .await
            .map_err(|err| AppError::http(HttpError::ListDecode { source: err }))
    }

    async fn create_zone(&self, payload: &serde_json::Value) -> ExecutionOutcome {
        let url = match self.endpoint(ZONES_ENDPOINT) {
            Ok(url) => url,
            Err(err) => return ExecutionOutcome::failed(OperationFailure::transport(err.to_string())),
        };
        let result = self
            .send_with_retry(|| self.client.post(url.clone()).json(payload))
            .await;
        classify(result, &[StatusCode::OK, StatusCode::CREATED]).await
    }

    async fn delete_zone(&self, target: &str) -> ExecutionOutcome {
        let name = normalize_zone_name(target);
        let url = match self.endpoint(&format!("{}/{}", ZONES_ENDPOINT, name)) {
            Ok(url) => url,
            Err(err) => return ExecutionOutcome::failed(OperationFailure::transport(err.to_string())),
        };
        let result = self
            .send_with_retry(|| self.client.delete(url.clone()))
            .await;
        classify(result, &[StatusCode::NO_CONTENT]).await
    }

    /// Sends the request built by `build`, retrying transient failures.
    /// Returns the last response or error once retries run out.
    async fn send_with_retry<F>(&self, build: F) -> Result<Response, reqwest::Error>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut retry: u32 = 0;
        loop {
            let exhausted = retry >= self.retry.max_retries;
            match build().send().await {
                Ok(response) => {
                    let status = response.status();
                    if exhausted || !self.retry.retries_status(status) {
                        return Ok(response);
                    }
                    retry = retry.saturating_add(1);
                    let delay = self
                        .retry
                        .retry_after(status, response.headers())
                        .unwrap_or_else(|| self.retry.delay_for(retry));
                    debug!(
                        "Retrying {} after status {} (retry {}/{}, waiting {:?})",
                        response.url(),
                        status.as_u16(),
                        retry,
                        self.retry.max_retries,
                        delay
                    );
                    drain(response).await;
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    if exhausted || !self.retry.retries_error(&err) {
                        return Err(err);
                    }
                    retry = retry.saturating_add(1);
                    let delay = self.retry.delay_for(retry);
                    debug!(
                        "Retrying after transport error: {} (retry {}/{}, waiting {:?})",
                        err, retry, self.retry.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

#[async_trait]
impl OperationExecutor for ZoneApi {
    async fn execute(&self, descriptor: &OperationDescriptor) -> ExecutionOutcome {
        match descriptor.request() {
            OperationRequest::Create { payload } => self.create_zone(payload).await,
            OperationRequest::Delete => self.delete_zone(descriptor.target()).await,
        }
    }

    async fn list_targets(&self) -> AppResult<Vec<String>> {
        let zones = self.list_zones().await?;
        Ok(zones.into_iter().map(|zone| zone.name).collect())
    }
}

async fn classify(
    result: Result<Response, reqwest::Error>,
    expected: &[StatusCode],
) -> ExecutionOutcome {
    match result {
        Ok(response) => {
            let status = response.status();
            if expected.contains(&status) {
                drain(response).await;
                return ExecutionOutcome::success(status.as_u16());
            }
            let body = response.text().await.unwrap_or_default();
            ExecutionOutcome::failed(OperationFailure::status(status.as_u16(), body))
        }
        Err(err) if err.is_timeout() => ExecutionOutcome::failed(OperationFailure {
            kind: FailureKind::Timeout,
            message: err.to_string(),
        }),
        Err(err) => ExecutionOutcome::failed(OperationFailure::transport(err.to_string())),
    }
}

// Reading the body to the end lets the connection go back to the pool.
async fn drain(response: Response) {
    if let Err(err) = response.bytes().await {
        debug!("Failed to drain response body: {}", err);
    }
}
