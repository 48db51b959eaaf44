//! AWS Systems Manager Parameter Store backend.
//!
//! Enable with `--features aws`. Credentials come from the environment
//! (AWS_ACCESS_KEY_ID, etc.) or the default provider chain.

use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::{sub_path, ParameterStore};
use crate::error::{Error, FetchError, Result};

/// SSM parameter store client.
///
/// The SDK is async; calls block on a private current-thread runtime.
pub struct AwsStore {
    client: aws_sdk_ssm::Client,
    runtime: tokio::runtime::Runtime,
}

impl AwsStore {
    /// Build a client from the default provider chain.
    ///
    /// # Arguments
    ///
    /// * `region` - Overrides the region from the environment
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Runtime` if the tokio runtime can't start.
    pub fn new(region: Option<&str>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| FetchError::Runtime(e.to_string()))?;

        let config = runtime.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(aws_config::Region::new(region.to_string()));
            }
            loader.load().await
        });
        debug!(region = ?config.region(), "ssm client configured");

        Ok(Self {
            client: aws_sdk_ssm::Client::new(&config),
            runtime,
        })
    }
}

impl ParameterStore for AwsStore {
    fn get_value(&self, name: &str, decrypt: bool) -> Result<String> {
        trace!(name, decrypt, "ssm GetParameter");

        self.runtime.block_on(async {
            let output = self
                .client
                .get_parameter()
                .name(name)
                .with_decryption(decrypt)
                .send()
                .await
                .map_err(|e| {
                    let not_found = e
                        .as_service_error()
                        .map(|se| se.is_parameter_not_found())
                        .unwrap_or(false);
                    if not_found {
                        FetchError::NotFound(name.to_string())
                    } else {
                        FetchError::Request {
                            name: name.to_string(),
                            reason: e.to_string(),
                        }
                    }
                })?;

            let value = output
                .parameter()
                .and_then(|p| p.value())
                .map(|v| v.to_string())
                .ok_or_else(|| FetchError::MissingValue(name.to_string()))?;
            Ok::<_, Error>(value)
        })
    }

    fn get_values_by_path(&self, path: &str, decrypt: bool) -> Result<BTreeMap<String, String>> {
        trace!(path, decrypt, "ssm GetParametersByPath");

        self.runtime.block_on(async {
            let mut values = BTreeMap::new();
            let mut next_token: Option<String> = None;

            loop {
                let page = self
                    .client
                    .get_parameters_by_path()
                    .path(path)
                    .recursive(true)
                    .with_decryption(decrypt)
                    .set_next_token(next_token.take())
                    .send()
                    .await
                    .map_err(|e| FetchError::Request {
                        name: path.to_string(),
                        reason: e.to_string(),
                    })?;

                for param in page.parameters() {
                    let (Some(name), Some(value)) = (param.name(), param.value()) else {
                        continue;
                    };
                    let Some(sub) = sub_path(name, path) else {
                        debug!(name, path, "skipping parameter outside requested path");
                        continue;
                    };
                    values.insert(sub.to_string(), value.to_string());
                }

                match page.next_token() {
                    Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                    _ => break,
                }
            }

            debug!(path, count = values.len(), "fetched parameters by path");
            Ok::<_, Error>(values)
        })
    }
}
