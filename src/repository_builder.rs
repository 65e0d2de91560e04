//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Builder for creating a [`Repository`](crate::Repository) backed by the
//! real DynamoDB client.
use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use tracing::debug;
use url::Url;

use crate::error::DynamoError;
use crate::repository::Repository;

/// Builder used to set all the parameters to create a
/// [`Repository`](crate::Repository).
///
/// Everything is optional: by default `build()` resolves region and
/// credentials from the standard AWS discovery chain (environment, shared
/// config/credentials files, instance metadata). See
/// [Configuring the repository](index.html#configuring-the-repository) for
/// the environment variables involved.
#[derive(Default, Debug, Clone)]
pub struct RepositoryBuilder {
    pub(crate) region: Option<String>,
    pub(crate) profile: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl RepositoryBuilder {
    /// Create a new RepositoryBuilder struct.
    pub fn new() -> Self {
        RepositoryBuilder {
            ..Default::default()
        }
    }

    /// Set a specific AWS region, overriding the discovery chain.
    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Select a named profile from the shared AWS config file instead of the
    /// default one.
    pub fn profile(mut self, profile: &str) -> Self {
        self.profile = Some(profile.to_string());
        self
    }

    /// Set a specific endpoint connection to use.
    ///
    /// This is typically used to point at a local
    /// [DynamoDB Local](https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/DynamoDBLocal.html)
    /// instance, or at a VPC interface endpoint.
    ///
    /// Examples:
    /// ```text
    ///     // Local development instance
    ///     http://localhost:8000
    ///
    ///     // VPC interface endpoint
    ///     https://vpce-1a2b3c4d-5e6f.dynamodb.us-east-1.vpce.amazonaws.com
    /// ```
    pub fn endpoint(mut self, endpoint: &str) -> Result<Self, DynamoError> {
        match Url::parse(endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                self.endpoint = Some(endpoint.to_string());
                Ok(self)
            }
            Ok(url) => Err(DynamoError::configuration(&format!(
                "invalid endpoint \"{}\": unsupported scheme \"{}\"",
                endpoint,
                url.scheme()
            ))),
            Err(e) => Err(DynamoError::configuration(&format!(
                "invalid endpoint \"{}\": {}",
                endpoint, e
            ))),
        }
    }

    /// Specify the timeout value applied to connect and to each operation.
    ///
    /// This is optional. If set, it must be greater than or equal to 1
    /// millisecond. If not set, the SDK's default timeouts are used.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, DynamoError> {
        if timeout < Duration::from_millis(1) {
            return Err(DynamoError::configuration(
                "timeout must be at least 1 millisecond",
            ));
        }
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Resolve ambient AWS configuration and build a new
    /// [`Repository`](crate::Repository).
    ///
    /// Region and credentials are resolved through the standard discovery
    /// chain, honoring any overrides set on this builder. A failure to
    /// resolve either returns a
    /// [`Configuration`](crate::ErrorCode::Configuration) error here, at
    /// startup, so the host process controls its own shutdown policy;
    /// nothing is resolved lazily per call.
    pub async fn build(self) -> Result<Repository, DynamoError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &self.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        if let Some(timeout) = self.timeout {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .connect_timeout(timeout)
                    .operation_timeout(timeout)
                    .build(),
            );
        }

        let config = loader.load().await;
        if config.region().is_none() {
            return Err(DynamoError::configuration(
                "can't determine AWS region: set AWS_REGION or call RepositoryBuilder::region()",
            ));
        }
        let credentials = match config.credentials_provider() {
            Some(provider) => provider,
            None => {
                return Err(DynamoError::configuration(
                    "can't determine AWS credentials: no credentials provider resolved",
                ));
            }
        };
        if let Err(e) = credentials.provide_credentials().await {
            return Err(DynamoError::configuration(&format!(
                "can't resolve AWS credentials: {}",
                e
            ))
            .with_source(e));
        }

        debug!(region = ?config.region(), endpoint = ?self.endpoint, "creating Repository");
        Ok(Repository::new(aws_sdk_dynamodb::Client::new(&config)))
    }
}
