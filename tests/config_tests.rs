//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::error::Error;
use std::time::Duration;

use dynamo_repository::{ErrorCode, Repository};

// Both scenarios share the process environment, so they run as one test in
// sequence rather than racing as parallel test threads.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn build_resolves_configuration_from_environment() -> Result<(), Box<dyn Error>> {
    // Set up a tracing subscriber to see output based on RUST_LOG environment setting
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .init();

    // Pin the discovery chain to this process: no profile files, no
    // instance metadata lookups.
    std::env::remove_var("AWS_REGION");
    std::env::remove_var("AWS_DEFAULT_REGION");
    std::env::remove_var("AWS_PROFILE");
    std::env::set_var("AWS_EC2_METADATA_DISABLED", "true");
    std::env::set_var("AWS_CONFIG_FILE", "/dev/null");
    std::env::set_var("AWS_SHARED_CREDENTIALS_FILE", "/dev/null");

    // With nothing to resolve a region from, building must fail up front
    // with a configuration error, not lazily on the first call.
    let err = Repository::builder().build().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Configuration);

    // With a region override and static credentials in the environment,
    // building succeeds without talking to any service.
    std::env::set_var("AWS_ACCESS_KEY_ID", "akid");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "notasecret");
    let repo = Repository::builder()
        .region("us-east-1")
        .endpoint("http://localhost:8000")?
        .timeout(Duration::from_secs(5))?
        .build()
        .await?;
    println!("repository={:?}", repo);
    Ok(())
}
