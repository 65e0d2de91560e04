//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Repository facade for Amazon DynamoDB
//!
//! This crate provides a thin repository layer over the
//! [AWS SDK DynamoDB client](https://crates.io/crates/aws-sdk-dynamodb):
//! get, delete, put, update, and paginated or full query operations, with
//! request and filter structures mirroring the service's native request
//! shapes. It deliberately adds nothing else: no caching, no retry policy of
//! its own, no schema layer. The SDK keeps ownership of the wire protocol,
//! signing, and its built-in retries; this crate keeps the call sites of an
//! application small and mockable.
//!
//! This crate supplies and uses Rust `async` methods throughout, using the
//! [tokio](https://crates.io/crates/tokio) runtime. There is currently no
//! blocking support.
//!
//! The general flow for an application is:
//! - Create a [`Repository`] with [`Repository::builder()`], once, and share
//!   it across all threads
//! - Interact with DynamoDB through the [`Repository`] operations, shaping
//!   queries with [`QueryFilter`] and updates with [`UpdateRequest`]
//!
//! ## Simple Example
//! The following code creates a [`Repository`] from values in the current
//! environment and then reads a single record from a table:
//! ```no_run
//! use std::collections::HashMap;
//! use std::error::Error;
//! use dynamo_repository::Repository;
//! use dynamo_repository::types::AttributeValue;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     let repo = Repository::builder().build().await?;
//!     let key = HashMap::from([
//!         ("id".to_string(), AttributeValue::S("42".to_string())),
//!     ]);
//!     let getres = repo.get_item("users", key).await?;
//!     println!("item={:?}", getres.item);
//!     Ok(())
//! }
//! ```
//! An absent record is not an error: `getres.item` is simply `None`.
//!
//! ## Configuring the repository
//!
//! [`RepositoryBuilder::build()`] resolves credentials and region through
//! the standard AWS discovery chain. The following environment variables
//! are the common way to supply them:
//!
//! | variable | description |
//! | -------- | ----------- |
//! | `AWS_REGION` | The region to send requests to, e.g. `us-east-1`. |
//! | `AWS_ACCESS_KEY_ID` | Access key id for static credentials. |
//! | `AWS_SECRET_ACCESS_KEY` | Secret key for static credentials. |
//! | `AWS_SESSION_TOKEN` | Session token, when using temporary credentials. |
//! | `AWS_PROFILE` | Named profile to read from the shared config file. |
//!
//! Shared config files (`~/.aws/config`, `~/.aws/credentials`) and
//! instance/container credential providers participate in the chain as
//! usual. Every value can also be set in code on the builder, which takes
//! precedence:
//! ```no_run
//! # use dynamo_repository::Repository;
//! # use std::time::Duration;
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Repository::builder()
//!     .region("us-east-1")
//!     .endpoint("http://localhost:8000")?
//!     .timeout(Duration::from_secs(10))?
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//! If neither a region nor credentials can be resolved, `build()` returns a
//! [`Configuration`](ErrorCode::Configuration) error. This is the only
//! error surfaced at construction time; everything after that is per call.
//!
//! ## Writing records
//!
//! [`Repository::put_item()`] accepts any [`serde::Serialize`] value whose
//! top level converts to an attribute map, using
//! [serde_dynamo](https://crates.io/crates/serde_dynamo):
//! ```no_run
//! # use dynamo_repository::Repository;
//! use serde_derive::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: String,
//!     name: String,
//!     age: u32,
//! }
//!
//! # async fn run(repo: &Repository) -> Result<(), Box<dyn std::error::Error>> {
//! repo.put_item("users", &User {
//!     id: "42".to_string(),
//!     name: "Alice".to_string(),
//!     age: 44,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//! Records read back as attribute maps can be turned into native structs
//! with `serde_dynamo::from_item` the same way.
//!
//! ## Queries and pagination
//!
//! [`Repository::query_page()`] issues exactly one query call, forwarding an
//! optional evaluation limit and continuation cursor verbatim.
//! [`Repository::query_all()`] follows the continuation cursor until the
//! query is exhausted and returns every matching record in service order.
//! If a page fails mid-stream, the returned [`QueryAllError`] still carries
//! the records accumulated from earlier pages; treat that sequence as
//! possibly incomplete whenever the error is present.
//! [`Repository::raw_query()`] remains available for callers that need full
//! control of the native request shape.
//!
//! ## Substituting the client
//!
//! The repository talks to the service through the five-operation
//! [`DynamoDb`] trait. [`Repository::new()`] accepts any implementation of
//! it, which is how the test suite runs against a scripted in-memory client
//! instead of the real service.

pub(crate) mod repository_builder;
pub use crate::repository_builder::RepositoryBuilder;

pub(crate) mod repository;
pub use crate::repository::Repository;

pub(crate) mod client;
pub use crate::client::DynamoDb;

pub(crate) mod error;
pub use crate::error::{DynamoError, ErrorCode, QueryAllError};

pub(crate) mod query_filter;
pub use crate::query_filter::QueryFilter;

#[cfg(test)]
pub(crate) mod request_tests;

pub(crate) mod update_request;
pub use crate::update_request::UpdateRequest;

pub mod types;
