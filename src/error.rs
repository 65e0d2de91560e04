//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use aws_sdk_dynamodb::error::{BuildError, DisplayErrorContext};

use crate::types::Item;

/// Enumeration of all possible errors returned by this library.
#[derive(Debug)]
pub struct DynamoError {
    pub code: ErrorCode,
    pub message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// ErrorCode represents the category of a [`DynamoError`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorCode {
    /// Configuration errors represent a failure to resolve ambient AWS
    /// configuration (region, credentials) while building a repository.
    /// These are surfaced once, from [`RepositoryBuilder::build()`](crate::RepositoryBuilder::build()),
    /// never per call.
    Configuration,

    /// Serialization errors represent a value passed to
    /// [`put_item()`](crate::Repository::put_item()) that could not be
    /// converted to a DynamoDB attribute map. They are returned before any
    /// network call is attempted.
    Serialization,

    /// Dependency errors represent any failure surfaced by the underlying
    /// DynamoDB client: network, throttling, service validation,
    /// authorization. They are propagated unchanged; this library performs
    /// no retry and no reclassification.
    Dependency,
}

impl std::error::Error for DynamoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(e) => Some(e.as_ref()),
            None => None,
        }
    }
}

impl std::fmt::Display for DynamoError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "code={:?} message=\"{}\"", self.code, self.message)
    }
}

impl DynamoError {
    pub fn new(code: ErrorCode, msg: &str) -> DynamoError {
        DynamoError {
            code,
            message: msg.to_string(),
            source: None,
        }
    }

    pub(crate) fn configuration(msg: &str) -> DynamoError {
        DynamoError::new(ErrorCode::Configuration, msg)
    }

    pub(crate) fn with_source<E>(mut self, source: E) -> DynamoError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // DisplayErrorContext includes the SDK error's full source chain in the
    // message; the top-level Display alone is just "service error".
    pub(crate) fn dependency<E>(err: E) -> DynamoError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DynamoError {
            code: ErrorCode::Dependency,
            message: format!("{}", DisplayErrorContext(&err)),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_dynamo::Error> for DynamoError {
    fn from(e: serde_dynamo::Error) -> Self {
        DynamoError {
            code: ErrorCode::Serialization,
            message: format!("could not convert value to an attribute map: {}", e),
            source: Some(Box::new(e)),
        }
    }
}

impl From<BuildError> for DynamoError {
    fn from(e: BuildError) -> Self {
        DynamoError {
            code: ErrorCode::Dependency,
            message: format!("could not construct request: {}", e),
            source: Some(Box::new(e)),
        }
    }
}

/// Error returned by [`query_all()`](crate::Repository::query_all()).
///
/// `query_all` accumulates records across pages; when a page fails mid-way,
/// the records gathered from earlier pages are still returned here alongside
/// the error. The accumulated sequence may be incomplete, and callers must
/// never treat it as the full result set.
#[derive(Debug)]
pub struct QueryAllError {
    items: Vec<Item>,
    error: DynamoError,
}

impl QueryAllError {
    pub(crate) fn new(items: Vec<Item>, error: DynamoError) -> QueryAllError {
        QueryAllError { items, error }
    }

    /// Get the records accumulated from the pages that succeeded before the
    /// failing one. May be empty.
    pub fn partial_items(&self) -> &[Item] {
        &self.items
    }

    /// Get the error returned by the failing page.
    pub fn error(&self) -> &DynamoError {
        &self.error
    }

    /// Consume this error, yielding the partial records and the underlying
    /// error.
    pub fn into_parts(self) -> (Vec<Item>, DynamoError) {
        (self.items, self.error)
    }
}

impl std::error::Error for QueryAllError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl std::fmt::Display for QueryAllError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "query_all failed with {} record(s) accumulated: {}",
            self.items.len(),
            self.error
        )
    }
}
