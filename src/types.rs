//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Value types exchanged with DynamoDB.
//!
//! Records and primary keys are both plain attribute maps, exactly as the
//! service represents them. [`AttributeValue`] is re-exported here so callers
//! can construct keys and expression values without depending on
//! `aws-sdk-dynamodb` directly.
use std::collections::HashMap;

pub use aws_sdk_dynamodb::types::AttributeValue;

/// A primary key: attribute name to attribute value.
///
/// The set of attributes present must match the table's declared primary-key
/// schema (partition key, plus sort key if the table has one). That
/// invariant is enforced by DynamoDB, not by this library.
pub type Key = HashMap<String, AttributeValue>;

/// A single record (row) as stored and returned by DynamoDB.
pub type Item = HashMap<String, AttributeValue>;
