//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;

use aws_sdk_dynamodb::operation::query::QueryInput;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::DynamoError;
use crate::types::Key;

/// Parameters describing a query against one table or secondary index.
///
/// All expression strings use DynamoDB's
/// [expression syntax](https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/Query.html).
/// This library forwards them without parsing or validating them; an invalid
/// expression is rejected by the service and surfaces as a
/// [`Dependency`](crate::ErrorCode::Dependency) error.
///
/// ```no_run
/// use dynamo_repository::QueryFilter;
/// use dynamo_repository::types::AttributeValue;
///
/// let filter = QueryFilter::new("pk = :pk AND begins_with(sk, :prefix)")
///     .index_name("gsi1")
///     .filter_expression("#state = :open")
///     .attribute_name("#state", "state")
///     .attribute_value(":pk", AttributeValue::S("user#42".to_string()))
///     .attribute_value(":prefix", AttributeValue::S("order#".to_string()))
///     .attribute_value(":open", AttributeValue::S("open".to_string()))
///     .scan_index_forward(false);
/// ```
#[derive(Debug, Clone)]
pub struct QueryFilter {
    pub(crate) index_name: Option<String>,
    pub(crate) key_condition_expression: String,
    pub(crate) filter_expression: Option<String>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<HashMap<String, String>>,
    pub(crate) expression_attribute_values: Option<HashMap<String, AttributeValue>>,
    pub(crate) scan_index_forward: bool,
}

impl QueryFilter {
    /// Create a new `QueryFilter`.
    ///
    /// `key_condition_expression` is required and must select the partition
    /// key (and optionally constrain the sort key). Results are returned in
    /// ascending sort-key order unless
    /// [`scan_index_forward(false)`](QueryFilter::scan_index_forward()) is
    /// called.
    pub fn new(key_condition_expression: &str) -> QueryFilter {
        QueryFilter {
            index_name: None,
            key_condition_expression: key_condition_expression.to_string(),
            filter_expression: None,
            projection_expression: None,
            expression_attribute_names: None,
            expression_attribute_values: None,
            scan_index_forward: true,
        }
    }

    /// Query a secondary index instead of the base table.
    pub fn index_name(mut self, index_name: &str) -> QueryFilter {
        self.index_name = Some(index_name.to_string());
        self
    }

    /// Set a filter expression applied by the service after the key
    /// condition has selected records.
    ///
    /// Filtering happens post-evaluation: a page may return fewer records
    /// than were evaluated against any `limit`.
    pub fn filter_expression(mut self, filter_expression: &str) -> QueryFilter {
        self.filter_expression = Some(filter_expression.to_string());
        self
    }

    /// Restrict the attributes returned for each record.
    pub fn projection_expression(mut self, projection_expression: &str) -> QueryFilter {
        self.projection_expression = Some(projection_expression.to_string());
        self
    }

    /// Map one expression placeholder (`#name`) to a real attribute name.
    pub fn attribute_name(mut self, placeholder: &str, name: &str) -> QueryFilter {
        self.expression_attribute_names
            .get_or_insert_with(HashMap::new)
            .insert(placeholder.to_string(), name.to_string());
        self
    }

    /// Replace the full placeholder-to-attribute-name mapping.
    pub fn attribute_names(mut self, names: HashMap<String, String>) -> QueryFilter {
        self.expression_attribute_names = Some(names);
        self
    }

    /// Map one expression placeholder (`:value`) to a real attribute value.
    pub fn attribute_value(mut self, placeholder: &str, value: AttributeValue) -> QueryFilter {
        self.expression_attribute_values
            .get_or_insert_with(HashMap::new)
            .insert(placeholder.to_string(), value);
        self
    }

    /// Replace the full placeholder-to-attribute-value mapping.
    pub fn attribute_values(mut self, values: HashMap<String, AttributeValue>) -> QueryFilter {
        self.expression_attribute_values = Some(values);
        self
    }

    /// Set the sort direction over the ordering key: `true` for ascending
    /// (the default), `false` for descending.
    pub fn scan_index_forward(mut self, forward: bool) -> QueryFilter {
        self.scan_index_forward = forward;
        self
    }

    pub(crate) fn to_query_input(
        &self,
        table_name: &str,
        limit: Option<i32>,
        start_key: Option<Key>,
    ) -> Result<QueryInput, DynamoError> {
        let input = QueryInput::builder()
            .table_name(table_name)
            .set_index_name(self.index_name.clone())
            .key_condition_expression(self.key_condition_expression.clone())
            .set_filter_expression(self.filter_expression.clone())
            .set_projection_expression(self.projection_expression.clone())
            .set_expression_attribute_names(self.expression_attribute_names.clone())
            .set_expression_attribute_values(self.expression_attribute_values.clone())
            .scan_index_forward(self.scan_index_forward)
            .set_limit(limit)
            .set_exclusive_start_key(start_key)
            .build()?;
        Ok(input)
    }
}
