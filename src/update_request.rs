//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;

use aws_sdk_dynamodb::operation::update_item::UpdateItemInput;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::DynamoError;
use crate::types::Key;

/// Describes an in-place update of a single record: the record's key, an
/// update expression, and the placeholder mappings parameterizing it.
///
/// The update expression uses DynamoDB's
/// [update syntax](https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/Expressions.UpdateExpressions.html)
/// (`SET`, `REMOVE`, `ADD`, `DELETE` clauses) and is forwarded to the
/// service verbatim.
///
/// ```no_run
/// use std::collections::HashMap;
/// use dynamo_repository::UpdateRequest;
/// use dynamo_repository::types::AttributeValue;
///
/// let key = HashMap::from([("id".to_string(), AttributeValue::S("42".to_string()))]);
/// let request = UpdateRequest::new("SET #n = :v")
///     .key(key)
///     .attribute_name("#n", "name")
///     .attribute_value(":v", AttributeValue::S("Alice".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub(crate) key: Key,
    pub(crate) update_expression: String,
    pub(crate) expression_attribute_names: Option<HashMap<String, String>>,
    pub(crate) expression_attribute_values: Option<HashMap<String, AttributeValue>>,
}

impl UpdateRequest {
    /// Create a new `UpdateRequest` from an update expression.
    ///
    /// [`key()`](UpdateRequest::key()) must also be called for the request
    /// to address a record; a keyless request is rejected by the service.
    pub fn new(update_expression: &str) -> UpdateRequest {
        UpdateRequest {
            key: Key::new(),
            update_expression: update_expression.to_string(),
            expression_attribute_names: None,
            expression_attribute_values: None,
        }
    }

    /// Set the primary key of the record to update.
    pub fn key(mut self, key: Key) -> UpdateRequest {
        self.key = key;
        self
    }

    /// Map one expression placeholder (`#name`) to a real attribute name.
    pub fn attribute_name(mut self, placeholder: &str, name: &str) -> UpdateRequest {
        self.expression_attribute_names
            .get_or_insert_with(HashMap::new)
            .insert(placeholder.to_string(), name.to_string());
        self
    }

    /// Replace the full placeholder-to-attribute-name mapping.
    pub fn attribute_names(mut self, names: HashMap<String, String>) -> UpdateRequest {
        self.expression_attribute_names = Some(names);
        self
    }

    /// Map one expression placeholder (`:value`) to a real attribute value.
    pub fn attribute_value(mut self, placeholder: &str, value: AttributeValue) -> UpdateRequest {
        self.expression_attribute_values
            .get_or_insert_with(HashMap::new)
            .insert(placeholder.to_string(), value);
        self
    }

    /// Replace the full placeholder-to-attribute-value mapping.
    pub fn attribute_values(mut self, values: HashMap<String, AttributeValue>) -> UpdateRequest {
        self.expression_attribute_values = Some(values);
        self
    }

    pub(crate) fn into_update_input(
        self,
        table_name: &str,
    ) -> Result<UpdateItemInput, DynamoError> {
        let input = UpdateItemInput::builder()
            .table_name(table_name)
            .set_key(Some(self.key))
            .update_expression(self.update_expression)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .build()?;
        Ok(input)
    }
}
