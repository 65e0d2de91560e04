//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use async_trait::async_trait;
use aws_sdk_dynamodb::operation::delete_item::{DeleteItemInput, DeleteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemInput, PutItemOutput};
use aws_sdk_dynamodb::operation::query::{QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::update_item::{UpdateItemInput, UpdateItemOutput};
use aws_sdk_dynamodb::Client;

use crate::error::DynamoError;

/// The five primitive operations a [`Repository`](crate::Repository)
/// delegates to.
///
/// The repository holds exactly one implementation of this trait and nothing
/// else. The implementation for the real [`aws_sdk_dynamodb::Client`] is
/// provided below; a substitute implementation can stand in for the service
/// in tests or when running against a recorded fixture.
///
/// Every operation takes the native request shape and returns the native
/// response shape. Errors are wrapped in [`DynamoError`] with code
/// [`Dependency`](crate::ErrorCode::Dependency) and are otherwise untouched.
#[async_trait]
pub trait DynamoDb: Send + Sync {
    async fn query(&self, input: QueryInput) -> Result<QueryOutput, DynamoError>;
    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput, DynamoError>;
    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, DynamoError>;
    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput, DynamoError>;
    async fn delete_item(&self, input: DeleteItemInput) -> Result<DeleteItemOutput, DynamoError>;
}

// The fluent builders are the only way to send a request through the SDK
// client, so each operation transfers every input field onto one.
#[async_trait]
impl DynamoDb for Client {
    async fn query(&self, input: QueryInput) -> Result<QueryOutput, DynamoError> {
        self.query()
            .set_table_name(input.table_name)
            .set_index_name(input.index_name)
            .set_select(input.select)
            .set_attributes_to_get(input.attributes_to_get)
            .set_limit(input.limit)
            .set_consistent_read(input.consistent_read)
            .set_key_conditions(input.key_conditions)
            .set_query_filter(input.query_filter)
            .set_conditional_operator(input.conditional_operator)
            .set_scan_index_forward(input.scan_index_forward)
            .set_exclusive_start_key(input.exclusive_start_key)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_projection_expression(input.projection_expression)
            .set_filter_expression(input.filter_expression)
            .set_key_condition_expression(input.key_condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .send()
            .await
            .map_err(DynamoError::dependency)
    }

    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput, DynamoError> {
        self.get_item()
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_attributes_to_get(input.attributes_to_get)
            .set_consistent_read(input.consistent_read)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_projection_expression(input.projection_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .send()
            .await
            .map_err(DynamoError::dependency)
    }

    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, DynamoError> {
        self.put_item()
            .set_table_name(input.table_name)
            .set_item(input.item)
            .set_expected(input.expected)
            .set_return_values(input.return_values)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .set_conditional_operator(input.conditional_operator)
            .set_condition_expression(input.condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                input.return_values_on_condition_check_failure,
            )
            .send()
            .await
            .map_err(DynamoError::dependency)
    }

    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput, DynamoError> {
        self.update_item()
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_attribute_updates(input.attribute_updates)
            .set_expected(input.expected)
            .set_conditional_operator(input.conditional_operator)
            .set_return_values(input.return_values)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .set_update_expression(input.update_expression)
            .set_condition_expression(input.condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                input.return_values_on_condition_check_failure,
            )
            .send()
            .await
            .map_err(DynamoError::dependency)
    }

    async fn delete_item(&self, input: DeleteItemInput) -> Result<DeleteItemOutput, DynamoError> {
        self.delete_item()
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_expected(input.expected)
            .set_conditional_operator(input.conditional_operator)
            .set_return_values(input.return_values)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .set_condition_expression(input.condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                input.return_values_on_condition_check_failure,
            )
            .send()
            .await
            .map_err(DynamoError::dependency)
    }
}
