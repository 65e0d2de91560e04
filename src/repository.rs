//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::sync::Arc;

use aws_sdk_dynamodb::operation::delete_item::{DeleteItemInput, DeleteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemInput, PutItemOutput};
use aws_sdk_dynamodb::operation::query::{QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::update_item::UpdateItemOutput;
use serde::Serialize;
use tracing::{debug, trace};

use crate::client::DynamoDb;
use crate::error::{DynamoError, QueryAllError};
use crate::query_filter::QueryFilter;
use crate::repository_builder::RepositoryBuilder;
use crate::types::{Item, Key};
use crate::update_request::UpdateRequest;

/// **The main repository facade**.
///
/// This should be created once and used throughout the application lifetime,
/// across all threads. It holds a single client capability and nothing else:
/// calling `.clone()` is cheap and always refers to the same underlying
/// client, so there is no need to enclose this struct in an `Rc` or [`Arc`].
///
/// All operations are pass-through: requests are translated into the native
/// service shape, responses and errors come back unchanged. The one
/// exception is [`query_all()`](Repository::query_all()), which accumulates
/// every page of a query into a single sequence.
#[derive(Clone)]
pub struct Repository {
    pub(crate) client: Arc<dyn DynamoDb>,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Repository").finish_non_exhaustive()
    }
}

impl Repository {
    /// Create a new [`RepositoryBuilder`].
    pub fn builder() -> RepositoryBuilder {
        RepositoryBuilder::new()
    }

    /// Create a repository over an existing client capability.
    ///
    /// Use this to supply a pre-configured [`aws_sdk_dynamodb::Client`], or
    /// a substitute [`DynamoDb`] implementation in tests. For ambient
    /// configuration discovery use [`Repository::builder()`] instead.
    pub fn new(client: impl DynamoDb + 'static) -> Repository {
        Repository {
            client: Arc::new(client),
        }
    }

    /// Get a single record by its primary key.
    ///
    /// `key` must contain all attributes of the table's primary-key schema.
    /// A record that does not exist is not an error: the returned output has
    /// an absent `item`, and interpreting that absence is up to the caller.
    pub async fn get_item(
        &self,
        table_name: &str,
        key: Key,
    ) -> Result<GetItemOutput, DynamoError> {
        trace!(table = table_name, "get_item");
        let input = GetItemInput::builder()
            .table_name(table_name)
            .set_key(Some(key))
            .build()?;
        self.client.get_item(input).await
    }

    /// Delete a single record by its primary key.
    ///
    /// Same pass-through contract as [`get_item()`](Repository::get_item()):
    /// the service response comes back unchanged, including whatever it
    /// reports about the deleted record.
    pub async fn delete_item(
        &self,
        table_name: &str,
        key: Key,
    ) -> Result<DeleteItemOutput, DynamoError> {
        trace!(table = table_name, "delete_item");
        let input = DeleteItemInput::builder()
            .table_name(table_name)
            .set_key(Some(key))
            .build()?;
        self.client.delete_item(input).await
    }

    /// Insert a record, or replace it wholesale if one with the same primary
    /// key exists.
    ///
    /// `item` may be any [`Serialize`] value that converts to an attribute
    /// map (a struct or map at the top level). A value that does not convert
    /// returns a [`Serialization`](crate::ErrorCode::Serialization) error
    /// before any network call is attempted; no partial write is possible.
    pub async fn put_item<T>(&self, table_name: &str, item: &T) -> Result<PutItemOutput, DynamoError>
    where
        T: Serialize,
    {
        let item: Item = serde_dynamo::to_item(item)?;
        trace!(table = table_name, attributes = item.len(), "put_item");
        let input = PutItemInput::builder()
            .table_name(table_name)
            .set_item(Some(item))
            .build()?;
        self.client.put_item(input).await
    }

    /// Update attributes of a single record in place.
    ///
    /// The request's key, update expression and placeholder mappings are
    /// forwarded to the service verbatim.
    pub async fn update_item(
        &self,
        table_name: &str,
        request: UpdateRequest,
    ) -> Result<UpdateItemOutput, DynamoError> {
        trace!(table = table_name, "update_item");
        let input = request.into_update_input(table_name)?;
        self.client.update_item(input).await
    }

    /// Issue a single query with full control of the native request shape.
    ///
    /// No pagination is performed; the caller owns the continuation cursor
    /// in the response.
    pub async fn raw_query(&self, input: QueryInput) -> Result<QueryOutput, DynamoError> {
        trace!("raw_query");
        self.client.query(input).await
    }

    /// Issue exactly one page of a query.
    ///
    /// `limit` caps the number of records the service *evaluates*, not the
    /// number returned, since a filter expression may reject evaluated
    /// records. `last_key` is the continuation cursor from a previous page;
    /// `None` starts from the beginning. The returned output carries a
    /// `last_evaluated_key` to resume from, absent once the query is
    /// exhausted.
    pub async fn query_page(
        &self,
        table_name: &str,
        filter: &QueryFilter,
        limit: Option<i32>,
        last_key: Option<Key>,
    ) -> Result<QueryOutput, DynamoError> {
        trace!(table = table_name, "query_page");
        let input = filter.to_query_input(table_name, limit, last_key)?;
        self.client.query(input).await
    }

    /// Fetch every record matching `filter`, following continuation cursors
    /// until the query is exhausted.
    ///
    /// Pages are fetched strictly sequentially and records are accumulated
    /// in page order, preserving the order returned by the service. If any
    /// page fails, the returned [`QueryAllError`] carries both the failing
    /// page's error and the records accumulated from earlier pages, and no
    /// further calls are made.
    pub async fn query_all(
        &self,
        table_name: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<Item>, QueryAllError> {
        let mut items: Vec<Item> = Vec::new();
        let mut last_key: Option<Key> = None;
        let mut pages = 0u32;

        loop {
            let input = match filter.to_query_input(table_name, None, last_key.take()) {
                Ok(input) => input,
                Err(e) => return Err(QueryAllError::new(items, e)),
            };
            let page = match self.client.query(input).await {
                Ok(page) => page,
                Err(e) => {
                    trace!(table = table_name, pages, "query_all page failed");
                    return Err(QueryAllError::new(items, e));
                }
            };
            pages += 1;
            if let Some(page_items) = page.items {
                items.extend(page_items);
            }
            match page.last_evaluated_key {
                Some(key) => last_key = Some(key),
                None => break,
            }
        }

        debug!(table = table_name, pages, records = items.len(), "query_all");
        Ok(items)
    }
}
