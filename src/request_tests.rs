//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;
use std::error::Error;
use std::time::Duration;

use crate::error::ErrorCode;
use crate::query_filter::QueryFilter;
use crate::repository::Repository;
use crate::types::AttributeValue;
use crate::update_request::UpdateRequest;

#[test]
fn query_filter_minimal_translation() -> Result<(), Box<dyn Error>> {
    let filter = QueryFilter::new("pk = :pk");
    let input = filter.to_query_input("events", None, None)?;

    assert_eq!(input.table_name.as_deref(), Some("events"));
    assert_eq!(input.key_condition_expression.as_deref(), Some("pk = :pk"));
    assert_eq!(input.index_name, None);
    assert_eq!(input.filter_expression, None);
    assert_eq!(input.projection_expression, None);
    assert_eq!(input.expression_attribute_names, None);
    assert_eq!(input.expression_attribute_values, None);
    // ascending is the default sort direction
    assert_eq!(input.scan_index_forward, Some(true));
    assert_eq!(input.limit, None);
    assert_eq!(input.exclusive_start_key, None);
    Ok(())
}

#[test]
fn query_filter_full_translation() -> Result<(), Box<dyn Error>> {
    let filter = QueryFilter::new("pk = :pk AND sk > :since")
        .index_name("by-created")
        .filter_expression("#state = :open")
        .projection_expression("pk, sk, #state")
        .attribute_name("#state", "state")
        .attribute_value(":pk", AttributeValue::S("user#1".to_string()))
        .attribute_value(":since", AttributeValue::N("1700000000".to_string()))
        .attribute_value(":open", AttributeValue::S("open".to_string()))
        .scan_index_forward(false);

    let start = HashMap::from([("pk".to_string(), AttributeValue::S("user#1".to_string()))]);
    let input = filter.to_query_input("events", Some(100), Some(start.clone()))?;

    assert_eq!(input.index_name.as_deref(), Some("by-created"));
    assert_eq!(input.filter_expression.as_deref(), Some("#state = :open"));
    assert_eq!(
        input.projection_expression.as_deref(),
        Some("pk, sk, #state")
    );
    assert_eq!(
        input.expression_attribute_names,
        Some(HashMap::from([("#state".to_string(), "state".to_string())]))
    );
    let values = input
        .expression_attribute_values
        .ok_or("expected attribute values")?;
    assert_eq!(values.len(), 3);
    assert_eq!(values[":pk"], AttributeValue::S("user#1".to_string()));
    assert_eq!(input.scan_index_forward, Some(false));
    assert_eq!(input.limit, Some(100));
    assert_eq!(input.exclusive_start_key, Some(start));
    Ok(())
}

#[test]
fn query_filter_replacing_mappings_overrides_incremental_ones() -> Result<(), Box<dyn Error>> {
    let filter = QueryFilter::new("pk = :pk")
        .attribute_name("#a", "alpha")
        .attribute_names(HashMap::from([("#b".to_string(), "beta".to_string())]));

    let input = filter.to_query_input("events", None, None)?;
    assert_eq!(
        input.expression_attribute_names,
        Some(HashMap::from([("#b".to_string(), "beta".to_string())]))
    );
    Ok(())
}

#[test]
fn update_request_translation() -> Result<(), Box<dyn Error>> {
    let key = HashMap::from([("id".to_string(), AttributeValue::S("42".to_string()))]);
    let request = UpdateRequest::new("SET #n = :v REMOVE legacy")
        .key(key.clone())
        .attribute_name("#n", "name")
        .attribute_value(":v", AttributeValue::S("Alice".to_string()));

    let input = request.into_update_input("users")?;
    assert_eq!(input.table_name.as_deref(), Some("users"));
    assert_eq!(input.key, Some(key));
    assert_eq!(
        input.update_expression.as_deref(),
        Some("SET #n = :v REMOVE legacy")
    );
    assert_eq!(
        input.expression_attribute_names,
        Some(HashMap::from([("#n".to_string(), "name".to_string())]))
    );
    assert_eq!(
        input.expression_attribute_values,
        Some(HashMap::from([(
            ":v".to_string(),
            AttributeValue::S("Alice".to_string())
        )]))
    );
    Ok(())
}

#[test]
fn builder_rejects_invalid_endpoint() {
    let err = Repository::builder().endpoint("localhost:8000").unwrap_err();
    assert_eq!(err.code, ErrorCode::Configuration);
}

#[test]
fn builder_rejects_sub_millisecond_timeout() {
    let err = Repository::builder()
        .timeout(Duration::from_micros(10))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Configuration);
}
