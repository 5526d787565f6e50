//! Tests for fetch

use super::*;
use crate::test_utils::test_helpers::*;

#[test]
fn test_should_fetch_only_for_list_mode() {
    let field = product_category_field();
    assert!(should_fetch(&field));
    assert!(!should_fetch(&field.with_value_mode(ValueMode::None)));
    assert!(!should_fetch(&field.with_value_mode(ValueMode::Search)));
}

#[test]
fn test_list_field_fetches_once_with_its_id() {
    let mut fetcher = RecordingFetcher::default();
    let mut trigger = FetchTrigger::new();

    assert!(trigger.on_field(&product_category_field(), &mut fetcher));
    assert_eq!(fetcher.calls, vec![PRODUCT_CATEGORY_FIELD_ID]);
}

#[test]
fn test_same_field_does_not_fetch_again() {
    let mut fetcher = RecordingFetcher::default();
    let mut trigger = FetchTrigger::new();
    let field = product_category_field();

    trigger.on_field(&field, &mut fetcher);
    assert!(!trigger.on_field(&field, &mut fetcher));
    assert!(!trigger.on_field(&field.with_values(Vec::new()), &mut fetcher));
    assert_eq!(fetcher.calls.len(), 1);
}

#[test]
fn test_none_and_search_fields_never_fetch() {
    let mut fetcher = RecordingFetcher::default();
    let mut trigger = FetchTrigger::new();

    trigger.on_field(&orders_product_fk_field(), &mut fetcher);
    trigger.on_field(
        &product_category_field().with_value_mode(ValueMode::Search),
        &mut fetcher,
    );
    assert!(fetcher.calls.is_empty());
    assert_eq!(trigger.current(), Some(PRODUCT_CATEGORY_FIELD_ID));
}

#[test]
fn test_switching_fields_fetches_each_list_field() {
    let mut fetcher = RecordingFetcher::default();
    let mut trigger = FetchTrigger::new();
    let category = product_category_field();
    let fk_list = orders_product_fk_field().with_value_mode(ValueMode::List);

    trigger.on_field(&category, &mut fetcher);
    trigger.on_field(&fk_list, &mut fetcher);
    trigger.on_field(&category, &mut fetcher);

    assert_eq!(
        fetcher.calls,
        vec![
            PRODUCT_CATEGORY_FIELD_ID,
            ORDERS_PRODUCT_FK_FIELD_ID,
            PRODUCT_CATEGORY_FIELD_ID
        ]
    );
}

#[test]
fn test_closure_fetcher() {
    let mut calls = Vec::new();
    let mut trigger = FetchTrigger::new();

    trigger.on_field(&product_category_field(), &mut |id: FieldId| calls.push(id));
    assert_eq!(calls, vec![PRODUCT_CATEGORY_FIELD_ID]);
}

#[test]
fn test_same_field_switching_into_list_mode_fetches() {
    let mut fetcher = RecordingFetcher::default();
    let mut trigger = FetchTrigger::new();
    let field = product_category_field();

    assert!(!trigger.on_field(&field.with_value_mode(ValueMode::None), &mut fetcher));
    assert!(trigger.on_field(&field, &mut fetcher));
    assert!(!trigger.on_field(&field, &mut fetcher));
    assert_eq!(fetcher.calls, vec![PRODUCT_CATEGORY_FIELD_ID]);
}

#[test]
fn test_same_field_leaving_and_reentering_list_mode_fetches_again() {
    let mut fetcher = RecordingFetcher::default();
    let mut trigger = FetchTrigger::new();
    let field = product_category_field();

    trigger.on_field(&field, &mut fetcher);
    trigger.on_field(&field.with_value_mode(ValueMode::Search), &mut fetcher);
    trigger.on_field(&field, &mut fetcher);
    assert_eq!(
        fetcher.calls,
        vec![PRODUCT_CATEGORY_FIELD_ID, PRODUCT_CATEGORY_FIELD_ID]
    );
}
