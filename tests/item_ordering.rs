//! Position sequencing behavior under inserts, moves, and deletes

mod support;

use pretty_assertions::assert_eq;

use launchpad::requests::ItemUpdate;
use launchpad::services::todos;
use support::{assert_dense, create_item, create_list, item_payload, ordered, test_db};

#[tokio::test]
async fn items_append_at_the_end_by_default() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let first = create_item(&db, list.id, "A").await;
    let second = create_item(&db, list.id, "B").await;
    let third = create_item(&db, list.id, "C").await;

    assert_eq!(first.item.position, 0);
    assert_eq!(second.item.position, 1);
    assert_eq!(third.item.position, 2);
}

#[tokio::test]
async fn single_item_always_lands_at_zero() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let mut payload = item_payload("Only");
    payload.position = Some(42);
    let item = todos::create_item(&db, list.id, payload).await.unwrap();

    assert_eq!(item.item.position, 0);
}

#[tokio::test]
async fn insert_at_position_shifts_the_tail_down() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    create_item(&db, list.id, "A").await;
    create_item(&db, list.id, "B").await;
    create_item(&db, list.id, "C").await;

    let mut payload = item_payload("D");
    payload.position = Some(1);
    todos::create_item(&db, list.id, payload).await.unwrap();

    let entries = ordered(&db, list.id).await;
    assert_eq!(
        entries,
        vec![
            ("A".to_string(), 0),
            ("D".to_string(), 1),
            ("B".to_string(), 2),
            ("C".to_string(), 3),
        ]
    );
}

#[tokio::test]
async fn negative_position_clamps_to_the_head() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    create_item(&db, list.id, "A").await;

    let mut payload = item_payload("B");
    payload.position = Some(-5);
    todos::create_item(&db, list.id, payload).await.unwrap();

    let entries = ordered(&db, list.id).await;
    assert_eq!(entries, vec![("B".to_string(), 0), ("A".to_string(), 1)]);
}

#[tokio::test]
async fn position_beyond_range_appends_without_error() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    create_item(&db, list.id, "A").await;
    create_item(&db, list.id, "B").await;

    let mut payload = item_payload("C");
    payload.position = Some(99);
    let item = todos::create_item(&db, list.id, payload).await.unwrap();

    assert_eq!(item.item.position, 2);
}

#[tokio::test]
async fn deleting_an_item_closes_the_gap() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    create_item(&db, list.id, "A").await;
    let middle = create_item(&db, list.id, "B").await;
    create_item(&db, list.id, "C").await;

    todos::delete_item(&db, middle.item.id).await.unwrap();

    let entries = ordered(&db, list.id).await;
    assert_eq!(entries, vec![("A".to_string(), 0), ("C".to_string(), 1)]);
}

#[tokio::test]
async fn moving_an_item_resequences_the_whole_list() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let first = create_item(&db, list.id, "A").await;
    create_item(&db, list.id, "B").await;
    create_item(&db, list.id, "C").await;

    let patch = ItemUpdate {
        position: Some(2),
        ..Default::default()
    };
    todos::update_item(&db, first.item.id, patch).await.unwrap();

    let entries = ordered(&db, list.id).await;
    assert_eq!(
        entries,
        vec![
            ("B".to_string(), 0),
            ("C".to_string(), 1),
            ("A".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn positions_stay_dense_through_mixed_operations() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let a = create_item(&db, list.id, "A").await;
    create_item(&db, list.id, "B").await;

    let mut payload = item_payload("C");
    payload.position = Some(0);
    todos::create_item(&db, list.id, payload).await.unwrap();

    let mut payload = item_payload("D");
    payload.position = Some(2);
    let d = todos::create_item(&db, list.id, payload).await.unwrap();

    todos::delete_item(&db, a.item.id).await.unwrap();

    let patch = ItemUpdate {
        position: Some(0),
        ..Default::default()
    };
    todos::update_item(&db, d.item.id, patch).await.unwrap();

    let entries = ordered(&db, list.id).await;
    assert_dense(&entries);
    assert_eq!(entries.len(), 3);
}

#[tokio::test]
async fn inbox_scenario_reorders_and_recovers() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let a = create_item(&db, list.id, "A").await;
    assert_eq!(a.item.position, 0);

    let mut payload = item_payload("B");
    payload.position = Some(0);
    let b = todos::create_item(&db, list.id, payload).await.unwrap();
    assert_eq!(b.item.position, 0);

    let entries = ordered(&db, list.id).await;
    assert_eq!(entries, vec![("B".to_string(), 0), ("A".to_string(), 1)]);

    todos::delete_item(&db, b.item.id).await.unwrap();

    let entries = ordered(&db, list.id).await;
    assert_eq!(entries, vec![("A".to_string(), 0)]);
}
