//! List and item lifecycle: CRUD, counts, patches, cascade, and errors

mod support;

use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use uuid::Uuid;

use launchpad::error::Error;
use launchpad::models::{todo_item_tags, todo_items, todo_tags, TodoStatus};
use launchpad::requests::{ItemUpdate, ListCreate, ListUpdate};
use launchpad::services::todos::{self, ItemFilters};
use support::{create_item, create_list, item_payload, test_db};

#[tokio::test]
async fn list_summaries_carry_item_counts() {
    let db = test_db().await;

    let busy = create_list(&db, "Busy").await;
    let empty = create_list(&db, "Empty").await;
    create_item(&db, busy.id, "One").await;
    create_item(&db, busy.id, "Two").await;

    let summaries = todos::list_lists(&db).await.unwrap();

    assert_eq!(summaries.len(), 2);
    // Ordered by creation time
    assert_eq!(summaries[0].list.id, busy.id);
    assert_eq!(summaries[0].item_count, 2);
    assert_eq!(summaries[1].list.id, empty.id);
    assert_eq!(summaries[1].item_count, 0);
}

#[tokio::test]
async fn list_detail_includes_items_in_order_with_tags() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let mut payload = item_payload("Tagged");
    payload.tags = Some(vec!["home".to_string()]);
    todos::create_item(&db, list.id, payload).await.unwrap();

    let mut payload = item_payload("Head");
    payload.position = Some(0);
    todos::create_item(&db, list.id, payload).await.unwrap();

    let detail = todos::get_list_detail(&db, list.id).await.unwrap();

    assert_eq!(detail.list.id, list.id);
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.items[0].item.title, "Head");
    assert_eq!(detail.items[1].item.title, "Tagged");
    assert_eq!(detail.items[1].tags[0].name, "home");
}

#[tokio::test]
async fn list_patch_only_touches_provided_fields() {
    let db = test_db().await;
    let list = todos::create_list(
        &db,
        ListCreate {
            name: "Inbox".to_string(),
            description: Some("The default list".to_string()),
        },
    )
    .await
    .unwrap();

    let patch = ListUpdate {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = todos::update_list(&db, list.id, patch).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, Some("The default list".to_string()));

    // An explicit null clears the nullable field
    let patch = ListUpdate {
        description: Some(None),
        ..Default::default()
    };
    let updated = todos::update_list(&db, list.id, patch).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, None);
}

#[tokio::test]
async fn item_patch_only_touches_provided_fields() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let mut payload = item_payload("Original");
    payload.notes = Some("Keep me".to_string());
    let item = todos::create_item(&db, list.id, payload).await.unwrap();

    let patch = ItemUpdate {
        title: Some("Changed".to_string()),
        ..Default::default()
    };
    let updated = todos::update_item(&db, item.item.id, patch).await.unwrap();

    assert_eq!(updated.item.title, "Changed");
    assert_eq!(updated.item.notes, Some("Keep me".to_string()));

    let patch = ItemUpdate {
        notes: Some(None),
        ..Default::default()
    };
    let updated = todos::update_item(&db, item.item.id, patch).await.unwrap();
    assert_eq!(updated.item.notes, None);
}

#[tokio::test]
async fn completing_an_item_sets_and_clears_the_timestamp() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;
    let item = create_item(&db, list.id, "Finish me").await;

    assert_eq!(item.item.completed_at, None);

    let patch = ItemUpdate {
        status: Some(TodoStatus::Done),
        ..Default::default()
    };
    let done = todos::update_item(&db, item.item.id, patch).await.unwrap();
    assert_eq!(done.item.status, TodoStatus::Done);
    assert!(done.item.completed_at.is_some());

    let patch = ItemUpdate {
        status: Some(TodoStatus::InProgress),
        ..Default::default()
    };
    let reopened = todos::update_item(&db, item.item.id, patch).await.unwrap();
    assert_eq!(reopened.item.status, TodoStatus::InProgress);
    assert_eq!(reopened.item.completed_at, None);
}

#[tokio::test]
async fn re_marking_done_refreshes_the_timestamp() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;
    let item = create_item(&db, list.id, "Finish me").await;

    let patch = ItemUpdate {
        status: Some(TodoStatus::Done),
        ..Default::default()
    };
    let first = todos::update_item(&db, item.item.id, patch.clone())
        .await
        .unwrap();
    let second = todos::update_item(&db, item.item.id, patch).await.unwrap();

    let first_done = first.item.completed_at.unwrap();
    let second_done = second.item.completed_at.unwrap();
    assert!(second_done >= first_done);
}

#[tokio::test]
async fn creating_a_done_item_stamps_completion() {
    let db = test_db().await;
    let list = create_list(&db, "Inbox").await;

    let mut payload = item_payload("Already done");
    payload.status = TodoStatus::Done;
    let item = todos::create_item(&db, list.id, payload).await.unwrap();

    assert!(item.item.completed_at.is_some());
}

#[tokio::test]
async fn deleting_a_list_cascades_to_items_and_associations() {
    let db = test_db().await;
    let list = create_list(&db, "Doomed").await;

    let mut payload = item_payload("Tagged");
    payload.tags = Some(vec!["keepsake".to_string()]);
    todos::create_item(&db, list.id, payload).await.unwrap();
    create_item(&db, list.id, "Plain").await;

    todos::delete_list(&db, list.id).await.unwrap();

    assert!(matches!(
        todos::get_list(&db, list.id).await,
        Err(Error::ListNotFound { .. })
    ));
    assert!(todo_items::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(todo_item_tags::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());

    // Orphan tags persist in the shared vocabulary
    assert_eq!(todo_tags::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_list_ids_surface_as_list_not_found() {
    let db = test_db().await;
    let missing = Uuid::new_v4();

    assert!(matches!(
        todos::get_list(&db, missing).await,
        Err(Error::ListNotFound { .. })
    ));
    assert!(matches!(
        todos::get_list_detail(&db, missing).await,
        Err(Error::ListNotFound { .. })
    ));
    assert!(matches!(
        todos::update_list(&db, missing, ListUpdate::default()).await,
        Err(Error::ListNotFound { .. })
    ));
    assert!(matches!(
        todos::delete_list(&db, missing).await,
        Err(Error::ListNotFound { .. })
    ));
    assert!(matches!(
        todos::list_items(&db, missing, ItemFilters::default()).await,
        Err(Error::ListNotFound { .. })
    ));
    assert!(matches!(
        todos::create_item(&db, missing, item_payload("Lost")).await,
        Err(Error::ListNotFound { .. })
    ));
}

#[tokio::test]
async fn missing_item_ids_surface_as_item_not_found() {
    let db = test_db().await;
    let missing = Uuid::new_v4();

    assert!(matches!(
        todos::get_item(&db, missing).await,
        Err(Error::ItemNotFound { .. })
    ));
    assert!(matches!(
        todos::update_item(&db, missing, ItemUpdate::default()).await,
        Err(Error::ItemNotFound { .. })
    ));
    assert!(matches!(
        todos::delete_item(&db, missing).await,
        Err(Error::ItemNotFound { .. })
    ));
}
