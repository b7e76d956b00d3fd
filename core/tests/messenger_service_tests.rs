use chrono::{DateTime, TimeZone, Utc};

use messenger_core::Service;
use messenger_core::domain::common::{Clock, CoreError};
use messenger_core::domain::message::entities::{AddMessageRequest, Message, MessageId};
use messenger_core::domain::message::ports::MessengerService;
use messenger_core::domain::ports::{InMemoryRepository, Repository};
use messenger_core::domain::user::entities::User;
use messenger_core::domain::user::ports::UserService;

#[derive(Clone, Copy)]
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap()
}

type TestService = Service<InMemoryRepository<Message>, InMemoryRepository<User>, FixedClock>;

fn service() -> (TestService, InMemoryRepository<Message>, InMemoryRepository<User>) {
    let messages = InMemoryRepository::new();
    let users = InMemoryRepository::new();
    let service = Service::new(messages.clone(), users.clone(), FixedClock(fixed_time()));
    (service, messages, users)
}

fn add_request(sender: &str, target: &str, text: &str, is_personal: bool) -> AddMessageRequest {
    AddMessageRequest {
        sender: sender.to_string(),
        target: target.to_string(),
        text: text.to_string(),
        is_personal,
    }
}

#[tokio::test]
async fn add_then_read_marks_read_and_keeps_text() {
    let (service, messages, _) = service();

    let id = service
        .add_message(add_request("a", "g1", "hi", false))
        .await
        .expect("add should succeed");

    service.read_message(id).await.expect("read should succeed");

    let stored = messages.get(id.into()).await.expect("message should exist");
    assert!(stored.is_read);
    assert_eq!(stored.text, "hi");

    let history = service.history("g1").await.expect("history should succeed");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, id);
    assert_eq!(history[0].text, "hi");
}

#[tokio::test]
async fn read_message_is_idempotent() {
    let (service, messages, _) = service();

    let id = service
        .add_message(add_request("a", "g1", "hi", false))
        .await
        .unwrap();

    service.read_message(id).await.unwrap();
    service.read_message(id).await.unwrap();

    let stored = messages.get(id.into()).await.unwrap();
    assert!(stored.is_read);
}

#[tokio::test]
async fn add_message_defaults_and_timestamp() {
    let (service, messages, _) = service();

    let id = service
        .add_message(add_request("a", "g1", "hi", true))
        .await
        .unwrap();

    let stored = messages.get(id.into()).await.unwrap();
    assert!(!stored.is_read);
    assert!(!stored.is_deleted);
    assert!(stored.is_personal);
    assert_eq!(stored.sender, "a");
    assert_eq!(stored.target, "g1");
    assert_eq!(stored.timestamp, fixed_time());
}

#[tokio::test]
async fn delete_hides_from_history_but_keeps_record() {
    let (service, messages, _) = service();

    let id = service
        .add_message(add_request("a", "g1", "hi", false))
        .await
        .unwrap();

    service.delete_message(id).await.unwrap();

    let history = service.history("g1").await.unwrap();
    assert!(history.is_empty());

    // Soft delete: the record is still retrievable by id.
    let stored = messages.get(id.into()).await.unwrap();
    assert!(stored.is_deleted);
    assert_eq!(stored.text, "hi");
}

#[tokio::test]
async fn change_text_replaces_exactly() {
    let (service, _, _) = service();

    let id = service
        .add_message(add_request("a", "g1", "hi", false))
        .await
        .unwrap();

    service
        .change_text_message(id, "hi there".to_string())
        .await
        .unwrap();

    let history = service.history("g1").await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].text, "hi there");
}

#[tokio::test]
async fn history_filters_by_target_and_deletion() {
    let (service, _, _) = service();

    let in_group = service
        .add_message(add_request("a", "g1", "one", false))
        .await
        .unwrap();
    let personal_in_group = service
        .add_message(add_request("b", "g1", "two", true))
        .await
        .unwrap();
    let other_group = service
        .add_message(add_request("a", "g2", "three", false))
        .await
        .unwrap();
    let deleted = service
        .add_message(add_request("a", "g1", "four", false))
        .await
        .unwrap();
    service.delete_message(deleted).await.unwrap();

    let history = service.history("g1").await.unwrap();
    let ids: Vec<MessageId> = history.iter().map(|entry| entry.id).collect();

    // is_personal does not affect history membership.
    assert_eq!(ids, vec![in_group, personal_in_group]);
    assert!(!ids.contains(&other_group));
    assert!(!ids.contains(&deleted));
}

#[tokio::test]
async fn operations_on_missing_message_fail_with_not_found() {
    let (service, _, _) = service();

    let missing = MessageId(42);

    assert!(matches!(
        service.read_message(missing).await,
        Err(CoreError::NotFound { .. })
    ));
    assert!(matches!(
        service.change_text_message(missing, "x".to_string()).await,
        Err(CoreError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_message(missing).await,
        Err(CoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn authorize_user_allows_duplicates() {
    let (service, _, users) = service();

    service
        .authorize_user("alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    service
        .authorize_user("alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    let names = service.get_users().await.unwrap();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|user| user.name == "alice"));

    let stored = users.get_all().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].id, stored[1].id);
}

#[tokio::test]
async fn history_round_trip_scenario() {
    let (service, _, _) = service();

    let id = service
        .add_message(add_request("a", "g1", "hi", false))
        .await
        .unwrap();
    assert_eq!(id, MessageId(1));

    let history = service.history("g1").await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, id);
    assert_eq!(history[0].text, "hi");

    service
        .change_text_message(id, "hi there".to_string())
        .await
        .unwrap();
    let history = service.history("g1").await.unwrap();
    assert_eq!(history[0].text, "hi there");

    service.delete_message(id).await.unwrap();
    let history = service.history("g1").await.unwrap();
    assert!(history.is_empty());
}
