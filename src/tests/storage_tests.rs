use crate::core::models::user::{NewUser, SearchField};
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage, sqlite::SqliteStorage};

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "pw".to_string(),
    }
}

async fn sqlite_storage() -> SqliteStorage {
    SqliteStorage::connect("sqlite::memory:").await.unwrap()
}

async fn check_create_list_delete<S: Storage>(storage: &S) {
    let anna = storage.create_user(new_user("Anna", "a@x.com")).await.unwrap();
    let bob = storage.create_user(new_user("Bob", "b@x.com")).await.unwrap();
    assert_ne!(anna, bob);

    let users = storage.list_users().await.unwrap();
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![anna, bob]);
    assert_eq!(users[0].password, "pw");

    assert!(storage.delete_user(anna).await.unwrap());
    assert!(!storage.delete_user(anna).await.unwrap());
    let users = storage.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Bob");

    let carol = storage.create_user(new_user("Carol", "c@x.com")).await.unwrap();
    assert!(carol > bob, "ids must not be reused");
}

async fn check_find_by_substring<S: Storage>(storage: &S) {
    storage.create_user(new_user("Anna", "a@x.com")).await.unwrap();
    storage.create_user(new_user("Bob", "bob@anna.dev")).await.unwrap();

    let by_name = storage.find_by_substring(SearchField::Name, "ANN").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Anna");

    let by_email = storage.find_by_substring(SearchField::Email, "anna").await.unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Bob");

    assert!(storage.find_by_substring(SearchField::Name, "zed").await.unwrap().is_empty());
}

async fn check_find_folds_non_ascii_case<S: Storage>(storage: &S) {
    storage.create_user(new_user("Ärger", "ÉMILE@X.COM")).await.unwrap();

    let by_name = storage.find_by_substring(SearchField::Name, "ärger").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Ärger", "stored value is returned unfolded");

    let by_email = storage.find_by_substring(SearchField::Email, "émile").await.unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].email, "ÉMILE@X.COM");
}

async fn check_delete_out_of_range_id<S: Storage>(storage: &S) {
    let anna = storage.create_user(new_user("Anna", "a@x.com")).await.unwrap();
    assert!(!storage.delete_user(u64::MAX).await.unwrap());
    assert!(!storage.delete_user(i64::MAX as u64 + 1).await.unwrap());
    assert_eq!(storage.list_users().await.unwrap()[0].id, anna);
}

async fn check_wildcards_match_literally<S: Storage>(storage: &S) {
    storage.create_user(new_user("50% off", "deal@x.com")).await.unwrap();
    storage.create_user(new_user("500 off", "other@x.com")).await.unwrap();
    storage.create_user(new_user("snake_case", "s@x.com")).await.unwrap();
    storage.create_user(new_user("snakeXcase", "t@x.com")).await.unwrap();

    let percent = storage.find_by_substring(SearchField::Name, "0%").await.unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name, "50% off");

    let underscore = storage.find_by_substring(SearchField::Name, "e_c").await.unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].name, "snake_case");
}

#[tokio::test]
async fn test_in_memory_create_list_delete() {
    check_create_list_delete(&InMemoryStorage::new()).await;
}

#[tokio::test]
async fn test_in_memory_find_by_substring() {
    check_find_by_substring(&InMemoryStorage::new()).await;
}

#[tokio::test]
async fn test_in_memory_wildcards_match_literally() {
    check_wildcards_match_literally(&InMemoryStorage::new()).await;
}

#[tokio::test]
async fn test_in_memory_find_folds_non_ascii_case() {
    check_find_folds_non_ascii_case(&InMemoryStorage::new()).await;
}

#[tokio::test]
async fn test_in_memory_delete_out_of_range_id() {
    check_delete_out_of_range_id(&InMemoryStorage::new()).await;
}

#[tokio::test]
async fn test_sqlite_find_folds_non_ascii_case() {
    check_find_folds_non_ascii_case(&sqlite_storage().await).await;
}

#[tokio::test]
async fn test_sqlite_delete_out_of_range_id() {
    check_delete_out_of_range_id(&sqlite_storage().await).await;
}

#[tokio::test]
async fn test_sqlite_create_list_delete() {
    check_create_list_delete(&sqlite_storage().await).await;
}

#[tokio::test]
async fn test_sqlite_find_by_substring() {
    check_find_by_substring(&sqlite_storage().await).await;
}

#[tokio::test]
async fn test_sqlite_wildcards_match_literally() {
    check_wildcards_match_literally(&sqlite_storage().await).await;
}
