//! Unit tests for mock user repository

use crate::domain::entities::user::NewUser;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Test".to_string(),
    }
}

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();

    let created = repo.create(new_user("a@example.com")).await.unwrap();
    assert_eq!(created.id, 1);

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.as_ref().map(|u| u.email.as_str()), Some("a@example.com"));

    let by_email = repo.find_by_email("a@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(created.id));
    assert!(repo.exists_by_email("a@example.com").await.unwrap());
    assert!(!repo.exists_by_email("b@example.com").await.unwrap());
}

#[tokio::test]
async fn test_mock_repository_duplicate_email() {
    let repo = MockUserRepository::new();

    repo.create(new_user("a@example.com")).await.unwrap();
    let result = repo.create(new_user("a@example.com")).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}
