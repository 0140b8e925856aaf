//! User registration business logic.
//!
//! Users are created on first interaction and never deleted. Registration is
//! idempotent from the caller's perspective: creating an existing user is
//! reported as "already there", not an error.

use crate::{
    errors::Result,
    models::User,
    store::{Collection, RecordStore},
};

/// Registers a user, unless one with the same `user_id` already exists.
///
/// Returns `Ok(true)` if the user was appended, `Ok(false)` if the ID was
/// already present. The existence check reads the full collection and then
/// appends without a lock; two near-simultaneous registrations for the same
/// ID can both pass the check (see DESIGN.md).
///
/// # Errors
/// Returns an error if the store cannot be read or written.
pub async fn create_user<S: RecordStore>(store: &S, user: &User) -> Result<bool> {
    let rows = store.read_all(Collection::Users).await?;

    let exists = rows
        .iter()
        .filter_map(|row| User::from_row(row))
        .any(|existing| existing.user_id == user.user_id);

    if exists {
        return Ok(false);
    }

    store.append(Collection::Users, user.to_row()).await?;
    Ok(true)
}

/// Looks up a user by ID.
///
/// # Errors
/// Returns an error if the store cannot be read.
pub async fn get_user<S: RecordStore>(store: &S, user_id: &str) -> Result<Option<User>> {
    let rows = store.read_all(Collection::Users).await?;

    Ok(rows
        .iter()
        .filter_map(|row| User::from_row(row))
        .find(|user| user.user_id == user_id))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_user_appends_once() -> Result<()> {
        let store = MemoryStore::new();
        let user = User::new("12345");

        assert!(create_user(&store, &user).await?);
        assert!(!create_user(&store, &user).await?);

        let rows = store.read_all(Collection::Users).await?;
        assert_eq!(rows.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_user_round_trip() -> Result<()> {
        let store = MemoryStore::new();
        let mut user = User::new("12345");
        user.first_name = Some("Sam".to_string());
        create_user(&store, &user).await?;

        let found = get_user(&store, "12345").await?.unwrap();
        assert_eq!(found, user);

        assert!(get_user(&store, "99999").await?.is_none());
        Ok(())
    }
}
