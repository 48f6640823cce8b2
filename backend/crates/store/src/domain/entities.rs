//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, StoreId};

/// Store as seen by callers of the service
///
/// Every field is optional because callers build it from untrusted input and
/// because a lookup that finds nothing yields `Store::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    /// Assigned by the service on create, required on update
    pub id: Option<StoreId>,
    /// Owning account, mandatory for every write
    pub owner: Option<AccountId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Store row as it exists in storage
///
/// Can only be built with an id and an owner, so an ownerless store cannot
/// reach persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRecord {
    pub id: StoreId,
    pub owner: AccountId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreRecord {
    /// Build the row to write for `store`
    ///
    /// `created_at` keeps the caller's value when present; storage ignores it
    /// on update anyway.
    pub fn new(id: StoreId, owner: AccountId, store: &Store) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner,
            name: store.name.clone(),
            description: store.description.clone(),
            created_at: store.created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}

impl From<StoreRecord> for Store {
    fn from(record: StoreRecord) -> Self {
        Self {
            id: Some(record.id),
            owner: Some(record.owner),
            name: record.name,
            description: record.description,
            created_at: Some(record.created_at),
            updated_at: Some(record.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_copies_pass_through_fields() {
        let store = Store {
            name: Some("Green Corner".to_string()),
            description: Some("Open late".to_string()),
            ..Default::default()
        };
        let id = StoreId::new();
        let owner = AccountId::new();

        let record = StoreRecord::new(id, owner, &store);
        assert_eq!(record.id, id);
        assert_eq!(record.owner, owner);
        assert_eq!(record.name.as_deref(), Some("Green Corner"));
        assert_eq!(record.description.as_deref(), Some("Open late"));
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_record_keeps_existing_created_at() {
        let created_at = Utc::now() - chrono::Duration::days(3);
        let store = Store {
            created_at: Some(created_at),
            ..Default::default()
        };

        let record = StoreRecord::new(StoreId::new(), AccountId::new(), &store);
        assert_eq!(record.created_at, created_at);
        assert!(record.updated_at > created_at);
    }

    #[test]
    fn test_store_from_record() {
        let record = StoreRecord::new(StoreId::new(), AccountId::new(), &Store::default());
        let store = Store::from(record.clone());
        assert_eq!(store.id, Some(record.id));
        assert_eq!(store.owner, Some(record.owner));
        assert_eq!(store.updated_at, Some(record.updated_at));
    }
}
