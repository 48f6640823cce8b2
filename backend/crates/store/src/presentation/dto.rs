//! API DTOs (Data Transfer Objects)

use kernel::id::{AccountId, StoreId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Store;

// ============================================================================
// Store input
// ============================================================================

/// Store as sent by clients on create and update
///
/// `id` is ignored on create and required on update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    pub id: Option<Uuid>,
    pub owner: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<StoreRequest> for Store {
    fn from(req: StoreRequest) -> Self {
        Store {
            id: req.id.map(StoreId::from_uuid),
            owner: req.owner.map(AccountId::from_uuid),
            name: req.name,
            description: req.description,
            created_at: None,
            updated_at: None,
        }
    }
}

// ============================================================================
// Store output
// ============================================================================

/// Store as returned to clients
///
/// An empty store (unknown id) serializes with every field `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: Option<String>,
    pub owner: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at_ms: Option<i64>,
    pub updated_at_ms: Option<i64>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id.map(|id| id.to_string()),
            owner: store.owner.map(|owner| owner.to_string()),
            name: store.name,
            description: store.description,
            created_at_ms: store.created_at.map(|t| t.timestamp_millis()),
            updated_at_ms: store.updated_at.map(|t| t.timestamp_millis()),
        }
    }
}
