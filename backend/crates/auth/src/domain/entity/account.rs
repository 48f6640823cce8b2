//! Account Entity

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::email::Email;

/// Account resolved by email at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: AccountId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}
