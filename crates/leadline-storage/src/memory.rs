//! In-memory lead store.
//!
//! Leads live in a `BTreeMap` behind a `RwLock` and are lost when the process
//! exits. Ids start at 1 and increase by one per insert, like a `SERIAL`
//! column.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use leadline_core::{Lead, NewLead};

use crate::{LeadStore, StorageError};

/// An in-memory lead store.
///
/// Cheap to clone; clones share the same data.
///
/// # Examples
///
/// ```
/// # use leadline_core::NewLead;
/// # use leadline_storage::{LeadStore, MemoryStore};
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryStore::new();
/// let lead = store
///     .insert(NewLead {
///         email: "jane@bank.com".to_owned(),
///         name: None,
///         company_name: None,
///         message: None,
///     })
///     .await
///     .unwrap();
/// assert_eq!(lead.id, 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    leads: BTreeMap<i32, Lead>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored leads.
    pub async fn len(&self) -> usize {
        self.inner.read().await.leads.len()
    }

    /// Whether no lead has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.leads.is_empty()
    }
}

#[async_trait::async_trait]
impl LeadStore for MemoryStore {
    async fn insert(&self, lead: NewLead) -> Result<Lead, StorageError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| StorageError::Insert {
                reason: "lead id space exhausted".to_owned(),
            })?;

        let stored = Lead {
            id,
            email: lead.email,
            name: lead.name,
            company_name: lead.company_name,
            message: lead.message,
            created_at: Utc::now(),
        };

        inner.last_id = id;
        inner.leads.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: i32) -> Result<Option<Lead>, StorageError> {
        Ok(self.inner.read().await.leads.get(&id).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_lead(email: &str) -> NewLead {
        NewLead {
            email: email.to_owned(),
            name: None,
            company_name: None,
            message: None,
        }
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.insert(new_lead("a@bank.com")).await.unwrap();
        let b = store.insert(new_lead("b@bank.com")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(b.created_at >= a.created_at);
    }

    #[tokio::test]
    async fn insert_then_get_roundtrip() {
        let store = MemoryStore::new();
        let submitted = NewLead {
            email: "jane@bank.com".to_owned(),
            name: Some("Jane Smith".to_owned()),
            company_name: Some("First National Bank".to_owned()),
            message: Some("Demo please".to_owned()),
        };
        let lead = store.insert(submitted.clone()).await.unwrap();
        assert_eq!(lead.email, submitted.email);
        assert_eq!(lead.name, submitted.name);
        assert_eq!(lead.company_name, submitted.company_name);
        assert_eq!(lead.message, submitted.message);
        assert_eq!(store.get(lead.id).await.unwrap(), Some(lead));
    }

    #[tokio::test]
    async fn duplicate_emails_are_separate_leads() {
        let store = MemoryStore::new();
        let a = store.insert(new_lead("jane@bank.com")).await.unwrap();
        let b = store.insert(new_lead("jane@bank.com")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        assert!(clone.is_empty().await);
        let lead = store.insert(new_lead("jane@bank.com")).await.unwrap();
        assert_eq!(clone.get(lead.id).await.unwrap(), Some(lead));
    }

    #[tokio::test]
    async fn concurrent_inserts_get_unique_ids() {
        let store = MemoryStore::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(new_lead(&format!("lead{i}@bank.com"))).await.unwrap().id
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }
}
