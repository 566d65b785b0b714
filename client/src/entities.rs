use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::protocol::{ListParams, SuccessResponse};
use shared::Collection;
use tokio::sync::broadcast;

use crate::client::CrmClient;
use crate::error::{ClientError, ClientResult};

const READ_ONLY_ROLE: &str = "viewer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// Published to subscribers after a successful write through this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub collection: String,
    pub kind: ChangeKind,
    pub id: String,
}

/// Equality conditions supported by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFilter {
    pub organization: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
}

impl EntityFilter {
    pub fn organization(organization: impl Into<String>) -> Self {
        Self {
            organization: Some(organization.into()),
            ..Self::default()
        }
    }
}

/// CRUD access to one collection.
#[derive(Clone)]
pub struct EntityClient {
    client: CrmClient,
    collection: Collection,
    changes: broadcast::Sender<ChangeEvent>,
}

impl EntityClient {
    pub(crate) fn new(client: CrmClient, collection: Collection) -> Self {
        let changes = client.change_sender(collection);
        Self {
            client,
            collection,
            changes,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub async fn list(&self, sort: Option<&str>, limit: Option<usize>) -> ClientResult<Vec<Value>> {
        self.filter(EntityFilter::default(), sort, limit).await
    }

    pub async fn filter(
        &self,
        filter: EntityFilter,
        sort: Option<&str>,
        limit: Option<usize>,
    ) -> ClientResult<Vec<Value>> {
        let params = ListParams {
            organization: filter.organization,
            id: filter.id,
            name: filter.name,
            sort: sort.map(str::to_string),
            limit,
        };
        let builder = self
            .client
            .request(Method::GET, &self.collection_path())?
            .query(&params);
        self.client.send(builder).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Value> {
        let builder = self.client.request(Method::GET, &self.item_path(id))?;
        self.client.send(builder).await
    }

    pub async fn create(&self, body: Value) -> ClientResult<Value> {
        self.ensure_writable()?;
        let builder = self
            .client
            .request(Method::POST, &self.collection_path())?
            .json(&body);
        let created: Value = self.client.send(builder).await?;
        let id = created.get("id").and_then(Value::as_str).unwrap_or_default();
        self.publish(ChangeKind::Created, id);
        Ok(created)
    }

    pub async fn update(&self, id: &str, body: Value) -> ClientResult<Value> {
        self.ensure_writable()?;
        let builder = self
            .client
            .request(Method::PUT, &self.item_path(id))?
            .json(&body);
        let updated = self.client.send(builder).await?;
        self.publish(ChangeKind::Updated, id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<SuccessResponse> {
        self.ensure_writable()?;
        let builder = self.client.request(Method::DELETE, &self.item_path(id))?;
        let response = self.client.send(builder).await?;
        self.publish(ChangeKind::Deleted, id);
        Ok(response)
    }

    /// Change notifications for this collection, shared with every other
    /// `EntityClient` of the same `CrmClient`.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.changes.subscribe()
    }

    fn ensure_writable(&self) -> ClientResult<()> {
        match self.client.session().role.as_deref() {
            Some(READ_ONLY_ROLE) => Err(ClientError::ReadOnly),
            _ => Ok(()),
        }
    }

    fn publish(&self, kind: ChangeKind, id: &str) {
        // No receivers is fine.
        let _ = self.changes.send(ChangeEvent {
            collection: self.collection.name.to_string(),
            kind,
            id: id.to_string(),
        });
    }

    fn collection_path(&self) -> String {
        format!("/api/{}", self.collection.name)
    }

    fn item_path(&self, id: &str) -> String {
        format!("/api/{}/{}", self.collection.name, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::collections::{CONTACTS, MOTIONS};

    fn client() -> CrmClient {
        CrmClient::new("http://127.0.0.1:9").unwrap()
    }

    #[tokio::test]
    async fn viewers_cannot_write_locally() {
        let client = client();
        client.update_session(|s| {
            s.token = Some("t".into());
            s.role = Some("viewer".into());
        });
        let contacts = client.entity(CONTACTS);
        assert!(matches!(
            contacts.create(serde_json::json!({})).await,
            Err(ClientError::ReadOnly)
        ));
        assert!(matches!(contacts.delete("x").await, Err(ClientError::ReadOnly)));
    }

    #[test]
    fn subscribers_are_shared_per_collection() {
        let client = client();
        let first = client.entity(CONTACTS);
        let second = client.entity(CONTACTS);
        let motions = client.entity(MOTIONS);
        let mut rx = second.subscribe();
        let mut motion_rx = motions.subscribe();

        first.publish(ChangeKind::Updated, "abc");
        let event = rx.try_recv().unwrap();
        assert_eq!(event.collection, "contacts");
        assert_eq!(event.kind, ChangeKind::Updated);
        assert_eq!(event.id, "abc");
        assert!(motion_rx.try_recv().is_err());
    }
}
