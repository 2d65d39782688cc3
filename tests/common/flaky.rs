//! Repository wrapper whose writes can be made to fail.

use std::sync::Arc;

use async_trait::async_trait;
use clubhub::domain::Entity;
use clubhub::repository::{Repository, RepositoryError, Subscription};
use parking_lot::Mutex;

/// Delegates to `inner`, except that `update` and `create` return
/// `Remote(message)` while a failure is set for them.
pub struct FlakyWrites<E: Entity> {
    inner: Arc<dyn Repository<E>>,
    fail_updates: Mutex<Option<String>>,
    fail_creates: Mutex<Option<String>>,
}

impl<E: Entity> FlakyWrites<E> {
    pub fn new(inner: Arc<dyn Repository<E>>) -> Self {
        Self {
            inner,
            fail_updates: Mutex::new(None),
            fail_creates: Mutex::new(None),
        }
    }

    pub fn fail_updates(&self, message: Option<&str>) {
        *self.fail_updates.lock() = message.map(str::to_string);
    }

    pub fn fail_creates(&self, message: Option<&str>) {
        *self.fail_creates.lock() = message.map(str::to_string);
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for FlakyWrites<E> {
    async fn get_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError> {
        self.inner.get_by_id(id).await
    }

    fn query_stream(&self, query: E::Query) -> Subscription<Vec<E>> {
        self.inner.query_stream(query)
    }

    async fn create(&self, entity: E) -> Result<E, RepositoryError> {
        let failure = self.fail_creates.lock().clone();
        match failure {
            Some(message) => Err(RepositoryError::remote(message)),
            None => self.inner.create(entity).await,
        }
    }

    async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<(), RepositoryError> {
        let failure = self.fail_updates.lock().clone();
        match failure {
            Some(message) => Err(RepositoryError::remote(message)),
            None => self.inner.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &E::Id) -> Result<(), RepositoryError> {
        self.inner.delete(id).await
    }
}
