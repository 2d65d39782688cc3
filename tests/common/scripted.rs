//! Repository whose live queries are driven by the test.

use std::collections::VecDeque;

use async_trait::async_trait;
use clubhub::async_result::AsyncResult;
use clubhub::domain::Entity;
use clubhub::repository::{Repository, RepositoryError, Subscription, SubscriptionSender};
use parking_lot::Mutex;

/// Hands every `query_stream` call's producing end to the test, and answers
/// `get_by_id` from a queue of scripted results.
pub struct ScriptedRepository<E: Entity> {
    streams: Mutex<Vec<(E::Query, SubscriptionSender<Vec<E>>)>>,
    reads: Mutex<VecDeque<Result<Option<E>, RepositoryError>>>,
    read_calls: Mutex<usize>,
}

impl<E: Entity> Default for ScriptedRepository<E> {
    fn default() -> Self {
        Self {
            streams: Mutex::new(Vec::new()),
            reads: Mutex::new(VecDeque::new()),
            read_calls: Mutex::new(0),
        }
    }
}

impl<E: Entity> ScriptedRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live queries opened so far.
    pub fn stream_count(&self) -> usize {
        self.streams.lock().len()
    }

    pub fn query(&self, index: usize) -> E::Query {
        self.streams.lock()[index].0.clone()
    }

    /// Push a value into live query `index`. False once it was cancelled.
    pub fn emit(&self, index: usize, value: AsyncResult<Vec<E>>) -> bool {
        self.streams.lock()[index].1.emit(value)
    }

    pub fn is_cancelled(&self, index: usize) -> bool {
        self.streams.lock()[index].1.is_closed()
    }

    pub fn script_read(&self, result: Result<Option<E>, RepositoryError>) {
        self.reads.lock().push_back(result);
    }

    pub fn read_calls(&self) -> usize {
        *self.read_calls.lock()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for ScriptedRepository<E> {
    async fn get_by_id(&self, _id: &E::Id) -> Result<Option<E>, RepositoryError> {
        *self.read_calls.lock() += 1;
        let next = self.reads.lock().pop_front();
        next.unwrap_or(Ok(None))
    }

    fn query_stream(&self, query: E::Query) -> Subscription<Vec<E>> {
        let (sender, subscription) = Subscription::channel();
        self.streams.lock().push((query, sender));
        subscription
    }

    async fn create(&self, _entity: E) -> Result<E, RepositoryError> {
        Err(RepositoryError::remote("scripted repository is read-only"))
    }

    async fn update(&self, _id: &E::Id, _patch: E::Patch) -> Result<(), RepositoryError> {
        Err(RepositoryError::remote("scripted repository is read-only"))
    }

    async fn delete(&self, _id: &E::Id) -> Result<(), RepositoryError> {
        Err(RepositoryError::remote("scripted repository is read-only"))
    }
}
