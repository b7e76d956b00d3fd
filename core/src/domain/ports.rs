use std::sync::{Arc, Mutex};

use crate::domain::common::CoreError;

/// A storable record with a storage-assigned identifier.
///
/// `id` is `None` until the first save; repositories assign it on insert and
/// never change it afterwards. `Filter` is the typed query object a backing
/// store translates into its own filtering (SQL `WHERE`, in-memory scan, ...);
/// [`Entity::matches`] defines its canonical meaning.
pub trait Entity: Clone + Send + Sync + 'static {
    const NAME: &'static str;
    type Filter: Send + Sync;

    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
    fn matches(&self, filter: &Self::Filter) -> bool;
}

/// Generic storage port: fetch all, fetch filtered, fetch one, upsert.
///
/// `save` inserts when the entity has no id and updates in place otherwise,
/// returning the identifier either way. `get` fails with
/// [`CoreError::NotFound`] for an unknown id.
pub trait Repository<T: Entity>: Send + Sync {
    fn get_all(&self) -> impl Future<Output = Result<Vec<T>, CoreError>> + Send;

    fn get_all_where(
        &self,
        filter: &T::Filter,
    ) -> impl Future<Output = Result<Vec<T>, CoreError>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = Result<T, CoreError>> + Send;

    fn save(&self, entity: T) -> impl Future<Output = Result<i64, CoreError>> + Send;
}

#[derive(Clone)]
pub struct InMemoryRepository<T> {
    rows: Arc<Mutex<Vec<T>>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, CoreError> {
        let rows = self.rows.lock().unwrap();

        Ok(rows.clone())
    }

    async fn get_all_where(&self, filter: &T::Filter) -> Result<Vec<T>, CoreError> {
        let rows = self.rows.lock().unwrap();

        Ok(rows
            .iter()
            .filter(|row| row.matches(filter))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<T, CoreError> {
        let rows = self.rows.lock().unwrap();

        rows.iter()
            .find(|row| row.id() == Some(id))
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: T::NAME,
                id,
            })
    }

    async fn save(&self, mut entity: T) -> Result<i64, CoreError> {
        let mut rows = self.rows.lock().unwrap();

        match entity.id() {
            Some(id) => {
                let slot = rows
                    .iter_mut()
                    .find(|row| row.id() == Some(id))
                    .ok_or(CoreError::NotFound {
                        entity: T::NAME,
                        id,
                    })?;
                *slot = entity;
                Ok(id)
            }
            None => {
                // Ids start at 1, matching SQLite AUTOINCREMENT.
                let id = rows.iter().filter_map(|row| row.id()).max().unwrap_or(0) + 1;
                entity.set_id(id);
                rows.push(entity);
                Ok(id)
            }
        }
    }
}
