//! Generic repository trait for persistence gateways.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// `Entity` is the persisted record, `NewEntity` the record before the
/// gateway has assigned it an identity, and `Id` the identity type.
/// Implementations assign identities on `create`/`create_many` and never
/// reuse an identity once handed out.
#[async_trait]
pub trait Repository<Entity, NewEntity, Id>: Send + Sync + std::fmt::Debug + 'static
where
    Entity: Send + Sync + 'static,
    NewEntity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Return every persisted entity.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Persist a new entity and return it with its assigned identity.
    async fn create(&self, entity: &NewEntity) -> AppResult<Entity>;

    /// Persist several entities atomically, returning them in input order.
    async fn create_many(&self, entities: &[NewEntity]) -> AppResult<Vec<Entity>>;

    /// Overwrite an existing entity and return the stored version.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
