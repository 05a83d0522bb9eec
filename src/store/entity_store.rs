//! A [`Store`] holding an [`EntityCollection`].

use std::cmp::Ordering;
use std::ops::Deref;

use futures::stream::Stream;

use super::container::Store;
use crate::persistent::{EntityCollection, EntityIdentity};

/// A store of an [`EntityCollection`] whose mutations are store updates.
///
/// Each mutation applies the matching collection operation to the current
/// state. Operations that leave the collection unchanged emit nothing.
/// Dereferences to the underlying [`Store`].
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::StreamExt;
/// use ngry::persistent::{EntityCollection, KeyedBy};
/// use ngry::store::EntityCollectionStore;
///
/// let store = EntityCollectionStore::new(EntityCollection::empty(KeyedBy(|n: &u32| *n)));
/// let lengths = store.select_len();
///
/// store.add(1);
/// store.add(1); // already present
/// store.add_many([2, 3]);
/// store.destroy();
///
/// assert_eq!(block_on(lengths.collect::<Vec<_>>()), vec![0, 1, 3]);
/// ```
pub struct EntityCollectionStore<Entity, Identity>
where
    Identity: EntityIdentity<Entity>,
{
    store: Store<EntityCollection<Entity, Identity>>,
}

impl<Entity, Identity> EntityCollectionStore<Entity, Identity>
where
    Entity: Clone + PartialEq,
    Identity: EntityIdentity<Entity>,
{
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: EntityCollection<Entity, Identity>) -> Self {
        Self {
            store: Store::new(initial),
        }
    }

    /// Adds `entity` unless one with the same identity exists.
    pub fn add(&self, entity: Entity) {
        self.store.update(|collection| collection.add(entity));
    }

    /// Adds every entity whose identity is not present yet.
    pub fn add_many<I>(&self, entities: I)
    where
        I: IntoIterator<Item = Entity>,
    {
        self.store.update(|collection| collection.add_many(entities));
    }

    /// Replaces the entity with the same identity as `entity`, if present.
    pub fn update(&self, entity: Entity) {
        self.store.update(|collection| collection.update(entity));
    }

    /// Replaces each present entity sharing an identity with one of `entities`.
    pub fn update_many<I>(&self, entities: I)
    where
        I: IntoIterator<Item = Entity>,
    {
        self.store.update(|collection| collection.update_many(entities));
    }

    /// Replaces or appends `entity`.
    pub fn set(&self, entity: Entity) {
        self.store.update(|collection| collection.set(entity));
    }

    /// Replaces or appends each of `entities`.
    pub fn set_many<I>(&self, entities: I)
    where
        I: IntoIterator<Item = Entity>,
    {
        self.store.update(|collection| collection.set_many(entities));
    }

    /// Deletes the entity identified by `id`.
    pub fn delete(&self, id: &Identity::Id) {
        self.store.update(|collection| collection.delete(id));
    }

    /// Deletes every entity identified by one of `ids`.
    pub fn delete_many<I>(&self, ids: I)
    where
        I: IntoIterator<Item = Identity::Id>,
    {
        self.store.update(|collection| collection.delete_many(ids));
    }

    /// Deletes the entity sharing `sample`'s identity.
    pub fn remove(&self, sample: &Entity) {
        self.store.update(|collection| collection.remove(sample));
    }

    /// Deletes the entities sharing an identity with any of `samples`.
    pub fn remove_many<'a, I>(&self, samples: I)
    where
        Entity: 'a,
        I: IntoIterator<Item = &'a Entity>,
    {
        self.store.update(|collection| collection.remove_many(samples));
    }

    /// Empties the collection.
    pub fn clear(&self) {
        self.store.update(EntityCollection::clear);
    }

    /// Keeps only the entities matching `predicate`.
    pub fn filter<P>(&self, predicate: P)
    where
        P: FnMut(&Entity) -> bool,
    {
        self.store.update(|collection| collection.filter(predicate));
    }

    /// Orders the entities with `compare`.
    pub fn sort<C>(&self, compare: C)
    where
        C: FnMut(&Entity, &Entity) -> Ordering,
    {
        self.store.update(|collection| collection.sort(compare));
    }

    /// Stream of the entity identifiers.
    pub fn select_ids(&self) -> impl Stream<Item = Vec<Identity::Id>> + use<Entity, Identity>
    where
        Identity::Id: Clone + PartialEq,
    {
        self.store.select(|collection| collection.ids().to_vec())
    }

    /// Stream of the entities.
    pub fn select_entities(&self) -> impl Stream<Item = Vec<Entity>> + use<Entity, Identity> {
        self.store.select(EntityCollection::to_vec)
    }

    /// Stream of the entity count.
    pub fn select_len(&self) -> impl Stream<Item = usize> + use<Entity, Identity> {
        self.store.select(EntityCollection::len)
    }

    /// Stream of whether the collection is empty.
    pub fn select_is_empty(&self) -> impl Stream<Item = bool> + use<Entity, Identity> {
        self.store.select(EntityCollection::is_empty)
    }
}

impl<Entity, Identity> Deref for EntityCollectionStore<Entity, Identity>
where
    Identity: EntityIdentity<Entity>,
{
    type Target = Store<EntityCollection<Entity, Identity>>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl<Entity, Identity> Clone for EntityCollectionStore<Entity, Identity>
where
    Identity: EntityIdentity<Entity>,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
