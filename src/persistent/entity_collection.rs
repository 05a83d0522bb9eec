//! Identity-keyed immutable entity collection.
//!
//! This module provides [`EntityCollection`], an ordered set of entities
//! deduplicated by an identity function supplied at construction.
//!
//! # Overview
//!
//! - Entities keep their insertion order; `ids()[i]` is always the identity of
//!   `entities()[i]`.
//! - No two entities share an identity. When the initial iterable contains
//!   duplicates, the **last** occurrence wins and takes the position where it
//!   appeared.
//! - Every operation returns a collection. When nothing changes, the result
//!   shares storage with the receiver, which [`EntityCollection::ptr_eq`]
//!   observes. Callers use that to skip downstream recomputation.
//!
//! # Time Complexity
//!
//! | Operation     | Cost                          |
//! |---------------|-------------------------------|
//! | `get`/`has`   | O(n)                          |
//! | `add`         | O(n)                          |
//! | `update`      | O(n)                          |
//! | `delete`      | O(n)                          |
//! | `delete_many` | O(n * m)                      |
//! | `sort`        | O(n log n)                    |
//! | `clone`       | O(1) (shared storage)         |
//!
//! # Examples
//!
//! ```rust
//! use ngry::persistent::{EntityCollection, KeyedBy};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let users = EntityCollection::new(
//!     KeyedBy(|user: &User| user.id),
//!     [
//!         User { id: 1, name: "Ann" },
//!         User { id: 2, name: "Bob" },
//!         User { id: 1, name: "Anna" },
//!     ],
//! );
//!
//! // The last duplicate wins
//! assert_eq!(users.ids(), &[2, 1]);
//! assert_eq!(users.get(&1).map(|user| user.name), Some("Anna"));
//!
//! // Adding an existing id is a no-op that shares storage
//! let same = users.add(User { id: 2, name: "Robert" });
//! assert!(same.ptr_eq(&users));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Identity Strategy
// =============================================================================

/// Strategy that derives an entity's identifier and compares identifiers.
///
/// Implement this for a dedicated type when identifiers need custom equality,
/// or use [`KeyedBy`] / [`KeyedByWith`] to adapt closures.
pub trait EntityIdentity<Entity> {
    /// The identifier type.
    type Id;

    /// Returns the identifier of `entity`.
    fn select_id(&self, entity: &Entity) -> Self::Id;

    /// Returns `true` when both identifiers refer to the same entity.
    fn compare_ids(&self, left: &Self::Id, right: &Self::Id) -> bool;
}

/// Identity given by a key function; identifiers compare with `PartialEq`.
///
/// # Examples
///
/// ```rust
/// use ngry::persistent::{EntityIdentity, KeyedBy};
///
/// let identity = KeyedBy(|pair: &(u8, char)| pair.0);
/// assert_eq!(identity.select_id(&(7, 'x')), 7);
/// assert!(identity.compare_ids(&7, &7));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct KeyedBy<F>(pub F);

impl<Entity, Id, F> EntityIdentity<Entity> for KeyedBy<F>
where
    F: Fn(&Entity) -> Id,
    Id: PartialEq,
{
    type Id = Id;

    #[inline]
    fn select_id(&self, entity: &Entity) -> Id {
        (self.0)(entity)
    }

    #[inline]
    fn compare_ids(&self, left: &Id, right: &Id) -> bool {
        left == right
    }
}

/// Identity given by a key function and an explicit identifier comparator.
///
/// # Examples
///
/// ```rust
/// use ngry::persistent::{EntityCollection, KeyedByWith};
///
/// let tags = EntityCollection::new(
///     KeyedByWith(
///         |tag: &String| tag.clone(),
///         |left: &String, right: &String| left.eq_ignore_ascii_case(right),
///     ),
///     ["Rust".to_string(), "rust".to_string(), "Go".to_string()],
/// );
///
/// assert_eq!(tags.len(), 2);
/// assert!(tags.has(&"RUST".to_string()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct KeyedByWith<F, C>(pub F, pub C);

impl<Entity, Id, F, C> EntityIdentity<Entity> for KeyedByWith<F, C>
where
    F: Fn(&Entity) -> Id,
    C: Fn(&Id, &Id) -> bool,
{
    type Id = Id;

    #[inline]
    fn select_id(&self, entity: &Entity) -> Id {
        (self.0)(entity)
    }

    #[inline]
    fn compare_ids(&self, left: &Id, right: &Id) -> bool {
        (self.1)(left, right)
    }
}

// =============================================================================
// Collection
// =============================================================================

struct Entries<Entity, Id> {
    ids: Vec<Id>,
    entities: Vec<Entity>,
}

/// An ordered, identity-deduplicated, immutable collection of entities.
///
/// Cloning is O(1): clones share storage, and so does every operation that
/// leaves the collection unchanged.
///
/// # Type Parameters
///
/// * `Entity` - The stored value type. Operations that build a new collection
///   require `Clone`.
/// * `Identity` - The [`EntityIdentity`] strategy.
pub struct EntityCollection<Entity, Identity>
where
    Identity: EntityIdentity<Entity>,
{
    identity: Arc<Identity>,
    entries: Arc<Entries<Entity, Identity::Id>>,
}

impl<Entity, Identity> EntityCollection<Entity, Identity>
where
    Identity: EntityIdentity<Entity>,
{
    /// Creates an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::persistent::{EntityCollection, KeyedBy};
    ///
    /// let empty = EntityCollection::empty(KeyedBy(|value: &i32| *value));
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn empty(identity: Identity) -> Self {
        Self {
            identity: Arc::new(identity),
            entries: Arc::new(Entries {
                ids: Vec::new(),
                entities: Vec::new(),
            }),
        }
    }

    /// Creates a collection from `entities`.
    ///
    /// Duplicated identifiers are resolved in favour of the last occurrence,
    /// which keeps the position it had in the input; earlier occurrences are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::persistent::{EntityCollection, KeyedBy};
    ///
    /// let collection = EntityCollection::new(
    ///     KeyedBy(|pair: &(u8, char)| pair.0),
    ///     [(1, 'a'), (2, 'b'), (1, 'c')],
    /// );
    /// assert_eq!(collection.entities(), &[(2, 'b'), (1, 'c')]);
    /// ```
    #[must_use]
    pub fn new<I>(identity: Identity, entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut ids: Vec<Identity::Id> = Vec::new();
        let mut unique: Vec<Entity> = Vec::new();

        for entity in entities {
            let id = identity.select_id(&entity);
            if let Some(index) = ids
                .iter()
                .position(|existing| identity.compare_ids(existing, &id))
            {
                ids.remove(index);
                unique.remove(index);
            }
            ids.push(id);
            unique.push(entity);
        }

        Self {
            identity: Arc::new(identity),
            entries: Arc::new(Entries {
                ids,
                entities: unique,
            }),
        }
    }

    /// Builds a sibling collection sharing this collection's identity.
    ///
    /// `entities` must already be free of duplicate identifiers.
    fn create(&self, entities: Vec<Entity>) -> Self {
        let ids = entities
            .iter()
            .map(|entity| self.identity.select_id(entity))
            .collect();

        Self {
            identity: Arc::clone(&self.identity),
            entries: Arc::new(Entries { ids, entities }),
        }
    }

    /// Returns the number of entities.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.ids.len()
    }

    /// Returns `true` if the collection holds no entities.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.ids.is_empty()
    }

    /// Returns the identifiers in collection order.
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[Identity::Id] {
        &self.entries.ids
    }

    /// Returns the entities in collection order.
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entries.entities
    }

    /// Returns the identity strategy.
    #[inline]
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns an iterator over the entities in collection order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entries.entities.iter()
    }

    /// Returns the first entity, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Entity> {
        self.entries.entities.first()
    }

    /// Returns the last entity, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Entity> {
        self.entries.entities.last()
    }

    /// Returns `true` when both collections share the same storage.
    ///
    /// Operations that leave a collection unchanged return a collection for
    /// which this holds.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Returns the position of the entity identified by `id`.
    #[must_use]
    pub fn position(&self, id: &Identity::Id) -> Option<usize> {
        self.entries
            .ids
            .iter()
            .position(|existing| self.identity.compare_ids(existing, id))
    }

    /// Returns the entity identified by `id`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::persistent::{EntityCollection, KeyedBy};
    ///
    /// let words = EntityCollection::new(KeyedBy(|word: &&str| word.len()), ["a", "bb"]);
    /// assert_eq!(words.get(&2), Some(&"bb"));
    /// assert_eq!(words.get(&3), None);
    /// ```
    #[must_use]
    pub fn get(&self, id: &Identity::Id) -> Option<&Entity> {
        self.position(id).map(|index| &self.entries.entities[index])
    }

    /// Returns `true` if an entity identified by `id` is present.
    #[must_use]
    pub fn has(&self, id: &Identity::Id) -> bool {
        self.position(id).is_some()
    }

    /// Returns `true` if an entity with the same identity as `entity` is
    /// present.
    #[must_use]
    pub fn includes(&self, entity: &Entity) -> bool {
        self.has(&self.identity.select_id(entity))
    }

    /// Returns a collection without the entity identified by `id`.
    ///
    /// The receiver is returned unchanged when no entity matches.
    #[must_use]
    pub fn delete(&self, id: &Identity::Id) -> Self
    where
        Entity: Clone,
    {
        if !self.has(id) {
            return self.clone();
        }

        let entities = self
            .iter()
            .filter(|&entity| {
                !self
                    .identity
                    .compare_ids(&self.identity.select_id(entity), id)
            })
            .cloned()
            .collect();
        self.create(entities)
    }

    /// Returns a collection without any entity identified by one of `ids`.
    ///
    /// The receiver is returned unchanged when nothing was removed.
    #[must_use]
    pub fn delete_many<I>(&self, ids: I) -> Self
    where
        Entity: Clone,
        I: IntoIterator<Item = Identity::Id>,
    {
        let ids: Vec<Identity::Id> = ids.into_iter().collect();

        let entities: Vec<Entity> = self
            .iter()
            .filter(|&entity| {
                let entity_id = self.identity.select_id(entity);
                !ids.iter()
                    .any(|id| self.identity.compare_ids(id, &entity_id))
            })
            .cloned()
            .collect();

        if entities.len() == self.len() {
            self.clone()
        } else {
            self.create(entities)
        }
    }

    /// Returns a collection without the entity sharing `sample`'s identity.
    #[must_use]
    pub fn remove(&self, sample: &Entity) -> Self
    where
        Entity: Clone,
    {
        self.delete(&self.identity.select_id(sample))
    }

    /// Returns a collection without the entities sharing an identity with any
    /// of `samples`.
    #[must_use]
    pub fn remove_many<'a, I>(&self, samples: I) -> Self
    where
        Entity: Clone + 'a,
        I: IntoIterator<Item = &'a Entity>,
    {
        let ids: Vec<Identity::Id> = samples
            .into_iter()
            .map(|sample| self.identity.select_id(sample))
            .collect();
        self.delete_many(ids)
    }

    /// Returns an empty collection, or the receiver if it is already empty.
    #[must_use]
    pub fn clear(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }

        Self {
            identity: Arc::clone(&self.identity),
            entries: Arc::new(Entries {
                ids: Vec::new(),
                entities: Vec::new(),
            }),
        }
    }

    /// Returns a snapshot copy of the entities.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Entity>
    where
        Entity: Clone,
    {
        self.entries.entities.clone()
    }
}

impl<Entity, Identity> EntityCollection<Entity, Identity>
where
    Entity: Clone,
    Identity: EntityIdentity<Entity>,
{
    /// Appends `entity` unless an entity with the same identity exists.
    ///
    /// An existing entity is never replaced; use [`EntityCollection::set`] for
    /// upserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::persistent::{EntityCollection, KeyedBy};
    ///
    /// let collection = EntityCollection::new(KeyedBy(|pair: &(u8, char)| pair.0), [(1, 'a')]);
    ///
    /// let unchanged = collection.add((1, 'z'));
    /// assert!(unchanged.ptr_eq(&collection));
    ///
    /// let extended = collection.add((2, 'b'));
    /// assert_eq!(extended.entities(), &[(1, 'a'), (2, 'b')]);
    /// ```
    #[must_use]
    pub fn add(&self, entity: Entity) -> Self {
        if self.includes(&entity) {
            return self.clone();
        }

        let mut entities = Vec::with_capacity(self.len() + 1);
        entities.extend_from_slice(self.entities());
        entities.push(entity);
        self.create(entities)
    }

    /// Folds [`EntityCollection::add`] over `entities`; duplicates are skipped.
    #[must_use]
    pub fn add_many<I>(&self, entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        entities
            .into_iter()
            .fold(self.clone(), |collection, entity| collection.add(entity))
    }

    /// Replaces the entity with the same identity, keeping its position.
    ///
    /// The receiver is returned unchanged when no entity matches.
    #[must_use]
    pub fn update(&self, entity: Entity) -> Self {
        match self.position(&self.identity.select_id(&entity)) {
            Some(index) => {
                let mut entities = self.to_vec();
                entities[index] = entity;
                self.create(entities)
            }
            None => self.clone(),
        }
    }

    /// Folds [`EntityCollection::update`] over `entities`.
    #[must_use]
    pub fn update_many<I>(&self, entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        entities
            .into_iter()
            .fold(self.clone(), |collection, entity| collection.update(entity))
    }

    /// Updates `entity` when present, otherwise adds it.
    #[must_use]
    pub fn set(&self, entity: Entity) -> Self {
        if self.includes(&entity) {
            self.update(entity)
        } else {
            self.add(entity)
        }
    }

    /// Folds [`EntityCollection::set`] over `entities`.
    #[must_use]
    pub fn set_many<I>(&self, entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        entities
            .into_iter()
            .fold(self.clone(), |collection, entity| collection.set(entity))
    }

    /// Keeps the entities matching `predicate`.
    ///
    /// The receiver is returned unchanged when every entity matched.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Entity) -> bool,
    {
        let entities: Vec<Entity> = self
            .iter()
            .filter(|&entity| predicate(entity))
            .cloned()
            .collect();

        if entities.len() == self.len() {
            self.clone()
        } else {
            self.create(entities)
        }
    }

    /// Orders the entities with `compare` (stable).
    ///
    /// The receiver is returned unchanged when the resulting order has the same
    /// identity at every position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::persistent::{EntityCollection, KeyedBy};
    ///
    /// let numbers = EntityCollection::new(KeyedBy(|n: &i32| *n), [1, 2, 3]);
    ///
    /// assert!(numbers.sort(|a, b| a.cmp(b)).ptr_eq(&numbers));
    /// assert_eq!(numbers.sort(|a, b| b.cmp(a)).entities(), &[3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sort<C>(&self, compare: C) -> Self
    where
        C: FnMut(&Entity, &Entity) -> Ordering,
    {
        let mut entities = self.to_vec();
        entities.sort_by(compare);

        let reordered = entities.iter().zip(self.ids()).any(|(entity, id)| {
            !self
                .identity
                .compare_ids(&self.identity.select_id(entity), id)
        });

        if reordered {
            self.create(entities)
        } else {
            self.clone()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<Entity, Identity> Clone for EntityCollection<Entity, Identity>
where
    Identity: EntityIdentity<Entity>,
{
    fn clone(&self) -> Self {
        Self {
            identity: Arc::clone(&self.identity),
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<Entity, Identity> fmt::Debug for EntityCollection<Entity, Identity>
where
    Entity: fmt::Debug,
    Identity: EntityIdentity<Entity>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<Entity, Identity> PartialEq for EntityCollection<Entity, Identity>
where
    Entity: PartialEq,
    Identity: EntityIdentity<Entity>,
{
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.entities() == other.entities()
    }
}

impl<Entity, Identity> Eq for EntityCollection<Entity, Identity>
where
    Entity: Eq,
    Identity: EntityIdentity<Entity>,
{
}

impl<'a, Entity, Identity> IntoIterator for &'a EntityCollection<Entity, Identity>
where
    Identity: EntityIdentity<Entity>,
{
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<Entity, Identity> serde::Serialize for EntityCollection<Entity, Identity>
where
    Entity: serde::Serialize,
    Identity: EntityIdentity<Entity>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
