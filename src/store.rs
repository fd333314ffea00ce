use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::models::{Card, CardId, NewCard};

/// Trait for storing and retrieving cards.
pub trait CardStore: Send + Sync {
    /// All current cards in insertion order.
    fn list(&self) -> Result<Vec<Card>, StoreError>;

    /// Insert a card with the next id.
    /// Fails with `Duplicate` if the same suit and value is already present.
    fn create(&self, card: NewCard) -> Result<Card, StoreError>;

    /// Get a card by id.
    fn get(&self, id: CardId) -> Result<Card, StoreError>;

    /// Remove a card by id, returning it.
    fn delete(&self, id: CardId) -> Result<Card, StoreError>;
}

struct Inner {
    cards: Vec<Card>,
    next_id: u64,
}

/// Process-local card store.
///
/// Collection and counter share one lock, so the duplicate check and append
/// in `create`, and the lookup and removal in `delete`, are each atomic.
/// Lookups are linear scans.
pub struct InMemoryCardStore {
    inner: RwLock<Inner>,
}

impl Default for InMemoryCardStore {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                cards: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl InMemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl CardStore for InMemoryCardStore {
    fn list(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.read()?.cards.clone())
    }

    fn create(&self, card: NewCard) -> Result<Card, StoreError> {
        let mut inner = self.write()?;

        if inner
            .cards
            .iter()
            .any(|c| c.suit == card.suit && c.value == card.value)
        {
            return Err(StoreError::Duplicate {
                suit: card.suit,
                value: card.value,
            });
        }

        let created = Card {
            id: CardId(inner.next_id),
            suit: card.suit,
            value: card.value,
        };
        inner.next_id += 1;
        inner.cards.push(created.clone());
        Ok(created)
    }

    fn get(&self, id: CardId) -> Result<Card, StoreError> {
        self.read()?
            .cards
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn delete(&self, id: CardId) -> Result<Card, StoreError> {
        let mut inner = self.write()?;
        let index = inner
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(inner.cards.remove(index))
    }
}
