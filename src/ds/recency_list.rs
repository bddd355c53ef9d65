//! Arena-backed doubly linked recency list.
//!
//! Stores entries in a slot arena and links them by [`EntryId`], giving
//! stable handles and O(1) promotion without pointer chasing or raw
//! aliasing. Slots freed by removals are recycled through a free list.
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Option<Slot<T>>>)
//!   ┌─────────┬────────────────────────────────────────────┐
//!   │ EntryId │ Slot { value, prev, next }                 │
//!   ├─────────┼────────────────────────────────────────────┤
//!   │ id_0    │ { value: A, prev: None, next: Some(id_1) } │
//!   │ id_1    │ { value: B, prev: Some(id_0), next: id_2 } │
//!   │ id_2    │ { value: C, prev: Some(id_1), next: None } │
//!   └─────────┴────────────────────────────────────────────┘
//!
//!   head ─► [id_0] ◄──► [id_1] ◄──► [id_2] ◄── tail
//!           (MRU)                   (LRU)
//! ```
//!
//! ## Performance
//! - `push_front` / `pop_back` / `remove`: O(1)
//! - `move_to_front`: O(1) (detach + attach, no scan)
//! - `iter`: O(n)
//!
//! `debug_validate()` is available in debug/test builds.

/// Stable handle to a list entry. Valid until the entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

impl EntryId {
    /// Returns the underlying slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Slot<T> {
    value: T,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

/// Doubly linked list whose nodes live in a slot arena.
///
/// The front of the list is the MRU position, the back is the LRU position.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Slot<T>>>,
    free: Vec<usize>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of entries in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value at the front (MRU) of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the value at the back (LRU) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the value for an entry id, if present.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .map(|slot| &slot.value)
    }

    /// Returns a mutable reference to an entry value, if present.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.slots
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .map(|slot| &mut slot.value)
    }

    /// Inserts a new entry at the front and returns its `EntryId`.
    ///
    /// Freed slots are reused before the arena grows.
    pub fn push_front(&mut self, value: T) -> EntryId {
        let slot = Slot {
            value,
            prev: None,
            next: self.head,
        };
        let id = if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(slot);
            EntryId(idx)
        } else {
            self.slots.push(Some(slot));
            EntryId(self.slots.len() - 1)
        };

        if let Some(old_head) = self.head {
            if let Some(node) = self.slot_mut(old_head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Removes and returns the back (LRU) value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the entry `id` from the list and returns its value.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        self.detach(id)?;
        let slot = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(slot.value)
    }

    /// Moves an existing entry to the front; returns `false` if `id` is not
    /// present.
    pub fn move_to_front(&mut self, id: EntryId) -> bool {
        if self.slot(id).is_none() {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Clears the list and frees all entries.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator from front (MRU) to back (LRU).
    pub fn iter(&self) -> RecencyListIter<'_, T> {
        RecencyListIter {
            list: self,
            current: self.head,
        }
    }

    fn slot(&self, id: EntryId) -> Option<&Slot<T>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn slot_mut(&mut self, id: EntryId) -> Option<&mut Slot<T>> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    fn detach(&mut self, id: EntryId) -> Option<()> {
        let (prev, next) = {
            let slot = self.slot(id)?;
            (slot.prev, slot.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_slot) = self.slot_mut(prev_id) {
                    prev_slot.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_slot) = self.slot_mut(next_id) {
                    next_slot.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        if let Some(slot) = self.slot_mut(id) {
            slot.prev = None;
            slot.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: EntryId) {
        let old_head = self.head;
        if let Some(slot) = self.slot_mut(id) {
            slot.prev = None;
            slot.next = old_head;
        } else {
            return;
        }
        if let Some(old_head) = old_head {
            if let Some(head_slot) = self.slot_mut(old_head) {
                head_slot.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id), "cycle detected in recency list");
            let slot = self.slot(id).expect("linked slot missing");
            assert_eq!(slot.prev, prev);
            if slot.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            current = slot.next;
            count += 1;
            assert!(count <= self.len);
        }

        assert_eq!(count, self.len);
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecencyListIter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<EntryId>,
}

impl<'a, T> Iterator for RecencyListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let slot = self.list.slot(id)?;
        self.current = slot.next;
        Some(&slot.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_orders_front_to_back() {
        let mut list = RecencyList::new();
        list.push_front("c");
        list.push_front("b");
        list.push_front("a");

        let order: Vec<_> = list.iter().copied().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        list.debug_validate();
    }

    #[test]
    fn pop_back_drains_in_lru_order() {
        let mut list = RecencyList::new();
        for value in [3, 2, 1] {
            list.push_front(value);
        }

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.debug_validate();
    }

    #[test]
    fn move_to_front_promotes_and_preserves_rest() {
        let mut list = RecencyList::new();
        let _c = list.push_front("c");
        let b = list.push_front("b");
        let _a = list.push_front("a");

        assert!(list.move_to_front(b));
        let order: Vec<_> = list.iter().copied().collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        list.debug_validate();
    }

    #[test]
    fn move_to_front_of_head_is_noop() {
        let mut list = RecencyList::new();
        list.push_front("b");
        let a = list.push_front("a");

        assert!(list.move_to_front(a));
        assert_eq!(list.front(), Some(&"a"));
        list.debug_validate();
    }

    #[test]
    fn move_to_front_of_tail_updates_tail() {
        let mut list = RecencyList::new();
        let b = list.push_front("b");
        list.push_front("a");

        assert!(list.move_to_front(b));
        assert_eq!(list.front(), Some(&"b"));
        assert_eq!(list.back(), Some(&"a"));
        list.debug_validate();
    }

    #[test]
    fn remove_middle_relinks_neighbors() {
        let mut list = RecencyList::new();
        let c = list.push_front("c");
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.remove(b), None);

        let order: Vec<_> = list.iter().copied().collect();
        assert_eq!(order, vec!["a", "c"]);
        assert!(list.get(a).is_some());
        assert!(list.get(c).is_some());
        list.debug_validate();
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut list = RecencyList::new();
        let id1 = list.push_front("a");
        list.push_front("b");

        assert_eq!(list.remove(id1), Some("a"));
        let id3 = list.push_front("c");
        assert_eq!(id1.index(), id3.index());
        assert_eq!(list.len(), 2);
        list.debug_validate();
    }

    #[test]
    fn stale_id_is_rejected() {
        let mut list = RecencyList::new();
        let id = list.push_front(1);
        list.remove(id);

        assert!(!list.move_to_front(id));
        assert_eq!(list.get(id), None);
        assert_eq!(list.remove(id), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list = RecencyList::new();
        let id = list.push_front(10);

        *list.get_mut(id).unwrap() = 20;
        assert_eq!(list.get(id), Some(&20));
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = RecencyList::with_capacity(4);
        list.push_front(1);
        list.push_front(2);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.debug_validate();
    }
}
