//! ChainedHashMap: fixed bucket array with arena-backed chains.

use slotmap::{DefaultKey, SlotMap};

/// Maps `key` to a bucket index in `[0, capacity)`.
///
/// Polynomial rolling hash over the key's bytes, `h = h * 31 + byte`,
/// accumulated in wrapping 32-bit unsigned arithmetic and reduced modulo
/// `capacity`. Deterministic for a given key and capacity; not
/// cryptographically secure. Collisions are expected and land in the same
/// bucket's chain.
///
/// `capacity` must be nonzero (a zero capacity has no valid bucket index).
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "capacity must be nonzero");
    let mut h: u32 = 0;
    for &byte in key.as_bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    h as usize % capacity
}

#[derive(Debug)]
struct Entry<V> {
    key: Box<str>,
    value: V,
    next: Option<DefaultKey>, // next entry in this bucket's chain
}

/// Construction failure for [`ChainedHashMap`].
#[derive(Debug)]
pub enum CreateError {
    /// Requested capacity was zero; no table is produced.
    ZeroCapacity,
    /// The bucket array could not be allocated.
    OutOfMemory,
}

/// A string-keyed map with a fixed number of buckets and separate chaining.
///
/// Capacity is set at construction and never changes; there is no rehashing
/// or load-factor management, so operations degrade toward O(chain length)
/// as buckets fill. Insert always prepends, so a key inserted twice shadows
/// its older entry: `find` and `delete` observe the most recent one first,
/// and deleting it uncovers the older entry again.
#[derive(Debug)]
pub struct ChainedHashMap<V> {
    heads: Box<[Option<DefaultKey>]>,
    slots: SlotMap<DefaultKey, Entry<V>>, // entry storage using generational keys
    len: usize,
}

impl<V> ChainedHashMap<V> {
    /// Creates an empty table with `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Result<Self, CreateError> {
        if capacity == 0 {
            return Err(CreateError::ZeroCapacity);
        }
        let mut heads = Vec::new();
        heads
            .try_reserve_exact(capacity)
            .map_err(|_| CreateError::OutOfMemory)?;
        heads.resize(capacity, None);
        Ok(Self {
            heads: heads.into_boxed_slice(),
            slots: SlotMap::with_key(),
            len: 0,
        })
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.heads.len()
    }

    /// Number of live entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket(&self, key: &str) -> usize {
        bucket_index(key, self.heads.len())
    }

    /// Inserts an entry owning a copy of `key`, prepending it to its
    /// bucket's chain. No uniqueness check: inserting an existing key adds
    /// a shadowing duplicate rather than replacing.
    pub fn insert(&mut self, key: &str, value: V) {
        let b = self.bucket(key);
        let slot = self.slots.insert(Entry {
            key: key.into(),
            value,
            next: self.heads[b],
        });
        self.heads[b] = Some(slot);
        self.len += 1;
    }

    /// Returns the value of the most recently inserted entry for `key`,
    /// or `None` if the key is absent.
    pub fn find(&self, key: &str) -> Option<&V> {
        let mut cur = self.heads[self.bucket(key)];
        while let Some(slot) = cur {
            let entry = &self.slots[slot];
            if &*entry.key == key {
                return Some(&entry.value);
            }
            cur = entry.next;
        }
        None
    }

    /// Like [`find`](Self::find), but borrows the value mutably.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        let b = self.bucket(key);
        let mut cur = self.heads[b];
        while let Some(slot) = cur {
            if &*self.slots[slot].key == key {
                return Some(&mut self.slots[slot].value);
            }
            cur = self.slots[slot].next;
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes the first matching entry in `key`'s chain and returns its
    /// value, or `None` (with no mutation) if the key is absent. When
    /// duplicates exist only the most recent one is removed; the next older
    /// duplicate becomes reachable again.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let b = self.bucket(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.heads[b];
        while let Some(slot) = cur {
            let next = self.slots[slot].next;
            if &*self.slots[slot].key == key {
                // Unlink before the entry is dropped; its `next` survives in
                // the removed entry until relinking is done.
                let entry = self.slots.remove(slot)?;
                match prev {
                    None => self.heads[b] = entry.next,
                    Some(p) => self.slots[p].next = entry.next,
                }
                self.len -= 1;
                return Some(entry.value);
            }
            prev = cur;
            cur = next;
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn chain_slots(&self, bucket: usize) -> Vec<DefaultKey> {
        let mut out = Vec::new();
        let mut cur = self.heads[bucket];
        while let Some(slot) = cur {
            out.push(slot);
            cur = self.slots[slot].next;
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn slot_key(&self, slot: DefaultKey) -> &str {
        &self.slots[slot].key
    }

    #[cfg(test)]
    pub(crate) fn stored_entries(&self) -> usize {
        self.slots.len()
    }
}
