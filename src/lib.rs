//! chained-hashmap: a fixed-capacity, string-keyed map that resolves
//! collisions with per-bucket chains.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: the smallest useful chained hash table: a bucket array whose
//!   size is fixed at construction, a deterministic polynomial hash, and
//!   singly-linked chains of owned entries.
//! - Layout:
//!   - `bucket_index(key, capacity)`: the hash function, public so callers
//!     and tests can reason about placement directly.
//!   - `ChainedHashMap<V>`: the table. Buckets hold the head slot of their
//!     chain; entries live in a `slotmap` arena and link to each other by
//!     generational key, never by pointer.
//!
//! Constraints
//! - Fixed capacity: no rehashing, no load-factor management. As chains
//!   grow, find/insert/delete degrade toward O(chain length); this is an
//!   accepted property, not a defect.
//! - Single-threaded: mutation requires `&mut self`; there is no internal
//!   locking and none is needed.
//! - Multi-map shadowing: insert always prepends and never checks
//!   uniqueness. Inserting a key twice shadows the older entry; find and
//!   delete observe the most recent one, and deleting it uncovers the
//!   older one again.
//! - Ownership: the table exclusively owns its entries and their key
//!   copies. `delete` transfers the removed value to the caller; dropping
//!   the table releases everything else exactly once. There is no
//!   `destroy` method; moves and `Drop` make use-after-destroy
//!   unrepresentable.
//!
//! Notes and non-goals
//! - No iteration or enumeration of entries.
//! - No concurrent access; wrap the table in a lock if you need it shared.
//! - Keys are text only; values are any `V`, fixed per table instance.

mod chained_hash_map;
mod chained_hash_map_proptest;

// Public surface
pub use chained_hash_map::{bucket_index, ChainedHashMap, CreateError};
