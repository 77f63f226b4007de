use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    sync::Arc,
};

use parking_lot::Mutex;
use tracing::{debug, error, trace};

use crate::{
    config::RingConfig,
    error::RingError,
    hasher::{Crc32Hasher, SlotHasher},
    types::{RingResult, Slot},
};

struct RingState {
    slot_to_node: HashMap<Slot, Arc<str>>,
    /// Always the ascending keys of `slot_to_node` once the lock is released.
    sorted_slots: Vec<Slot>,
}

impl RingState {
    fn new() -> Self {
        Self {
            slot_to_node: HashMap::new(),
            sorted_slots: Vec::new(),
        }
    }

    fn rebuild_sorted_slots(&mut self) {
        let mut slots: Vec<Slot> = self.slot_to_node.keys().copied().collect();
        slots.sort_unstable();
        self.sorted_slots = slots;
    }

    fn successor(&self, slot: Slot) -> Option<Slot> {
        if self.sorted_slots.is_empty() {
            return None;
        }

        let index = self.sorted_slots.partition_point(|s| *s < slot);
        if index >= self.sorted_slots.len() {
            // past the largest slot, wrap to the start of the circle
            return Some(self.sorted_slots[0]);
        }

        Some(self.sorted_slots[index])
    }
}

/// Consistent hash ring mapping keys to node addresses.
///
/// Every real node is placed `replicas` times, at `hash(addr + index)`. A key
/// belongs to the node owning the first slot at or after `hash(key)`, wrapping
/// around past the largest slot. All operations take the same lock, so the
/// slot table and its sorted view are never observed out of sync.
pub struct Ring {
    hasher: Arc<dyn SlotHasher>,
    replicas: usize,
    state: Mutex<RingState>,
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("replicas", &self.replicas)
            .field("slots", &self.slot_count())
            .finish()
    }
}

impl Ring {
    /// Empty ring using the CRC-32 hasher.
    pub fn new(replicas: usize) -> Self {
        Self::with_hasher(replicas, Crc32Hasher::new())
    }

    pub fn with_hasher<H>(replicas: usize, hasher: H) -> Self
    where
        H: SlotHasher + 'static,
    {
        Self {
            hasher: Arc::new(hasher),
            replicas,
            state: Mutex::new(RingState::new()),
        }
    }

    pub fn from_config(config: &RingConfig) -> Self {
        Self::new(config.replicas)
    }

    pub fn new_shared(replicas: usize) -> Arc<Self> {
        Arc::new(Self::new(replicas))
    }

    #[inline]
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    #[inline]
    fn hash_str(&self, key: &str) -> Slot {
        self.hasher.hash(key.as_bytes())
    }

    fn vnode_slots<'a>(&'a self, addr: &'a str) -> impl Iterator<Item = Slot> + 'a {
        (0..self.replicas).map(move |i| self.hash_str(&format!("{addr}{i}")))
    }

    pub fn add_node(&self, addr: &str) {
        self.add_nodes(&[addr]);
    }

    /// Places every virtual node of each address. A slot already owned by
    /// another address is taken over by the one processed last.
    pub fn add_nodes<S: AsRef<str>>(&self, addrs: &[S]) {
        let placements: Vec<(Slot, Arc<str>)> = addrs
            .iter()
            .flat_map(|addr| {
                let node: Arc<str> = Arc::from(addr.as_ref());
                self.vnode_slots(addr.as_ref())
                    .map(move |slot| (slot, node.clone()))
            })
            .collect();

        let mut state = self.state.lock();
        for (slot, node) in placements {
            state.slot_to_node.insert(slot, node);
        }
        state.rebuild_sorted_slots();

        debug!(
            "Added {} node(s), ring has {} slot(s)",
            addrs.len(),
            state.sorted_slots.len()
        );
    }

    pub fn remove_node(&self, addr: &str) {
        self.remove_nodes(&[addr]);
    }

    /// Drops every virtual node slot of each address. Unknown addresses are a
    /// no-op.
    pub fn remove_nodes<S: AsRef<str>>(&self, addrs: &[S]) {
        let slots: Vec<Slot> = addrs
            .iter()
            .flat_map(|addr| self.vnode_slots(addr.as_ref()))
            .collect();

        let mut state = self.state.lock();
        for slot in slots {
            state.slot_to_node.remove(&slot);
        }
        state.rebuild_sorted_slots();

        debug!(
            "Removed {} node(s), ring has {} slot(s)",
            addrs.len(),
            state.sorted_slots.len()
        );
    }

    /// Returns the address owning `key` under the current topology.
    pub fn locate(&self, key: &str) -> RingResult<String> {
        let slot = self.hash_str(key);
        let state = self.state.lock();

        let owner_slot = state.successor(slot).ok_or(RingError::EmptyRing)?;
        trace!("Key {key} hashed to {slot}, owner slot {owner_slot}");

        match state.slot_to_node.get(&owner_slot) {
            Some(node) => Ok(node.to_string()),
            None => {
                error!("Slot {owner_slot} is sorted but has no owner node");
                Err(RingError::SlotNotFound { slot: owner_slot })
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().sorted_slots.is_empty()
    }

    /// Distinct slots on the ring. Collisions make this smaller than
    /// `nodes * replicas`.
    pub fn slot_count(&self) -> usize {
        self.state.lock().sorted_slots.len()
    }

    /// Addresses owning at least one slot, sorted.
    pub fn nodes(&self) -> Vec<String> {
        let state = self.state.lock();
        state
            .slot_to_node
            .values()
            .map(|node| node.as_ref())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn contains_node(&self, addr: &str) -> bool {
        let state = self.state.lock();
        state.slot_to_node.values().any(|node| node.as_ref() == addr)
    }
}

#[cfg(test)]
impl Ring {
    /// Breaks the slot table / sorted view pairing to exercise the invariant
    /// check in `locate`.
    pub(crate) fn corrupt_drop_owner(&self, slot: Slot) {
        self.state.lock().slot_to_node.remove(&slot);
    }

    pub(crate) fn sorted_slots(&self) -> Vec<Slot> {
        self.state.lock().sorted_slots.clone()
    }
}
