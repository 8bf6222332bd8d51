use alloc::string::String;
#[cfg(any(test, feature = "stats"))]
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::iter::FusedIterator;

use crate::DefaultHashBuilder;
use crate::arena::Arena;
use crate::error::MapError;

/// Slot count requested by [`HashMap::new_in`].
pub const DEFAULT_CAPACITY: usize = 16;

/// One occupied entry of the slot array.
///
/// `probe_distance` is how many slots the entry sits past its ideal index.
#[derive(Clone, Copy)]
struct Slot<'a, V> {
    key: &'a [u8],
    value: V,
    probe_distance: u32,
}

enum Storage<'a, V> {
    Uninitialized,
    Ready {
        arena: &'a Arena,
        slots: &'a mut [Option<Slot<'a, V>>],
    },
}

/// Renders a byte-string key with non-printable bytes escaped.
struct EscapedKey<'k>(&'k [u8]);

impl fmt::Display for EscapedKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

impl Debug for EscapedKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

/// A fixed-capacity hash map using Robin Hood open addressing.
///
/// Keys are byte strings copied into an [`Arena`] on insertion, so the
/// caller's buffer only has to live for the duration of the call. Values are
/// stored by copy. The slot array is allocated from the same arena at
/// [`init`], its size is the requested capacity rounded up to a power of two,
/// and it never grows.
///
/// Collisions are resolved by linear probing. On insertion, an entry that has
/// probed further than the resident it meets takes that slot and the resident
/// continues probing instead. Removal shifts the following cluster back by one
/// slot, so no tombstones are needed.
///
/// The map borrows its arena for `'a`; arena memory is released only when the
/// arena itself is dropped or reset. Removing a key recycles its slot but not
/// the bytes of its key copy.
///
/// [`init`]: HashMap::init
///
/// ## Example
///
/// ```rust
/// # use robin_map::Arena;
/// # use robin_map::HashMap;
/// #
/// let arena = Arena::new();
/// let mut textures = HashMap::with_capacity_in(3, &arena);
/// assert_eq!(textures.capacity(), 4);
///
/// assert!(textures.add(b"answer", 42u32, false));
/// assert_eq!(textures.len(), 1);
/// assert_eq!(textures.find(b"answer"), Some(42));
///
/// assert!(textures.remove(b"answer"));
/// assert_eq!(textures.len(), 0);
/// assert_eq!(textures.find(b"answer"), None);
/// ```
pub struct HashMap<'a, V, S = DefaultHashBuilder> {
    storage: Storage<'a, V>,
    populated: usize,
    hash_builder: S,
}

impl<V, S> Debug for HashMap<'_, V, S>
where
    V: Copy + Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (EscapedKey(key), value)))
            .finish()
    }
}

impl<V, S> Default for HashMap<'_, V, S>
where
    V: Copy,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

#[cfg(any(feature = "foldhash", feature = "std"))]
impl<'a, V> HashMap<'a, V, DefaultHashBuilder>
where
    V: Copy,
{
    /// Creates an uninitialized map using the default hasher.
    ///
    /// Every operation fails until [`init`](HashMap::init) is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// # use robin_map::HashMap;
    /// #
    /// let arena = Arena::new();
    /// let mut map = HashMap::new();
    /// assert!(!map.is_initialized());
    /// assert!(!map.add(b"early", 1u8, false));
    ///
    /// map.init(&arena, 16);
    /// assert!(map.add(b"early", 1u8, false));
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a ready map with [`DEFAULT_CAPACITY`] slots.
    pub fn new_in(arena: &'a Arena) -> Self {
        Self::with_capacity_in(DEFAULT_CAPACITY, arena)
    }

    /// Creates a ready map with at least `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than two.
    pub fn with_capacity_in(capacity: usize, arena: &'a Arena) -> Self {
        Self::with_capacity_and_hasher_in(capacity, DefaultHashBuilder::default(), arena)
    }
}

impl<'a, V, S> HashMap<'a, V, S>
where
    V: Copy,
    S: BuildHasher,
{
    /// Creates an uninitialized map with the given hasher builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            storage: Storage::Uninitialized,
            populated: 0,
            hash_builder,
        }
    }

    /// Creates a ready map with at least `capacity` slots and the given hasher
    /// builder.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than two.
    pub fn with_capacity_and_hasher_in(capacity: usize, hash_builder: S, arena: &'a Arena) -> Self {
        let mut map = Self::with_hasher(hash_builder);
        map.init(arena, capacity);
        map
    }

    /// Allocates the slot array from `arena`.
    ///
    /// The slot count is `requested_capacity` rounded up to the next power of
    /// two and is fixed from here on.
    ///
    /// # Panics
    ///
    /// Panics if `requested_capacity` is less than two or if the map has
    /// already been initialized.
    pub fn init(&mut self, arena: &'a Arena, requested_capacity: usize) {
        assert!(
            requested_capacity >= 2,
            "requested capacity must be at least 2, got {requested_capacity}"
        );
        assert!(
            matches!(self.storage, Storage::Uninitialized),
            "map is already initialized"
        );

        let capacity = requested_capacity
            .checked_next_power_of_two()
            .expect("capacity overflow");
        let slots = arena.alloc_slice_fill_copy::<Option<Slot<'a, V>>>(capacity, None);
        log::debug!("initialized map: requested {requested_capacity} slots, allocated {capacity}");

        self.storage = Storage::Ready { arena, slots };
        self.populated = 0;
    }

    /// Returns `true` once [`init`](HashMap::init) has run.
    pub fn is_initialized(&self) -> bool {
        matches!(self.storage, Storage::Ready { .. })
    }

    /// Returns the number of slots, or zero before initialization.
    pub fn capacity(&self) -> usize {
        self.slots().map_or(0, <[_]>::len)
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns `true` if every slot is occupied.
    ///
    /// An uninitialized map has no slots and is therefore full.
    pub fn full(&self) -> bool {
        self.populated == self.capacity()
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Inserts `value` under `key`, reporting why an insertion was refused.
    ///
    /// A full map refuses every insertion, including overwrites of keys it
    /// already holds. Otherwise, if the key is already present, its value is
    /// replaced when `overwrite` is set and [`MapError::DuplicateKey`] is
    /// returned otherwise. Replacing a value keeps the existing key copy, so it
    /// allocates nothing. A new key is copied into the arena exactly once.
    ///
    /// # Errors
    ///
    /// - [`MapError::Uninitialized`] before [`init`](HashMap::init).
    /// - [`MapError::DuplicateKey`] if the key exists and `overwrite` is not
    ///   set.
    /// - [`MapError::Full`] if every slot is occupied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// # use robin_map::HashMap;
    /// # use robin_map::MapError;
    /// #
    /// let arena = Arena::new();
    /// let mut map = HashMap::with_capacity_in(2, &arena);
    ///
    /// assert_eq!(map.try_add(b"x", 1u32, false), Ok(()));
    /// assert_eq!(map.try_add(b"x", 2, false), Err(MapError::DuplicateKey));
    /// assert_eq!(map.try_add(b"x", 3, true), Ok(()));
    /// assert_eq!(map.try_add(b"y", 4, false), Ok(()));
    /// assert_eq!(map.try_add(b"z", 5, false), Err(MapError::Full { capacity: 2 }));
    /// assert_eq!(map.try_add(b"x", 6, true), Err(MapError::Full { capacity: 2 }));
    /// assert_eq!(map.find(b"x"), Some(3));
    /// ```
    pub fn try_add(&mut self, key: &[u8], value: V, overwrite: bool) -> Result<(), MapError> {
        let capacity = self.capacity();
        if capacity == 0 {
            log::error!("add of key \"{}\" on an uninitialized map", EscapedKey(key));
            return Err(MapError::Uninitialized);
        }

        if self.populated == capacity {
            log::warn!(
                "map is full ({capacity} slots), rejecting key \"{}\"",
                EscapedKey(key)
            );
            return Err(MapError::Full { capacity });
        }

        if let Some(index) = self.find_index(key) {
            if !overwrite {
                log::warn!("key \"{}\" already present", EscapedKey(key));
                return Err(MapError::DuplicateKey);
            }
            if let Some(slot) = self.slots_mut().and_then(|slots| slots[index].as_mut()) {
                slot.value = value;
            }
            return Ok(());
        }

        let mask = capacity - 1;
        let mut addr = self.ideal_index(key, mask);
        let Storage::Ready { arena, slots } = &mut self.storage else {
            return Err(MapError::Uninitialized);
        };
        let arena: &'a Arena = *arena;
        let mut candidate = Slot {
            key: arena.alloc_bytes(key),
            value,
            probe_distance: 0,
        };

        for _ in 0..capacity {
            match slots[addr].as_mut() {
                None => {
                    slots[addr] = Some(candidate);
                    self.populated += 1;
                    return Ok(());
                }
                Some(resident) => {
                    if resident.probe_distance < candidate.probe_distance {
                        log::trace!(
                            "slot {addr}: \"{}\" (distance {}) displaces \"{}\" (distance {})",
                            EscapedKey(candidate.key),
                            candidate.probe_distance,
                            EscapedKey(resident.key),
                            resident.probe_distance
                        );
                        core::mem::swap(resident, &mut candidate);
                    }
                }
            }
            candidate.probe_distance += 1;
            addr = (addr + 1) & mask;
        }

        debug_assert_eq!(
            self.populated,
            capacity,
            "probed all {capacity} slots with only {} occupied",
            self.populated
        );
        log::error!(
            "no empty slot for key \"{}\" although {} of {capacity} slots are occupied",
            EscapedKey(key),
            self.populated
        );
        Err(MapError::Full { capacity })
    }

    /// Inserts `value` under `key`, returning whether the map accepted it.
    ///
    /// See [`try_add`](HashMap::try_add) for the rules; every refusal is
    /// logged.
    pub fn add(&mut self, key: &[u8], value: V, overwrite: bool) -> bool {
        self.try_add(key, value, overwrite).is_ok()
    }

    /// Returns a copy of the value stored under `key`.
    ///
    /// A miss is logged as a warning; use
    /// [`contains_key`](HashMap::contains_key) to probe silently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// # use robin_map::HashMap;
    /// #
    /// let arena = Arena::new();
    /// let mut map = HashMap::new_in(&arena);
    /// map.add(b"roughness", 0.5f32, false);
    ///
    /// assert_eq!(map.find(b"roughness"), Some(0.5));
    /// assert_eq!(map.find(b"metallic"), None);
    /// ```
    pub fn find(&self, key: &[u8]) -> Option<V> {
        self.find_ref(key).copied()
    }

    /// Returns a reference to the value stored under `key`.
    pub fn find_ref(&self, key: &[u8]) -> Option<&V> {
        let index = self.lookup(key).ok()?;
        self.occupied(index).map(|slot| &slot.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// The reference points into the slot array, so it cannot be held across
    /// a later [`add`](HashMap::add) or [`remove`](HashMap::remove).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// # use robin_map::HashMap;
    /// #
    /// let arena = Arena::new();
    /// let mut refcounts = HashMap::new_in(&arena);
    /// refcounts.add(b"brick.png", 1u32, false);
    ///
    /// if let Some(count) = refcounts.find_mut(b"brick.png") {
    ///     *count += 1;
    /// }
    /// assert_eq!(refcounts.find(b"brick.png"), Some(2));
    /// ```
    pub fn find_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let index = self.lookup(key).ok()?;
        self.slots_mut()?[index].as_mut().map(|slot| &mut slot.value)
    }

    /// Returns `true` if `key` is present. Misses are not logged.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key` and returns its value.
    ///
    /// The entries following the removed one in its cluster are shifted back
    /// one slot each, stopping at the first empty slot or the first entry that
    /// already sits at its ideal index.
    ///
    /// # Errors
    ///
    /// - [`MapError::Uninitialized`] before [`init`](HashMap::init).
    /// - [`MapError::KeyNotFound`] if the key is absent.
    pub fn try_remove(&mut self, key: &[u8]) -> Result<V, MapError> {
        let index = self.lookup(key)?;
        let slots = self.slots_mut().ok_or(MapError::Uninitialized)?;
        let mask = slots.len() - 1;
        let removed = slots[index]
            .take()
            .map(|slot| slot.value)
            .ok_or(MapError::KeyNotFound)?;

        // At most `capacity - 1` shifts, so a cluster that wraps the whole
        // table never lands back on `index`.
        let mut current = index;
        for _ in 1..slots.len() {
            let next = (current + 1) & mask;
            match slots[next] {
                Some(mut entry) if entry.probe_distance > 0 => {
                    log::trace!(
                        "shifting \"{}\" from slot {next} to {current}",
                        EscapedKey(entry.key)
                    );
                    entry.probe_distance -= 1;
                    slots[current] = Some(entry);
                    current = next;
                }
                _ => break,
            }
        }
        slots[current] = None;

        self.populated -= 1;
        Ok(removed)
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// # use robin_map::HashMap;
    /// #
    /// let arena = Arena::new();
    /// let mut map = HashMap::new_in(&arena);
    /// map.add(b"a", 1u8, false);
    /// map.add(b"b", 2u8, false);
    ///
    /// assert!(map.remove(b"a"));
    /// assert!(!map.remove(b"a"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.find(b"b"), Some(2));
    /// ```
    pub fn remove(&mut self, key: &[u8]) -> bool {
        self.try_remove(key).is_ok()
    }

    /// Returns the index of the first occupied slot at or after `start`, or
    /// [`capacity`](HashMap::capacity) if there is none. Does not wrap.
    ///
    /// Together with [`get_index`](HashMap::get_index) this enumerates the
    /// map in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// # use robin_map::HashMap;
    /// #
    /// let arena = Arena::new();
    /// let mut map = HashMap::new_in(&arena);
    /// map.add(b"one", 1u8, false);
    /// map.add(b"two", 2u8, false);
    ///
    /// let mut total = 0;
    /// let mut index = map.next_occupied_index(0);
    /// while let Some((_, value)) = map.get_index(index) {
    ///     total += value;
    ///     index = map.next_occupied_index(index + 1);
    /// }
    /// assert_eq!(index, map.capacity());
    /// assert_eq!(total, 3);
    /// ```
    pub fn next_occupied_index(&self, start: usize) -> usize {
        let Some(slots) = self.slots() else {
            return 0;
        };
        slots
            .get(start..)
            .and_then(|tail| tail.iter().position(Option::is_some))
            .map_or(slots.len(), |offset| start + offset)
    }

    /// Returns the key and value in slot `index`, if that slot is occupied.
    pub fn get_index(&self, index: usize) -> Option<(&'a [u8], &V)> {
        self.occupied(index).map(|slot| (slot.key, &slot.value))
    }

    /// Returns an iterator over `(key, value)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_, 'a, V, S> {
        Iter {
            map: self,
            index: 0,
            remaining: self.populated,
        }
    }

    /// Writes one line per occupied slot: slot index, probe distance, and the
    /// key with non-printable bytes escaped.
    pub fn write_dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, " slot | dist | key")?;
        let mut index = self.next_occupied_index(0);
        while let Some(slot) = self.occupied(index) {
            writeln!(
                out,
                "{index:>5} | {:>4} | {}",
                slot.probe_distance,
                EscapedKey(slot.key)
            )?;
            index = self.next_occupied_index(index + 1);
        }
        Ok(())
    }

    /// Returns the [`write_dump`](HashMap::write_dump) listing as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::Arena;
    /// # use robin_map::HashMap;
    /// #
    /// let arena = Arena::new();
    /// let mut map = HashMap::new_in(&arena);
    /// map.add(b"grass\n", 1u8, false);
    ///
    /// let dump = map.dump();
    /// assert_eq!(dump.lines().count(), 2);
    /// assert!(dump.contains("grass\\n"));
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_dump(&mut out);
        out
    }

    /// Computes how many entries sit at each probe distance.
    ///
    /// Bin `d` of the result counts entries `d` slots past their ideal index.
    /// An empty map yields an empty vector.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();
        for slot in self.occupied_slots() {
            let distance = slot.probe_distance as usize;
            if hist.len() <= distance {
                hist.resize(distance + 1, 0);
            }
            hist[distance] += 1;
        }
        hist
    }

    /// Returns occupancy and probe-distance statistics.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let capacity = self.capacity();
        let mut max_probe_distance = 0;
        let mut total_distance = 0u64;
        for slot in self.occupied_slots() {
            max_probe_distance = max_probe_distance.max(slot.probe_distance);
            total_distance += u64::from(slot.probe_distance);
        }

        DebugStats {
            populated: self.populated,
            capacity,
            max_probe_distance,
            mean_probe_distance: if self.populated == 0 {
                0.0
            } else {
                total_distance as f64 / self.populated as f64
            },
            load_factor: if capacity == 0 {
                0.0
            } else {
                self.populated as f64 / capacity as f64
            },
            slot_bytes: capacity * core::mem::size_of::<Option<Slot<'a, V>>>(),
            arena_bytes: match &self.storage {
                Storage::Ready { arena, .. } => arena.allocated_bytes(),
                Storage::Uninitialized => 0,
            },
        }
    }

    fn slots(&self) -> Option<&[Option<Slot<'a, V>>]> {
        match &self.storage {
            Storage::Ready { slots, .. } => Some(&slots[..]),
            Storage::Uninitialized => None,
        }
    }

    fn slots_mut(&mut self) -> Option<&mut [Option<Slot<'a, V>>]> {
        match &mut self.storage {
            Storage::Ready { slots, .. } => Some(&mut slots[..]),
            Storage::Uninitialized => None,
        }
    }

    fn occupied(&self, index: usize) -> Option<&Slot<'a, V>> {
        self.slots()?.get(index)?.as_ref()
    }

    #[cfg(any(test, feature = "stats"))]
    fn occupied_slots(&self) -> impl Iterator<Item = &Slot<'a, V>> {
        self.slots().into_iter().flatten().flatten()
    }

    /// `mask` must be `capacity - 1`.
    #[inline(always)]
    fn ideal_index(&self, key: &[u8], mask: usize) -> usize {
        (self.hash_builder.hash_one(key) as usize) & mask
    }

    /// Linear probe from the ideal index until the key, an empty slot, or a
    /// full lap of the table.
    fn find_index(&self, key: &[u8]) -> Option<usize> {
        let slots = self.slots()?;
        let mask = slots.len() - 1;
        let mut addr = self.ideal_index(key, mask);
        for _ in 0..slots.len() {
            match &slots[addr] {
                None => return None,
                Some(slot) if slot.key == key => return Some(addr),
                Some(_) => {}
            }
            addr = (addr + 1) & mask;
        }
        None
    }

    /// [`find_index`](Self::find_index) with failures logged.
    fn lookup(&self, key: &[u8]) -> Result<usize, MapError> {
        if !self.is_initialized() {
            log::error!("lookup of key \"{}\" on an uninitialized map", EscapedKey(key));
            return Err(MapError::Uninitialized);
        }
        self.find_index(key).ok_or_else(|| {
            log::warn!("key \"{}\" not found", EscapedKey(key));
            MapError::KeyNotFound
        })
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let Some(slots) = self.slots() else {
            assert_eq!(self.populated, 0);
            return;
        };
        assert!(slots.len() >= 2 && slots.len().is_power_of_two());

        let mask = slots.len() - 1;
        let mut occupied = 0;
        for (index, slot) in slots.iter().enumerate() {
            let Some(slot) = slot else {
                continue;
            };
            occupied += 1;
            let ideal = self.ideal_index(slot.key, mask);
            assert_eq!(
                (ideal + slot.probe_distance as usize) & mask,
                index,
                "\"{}\" has a stale probe distance\n{}",
                EscapedKey(slot.key),
                self.dump()
            );
            assert!(
                slots[index + 1..]
                    .iter()
                    .flatten()
                    .all(|other| other.key != slot.key),
                "duplicate key \"{}\"",
                EscapedKey(slot.key)
            );
        }
        assert_eq!(occupied, self.populated);
    }
}

impl<'m, 'a, V, S> IntoIterator for &'m HashMap<'a, V, S>
where
    V: Copy,
    S: BuildHasher,
{
    type Item = (&'a [u8], &'m V);
    type IntoIter = Iter<'m, 'a, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`HashMap`] in slot order.
///
/// Created by [`HashMap::iter`].
pub struct Iter<'m, 'a, V, S> {
    map: &'m HashMap<'a, V, S>,
    index: usize,
    remaining: usize,
}

impl<'m, 'a, V, S> Iterator for Iter<'m, 'a, V, S>
where
    V: Copy,
    S: BuildHasher,
{
    type Item = (&'a [u8], &'m V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.map.next_occupied_index(self.index);
        let entry = self.map.get_index(index)?;
        self.index = index + 1;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Copy, S: BuildHasher> ExactSizeIterator for Iter<'_, '_, V, S> {}

impl<V: Copy, S: BuildHasher> FusedIterator for Iter<'_, '_, V, S> {}

/// Occupancy and probe statistics for a [`HashMap`].
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries in the map
    pub populated: usize,
    /// Number of slots
    pub capacity: usize,
    /// Largest probe distance of any entry
    pub max_probe_distance: u32,
    /// Mean probe distance over all entries
    pub mean_probe_distance: f64,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Bytes taken by the slot array
    pub slot_bytes: usize,
    /// Bytes handed out by the backing arena, including key copies and the
    /// slot arrays of any other map sharing it
    pub arena_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Robin Hood Map Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Probe distance: max {}, mean {:.3}",
            self.max_probe_distance, self.mean_probe_distance
        );
        println!("Slot array: {} bytes", self.slot_bytes);
        println!("Arena: {} bytes allocated", self.arena_bytes);
    }
}
