//! The fingerprint table: an open-addressed, 2-way set-associative map from a 4-byte input
//! prefix to the most recent source position(s) that prefix was seen at.
//!
//! Grounded on `hashtable.rs`'s `HashTable` trait and `get_table_size`, generalized from the
//! teacher's flat `Vec<u32>`/`Vec<u16>` position-only dictionary to LZAV's 16-byte, two-tuple
//! slot layout, and from a single allocation strategy to the three-tier stack/external/heap
//! scratch precedence in the surrounding spec.

use alloc::vec::Vec;

use crate::block::MREF;

/// Largest on-stack table size, matching the spec's "up to 16 KiB" stack-scratch tier.
const STACK_CAP: usize = 16 * 1024;

const SLOT_BYTES: usize = 16;
const MIN_SLOTS: usize = 256;
const MAX_SLOTS: usize = 1 << 16;

/// Computes the table byte size for a given source length: the smallest power-of-two slot
/// count with `slots * 16 >= srcl * 4`, clamped to `[256, 65536]` slots (`[4096, 1048576]`
/// bytes).
pub(crate) fn table_byte_size(srcl: usize) -> usize {
    let required_bytes = srcl.saturating_mul(4);
    let required_slots = (required_bytes + SLOT_BYTES - 1) / SLOT_BYTES;
    let slots = required_slots.max(1).next_power_of_two().clamp(MIN_SLOTS, MAX_SLOTS);
    slots * SLOT_BYTES
}

/// Checks whether an externally supplied scratch buffer can serve as the table storage: it
/// must be a power-of-two byte size within the documented `[256, 1 MiB]` window and at least
/// as large as the table this `srcl` needs.
fn ext_buf_fits(ext_buf: &[u8], needed: usize) -> bool {
    let len = ext_buf.len();
    len >= needed
        && len.is_power_of_two()
        && (256..=1024 * 1024).contains(&len)
}

/// Owns the table's backing bytes, across whichever scratch tier was selected.
pub(crate) enum TableStorage<'a> {
    Stack([u8; STACK_CAP]),
    External(&'a mut [u8]),
    Heap(Vec<u8>),
}

impl<'a> TableStorage<'a> {
    fn as_mut_slice(&mut self, len: usize) -> &mut [u8] {
        match self {
            TableStorage::Stack(arr) => &mut arr[..len],
            TableStorage::External(buf) => &mut buf[..len],
            TableStorage::Heap(vec) => &mut vec[..len],
        }
    }
}

/// Allocates table storage for a compress call of the given `srcl`, preferring (in order)
/// the on-stack area, the caller-supplied `ext_buf`, and finally a fallible heap allocation.
/// Returns `None` only if the heap path is reached and allocation fails.
pub(crate) fn alloc_storage<'a>(
    srcl: usize,
    ext_buf: Option<&'a mut [u8]>,
) -> Option<(TableStorage<'a>, usize)> {
    let needed = table_byte_size(srcl);

    if needed <= STACK_CAP {
        return Some((TableStorage::Stack([0u8; STACK_CAP]), needed));
    }

    if let Some(buf) = ext_buf {
        if ext_buf_fits(buf, needed) {
            return Some((TableStorage::External(buf), needed));
        }
    }

    let mut heap = Vec::new();
    heap.try_reserve_exact(needed).ok()?;
    heap.resize(needed, 0);
    Some((TableStorage::Heap(heap), needed))
}

/// The outcome of a fingerprint table lookup.
pub(crate) enum Lookup {
    /// `key` matched a stored tuple; `pos` is the candidate source position to verify.
    Hit(u32),
    /// No stored tuple's key equalled the lookup key.
    Miss,
}

/// A 2-way set-associative fingerprint table, backed by a flat byte buffer.
pub(crate) struct FingerprintTable<'t> {
    buf: &'t mut [u8],
    mask: usize,
}

impl<'t> FingerprintTable<'t> {
    /// Wraps `buf` (whose length must be the value `table_byte_size` produced) as a table,
    /// and initializes every slot to the sentinel tuple described in the spec: both keys set
    /// to the source's first four bytes (zero if `src` is shorter than that), both positions
    /// set to `MREF` so that an uninitialized hit can never underflow a later offset
    /// computation.
    pub(crate) fn init(storage: &'t mut TableStorage<'_>, byte_size: usize, src: &[u8]) -> Self {
        let buf = storage.as_mut_slice(byte_size);

        let key_sentinel: u32 = if src.len() >= 4 {
            u32::from_ne_bytes(src[0..4].try_into().unwrap())
        } else {
            0
        };
        let pos_sentinel: u32 = MREF as u32;

        for slot in buf.chunks_exact_mut(SLOT_BYTES) {
            slot[0..4].copy_from_slice(&key_sentinel.to_ne_bytes());
            slot[4..8].copy_from_slice(&pos_sentinel.to_ne_bytes());
            slot[8..12].copy_from_slice(&key_sentinel.to_ne_bytes());
            slot[12..16].copy_from_slice(&pos_sentinel.to_ne_bytes());
        }

        let mask = (byte_size - 1) ^ 15;
        FingerprintTable { buf, mask }
    }

    #[inline]
    fn slot_at(&mut self, hash: u32) -> &mut [u8] {
        let off = hash as usize & self.mask;
        &mut self.buf[off..off + SLOT_BYTES]
    }

    #[inline]
    fn read_u32(slot: &[u8], at: usize) -> u32 {
        u32::from_ne_bytes(slot[at..at + 4].try_into().unwrap())
    }

    /// Looks up `key` (the raw 4-byte prefix at the scan position) at the slot named by
    /// `hash`. `verify` is called with a candidate position to confirm it is a genuine match
    /// (not merely a 4-byte collision); on a genuine miss, `(key, pos)` is inserted per the
    /// two-way victim policy: the tuple whose stored key didn't equal `key` is evicted first,
    /// falling back to evicting tuple 1 if both nominally matched but neither verified.
    #[inline]
    pub(crate) fn lookup_and_insert(
        &mut self,
        hash: u32,
        key: u32,
        pos: u32,
        mut verify: impl FnMut(u32) -> bool,
    ) -> Lookup {
        let slot = self.slot_at(hash);
        let key0 = Self::read_u32(slot, 0);
        let pos0 = Self::read_u32(slot, 4);
        let key1 = Self::read_u32(slot, 8);
        let pos1 = Self::read_u32(slot, 12);

        let key0_matches = key0 == key;
        let key1_matches = key1 == key;

        if key0_matches && verify(pos0) {
            return Lookup::Hit(pos0);
        }
        if key1_matches && verify(pos1) {
            return Lookup::Hit(pos1);
        }

        let slot = self.slot_at(hash);
        if !key0_matches {
            slot[0..4].copy_from_slice(&key.to_ne_bytes());
            slot[4..8].copy_from_slice(&pos.to_ne_bytes());
        } else {
            slot[8..12].copy_from_slice(&key.to_ne_bytes());
            slot[12..16].copy_from_slice(&pos.to_ne_bytes());
        }
        Lookup::Miss
    }

    /// Refreshes a slot's winning tuple to `(key, pos)` without going through the full
    /// lookup/verify path. Used by the driver to keep long-range references fresh (§4.5
    /// step 5).
    #[inline]
    pub(crate) fn refresh(&mut self, hash: u32, key: u32, pos: u32) {
        let slot = self.slot_at(hash);
        let key0 = Self::read_u32(slot, 0);
        if key0 == key {
            slot[4..8].copy_from_slice(&pos.to_ne_bytes());
        } else {
            slot[8..12].copy_from_slice(&key.to_ne_bytes());
            slot[12..16].copy_from_slice(&pos.to_ne_bytes());
        }
    }
}
