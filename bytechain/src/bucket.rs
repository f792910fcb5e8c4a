//! Pluggable buffer pools backing chain growth.

use std::sync::Mutex;

/// A size-addressed supplier of replacement byte buffers.
///
/// When a chain with a bucket attached outgrows its buffer, it hands the old
/// buffer over together with the number of bytes in use and the capacity it
/// needs. The bucket returns a buffer of at least `min` bytes whose first
/// `used` bytes equal those of `old`; the old buffer now belongs to the
/// bucket and must not be touched again. When the chain is dropped its
/// buffer travels back through [`Bucket::reclaim`].
///
/// Implementations may recycle aggressively or not at all. A chain without a
/// bucket falls back to plain geometric allocation.
pub trait Bucket: Send + Sync {
    /// Returns a replacement buffer of at least `min` bytes carrying the
    /// first `used` bytes of `old`.
    fn resize(&self, old: Vec<u8>, used: usize, min: usize) -> Vec<u8>;

    /// Takes a buffer back once its chain is done with it.
    fn reclaim(&self, buf: Vec<u8>);
}

const CLASS_COUNT: usize = 8;
const BASE: usize = 256;
const SLOT_LIMIT: usize = 16;

/// A bucket that recycles buffers in power-of-two size classes.
///
/// Class `c` holds buffers of exactly `256 << c` bytes, at most sixteen per
/// class. Requests above the largest class are satisfied with plain
/// allocations and never recycled.
pub struct SlabBucket {
    slots: [Mutex<Vec<Vec<u8>>>; CLASS_COUNT],
}

impl SlabBucket {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Mutex::new(Vec::new())),
        }
    }

    /// Number of buffers currently parked across all classes.
    #[must_use]
    pub fn pooled(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| slot.lock().map_or(0, |v| v.len()))
            .sum()
    }

    /// Smallest class whose buffers hold at least `min` bytes.
    fn class_for(min: usize) -> Option<usize> {
        (0..CLASS_COUNT).find(|&c| BASE << c >= min)
    }

    /// Class whose buffers are exactly `len` bytes, if any.
    fn class_of(len: usize) -> Option<usize> {
        (0..CLASS_COUNT).find(|&c| BASE << c == len)
    }

    fn acquire(&self, min: usize) -> Vec<u8> {
        match Self::class_for(min) {
            Some(class) => {
                if let Ok(mut slot) = self.slots[class].lock() {
                    if let Some(buf) = slot.pop() {
                        return buf;
                    }
                }
                vec![0; BASE << class]
            }
            None => vec![0; min],
        }
    }
}

impl Default for SlabBucket {
    fn default() -> Self {
        Self::new()
    }
}

impl Bucket for SlabBucket {
    fn resize(&self, old: Vec<u8>, used: usize, min: usize) -> Vec<u8> {
        let mut next = self.acquire(min);
        next[..used].copy_from_slice(&old[..used]);
        self.reclaim(old);
        next
    }

    fn reclaim(&self, buf: Vec<u8>) {
        if let Some(class) = Self::class_of(buf.len()) {
            if let Ok(mut slot) = self.slots[class].lock() {
                if slot.len() < SLOT_LIMIT {
                    slot.push(buf);
                }
            }
        }
    }
}
