//! Fixed-capacity sparse storage.
//!
//! # Motivation
//! Zero is by far the most common value in real matrices. A [`SparseArray`]
//! keeps only the entries its comparer considers different from `T::default()`,
//! so memory grows with the number of non-default values rather than with the
//! logical length, while the public contract still reads like a dense array of
//! `capacity` slots.
//!
//! Invariants:
//! - every stored key lies in `[0, capacity)`;
//! - no stored value equals the default under the array's comparer. Writing a
//!   default removes the key instead.
//!
//! Every mutation moves the generation counter forward, which is what lets a
//! [`Cursor`] detect that its source changed underneath it.

mod comparer;
mod iter;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

pub use comparer::{Comparer, NaturalOrder};
pub use iter::{Cursor, Iter};

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// A fixed-length array storing only its non-default entries.
pub struct SparseArray<T> {
    capacity: usize,
    values: BTreeMap<usize, T>,
    comparer: Arc<dyn Comparer<T>>,
    generation: u64,
}

impl<T> SparseArray<T>
where
    T: Clone + Default + PartialOrd,
{
    /// An all-default array of `capacity` slots using [`NaturalOrder`].
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_comparer(capacity, Arc::new(NaturalOrder))
    }

    /// Copies `values` into ascending indices; the capacity is their count.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `values` is empty.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Result<Self> {
        Self::from_values_with_comparer(values, Arc::new(NaturalOrder))
    }

    /// Seeds an array of `capacity` slots from explicit `(index, value)` pairs.
    ///
    /// A repeated index keeps its last value. Default-valued pairs are dropped.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `capacity` is zero, if there are more
    /// distinct indices than slots, or if an index is `>= capacity`.
    pub fn from_entries<I>(capacity: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        Self::from_entries_with_comparer(capacity, entries, Arc::new(NaturalOrder))
    }
}

impl<T> SparseArray<T>
where
    T: Clone + Default,
{
    /// [`SparseArray::new`] with an explicit comparer.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `capacity` is zero.
    pub fn with_comparer(capacity: usize, comparer: Arc<dyn Comparer<T>>) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::argument("capacity", capacity, "must be at least 1"));
        }
        log::debug!("sparse array allocated: capacity {capacity}");
        Ok(Self {
            capacity,
            values: BTreeMap::new(),
            comparer,
            generation: 0,
        })
    }

    /// [`SparseArray::from_values`] with an explicit comparer.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `values` is empty.
    pub fn from_values_with_comparer<I>(values: I, comparer: Arc<dyn Comparer<T>>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let zero = T::default();
        let mut capacity = 0;
        let mut stored = BTreeMap::new();
        for (index, value) in values.into_iter().enumerate() {
            capacity = index + 1;
            if !comparer.equals(&value, &zero) {
                stored.insert(index, value);
            }
        }
        if capacity < 1 {
            return Err(Error::argument("values", 0, "must contain at least one element"));
        }
        log::debug!(
            "sparse array seeded from values: capacity {capacity}, sparsity {}",
            stored.len()
        );
        Ok(Self {
            capacity,
            values: stored,
            comparer,
            generation: 0,
        })
    }

    /// [`SparseArray::from_entries`] with an explicit comparer.
    ///
    /// # Errors
    /// See [`SparseArray::from_entries`].
    pub fn from_entries_with_comparer<I>(
        capacity: usize,
        entries: I,
        comparer: Arc<dyn Comparer<T>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        if capacity < 1 {
            return Err(Error::argument("capacity", capacity, "must be at least 1"));
        }
        let entries: BTreeMap<usize, T> = entries.into_iter().collect();
        if entries.len() > capacity {
            return Err(Error::argument("entries", entries.len(), "more entries than capacity"));
        }
        if let Some((&last, _)) = entries.last_key_value() {
            if last >= capacity {
                return Err(Error::argument("entries", last, "index beyond capacity"));
            }
        }
        let zero = T::default();
        let values: BTreeMap<usize, T> = entries
            .into_iter()
            .filter(|(_, value)| !comparer.equals(value, &zero))
            .collect();
        log::debug!(
            "sparse array seeded from entries: capacity {capacity}, sparsity {}",
            values.len()
        );
        Ok(Self {
            capacity,
            values,
            comparer,
            generation: 0,
        })
    }

    /// Assembles an array from entries already known to satisfy the invariants.
    pub(crate) fn from_parts(
        capacity: usize,
        values: BTreeMap<usize, T>,
        comparer: Arc<dyn Comparer<T>>,
    ) -> Self {
        debug_assert!(capacity >= 1);
        debug_assert!(values.keys().all(|&k| k < capacity));
        Self {
            capacity,
            values,
            comparer,
            generation: 0,
        }
    }

    /// Fixed logical length.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Same as [`capacity`](Self::capacity): the array always presents every slot.
    #[inline]
    pub fn len(&self) -> usize {
        self.capacity
    }

    /// Always `false`; capacity is at least one.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Always `false`.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        false
    }

    /// The comparer deciding which values are elided.
    #[inline]
    pub fn comparer(&self) -> &Arc<dyn Comparer<T>> {
        &self.comparer
    }

    /// Modification counter.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of explicitly stored entries.
    #[inline]
    pub fn sparsity(&self) -> usize {
        self.values.len()
    }

    /// `sparsity / capacity`, in `[0, 1]`.
    #[inline]
    pub fn sparsity_percent(&self) -> f64 {
        self.values.len() as f64 / self.capacity as f64
    }

    /// Indices of explicitly stored entries, ascending.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.keys().copied()
    }

    /// Explicitly stored `(index, value)` pairs, ascending by index.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.values.iter().map(|(&index, value)| (index, value))
    }

    /// Stored entries whose index falls in `range`, ascending.
    pub(crate) fn entries_in(&self, range: Range<usize>) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.values.range(range).map(|(&index, value)| (index, value))
    }

    /// Value at `index`, or the default if nothing is stored there.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `index < capacity`.
    pub fn get(&self, index: usize) -> Result<T> {
        Error::check_index(index, self.capacity)?;
        Ok(self.values.get(&index).cloned().unwrap_or_default())
    }

    /// Writes `value` at `index`.
    ///
    /// A default-equivalent value removes the entry. The generation moves on
    /// every successful call, even when the stored state is unchanged.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `index < capacity`; nothing is written.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        Error::check_index(index, self.capacity)?;
        if self.comparer.equals(&value, &T::default()) {
            self.values.remove(&index);
            log::trace!("sparse[{index}] elided");
        } else {
            self.values.insert(index, value);
            log::trace!("sparse[{index}] stored");
        }
        self.generation += 1;
        Ok(())
    }

    /// Same as [`set`](Self::set); there is no shifting, capacity is fixed.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `index < capacity`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.set(index, item)
    }

    /// Resets `index` to the default.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `index < capacity`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.set(index, T::default())
    }

    /// Always fails: a fixed-capacity array cannot grow.
    ///
    /// # Errors
    /// Always [`Error::FixedCapacity`].
    pub fn add(&mut self, _item: T) -> Result<()> {
        Err(Error::FixedCapacity)
    }

    /// Resets the lowest-indexed stored entry equal to `item`.
    ///
    /// Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(index) = self.index_of(item) else {
            return false;
        };
        self.values.remove(&index);
        self.generation += 1;
        true
    }

    /// Drops every stored entry.
    pub fn clear(&mut self) {
        log::debug!("sparse array cleared: {} entries dropped", self.values.len());
        self.values.clear();
        self.generation += 1;
    }

    /// Whether any stored entry equals `item`.
    ///
    /// Defaults are never stored, so this is `false` for a default `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Lowest index whose stored entry equals `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.values
            .iter()
            .find(|(_, value)| self.comparer.equals(value, item))
            .map(|(&index, _)| index)
    }

    /// Writes every slot into `dest` starting at `start`.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] if `start >= dest.len()`;
    /// [`Error::DestinationTooSmall`] if fewer than `capacity` slots follow
    /// `start`. `dest` is untouched on error.
    pub fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()> {
        if start >= dest.len() {
            return Err(Error::argument("start", start, "must be less than the destination length"));
        }
        let available = dest.len() - start;
        if available < self.capacity {
            return Err(Error::DestinationTooSmall {
                needed: self.capacity,
                available,
            });
        }
        for (slot, value) in dest.iter_mut().skip(start).zip(self.iter()) {
            *slot = value;
        }
        Ok(())
    }

    /// Dense copy of all `capacity` slots.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Borrowing iterator over every slot.
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Detached, fail-fast iteration state for this array.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }
}

impl<T: Clone + Default> Sequence for SparseArray<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn element(&self, index: usize) -> Result<T> {
        self.get(index)
    }
}

impl<T: Clone> Clone for SparseArray<T> {
    /// Deep-copies the entries; the comparer is shared.
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            values: self.values.clone(),
            comparer: Arc::clone(&self.comparer),
            generation: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for SparseArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.values == other.values
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseArray")
            .field("capacity", &self.capacity)
            .field("sparsity", &self.values.len())
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Clone + Default> IntoIterator for &'a SparseArray<T> {
    type Item = T;
    type IntoIter = Iter<'a, SparseArray<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::SparseArray;

    #[derive(Serialize)]
    struct SparseRef<'a, T> {
        capacity: usize,
        entries: &'a BTreeMap<usize, T>,
    }

    #[derive(Deserialize)]
    struct SparseRepr<T> {
        capacity: usize,
        entries: BTreeMap<usize, T>,
    }

    impl<T: Serialize> Serialize for SparseArray<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SparseRef {
                capacity: self.capacity,
                entries: &self.values,
            }
            .serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for SparseArray<T>
    where
        T: Deserialize<'de> + Clone + Default + PartialOrd,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = SparseRepr::<T>::deserialize(deserializer)?;
            SparseArray::from_entries(repr.capacity, repr.entries).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::cmp::Ordering;

    fn seeded() -> SparseArray<i64> {
        SparseArray::from_entries(2, [(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = SparseArray::<f64>::new(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
        assert!(SparseArray::<f64>::from_entries(0, []).is_err());
    }

    #[test]
    fn fresh_array_is_all_default() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for _ in 0..50 {
            let n = rng.gen_range(1..200);
            let array = SparseArray::<f64>::new(n).unwrap();
            assert_eq!(array.capacity(), n);
            assert_eq!(array.len(), n);
            assert_eq!(array.sparsity(), 0);
            assert!(!array.is_read_only());
            assert!(array.iter().all(|v| v.abs() < f64::EPSILON));
            let i = rng.gen_range(0..n);
            assert_abs_diff_eq!(array.get(i).unwrap(), 0.0);
        }
    }

    #[test]
    fn from_values_keeps_order_and_elides_defaults() {
        let array = SparseArray::from_values(vec![0, 1, 0, 2]).unwrap();
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.sparsity(), 2);
        assert_abs_diff_eq!(array.sparsity_percent(), 0.5);
        assert_eq!(array.keys().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(array.to_vec(), vec![0, 1, 0, 2]);
    }

    #[test]
    fn from_values_rejects_empty_input() {
        let err = SparseArray::<i32>::from_values(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    }

    #[test]
    fn from_values_round_trips() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        for _ in 0..50 {
            let len = rng.gen_range(1..64);
            let values: Vec<i32> = (0..len)
                .map(|_| if rng.gen_bool(0.7) { 0 } else { rng.gen_range(-9..10) })
                .collect();
            let array = SparseArray::from_values(values.clone()).unwrap();
            assert_eq!(array.to_vec(), values);
            assert_eq!(array.clone().to_vec(), array.to_vec());
            assert_eq!(array.sparsity(), values.iter().filter(|v| **v != 0).count());
        }
    }

    #[test]
    fn from_entries_copies_the_map() {
        let array = SparseArray::from_entries(4, [(1, 1), (3, 2)]).unwrap();
        assert_eq!(array.sparsity(), 2);
        assert_abs_diff_eq!(array.sparsity_percent(), 0.5);
        assert_eq!(array.keys().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(array.to_vec(), vec![0, 1, 0, 2]);

        let empty = SparseArray::<i32>::from_entries(4, []).unwrap();
        assert_eq!(empty.to_vec(), vec![0; 4]);
    }

    #[test]
    fn from_entries_validates_size_and_keys() {
        let too_many = SparseArray::from_entries(2, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(too_many.unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
        let out_of_range = SparseArray::from_entries(2, [(5, 1)]);
        assert_eq!(out_of_range.unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
    }

    #[test]
    fn from_entries_drops_default_values() {
        let array = SparseArray::from_entries(3, [(0, 0), (2, 4)]).unwrap();
        assert_eq!(array.keys().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn get_outside_capacity_fails() {
        let array = seeded();
        assert_eq!(array.get(0), Ok(1));
        assert_eq!(array.get(1), Ok(2));
        assert_eq!(array.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(array.get(usize::MAX).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    }

    #[test]
    fn set_outside_capacity_fails_without_mutation() {
        let mut array = seeded();
        let before = array.generation();
        assert_eq!(array.set(2, 3).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(array.generation(), before);
        assert_eq!(array.to_vec(), vec![1, 2]);
    }

    #[test]
    fn set_overwrites_and_bumps_generation() {
        let mut array = seeded();
        array.set(0, 5).unwrap();
        array.set(1, 6).unwrap();
        assert_eq!(array.to_vec(), vec![5, 6]);
        assert_eq!(array.generation(), 2);
    }

    #[test]
    fn setting_the_same_value_twice_is_idempotent_but_versioned() {
        let mut array = SparseArray::<i32>::new(3).unwrap();
        array.set(1, 7).unwrap();
        let snapshot = array.clone();
        let generation = array.generation();
        array.set(1, 7).unwrap();
        assert_eq!(array, snapshot);
        assert_eq!(array.generation(), generation + 1);
    }

    #[test]
    fn set_default_value_elides_entry() {
        let mut array = seeded();
        array.set(0, 0).unwrap();
        assert_eq!(array.sparsity(), 1);
        assert_eq!(array.keys().collect::<Vec<_>>(), vec![1]);
        assert_eq!(array.to_vec(), vec![0, 2]);
    }

    #[test]
    fn add_is_unsupported() {
        let mut array = SparseArray::<f64>::new(4).unwrap();
        assert_eq!(array.add(100.0), Err(Error::FixedCapacity));
        assert_eq!(array.sparsity(), 0);
    }

    #[test]
    fn clear_resets_everything_once() {
        let mut array = seeded();
        array.clear();
        assert_eq!(array.capacity(), 2);
        assert_eq!(array.sparsity(), 0);
        assert_abs_diff_eq!(array.sparsity_percent(), 0.0);
        assert_eq!(array.keys().count(), 0);
        assert_eq!(array.to_vec(), vec![0, 0]);
        assert_eq!(array.generation(), 1);
    }

    #[test]
    fn clone_is_deep_but_shares_the_comparer() {
        let comparer: Arc<dyn Comparer<i64>> = Arc::new(|a: &i64, b: &i64| a.cmp(b));
        let mut array =
            SparseArray::from_entries_with_comparer(2, [(0, 1), (1, 2)], Arc::clone(&comparer))
                .unwrap();
        let clone = array.clone();
        assert_eq!(clone.capacity(), array.capacity());
        assert_eq!(clone.keys().collect::<Vec<_>>(), array.keys().collect::<Vec<_>>());
        assert!(Arc::ptr_eq(clone.comparer(), array.comparer()));
        assert!(Arc::ptr_eq(clone.comparer(), &comparer));

        array.set(0, 9).unwrap();
        assert_eq!(clone.to_vec(), vec![1, 2]);
    }

    #[test]
    fn custom_comparer_decides_what_is_default() {
        // anything below 10 in magnitude counts as zero
        let coarse: Arc<dyn Comparer<i32>> = Arc::new(|a: &i32, b: &i32| {
            if (a - b).abs() < 10 { Ordering::Equal } else { a.cmp(b) }
        });
        let mut array = SparseArray::from_values_with_comparer([3, 40, -2], coarse).unwrap();
        assert_eq!(array.to_vec(), vec![0, 40, 0]);
        array.set(0, 5).unwrap();
        assert_eq!(array.sparsity(), 1);
        assert!(array.contains(&45));
        assert_eq!(array.index_of(&35), Some(1));
    }

    #[test]
    fn contains_and_index_of_see_stored_entries_only() {
        let array = SparseArray::from_values([0, 2, 0, 2]).unwrap();
        assert!(array.contains(&2));
        assert!(!array.contains(&3));
        assert!(!array.contains(&0));
        assert_eq!(array.index_of(&2), Some(1));
        assert_eq!(array.index_of(&3), None);
        assert_eq!(array.index_of(&0), None);
    }

    #[test]
    fn remove_drops_first_match() {
        let mut array = SparseArray::from_values([0, 2, 0, 2]).unwrap();
        assert!(array.remove(&2));
        assert_eq!(array.to_vec(), vec![0, 0, 0, 2]);
        assert_eq!(array.generation(), 1);
        assert!(!array.remove(&7));
        assert_eq!(array.generation(), 1);
    }

    #[test]
    fn remove_at_and_insert_route_through_set() {
        let mut array = seeded();
        array.remove_at(1).unwrap();
        assert_eq!(array.to_vec(), vec![1, 0]);
        array.insert(1, 8).unwrap();
        assert_eq!(array.to_vec(), vec![1, 8]);
        assert_eq!(array.generation(), 2);
        assert!(array.insert(2, 1).is_err());
        assert!(array.remove_at(2).is_err());
    }

    #[test]
    fn copy_to_exact_and_offset() {
        let array = seeded();
        let mut exact = [0; 2];
        array.copy_to(&mut exact, 0).unwrap();
        assert_eq!(exact, [1, 2]);

        let mut larger = [9; 4];
        array.copy_to(&mut larger, 0).unwrap();
        assert_eq!(larger, [1, 2, 9, 9]);

        let mut offset = [9; 4];
        array.copy_to(&mut offset, 2).unwrap();
        assert_eq!(offset, [9, 9, 1, 2]);
    }

    #[test]
    fn copy_to_rejects_bad_targets() {
        let array = seeded();
        let mut small = [0; 1];
        assert_eq!(
            array.copy_to(&mut small, 0),
            Err(Error::DestinationTooSmall { needed: 2, available: 1 })
        );
        let mut exact = [0; 2];
        assert_eq!(
            array.copy_to(&mut exact, 1).unwrap_err().kind(),
            ErrorKind::InvalidOperation
        );
        assert_eq!(
            array.copy_to(&mut exact, 2).unwrap_err().kind(),
            ErrorKind::ArgumentOutOfRange
        );
        assert_eq!(exact, [0, 0]);
    }

    #[test]
    fn for_loop_over_reference() {
        let array = SparseArray::from_values([0.0, 1.5]).unwrap();
        let mut total = 0.0;
        for value in &array {
            total += value;
        }
        assert_abs_diff_eq!(total, 1.5);
    }

    #[test]
    fn nan_is_never_elided() {
        let array = SparseArray::from_values([f64::NAN, 0.0]).unwrap();
        assert_eq!(array.sparsity(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_only_explicit_entries() {
        let array = SparseArray::from_values([0, 4, 0, 5]).unwrap();
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, r#"{"capacity":4,"entries":{"1":4,"3":5}}"#);
        let back: SparseArray<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, array);
        assert!(serde_json::from_str::<SparseArray<i32>>(r#"{"capacity":1,"entries":{"3":5}}"#).is_err());
    }
}
