// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::mem::MaybeUninit;
use std::ptr;

use tracing::trace;

use crate::collection::{Collection, Processor};
use crate::error::{require, CollectionError, Result};

fn alloc_buffer<A>(capacity: usize) -> Box<[MaybeUninit<A>]> {
    std::iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect()
}

/// A collection backed by a resizable contiguous buffer.
///
/// When an insertion finds the buffer full, the capacity doubles, so
/// appending is amortised O(1). Inserting or removing anywhere but the end
/// shifts the following elements.
///
/// # Examples
///
/// ```rust
/// # use indexed_collections::{ArrayIndexedCollection, Collection};
/// let mut array: ArrayIndexedCollection<usize> = ArrayIndexedCollection::new();
/// for i in 0..17usize {
///     array.add(i).unwrap();
/// }
/// assert_eq!(32, array.capacity());
/// assert_eq!(Ok(&16), array.get(16));
/// assert_eq!(17, array.size());
/// ```
pub struct ArrayIndexedCollection<A> {
    size: usize,
    elements: Box<[MaybeUninit<A>]>,
}

impl<A> ArrayIndexedCollection<A> {
    /// The capacity used by [`new()`][new].
    ///
    /// [new]: #method.new
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Construct an empty collection with room for
    /// [`DEFAULT_CAPACITY`][DEFAULT_CAPACITY] elements.
    ///
    /// [DEFAULT_CAPACITY]: #associatedconstant.DEFAULT_CAPACITY
    pub fn new() -> Self {
        Self::with_buffer(Self::DEFAULT_CAPACITY)
    }

    /// Construct an empty collection with room for `capacity` elements.
    ///
    /// A `capacity` of zero is rejected with
    /// [`CollectionError::InvalidArgument`][InvalidArgument].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_collections::ArrayIndexedCollection;
    /// let array: ArrayIndexedCollection<u8> = ArrayIndexedCollection::with_capacity(4).unwrap();
    /// assert_eq!(4, array.capacity());
    /// assert!(ArrayIndexedCollection::<u8>::with_capacity(0).is_err());
    /// ```
    ///
    /// [InvalidArgument]: enum.CollectionError.html#variant.InvalidArgument
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            tracing::debug!(capacity, "rejected initial capacity");
            return Err(CollectionError::InvalidArgument {
                reason: "capacity must be at least 1",
            });
        }
        Ok(Self::with_buffer(capacity))
    }

    /// Construct a collection holding a copy of every element of `other`,
    /// with the default initial capacity.
    pub fn from_collection<C>(other: &C) -> Result<Self>
    where
        C: Collection<A> + ?Sized,
        A: Clone,
    {
        Self::from_collection_with_capacity(other, Self::DEFAULT_CAPACITY)
    }

    /// Construct a collection holding a copy of every element of `other`,
    /// starting from an initial capacity of `capacity`.
    pub fn from_collection_with_capacity<C>(other: &C, capacity: usize) -> Result<Self>
    where
        C: Collection<A> + ?Sized,
        A: Clone,
    {
        let mut array = Self::with_capacity(capacity)?;
        array.add_all(other)?;
        Ok(array)
    }

    fn with_buffer(capacity: usize) -> Self {
        Self {
            size: 0,
            elements: alloc_buffer(capacity),
        }
    }

    /// The number of elements the current buffer can hold.
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// The stored elements as a slice.
    pub fn as_slice(&self) -> &[A] {
        unsafe { std::slice::from_raw_parts(self.data_ptr(), self.size) }
    }

    /// Iterate over references to the elements, in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.as_slice().iter()
    }

    /// Get a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&A> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Insert a value at `position`, moving the elements at and after it
    /// one place towards the end.
    ///
    /// Valid positions are `0..=size()`; inserting at `size()` appends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_collections::{ArrayIndexedCollection, Collection};
    /// let mut array: ArrayIndexedCollection<&str> = ArrayIndexedCollection::new();
    /// array.insert("c", 0).unwrap();
    /// array.insert("a", 0).unwrap();
    /// array.insert("b", 1).unwrap();
    /// assert_eq!(&["a", "b", "c"], array.as_slice());
    /// assert!(array.insert("z", 9).is_err());
    /// ```
    pub fn insert<V>(&mut self, value: V, position: usize) -> Result<()>
    where
        V: Into<Option<A>>,
    {
        let value = require(value)?;
        if position > self.size {
            return Err(self.out_of_range(position));
        }
        self.reserve_one();
        unsafe {
            let slot = self.data_mut_ptr().add(position);
            ptr::copy(slot, slot.add(1), self.size - position);
            slot.write(value);
        }
        self.size += 1;
        Ok(())
    }

    /// Find the index of the first element equal to `value`.
    pub fn index_of(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.as_slice().iter().position(|element| element == value)
    }

    /// Remove and return the element at `index`, moving the elements after
    /// it one place towards the start.
    pub fn remove_at(&mut self, index: usize) -> Result<A> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        unsafe {
            let slot = self.data_mut_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.size - index - 1);
            self.size -= 1;
            Ok(value)
        }
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        tracing::debug!(index, size = self.size, "rejected array index");
        CollectionError::out_of_range(index, self.size)
    }

    fn data_ptr(&self) -> *const A {
        self.elements.as_ptr().cast::<A>()
    }

    fn data_mut_ptr(&mut self) -> *mut A {
        self.elements.as_mut_ptr().cast::<A>()
    }

    /// Make sure there's room for one more element, doubling the buffer if
    /// it's full.
    fn reserve_one(&mut self) {
        if self.size < self.capacity() {
            return;
        }
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let mut buffer = alloc_buffer::<A>(new_capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data_ptr(), buffer.as_mut_ptr().cast::<A>(), self.size);
        }
        // The old buffer only holds moved-out bits now, and dropping
        // `MaybeUninit` never drops its contents.
        self.elements = buffer;
        trace!(old_capacity, new_capacity, "grew array buffer");
    }

    fn push(&mut self, value: A) {
        self.reserve_one();
        unsafe { self.data_mut_ptr().add(self.size).write(value) };
        self.size += 1;
    }

    fn release_elements(&mut self) -> usize {
        let released = self.size;
        self.size = 0;
        if std::mem::needs_drop::<A>() {
            unsafe {
                ptr::drop_in_place(std::slice::from_raw_parts_mut(
                    self.data_mut_ptr(),
                    released,
                ));
            }
        }
        released
    }
}

impl<A> Collection<A> for ArrayIndexedCollection<A> {
    fn size(&self) -> usize {
        self.size
    }

    fn add<V>(&mut self, value: V) -> Result<()>
    where
        V: Into<Option<A>>,
    {
        self.push(require(value)?);
        Ok(())
    }

    fn contains(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.as_slice().contains(value)
    }

    fn remove(&mut self, value: &A) -> bool
    where
        A: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    fn for_each<P>(&self, mut processor: P)
    where
        P: Processor<A>,
    {
        for value in self.as_slice() {
            processor(value);
        }
    }

    fn clear(&mut self) {
        let released = self.release_elements();
        trace!(released, capacity = self.capacity(), "cleared array");
    }

    fn to_array(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<A> Drop for ArrayIndexedCollection<A> {
    fn drop(&mut self) {
        self.release_elements();
    }
}

impl<A> Default for ArrayIndexedCollection<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Clone for ArrayIndexedCollection<A> {
    fn clone(&self) -> Self {
        let mut array = Self::with_buffer(self.capacity());
        array.extend(self.iter().cloned());
        array
    }
}

impl<A: PartialEq> PartialEq for ArrayIndexedCollection<A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<A: Eq> Eq for ArrayIndexedCollection<A> {}

impl<A: Debug> Debug for ArrayIndexedCollection<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A> Extend<A> for ArrayIndexedCollection<A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<A> FromIterator<A> for ArrayIndexedCollection<A> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, A> IntoIterator for &'a ArrayIndexedCollection<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
