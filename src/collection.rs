// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::error::Result;

/// An action performed once for each element of a collection.
///
/// This is implemented for every `FnMut(&A)`, so any closure will do.
///
/// # Examples
///
/// ```rust
/// # use indexed_collections::{ArrayIndexedCollection, Collection};
/// let mut numbers: ArrayIndexedCollection<i32> = ArrayIndexedCollection::new();
/// numbers.add(1).unwrap();
/// numbers.add(2).unwrap();
/// let mut sum = 0;
/// numbers.for_each(|value: &i32| sum += *value);
/// assert_eq!(3, sum);
/// ```
pub trait Processor<A>: FnMut(&A) {}

impl<A, F> Processor<A> for F where F: FnMut(&A) {}

/// The operations every collection in this crate supports.
///
/// Implementors provide [`size()`][size], [`add()`][add],
/// [`contains()`][contains], [`remove()`][remove], [`for_each()`][for_each]
/// and [`clear()`][clear]. [`is_empty()`][is_empty],
/// [`to_array()`][to_array] and [`add_all()`][add_all] come for free.
///
/// Values passed to [`add()`][add] may be given either directly or as an
/// `Option`; `None` is always rejected with
/// [`CollectionError::InvalidArgument`][InvalidArgument].
///
/// [size]: #tymethod.size
/// [add]: #tymethod.add
/// [contains]: #tymethod.contains
/// [remove]: #tymethod.remove
/// [for_each]: #tymethod.for_each
/// [clear]: #tymethod.clear
/// [is_empty]: #method.is_empty
/// [to_array]: #method.to_array
/// [add_all]: #method.add_all
/// [InvalidArgument]: enum.CollectionError.html#variant.InvalidArgument
pub trait Collection<A> {
    /// The number of elements currently stored.
    fn size(&self) -> usize;

    /// Test whether the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Append a value to the end of the collection.
    fn add<V>(&mut self, value: V) -> Result<()>
    where
        V: Into<Option<A>>;

    /// Test whether any stored element is equal to `value`.
    fn contains(&self, value: &A) -> bool
    where
        A: PartialEq;

    /// Remove the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    fn remove(&mut self, value: &A) -> bool
    where
        A: PartialEq;

    /// Call `processor` with each element, in iteration order.
    fn for_each<P>(&self, processor: P)
    where
        P: Processor<A>;

    /// Remove every element.
    fn clear(&mut self);

    /// Copy every element into a new `Vec`, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_collections::{Collection, LinkedListIndexedCollection};
    /// let mut list: LinkedListIndexedCollection<&str> = LinkedListIndexedCollection::new();
    /// list.add("a").unwrap();
    /// list.add("b").unwrap();
    /// assert_eq!(vec!["a", "b"], list.to_array());
    /// ```
    fn to_array(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut array = Vec::with_capacity(self.size());
        self.for_each(|value: &A| array.push(value.clone()));
        array
    }

    /// Append a copy of every element of `other`, in `other`'s iteration
    /// order. `other` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_collections::{
    /// #     ArrayIndexedCollection, Collection, LinkedListIndexedCollection,
    /// # };
    /// let mut list: LinkedListIndexedCollection<i32> = LinkedListIndexedCollection::new();
    /// list.add(1).unwrap();
    /// list.add(2).unwrap();
    /// let mut array: ArrayIndexedCollection<i32> = ArrayIndexedCollection::new();
    /// array.add(0).unwrap();
    /// array.add_all(&list).unwrap();
    /// assert_eq!(&[0, 1, 2], array.as_slice());
    /// assert_eq!(2, list.size());
    /// ```
    fn add_all<C>(&mut self, other: &C) -> Result<()>
    where
        C: Collection<A> + ?Sized,
        A: Clone,
        Self: Sized,
    {
        let mut result = Ok(());
        other.for_each(|value: &A| {
            if result.is_ok() {
                result = self.add(value.clone());
            }
        });
        result
    }
}
