// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::collection::{Collection, Processor};
use crate::error::{require, CollectionError, Result};
use crate::types::{BackLink, OwnedLink};

pub(crate) struct Node<A> {
    data: A,
    next: OwnedLink<A>,
    prev: BackLink<A>,
}

impl<A> Node<A> {
    fn alloc(data: A, prev: BackLink<A>, next: OwnedLink<A>) -> NonNull<Node<A>> {
        NonNull::from(Box::leak(Box::new(Node { data, next, prev })))
    }
}

/// A collection backed by a doubly linked list.
///
/// Appending is O(1). Indexed access walks the list from whichever end is
/// closer to the index, so it takes at most `size / 2` steps.
///
/// # Examples
///
/// ```rust
/// # use indexed_collections::{Collection, LinkedListIndexedCollection};
/// let mut list: LinkedListIndexedCollection<&str> = LinkedListIndexedCollection::new();
/// list.add("b").unwrap();
/// list.insert("a", 0).unwrap();
/// list.add("c").unwrap();
/// assert_eq!(Ok(&"a"), list.get(0));
/// assert_eq!(Some(2), list.index_of(&"c"));
/// assert!(list.remove(&"b"));
/// assert_eq!(vec!["a", "c"], list.to_array());
/// ```
pub struct LinkedListIndexedCollection<A> {
    first: OwnedLink<A>,
    last: BackLink<A>,
    size: usize,
    marker: PhantomData<Box<Node<A>>>,
}

impl<A> LinkedListIndexedCollection<A> {
    /// Construct an empty list.
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Construct a list holding a copy of every element of `other`, in
    /// `other`'s iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_collections::{
    /// #     ArrayIndexedCollection, Collection, LinkedListIndexedCollection,
    /// # };
    /// let mut array: ArrayIndexedCollection<i32> = ArrayIndexedCollection::new();
    /// array.add(1).unwrap();
    /// array.add(2).unwrap();
    /// let list = LinkedListIndexedCollection::<i32>::from_collection(&array).unwrap();
    /// assert_eq!(vec![1, 2], list.to_array());
    /// ```
    pub fn from_collection<C>(other: &C) -> Result<Self>
    where
        C: Collection<A> + ?Sized,
        A: Clone,
    {
        let mut list = Self::new();
        list.add_all(other)?;
        Ok(list)
    }

    /// Get a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&A> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).data })
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Insert a value at `position`, moving the elements at and after it
    /// one place towards the end.
    ///
    /// Valid positions are `0..=size()`; inserting at `size()` appends.
    pub fn insert<V>(&mut self, value: V, position: usize) -> Result<()>
    where
        V: Into<Option<A>>,
    {
        let value = require(value)?;
        if position > self.size {
            return Err(self.out_of_range(position));
        }
        match self.node_at(position) {
            Some(next) => unsafe { self.splice_before(next, value) },
            None => self.push_back(value),
        }
        Ok(())
    }

    /// Find the index of the first element equal to `value`.
    pub fn index_of(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.find(value).map(|(index, _)| index)
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<A> {
        match self.node_at(index) {
            Some(node) => Ok(unsafe { self.unlink(node) }),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Iterate over references to the elements, from first to last.
    pub fn iter(&self) -> LinkedListIter<'_, A> {
        LinkedListIter {
            head: self.first,
            tail: self.last,
            remaining: self.size,
            marker: PhantomData,
        }
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        tracing::debug!(index, size = self.size, "rejected list index");
        CollectionError::out_of_range(index, self.size)
    }

    fn push_back(&mut self, value: A) {
        let node = Node::alloc(value, self.last, None);
        match self.last {
            None => self.first = Some(node),
            Some(last) => unsafe { (*last.as_ptr()).next = Some(node) },
        }
        self.last = Some(node);
        self.size += 1;
    }

    /// Link a new node in front of `next`, which must belong to this list.
    unsafe fn splice_before(&mut self, next: NonNull<Node<A>>, value: A) {
        let prev = (*next.as_ptr()).prev;
        let node = Node::alloc(value, prev, Some(next));
        (*next.as_ptr()).prev = Some(node);
        match prev {
            None => self.first = Some(node),
            Some(prev) => (*prev.as_ptr()).next = Some(node),
        }
        self.size += 1;
    }

    /// Detach `node`, which must belong to this list, and free it.
    unsafe fn unlink(&mut self, node: NonNull<Node<A>>) -> A {
        let Node { data, next, prev } = *Box::from_raw(node.as_ptr());
        match prev {
            None => self.first = next,
            Some(prev) => (*prev.as_ptr()).next = next,
        }
        match next {
            None => self.last = prev,
            Some(next) => (*next.as_ptr()).prev = prev,
        }
        self.size -= 1;
        data
    }

    fn node_at(&self, index: usize) -> BackLink<A> {
        if index >= self.size {
            None
        } else if index < self.size / 2 {
            Self::walk(self.first, index, |node| node.next)
        } else {
            Self::walk(self.last, self.size - 1 - index, |node| node.prev)
        }
    }

    fn walk<F>(mut cursor: BackLink<A>, steps: usize, step: F) -> BackLink<A>
    where
        F: Fn(&Node<A>) -> BackLink<A>,
    {
        for _ in 0..steps {
            cursor = cursor.and_then(|node| step(unsafe { node.as_ref() }));
        }
        cursor
    }

    fn find(&self, value: &A) -> Option<(usize, NonNull<Node<A>>)>
    where
        A: PartialEq,
    {
        let mut cursor = self.first;
        let mut index = 0;
        while let Some(node) = cursor {
            let node_ref = unsafe { node.as_ref() };
            if node_ref.data == *value {
                return Some((index, node));
            }
            cursor = node_ref.next;
            index += 1;
        }
        None
    }

    fn release_chain(&mut self) -> usize {
        let released = self.size;
        let mut cursor = self.first.take();
        self.last = None;
        self.size = 0;
        while let Some(node) = cursor {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            cursor = node.next;
        }
        released
    }
}

impl<A> Collection<A> for LinkedListIndexedCollection<A> {
    fn size(&self) -> usize {
        self.size
    }

    fn add<V>(&mut self, value: V) -> Result<()>
    where
        V: Into<Option<A>>,
    {
        self.push_back(require(value)?);
        Ok(())
    }

    fn contains(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.find(value).is_some()
    }

    fn remove(&mut self, value: &A) -> bool
    where
        A: PartialEq,
    {
        match self.find(value) {
            Some((_, node)) => {
                unsafe { self.unlink(node) };
                true
            }
            None => false,
        }
    }

    fn for_each<P>(&self, mut processor: P)
    where
        P: Processor<A>,
    {
        for value in self.iter() {
            processor(value);
        }
    }

    fn clear(&mut self) {
        let released = self.release_chain();
        trace!(released, "cleared linked list");
    }
}

impl<A> Drop for LinkedListIndexedCollection<A> {
    fn drop(&mut self) {
        self.release_chain();
    }
}

impl<A> Default for LinkedListIndexedCollection<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Clone for LinkedListIndexedCollection<A> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<A: PartialEq> PartialEq for LinkedListIndexedCollection<A> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for LinkedListIndexedCollection<A> {}

impl<A: Debug> Debug for LinkedListIndexedCollection<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A> Extend<A> for LinkedListIndexedCollection<A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<A> FromIterator<A> for LinkedListIndexedCollection<A> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, A> IntoIterator for &'a LinkedListIndexedCollection<A> {
    type Item = &'a A;
    type IntoIter = LinkedListIter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The list owns its nodes outright; the raw links are never shared outside it.
unsafe impl<A: Send> Send for LinkedListIndexedCollection<A> {}
unsafe impl<A: Sync> Sync for LinkedListIndexedCollection<A> {}

/// A borrowing iterator over a
/// [`LinkedListIndexedCollection`][LinkedListIndexedCollection].
///
/// [LinkedListIndexedCollection]: struct.LinkedListIndexedCollection.html
pub struct LinkedListIter<'a, A> {
    head: BackLink<A>,
    tail: BackLink<A>,
    remaining: usize,
    marker: PhantomData<&'a Node<A>>,
}

impl<'a, A> Iterator for LinkedListIter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.head.map(|node| {
            let node = unsafe { &*node.as_ptr() };
            self.remaining -= 1;
            self.head = node.next;
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A> DoubleEndedIterator for LinkedListIter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.tail.map(|node| {
            let node = unsafe { &*node.as_ptr() };
            self.remaining -= 1;
            self.tail = node.prev;
            &node.data
        })
    }
}

impl<'a, A> ExactSizeIterator for LinkedListIter<'a, A> {}

impl<'a, A> FusedIterator for LinkedListIter<'a, A> {}

impl<'a, A> Clone for LinkedListIter<'a, A> {
    fn clone(&self) -> Self {
        LinkedListIter {
            head: self.head,
            tail: self.tail,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, A: Debug> Debug for LinkedListIter<'a, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.debug_list().entries(self.clone()).finish()
    }
}

unsafe impl<'a, A: Sync> Send for LinkedListIter<'a, A> {}
unsafe impl<'a, A: Sync> Sync for LinkedListIter<'a, A> {}

#[cfg(test)]
mod test {
    use super::*;

    fn list_of(values: &[i32]) -> LinkedListIndexedCollection<i32> {
        values.iter().copied().collect()
    }

    // Walk the chain both ways and check it agrees with `size`, `first` and
    // `last`.
    fn assert_links<A: Clone + PartialEq + Debug>(list: &LinkedListIndexedCollection<A>) {
        let mut forward = Vec::new();
        let mut cursor = list.first;
        let mut prev: BackLink<A> = None;
        while let Some(node) = cursor {
            let node_ref = unsafe { node.as_ref() };
            assert_eq!(prev, node_ref.prev);
            forward.push(node_ref.data.clone());
            prev = Some(node);
            cursor = node_ref.next;
        }
        assert_eq!(prev, list.last);
        assert_eq!(list.size, forward.len());

        let mut backward = Vec::new();
        let mut cursor = list.last;
        while let Some(node) = cursor {
            let node_ref = unsafe { node.as_ref() };
            backward.push(node_ref.data.clone());
            cursor = node_ref.prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn add_links_nodes_in_order() {
        let mut list: LinkedListIndexedCollection<i32> = LinkedListIndexedCollection::new();
        for i in 0..5 {
            list.add(i).unwrap();
            assert_links(&list);
        }
        assert_eq!(5, list.size());
        assert_eq!(vec![0, 1, 2, 3, 4], list.to_array());
    }

    #[test]
    fn remove_absent_value_leaves_list_alone() {
        let mut list: LinkedListIndexedCollection<&str> = LinkedListIndexedCollection::new();
        list.add("a").unwrap();
        list.add("b").unwrap();
        list.add("c").unwrap();
        assert!(!list.remove(&"absent"));
        assert_eq!(3, list.size());
        assert_links(&list);
    }

    #[test]
    fn remove_value_relinks_endpoints() {
        let mut list = list_of(&[1, 2, 3, 2]);
        assert!(list.remove(&1));
        assert_links(&list);
        assert_eq!(vec![2, 3, 2], list.to_array());
        assert!(list.remove(&2));
        assert_eq!(vec![3, 2], list.to_array());
        assert!(list.remove(&2));
        assert_links(&list);
        assert_eq!(vec![3], list.to_array());
        assert!(list.remove(&3));
        assert_links(&list);
        assert!(list.is_empty());
        list.add(9).unwrap();
        assert_eq!(Ok(&9), list.get(0));
    }

    #[test]
    fn get_walks_from_both_ends() {
        let list = list_of(&[10, 11, 12, 13, 14, 15, 16]);
        for i in 0..7 {
            assert_eq!(Ok(&(10 + i as i32)), list.get(i));
        }
        assert_eq!(Err(CollectionError::out_of_range(7, 7)), list.get(7));
    }

    #[test]
    fn get_on_empty_list_is_out_of_range() {
        let list: LinkedListIndexedCollection<i32> = LinkedListIndexedCollection::new();
        assert_eq!(Err(CollectionError::out_of_range(0, 0)), list.get(0));
    }

    #[test]
    fn insert_at_front_middle_and_end() {
        let mut list: LinkedListIndexedCollection<&str> = LinkedListIndexedCollection::new();
        list.insert("x", 0).unwrap();
        assert_eq!(Ok(&"x"), list.get(0));
        assert_eq!(1, list.size());
        list.insert("a", 0).unwrap();
        list.insert("z", 2).unwrap();
        list.insert("m", 1).unwrap();
        list.insert("y", 3).unwrap();
        assert_links(&list);
        assert_eq!(vec!["a", "m", "x", "y", "z"], list.to_array());
    }

    #[test]
    fn insert_rejects_bad_arguments_without_mutating() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(
            Err(CollectionError::out_of_range(3, 2)),
            list.insert(5, 3)
        );
        assert_eq!(Err(CollectionError::absent_value()), list.insert(None, 0));
        assert_eq!(vec![1, 2], list.to_array());
    }

    #[test]
    fn remove_at_returns_element_and_shifts() {
        let mut list = list_of(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(Ok(1), list.remove_at(1));
        assert_eq!(Ok(4), list.remove_at(3));
        assert_links(&list);
        assert_eq!(vec![0, 2, 3, 5], list.to_array());
        assert_eq!(Ok(5), list.remove_at(3));
        assert_eq!(Ok(0), list.remove_at(0));
        assert_links(&list);
        assert_eq!(vec![2, 3], list.to_array());
        assert_eq!(Err(CollectionError::out_of_range(2, 2)), list.remove_at(2));
    }

    #[test]
    fn add_none_is_rejected() {
        let mut list = list_of(&[1]);
        assert_eq!(Err(CollectionError::absent_value()), list.add(None));
        assert_eq!(1, list.size());
    }

    #[test]
    fn index_of_finds_first_match() {
        let list = list_of(&[4, 5, 4]);
        assert_eq!(Some(0), list.index_of(&4));
        assert_eq!(Some(1), list.index_of(&5));
        assert_eq!(None, list.index_of(&6));
        assert!(list.contains(&5));
        assert!(!list.contains(&6));
    }

    #[test]
    fn clear_empties_and_list_stays_usable() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_links(&list);
        list.clear();
        list.add(7).unwrap();
        assert_eq!(vec![7], list.to_array());
    }

    #[test]
    fn iterates_in_both_directions() {
        let list = list_of(&[1, 2, 3, 4]);
        let mut iter = list.iter();
        assert_eq!(4, iter.len());
        assert_eq!(Some(&1), iter.next());
        assert_eq!(Some(&4), iter.next_back());
        assert_eq!(Some(&2), iter.next());
        assert_eq!(Some(&3), iter.next_back());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next_back());
        let reversed: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(vec![4, 3, 2, 1], reversed);
    }

    #[test]
    fn clone_and_compare() {
        let list = list_of(&[1, 2, 3]);
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_links(&copy);
        assert_ne!(list, list_of(&[1, 2]));
        assert_eq!("[1, 2, 3]", format!("{:?}", copy));
    }

    #[test]
    fn long_list_drops_without_recursion() {
        let list: LinkedListIndexedCollection<usize> = (0..200_000).collect();
        assert_eq!(200_000, list.size());
        drop(list);
    }
}
