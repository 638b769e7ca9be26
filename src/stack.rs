// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::array::ArrayIndexedCollection;
use crate::collection::Collection;
use crate::error::{CollectionError, Result};

const EMPTY_STACK: &str = "stack is empty";

/// A last in, first out stack stored in an
/// [`ArrayIndexedCollection`][ArrayIndexedCollection].
///
/// The top of the stack is the element with the highest index.
///
/// # Examples
///
/// ```rust
/// # use indexed_collections::ObjectStack;
/// let mut stack: ObjectStack<i32> = ObjectStack::new();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// stack.push(3).unwrap();
/// assert_eq!(Ok(3), stack.pop());
/// assert_eq!(Ok(2), stack.pop());
/// assert_eq!(1, stack.size());
/// ```
///
/// [ArrayIndexedCollection]: struct.ArrayIndexedCollection.html
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ObjectStack<A> {
    array: ArrayIndexedCollection<A>,
}

impl<A> ObjectStack<A> {
    /// Construct an empty stack.
    pub fn new() -> Self {
        Self {
            array: ArrayIndexedCollection::new(),
        }
    }

    /// Construct an empty stack with room for `capacity` elements before it
    /// needs to grow.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            array: ArrayIndexedCollection::with_capacity(capacity)?,
        })
    }

    /// The number of elements on the stack.
    pub fn size(&self) -> usize {
        self.array.size()
    }

    /// Test whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Push a value onto the stack. `None` is rejected.
    pub fn push<V>(&mut self, value: V) -> Result<()>
    where
        V: Into<Option<A>>,
    {
        self.array.add(value)
    }

    /// Remove and return the most recently pushed value.
    pub fn pop(&mut self) -> Result<A> {
        match self.top_index() {
            Some(index) => self.array.remove_at(index),
            None => Err(Self::empty()),
        }
    }

    /// Get a reference to the most recently pushed value without removing
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_collections::{CollectionError, ObjectStack};
    /// let mut stack: ObjectStack<&str> = ObjectStack::new();
    /// assert!(matches!(stack.peek(), Err(CollectionError::EmptyContainer { .. })));
    /// stack.push("top").unwrap();
    /// assert_eq!(Ok(&"top"), stack.peek());
    /// assert_eq!(1, stack.size());
    /// ```
    pub fn peek(&self) -> Result<&A> {
        match self.top_index() {
            Some(index) => self.array.get(index),
            None => Err(Self::empty()),
        }
    }

    /// Remove every element from the stack.
    pub fn clear(&mut self) {
        self.array.clear();
    }

    fn top_index(&self) -> Option<usize> {
        self.size().checked_sub(1)
    }

    fn empty() -> CollectionError {
        tracing::debug!("rejected access to empty stack");
        CollectionError::empty_container(EMPTY_STACK)
    }
}

impl<A> Default for ObjectStack<A> {
    fn default() -> Self {
        Self::new()
    }
}
