// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Indexed collections with a shared contract.
//!
//! This crate provides two interchangeable implementations of the
//! [`Collection`][Collection] trait:
//!
//!   * [`ArrayIndexedCollection`][ArrayIndexedCollection], backed by a
//!     contiguous buffer which doubles in size whenever it runs out of room.
//!   * [`LinkedListIndexedCollection`][LinkedListIndexedCollection], backed by
//!     a doubly linked list.
//!
//! Both offer the same indexed operations (`get`, `insert`, `index_of`,
//! `remove_at`) with the same error conditions, so code written against one
//! works unchanged against the other, only the performance profile differs.
//! On top of the array collection sits [`ObjectStack`][ObjectStack], a plain
//! last in, first out stack.
//!
//! # Absent Values
//!
//! Collections never store an absent value. Every operation which stores a
//! value accepts either the value itself or an `Option` of it, and passing
//! `None` fails with [`CollectionError::InvalidArgument`][InvalidArgument]
//! without touching the collection. This lets callers forward optional
//! values straight through and still get a proper error instead of a panic.
//!
//! # Errors
//!
//! Contract violations are reported through
//! [`CollectionError`][CollectionError]: an absent value or a zero capacity
//! is `InvalidArgument`, an index outside the collection is
//! `IndexOutOfRange`, and popping or peeking an empty stack is
//! `EmptyContainer`. A rejected call never leaves the collection in a
//! changed state.
//!
//! # Thread Safety
//!
//! There is no internal locking. The collections are [`Send`][Send] and
//! [`Sync`][Sync] whenever their elements are, which only means they can be
//! moved between or read from several threads; mutation needs `&mut`, so
//! sharing a collection for writing requires your own `Mutex` or similar.
//!
//! # Logging
//!
//! Buffer growth, clearing and rejected calls are reported as `trace` and
//! `debug` events through [`tracing`][tracing]. Nothing is emitted unless the
//! application installs a subscriber.
//!
//! # Example
//!
//! ```rust
//! # use indexed_collections::{
//! #     ArrayIndexedCollection, Collection, CollectionError, LinkedListIndexedCollection,
//! # };
//! let mut array: ArrayIndexedCollection<&str> = ArrayIndexedCollection::new();
//! array.add("Bodil").unwrap();
//! array.add("Stokke").unwrap();
//!
//! // Copy it into a linked list and edit it there.
//! let mut list = LinkedListIndexedCollection::<&str>::from_collection(&array).unwrap();
//! list.insert("Ms.", 0).unwrap();
//! assert_eq!(vec!["Ms.", "Bodil", "Stokke"], list.to_array());
//!
//! // Absent values are refused, and so are indices past the end.
//! assert!(matches!(list.add(None), Err(CollectionError::InvalidArgument { .. })));
//! assert_eq!(
//!     Err(CollectionError::IndexOutOfRange { index: 5, size: 3 }),
//!     list.get(5)
//! );
//! ```
//!
//! [Collection]: trait.Collection.html
//! [ArrayIndexedCollection]: struct.ArrayIndexedCollection.html
//! [LinkedListIndexedCollection]: struct.LinkedListIndexedCollection.html
//! [ObjectStack]: struct.ObjectStack.html
//! [CollectionError]: enum.CollectionError.html
//! [InvalidArgument]: enum.CollectionError.html#variant.InvalidArgument
//! [Send]: https://doc.rust-lang.org/std/marker/trait.Send.html
//! [Sync]: https://doc.rust-lang.org/std/marker/trait.Sync.html
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod array;
mod collection;
mod error;
mod linked;
mod stack;
mod types;

pub use self::array::ArrayIndexedCollection;
pub use self::collection::{Collection, Processor};
pub use self::error::{CollectionError, Result};
pub use self::linked::{LinkedListIndexedCollection, LinkedListIter};
pub use self::stack::ObjectStack;
