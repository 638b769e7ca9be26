// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use thiserror::Error;

/// A `Result` whose error is always a [`CollectionError`][CollectionError].
///
/// [CollectionError]: enum.CollectionError.html
pub type Result<A> = std::result::Result<A, CollectionError>;

/// Contract violations reported by the collections in this crate.
///
/// Every error is raised before the offending call changes anything, so the
/// collection is still fully usable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An absent value was passed where an element is required, or a
    /// capacity below 1 was requested.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },
    /// An index or insert position fell outside the valid range.
    #[error("index {index} out of range for collection of size {size}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The size of the collection at the time of the call.
        size: usize,
    },
    /// An element was requested from an empty stack.
    #[error("{message}")]
    EmptyContainer {
        /// Human readable description.
        message: Cow<'static, str>,
    },
}

impl CollectionError {
    /// Construct an [`EmptyContainer`][EmptyContainer] error with a custom
    /// message.
    ///
    /// The message is only stored, never printed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_collections::CollectionError;
    /// let error = CollectionError::empty_container("nothing to pop");
    /// assert_eq!("nothing to pop", error.to_string());
    /// ```
    ///
    /// [EmptyContainer]: #variant.EmptyContainer
    pub fn empty_container<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        CollectionError::EmptyContainer {
            message: message.into(),
        }
    }

    pub(crate) fn absent_value() -> Self {
        CollectionError::InvalidArgument {
            reason: "collections cannot store an absent value",
        }
    }

    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        CollectionError::IndexOutOfRange { index, size }
    }
}

/// Unwrap a value passed to a mutator, rejecting `None`.
pub(crate) fn require<A, V>(value: V) -> Result<A>
where
    V: Into<Option<A>>,
{
    value.into().ok_or_else(|| {
        tracing::debug!("rejected absent value");
        CollectionError::absent_value()
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn require_passes_values_through() {
        assert_eq!(Ok(5), require::<i32, _>(5));
        assert_eq!(Ok("x"), require::<&str, _>(Some("x")));
    }

    #[test]
    fn require_rejects_none() {
        assert_eq!(
            Err(CollectionError::absent_value()),
            require::<usize, _>(None)
        );
    }

    #[test]
    fn empty_container_carries_message() {
        let error = CollectionError::empty_container(String::from("custom"));
        assert_eq!(
            CollectionError::EmptyContainer {
                message: Cow::Borrowed("custom")
            },
            error
        );
        assert_eq!("custom", format!("{}", error));
    }

    #[test]
    fn out_of_range_describes_index_and_size() {
        let error = CollectionError::out_of_range(7, 3);
        assert_eq!(
            "index 7 out of range for collection of size 3",
            error.to_string()
        );
    }
}
