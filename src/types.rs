use crate::linked::Node;
use std::ptr::NonNull;

/// A forward link. The node holding it owns the node it points to.
pub(crate) type OwnedLink<A> = Option<NonNull<Node<A>>>;
/// A non-owning link: a back link, the cached last node, or a cursor.
pub(crate) type BackLink<A> = Option<NonNull<Node<A>>>;
