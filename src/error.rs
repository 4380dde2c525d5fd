use thiserror::Error;

/// Errors raised by the fallible list operations.
///
/// Both kinds are local and synchronous. Validation happens before any link
/// is touched, so an operation that returns an error leaves the list exactly
/// as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation requires at least one element.
    ///
    /// Raised by [`front`], [`back`], [`pop_front`] and [`pop_back`] (and
    /// their cursor counterparts) on an empty list.
    ///
    /// [`front`]: crate::List::front
    /// [`back`]: crate::List::back
    /// [`pop_front`]: crate::List::pop_front
    /// [`pop_back`]: crate::List::pop_back
    #[error("operation requires a non-empty list")]
    Empty,

    /// The position does not reference an element.
    ///
    /// Raised by [`CursorMut::remove`] when the cursor is at the ghost node,
    /// and by the boundary-checked cursor moves when they would cross it.
    ///
    /// [`CursorMut::remove`]: crate::list::cursor::CursorMut::remove
    #[error("position does not reference an element")]
    InvalidPosition,
}
