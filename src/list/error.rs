/// Failure of a list operation.
///
/// Every failure is non-fatal and leaves the list exactly as it was; the
/// variants carry the diagnostic text callers print or log.
///
/// # Examples
///
/// ```
/// use duplex_list::{Error, List};
///
/// let mut list = List::new();
/// assert_eq!(list.pop_back(), Err(Error::Empty));
///
/// assert_eq!(Error::Empty.to_string(), "list is empty");
/// assert_eq!(Error::OutOfRange(7).to_string(), "position 7 doesn't exist");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one element.
    #[error("list is empty")]
    Empty,
    /// Walking to the requested position ran off the end of the list.
    #[error("position {0} doesn't exist")]
    OutOfRange(usize),
}
