use crate::list::{List, Value};

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl Clone for List {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl List {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([10, 20, 30]);
    /// assert!(list.contains(20));
    /// assert!(!list.contains(40));
    /// ```
    pub fn contains(&self, value: Value) -> bool {
        self.iter().any(|element| *element == value)
    }
}
