use std::fmt::{self, Display, Formatter};

use crate::list::{List, Value};

/// Borrowed view that formats the list tail to head.
///
/// Created by [`List::reversed`].
pub struct Reversed<'a> {
    list: &'a List,
}

/// Borrowed view that formats the elements at positions 0, 2, 4, …,
/// 0-indexed from the head.
///
/// Created by [`List::every_other`].
pub struct EveryOther<'a> {
    list: &'a List,
}

impl List {
    /// Borrows a view that formats the list tail to head.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([10, 20, 30]);
    /// assert_eq!(list.reversed().to_string(), "30 20 10");
    /// ```
    pub fn reversed(&self) -> Reversed<'_> {
        Reversed { list: self }
    }

    /// Borrows a view that formats every element reached by advancing two
    /// links at a time from the head, i.e. the elements at 0-indexed
    /// positions 0, 2, 4, …
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([10, 20, 30, 40, 50]);
    /// assert_eq!(list.every_other().to_string(), "10 30 50");
    /// ```
    pub fn every_other(&self) -> EveryOther<'_> {
        EveryOther { list: self }
    }
}

/// Head-to-tail rendering: the values space-separated, or the text
/// `list is empty`.
///
/// # Examples
///
/// ```
/// use duplex_list::List;
///
/// let mut list = List::new();
/// assert_eq!(list.to_string(), "list is empty");
///
/// list.push_back(10);
/// list.push_front(5);
/// assert_eq!(list.to_string(), "5 10");
/// ```
impl Display for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        line(f, self.iter())
    }
}

impl Display for Reversed<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        line(f, self.list.iter().rev())
    }
}

impl Display for EveryOther<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        line(f, self.list.iter().step_by(2))
    }
}

/// Write the values space-separated, or the empty-list text if there are
/// none.
fn line<'a, I>(f: &mut Formatter<'_>, mut values: I) -> fmt::Result
where
    I: Iterator<Item = &'a Value>,
{
    let first = match values.next() {
        Some(first) => first,
        None => return f.write_str("list is empty"),
    };
    write!(f, "{}", first)?;
    values.try_for_each(|value| write!(f, " {}", value))
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn forward_line_is_space_separated() {
        let list = List::from_iter((1..=8).map(|i| i * 10));
        assert_eq!(list.to_string(), "10 20 30 40 50 60 70 80");
    }

    #[test]
    fn reversed_line_runs_tail_to_head() {
        let list = List::from_iter((1..=8).map(|i| i * 10));
        assert_eq!(list.reversed().to_string(), "80 70 60 50 40 30 20 10");
    }

    #[test]
    fn every_other_even_and_odd_lengths() {
        let eight = List::from_iter((1..=8).map(|i| i * 10));
        assert_eq!(eight.every_other().to_string(), "10 30 50 70");

        let nine = List::from_iter((1..=9).map(|i| i * 10));
        assert_eq!(nine.every_other().to_string(), "10 30 50 70 90");
    }

    #[test]
    fn every_other_tiny_lists() {
        let single = List::from_iter([100]);
        assert_eq!(single.to_string(), "100");
        assert_eq!(single.every_other().to_string(), "100");

        let pair = List::from_iter([200, 300]);
        assert_eq!(pair.every_other().to_string(), "200");
    }

    #[test]
    fn empty_list_message_on_every_view() {
        let empty = List::new();
        assert_eq!(empty.to_string(), "list is empty");
        assert_eq!(empty.reversed().to_string(), "list is empty");
        assert_eq!(empty.every_other().to_string(), "list is empty");
    }
}
