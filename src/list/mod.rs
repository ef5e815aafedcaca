use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use crate::list::error::Error;
use crate::list::iterator::Iter;

pub mod display;
pub mod error;

mod algorithms;
mod iterator;

/// The element type held by the list.
pub type Value = i32;

/// A doubly-linked list of owned integer nodes, implemented as a cyclic
/// list.
///
/// Every element is reachable from both ends: pushing and popping at either
/// end compute in *O*(1) time, while the positional operations
/// ([`insert_after`], [`remove_at`]) and the value scan ([`remove_value`])
/// walk from the head in *O*(*n*).
///
/// The list owns a payload-free ghost node that closes the ring:
/// `ghost.next` is the first element, `ghost.prev` is the last, and an
/// empty list is the ghost pointing at itself. The *O*(1) `len` bookkeeping
/// can be disabled by disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// duplex_list = { default-features = false }
/// ```
///
/// [`insert_after`]: List::insert_after
/// [`remove_at`]: List::remove_at
/// [`remove_value`]: List::remove_value
pub struct List {
    ghost: Box<Node<Erased>>,
    #[cfg(feature = "length")]
    len: usize,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Payload stand-in for the ghost node.
///
/// `Node<Erased>` shares its link prefix with `Node<Value>` (`#[repr(C)]`),
/// so ghost pointers cast to element pointers as long as the ghost's
/// `element` is never read.
struct Erased;

// private methods
impl List {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<Value>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }

    pub(crate) fn front_node(&self) -> NonNull<Node<Value>> {
        // SAFETY: `ghost.next` is always valid (either the ghost itself, or
        // the first element of the list).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() })
    }

    pub(crate) fn back_node(&self) -> NonNull<Node<Value>> {
        // SAFETY: `ghost.prev` is always valid (either the ghost itself, or
        // the last element of the list).
        NonNull::from(unsafe { self.ghost_node().as_ref().prev.as_ref() })
    }

    pub(crate) unsafe fn connect(
        &mut self,
        mut prev: NonNull<Node<Value>>,
        mut next: NonNull<Node<Value>>,
    ) {
        prev.as_mut().next = next;
        next.as_mut().prev = prev;
    }

    /// Attach a detached node to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<Value>>,
        next: NonNull<Node<Value>>,
        node: NonNull<Node<Value>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Detach a single node from the list and return it as a box.
    ///
    /// This is the only place a node leaves the ring, so it also carries
    /// the release bookkeeping. It is unsafe because it does not check
    /// whether `node` is an element node belonging to the list.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<Value>>) -> Box<Node<Value>> {
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        #[cfg(test)]
        live_nodes::released();
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }

    /// Walk `steps` nodes forward from `start`, or return `None` if the
    /// walk reaches the ghost node.
    fn seek(&self, start: NonNull<Node<Value>>, steps: usize) -> Option<NonNull<Node<Value>>> {
        let mut node = start;
        for _ in 0..steps {
            if node == self.ghost_node() {
                return None;
            }
            // SAFETY: `node.next` is always valid in a cyclic list.
            node = unsafe { node.as_ref().next };
        }
        if node == self.ghost_node() {
            return None;
        }
        Some(node)
    }

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl List {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use duplex_list::List;
    /// let list = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front(10);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time with
    /// `feature = "length"`, and in *O*(*n*) time without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(20);
    /// list.push_front(10);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([10, 20]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.len(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&Value> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node holds an element.
        Some(unsafe { &self.front_node().as_ref().element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&Value> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node holds an element.
        Some(unsafe { &self.back_node().as_ref().element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(20);
    /// assert_eq!(list.front(), Some(&20));
    ///
    /// list.push_front(10);
    /// assert_eq!(list.front(), Some(&10));
    /// ```
    pub fn push_front(&mut self, value: Value) {
        // SAFETY: the ghost node and the front node are always adjacent.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), new_node(value)) };
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(10);
    /// list.push_back(30);
    /// assert_eq!(list.back(), Some(&30));
    /// ```
    pub fn push_back(&mut self, value: Value) {
        // SAFETY: the back node and the ghost node are always adjacent.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), new_node(value)) };
    }

    /// Removes the first element and returns it, or [`Error::Empty`] if the
    /// list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    ///
    /// list.push_back(10);
    /// list.push_back(20);
    /// assert_eq!(list.pop_front(), Ok(10));
    /// assert_eq!(list.pop_front(), Ok(20));
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<Value, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so the front node is an element
        // node owned by this list.
        let node = unsafe { self.detach_node(self.front_node()) };
        Ok(node.into_element())
    }

    /// Removes the last element and returns it, or [`Error::Empty`] if the
    /// list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(Error::Empty));
    ///
    /// list.push_back(10);
    /// list.push_back(30);
    /// assert_eq!(list.pop_back(), Ok(30));
    /// assert_eq!(list.pop_back(), Ok(10));
    /// ```
    pub fn pop_back(&mut self) -> Result<Value, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so the back node is an element
        // node owned by this list.
        let node = unsafe { self.detach_node(self.back_node()) };
        Ok(node.into_element())
    }

    /// Inserts `value` immediately after the element at `position`,
    /// 0-indexed from the head.
    ///
    /// If the addressed element is the tail, the new element becomes the
    /// tail. Walking `position` steps past the last element rejects the
    /// call with [`Error::OutOfRange`] and performs no mutation.
    ///
    /// On an empty list `position` is ignored and `value` becomes the sole
    /// element, so the call never fails on an empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([10, 20, 30]);
    /// assert_eq!(list.insert_after(25, 1), Ok(()));
    /// assert_eq!(list.to_string(), "10 20 25 30");
    ///
    /// // Positions past the last element are rejected without mutating.
    /// assert_eq!(list.insert_after(99, 4), Err(Error::OutOfRange(4)));
    /// assert_eq!(list.to_string(), "10 20 25 30");
    ///
    /// // On an empty list the position is ignored.
    /// let mut empty = List::new();
    /// assert_eq!(empty.insert_after(10, 7), Ok(()));
    /// assert_eq!(empty.to_string(), "10");
    /// ```
    pub fn insert_after(&mut self, value: Value, position: usize) -> Result<(), Error> {
        if self.is_empty() {
            self.push_back(value);
            return Ok(());
        }
        let node = self
            .seek(self.front_node(), position)
            .ok_or(Error::OutOfRange(position))?;
        // SAFETY: `node` is an element node of this list, and `node.next`
        // is its neighbour, so the pair is adjacent.
        unsafe {
            let next = node.as_ref().next;
            self.attach_node(node, next, new_node(value));
        }
        Ok(())
    }

    /// Removes the first element equal to `value`, scanning from the head.
    ///
    /// Returns `true` if an element was removed. An absent value, or an
    /// empty list, is a silent no-op returning `false`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([10, 20, 30, 20]);
    /// assert!(list.remove_value(20));
    /// assert_eq!(list.to_string(), "10 30 20");
    ///
    /// assert!(!list.remove_value(99));
    /// ```
    pub fn remove_value(&mut self, value: Value) -> bool {
        let mut node = self.front_node();
        while node != self.ghost_node() {
            // SAFETY: `node` is not the ghost node, so it is an element
            // node owned by this list.
            let current = unsafe { node.as_ref() };
            if current.element == value {
                unsafe { self.detach_node(node) };
                return true;
            }
            node = current.next;
        }
        false
    }

    /// Removes the element at `position`, 1-indexed from the head, and
    /// returns it.
    ///
    /// `position == 1` delegates to [`pop_front`]; a position resolving to
    /// the tail delegates to [`pop_back`]; interior nodes are spliced out
    /// directly. An empty list reports [`Error::Empty`], and a position of
    /// `0` or past the end reports [`Error::OutOfRange`]; failures perform
    /// no mutation.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplex_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([10, 20, 30, 40]);
    /// assert_eq!(list.remove_at(1), Ok(10));
    /// assert_eq!(list.remove_at(3), Ok(40));
    /// assert_eq!(list.remove_at(3), Err(Error::OutOfRange(3)));
    /// assert_eq!(list.to_string(), "20 30");
    /// ```
    ///
    /// [`pop_front`]: List::pop_front
    /// [`pop_back`]: List::pop_back
    pub fn remove_at(&mut self, position: usize) -> Result<Value, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if position == 0 {
            return Err(Error::OutOfRange(position));
        }
        if position == 1 {
            return self.pop_front();
        }
        let node = self
            .seek(self.front_node(), position - 1)
            .ok_or(Error::OutOfRange(position))?;
        if node == self.back_node() {
            return self.pop_back();
        }
        // SAFETY: `node` is an interior element node of this list.
        let node = unsafe { self.detach_node(node) };
        Ok(node.into_element())
    }
}

impl Debug for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a node whose links dangle until it is attached.
    fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

fn new_node(element: Value) -> NonNull<Node<Value>> {
    #[cfg(test)]
    live_nodes::allocated();
    Node::new_detached(element)
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased);
    // SAFETY:
    // - `ghost.next`, `ghost.prev` are re-pointed at the ghost itself
    //   immediately, before anyone can read them.
    // - `ghost.element` is never read, so it is erased out.
    let mut ghost = unsafe { Box::from_raw(ghost_ptr.as_ptr()) };
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent(prev: NonNull<Node<Value>>, next: NonNull<Node<Value>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl Drop for List {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl Send for List {}

unsafe impl Sync for List {}


#[cfg(test)]
mod tests {
    use crate::list::error::Error;
    use crate::list::{live_nodes, List};
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::new();
        assert!(list.is_empty());
        list.push_back(10);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(10));
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));

        list.push_back(10);
        assert_eq!(list.back(), Some(&10));
        assert_eq!(list.pop_front(), Ok(10));
        assert_eq!(list.pop_back(), Err(Error::Empty));

        list.push_front(10);
        list.push_front(20);
        list.push_back(30);
        assert_eq!(list.front(), Some(&20));
        assert_eq!(list.back(), Some(&30));
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Ok(20));
        assert_eq!(list.pop_back(), Ok(30));
        assert_eq!(list.pop_front(), Ok(10));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn push_then_pop_restores_content() {
        let mut list = List::from_iter([10, 20, 30]);
        let before = list.clone();

        list.push_front(5);
        assert_eq!(list.pop_front(), Ok(5));
        assert_eq!(list, before);

        list.push_back(40);
        assert_eq!(list.pop_back(), Ok(40));
        assert_eq!(list, before);
    }

    #[test]
    fn insert_after_links_between_neighbours() {
        let mut list = List::from_iter([10, 20, 30]);
        assert_eq!(list.insert_after(15, 0), Ok(()));
        assert_eq!(list.to_string(), "10 15 20 30");

        // Inserting after the tail moves the tail.
        assert_eq!(list.insert_after(35, 3), Ok(()));
        assert_eq!(list.to_string(), "10 15 20 30 35");
        assert_eq!(list.back(), Some(&35));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn insert_after_empty_list_ignores_position() {
        let mut list = List::new();
        assert_eq!(list.insert_after(10, 9), Ok(()));
        assert_eq!(list.to_string(), "10");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_after_out_of_range_is_rejected() {
        let mut list = List::from_iter([10, 20]);
        assert_eq!(list.insert_after(30, 2), Err(Error::OutOfRange(2)));
        assert_eq!(list.insert_after(30, 7), Err(Error::OutOfRange(7)));
        assert_eq!(list.to_string(), "10 20");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insert_then_remove_restores_content() {
        let mut list = List::from_iter([10, 20, 30]);
        let before = list.clone();

        assert_eq!(list.insert_after(99, 1), Ok(()));
        assert_eq!(list.len(), 4);
        assert!(list.remove_value(99));
        assert_eq!(list, before);
    }

    #[test]
    fn remove_value_relinks_neighbours() {
        let mut list = List::from_iter([10, 20, 30, 20]);

        // Only the first match, scanning from the head.
        assert!(list.remove_value(20));
        assert_eq!(list.to_string(), "10 30 20");

        assert!(list.remove_value(10));
        assert_eq!(list.front(), Some(&30));

        assert!(list.remove_value(20));
        assert_eq!(list.back(), Some(&30));

        assert!(!list.remove_value(99));
        assert_eq!(list.to_string(), "30");

        assert!(!List::new().remove_value(10));
    }

    #[test]
    fn remove_at_delegates_to_the_endpoint_pops() {
        let mut list = List::from_iter([10, 20, 30, 40]);
        let mut twin = list.clone();

        assert_eq!(list.remove_at(1), Ok(10));
        assert_eq!(twin.pop_front(), Ok(10));
        assert_eq!(list, twin);

        assert_eq!(list.remove_at(3), Ok(40));
        assert_eq!(twin.pop_back(), Ok(40));
        assert_eq!(list, twin);
    }

    #[test]
    fn remove_at_interior_and_bounds() {
        let mut list = List::from_iter([10, 20, 30, 40]);
        assert_eq!(list.remove_at(0), Err(Error::OutOfRange(0)));
        assert_eq!(list.remove_at(5), Err(Error::OutOfRange(5)));
        assert_eq!(list.remove_at(2), Ok(20));
        assert_eq!(list.to_string(), "10 30 40");
        assert_eq!(list.len(), 3);

        assert_eq!(List::new().remove_at(1), Err(Error::Empty));
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = List::from_iter([10, 20, 30]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_back(40);
        assert_eq!(list.to_string(), "40");
    }

    #[test]
    fn nodes_are_released_exactly_once() {
        let before = live_nodes::count();
        let mut list = List::from_iter([10, 20, 30, 40, 50, 60]);
        assert_eq!(live_nodes::count(), before + 6);

        assert!(list.remove_value(30));
        assert_eq!(list.remove_at(2), Ok(20));
        assert_eq!(list.pop_back(), Ok(60));
        assert_eq!(live_nodes::count(), before + 3);

        drop(list);
        assert_eq!(live_nodes::count(), before);
    }

    #[test]
    fn random_lists_match_a_vec_model() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let len = rng.gen_range(5..=20);
            let mut model: Vec<i32> = (0..len).map(|_| rng.gen_range(10..=99)).collect();
            let mut list = List::from_iter(model.iter().copied());

            assert_eq!(list.len(), model.len());
            assert_eq!(list.to_string(), line(model.iter()));
            assert_eq!(list.reversed().to_string(), line(model.iter().rev()));
            assert_eq!(list.every_other().to_string(), line(model.iter().step_by(2)));

            let position = rng.gen_range(1..=model.len());
            assert_eq!(list.remove_at(position), Ok(model.remove(position - 1)));
            assert_eq!(list.to_string(), line(model.iter()));
        }
    }

    fn line<'a>(values: impl Iterator<Item = &'a i32>) -> String {
        values
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
