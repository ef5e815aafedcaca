//! This crate provides a doubly-linked list of owned integer nodes with
//! positional insertion and removal, implemented as a cyclic list.
//!
//! The [`List`] holds [`Value`] elements reachable from both ends: pushing
//! and popping at either end take *O*(1) time, while the positional
//! operations ([`List::insert_after`], [`List::remove_at`]) and the value
//! scan ([`List::remove_value`]) walk from the head in *O*(*n*).
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use duplex_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([10, 20, 30, 40]);
//!
//! assert_eq!(list.insert_after(25, 1), Ok(())); // after the element at index 1
//! assert_eq!(list.to_string(), "10 20 25 30 40");
//!
//! assert!(list.remove_value(25));
//! assert_eq!(list.remove_at(4), Ok(40)); // positions are 1-indexed here
//! assert_eq!(list.remove_at(4), Err(Error::OutOfRange(4)));
//!
//! assert_eq!(list.to_string(), "10 20 30");
//! assert_eq!(list.reversed().to_string(), "30 20 10");
//! assert_eq!(list.every_other().to_string(), "10 30");
//! ```
//!
//! # Memory Layout
//!
//! The list is cyclic: a heap-allocated ghost node with no payload closes
//! the ring. `ghost.next` points to the first element and `ghost.prev` to
//! the last, so both ends are one hop away, and an empty list is just the
//! ghost pointing at itself:
//!
//! ```text
//!   ┌──→ Node 0 ──→ Node 1 ──→ ┄┄ ──→ Node n-1 ──→ (Ghost) ──┐
//!   └──────────────────────────────────────────────────────────┘
//!            (next links; the prev links mirror them)
//! ```
//!
//! Each element node is allocated on the heap and owned by the list; a node
//! is released exactly once, on removal or when the list is dropped.
//!
//! # Rendering
//!
//! The list renders through `Display`: head to tail, space-separated, with
//! the fixed text `list is empty` for an empty list. [`List::reversed`] and
//! [`List::every_other`] borrow lazy views with the same contract.
//!
//! ```
//! use duplex_list::List;
//!
//! let mut list = List::new();
//! assert_eq!(list.to_string(), "list is empty");
//!
//! list.push_back(10);
//! list.push_front(5);
//! assert_eq!(list.to_string(), "5 10");
//! assert_eq!(list.reversed().to_string(), "10 5");
//! ```
//!
//! # Errors
//!
//! Operations that can be refused return a `Result` carrying an [`Error`];
//! a refused operation never mutates the list, and nothing panics. Popping
//! an empty list reports [`Error::Empty`], and addressing a nonexistent
//! position reports [`Error::OutOfRange`]. Removing an absent value is a
//! silent no-op ([`List::remove_value`] returns `false`).

#[doc(inline)]
pub use list::display::{EveryOther, Reversed};
#[doc(inline)]
pub use list::error::Error;
#[doc(inline)]
pub use list::{List, Value};

pub mod list;
