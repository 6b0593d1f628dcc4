//! Small standalone collections.
//!
//! - [`LinkedList`] and [`DoublyLinkedList`]: tail insertion, head removal
//! - [`Queue`] and [`Stack`]: ordered functions invoked with shared
//!   arguments, each call guarded into a `Result`
//! - [`List`]: an immutable sequence whose operations return new lists
//! - [`Range`]: a compacting sequence built by [`range`], [`date_range`] or a
//!   custom [`range_factory`]
//! - [`Tuple`]: a frozen sequence
//!
//! # Examples
//!
//! ```rust
//! use tagrail::{list, queue, stack};
//!
//! assert_eq!(list![1, 2, 3].filter(|value| *value > 1).to_vec(), vec![2, 3]);
//!
//! let first = |x: i32| x + 1;
//! let second = |x: i32| x * 10;
//! assert_eq!(queue![first, second].call(2), vec![Ok(3), Ok(20)]);
//! assert_eq!(stack![first, second].call(2), vec![Ok(20), Ok(3)]);
//! ```

mod callable;
mod doubly_linked_list;
mod linked_list;
mod list;
mod queue;
mod range;
mod stack;
mod tuple;

pub use callable::Callable;
pub use doubly_linked_list::DoublyLinkedList;
pub use linked_list::LinkedList;
pub use list::List;
pub use queue::Queue;
pub use range::{Range, date_range, range, range_factory};
pub use stack::Stack;
pub use tuple::Tuple;
