//! Graph algorithms beyond plain traversal: the indexed heap and Prim.

pub mod heap;
pub mod prim;

pub use heap::{HeapEntry, IndexedMinHeap};
pub use prim::minimum_spanning_tree;
