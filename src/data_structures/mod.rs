pub mod partial_sorting;
pub mod priority_queue;

pub use partial_sorting::PartialSortingStructure;
pub use priority_queue::BinaryHeapWrapper;
