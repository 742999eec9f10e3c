pub mod candidates;
pub mod priority_queue;

pub use candidates::CandidateSet;
pub use priority_queue::MinHeap;
