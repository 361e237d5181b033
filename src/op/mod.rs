mod assoc;
mod chunk;
mod compact;
mod cycle;
mod distinct;
mod each;
mod reject;

pub(crate) use assoc::assoc;
pub use chunk::Chunk;
pub use compact::Compact;
pub(crate) use cycle::{cycle_each, cycle_each_until};
pub use distinct::DistinctBy;
pub use each::{Each, EachWithIndex};
pub use reject::Reject;
