//! 借鉴Ruby的惰性序列操作：`reject`、`chunk`、`assoc`、`compact`、`cycle`、`each`、`distinct`。
//!
//! 所有操作通过[`SeqExt`]提供给任意迭代器，也可以通过[`Pipe`]在运行时组装。
//!
//! ```
//! use rseq::SeqExt;
//!
//! let names = vec![Some("ruby"), None, Some("rust"), Some("Ruby"), None];
//! let res: Vec<_> = names.into_iter().compact().distinct_by(|s| s.to_lowercase()).collect();
//! assert_eq!(res, vec!["ruby", "rust"]);
//! ```

mod config;
mod err;
mod ext;
mod op;
mod pipe;

pub use config::Config;
pub use err::SeqErr;
pub use ext::SeqExt;
pub use op::{Chunk, Compact, DistinctBy, Each, EachWithIndex, Reject};
pub use pipe::Pipe;

pub type SeqRes<T> = Result<T, SeqErr>;
