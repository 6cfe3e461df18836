// parallel reduction over ordered sequences
// - parallel fold, with a fallible variant
// - parallel sum, with an overflow-checked variant
//
// Ranges shorter than the sequential threshold are reduced on the calling
// thread. Longer ranges are cut into at most `max_parallelism` slices of at
// least `sequential_threshold` items: all slices but the last are reduced on
// scoped worker threads, the last one on the calling thread, and the partial
// results are then folded into the initial value in slice order.

mod combine;
mod config;
mod dispatch;
mod error;
mod macros;
mod partition;
mod reduce;
mod sequence;
mod sum;

pub use config::{default_parallelism, Config, FALLBACK_PARALLELISM, SEQUENTIAL_THRESHOLD};
pub use error::{ConfigError, Error, Overflow};
pub use partition::{plan, Plan};
pub use reduce::{parallel_fold, parallel_fold_tune, try_parallel_fold, try_parallel_fold_tune};
pub use sequence::Sequence;
pub use sum::{checked_parallel_sum, checked_parallel_sum_tune, parallel_sum, parallel_sum_tune};
