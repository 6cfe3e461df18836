use crate::config::Config;
use crate::macros::log_debug;
use std::ops::Range;

/// How a range of a given length gets reduced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Nothing to reduce, the initial value is the result.
    Empty,
    /// Shorter than the sequential threshold, reduced on the calling thread.
    Sequential,
    /// Contiguous slices covering the whole range. All slices but the last
    /// are dispatched to worker threads; the last one is reduced inline.
    Parallel(Vec<Range<usize>>),
}

impl Plan {
    /// Number of worker threads this plan spawns.
    pub fn dispatched_tasks(&self) -> usize {
        match self {
            Plan::Parallel(slices) => slices.len().saturating_sub(1),
            Plan::Empty | Plan::Sequential => 0,
        }
    }

    pub fn slices(&self) -> &[Range<usize>] {
        match self {
            Plan::Parallel(slices) => slices,
            Plan::Empty | Plan::Sequential => &[],
        }
    }
}

// decide between sequential and parallel execution, and compute slice boundaries
pub fn plan(len: usize, config: &Config) -> Plan {
    let threshold: usize = config.sequential_threshold();
    if len == 0 {
        return Plan::Empty;
    }
    if len < threshold {
        log_debug!("reducing {} items sequentially (threshold: {})", len, threshold);
        return Plan::Sequential;
    }

    // no slice smaller than the threshold, and no more slices than cores
    let needed: usize = (len / threshold).min(config.max_parallelism());
    let chunk: usize = len / needed;

    // the last slice absorbs the remainder of the division
    let mut slices: Vec<Range<usize>> = Vec::with_capacity(needed);
    let mut begin: usize = 0;
    for _ in 0..needed - 1 {
        slices.push(begin..begin + chunk);
        begin += chunk;
    }
    slices.push(begin..len);

    log_debug!(
        "reducing {} items in {} slices of {} (inline slice: {:?})",
        len,
        needed,
        chunk,
        slices.last()
    );
    Plan::Parallel(slices)
}
