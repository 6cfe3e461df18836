use crate::combine::combine;
use crate::config::Config;
use crate::dispatch::{discard_all, dispatch, fold_range};
use crate::error::Error;
use crate::partition::{plan, Plan};
use crate::sequence::Sequence;
use std::convert::Infallible;
use std::ops::Range;
use std::panic;

/// Reduces `seq` in parallel, starting from `init`.
///
/// Each slice is folded with `fold_fn` from a fresh `identity()`, and the
/// partial results are then merged into `init` with `reduce_fn`, in slice
/// order. The result equals a sequential left-to-right fold as long as the
/// operation is associative.
///
/// Returns the first error raised by `fold_fn` or `reduce_fn`, after all
/// worker threads have finished.
pub fn try_parallel_fold_tune<S, T, X, I, F, R>(
    seq: &S,
    init: T,
    identity: &I,
    fold_fn: &F,
    reduce_fn: &R,
    config: &Config,
) -> Result<T, Error<X>>
where
    S: Sequence + ?Sized,
    T: Send,
    X: Send,
    I: Fn() -> T + Sync,
    F: Fn(&mut T, &S::Item) -> Result<(), X> + Sync,
    R: Fn(&mut T, T) -> Result<(), X>,
{
    let len: usize = seq.len();
    match plan(len, config) {
        Plan::Empty => Ok(init),
        Plan::Sequential => fold_range(seq, 0..len, init, fold_fn).map_err(|source| Error::Slice {
            index: 0,
            range: 0..len,
            source,
        }),
        Plan::Parallel(slices) => {
            let (leading, last) = slices.split_at(slices.len() - 1);
            let inline: Range<usize> = last[0].clone();
            let inline_index: usize = leading.len();

            crossbeam::scope(|scope| {
                let tasks = dispatch(scope, seq, leading, identity, fold_fn);

                // the calling thread takes the last slice while workers run
                let partial: T = match fold_range(seq, inline.clone(), identity(), fold_fn) {
                    Ok(partial) => partial,
                    Err(source) => {
                        discard_all(tasks);
                        return Err(Error::Slice {
                            index: inline_index,
                            range: inline.clone(),
                            source,
                        });
                    }
                };

                combine(init, tasks, partial, reduce_fn)
            })
            .unwrap_or_else(|payload| Err(Error::Panicked(payload)))
        }
    }
}

pub fn try_parallel_fold<S, T, X, I, F, R>(
    seq: &S,
    init: T,
    identity: &I,
    fold_fn: &F,
    reduce_fn: &R,
) -> Result<T, Error<X>>
where
    S: Sequence + ?Sized,
    T: Send,
    X: Send,
    I: Fn() -> T + Sync,
    F: Fn(&mut T, &S::Item) -> Result<(), X> + Sync,
    R: Fn(&mut T, T) -> Result<(), X>,
{
    try_parallel_fold_tune(seq, init, identity, fold_fn, reduce_fn, &Config::default())
}

/// Infallible variant of [`try_parallel_fold_tune`]. A panic in a worker
/// thread is resumed on the calling thread.
pub fn parallel_fold_tune<S, T, I, F, R>(
    seq: &S,
    init: T,
    identity: &I,
    fold_fn: &F,
    reduce_fn: &R,
    config: &Config,
) -> T
where
    S: Sequence + ?Sized,
    T: Send,
    I: Fn() -> T + Sync,
    F: Fn(&mut T, &S::Item) + Sync,
    R: Fn(&mut T, T),
{
    let result: Result<T, Error<Infallible>> = try_parallel_fold_tune(
        seq,
        init,
        identity,
        &|acc: &mut T, item: &S::Item| {
            fold_fn(acc, item);
            Ok(())
        },
        &|acc: &mut T, partial: T| {
            reduce_fn(acc, partial);
            Ok(())
        },
        config,
    );
    match result {
        Ok(value) => value,
        Err(Error::Panicked(payload)) => panic::resume_unwind(payload),
        Err(Error::Slice { source, .. }) | Err(Error::Combine { source }) => match source {},
    }
}

pub fn parallel_fold<S, T, I, F, R>(seq: &S, init: T, identity: &I, fold_fn: &F, reduce_fn: &R) -> T
where
    S: Sequence + ?Sized,
    T: Send,
    I: Fn() -> T + Sync,
    F: Fn(&mut T, &S::Item) + Sync,
    R: Fn(&mut T, T),
{
    parallel_fold_tune(seq, init, identity, fold_fn, reduce_fn, &Config::default())
}
