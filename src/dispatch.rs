use crate::error::Error;
use crate::macros::log_trace;
use crate::sequence::Sequence;
use crossbeam::thread::{Scope, ScopedJoinHandle};
use std::ops::Range;

/// A slice being reduced on a worker thread.
pub(crate) struct Task<'scope, T, X> {
    index: usize,
    range: Range<usize>,
    handle: ScopedJoinHandle<'scope, Result<T, X>>,
}

impl<'scope, T, X> Task<'scope, T, X> {
    // block until the partial result of this slice is ready
    pub(crate) fn join(self) -> Result<T, Error<X>> {
        match self.handle.join() {
            Ok(Ok(partial)) => Ok(partial),
            Ok(Err(source)) => Err(Error::Slice {
                index: self.index,
                range: self.range,
                source,
            }),
            Err(payload) => Err(Error::Panicked(payload)),
        }
    }

    // wait for the worker to finish, dropping its result or panic
    pub(crate) fn discard(self) {
        let _ = self.handle.join();
    }
}

// join every remaining worker so the scope never sees an unjoined panic
pub(crate) fn discard_all<'scope, T, X>(tasks: impl IntoIterator<Item = Task<'scope, T, X>>) {
    tasks.into_iter().for_each(Task::discard);
}

// reduce a range of the sequence, starting from the given seed
pub(crate) fn fold_range<S, T, X, F>(seq: &S, range: Range<usize>, mut acc: T, fold_fn: &F) -> Result<T, X>
where
    S: Sequence + ?Sized,
    F: Fn(&mut T, &S::Item) -> Result<(), X>,
{
    seq.try_visit(range, |item| fold_fn(&mut acc, item))?;
    Ok(acc)
}

// spawn one worker per slice, each seeded with the identity
pub(crate) fn dispatch<'env, 'scope, S, T, X, I, F>(
    scope: &'scope Scope<'env>,
    seq: &'env S,
    slices: &[Range<usize>],
    identity: &'env I,
    fold_fn: &'env F,
) -> Vec<Task<'scope, T, X>>
where
    S: Sequence + ?Sized,
    T: Send + 'env,
    X: Send + 'env,
    I: Fn() -> T + Sync,
    F: Fn(&mut T, &S::Item) -> Result<(), X> + Sync,
{
    slices
        .iter()
        .enumerate()
        .map(|(index, range)| {
            log_trace!("dispatching slice {} ({:?})", index, range);
            let slice: Range<usize> = range.clone();
            let handle = scope.spawn(move |_| fold_range(seq, slice, identity(), fold_fn));
            Task {
                index,
                range: range.clone(),
                handle,
            }
        })
        .collect()
}
