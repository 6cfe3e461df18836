use crate::dispatch::{discard_all, Task};
use crate::error::Error;
use crate::macros::log_warn;

// collect the partial results in slice order, then fold them into the initial value
pub(crate) fn combine<T, X, R>(
    init: T,
    tasks: Vec<Task<'_, T, X>>,
    inline: T,
    reduce_fn: &R,
) -> Result<T, Error<X>>
where
    R: Fn(&mut T, T) -> Result<(), X>,
{
    let mut partials: Vec<T> = Vec::with_capacity(tasks.len() + 1);
    let mut tasks = tasks.into_iter();
    while let Some(task) = tasks.next() {
        match task.join() {
            Ok(partial) => partials.push(partial),
            Err(err) => {
                log_warn!("a dispatched slice failed: {}", err);
                discard_all(tasks);
                return Err(err);
            }
        }
    }
    partials.push(inline);

    // the initial value takes part in this fold only
    let mut acc: T = init;
    for partial in partials {
        reduce_fn(&mut acc, partial).map_err(|source| Error::Combine { source })?;
    }
    Ok(acc)
}
