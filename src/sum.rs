use crate::config::Config;
use crate::error::{Error, Overflow};
use crate::reduce::{parallel_fold_tune, try_parallel_fold_tune};
use crate::sequence::Sequence;
use num_traits::identities::Zero;
use num_traits::CheckedAdd;
use std::ops::AddAssign;

// parallel sum, starting from init
// type of items must implement Zero and AddAssign
pub fn parallel_sum<S>(seq: &S, init: S::Item) -> S::Item
where
    S: Sequence + ?Sized,
    for<'t> S::Item: AddAssign<&'t S::Item>,
    S::Item: Send,
    S::Item: Zero,
{
    parallel_sum_tune(seq, init, &Config::default())
}

// parallel sum, starting from init
pub fn parallel_sum_tune<S>(seq: &S, init: S::Item, config: &Config) -> S::Item
where
    S: Sequence + ?Sized,
    for<'t> S::Item: AddAssign<&'t S::Item>,
    S::Item: Send,
    S::Item: Zero,
{
    parallel_fold_tune(
        seq,
        init,
        &<S::Item as Zero>::zero,
        &|acc: &mut S::Item, x: &S::Item| {
            *acc += x;
        },
        &|acc: &mut S::Item, partial: S::Item| {
            *acc += &partial;
        },
        config,
    )
}

// parallel sum that fails instead of wrapping around on overflow
pub fn checked_parallel_sum<S>(seq: &S, init: S::Item) -> Result<S::Item, Error<Overflow>>
where
    S: Sequence + ?Sized,
    S::Item: CheckedAdd + Zero + Send,
{
    checked_parallel_sum_tune(seq, init, &Config::default())
}

// parallel sum that fails instead of wrapping around on overflow
pub fn checked_parallel_sum_tune<S>(seq: &S, init: S::Item, config: &Config) -> Result<S::Item, Error<Overflow>>
where
    S: Sequence + ?Sized,
    S::Item: CheckedAdd + Zero + Send,
{
    try_parallel_fold_tune(
        seq,
        init,
        &<S::Item as Zero>::zero,
        &|acc: &mut S::Item, x: &S::Item| -> Result<(), Overflow> {
            *acc = acc.checked_add(x).ok_or(Overflow)?;
            Ok(())
        },
        &|acc: &mut S::Item, partial: S::Item| -> Result<(), Overflow> {
            *acc = acc.checked_add(&partial).ok_or(Overflow)?;
            Ok(())
        },
        config,
    )
}
