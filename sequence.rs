use num_traits::{One, WrappingAdd};

/// Position in the sequence. There is no lower bound: every ordinal up to
/// and including 2 is a seed.
pub type Ordinal = i32;

/// Default word the terms are computed in.
pub type Term = u32;

/// Calculates the `n`-th term of the sequence seeded with `1, 1`.
///
/// The computation is the plain recursive decomposition, so it takes
/// exponential time and recurses `n` frames deep. Additions wrap at
/// `Term::MAX`; `term(48)` is already the true value modulo 2^32.
///
/// Nothing guards the recursion depth. An ordinal large enough to exhaust
/// the thread's stack aborts the process, although the running time makes
/// such ordinals unreachable in practice.
pub fn term(n: Ordinal) -> Term {
    term_in(n)
}

/// Same as [`term`], computed in an arbitrary unsigned word `T`.
pub fn term_in<T>(n: Ordinal) -> T
where
    T: WrappingAdd + One,
{
    if n > 2 {
        term_in::<T>(n - 1).wrapping_add(&term_in::<T>(n - 2))
    } else {
        T::one()
    }
}

/// Iterative counterpart of [`term`]: same results, linear time and constant
/// stack.
pub fn term_iterative(n: Ordinal) -> Term {
    term_iterative_in(n)
}

/// Iterative counterpart of [`term_in`].
pub fn term_iterative_in<T>(n: Ordinal) -> T
where
    T: WrappingAdd + One,
{
    let mut prev = T::one();
    let mut curr = T::one();
    // Ordinals below 3 leave the range empty and keep the seed.
    for _ in 2..n {
        let next = curr.wrapping_add(&prev);
        prev = curr;
        curr = next;
    }
    curr
}
