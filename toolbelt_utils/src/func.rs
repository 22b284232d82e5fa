//! Calling functions a given number of times.

/// Calls the given function `n` times in sequence on the calling thread.
pub fn repeat(mut function: impl FnMut(), n: usize) {
    log::trace!("Repeating function {n} times");
    for _ in 0..n {
        function();
    }
}

/// Calls the given function `n` times in sequence, passing a clone of
/// `argument` to every call.
pub fn repeat_with_argument<T: Clone>(mut function: impl FnMut(T), argument: T, n: usize) {
    log::trace!("Repeating function with argument {n} times");
    for _ in 0..n {
        function(argument.clone());
    }
}

/// Calls the given function `n` times, passing the index of the current
/// repetition. Indices are passed in ascending order starting at zero.
pub fn repeat_indexed(mut function: impl FnMut(usize), n: usize) {
    log::trace!("Repeating indexed function {n} times");
    for idx in 0..n {
        function(idx);
    }
}
