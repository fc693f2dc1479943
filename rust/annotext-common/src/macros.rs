/// Unwraps a `Result<T, E>` inside a function returning `Option<Result<T, E>>`.
///
/// - `Ok(t)` yields `t`.
/// - `Err(e)` returns `Some(Err(e))` from the enclosing function.
///
/// Meant for `Iterator::next()` implementations over fallible token sources,
/// where the iterator item is `Result<Token>`.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err));
            }
        }
    };
}
