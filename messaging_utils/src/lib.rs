pub use messaging_utils_derive::trace_instrument;

pub mod patch;

mod macros;

pub trait Apply {
    /// Passes `self` through the function `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use messaging_utils::Apply;
    /// fn double(x: i32) -> i32 {
    ///     x * 2
    /// }
    /// assert_eq!(3.apply(double).apply(double), 12);
    /// ```
    fn apply(self, f: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        f(self)
    }

    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use messaging_utils::Apply;
    /// fn add_option(a: i32, b: Option<i32>) -> i32 {
    ///     a.apply_map(b, |slf, arg| slf + arg)
    /// }
    /// assert_eq!(add_option(1, None), 1);
    /// assert_eq!(add_option(1, Some(2)), 3);
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
