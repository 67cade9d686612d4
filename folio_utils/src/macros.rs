/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// On failure the value is printed using its [`Debug`](core::fmt::Debug)
/// representation.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => (),
            ref val => ::core::panic!(
                "Assertion failed: Value {:?} did not match pattern {}",
                val,
                ::core::stringify!($pat $(if $guard)?),
            ),
        }
    };
}
