/// Checks that a condition holds, terminating the process if it does not.
///
/// Behaves like [`check`](crate::check()) but takes a `format!`-style message
/// which is only evaluated on the failing path. Without a message, the
/// stringified condition is reported instead.
///
/// ```
/// let slots: &[u32] = &[3, 7];
///
/// failfast::check!(slots.len() >= 2);
/// failfast::check!(!slots.is_empty(), "expected slots, got {slots:?}");
/// ```
#[macro_export]
macro_rules! check {
    ( $condition:expr $(,)? ) => {
        // Not routed through the message arm: the stringified condition may
        // itself contain braces, which `format_args!` would interpret.
        if $crate::unlikely(!$condition) {
            $crate::__check_failed(::core::format_args!(
                "{}",
                ::core::stringify!($condition),
            ));
        }
    };
    ( $condition:expr, $( $msg:tt )+ ) => {
        if $crate::unlikely(!$condition) {
            $crate::__check_failed(::core::format_args!($( $msg )+));
        }
    };
}

/// Terminates the process unconditionally.
///
/// Behaves like [`fatal`](crate::fatal()) but takes a `format!`-style message.
///
/// ```no_run
/// fn read_block(remaining: u64) -> u64 {
///     if remaining == 0 {
///         failfast::fatal!("disk full after {remaining} bytes");
///     }
///
///     remaining - 1
/// }
/// ```
#[macro_export]
macro_rules! fatal {
    ( $( $msg:tt )+ ) => {
        $crate::__fatal(::core::format_args!($( $msg )+))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn passing_check_skips_message_arguments() {
        let mut evaluated = false;

        check!(1 < 2, "{}", {
            evaluated = true;
            "unreachable message"
        });

        assert!(!evaluated);
    }

    #[test]
    fn trailing_comma_is_accepted() {
        check!(true,);
        check!(i32::MAX > 0, "max is {}", i32::MAX);
    }
}
