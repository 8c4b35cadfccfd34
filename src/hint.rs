//! Branch layout is steered through an empty `#[cold]` function: calling it
//! on the unexpected branch marks that branch as cold, so the code generator
//! keeps the expected branch as the fall-through path. The boolean value is
//! never altered.

#[inline]
#[cold]
const fn cold() {}

/// Hints at the compiler that the condition is likely `true`.
///
/// Returns the condition unchanged.
#[inline]
#[must_use]
pub const fn likely(b: bool) -> bool {
    if !b {
        cold();
    }

    b
}

/// Hints at the compiler that the condition is likely `false`.
///
/// Returns the condition unchanged.
#[inline]
#[must_use]
pub const fn unlikely(b: bool) -> bool {
    if b {
        cold();
    }

    b
}
