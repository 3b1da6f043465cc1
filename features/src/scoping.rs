//! Binding scope rules.
//!
//! A function-scoped binding (`var`) is visible to the whole function body, so
//! a value assigned inside a nested block is still readable after the block.
//! A block-scoped binding (`let`) exists only inside its block; an inner
//! binding with the same name shadows the outer one and disappears with the
//! block. A constant must be initialised and cannot be reassigned.

/// A constant binding: initialised once, never reassigned.
pub const CONSTANT: i32 = 5;

/// Binding declared at function level, assigned in an inner block, read after it.
#[must_use]
pub fn function_scoped() -> i32 {
    let b;
    {
        b = 2;
    }
    b
}

/// The inner `d` shadows the outer one only until its block ends.
#[must_use]
pub fn block_scoped() -> (i32, i32) {
    let d = 3;
    let inner = {
        let d = 4;
        d
    };
    (inner, d)
}

/// A hoisted binding read before its assignment holds no value yet; the
/// same binding read afterwards holds the assigned one.
#[must_use]
pub fn read_before_assignment() -> (Option<i32>, Option<i32>) {
    let mut a: Option<i32> = None;
    let before = a;
    a = Some(1);
    (before, a)
}
