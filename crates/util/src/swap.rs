use std::ops::BitXorAssign;

/// Swap two integers without a temporary, returning `[b, a]`.
///
/// Uses the XOR swap, which is only sound for fixed-width integers. Floats
/// do not implement `BitXorAssign`, so they are rejected at compile time;
/// use [`std::mem::swap`] for them.
///
/// # Examples
///
/// ```
/// use helpkit_util::exchange_number;
///
/// assert_eq!(exchange_number(2, 100), [100, 2]);
/// ```
pub fn exchange_number<T>(mut a: T, mut b: T) -> [T; 2]
where
    T: BitXorAssign + Copy,
{
    a ^= b;
    b ^= a;
    a ^= b;
    [a, b]
}
