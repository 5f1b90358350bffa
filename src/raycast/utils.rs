use glam::Vec2;

/// Per-axis DDA parameters for a ray starting at `start` moving by `dir` per unit `t`.
///
/// Returns `(t_delta, t_max)`. An exactly-zero component never crosses a
/// boundary, so both are set to infinity instead of dividing by zero.
#[inline]
pub fn axis_params(start: f32, dir: f32, step: i32) -> (f32, f32) {
    if dir == 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }

    // Offset within the starting cell, always in [0, 1).
    let offset = start - start.floor();
    let boundary = if step > 0 { 1.0 } else { 0.0 };

    let t_delta = step as f32 / dir;
    let t_max = (boundary - offset) / dir;
    (t_delta, t_max)
}

/// Power-of-two exponent `e` such that the largest component of `dir * 2^e`
/// lies in `[1, 2)`.
///
/// Zero and non-finite directions are left alone and get `0`.
#[inline]
pub fn unit_exponent(dir: Vec2) -> i32 {
    let largest = dir.x.abs().max(dir.y.abs());
    if largest == 0.0 || !largest.is_finite() {
        return 0;
    }
    -floor_log2(largest)
}

/// `floor(log2(x))` for a positive finite `x`, read from its bit pattern.
#[inline]
fn floor_log2(x: f32) -> i32 {
    let bits = x.to_bits();
    let biased = (bits >> 23) as i32;
    if biased == 0 {
        // Subnormal: the value is `bits * 2^-149`.
        31 - bits.leading_zeros() as i32 - 149
    } else {
        biased - 127
    }
}

/// Multiply `dir` by `2^exp`. Exact unless a much smaller component is
/// pushed below the subnormal range when scaling down.
///
/// `exp` may lie anywhere in `[-149, 149]`, beyond the range of a single `f32`
/// power of two, so the factor is applied in two halves.
#[inline]
pub fn scale_exp2(dir: Vec2, exp: i32) -> Vec2 {
    let half = exp / 2;
    dir * exp2i(half) * exp2i(exp - half)
}

/// `2^exp` for an exponent in the normal `f32` range.
#[inline]
fn exp2i(exp: i32) -> f32 {
    debug_assert!((-126..=127).contains(&exp));
    f32::from_bits(((exp + 127) as u32) << 23)
}

/// Step direction for a direction component, with the sign of zero deciding:
/// `+0.0` steps forward and `-0.0` steps backward.
#[inline]
pub fn step_sign(dir: f32) -> i32 {
    if dir.is_sign_negative() { -1 } else { 1 }
}

/// Cell index one step past the last valid cell of an axis of `extent` cells.
#[inline]
pub fn just_out(step: i32, extent: u32) -> i32 {
    if step > 0 { extent as i32 } else { -1 }
}
