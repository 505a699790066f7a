// Dispatcher tests, mostly against the IEEE single format the
// hardware is co-simulated with.

use vpfloat::ops::{self, CmpOp, IntFormat, SignOp};
use vpfloat::{Env, RoundingMode};

const ENV: Env = Env::SINGLE;
const RNE: RoundingMode = RoundingMode::NearestTiesToEven;

const ZERO: [u32; 1] = [0x0000_0000];
const NEG_ZERO: [u32; 1] = [0x8000_0000];
const ONE: [u32; 1] = [0x3F80_0000];
const NEG_ONE: [u32; 1] = [0xBF80_0000];
const TWO: [u32; 1] = [0x4000_0000];
const THREE: [u32; 1] = [0x4040_0000];
const INF: [u32; 1] = [0x7F80_0000];
const QNAN: [u32; 1] = [0x7FC0_0000];
const SNAN: [u32; 1] = [0x7FA0_0000];
const MAX_NORMAL: [u32; 1] = [0x7F7F_FFFF];
const MIN_NORMAL: [u32; 1] = [0x0080_0000];
const MIN_SUBNORMAL: [u32; 1] = [0x0000_0001];
const HALF_VAL: [u32; 1] = [0x3F00_0000];

#[test]
fn add_of_one_and_one_is_exact() {
    let mut out = [0u32; 1];
    let exc = ops::add(&mut out, &ONE, &ONE, RNE, ENV);
    assert_eq!(out, TWO);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn divide_by_zero_raises_dz_and_returns_infinity() {
    let mut out = [0u32; 1];
    let exc = ops::div(&mut out, &ONE, &ZERO, RNE, ENV);
    assert_eq!(out, INF);
    assert_eq!(exc.bits(), 0b1000);
}

#[test]
fn sqrt_of_a_negative_is_invalid() {
    let mut out = [0u32; 1];
    let exc = ops::sqrt(&mut out, &NEG_ONE, RNE, ENV);
    assert_eq!(out, QNAN);
    assert_eq!(exc.bits(), 0b1_0000);
}

#[test]
fn sqrt_rounds_inexact_results() {
    let mut out = [0u32; 1];
    let exc = ops::sqrt(&mut out, &TWO, RNE, ENV);
    assert_eq!(out, [0x3FB5_04F3]);
    assert_eq!(exc.bits(), 1);
}

#[test]
fn overflow_raises_of_and_nx() {
    let mut out = [0u32; 1];
    let exc = ops::add(&mut out, &MAX_NORMAL, &MAX_NORMAL, RNE, ENV);
    assert_eq!(out, INF);
    assert_eq!(exc.bits(), 0b101);
}

#[test]
fn truncating_overflow_saturates_at_the_largest_normal() {
    let mut out = [0u32; 1];
    let exc = ops::add(&mut out, &MAX_NORMAL, &MAX_NORMAL, RoundingMode::ToZero, ENV);
    assert_eq!(out, MAX_NORMAL);
    assert_eq!(exc.bits(), 0b101);
}

#[test]
fn exact_subnormal_results_do_not_raise_underflow() {
    let mut out = [0u32; 1];
    let exc = ops::mul(&mut out, &MIN_NORMAL, &HALF_VAL, RNE, ENV);
    assert_eq!(out, [0x0040_0000]);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn inexact_underflow_raises_uf_and_nx() {
    let mut out = [0u32; 1];
    // half the minimum subnormal: an exact tie, even resolves to zero
    let exc = ops::mul(&mut out, &MIN_SUBNORMAL, &HALF_VAL, RNE, ENV);
    assert_eq!(out, ZERO);
    assert_eq!(exc.bits(), 0b11);

    // directed towards positive it pulls up to the minimum subnormal
    let exc = ops::mul(&mut out, &MIN_SUBNORMAL, &HALF_VAL, RoundingMode::ToPositive, ENV);
    assert_eq!(out, MIN_SUBNORMAL);
    assert_eq!(exc.bits(), 0b11);
}

#[test]
fn addition_and_multiplication_commute() {
    let samples = [ONE, TWO, NEG_ONE, [0x3DCC_CCCD], MAX_NORMAL, MIN_SUBNORMAL, INF];
    for a in &samples {
        for b in &samples {
            let mut ab = [0u32; 1];
            let mut ba = [0u32; 1];
            let ea = ops::add(&mut ab, a, b, RNE, ENV);
            let eb = ops::add(&mut ba, b, a, RNE, ENV);
            assert_eq!(ab, ba);
            assert_eq!(ea, eb);
            let ea = ops::mul(&mut ab, a, b, RNE, ENV);
            let eb = ops::mul(&mut ba, b, a, RNE, ENV);
            assert_eq!(ab, ba);
            assert_eq!(ea, eb);
        }
    }
}

#[test]
fn signaling_nan_inputs_are_invalid_everywhere() {
    let mut out = [0u32; 1];
    assert_eq!(ops::add(&mut out, &SNAN, &ONE, RNE, ENV).bits(), 16);
    assert_eq!(out, QNAN);
    assert_eq!(ops::mul(&mut out, &ONE, &SNAN, RNE, ENV).bits(), 16);
    assert_eq!(ops::sqrt(&mut out, &SNAN, RNE, ENV).bits(), 16);
    assert_eq!(ops::fma(&mut out, &ONE, &ONE, &SNAN, RNE, ENV).bits(), 16);
    let mut slot = [0u32; 1];
    assert_eq!(ops::compare(&mut slot, &SNAN, &ONE, CmpOp::Equal, ENV).bits(), 16);
}

#[test]
fn quiet_nan_inputs_propagate_without_invalid() {
    let mut out = [0u32; 1];
    assert_eq!(ops::add(&mut out, &QNAN, &ONE, RNE, ENV).bits(), 0);
    assert_eq!(out, QNAN);
    assert_eq!(ops::div(&mut out, &QNAN, &ZERO, RNE, ENV).bits(), 0);
    assert_eq!(out, QNAN);
}

#[test]
fn fresh_nans_are_invalid() {
    let mut out = [0u32; 1];
    // 0 * Inf with no NaN input
    let exc = ops::mul(&mut out, &ZERO, &INF, RNE, ENV);
    assert_eq!(out, QNAN);
    assert_eq!(exc.bits(), 16);
}

#[test]
fn fused_zero_times_infinity_with_quiet_nan_addend_is_nv_alone() {
    let mut out = [0u32; 1];
    assert_eq!(ops::fma(&mut out, &ZERO, &INF, &QNAN, RNE, ENV).bits(), 16);
    assert_eq!(out, QNAN);
    assert_eq!(ops::fms(&mut out, &INF, &ZERO, &QNAN, RNE, ENV).bits(), 16);
    assert_eq!(ops::fnma(&mut out, &ZERO, &INF, &QNAN, RNE, ENV).bits(), 16);
    assert_eq!(ops::fnms(&mut out, &INF, &ZERO, &QNAN, RNE, ENV).bits(), 16);
}

#[test]
fn fused_multiply_add_rounds_once() {
    let mut out = [0u32; 1];
    // (1 + 2^-23)^2 - 1 = 2^-22 + 2^-46: exact only when fused
    let one_ulp_up = [0x3F80_0001];
    let exc = ops::fma(&mut out, &one_ulp_up, &one_ulp_up, &NEG_ONE, RNE, ENV);
    assert_eq!(out, [0x3480_0000]);
    assert_eq!(exc.bits(), 1);
}

#[test]
fn negated_fused_operations_combine_as_specified() {
    let mut out = [0u32; 1];
    // fnma: -(2 * 2) + 1 = -3
    let exc = ops::fnma(&mut out, &TWO, &TWO, &ONE, RNE, ENV);
    assert_eq!(out, [0xC040_0000]);
    assert_eq!(exc.bits(), 0);
    // fnms: -(2 * 2) - 1 = -5
    let exc = ops::fnms(&mut out, &TWO, &TWO, &ONE, RNE, ENV);
    assert_eq!(out, [0xC0A0_0000]);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn negated_fused_products_may_exceed_the_format_range() {
    let mut out = [0u32; 1];
    // MAX * 2 overflows on its own, but the addend brings it back
    let exc = ops::fnma(&mut out, &MAX_NORMAL, &TWO, &MAX_NORMAL, RNE, ENV);
    // -(2 * MAX) + MAX = -MAX: exact, no overflow anywhere visible
    assert_eq!(out, [0xFF7F_FFFF]);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn min_and_max_ignore_a_quiet_nan_operand() {
    let mut out = [0u32; 1];
    assert_eq!(ops::fmin(&mut out, &QNAN, &ONE, RNE, ENV).bits(), 0);
    assert_eq!(out, ONE);
    assert_eq!(ops::fmax(&mut out, &ONE, &QNAN, RNE, ENV).bits(), 0);
    assert_eq!(out, ONE);
    // both NaN collapses to the canonical quiet NaN
    assert_eq!(ops::fmin(&mut out, &QNAN, &QNAN, RNE, ENV).bits(), 0);
    assert_eq!(out, QNAN);
}

#[test]
fn min_and_max_signal_on_a_signaling_operand() {
    let mut out = [0u32; 1];
    assert_eq!(ops::fmin(&mut out, &SNAN, &ONE, RNE, ENV).bits(), 16);
    assert_eq!(out, ONE);
}

#[test]
fn min_and_max_order_finite_values() {
    let mut out = [0u32; 1];
    ops::fmin(&mut out, &TWO, &NEG_ONE, RNE, ENV);
    assert_eq!(out, NEG_ONE);
    ops::fmax(&mut out, &TWO, &NEG_ONE, RNE, ENV);
    assert_eq!(out, TWO);
}

#[test]
fn comparisons_order_finite_values() {
    let mut slot = [0u32; 1];
    assert_eq!(ops::compare(&mut slot, &ONE, &TWO, CmpOp::Less, ENV).bits(), 0);
    assert_eq!(slot[0], 1);
    ops::compare(&mut slot, &TWO, &TWO, CmpOp::Less, ENV);
    assert_eq!(slot[0], 0);
    ops::compare(&mut slot, &TWO, &TWO, CmpOp::LessEqual, ENV);
    assert_eq!(slot[0], 1);
    ops::compare(&mut slot, &NEG_ZERO, &ZERO, CmpOp::Equal, ENV);
    assert_eq!(slot[0], 1);
}

#[test]
fn comparison_transitivity_on_finite_values() {
    let samples = [NEG_ONE, NEG_ZERO, ZERO, HALF_VAL, ONE, TWO, THREE, MAX_NORMAL];
    let mut slot = [0u32; 1];
    let le = |a: &[u32; 1], b: &[u32; 1], slot: &mut [u32; 1]| {
        ops::compare(slot, a, b, CmpOp::LessEqual, ENV);
        slot[0] == 1
    };
    for a in &samples {
        for b in &samples {
            for c in &samples {
                if le(a, b, &mut slot) && le(b, c, &mut slot) {
                    assert!(le(a, c, &mut slot));
                }
            }
        }
    }
}

#[test]
fn ordered_comparisons_treat_any_nan_as_invalid() {
    let mut slot = [0u32; 1];
    let exc = ops::compare(&mut slot, &QNAN, &ONE, CmpOp::Less, ENV);
    assert_eq!(slot[0], 0);
    assert_eq!(exc.bits(), 16);
    let exc = ops::compare(&mut slot, &ONE, &QNAN, CmpOp::LessEqual, ENV);
    assert_eq!(slot[0], 0);
    assert_eq!(exc.bits(), 16);
    // equality is quiet about quiet NaNs
    let exc = ops::compare(&mut slot, &QNAN, &ONE, CmpOp::Equal, ENV);
    assert_eq!(slot[0], 0);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn sign_injection_identities() {
    let mut out = [0u32; 1];
    ops::sign_inject(&mut out, &ONE, &NEG_ONE, SignOp::Copy, ENV);
    assert_eq!(out, NEG_ONE);
    ops::sign_inject(&mut out, &ONE, &NEG_ONE, SignOp::Inverted, ENV);
    assert_eq!(out, ONE);
    ops::sign_inject(&mut out, &NEG_ONE, &NEG_ONE, SignOp::Xor, ENV);
    assert_eq!(out, ONE);
    ops::sign_inject(&mut out, &NEG_ONE, &ONE, SignOp::Keep, ENV);
    assert_eq!(out, NEG_ONE);
    // passthrough is the identity
    let exc = ops::sign_inject(&mut out, &SNAN, &SNAN, SignOp::Keep, ENV);
    assert_eq!(out, SNAN);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn classify_is_one_hot() {
    let mut slot = [0u32; 1];
    let vectors: [([u32; 1], u32); 10] = [
        ([0xFF80_0000], 1 << 0),
        (NEG_ONE, 1 << 1),
        ([0x8000_0001], 1 << 2),
        (NEG_ZERO, 1 << 3),
        (ZERO, 1 << 4),
        (MIN_SUBNORMAL, 1 << 5),
        (ONE, 1 << 6),
        (INF, 1 << 7),
        (SNAN, 1 << 8),
        (QNAN, 1 << 9),
    ];
    for (input, expected) in vectors {
        let exc = ops::fclass(&mut slot, &input, ENV);
        assert_eq!(slot[0], expected, "input {:#010x}", input[0]);
        assert_eq!(exc.bits(), 0);
    }
}

#[test]
fn float_to_int_truncates_and_flags_inexact() {
    let mut out = [0u32; 2];
    // 3.7 towards zero
    let exc = ops::cvt_f2i(&mut out, &[0x406C_CCCD], true, IntFormat::Int32, RoundingMode::ToZero, ENV);
    assert_eq!(out, [3, 0]);
    assert_eq!(exc.bits(), 1);
}

#[test]
fn float_to_int_of_nan_saturates_and_is_invalid() {
    let mut out = [0u32; 2];
    let exc = ops::cvt_f2i(&mut out, &QNAN, true, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, [0x7FFF_FFFF, 0]);
    assert_eq!(exc.bits(), 16);
    let exc = ops::cvt_f2i(&mut out, &SNAN, false, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, [0xFFFF_FFFF, 0]);
    assert_eq!(exc.bits(), 16);
}

#[test]
fn float_to_int_clamps_out_of_range_values() {
    let mut out = [0u32; 2];
    // -2^40 into a signed 32-bit register
    let exc = ops::cvt_f2i(&mut out, &[0xD380_0000], true, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, [0x8000_0000, 0xFFFF_FFFF]);
    assert_eq!(exc.bits(), 16);
    // -1.0 into an unsigned 32-bit register
    let exc = ops::cvt_f2i(&mut out, &NEG_ONE, false, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, [0, 0]);
    assert_eq!(exc.bits(), 16);
    // 2^40 into a signed 64-bit register fits exactly
    let exc = ops::cvt_f2i(&mut out, &[0x5380_0000], true, IntFormat::Int64, RNE, ENV);
    assert_eq!(out, [0, 0x100]);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn unsigned_32_bit_results_are_zero_extended() {
    let mut out = [0u32; 2];
    // 3e9 is exact in single and fits unsigned but not signed
    let exc = ops::cvt_f2i(&mut out, &[0x4F32_D05E], false, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, [0xB2D0_5E00, 0]);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn int_to_float_rounds_to_the_format() {
    let mut out = [0u32; 1];
    // 2^24 + 1 is the first integer single cannot hold
    let exc = ops::cvt_i2f(&mut out, &[0x0100_0001, 0], true, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, [0x4B80_0000]);
    assert_eq!(exc.bits(), 1);

    let exc = ops::cvt_i2f(&mut out, &[0xFFFF_FFFF, 0], true, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, NEG_ONE);
    assert_eq!(exc.bits(), 0);

    let exc = ops::cvt_i2f(&mut out, &[0xFFFF_FFFF, 0], false, IntFormat::Int32, RNE, ENV);
    assert_eq!(out, [0x4F80_0000]);
    assert_eq!(exc.bits(), 1);
}

#[test]
fn int64_to_float_reads_both_words() {
    let mut out = [0u32; 1];
    // 2^40
    let exc = ops::cvt_i2f(&mut out, &[0, 0x100], true, IntFormat::Int64, RNE, ENV);
    assert_eq!(out, [0x5380_0000]);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn format_conversion_preserves_exact_values() {
    let mut out = [0u32; 1];
    // 1.5 from single to half
    let exc = ops::cvt_f2f(&mut out, &[0x3FC0_0000], RNE, Env::SINGLE, Env::HALF);
    assert_eq!(out[0], 0x3E00);
    assert_eq!(exc.bits(), 0);
    // and back up, still exact
    let exc = ops::cvt_f2f(&mut out, &[0x3E00], RNE, Env::HALF, Env::SINGLE);
    assert_eq!(out[0], 0x3FC0_0000);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn format_conversion_overflows_into_the_narrow_format() {
    let mut out = [0u32; 1];
    // 2^20 exceeds half's emax of 15
    let exc = ops::cvt_f2f(&mut out, &[0x4980_0000], RNE, Env::SINGLE, Env::HALF);
    assert_eq!(out[0], 0x7C00);
    assert_eq!(exc.bits(), 0b101);
}

#[test]
fn format_conversion_builds_subnormals() {
    let mut out = [0u32; 1];
    // 2^-17 is normal in single, subnormal in half
    let exc = ops::cvt_f2f(&mut out, &[0x3700_0000], RNE, Env::SINGLE, Env::HALF);
    assert_eq!(out[0], 0x0080);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn format_conversion_propagates_nan_policy() {
    let mut out = [0u32; 1];
    let exc = ops::cvt_f2f(&mut out, &SNAN, RNE, Env::SINGLE, Env::HALF);
    assert_eq!(out[0], 0x7E00);
    assert_eq!(exc.bits(), 16);
    let exc = ops::cvt_f2f(&mut out, &QNAN, RNE, Env::SINGLE, Env::HALF);
    assert_eq!(out[0], 0x7E00);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn move_to_integer_replicates_the_sign_through_upper_chunks() {
    let mut out = [0u32; 2];
    ops::mv_f2x(&mut out, &NEG_ONE, ENV, 2);
    assert_eq!(out, [0xBF80_0000, 0xFFFF_FFFF]);
    ops::mv_f2x(&mut out, &ONE, ENV, 2);
    assert_eq!(out, [0x3F80_0000, 0]);
}

#[test]
fn move_to_integer_copies_64_bit_formats_verbatim() {
    let mut out = [0u32; 2];
    ops::mv_f2x(&mut out, &[0x1234_5678, 0xF000_0001], Env::DOUBLE, 2);
    assert_eq!(out, [0x1234_5678, 0xF000_0001]);
}

#[test]
fn double_format_spans_two_words() {
    let env = Env::DOUBLE;
    let one = [0u32, 0x3FF0_0000];
    let mut out = [0u32; 2];
    let exc = ops::add(&mut out, &one, &one, RNE, env);
    assert_eq!(out, [0, 0x4000_0000]);
    assert_eq!(exc.bits(), 0);

    // 1 + 2^-52: the significand crosses the word boundary
    let one_ulp = [0x0000_0001, 0x3FF0_0000];
    let exc = ops::sub(&mut out, &one_ulp, &one, RNE, env);
    assert_eq!(out, [0, 0x3CB0_0000]);
    assert_eq!(exc.bits(), 0);
}

#[test]
fn half_format_arithmetic() {
    let env = Env::HALF;
    let mut out = [0u32; 1];
    // 1.0 + 1.0
    let exc = ops::add(&mut out, &[0x3C00], &[0x3C00], RNE, env);
    assert_eq!(out[0], 0x4000);
    assert_eq!(exc.bits(), 0);
    // 1.0 / 3.0 is inexact
    let exc = ops::div(&mut out, &[0x3C00], &[0x4200], RNE, env);
    assert_eq!(out[0], 0x3555);
    assert_eq!(exc.bits(), 1);
}
