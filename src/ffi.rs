/*!
Entry points for the HDL simulator.

Each function mirrors one co-simulation call: raw little-endian word
pointers for the operands and the result, the integer rounding-mode
code from the wire, and a pointer to the format descriptor. The
return value is the packed exception vector of
[`Exceptions::bits`][crate::Exceptions::bits].

A handful of calls multiplex sub-operations on the rounding-mode
code, preserving the wire convention: `vp_fcmp` selects the
predicate, `vp_fmin_max` the selection, `vp_fsgnj` the sign transfer.

# Safety

Every function dereferences the pointers it is given. The caller must
keep them valid, correctly sized for the descriptor
(`env.nwords()` words per datum, two words per integer slot) and
non-overlapping.
*/

use std::slice;

use crate::env::Env;
use crate::ops::{self, CmpOp, IntFormat, SignOp};
use crate::round::RoundingMode;

unsafe fn operand<'a>(ptr: *const u32, env: Env) -> &'a [u32] {
    slice::from_raw_parts(ptr, env.nwords())
}

unsafe fn result<'a>(ptr: *mut u32, env: Env) -> &'a mut [u32] {
    slice::from_raw_parts_mut(ptr, env.nwords())
}

macro_rules! binary_entry {
    ($name:ident, $op:path) => {
        /// See the module documentation for the calling convention.
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            result: *mut u32,
            op1: *const u32,
            op2: *const u32,
            rounding_mode: i32,
            env: *const Env,
        ) -> i32 {
            let env = *env;
            let rnd = RoundingMode::from_wire(rounding_mode);
            $op(
                self::result(result, env),
                operand(op1, env),
                operand(op2, env),
                rnd,
                env,
            )
            .bits() as i32
        }
    };
}

binary_entry!(vp_fadd, ops::add);
binary_entry!(vp_fsub, ops::sub);
binary_entry!(vp_fmul, ops::mul);
binary_entry!(vp_fdiv, ops::div);

macro_rules! fused_entry {
    ($name:ident, $op:path) => {
        /// See the module documentation for the calling convention.
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            result: *mut u32,
            op1: *const u32,
            op2: *const u32,
            op3: *const u32,
            rounding_mode: i32,
            env: *const Env,
        ) -> i32 {
            let env = *env;
            let rnd = RoundingMode::from_wire(rounding_mode);
            $op(
                self::result(result, env),
                operand(op1, env),
                operand(op2, env),
                operand(op3, env),
                rnd,
                env,
            )
            .bits() as i32
        }
    };
}

fused_entry!(vp_fma, ops::fma);
fused_entry!(vp_fms, ops::fms);
fused_entry!(vp_fnma, ops::fnma);
fused_entry!(vp_fnms, ops::fnms);

/// See the module documentation for the calling convention.
#[no_mangle]
pub unsafe extern "C" fn vp_fsqrt(
    result: *mut u32,
    op: *const u32,
    rounding_mode: i32,
    env: *const Env,
) -> i32 {
    let env = *env;
    let rnd = RoundingMode::from_wire(rounding_mode);
    ops::sqrt(self::result(result, env), operand(op, env), rnd, env).bits() as i32
}

/// The predicate rides on the rounding-mode code: 0 is
/// less-or-equal, 1 is less-than, anything else equality. The
/// boolean outcome lands in word 0 of `result`.
#[no_mangle]
pub unsafe extern "C" fn vp_fcmp(
    result: *mut u32,
    op1: *const u32,
    op2: *const u32,
    rounding_mode: i32,
    env: *const Env,
) -> i32 {
    let env = *env;
    let op = match rounding_mode {
        0 => CmpOp::LessEqual,
        1 => CmpOp::Less,
        _ => CmpOp::Equal,
    };
    ops::compare(
        slice::from_raw_parts_mut(result, 1),
        operand(op1, env),
        operand(op2, env),
        op,
        env,
    )
    .bits() as i32
}

/// The selection rides on the rounding-mode code: 0 is min, anything
/// else max.
#[no_mangle]
pub unsafe extern "C" fn vp_fmin_max(
    result: *mut u32,
    op1: *const u32,
    op2: *const u32,
    rounding_mode: i32,
    env: *const Env,
) -> i32 {
    let env = *env;
    let rnd = RoundingMode::from_wire(rounding_mode);
    let out = self::result(result, env);
    let exc = if rounding_mode == 0 {
        ops::fmin(out, operand(op1, env), operand(op2, env), rnd, env)
    } else {
        ops::fmax(out, operand(op1, env), operand(op2, env), rnd, env)
    };
    exc.bits() as i32
}

/// The sign transfer rides on the rounding-mode code: 0 copies the
/// sign of `op2`, 1 copies its inverse, 2 takes the exclusive or of
/// both signs, anything else keeps the sign of `op1`.
#[no_mangle]
pub unsafe extern "C" fn vp_fsgnj(
    result: *mut u32,
    op1: *const u32,
    op2: *const u32,
    rounding_mode: i32,
    env: *const Env,
) -> i32 {
    let env = *env;
    let op = match rounding_mode {
        0 => SignOp::Copy,
        1 => SignOp::Inverted,
        2 => SignOp::Xor,
        _ => SignOp::Keep,
    };
    ops::sign_inject(
        self::result(result, env),
        operand(op1, env),
        operand(op2, env),
        op,
        env,
    )
    .bits() as i32
}

/// Moves the raw encoding into `nchunks` integer words.
#[no_mangle]
pub unsafe extern "C" fn vp_fmv_f2x(
    result: *mut u32,
    op1: *const u32,
    env: *const Env,
    nchunks: i32,
) -> i32 {
    let env = *env;
    let nchunks = nchunks as usize;
    ops::mv_f2x(
        slice::from_raw_parts_mut(result, nchunks),
        operand(op1, env),
        env,
        nchunks,
    )
    .bits() as i32
}

/// Writes the one-hot class vector into word 0 of `result`.
#[no_mangle]
pub unsafe extern "C" fn vp_fclass(result: *mut u32, op1: *const u32, env: *const Env) -> i32 {
    let env = *env;
    ops::fclass(slice::from_raw_parts_mut(result, 1), operand(op1, env), env).bits() as i32
}

/// Converts to an integer; `int_format` 1 selects 64-bit, anything
/// else 32-bit. `result` is always a two-word slot.
#[no_mangle]
pub unsafe extern "C" fn vp_fcvt_f2i(
    result: *mut u32,
    op1: *const u32,
    rounding_mode: i32,
    env: *const Env,
    is_signed: i32,
    int_format: i32,
) -> i32 {
    let env = *env;
    let rnd = RoundingMode::from_wire(rounding_mode);
    ops::cvt_f2i(
        slice::from_raw_parts_mut(result, 2),
        operand(op1, env),
        is_signed != 0,
        IntFormat::from_wire(int_format),
        rnd,
        env,
    )
    .bits() as i32
}

/// Converts from an integer; `int_format` 1 selects 64-bit, anything
/// else 32-bit.
#[no_mangle]
pub unsafe extern "C" fn vp_fcvt_i2f(
    result: *mut u32,
    op1: *const u32,
    rounding_mode: i32,
    env: *const Env,
    is_signed: i32,
    int_format: i32,
) -> i32 {
    let env = *env;
    let rnd = RoundingMode::from_wire(rounding_mode);
    let fmt = IntFormat::from_wire(int_format);
    let words = match fmt {
        IntFormat::Int64 => 2,
        IntFormat::Int32 => 1,
    };
    ops::cvt_i2f(
        self::result(result, env),
        slice::from_raw_parts(op1, words),
        is_signed != 0,
        fmt,
        rnd,
        env,
    )
    .bits() as i32
}

/// Converts between two formats described by separate descriptors.
#[no_mangle]
pub unsafe extern "C" fn vp_fcvt_f2f(
    result: *mut u32,
    op1: *const u32,
    rounding_mode: i32,
    src_env: *const Env,
    dst_env: *const Env,
) -> i32 {
    let src_env = *src_env;
    let dst_env = *dst_env;
    let rnd = RoundingMode::from_wire(rounding_mode);
    ops::cvt_f2f(
        self::result(result, dst_env),
        operand(op1, src_env),
        rnd,
        src_env,
        dst_env,
    )
    .bits() as i32
}
