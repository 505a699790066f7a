//! Conversions between formats and integers, and the raw move to the
//! integer register file.

use gmp_mpfr_sys::mpfr;
use rug::Float;

use crate::backend;
use crate::bits;
use crate::codec;
use crate::datum;
use crate::env::Env;
use crate::ops::Exceptions;
use crate::round::RoundingMode;

/// Integer operand width for the integer conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntFormat {
    Int32,
    Int64,
}

impl IntFormat {
    /// Decodes the wire `int_format` selector; 1 selects 64-bit.
    pub fn from_wire(code: i32) -> Self {
        if code == 1 {
            IntFormat::Int64
        } else {
            IntFormat::Int32
        }
    }
}

/// Converts `op` to an integer, rounding per `rnd`, and writes the
/// 64-bit result slot as two words. A value the target type cannot
/// hold is clamped to the nearest bound and reported invalid; NaN
/// converts to the type's maximum and is invalid as well. 32-bit
/// results are sign- or zero-extended into the slot per `signed`.
pub fn cvt_f2i(
    result: &mut [u32],
    op: &[u32],
    signed: bool,
    fmt: IntFormat,
    rnd: RoundingMode,
    env: Env,
) -> Exceptions {
    backend::set_exp_range(env);
    let a = codec::decode(op, env, rnd, None);
    backend::clear_flags();

    let (value, exc) = match (fmt, signed) {
        (IntFormat::Int32, true) => {
            if a.is_nan() {
                (i32::MAX as i64 as u64, Exceptions::invalid_op())
            } else if unsafe { mpfr::fits_sint_p(a.as_raw(), rnd.raw()) } == 0 {
                let clamped = if a.is_sign_negative() { i32::MIN } else { i32::MAX };
                (clamped as i64 as u64, Exceptions::invalid_op())
            } else {
                let v = unsafe { mpfr::get_si(a.as_raw(), rnd.raw()) } as i32;
                (v as i64 as u64, Exceptions::from_conversion())
            }
        }
        (IntFormat::Int32, false) => {
            if a.is_nan() {
                (u32::MAX as u64, Exceptions::invalid_op())
            } else if unsafe { mpfr::fits_uint_p(a.as_raw(), rnd.raw()) } == 0 {
                let clamped = if a.is_sign_negative() { 0 } else { u32::MAX };
                (clamped as u64, Exceptions::invalid_op())
            } else {
                let v = unsafe { mpfr::get_ui(a.as_raw(), rnd.raw()) } as u32;
                (v as u64, Exceptions::from_conversion())
            }
        }
        (IntFormat::Int64, true) => {
            if a.is_nan() {
                (i64::MAX as u64, Exceptions::invalid_op())
            } else {
                // the backend saturates and flags the range error itself
                let v = unsafe { mpfr::get_si(a.as_raw(), rnd.raw()) };
                (v as u64, Exceptions::from_conversion())
            }
        }
        (IntFormat::Int64, false) => {
            if a.is_nan() {
                (u64::MAX, Exceptions::invalid_op())
            } else {
                let v = unsafe { mpfr::get_ui(a.as_raw(), rnd.raw()) };
                (v, Exceptions::from_conversion())
            }
        }
    };

    result[0] = value as u32;
    result[1] = (value >> 32) as u32;
    exc
}

/// Converts an integer operand held in little-endian words to the
/// format, rounding per `rnd`.
pub fn cvt_i2f(
    result: &mut [u32],
    op: &[u32],
    signed: bool,
    fmt: IntFormat,
    rnd: RoundingMode,
    env: Env,
) -> Exceptions {
    backend::set_exp_range(env);

    let mut res = Float::new(env.prec() as u32);
    backend::clear_flags();
    unsafe {
        match (fmt, signed) {
            (IntFormat::Int64, true) => {
                mpfr::set_si(res.as_raw_mut(), bits::qword(op, 0) as i64, rnd.raw());
            }
            (IntFormat::Int64, false) => {
                mpfr::set_ui(res.as_raw_mut(), bits::qword(op, 0), rnd.raw());
            }
            (IntFormat::Int32, true) => {
                mpfr::set_si(res.as_raw_mut(), i64::from(op[0] as i32), rnd.raw());
            }
            (IntFormat::Int32, false) => {
                mpfr::set_ui(res.as_raw_mut(), u64::from(op[0]), rnd.raw());
            }
        }
    }
    let exc = Exceptions::from_conversion();

    codec::encode(result, res, env, rnd);
    exc
}

/// Converts between two formats: the significand is rounded to the
/// destination width first, then the value is clamped and
/// subnormalized under the destination exponent range.
pub fn cvt_f2f(
    result: &mut [u32],
    op: &[u32],
    rnd: RoundingMode,
    src_env: Env,
    dst_env: Env,
) -> Exceptions {
    backend::set_exp_range(src_env);

    let snan = datum::is_snan(op, src_env);
    let qnan = datum::is_qnan(op, src_env);

    let mut val = codec::decode(op, src_env, rnd, None);
    backend::clear_flags();

    let t = backend::prec_round(&mut val, dst_env.prec(), rnd);

    backend::set_exp_range(dst_env);
    let t = backend::check_range(&mut val, t, rnd);
    backend::subnormalize(&mut val, t, rnd);

    codec::encode(result, val, dst_env, rnd);
    Exceptions::from_arith(snan, qnan)
}

/// Raw bitcast of a datum into `nchunks` integer words. Formats
/// narrower than the 64-bit register replicate the sign bit through
/// the chunks above word 0.
pub fn mv_f2x(result: &mut [u32], op: &[u32], env: Env, nchunks: usize) -> Exceptions {
    for (i, chunk) in result.iter_mut().enumerate().take(nchunks) {
        *chunk = if env.bis == 63 || i == 0 {
            op[i]
        } else if datum::sign(op, env) {
            u32::MAX
        } else {
            0
        };
    }
    Exceptions::default()
}
