//! Comparison, classification and sign manipulation. None of these
//! round, but the comparison predicates still go through the backend
//! so their NaN behavior matches it.

use gmp_mpfr_sys::mpfr;

use crate::backend;
use crate::bits;
use crate::codec;
use crate::datum::{self, Class};
use crate::env::Env;
use crate::ops::Exceptions;
use crate::round::RoundingMode;

/// Predicate selected for [`compare`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    LessEqual,
    Less,
    Equal,
}

/// Compares two datums and writes the outcome into word 0 of
/// `result`. Any NaN makes a predicate false; the ordered predicates
/// treat any NaN operand as an invalid operation, equality only a
/// signaling one.
pub fn compare(result: &mut [u32], op1: &[u32], op2: &[u32], op: CmpOp, env: Env) -> Exceptions {
    backend::set_exp_range(env);

    let a = codec::decode(op1, env, RoundingMode::NearestTiesToEven, None);
    let b = codec::decode(op2, env, RoundingMode::NearestTiesToEven, None);

    let snan = datum::is_snan(op1, env) || datum::is_snan(op2, env);
    let qnan = datum::is_qnan(op1, env) || datum::is_qnan(op2, env);

    let holds = unsafe {
        match op {
            CmpOp::LessEqual => mpfr::lessequal_p(a.as_raw(), b.as_raw()) != 0,
            CmpOp::Less => mpfr::less_p(a.as_raw(), b.as_raw()) != 0,
            CmpOp::Equal => mpfr::equal_p(a.as_raw(), b.as_raw()) != 0,
        }
    };
    result[0] = holds as u32;

    let invalid = match op {
        CmpOp::Equal => snan,
        CmpOp::LessEqual | CmpOp::Less => snan || qnan,
    };
    Exceptions {
        invalid,
        ..Default::default()
    }
}

/// Sign transfer selected for [`sign_inject`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOp {
    /// Take the sign of the second operand.
    Copy,
    /// Take the inverted sign of the second operand.
    Inverted,
    /// Take the exclusive or of both signs.
    Xor,
    /// Keep the sign of the first operand.
    Keep,
}

/// Writes `op1` with its sign bit replaced per `op`. Pure bit
/// manipulation: the magnitude is untouched and nothing is raised.
pub fn sign_inject(
    result: &mut [u32],
    op1: &[u32],
    op2: &[u32],
    op: SignOp,
    env: Env,
) -> Exceptions {
    let n = env.nwords();
    result[..n].copy_from_slice(&op1[..n]);

    let sign = match op {
        SignOp::Copy => datum::sign(op2, env),
        SignOp::Inverted => !datum::sign(op2, env),
        SignOp::Xor => datum::sign(op1, env) ^ datum::sign(op2, env),
        SignOp::Keep => datum::sign(op1, env),
    };
    bits::write(result, env.s_index(), sign);
    Exceptions::default()
}

/// Writes the one-hot class vector of `op` into word 0 of `result`.
/// Bit order, lowest first: -Inf, negative normal, negative
/// subnormal, -0, +0, positive subnormal, positive normal, +Inf,
/// signaling NaN, quiet NaN.
pub fn fclass(result: &mut [u32], op: &[u32], env: Env) -> Exceptions {
    let bit = match datum::classify(op, env) {
        Class::Infinity(true) => 0,
        Class::Normal(true) => 1,
        Class::Subnormal(true) => 2,
        Class::Zero(true) => 3,
        Class::Zero(false) => 4,
        Class::Subnormal(false) => 5,
        Class::Normal(false) => 6,
        Class::Infinity(false) => 7,
        Class::Nan { quiet: false } => 8,
        Class::Nan { quiet: true } => 9,
    };
    result[0] = 1 << bit;
    Exceptions::default()
}
