//! Arithmetic primitives: the basic operations, the fused
//! multiply-add family and the IEEE min/max selections.

use gmp_mpfr_sys::mpfr;
use rug::Float;

use crate::backend;
use crate::codec;
use crate::datum;
use crate::env::Env;
use crate::ops::Exceptions;
use crate::round::RoundingMode;

/// Binary arithmetic operations.
macro_rules! arith_2ary {
    ($name:ident, $mpfr:ident, $cname:expr) => {
        #[doc = "Computes `"]
        #[doc = $cname]
        #[doc = "` rounded per `rnd` and writes the encoded result."]
        pub fn $name(
            result: &mut [u32],
            op1: &[u32],
            op2: &[u32],
            rnd: RoundingMode,
            env: Env,
        ) -> Exceptions {
            backend::set_exp_range(env);

            let a = codec::decode(op1, env, rnd, None);
            let b = codec::decode(op2, env, rnd, None);

            let snan = datum::is_snan(op1, env) || datum::is_snan(op2, env);
            let qnan = datum::is_qnan(op1, env) || datum::is_qnan(op2, env);

            let mut res = Float::new(env.prec() as u32);
            backend::clear_flags();
            let t = unsafe { mpfr::$mpfr(res.as_raw_mut(), a.as_raw(), b.as_raw(), rnd.raw()) };
            backend::subnormalize(&mut res, t, rnd);

            codec::encode(result, res, env, rnd);
            Exceptions::from_arith(snan, qnan)
        }
    };
}

arith_2ary!(add, add, "op1 + op2");
arith_2ary!(sub, sub, "op1 - op2");
arith_2ary!(mul, mul, "op1 * op2");
arith_2ary!(div, div, "op1 / op2");

/// Computes `sqrt(op)` rounded per `rnd` and writes the encoded
/// result. A negative operand yields the canonical quiet NaN and
/// invalid-operation.
pub fn sqrt(result: &mut [u32], op: &[u32], rnd: RoundingMode, env: Env) -> Exceptions {
    backend::set_exp_range(env);

    let a = codec::decode(op, env, rnd, None);

    let snan = datum::is_snan(op, env);
    let qnan = datum::is_qnan(op, env);

    let mut res = Float::new(env.prec() as u32);
    backend::clear_flags();
    let t = unsafe { mpfr::sqrt(res.as_raw_mut(), a.as_raw(), rnd.raw()) };
    backend::subnormalize(&mut res, t, rnd);

    codec::encode(result, res, env, rnd);
    Exceptions::from_arith(snan, qnan)
}

/// True when the product operands are zero and infinity in either
/// order while the third operand is a quiet NaN. The architecture
/// reports this fused case as invalid-operation alone, overriding the
/// regular synthesis.
fn zero_times_inf_with_qnan(op1: &[u32], op2: &[u32], op3: &[u32], env: Env) -> bool {
    let zero_inf = (datum::is_zero(op1, env) && datum::is_inf(op2, env))
        || (datum::is_zero(op2, env) && datum::is_inf(op1, env));
    zero_inf && datum::is_qnan(op3, env)
}

/// Fused operations the backend provides directly.
macro_rules! fused_3ary {
    ($name:ident, $mpfr:ident, $cname:expr) => {
        #[doc = "Computes `"]
        #[doc = $cname]
        #[doc = "` with a single rounding per `rnd` and writes the encoded result."]
        pub fn $name(
            result: &mut [u32],
            op1: &[u32],
            op2: &[u32],
            op3: &[u32],
            rnd: RoundingMode,
            env: Env,
        ) -> Exceptions {
            backend::set_exp_range(env);

            let a = codec::decode(op1, env, rnd, None);
            let b = codec::decode(op2, env, rnd, None);
            let c = codec::decode(op3, env, rnd, None);

            let snan = datum::is_snan(op1, env)
                || datum::is_snan(op2, env)
                || datum::is_snan(op3, env);
            let qnan = datum::is_qnan(op1, env)
                || datum::is_qnan(op2, env)
                || datum::is_qnan(op3, env);

            let mut res = Float::new(env.prec() as u32);
            backend::clear_flags();
            let t = unsafe {
                mpfr::$mpfr(
                    res.as_raw_mut(),
                    a.as_raw(),
                    b.as_raw(),
                    c.as_raw(),
                    rnd.raw(),
                )
            };
            backend::subnormalize(&mut res, t, rnd);

            codec::encode(result, res, env, rnd);
            if zero_times_inf_with_qnan(op1, op2, op3, env) {
                Exceptions::invalid_op()
            } else {
                Exceptions::from_arith(snan, qnan)
            }
        }
    };
}

fused_3ary!(fma, fma, "op1 * op2 + op3");
fused_3ary!(fms, fms, "op1 * op2 - op3");

/// Fused operations built from a negated product. The product could
/// overflow the format range even though the final sum does not, so
/// it is formed with the backend range wide open and exact precision,
/// and the result is brought back into the format afterwards.
macro_rules! negated_3ary {
    ($name:ident, $combine:ident, $cname:expr) => {
        #[doc = "Computes `"]
        #[doc = $cname]
        #[doc = "` with a single rounding per `rnd` and writes the encoded result."]
        pub fn $name(
            result: &mut [u32],
            op1: &[u32],
            op2: &[u32],
            op3: &[u32],
            rnd: RoundingMode,
            env: Env,
        ) -> Exceptions {
            backend::set_widest_exp_range();

            let a = codec::decode(op1, env, rnd, None);
            let b = codec::decode(op2, env, rnd, None);
            let c = codec::decode(op3, env, rnd, None);

            let snan = datum::is_snan(op1, env)
                || datum::is_snan(op2, env)
                || datum::is_snan(op3, env);
            let qnan = datum::is_qnan(op1, env)
                || datum::is_qnan(op2, env)
                || datum::is_qnan(op3, env);

            let mut product = Float::new(2 * env.prec() as u32);
            let mut res = Float::new(env.prec() as u32);
            backend::clear_flags();
            let t = unsafe {
                mpfr::mul(product.as_raw_mut(), a.as_raw(), b.as_raw(), rnd.raw());
                mpfr::neg(product.as_raw_mut(), product.as_raw(), rnd.raw());
                mpfr::$combine(res.as_raw_mut(), product.as_raw(), c.as_raw(), rnd.raw())
            };

            backend::set_exp_range(env);
            let t = backend::check_range(&mut res, t, rnd);
            backend::subnormalize(&mut res, t, rnd);

            codec::encode(result, res, env, rnd);
            if zero_times_inf_with_qnan(op1, op2, op3, env) {
                Exceptions::invalid_op()
            } else {
                Exceptions::from_arith(snan, qnan)
            }
        }
    };
}

negated_3ary!(fnma, add, "-(op1 * op2) + op3");
negated_3ary!(fnms, sub, "-(op1 * op2) - op3");

/// IEEE min/max selections. A NaN operand yields the other operand;
/// only a signaling operand raises invalid-operation.
macro_rules! select_2ary {
    ($name:ident, $mpfr:ident, $cname:expr) => {
        #[doc = "Computes `"]
        #[doc = $cname]
        #[doc = "` and writes the encoded result."]
        pub fn $name(
            result: &mut [u32],
            op1: &[u32],
            op2: &[u32],
            rnd: RoundingMode,
            env: Env,
        ) -> Exceptions {
            backend::set_exp_range(env);

            let a = codec::decode(op1, env, rnd, None);
            let b = codec::decode(op2, env, rnd, None);

            let snan = datum::is_snan(op1, env) || datum::is_snan(op2, env);

            let mut res = Float::new(env.prec() as u32);
            unsafe {
                mpfr::$mpfr(res.as_raw_mut(), a.as_raw(), b.as_raw(), rnd.raw());
            }

            codec::encode(result, res, env, rnd);
            Exceptions {
                invalid: snan,
                ..Default::default()
            }
        }
    };
}

select_2ary!(fmin, min, "min(op1, op2)");
select_2ary!(fmax, max, "max(op1, op2)");
