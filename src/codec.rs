/*!
Conversion between encoded datums and backend reals.

Decoding is exact: a normal or subnormal datum is rendered as a binary
scientific literal (`-0b1.0110p-3`) and handed to the backend's string
parser, which preserves the exact significand regardless of the
backend's internal representation. Encoding rounds: the value is
fitted into the format's exponent range, constructing subnormals and
resolving the overflow and underflow boundary cases on the way.
*/

use rug::float::Special;
use rug::Float;

use crate::backend;
use crate::bits;
use crate::datum::{self, Class};
use crate::env::Env;
use crate::round::RoundingMode;

/// Decodes a datum into a backend real with `precision` significant
/// bits, defaulting to the full significand width of the format (which
/// is always exact). The backend has a single NaN, so the
/// quiet/signaling distinction must be recovered from the datum
/// itself before decoding.
pub fn decode(x: &[u32], env: Env, rnd: RoundingMode, precision: Option<u32>) -> Float {
    let prec = precision.unwrap_or(env.prec() as u32);
    match datum::classify(x, env) {
        Class::Zero(false) => Float::with_val(prec, Special::Zero),
        Class::Zero(true) => Float::with_val(prec, Special::NegZero),
        Class::Infinity(false) => Float::with_val(prec, Special::Infinity),
        Class::Infinity(true) => Float::with_val(prec, Special::NegInfinity),
        Class::Nan { .. } => Float::with_val(prec, Special::Nan),
        class @ (Class::Subnormal(_) | Class::Normal(_)) => {
            let normal = matches!(class, Class::Normal(_));
            let mut out = Float::new(prec);
            backend::set_from_binary(&mut out, &to_literal(x, env, normal), rnd);
            out
        }
    }
}

/// Renders a normal or subnormal datum as a binary scientific
/// literal. Normal numbers carry a hidden 1 and the unbiased
/// exponent; subnormals carry a hidden 0 and `emin`.
fn to_literal(x: &[u32], env: Env, normal: bool) -> String {
    let mut s = String::with_capacity(env.ms() + 24);
    if datum::sign(x, env) {
        s.push('-');
    }
    s.push_str(if normal { "0b1." } else { "0b0." });
    for i in (env.t_lsb()..=env.t_msb()).rev() {
        s.push(if bits::get(x, i) { '1' } else { '0' });
    }
    let exponent = if normal {
        datum::biased_exp(x, env) as i64 - env.bias()
    } else {
        env.emin()
    };
    s.push('p');
    s.push_str(&exponent.to_string());
    s
}

/// Encodes a backend real into a datum, rounding with `rnd` where the
/// value does not fit the format exactly. Padding bits come out zero
/// on every path.
pub fn encode(out: &mut [u32], mut val: Float, env: Env, rnd: RoundingMode) {
    if val.is_nan() {
        datum::set_qnan(out, env);
        return;
    }
    if val.is_infinite() {
        datum::set_inf(out, env, val.is_sign_negative());
        return;
    }
    if val.is_zero() {
        datum::set_zero(out, env, val.is_sign_negative());
        return;
    }

    // narrow to the format significand up front, unless the value sits
    // in the subnormal range where the surviving width is smaller
    if val.prec() as usize > env.prec() && backend::raw_exp(&val) - 1 >= env.emin() {
        backend::prec_round(&mut val, env.prec(), rnd);
    }

    let (negative, digits, raw_exp) = backend::binary_parts(&val);
    // realign `0.d1d2... * 2^e` to `d1.d2... * 2^(e-1)`
    let exponent = raw_exp - 1;

    if exponent > env.emax() {
        bits::write(out, env.s_index(), negative);
        for i in env.e_lsb()..=env.e_msb() {
            bits::set(out, i);
        }
        for i in 0..=env.t_msb() {
            bits::clear(out, i);
        }
    } else if exponent < env.emin() {
        if exponent >= env.emin() - env.mbits() as i64 {
            encode_subnormal(out, &val, env, rnd);
        } else {
            encode_underflow(out, env, rnd, negative, exponent, &digits);
        }
    } else {
        bits::write(out, env.s_index(), negative);
        encode_normal(out, env, exponent, &digits);
    }
}

/// Lays out a normal number: explicit digits into T from the top,
/// the remainder (padding included) zeroed, `exponent + bias` into E.
fn encode_normal(out: &mut [u32], env: Env, exponent: i64, digits: &str) {
    let mut pos = env.t_msb() as i64;
    for digit in digits.chars().skip(1) {
        bits::write(out, pos as usize, digit == '1');
        pos -= 1;
    }
    while pos >= 0 {
        bits::clear(out, pos as usize);
        pos -= 1;
    }

    let e = (exponent + env.bias()) as u64;
    for i in 0..env.w() {
        bits::write(out, env.e_lsb() + i, (e >> i) & 1 == 1);
    }
}

/// Constructs a subnormal. The value is first re-rounded to the
/// precision that survives at its exponent, then the significand is
/// placed with its leading bit at the T position the exponent
/// dictates, zeros above and the explicit digits below. When the
/// re-rounding carries across the boundary the result is the smallest
/// normal number, `E = 1, T = 0`.
fn encode_subnormal(out: &mut [u32], val: &Float, env: Env, rnd: RoundingMode) {
    let exponent = backend::raw_exp(val) - 1;
    let prec = (env.mbits() as i64 - (env.emin() - exponent) + 1) as u32;
    let mut narrowed = Float::new(prec);
    backend::assign(&mut narrowed, val, rnd);

    let (negative, digits, raw_exp) = backend::binary_parts(&narrowed);
    bits::write(out, env.s_index(), negative);

    let promoted = raw_exp == env.emin() + 1;
    for i in env.e_lsb()..=env.e_msb() {
        bits::clear(out, i);
    }
    if promoted {
        bits::set(out, env.e_lsb());
    }

    for i in 0..=env.t_msb() {
        bits::clear(out, i);
    }
    let lead = env.ms() as i64 - (env.emin() - raw_exp) - 1;
    if (0..env.ms() as i64).contains(&lead) {
        bits::set(out, lead as usize);
    }
    let mut pos = lead - 1;
    for digit in digits.chars().skip(1) {
        if pos < env.t_lsb() as i64 {
            break;
        }
        bits::write(out, pos as usize, digit == '1');
        pos -= 1;
    }
}

/// Underflow strictly below the smallest subnormal: a signed zero,
/// except that rounding directed towards the value's own sign pulls
/// the result up to the minimum subnormal, as does the near-tie one
/// position below the subnormal range under the nearest modes.
fn encode_underflow(
    out: &mut [u32],
    env: Env,
    rnd: RoundingMode,
    negative: bool,
    exponent: i64,
    digits: &str,
) {
    datum::set_zero(out, env, negative);

    let min_sub = env.t_lsb();
    match rnd {
        RoundingMode::ToPositive if !negative => bits::set(out, min_sub),
        RoundingMode::ToNegative if negative => bits::set(out, min_sub),
        _ => {}
    }

    // the hidden bit sits one position below the minimum subnormal:
    // a halfway tie exactly when no mantissa bit follows it
    if exponent == env.emin() - env.mbits() as i64 - 1 {
        match rnd {
            RoundingMode::NearestTiesToEven => {
                if digits.chars().skip(1).any(|d| d == '1') {
                    bits::set(out, min_sub);
                }
            }
            RoundingMode::NearestTiesAwayZero => bits::set(out, min_sub),
            _ => {}
        }
    }
}
