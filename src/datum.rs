/*!
Field access and classification for encoded datums.

A datum is a caller-allocated little-endian array of 32-bit words.
From the least significant global bit upwards it holds the trailing
significand field T (whose bottom [`padding`][crate::Env::padding]
bits are forced to zero when the format is not a byte multiple), the
biased exponent field E, and the sign bit S. Every bit pattern is a
legal datum; classification never fails.
*/

use crate::bits;
use crate::env::Env;

/// Classification of an encoded datum.
///
/// A NaN is quiet exactly when the most significant bit of T is set.
/// This is a fixed convention of the architecture; some IEEE 754
/// encodings use the opposite polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    /// Signed zero.
    Zero(bool),
    /// Subnormal number, `(-1)^s * 0.T * 2^emin`.
    Subnormal(bool),
    /// Normal number, `(-1)^s * 1.T * 2^(E - bias)`.
    Normal(bool),
    /// Signed infinity.
    Infinity(bool),
    /// Not-a-number with its quiet bit.
    Nan { quiet: bool },
}

impl Class {
    /// True for either NaN flavor.
    pub fn is_nan(&self) -> bool {
        matches!(self, Class::Nan { .. })
    }

    /// The sign, for classes that carry one.
    pub fn sign(&self) -> Option<bool> {
        match self {
            Class::Zero(s) | Class::Subnormal(s) | Class::Normal(s) | Class::Infinity(s) => {
                Some(*s)
            }
            Class::Nan { .. } => None,
        }
    }
}

/// Reads the sign bit.
pub fn sign(x: &[u32], env: Env) -> bool {
    bits::get(x, env.s_index())
}

/// Reads the biased exponent field, zero-extended.
pub fn biased_exp(x: &[u32], env: Env) -> u64 {
    bits::field_u64(x, env.e_lsb(), env.w())
}

/// True when every meaningful bit of T is zero. Padding bits are
/// skipped: they are semantically ignored on input.
pub fn t_is_null(x: &[u32], env: Env) -> bool {
    (env.t_lsb()..=env.t_msb()).all(|i| !bits::get(x, i))
}

/// Classifies a datum from its E and T fields.
pub fn classify(x: &[u32], env: Env) -> Class {
    let e = biased_exp(x, env);
    let t_null = t_is_null(x, env);
    let s = sign(x, env);
    if e == 0 {
        if t_null {
            Class::Zero(s)
        } else {
            Class::Subnormal(s)
        }
    } else if e == env.e_max() {
        if t_null {
            Class::Infinity(s)
        } else {
            Class::Nan {
                quiet: bits::get(x, env.t_msb()),
            }
        }
    } else {
        Class::Normal(s)
    }
}

/// True for a signaling NaN.
pub fn is_snan(x: &[u32], env: Env) -> bool {
    matches!(classify(x, env), Class::Nan { quiet: false })
}

/// True for a quiet NaN.
pub fn is_qnan(x: &[u32], env: Env) -> bool {
    matches!(classify(x, env), Class::Nan { quiet: true })
}

/// True for an infinity of either sign.
pub fn is_inf(x: &[u32], env: Env) -> bool {
    matches!(classify(x, env), Class::Infinity(_))
}

/// True for a zero of either sign.
pub fn is_zero(x: &[u32], env: Env) -> bool {
    matches!(classify(x, env), Class::Zero(_))
}

/// Writes a signed zero: E and T fully cleared.
pub fn set_zero(x: &mut [u32], env: Env, sign: bool) {
    bits::write(x, env.s_index(), sign);
    for i in 0..=env.e_msb() {
        bits::clear(x, i);
    }
}

/// Writes a signed infinity: E all ones, T cleared.
pub fn set_inf(x: &mut [u32], env: Env, sign: bool) {
    bits::write(x, env.s_index(), sign);
    for i in env.e_lsb()..=env.e_msb() {
        bits::set(x, i);
    }
    for i in 0..=env.t_msb() {
        bits::clear(x, i);
    }
}

/// Writes the canonical quiet NaN: sign 0, E all ones, `T = 10...0`.
/// This is the only NaN the dispatcher ever emits.
pub fn set_qnan(x: &mut [u32], env: Env) {
    bits::clear(x, env.s_index());
    for i in env.e_lsb()..=env.e_msb() {
        bits::set(x, i);
    }
    for i in 0..=env.t_msb() {
        bits::clear(x, i);
    }
    bits::set(x, env.t_msb());
}

/// Writes the canonical signaling NaN: sign 0, E all ones,
/// `T = 01...0`.
pub fn set_snan(x: &mut [u32], env: Env) {
    bits::clear(x, env.s_index());
    for i in env.e_lsb()..=env.e_msb() {
        bits::set(x, i);
    }
    for i in 0..=env.t_msb() {
        bits::clear(x, i);
    }
    bits::set(x, env.t_msb() - 1);
}
