/*!
Glue around the MPFR backend.

The backend keeps its rounding state (the current exponent range and
the sticky exception flags) outside of any value, per thread in the
bundled build. Every dispatched operation reinitializes the range and
clears the flags before computing, so nothing leaks between calls.

This module is the only place that drives that state; the value side
stays in [`rug::Float`], whose `Drop` releases the backend storage on
every return path.
*/

use std::ffi::{CStr, CString};
use std::ptr;

use gmp_mpfr_sys::mpfr;
use rug::Float;

use crate::env::Env;
use crate::round::RoundingMode;

/// Snapshot of the backend's sticky exception flags.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Flags {
    pub inexact: bool,
    pub underflow: bool,
    pub overflow: bool,
    pub divby0: bool,
    pub nanflag: bool,
    pub erange: bool,
}

/// Reads the sticky flags.
pub(crate) fn flags() -> Flags {
    unsafe {
        Flags {
            inexact: mpfr::inexflag_p() != 0,
            underflow: mpfr::underflow_p() != 0,
            overflow: mpfr::overflow_p() != 0,
            divby0: mpfr::divby0_p() != 0,
            nanflag: mpfr::nanflag_p() != 0,
            erange: mpfr::erangeflag_p() != 0,
        }
    }
}

/// Clears the sticky flags.
pub(crate) fn clear_flags() {
    unsafe { mpfr::clear_flags() }
}

/// Restricts the exponent range to the format so that operation
/// results land where [`subnormalize`] can re-round them. The lower
/// bound accounts for the significand narrowing through the subnormal
/// range; the upper bound leaves the largest normal value a
/// representable exponent.
pub(crate) fn set_exp_range(env: Env) {
    unsafe {
        mpfr::set_emin(env.emin() - env.mbits() as i64 + 1);
        mpfr::set_emax(env.emax() + 1);
    }
}

/// Opens the exponent range up to everything the backend supports.
pub(crate) fn set_widest_exp_range() {
    unsafe {
        mpfr::set_emin(mpfr::get_emin_min());
        mpfr::set_emax(mpfr::get_emax_max());
    }
}

/// Re-rounds `x` onto the subnormal grid of the active exponent
/// range. `t` is the inexact ternary of the operation that produced
/// `x`; the corrected ternary is returned.
pub(crate) fn subnormalize(x: &mut Float, t: i32, rnd: RoundingMode) -> i32 {
    unsafe { mpfr::subnormalize(x.as_raw_mut(), t, rnd.raw()) }
}

/// Rounds `x` back into the active exponent range, raising overflow
/// or underflow as needed.
pub(crate) fn check_range(x: &mut Float, t: i32, rnd: RoundingMode) -> i32 {
    unsafe { mpfr::check_range(x.as_raw_mut(), t, rnd.raw()) }
}

/// Rounds `x` in place to `prec` significant bits.
pub(crate) fn prec_round(x: &mut Float, prec: usize, rnd: RoundingMode) -> i32 {
    unsafe { mpfr::prec_round(x.as_raw_mut(), prec as mpfr::prec_t, rnd.raw()) }
}

/// Assigns `src` to `dst`, rounding to the precision of `dst`.
pub(crate) fn assign(dst: &mut Float, src: &Float, rnd: RoundingMode) -> i32 {
    unsafe { mpfr::set(dst.as_raw_mut(), src.as_raw(), rnd.raw()) }
}

/// The exponent of a finite non-zero `x` written as `0.1xx * 2^e`.
pub(crate) fn raw_exp(x: &Float) -> i64 {
    unsafe { mpfr::get_exp(x.as_raw()) }
}

/// Parses a binary scientific literal such as `-0b1.0110p-3` into
/// `x`, rounding per `rnd` when `x` is too narrow to hold it.
pub(crate) fn set_from_binary(x: &mut Float, literal: &str, rnd: RoundingMode) {
    let literal = CString::new(literal).unwrap();
    let ret = unsafe { mpfr::set_str(x.as_raw_mut(), literal.as_ptr(), 0, rnd.raw()) };
    debug_assert_eq!(ret, 0, "malformed binary literal");
}

/// Extracts the sign, the binary significand digits and the exponent
/// of a finite non-zero value: the value reads `0.<digits> * 2^exp`
/// with an implicit radix point left of the first digit. Exact: every
/// significant digit is returned. The backend string is copied and
/// released before returning.
pub(crate) fn binary_parts(x: &Float) -> (bool, String, i64) {
    let mut exp: mpfr::exp_t = 0;
    unsafe {
        let raw = mpfr::get_str(
            ptr::null_mut(),
            &mut exp,
            2,
            0,
            x.as_raw(),
            mpfr::rnd_t::RNDN,
        );
        let all = CStr::from_ptr(raw).to_str().unwrap();
        let negative = all.starts_with('-');
        let digits = all.trim_start_matches('-').to_owned();
        mpfr::free_str(raw);
        (negative, digits, exp)
    }
}
