/*!
The operation dispatcher.

Every primitive follows the same sequence: restrict the backend
exponent range to the format, decode the operands, pre-scan the inputs
for quiet and signaling NaNs (the backend collapses both into one
NaN), clear the sticky flags, compute, re-round onto the subnormal
grid, encode the result and synthesize the exception vector from the
backend flags and the input classes.
*/

mod arith;
mod compare;
mod convert;

pub use arith::{add, div, fma, fmax, fmin, fms, fnma, fnms, mul, sqrt, sub};
pub use compare::{compare, fclass, sign_inject, CmpOp, SignOp};
pub use convert::{cvt_f2f, cvt_f2i, cvt_i2f, mv_f2x, IntFormat};

use crate::backend;

/// The IEEE exception flags raised by one operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exceptions {
    pub inexact: bool,
    pub underflow: bool,
    pub overflow: bool,
    pub divzero: bool,
    pub invalid: bool,
}

impl Exceptions {
    /// Packs the flags into the wire bit vector: NX is bit 0, UF bit
    /// 1, OF bit 2, DZ bit 3, NV bit 4.
    pub fn bits(self) -> u32 {
        self.inexact as u32
            | (self.underflow as u32) << 1
            | (self.overflow as u32) << 2
            | (self.divzero as u32) << 3
            | (self.invalid as u32) << 4
    }

    /// The invalid-operation vector alone.
    pub(crate) fn invalid_op() -> Self {
        Exceptions {
            invalid: true,
            ..Default::default()
        }
    }

    /// Synthesizes the vector of an arithmetic operation from the
    /// backend flags. Underflow counts only when the result is also
    /// inexact: the backend raises it on exact subnormal results as
    /// well. A NaN produced from quiet-NaN inputs alone is not an
    /// invalid operation; one produced fresh, or from a signaling
    /// input, is.
    pub(crate) fn from_arith(snan_inputs: bool, qnan_inputs: bool) -> Self {
        let f = backend::flags();
        Exceptions {
            inexact: f.inexact,
            underflow: f.underflow && f.inexact,
            overflow: f.overflow,
            divzero: f.divby0,
            invalid: (f.nanflag && (snan_inputs || !qnan_inputs)) || f.erange,
        }
    }

    /// Synthesizes the vector of an integer conversion: inexact, plus
    /// invalid when the backend flagged a range error.
    pub(crate) fn from_conversion() -> Self {
        let f = backend::flags();
        Exceptions {
            inexact: f.inexact,
            invalid: f.erange,
            ..Default::default()
        }
    }
}
