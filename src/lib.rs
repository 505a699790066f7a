/*!
`vpfloat` is a reference model for variable-precision binary
floating-point arithmetic with an IEEE 754-2008 style encoding. It is
the golden model an RTL floating-point unit is co-simulated against:
for every operation the hardware performs, the model produces the
architecturally correct result bit pattern and the IEEE exception flag
vector.

Formats are runtime parameters, not compile-time constants. An [`Env`]
carries the total bit size and the exponent field width, covering IEEE
half, single and double as well as arbitrary shapes in between.
Encoded values live in caller-allocated little-endian arrays of 32-bit
words; the [`datum`] module reads, classifies and writes them, the
[`codec`] module bridges them exactly to the MPFR backend, and [`ops`]
wraps each primitive with the pre-classification, exponent-range setup
and exception synthesis the architecture requires. The [`ffi`] module
exposes one C entry point per operation for the HDL simulator.

The backend carries its rounding state (exponent range and sticky
flags) outside of any value, so the model runs one operation at a
time; every operation re-initializes that state on entry.
*/

pub mod codec;
pub mod datum;
pub mod dump;
pub mod env;
pub mod ffi;
pub mod ops;
pub mod round;

mod backend;
mod bits;

pub use crate::datum::Class;
pub use crate::env::Env;
pub use crate::ops::Exceptions;
pub use crate::round::RoundingMode;
