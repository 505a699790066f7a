/*!
Rounding modes.

The model understands the five IEEE 754-2008 attributes the hardware
drives. On the wire a mode travels as an integer code; any code
outside the table decodes to nearest-ties-to-even, which is how the
backend treats modes it does not know.
*/

use gmp_mpfr_sys::mpfr::rnd_t;

/// Rounding modes for every rounding operation in the model.
///
/// The wire encoding is:
///
/// | code | mode |
/// |------|------|
/// | 0 | [`NearestTiesToEven`][RoundingMode::NearestTiesToEven] |
/// | 1 | [`ToZero`][RoundingMode::ToZero] |
/// | 2 | [`ToNegative`][RoundingMode::ToNegative] |
/// | 3 | [`ToPositive`][RoundingMode::ToPositive] |
/// | 4 | [`NearestTiesAwayZero`][RoundingMode::NearestTiesAwayZero] |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    NearestTiesToEven,
    ToZero,
    ToNegative,
    ToPositive,
    NearestTiesAwayZero,
}

impl RoundingMode {
    /// Decodes the integer rounding-mode code used on the wire.
    pub fn from_wire(code: i32) -> Self {
        match code {
            1 => RoundingMode::ToZero,
            2 => RoundingMode::ToNegative,
            3 => RoundingMode::ToPositive,
            4 => RoundingMode::NearestTiesAwayZero,
            _ => RoundingMode::NearestTiesToEven,
        }
    }

    /// The matching backend rounding mode.
    #[allow(deprecated)]
    pub(crate) fn raw(self) -> rnd_t {
        match self {
            RoundingMode::NearestTiesToEven => rnd_t::RNDN,
            RoundingMode::ToZero => rnd_t::RNDZ,
            RoundingMode::ToNegative => rnd_t::RNDD,
            RoundingMode::ToPositive => rnd_t::RNDU,
            RoundingMode::NearestTiesAwayZero => rnd_t::RNDNA,
        }
    }
}
