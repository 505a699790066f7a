/*!
Debug renderers for encoded datums.

Both functions produce plain strings for logging from a testbench or a
debugger session; nothing in the dispatcher depends on them.
*/

use std::fmt::Write;

use crate::bits;
use crate::datum::{self, Class};
use crate::env::Env;

/// Renders the raw S, E and T fields, one per line, the E field both
/// in binary and as its integer value.
pub fn fields(x: &[u32], env: Env) -> String {
    let mut out = String::new();
    let e = datum::biased_exp(x, env);

    writeln!(out, "S = {}", datum::sign(x, env) as u8).unwrap();

    out.push_str("E = ");
    for i in (0..env.w()).rev() {
        write!(out, "{}", (e >> i) & 1).unwrap();
    }
    writeln!(out, " = {}", e).unwrap();

    out.push_str("T = ");
    for i in (env.t_lsb()..=env.t_msb()).rev() {
        out.push(if bits::get(x, i) { '1' } else { '0' });
    }
    out.push('\n');
    out
}

/// Renders the value: binary scientific notation for finite non-zero
/// numbers, the conventional name otherwise.
pub fn value(x: &[u32], env: Env) -> String {
    match datum::classify(x, env) {
        Class::Zero(s) => format!("{}0", if s { "-" } else { "" }),
        Class::Infinity(s) => format!("{}Inf", if s { "-" } else { "+" }),
        Class::Nan { quiet: true } => "quiet NaN".to_owned(),
        Class::Nan { quiet: false } => "signaling NaN".to_owned(),
        class @ (Class::Subnormal(_) | Class::Normal(_)) => {
            let normal = matches!(class, Class::Normal(_));
            let mut out = String::new();
            if datum::sign(x, env) {
                out.push('-');
            }
            out.push(if normal { '1' } else { '0' });
            out.push('.');
            for i in (env.t_lsb()..=env.t_msb()).rev() {
                out.push(if bits::get(x, i) { '1' } else { '0' });
            }
            let exponent = if normal {
                datum::biased_exp(x, env) as i64 - env.bias()
            } else {
                env.emin()
            };
            write!(out, "e{}", exponent).unwrap();
            out
        }
    }
}
