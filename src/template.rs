// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime `%`-verb interpolation for log templates.
//!
//! Log templates are ordinary strings with `%` verbs, filled positionally from a slice
//! of [`Display`] values.  Because the template is only known at runtime, a mismatch
//! between verbs and values cannot be rejected at compile time; instead it degrades into
//! visible markers in the output:
//!
//! | Situation                         | Rendered as             |
//! |-----------------------------------|-------------------------|
//! | `%%`                              | `%`                     |
//! | verb with no value left           | `%!d(MISSING)`          |
//! | `%` at the very end               | `%!(NOVERB)`            |
//! | values left over                  | `%!(EXTRA a, b)`        |
//!
//! Every verb letter renders through `Display`.  `%q` additionally quotes the value.
//! Width, precision and the `-`/`0` flags are honored.
//!
//! ```
//! use linelog::interpolate;
//! assert_eq!(interpolate("disk at %d%%", &[&92]), "disk at 92%");
//! assert_eq!(interpolate("%s and %s", &[&"one"]), "one and %!s(MISSING)");
//! assert_eq!(interpolate("done", &[&1, &2]), "done%!(EXTRA 1, 2)");
//! ```

use std::fmt::{Display, Write};
use std::iter::Peekable;
use std::str::Chars;

/// Width, precision and flags parsed between `%` and the verb.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct VerbSpec {
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Interpolates `args` into `template` positionally.
///
/// Never panics, whatever the template looks like.
pub fn interpolate(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + 8 * args.len());
    let mut next = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let spec = parse_spec(&mut chars);
        match chars.next() {
            None => out.push_str("%!(NOVERB)"),
            Some('%') => out.push('%'),
            Some(verb) => match args.get(next) {
                Some(arg) => {
                    next += 1;
                    write_value(&mut out, verb, *arg, spec);
                }
                None => {
                    out.push_str("%!");
                    out.push(verb);
                    out.push_str("(MISSING)");
                }
            },
        }
    }

    if let Some(extra) = args.get(next..).filter(|rest| !rest.is_empty()) {
        out.push_str("%!(EXTRA ");
        for (i, arg) in extra.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{arg}");
        }
        out.push(')');
    }
    out
}

fn parse_spec(chars: &mut Peekable<Chars<'_>>) -> VerbSpec {
    let mut spec = VerbSpec::default();
    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => spec.left = true,
            '0' => spec.zero = true,
            '+' | ' ' | '#' => {}
            _ => break,
        }
        chars.next();
    }
    spec.width = parse_number(chars);
    if chars.peek() == Some(&'.') {
        chars.next();
        spec.precision = Some(parse_number(chars).unwrap_or(0));
    }
    spec
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    value
}

fn write_value(out: &mut String, verb: char, arg: &dyn Display, spec: VerbSpec) {
    let mut rendered = match spec.precision {
        Some(precision) => format!("{arg:.precision$}"),
        None => arg.to_string(),
    };
    if verb == 'q' {
        rendered = format!("{rendered:?}");
    }

    let len = rendered.chars().count();
    let pad = spec.width.map_or(0, |w| w.saturating_sub(len));
    if pad == 0 {
        out.push_str(&rendered);
    } else if spec.left {
        out.push_str(&rendered);
        out.extend(std::iter::repeat_n(' ', pad));
    } else if spec.zero {
        // zeros go between the sign and the digits
        let (sign, digits) = match rendered.strip_prefix(['-', '+']) {
            Some(rest) => rendered.split_at(rendered.len() - rest.len()),
            None => ("", rendered.as_str()),
        };
        out.push_str(sign);
        out.extend(std::iter::repeat_n('0', pad));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat_n(' ', pad));
        out.push_str(&rendered);
    }
}
