// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Renders error text as an indented continuation block.

Long error messages are easier to read when they don't run off the side of the terminal.
The block opens with [WRAP_PREFIX] and re-inserts it after the first space that follows
every run of more than [WRAP_AFTER] characters, so lines are only ever broken between
words:

```text
Error | 2024/01/02 03:04:05 | something failed
      | because of a downstream condition that
      | was too long to fit on one line
```

Word boundaries are ASCII spaces only.  Counting is per `char`, so multi-byte text is
never split inside a code point.  For ASCII text a char and a byte are the same thing,
but non-ASCII text wraps later than a byte count would: thirty `é` followed by a space
is 61 bytes yet only 31 characters, so it stays on one line.
*/

/// Opens the error block and every continuation line.
pub const WRAP_PREFIX: &str = "\n      | ";

/// Once a line holds more than this many characters, the next space breaks it.
pub const WRAP_AFTER: usize = 50;

/**
Wraps `text` into a continuation block.

The result always starts with [WRAP_PREFIX].  A word longer than the limit is never
broken, and there is no forced break at the end of the text.

```
use linelog::wrap_error_text;
assert_eq!(wrap_error_text("error message"), "\n      | error message");
```
*/
pub fn wrap_error_text(text: &str) -> String {
    let breaks = text.len() / WRAP_AFTER;
    let mut out = String::with_capacity(WRAP_PREFIX.len() * (breaks + 1) + text.len());
    out.push_str(WRAP_PREFIX);

    let mut count = 0usize;
    let mut pending = false;
    for c in text.chars() {
        out.push(c);
        count += 1;
        if count > WRAP_AFTER {
            pending = true;
        }
        if pending && c == ' ' {
            out.push_str(WRAP_PREFIX);
            pending = false;
            count = 0;
        }
    }
    out
}
