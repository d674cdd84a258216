/*!
A parser and printer for POSIX `TZ` strings.

The grammar is `std offset[dst[offset][,start[/time],end[/time]]]`, where
`start` and `end` are one of `Jn` (a one based day of the year that never
counts February 29th), `n` (a zero based day of the year that does) or
`Mm.w.d` (weekday `d` of week `w` in month `m`, where week `5` means the
last one).

Offsets in a `TZ` string are positive west of UTC, which is the opposite of
[`Offset`](crate::tz::Offset). The parser and printer flip the sign.

The transition time may be negative or larger than a day, like
`M3.4.4/26`. It is stored as an hour of the day plus a days offset on the
[`TransitionRule`](crate::tz::TransitionRule), and printed back as a single
signed number of hours.
*/

pub(crate) use self::{
    parse::{parse, parse_prefix},
    print::{effective_abbreviation, print},
};

mod parse;
mod print;
