// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text output services: number formatting, pooled string building, and
//! small string helpers.

use std::fmt::Display;
use std::fmt::Write;

pub mod fmt;
pub mod pool;

pub use self::fmt::{fmt_float, fmt_float3, fmt_int, parse_float, parse_int, ParseError};
pub use self::pool::StrPool;

/// Right-pads `s` with `fill` up to `len` characters.
///
/// Strings already at or beyond `len` come back unchanged.
pub fn str_pad(s: &str, len: usize, fill: char) -> String {
    let mut out = String::from(s);
    while out.chars().count() < len {
        out.push(fill);
    }
    out
}

/// Removes a matching `[...]` or `<...>` wrapper, if present.
///
/// Surrounding whitespace is trimmed before the check; input without a
/// recognized wrapper comes back as-is (untrimmed).
pub fn strip_enclosure(s: &str) -> &str {
    let t = s.trim();
    if t.len() >= 2 {
        let open = t.as_bytes()[0];
        let close = t.as_bytes()[t.len() - 1];
        if (open == b'[' && close == b']') || (open == b'<' && close == b'>') {
            return &t[1..t.len() - 1];
        }
    }
    s
}

/// Joins items with `delim`, optionally wrapped in an enclosure pair,
/// building through the pool.
pub fn join<T: Display>(
    pool: &mut StrPool,
    items: &[T],
    delim: char,
    enclosure: Option<(char, char)>,
) -> String {
    let mut buf = pool.acquire();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buf.push(delim);
        }
        let _ = write!(buf, "{item}");
    }
    if let Some((open, close)) = enclosure {
        buf.insert(0, open);
        buf.push(close);
    }
    pool.dispose(buf)
}

/// The `[a,b,c]` list form used when logging collections.
pub fn bracket_list<T: Display>(pool: &mut StrPool, items: &[T]) -> String {
    join(pool, items, ',', Some(('[', ']')))
}
