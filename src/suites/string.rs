//! String workloads. Each one repeats a single operation `loop_count` times.

use std::hint::black_box;

use crate::{
    error::{RegistrationError, WorkloadError},
    registry::RegistryBuilder,
    workload::repeat,
};

pub const FIRST: &str = "first";
pub const SECOND: &str = "second";
pub const FIRST_SECOND: &str = "first_second";

pub fn concat(first: &str, second: &str) -> String {
    let mut s = String::with_capacity(first.len() + second.len());
    s.push_str(first);
    s.push_str(second);
    s
}

pub fn contains_both() -> (bool, bool) {
    (
        black_box(FIRST).contains(black_box(SECOND)),
        black_box(FIRST_SECOND).contains(black_box(FIRST)),
    )
}

pub fn eq_concat() -> bool {
    black_box(FIRST_SECOND) == concat(&concat(black_box(FIRST), "_"), black_box(SECOND))
}

pub fn compare() -> (bool, bool) {
    (
        black_box(FIRST) > black_box(SECOND),
        black_box(FIRST_SECOND) < black_box(SECOND),
    )
}

/// The character at `index`, counted in chars rather than bytes.
pub fn char_at(s: &str, index: usize) -> Result<char, WorkloadError> {
    s.chars()
        .nth(index)
        .ok_or_else(|| WorkloadError::IndexOutOfRange {
            index,
            len: s.chars().count(),
        })
}

pub fn take_chars() -> Result<(char, char), WorkloadError> {
    Ok((char_at(black_box(FIRST), 3)?, char_at(black_box(SECOND), 2)?))
}

/// The chars in `start..end`. Unlike byte slicing this never splits a code point.
pub fn slice(s: &str, start: usize, end: usize) -> Result<&str, WorkloadError> {
    let len = s.chars().count();
    if start > end || end > len {
        return Err(WorkloadError::SliceOutOfRange { start, end, len });
    }
    let offset = |i: usize| s.char_indices().nth(i).map_or(s.len(), |(b, _)| b);
    Ok(&s[offset(start)..offset(end)])
}

/// First char title-cased, the rest lower-cased.
///
/// The rest is lower-cased as a whole string so a word-final `Σ` becomes `ς`.
pub fn capitalize(s: &str) -> String {
    let Some(first) = s.chars().next() else {
        return String::new();
    };
    let mut result = String::with_capacity(s.len());
    push_title_case(&mut result, first);
    let lower = s.to_lowercase();
    // Only sigma lowers by context, and never at the start, so the prefix length is fixed.
    let skip = first.to_lowercase().map(char::len_utf8).sum::<usize>();
    result.push_str(&lower[skip..]);
    result
}

/// Title case of `c`. It equals the upper case except for digraphs, ligatures,
/// Georgian letters and Greek letters with a iota subscript.
fn push_title_case(out: &mut String, c: char) {
    let mapped = match c {
        'ß' => "Ss",
        '\u{1C4}'..='\u{1C6}' => "\u{1C5}",
        '\u{1C7}'..='\u{1C9}' => "\u{1C8}",
        '\u{1CA}'..='\u{1CC}' => "\u{1CB}",
        '\u{1F1}'..='\u{1F3}' => "\u{1F2}",
        '\u{587}' => "\u{535}\u{582}",
        '\u{1FB2}' => "\u{1FBA}\u{345}",
        '\u{1FB4}' => "\u{386}\u{345}",
        '\u{1FB7}' => "\u{391}\u{342}\u{345}",
        '\u{1FC2}' => "\u{1FCA}\u{345}",
        '\u{1FC4}' => "\u{389}\u{345}",
        '\u{1FC7}' => "\u{397}\u{342}\u{345}",
        '\u{1FF2}' => "\u{1FFA}\u{345}",
        '\u{1FF4}' => "\u{38F}\u{345}",
        '\u{1FF7}' => "\u{3A9}\u{342}\u{345}",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{FB13}' => "\u{544}\u{576}",
        '\u{FB14}' => "\u{544}\u{565}",
        '\u{FB15}' => "\u{544}\u{56B}",
        '\u{FB16}' => "\u{54E}\u{576}",
        '\u{FB17}' => "\u{544}\u{56D}",
        // Georgian Mkhedruli has no title case form
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => {
            out.push(c);
            return;
        }
        // Already title case
        '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{1FBC}'
        | '\u{1FCC}'
        | '\u{1FFC}' => {
            out.push(c);
            return;
        }
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            out.extend(char::from_u32(c as u32 + 8));
            return;
        }
        '\u{1FB3}' => "\u{1FBC}",
        '\u{1FC3}' => "\u{1FCC}",
        '\u{1FF3}' => "\u{1FFC}",
        _ => {
            out.extend(c.to_uppercase());
            return;
        }
    };
    out.push_str(mapped);
}

/// Non-overlapping occurrences of `needle`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

pub fn register(builder: &mut RegistryBuilder, loop_count: usize) -> Result<(), RegistrationError> {
    builder
        .register("concat_test", move || {
            repeat(loop_count, || Ok(concat(black_box(FIRST), black_box(SECOND))))
        })?
        .register("contains_test", move || {
            repeat(loop_count, || Ok(contains_both()))
        })?
        .register("eq_test", move || repeat(loop_count, || Ok(eq_concat())))?
        .register("compare_test", move || repeat(loop_count, || Ok(compare())))?
        .register("take_char_test", move || repeat(loop_count, take_chars))?
        .register("take_slice_test", move || {
            repeat(loop_count, || slice(black_box(FIRST_SECOND), 3, 8))
        })?
        .register("repeat_test", move || {
            repeat(loop_count, || Ok(black_box(FIRST_SECOND).repeat(3)))
        })?
        .register("capitalize_test", move || {
            repeat(loop_count, || Ok(capitalize(black_box(FIRST_SECOND))))
        })?
        .register("count_test", move || {
            repeat(loop_count, || {
                Ok(count_occurrences(&black_box(FIRST_SECOND).repeat(3), "i"))
            })
        })?;
    Ok(())
}
