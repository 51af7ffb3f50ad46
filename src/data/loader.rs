use std::path::Path;

use log::{debug, info};

use crate::error::{G25Error, Result};

use super::model::Sample;
use super::record::{is_skippable, parse_record};
use super::validate::first_non_finite;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every sample from a G25 text file.
///
/// The file is decoded as UTF-8, replacing invalid byte sequences. See
/// [`load_str`] for the line rules.
pub fn load_file(path: &Path) -> Result<Vec<Sample>> {
    let bytes = std::fs::read(path).map_err(|source| G25Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(path, &String::from_utf8_lossy(&bytes))
}

/// Parse and validate the lines of `text`, in order.
///
/// Lines end at any of the breaks in [`is_line_break`], with `\r\n` counted
/// once. Blank and `#` comment lines are skipped. The first malformed or
/// non-finite record aborts the load; `source` only labels errors.
pub fn load_str(source: &Path, text: &str) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in split_lines(text).enumerate() {
        let line_no = idx + 1;
        if is_skippable(raw) {
            debug!("{}:{line_no}: skipped blank/comment line", source.display());
            skipped += 1;
            continue;
        }

        let (name, vector) = parse_record(raw.trim()).map_err(|reason| G25Error::Format {
            path: source.to_path_buf(),
            line_no,
            line: raw.to_string(),
            reason,
        })?;

        if let Some((index, value)) = first_non_finite(&vector) {
            return Err(G25Error::Validation {
                path: source.to_path_buf(),
                line_no,
                name,
                index: index + 1,
                value,
            });
        }

        debug!("{}:{line_no}: accepted {name:?}", source.display());
        samples.push(Sample { name, vector });
    }

    if samples.is_empty() {
        return Err(G25Error::NoSamples {
            path: source.to_path_buf(),
        });
    }

    info!(
        "loaded {} sample(s) from {} ({skipped} blank/comment line(s) skipped)",
        samples.len(),
        source.display()
    );
    Ok(samples)
}

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Characters that end a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line/paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Lines of `text` without their terminators. A trailing break does not start
/// an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(at) = rest.find(is_line_break) else {
            let line = rest;
            rest = "";
            return Some(line);
        };

        let line = &rest[..at];
        let brk = rest[at..].chars().next()?;
        let mut next = at + brk.len_utf8();
        if brk == '\r' && rest[next..].starts_with('\n') {
            next += 1;
        }
        rest = &rest[next..];
        Some(line)
    })
}
