// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leading-space to tab conversion for serialized output.
//!
//! Consul's own `kv export` indents with tabs. `serde_json` only indents with a
//! fixed string, so the export is pretty-printed with spaces first and rewritten
//! here afterwards.

/// Converts runs of leading spaces into tabs, one tab per `indent` spaces.
///
/// Only lines that follow a newline are rewritten; the first line is left alone.
/// A remainder shorter than `indent` is dropped, so with `indent = 4` six
/// leading spaces become a single tab. Everything after the leading run,
/// including any later spaces, is untouched.
///
/// `indent` must be non-zero; callers pass the serializer's fixed width.
pub(crate) fn leading_spaces_to_tabs(content: &str, indent: usize) -> String {
    assert!(indent > 0, "indent width must be non-zero");

    let mut output = String::with_capacity(content.len());
    let mut lines = content.split('\n');

    if let Some(first) = lines.next() {
        output.push_str(first);
    }

    for line in lines {
        output.push('\n');
        let body = line.trim_start_matches(' ');
        let spaces = line.len() - body.len();
        output.extend(std::iter::repeat('\t').take(spaces / indent));
        output.push_str(body);
    }

    output
}
