//! Splitting an input file into expression lines.

/// One expression line of an input file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Byte offset of the line's first character within the file.
    pub offset: usize,
    /// The line without its terminator.
    pub text: &'a str,
}

/// Lines holding an expression: everything except blank lines and lines
/// starting with `//`.
pub fn expression_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let text = raw.trim_end_matches(['\n', '\r']);
        let trimmed = text.trim_start();
        if !trimmed.is_empty() && !trimmed.starts_with("//") {
            lines.push(SourceLine {
                number: index + 1,
                offset,
                text,
            });
        }
        offset += raw.len();
    }
    lines
}

/// Rebuild `source` with the given lines (ascending line numbers) replaced,
/// keeping every other line and all line terminators as they were.
pub fn replace_lines(source: &str, replacements: &[(usize, String)]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pending = replacements.iter().peekable();
    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let text = raw.trim_end_matches(['\n', '\r']);
        match pending.next_if(|(number, _)| *number == index + 1) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push_str(text),
        }
        out.push_str(&raw[text.len()..]);
    }
    out
}
