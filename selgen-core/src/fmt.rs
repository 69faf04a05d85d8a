//! Formats generated Scala source.
//!
//! This is a re-indenter, not a full formatter: it normalizes leading
//! whitespace from delimiter nesting, trims trailing whitespace, collapses
//! blank-line runs, and guarantees a single trailing newline. Contents of
//! string literals (including triple-quoted literals) are never altered,
//! and the result is stable under repeated formatting.

/// Options controlling the formatter output.
#[derive(Clone, Copy, Debug)]
pub struct FmtOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Maximum run of consecutive blank lines.
    pub max_blank_lines: usize,
}

impl Default for FmtOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            max_blank_lines: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FmtError {
    #[error("unbalanced closing delimiter on line {line}")]
    UnbalancedDelimiter { line: usize },
    #[error("unclosed delimiter at end of input")]
    UnclosedDelimiter,
}

/// Lexical state carried across lines.
enum LineState {
    Code,
    /// Inside a block comment; holds the indent column of the opening line.
    BlockComment { base: usize },
    /// Inside a triple-quoted string literal.
    TripleString,
}

/// Formats a single blob of Scala source.
pub fn format_source(source: &str, options: &FmtOptions) -> Result<String, FmtError> {
    let mut out = String::with_capacity(source.len());
    let mut depth: i64 = 0;
    let mut state = LineState::Code;
    let mut pending_blanks = 0usize;
    let mut saw_content = false;

    for (line_no, line) in source.lines().enumerate() {
        let line_no = line_no + 1;
        match state {
            LineState::TripleString => {
                // String content; emit verbatim. Only the text after a
                // closing `"""` participates in nesting again.
                out.push_str(line);
                out.push('\n');
                if let Some(close) = line.find("\"\"\"") {
                    state = LineState::Code;
                    scan_code(&line[close + 3..], &mut depth, &mut state, line_no)?;
                }
                continue;
            }
            LineState::BlockComment { base } => {
                let trimmed = line.trim();
                if trimmed.starts_with('*') {
                    // Scaladoc continuation: stars align under the opener.
                    push_indented(&mut out, base + 2, trimmed);
                } else {
                    out.push_str(line.trim_end());
                    out.push('\n');
                }
                if let Some(close) = trimmed.find("*/") {
                    state = LineState::Code;
                    scan_code(&trimmed[close + 2..], &mut depth, &mut state, line_no)?;
                }
                continue;
            }
            LineState::Code => {}
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            if saw_content {
                pending_blanks += 1;
            }
            continue;
        }

        // Closing delimiters at the start of a line dedent that line.
        let leading_closers = trimmed
            .chars()
            .take_while(|c| matches!(c, '}' | ')' | ']'))
            .count() as i64;
        let level = depth - leading_closers;
        if level < 0 {
            return Err(FmtError::UnbalancedDelimiter { line: line_no });
        }

        // Blank lines directly before a closing delimiter are dropped.
        if leading_closers == 0 {
            for _ in 0..pending_blanks.min(options.max_blank_lines) {
                out.push('\n');
            }
        }
        pending_blanks = 0;
        saw_content = true;

        let indent = level as usize * options.indent_width;
        push_indented(&mut out, indent, trimmed);
        if trimmed.starts_with("/*") {
            state = LineState::BlockComment { base: indent };
            if let Some(close) = trimmed.find("*/") {
                state = LineState::Code;
                scan_code(&trimmed[close + 2..], &mut depth, &mut state, line_no)?;
            }
        } else {
            scan_code(trimmed, &mut depth, &mut state, line_no)?;
        }
        if let LineState::BlockComment { .. } = state {
            state = LineState::BlockComment { base: indent };
        }
    }

    if depth != 0 {
        return Err(FmtError::UnclosedDelimiter);
    }
    Ok(out)
}

fn push_indented(out: &mut String, indent: usize, content: &str) {
    for _ in 0..indent {
        out.push(' ');
    }
    out.push_str(content);
    out.push('\n');
}

/// Scans a run of code for delimiters, updating `depth` and `state`.
///
/// Stops at a line comment, and enters the appropriate state on a block
/// comment or triple-quoted string opener that's left open at the end of
/// the run. Single-line string literals are skipped over.
fn scan_code(
    code: &str,
    depth: &mut i64,
    state: &mut LineState,
    line_no: usize,
) -> Result<(), FmtError> {
    let bytes = code.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => return Ok(()),
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                match code[i + 2..].find("*/") {
                    Some(close) => i += 2 + close + 2,
                    None => {
                        *state = LineState::BlockComment { base: 0 };
                        return Ok(());
                    }
                }
            }
            b'"' if bytes.get(i + 1) == Some(&b'"') && bytes.get(i + 2) == Some(&b'"') => {
                match code[i + 3..].find("\"\"\"") {
                    Some(close) => i += 3 + close + 3,
                    None => {
                        *state = LineState::TripleString;
                        return Ok(());
                    }
                }
            }
            b'"' => {
                i += 1;
                while i < bytes.len() {
                    match bytes[i] {
                        b'\\' => i += 2,
                        b'"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
            }
            b'{' | b'(' | b'[' => {
                *depth += 1;
                i += 1;
            }
            b'}' | b')' | b']' => {
                *depth -= 1;
                if *depth < 0 {
                    return Err(FmtError::UnbalancedDelimiter { line: line_no });
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    Ok(())
}
