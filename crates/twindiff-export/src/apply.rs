//! Unified-patch parser and applier.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use twindiff_diff::split_lines;

use crate::error::{ExportError, ExportResult};
use crate::patch::{DiffHunk, DiffLine, Patch};

static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("hunk header pattern is valid")
});

/// Parse a unified patch and apply it to `left`, returning the patched text.
pub fn apply_patch(left: &str, patch: &str) -> ExportResult<String> {
    parse_patch(patch)?.apply(left)
}

/// Parse unified-diff text into a [`Patch`].
///
/// Accepts `' '`, `-`, `+` body lines and `\ No newline at end of file`
/// markers. An empty body line is read as empty context.
pub fn parse_patch(text: &str) -> ExportResult<Patch> {
    let lines = split_lines(text);
    let left_name = header(&lines, 0, "--- ")?;
    let right_name = header(&lines, 1, "+++ ")?;

    let mut hunks = Vec::new();
    let mut idx = 2;
    while idx < lines.len() {
        let (hunk, next) = parse_hunk(&lines, idx)?;
        hunks.push(hunk);
        idx = next;
    }

    Ok(Patch {
        left_name,
        right_name,
        hunks,
    })
}

impl FromStr for Patch {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_patch(s)
    }
}

fn header(lines: &[&str], idx: usize, prefix: &str) -> ExportResult<String> {
    lines
        .get(idx)
        .and_then(|line| line.strip_prefix(prefix))
        .map(str::to_string)
        .ok_or_else(|| ExportError::MalformedPatch {
            line: idx + 1,
            reason: format!("expected header starting with {prefix:?}"),
        })
}

fn count(caps: &regex::Captures<'_>, group: usize, line: usize) -> ExportResult<usize> {
    match caps.get(group) {
        Some(m) => m.as_str().parse().map_err(|_| ExportError::MalformedPatch {
            line,
            reason: format!("line number out of range: {}", m.as_str()),
        }),
        None => Ok(1),
    }
}

/// Parse the hunk whose header is at `idx`. Returns the hunk and the index
/// of the first line after it.
fn parse_hunk(lines: &[&str], mut idx: usize) -> ExportResult<(DiffHunk, usize)> {
    let header_line = idx + 1;
    let caps = HUNK_HEADER
        .captures(lines[idx])
        .ok_or_else(|| ExportError::MalformedPatch {
            line: header_line,
            reason: "expected hunk header".into(),
        })?;
    let mut hunk = DiffHunk {
        left_start: count(&caps, 1, header_line)?,
        left_count: count(&caps, 2, header_line)?,
        right_start: count(&caps, 3, header_line)?,
        right_count: count(&caps, 4, header_line)?,
        lines: Vec::new(),
    };
    if hunk.left_count > 0 && hunk.left_start == 0 {
        return Err(ExportError::MalformedPatch {
            line: header_line,
            reason: "non-empty range cannot start at line 0".into(),
        });
    }
    idx += 1;

    let (mut seen_left, mut seen_right) = (0, 0);
    while seen_left < hunk.left_count || seen_right < hunk.right_count {
        let Some(&body) = lines.get(idx) else {
            return Err(ExportError::MalformedPatch {
                line: idx + 1,
                reason: "hunk ends before its header's line counts".into(),
            });
        };
        let line = match body.chars().next() {
            None => DiffLine::Context(String::new()),
            Some(' ') => DiffLine::Context(body[1..].to_string()),
            Some('-') => DiffLine::Removed(body[1..].to_string()),
            Some('+') => DiffLine::Added(body[1..].to_string()),
            Some('\\') => DiffLine::NoNewline,
            Some(_) => {
                return Err(ExportError::MalformedPatch {
                    line: idx + 1,
                    reason: format!("unexpected hunk line {body:?}"),
                })
            }
        };
        match line {
            DiffLine::Context(_) => {
                seen_left += 1;
                seen_right += 1;
            }
            DiffLine::Removed(_) => seen_left += 1,
            DiffLine::Added(_) => seen_right += 1,
            DiffLine::NoNewline => {}
        }
        hunk.lines.push(line);
        idx += 1;
    }
    if seen_left > hunk.left_count || seen_right > hunk.right_count {
        return Err(ExportError::MalformedPatch {
            line: header_line,
            reason: "hunk body is longer than its header's line counts".into(),
        });
    }
    if lines.get(idx).is_some_and(|l| l.starts_with('\\')) {
        hunk.lines.push(DiffLine::NoNewline);
        idx += 1;
    }

    Ok((hunk, idx))
}

impl Patch {
    /// Apply this patch to `left`.
    ///
    /// Every context and removed line is checked against `left`; hunks must
    /// appear in order and must not overlap.
    pub fn apply(&self, left: &str) -> ExportResult<String> {
        let source = split_lines(left);
        let source_eol = |idx: usize| idx + 1 < source.len() || left.ends_with('\n');

        // Each output line with whether a newline follows it.
        let mut out: Vec<(&str, bool)> = Vec::with_capacity(source.len());
        let mut cursor = 0;

        for hunk in &self.hunks {
            let start = if hunk.left_count == 0 {
                hunk.left_start
            } else {
                hunk.left_start - 1
            };
            if start < cursor || start > source.len() {
                return Err(ExportError::HunkOutOfRange {
                    start: hunk.left_start,
                    len: source.len(),
                });
            }
            out.extend((cursor..start).map(|i| (source[i], source_eol(i))));
            cursor = start;

            let mut prev_added = false;
            for line in &hunk.lines {
                match line {
                    DiffLine::Context(text) => {
                        expect_line(&source, cursor, text)?;
                        out.push((source[cursor], source_eol(cursor)));
                        cursor += 1;
                    }
                    DiffLine::Removed(text) => {
                        expect_line(&source, cursor, text)?;
                        cursor += 1;
                    }
                    DiffLine::Added(text) => out.push((text.as_str(), true)),
                    DiffLine::NoNewline => {
                        if prev_added {
                            if let Some(last) = out.last_mut() {
                                last.1 = false;
                            }
                        }
                    }
                }
                prev_added = matches!(line, DiffLine::Added(_));
            }
        }
        out.extend((cursor..source.len()).map(|i| (source[i], source_eol(i))));
        debug!(hunks = self.hunks.len(), lines = out.len(), "patch applied");

        let mut result = out.iter().map(|(text, _)| *text).collect::<Vec<_>>().join("\n");
        if out.last().is_some_and(|(_, eol)| *eol) {
            result.push('\n');
        }
        Ok(result)
    }
}

fn expect_line(source: &[&str], idx: usize, expected: &str) -> ExportResult<()> {
    match source.get(idx) {
        Some(actual) if *actual == expected => Ok(()),
        actual => Err(ExportError::PatchMismatch {
            line: idx + 1,
            expected: expected.to_string(),
            actual: actual.map_or_else(|| "<end of text>".to_string(), |a| a.to_string()),
        }),
    }
}
