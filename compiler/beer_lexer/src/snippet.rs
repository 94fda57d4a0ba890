//! Source snippets with a caret line under the offending range.

use crate::position::{Position, Span};

/// Renders every source line touched by `start..end`, each followed by a line of
/// carets under the covered columns.
///
/// Zero-width ranges (end of input) still get one caret. A range that stops at
/// column 0 of a later line ends on the line before it.
pub fn render_snippet(start: &Position<'_>, end: &Position<'_>) -> String {
    let lines: Vec<&str> = start.source_text.split('\n').collect();

    let last_line = if end.line > start.line && end.column <= 0 {
        end.line - 1
    } else {
        end.line.max(start.line)
    };

    let mut out = String::new();
    for line_no in start.line..=last_line {
        let line = lines.get(line_no).copied().unwrap_or("");
        let line_len = line.chars().count();

        let from = if line_no == start.line {
            start.column.max(0) as usize
        } else {
            0
        };
        let to = if line_no == end.line {
            end.column.max(0) as usize
        } else {
            line_len
        };
        let width = to.saturating_sub(from).max(1);

        out.push_str(line);
        out.push('\n');
        // Keep tabs so the carets line up with what the terminal shows
        out.extend(
            line.chars()
                .chain(std::iter::repeat(' '))
                .take(from)
                .map(|c| if c == '\t' { '\t' } else { ' ' }),
        );
        out.push_str(&"^".repeat(width));

        if line_no != last_line {
            out.push('\n');
        }
    }
    out
}

/// `"{kind}: {details}\nFile: {name}, line {line}\n{snippet}"`.
///
/// Positions store 0-based lines; the report counts from 1, the same as
/// `Position`'s `Display` and the line numbers editors show.
pub fn render_report(kind: &str, details: &str, span: &Span<'_>) -> String {
    format!(
        "{kind}: {details}\nFile: {}, line {}\n{}",
        span.start.source_name,
        span.start.line + 1,
        render_snippet(&span.start, &span.end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pos(text: &'static str, index: isize, line: usize, column: isize) -> Position<'static> {
        Position::new(index, line, column, "<test>", text)
    }

    #[test]
    fn test_single_character() {
        let text = "1 + x";
        let out = render_snippet(&pos(text, 4, 0, 4), &pos(text, 5, 0, 5));
        assert_eq!(out, "1 + x\n    ^");
    }

    #[test]
    fn test_multi_character_range() {
        let text = "12.5 * 3";
        let out = render_snippet(&pos(text, 0, 0, 0), &pos(text, 4, 0, 4));
        assert_eq!(out, "12.5 * 3\n^^^^");
    }

    #[test]
    fn test_zero_width_at_end_of_input() {
        let text = "2 + ";
        let out = render_snippet(&pos(text, 4, 0, 4), &pos(text, 4, 0, 4));
        assert_eq!(out, "2 + \n    ^");
    }

    #[test]
    fn test_tabs_are_kept_in_prefix() {
        let text = "\t1 ?";
        let out = render_snippet(&pos(text, 3, 0, 3), &pos(text, 4, 0, 4));
        assert_eq!(out, "\t1 ?\n\t  ^");
    }

    #[test]
    fn test_range_ending_at_next_line_start() {
        let text = "1\n2";
        let out = render_snippet(&pos(text, 1, 0, 1), &pos(text, 2, 1, 0));
        assert_eq!(out, "1\n ^");
    }

    #[test]
    fn test_range_across_lines() {
        let text = "ab\ncd";
        let out = render_snippet(&pos(text, 1, 0, 1), &pos(text, 4, 1, 1));
        assert_eq!(out, "ab\n ^\ncd\n^");
    }

    #[test]
    fn test_report_layout() {
        let text = "1 + x";
        let span = Span::new(pos(text, 4, 0, 4), pos(text, 5, 0, 5));
        assert_eq!(
            render_report("Illegal Character", "'x'", &span),
            "Illegal Character: 'x'\nFile: <test>, line 1\n1 + x\n    ^"
        );
    }

    #[test]
    fn test_report_counts_lines_from_one() {
        let text = "1 +\n2 *\n3 @";
        let at = pos(text, 10, 2, 2);
        let span = Span::new(at, pos(text, 11, 2, 3));
        assert_eq!(at.to_string(), "<test>:3:3");
        assert_eq!(
            render_report("Illegal Character", "'@'", &span),
            "Illegal Character: '@'\nFile: <test>, line 3\n3 @\n  ^"
        );
    }
}
