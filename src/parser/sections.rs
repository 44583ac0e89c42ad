//! Heading-delimited section passes: syntax, code examples, see also.
//!
//! Sections are found by scanning lines, ignoring anything inside fenced
//! code so that `# comment` lines in Python examples are never mistaken for
//! headings. A fence left open at the end of a document is taken as stray
//! and does not hide the rest of it.

use regex::Regex;
use std::sync::LazyLock;

static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}[ \t]+(.*?)[ \t#]*\r?$").unwrap());

static RE_ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?a(?:\s[^>]*)?>").unwrap());

static RE_INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());

/// Opening or closing code fence.
pub fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Per-line flag: true for fence delimiters and the code between them.
///
/// An opening fence that is never closed does not count; it and every line
/// after it are ordinary Markdown.
pub fn fence_mask<'t>(lines: impl IntoIterator<Item = &'t str>) -> Vec<bool> {
    let mut mask = Vec::new();
    let mut open: Option<usize> = None;

    for (i, line) in lines.into_iter().enumerate() {
        if is_fence(line) {
            open = match open {
                Some(_) => None,
                None => Some(i),
            };
            mask.push(true);
        } else {
            mask.push(open.is_some());
        }
    }

    if let Some(start) = open {
        mask[start..].iter_mut().for_each(|fenced| *fenced = false);
    }
    mask
}

/// Body of the section headed `title`, up to the next heading of any level.
pub fn section<'t>(text: &'t str, title: &str) -> Option<&'t str> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mask = fence_mask(lines.iter().copied());
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for (line, fenced) in lines.iter().zip(mask) {
        if !fenced {
            if let Some(caps) = RE_HEADING.captures(line.trim_end_matches('\n')) {
                match start {
                    Some(s) => return Some(&text[s..offset]),
                    None if caps[1].eq_ignore_ascii_case(title) => {
                        start = Some(offset + line.len());
                    }
                    None => {}
                }
            }
        }
        offset += line.len();
    }

    start.map(|s| &text[s..])
}

/// Build the matcher for the first fenced block tagged with one of `labels`.
pub fn code_block_pattern(labels: &[String]) -> Regex {
    let alternatives: Vec<String> = labels.iter().map(|l| regex::escape(l)).collect();
    Regex::new(&format!(
        r"(?s)```[ \t]*(?:{})\b[^\n]*\n(.*?)```",
        alternatives.join("|")
    ))
    .expect("code block pattern is valid")
}

/// Contents of the first matching block, without surrounding blank lines.
pub fn first_code_block(region: &str, pattern: &Regex) -> Option<String> {
    let caps = pattern.captures(region)?;
    let body = caps[1].trim_start_matches(['\r', '\n']).trim_end();
    if body.trim().is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

/// Strip fence lines, inclusion directives and raw `<a>` tags.
pub fn clean_syntax(region: &str, include_marker: &str) -> String {
    let kept: Vec<&str> = region
        .lines()
        .filter(|line| !is_fence(line))
        .filter(|line| include_marker.is_empty() || !line.contains(include_marker))
        .collect();
    let joined = kept.join("\n");
    RE_ANCHOR_TAG.replace_all(&joined, "").trim().to_string()
}

/// Visible text of every inline link, backticks trimmed, empties dropped.
pub fn link_texts(region: &str) -> Vec<String> {
    RE_INLINE_LINK
        .captures_iter(region)
        .map(|caps| caps[1].trim().trim_matches('`').trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Display

Intro.

## Syntax

--8<-- \"docs/snippets/syntax_block_start.md\"
display: block | none;
--8<-- \"docs/snippets/syntax_block_end.md\"

## Python

```python
# Hide the widget
self.styles.display = \"none\"
```

## See also

 - [`visibility`](./visibility.md) to hide a widget.
";

    #[test]
    fn section_stops_at_next_heading() {
        let body = section(DOC, "Syntax").unwrap();
        assert!(body.contains("display: block | none;"));
        assert!(!body.contains("Python"));
    }

    #[test]
    fn section_title_is_case_insensitive() {
        assert!(section(DOC, "see also").unwrap().contains("visibility"));
    }

    #[test]
    fn comments_in_code_are_not_headings() {
        let body = section(DOC, "Python").unwrap();
        assert!(body.contains("self.styles.display"));
        assert!(section(DOC, "Hide the widget").is_none());
    }

    #[test]
    fn last_section_runs_to_end() {
        let body = section(DOC, "See also").unwrap();
        assert!(body.trim_end().ends_with("to hide a widget."));
    }

    #[test]
    fn missing_section_is_none() {
        assert!(section(DOC, "CSS").is_none());
    }

    #[test]
    fn syntax_cleanup_drops_directives_and_anchors() {
        let region = "\n--8<-- \"start.md\"\n<a href=\"./display\">display</a>: block | none;\n--8<-- \"end.md\"\n";
        assert_eq!(clean_syntax(region, "--8<--"), "display: block | none;");
    }

    #[test]
    fn syntax_cleanup_drops_fences() {
        let region = "```\nwidth: <scalar>;\n```\n";
        assert_eq!(clean_syntax(region, "--8<--"), "width: <scalar>;");
    }

    #[test]
    fn code_block_matches_any_label() {
        let pattern = code_block_pattern(&["python".to_string(), "py".to_string()]);
        let region = "\n```py title=\"app.py\"\nwidget.styles.width = 10\n```\n";
        assert_eq!(
            first_code_block(region, &pattern).as_deref(),
            Some("widget.styles.width = 10")
        );
    }

    #[test]
    fn code_block_takes_first_fence_only() {
        let pattern = code_block_pattern(&["css".to_string()]);
        let region = "```css\na {}\n```\n\n```css\nb {}\n```\n";
        assert_eq!(first_code_block(region, &pattern).as_deref(), Some("a {}"));
    }

    #[test]
    fn empty_code_block_is_none() {
        let pattern = code_block_pattern(&["css".to_string()]);
        assert_eq!(first_code_block("```css\n\n```\n", &pattern), None);
    }

    #[test]
    fn unclosed_fence_does_not_hide_headings() {
        let text = "# X\n\n```css\nstray: 1;\n\n## Syntax\n\nx: <integer>;\n\n## See also\n\n- [a](./a.md)\n";
        assert_eq!(section(text, "Syntax").map(str::trim), Some("x: <integer>;"));
        assert!(section(text, "See also").unwrap().contains("[a]"));
    }

    #[test]
    fn fence_mask_covers_closed_blocks_only() {
        let lines = ["intro", "```py", "# comment", "```", "text", "```", "tail"];
        assert_eq!(
            fence_mask(lines),
            vec![false, true, true, true, false, false, false]
        );
    }

    #[test]
    fn link_texts_keep_duplicates() {
        let texts = link_texts("- [a](./a.md)\n- [`a`](./a.md)\n- [``](./empty.md)\n");
        assert_eq!(texts, vec!["a", "a"]);
    }
}
