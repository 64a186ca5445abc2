//! Shared utility functions.

/// Remove common leading indentation from a block of text.
///
/// A single leading newline is dropped first, so indented multi-line
/// literals in question files render cleanly. Relative indentation is
/// preserved; blank lines do not count towards the common indent. The
/// result is trimmed.
pub fn dedent(text: &str) -> String {
    let text = text.strip_prefix('\n').unwrap_or(text);

    let min_indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min();

    let Some(min_indent) = min_indent else {
        return text.trim().to_string();
    };

    text.split('\n')
        .map(|line| match line.char_indices().nth(min_indent) {
            Some((offset, _)) => &line[offset..],
            None if line.chars().count() == min_indent => "",
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Build the public URL of a static asset under an optional base path.
///
/// A trailing `/` on `base` and a leading `/` on `path` are dropped before
/// joining. With an empty base the result is rooted at `/`.
pub fn asset_path(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = path.strip_prefix('/').unwrap_or(path);
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}
