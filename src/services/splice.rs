use crate::error::{BoxError, Result};

pub const START_MARKER: &str = "<!-- steam-box start -->";
pub const END_MARKER: &str = "<!-- steam-box end -->";
pub const ATTRIBUTION: &str = "<!-- Powered by https://github.com/YouEclipse/steam-box . -->";

/// Replaces everything strictly between `start` and `end` with a titled,
/// fenced block of `body` lines. Bytes outside the markers are kept as-is.
pub fn splice(
    document: &str,
    start: &str,
    end: &str,
    title: &str,
    body: &[String],
) -> Result<String> {
    let start_at = document.find(start).ok_or_else(|| BoxError::MarkerNotFound {
        marker: start.to_string(),
    })?;
    let before_end = start_at + start.len();

    let end_at = match document[before_end..].find(end) {
        Some(offset) => before_end + offset,
        None if document.contains(end) => {
            return Err(BoxError::MarkersOutOfOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        None => {
            return Err(BoxError::MarkerNotFound {
                marker: end.to_string(),
            });
        }
    };

    let body_len: usize = body.iter().map(|line| line.len() + 1).sum();
    let mut spliced = String::with_capacity(document.len() + body_len);
    spliced.push_str(&document[..before_end]);
    spliced.push('\n');
    spliced.push_str(title);
    spliced.push('\n');
    spliced.push_str("```text\n");
    spliced.push_str(&body.join("\n"));
    spliced.push('\n');
    spliced.push_str("```\n");
    spliced.push_str(ATTRIBUTION);
    spliced.push('\n');
    spliced.push_str(&document[end_at..]);

    Ok(spliced)
}

/// Heading linking back to the leaderboard gist.
pub fn markdown_title(gist_id: &str, filename: &str) -> String {
    format!(r#"#### <a href="https://gist.github.com/{gist_id}" target="_blank">{filename}</a>"#)
}
