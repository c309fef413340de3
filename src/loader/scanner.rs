use crate::comments::CommentToken;

#[derive(Debug, Default)]
pub(super) struct HarvestedComments {
    pub top: Vec<CommentToken>,
    pub inline: Vec<(String, CommentToken)>,
}

/// Collect the comments the YAML parser throws away.
///
/// - the leading run of `#` lines (blank lines and `---` allowed in between)
///   becomes the document-level block;
/// - after that, unindented full-line comments belong to the next top-level
///   key, followed by the end-of-line comment on that key's own line, if any.
///   Comments are dropped when nested content or the end of the source
///   comes before another top-level key.
pub(super) fn scan_comments(source: &str) -> HarvestedComments {
    let mut harvested = HarvestedComments::default();
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut in_header = true;
    let mut pending: Vec<CommentToken> = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        if in_header {
            if trimmed.is_empty() || trimmed == "---" {
                continue;
            }
            if trimmed.starts_with('#') {
                harvested.top.push(CommentToken {
                    value: trimmed.to_string(),
                    line: idx + 1,
                });
                continue;
            }
            in_header = false;
        }

        if trimmed.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            pending.push(CommentToken {
                value: trimmed.to_string(),
                line: idx + 1,
            });
            continue;
        }

        match split_top_level_key(line) {
            Some((key, rest)) => {
                for token in pending.drain(..) {
                    harvested.inline.push((key.clone(), token));
                }
                if let Some(start) = find_comment_start(rest) {
                    harvested.inline.push((
                        key,
                        CommentToken {
                            value: rest[start..].trim_end().to_string(),
                            line: idx + 1,
                        },
                    ));
                }
            }
            None => pending.clear(),
        }
    }

    harvested
}

/// Split `key: rest` on an unindented line. Returns `None` for anything that
/// is not a top-level mapping key (indented lines, sequences, directives).
fn split_top_level_key(line: &str) -> Option<(String, &str)> {
    let first = line.chars().next()?;
    if first.is_whitespace() || matches!(first, '#' | '-' | '%' | '.' | '[' | '{' | '?' | '&' | '*' | '!' | '|' | '>') {
        return None;
    }

    if first == '"' || first == '\'' {
        let close = line[1..].find(first)? + 1;
        let key = &line[1..close];
        let rest = line[close + 1..].strip_prefix(':')?;
        return starts_separated(rest).then(|| (key.to_string(), rest));
    }

    let mut prev = ' ';
    for (i, c) in line.char_indices() {
        if c == '#' && prev.is_whitespace() {
            return None;
        }
        if c == ':' {
            let rest = &line[i + 1..];
            if starts_separated(rest) {
                return Some((line[..i].trim_end().to_string(), rest));
            }
        }
        prev = c;
    }
    None
}

fn starts_separated(rest: &str) -> bool {
    rest.chars().next().is_none_or(char::is_whitespace)
}

/// Byte offset of a `#` that starts a comment: preceded by whitespace (or the
/// start of the text) and outside any quoted scalar.
fn find_comment_start(text: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev = ' ';

    for (i, c) in text.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => {
                if c == '#' && prev.is_whitespace() {
                    return Some(i);
                }
                if (c == '"' || c == '\'') && (prev.is_whitespace() || matches!(prev, '[' | '{' | ',')) {
                    quote = Some(c);
                }
            }
        }
        prev = c;
    }
    None
}
