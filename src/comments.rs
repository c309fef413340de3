use crate::ast::Comments;

pub const BLOCK_BEGIN: &str = "=begin";
pub const BLOCK_END: &str = "=cut";
pub const INLINE_PREFIX: &str = "::";

/// Anything that carries comment text: raw strings or richer tokens
/// produced by a source parser.
pub trait CommentText {
    fn comment_text(&self) -> &str;
}

impl CommentText for str {
    fn comment_text(&self) -> &str {
        self
    }
}

impl CommentText for String {
    fn comment_text(&self) -> &str {
        self
    }
}

/// A comment as found in the source, with the line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    pub value: String,
    pub line: usize,
}

impl CommentText for CommentToken {
    fn comment_text(&self) -> &str {
        &self.value
    }
}

/// Drop leading `#`/space markers and surrounding whitespace.
pub fn normalize<C: CommentText + ?Sized>(comment: &C) -> String {
    comment
        .comment_text()
        .trim_start_matches(['#', ' '])
        .trim()
        .to_string()
}

/// Lines for the document-level comment block, including the trailing
/// blank separator. Empty when the document has no top comments.
pub fn top_block(comments: &Comments) -> Vec<String> {
    if comments.top.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(comments.top.len() + 3);
    lines.push(BLOCK_BEGIN.to_string());
    lines.extend(comments.top.iter().map(|c| normalize(c)));
    lines.push(BLOCK_END.to_string());
    lines.push(String::new());
    lines
}

/// The `:: text` line to place before `key`'s declaration, if any.
///
/// A key with several comment fragments still gets a single line; the
/// fragments are joined in source order.
pub fn inline_for(comments: &Comments, key: &str) -> Option<String> {
    let text = comments
        .inline
        .get(key)?
        .iter()
        .map(|c| normalize(c))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        None
    } else {
        Some(format!("{} {}", INLINE_PREFIX, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_markers() {
        assert_eq!(normalize("# hello"), "hello");
        assert_eq!(normalize("## # spaced out  "), "spaced out");
        assert_eq!(normalize("#\tTabbed\n"), "Tabbed");
        assert_eq!(normalize("no marker"), "no marker");
        assert_eq!(normalize("#"), "");
    }

    #[test]
    fn test_raw_and_token_normalize_identically() {
        let raw = String::from("#  port for the admin api\n");
        let token = CommentToken {
            value: raw.clone(),
            line: 4,
        };
        assert_eq!(normalize(&raw), normalize(&token));
        assert_eq!(normalize(&token), "port for the admin api");
    }

    #[test]
    fn test_top_block() {
        let comments = Comments {
            top: vec!["# Service config".into(), "# owned by ops".into()],
            ..Default::default()
        };
        assert_eq!(
            top_block(&comments),
            vec!["=begin", "Service config", "owned by ops", "=cut", ""]
        );
        assert!(top_block(&Comments::default()).is_empty());
    }

    #[test]
    fn test_inline() {
        let mut comments = Comments::default();
        comments.inline.insert("port".into(), vec!["# listen port".into()]);
        comments.inline.insert("blank".into(), vec!["#   ".into()]);

        assert_eq!(inline_for(&comments, "port"), Some(":: listen port".into()));
        assert_eq!(inline_for(&comments, "blank"), None);
        assert_eq!(inline_for(&comments, "other"), None);
    }

    #[test]
    fn test_inline_fragments_share_one_line() {
        let mut comments = Comments::default();
        comments.inline.insert(
            "port".into(),
            vec!["# public listener".into(), "#".into(), "# see docs".into()],
        );
        assert_eq!(
            inline_for(&comments, "port"),
            Some(":: public listener see docs".into())
        );
    }
}
