//! Recognition of annotation-shaped comments.

/// Whether `comment` is shaped like a JML annotation.
///
/// That is `//` or `/*`, then any run of key markers (`+key`, `-key`,
/// optionally `/`-separated), then `@`:
///
/// ```text
/// //@ ...   /*@ ... */   //+key@ ...   /*-a+b@ ... */   //+a/-b@ ...
/// ```
///
/// Whether the annotation is active is decided separately.
pub fn is_annotation_comment(comment: &str) -> bool {
    let Some(rest) = comment
        .strip_prefix("//")
        .or_else(|| comment.strip_prefix("/*"))
    else {
        return false;
    };

    let mut bytes = rest.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    if first == b'@' {
        return true;
    }
    if !matches!(first, b'+' | b'-') {
        return false;
    }

    for b in bytes {
        match b {
            b'@' => return true,
            b'+' | b'-' | b'_' | b'/' => {}
            b if b.is_ascii_alphanumeric() => {}
            _ => return false,
        }
    }
    false
}
