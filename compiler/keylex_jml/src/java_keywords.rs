//! Java reserved-word lookup for host identifiers.
//!
//! Length-bucketed: identifiers outside the 2-12 byte range or not starting
//! with a lowercase ASCII letter are rejected without any comparison.
//! `true`, `false` and `null` are literals in Java but are highlighted as
//! keywords, so they are included.

/// Whether `text` is a Java reserved word or literal keyword.
#[inline]
pub(crate) fn is_keyword(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=12).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return false;
    }

    match len {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "for" | "int" | "new" | "try"),
        4 => matches!(
            text,
            "byte" | "case" | "char" | "else" | "enum" | "goto" | "long" | "null" | "this" | "true"
                | "void"
        ),
        5 => matches!(
            text,
            "break" | "catch" | "class" | "const" | "false" | "final" | "float" | "short"
                | "super" | "throw" | "while"
        ),
        6 => matches!(
            text,
            "assert" | "double" | "import" | "native" | "public" | "return" | "static" | "switch"
                | "throws"
        ),
        7 => matches!(
            text,
            "boolean" | "default" | "extends" | "finally" | "package" | "private"
        ),
        8 => matches!(
            text,
            "abstract" | "continue" | "strictfp" | "volatile"
        ),
        9 => matches!(text, "interface" | "protected" | "transient"),
        10 => matches!(text, "implements" | "instanceof"),
        12 => text == "synchronized",
        _ => false,
    }
}

#[cfg(test)]
mod tests;
