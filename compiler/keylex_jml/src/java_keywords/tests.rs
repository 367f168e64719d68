use super::*;

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

#[test]
fn every_keyword_is_found() {
    for kw in KEYWORDS {
        assert!(is_keyword(kw), "{kw} should be a keyword");
    }
}

#[test]
fn identifiers_are_not_keywords() {
    for ident in ["x", "Int", "String", "integer", "iff", "requires", "ensures", "_if", "$new"] {
        assert!(!is_keyword(ident), "{ident} should not be a keyword");
    }
}

#[test]
fn length_guard() {
    assert!(!is_keyword(""));
    assert!(!is_keyword("synchronizedX"));
}
