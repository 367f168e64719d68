//! Sub-lexer for the body of an active JML annotation.
//!
//! A logos-derived lexer over the JML annotation vocabulary. Keywords are
//! grouped by how the reclassifier treats them, so a tag says which word
//! family a token belongs to, not which word it is. The adapter never
//! classifies: it only guarantees that every byte of the body lands in
//! exactly one [`RawAnnotationToken`].

use logos::Logos;

/// Token kind produced by the annotation sub-lexer.
///
/// Keyword families:
/// - [`AnnotTag::SpecCaseKeyword`]: always a keyword (`normal_behavior`, `also`)
/// - [`AnnotTag::ClauseKeyword`]: a keyword at top level, a name when nested
/// - [`AnnotTag::JmlModifier`]: a keyword at top level, a name when nested
/// - [`AnnotTag::ToplevelExprKeyword`]: a keyword in either position
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotTag {
    // Trivia
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"//[^\n\r]*")]
    #[token("/*", |lex| close_delimited(lex, "*/"))]
    Comment,
    /// `(* informal description *)`
    #[token("(*", |lex| close_delimited(lex, "*)"))]
    InformalDescription,
    /// Closing `*/` of a block annotation, with any leading `@` margin.
    #[regex(r"@*\*/")]
    CommentEnd,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBrack,
    #[token("]")]
    RBrack,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,

    // Java modifiers
    #[token("public")]
    #[token("private")]
    #[token("protected")]
    #[token("static")]
    #[token("final")]
    #[token("abstract")]
    #[token("synchronized")]
    #[token("native")]
    #[token("transient")]
    #[token("volatile")]
    #[token("strictfp")]
    JavaModifier,

    // Java keywords
    #[token("boolean")]
    #[token("byte")]
    #[token("char")]
    #[token("short")]
    #[token("int")]
    #[token("long")]
    #[token("float")]
    #[token("double")]
    #[token("void")]
    #[token("if")]
    #[token("else")]
    #[token("for")]
    #[token("while")]
    #[token("do")]
    #[token("switch")]
    #[token("case")]
    #[token("default")]
    #[token("break")]
    #[token("continue")]
    #[token("return")]
    #[token("throw")]
    #[token("try")]
    #[token("catch")]
    #[token("finally")]
    #[token("new")]
    #[token("this")]
    #[token("super")]
    #[token("instanceof")]
    #[token("null")]
    #[token("true")]
    #[token("false")]
    #[token("class")]
    #[token("interface")]
    #[token("enum")]
    #[token("extends")]
    #[token("implements")]
    #[token("import")]
    #[token("package")]
    #[token("throws")]
    JavaKeyword,

    // Specification-case keywords
    #[token("also")]
    #[token("behavior")]
    #[token("behaviour")]
    #[token("normal_behavior")]
    #[token("normal_behaviour")]
    #[token("exceptional_behavior")]
    #[token("exceptional_behaviour")]
    #[token("model_behavior")]
    #[token("model_behaviour")]
    #[token("break_behavior")]
    #[token("continue_behavior")]
    #[token("return_behavior")]
    #[token("example")]
    #[token("normal_example")]
    #[token("exceptional_example")]
    #[token("implies_that")]
    #[token("for_example")]
    #[token("code")]
    SpecCaseKeyword,

    /// `\result`, `\old`, `\forall`, `\nothing`, ...
    #[regex(r"\\[a-zA-Z_][a-zA-Z0-9_]*")]
    BackslashKeyword,

    // JML modifiers
    #[token("pure")]
    #[token("strictly_pure")]
    #[token("helper")]
    #[token("nullable")]
    #[token("non_null")]
    #[token("nullable_by_default")]
    #[token("non_null_by_default")]
    #[token("spec_public")]
    #[token("spec_protected")]
    #[token("spec_package")]
    #[token("spec_private")]
    #[token("model")]
    #[token("ghost")]
    #[token("instance")]
    #[token("monitored")]
    #[token("uninitialized")]
    #[token("two_state")]
    #[token("no_state")]
    #[token("query")]
    #[token("secret")]
    #[token("peer")]
    #[token("rep")]
    #[token("readonly")]
    #[token("code_java_math")]
    #[token("code_safe_math")]
    #[token("code_bigint_math")]
    #[token("spec_java_math")]
    #[token("spec_safe_math")]
    #[token("spec_bigint_math")]
    JmlModifier,

    // Statement-level keywords that open an expression
    #[token("assert")]
    #[token("assume")]
    #[token("set")]
    #[token("debug")]
    #[token("unreachable")]
    #[token("hence_by")]
    #[token("refining")]
    #[token("loop_contract")]
    #[token("merge_point")]
    ToplevelExprKeyword,

    // Clause keywords; each one is terminated by a top-level `;`
    #[token("requires")]
    #[token("requires_redundantly")]
    #[token("pre")]
    #[token("ensures")]
    #[token("ensures_redundantly")]
    #[token("post")]
    #[token("assignable")]
    #[token("assignable_redundantly")]
    #[token("assigns")]
    #[token("modifiable")]
    #[token("modifies")]
    #[token("accessible")]
    #[token("reads")]
    #[token("signals")]
    #[token("signals_redundantly")]
    #[token("exsures")]
    #[token("signals_only")]
    #[token("diverges")]
    #[token("measured_by")]
    #[token("when")]
    #[token("working_space")]
    #[token("duration")]
    #[token("callable")]
    #[token("captures")]
    #[token("determines")]
    #[token("invariant")]
    #[token("invariant_redundantly")]
    #[token("constraint")]
    #[token("initially")]
    #[token("axiom")]
    #[token("represents")]
    #[token("loop_invariant")]
    #[token("maintaining")]
    #[token("decreases")]
    #[token("decreasing")]
    #[token("loop_determines")]
    #[token("in")]
    #[token("maps")]
    #[token("breaks")]
    #[token("continues")]
    #[token("returns")]
    ClauseKeyword,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,

    // Literals
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*[lL]?")]
    #[regex(r"0[bB][01][01_]*[lL]?")]
    #[regex(r"[0-9][0-9_]*[lLfFdD]?")]
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    NumLiteral,
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    StringLiteral,
    #[regex(r"'([^'\\\n\r]|\\.)*'")]
    CharLiteral,

    // Java operators
    #[token("=")]
    Assign,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("==")]
    Equal,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("!=")]
    NotEqual,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,
    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("&")]
    BitAnd,
    #[token("|")]
    BitOr,
    #[token("^")]
    Caret,
    #[token("%")]
    Mod,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token(">>>")]
    UShr,
    #[token("+=")]
    AddAssign,
    #[token("-=")]
    SubAssign,
    #[token("*=")]
    MulAssign,
    #[token("/=")]
    DivAssign,
    #[token("&=")]
    AndAssign,
    #[token("|=")]
    OrAssign,
    #[token("^=")]
    XorAssign,
    #[token("%=")]
    ModAssign,
    #[token("<<=")]
    ShlAssign,
    #[token(">>=")]
    ShrAssign,
    #[token(">>>=")]
    UShrAssign,
    #[token("->")]
    Arrow,
    #[token("::")]
    ColonColon,

    // JML operators
    #[token("..")]
    DotDot,
    #[token("<==>")]
    Equivalence,
    #[token("<=!=>")]
    Antivalence,
    #[token("==>")]
    Implies,
    #[token("<==")]
    ImpliesBackward,
    #[token("<#=")]
    LocksetLeq,
    #[token("<#")]
    LocksetLt,
    /// `<:`, the subtype relation.
    #[token("<:")]
    Subtype,
    #[token("@")]
    At,
    #[token("...")]
    Ellipsis,

    /// A character no other tag accepts.
    ErrorChar,
}

impl AnnotTag {
    /// Delimiter that opens a nesting level.
    #[inline]
    pub const fn is_opener(self) -> bool {
        matches!(self, AnnotTag::LParen | AnnotTag::LBrace | AnnotTag::LBrack)
    }

    /// Delimiter that closes a nesting level.
    #[inline]
    pub const fn is_closer(self) -> bool {
        matches!(self, AnnotTag::RParen | AnnotTag::RBrace | AnnotTag::RBrack)
    }
}

/// Extend a two-byte opener match through `close`.
///
/// Fails, leaving an error span over the opener, when `close` never comes.
fn close_delimited(lex: &mut logos::Lexer<'_, AnnotTag>, close: &str) -> bool {
    let open_end = lex.span().start + 2;
    match lex.source()[open_end..].find(close) {
        Some(pos) => {
            lex.bump(open_end + pos + close.len() - lex.span().end);
            true
        }
        None => false,
    }
}

/// One token of an annotation body, positioned relative to the body start.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawAnnotationToken<'a> {
    /// Byte offset from the start of the body.
    pub start: u32,
    pub tag: AnnotTag,
    pub text: &'a str,
}

/// Tokenize an annotation body.
///
/// The returned tokens tile `body`: they are contiguous, start at offset 0,
/// and their texts concatenate to `body`. Unrecognised input becomes
/// [`AnnotTag::ErrorChar`] tokens that always end on a char boundary.
pub fn tokenize(body: &str) -> Vec<RawAnnotationToken<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = AnnotTag::lexer(body);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (tag, end) = match result {
            Ok(tag) => (tag, span.end),
            Err(()) => {
                // Keep error spans on char boundaries so the slice below is valid.
                let mut end = span.end;
                while !body.is_char_boundary(end) {
                    end += 1;
                }
                lexer.bump(end - span.end);
                (AnnotTag::ErrorChar, end)
            }
        };

        #[allow(
            clippy::cast_possible_truncation,
            reason = "annotation bodies are slices of a document whose offsets fit in u32"
        )]
        let start = span.start as u32;
        tokens.push(RawAnnotationToken {
            start,
            tag,
            text: &body[span.start..end],
        });
    }

    tokens
}
