use std::sync::LazyLock;

use regex::Regex;

/// Extension a directive target may carry and emitted imports always have.
pub const STYLESHEET_EXT: &str = "less";

/// Matches an `@import` line whose quoted target contains a wildcard.
///
/// Capture 1 is leading indentation and/or a block-comment opener, capture 2
/// the quoted target, capture 3 trailing whitespace and/or a `//`/`/*`
/// comment. A line-start `//` can never satisfy the leading group, and a
/// closing `*/` after the statement fails the trailing group, so fully
/// commented-out directives stay inert while partial fragments are captured.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^([ \t]*(?:/\*.*)?)@import\s+["']([^"']+\*[^"']*(?:\.less)?)["'];?([ \t]*(?:/[/*].*)?)$"#,
    )
    .expect("import pattern compiles")
});

/// One wildcard import located in the text.
///
/// `span` is the exact matched text and serves as the substitution key; the
/// fragments are re-attached verbatim around the expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    pub span: String,
    pub leading: Option<String>,
    pub pattern: String,
    pub trailing: Option<String>,
}

/// Finds the first wildcard import in `contents`, if any.
///
/// Plain imports without a wildcard never match; those lines belong to the
/// stylesheet compiler, not to this preprocessor.
pub fn find_directive(contents: &str) -> Option<ImportDirective> {
    let caps = IMPORT_RE.captures(contents)?;

    let fragment = |index: usize| {
        caps.get(index)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    Some(ImportDirective {
        span: caps[0].to_string(),
        leading: fragment(1),
        pattern: caps[2].to_string(),
        trailing: fragment(3),
    })
}
