use crate::directive::ImportDirective;

/// Serializes the surviving targets back into import statements.
///
/// Fragments captured from the original line are re-attached verbatim:
/// leading first, trailing last. With zero survivors the replacement is
/// just the fragments, so a dead directive disappears while its comments
/// stay behind.
pub fn render(directive: &ImportDirective, targets: &[String]) -> String {
    let mut lines = Vec::with_capacity(targets.len() + 2);

    if let Some(leading) = &directive.leading {
        lines.push(leading.clone());
    }
    for target in targets {
        lines.push(format!("@import \"{}\";", target));
    }
    if let Some(trailing) = &directive.trailing {
        lines.push(trailing.clone());
    }

    lines.join("\n")
}
