use thiserror::Error;

/// A single `#import "<path>"` line found in a GraphQL source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDirective {
    /// 1-based line number of the directive within its file.
    pub line: usize,
    /// The relative path between the quotes, exactly as written.
    pub path: String,
}

/// Scan raw GraphQL source text for `#import` directives, in source order.
///
/// A directive is a line whose first character is `#` and whose remainder,
/// split on single spaces, starts with the token `import`. The next token
/// must be a path wrapped in matching `"` or `'` quotes. No escapes are
/// recognized inside the quotes. Any tokens after the path are ignored.
pub fn scan_import_directives(
    source: &str,
) -> Result<Vec<ImportDirective>, ImportSyntaxError> {
    let mut directives = vec![];
    for (idx, line) in split_lines(source).enumerate() {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };

        let mut tokens = rest.split(' ');
        if tokens.next() != Some("import") {
            continue;
        }

        let line_num = idx + 1;
        let path_token = tokens.next().unwrap_or("");
        let path = unquote(path_token).ok_or_else(|| ImportSyntaxError {
            line: line_num,
            text: line.to_string(),
        })?;
        if path.is_empty() {
            return Err(ImportSyntaxError {
                line: line_num,
                text: line.to_string(),
            });
        }

        directives.push(ImportDirective {
            line: line_num,
            path: path.to_string(),
        });
    }
    Ok(directives)
}

/// Splits on `\r\n`, `\r` or `\n`.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut remaining = Some(source);
    std::iter::from_fn(move || {
        let text = remaining?;
        match text.find(['\r', '\n']) {
            Some(pos) => {
                let sep_len =
                    if text[pos..].starts_with("\r\n") {
                        2
                    } else {
                        1
                    };
                remaining = Some(&text[pos + sep_len..]);
                Some(&text[..pos])
            },
            None => {
                remaining = None;
                Some(text)
            },
        }
    })
}

fn unquote(token: &str) -> Option<&str> {
    let quote = token.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let inner = token.strip_prefix(quote)?.strip_suffix(quote)?;
    if inner.contains(quote) {
        return None;
    }
    Some(inner)
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "Malformed import on line {line}: `{text}` (expected `#import \"<path>\"` \
    or `#import '<path>'`)"
)]
pub struct ImportSyntaxError {
    pub line: usize,
    pub text: String,
}
