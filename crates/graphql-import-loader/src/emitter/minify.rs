/// Characters that never need surrounding whitespace to stay unambiguous.
const PUNCTUATORS: [char; 15] = [
    '!', '$', '&', '(', ')', ',', '.', ':', '=', '@', '[', ']', '{', '|', '}',
];

/// Strips comments and collapses insignificant whitespace in GraphQL source
/// text. String and block-string literals are copied verbatim.
///
/// Whitespace between two tokens survives as a single space only when
/// neither neighbor is a punctuator.
pub fn minify(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut pending_space = false;
    let mut idx = 0;

    while idx < chars.len() {
        let c = chars[idx];
        match c {
            '#' => {
                while idx < chars.len() && chars[idx] != '\n' && chars[idx] != '\r' {
                    idx += 1;
                }
                pending_space = true;
            },

            '"' => {
                flush_space(&mut out, &mut pending_space, c);
                idx = copy_string_literal(&chars, idx, &mut out);
            },

            c if c.is_whitespace() || c == '\u{feff}' => {
                pending_space = true;
                idx += 1;
            },

            _ => {
                flush_space(&mut out, &mut pending_space, c);
                out.push(c);
                idx += 1;
            },
        }
    }

    out
}

fn flush_space(out: &mut String, pending_space: &mut bool, next: char) {
    if !*pending_space {
        return;
    }
    *pending_space = false;
    if let Some(prev) = out.chars().last()
        && !PUNCTUATORS.contains(&prev)
        && !PUNCTUATORS.contains(&next) {
        out.push(' ');
    }
}

/// Copies the string literal starting at `start` into `out` and returns the
/// index just past it. An unterminated literal runs to the end of input.
fn copy_string_literal(chars: &[char], start: usize, out: &mut String) -> usize {
    let is_block = chars[start..].starts_with(&['"', '"', '"']);
    let mut idx =
        if is_block {
            out.push_str("\"\"\"");
            start + 3
        } else {
            out.push('"');
            start + 1
        };

    while idx < chars.len() {
        let c = chars[idx];
        if is_block {
            if chars[idx..].starts_with(&['\\', '"', '"', '"']) {
                out.push_str("\\\"\"\"");
                idx += 4;
                continue;
            }
            if chars[idx..].starts_with(&['"', '"', '"']) {
                out.push_str("\"\"\"");
                return idx + 3;
            }
            out.push(c);
            idx += 1;
        } else {
            out.push(c);
            idx += 1;
            match c {
                '\\' => {
                    if let Some(&escaped) = chars.get(idx) {
                        out.push(escaped);
                        idx += 1;
                    }
                },
                '"' => return idx,
                _ => (),
            }
        }
    }

    idx
}
