//! Evaluation of Python string literal tokens.
//!
//! tree-sitter-python lexes strings loosely; the rules Python 3 applies to
//! prefixes and escapes are enforced here.

/// Value of a single string token such as `r'''x'''` or `"a\tb"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    /// `b"..."`: not text.
    Bytes,
    /// `f"..."` / `t"..."`: only known at runtime.
    Formatted,
}

/// Decoded string prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prefix {
    pub raw: bool,
    pub bytes: bool,
    pub formatted: bool,
}

impl Prefix {
    /// Parse a prefix such as `rb` or `F`, in any case and order.
    ///
    /// `None` for combinations Python rejects: repeated letters, `u` with
    /// anything else, or more than one of `b`, `f`/`t`.
    pub fn parse(prefix: &str) -> Option<Self> {
        let mut flags = Self::default();
        let mut unicode = false;
        for c in prefix.chars() {
            let seen = match c.to_ascii_lowercase() {
                'r' => std::mem::replace(&mut flags.raw, true),
                'b' => std::mem::replace(&mut flags.bytes, true),
                'f' | 't' => std::mem::replace(&mut flags.formatted, true),
                'u' => std::mem::replace(&mut unicode, true),
                _ => return None,
            };
            if seen {
                return None;
            }
        }
        if unicode && prefix.len() > 1 {
            return None;
        }
        if flags.bytes && flags.formatted {
            return None;
        }
        Some(flags)
    }
}

/// A token Python would refuse to compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{problem}")]
pub struct LiteralError {
    /// Byte offset of the problem within the evaluated text.
    pub offset: usize,
    pub problem: LiteralProblem,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralProblem {
    #[error("not a string literal")]
    Malformed,
    #[error("invalid string prefix '{0}'")]
    Prefix(String),
    #[error("truncated \\{0} escape")]
    TruncatedEscape(char),
    #[error("illegal Unicode character in \\U escape")]
    IllegalCodePoint,
    #[error("malformed \\N character escape")]
    MalformedName,
    #[error("unknown Unicode character name '{0}'")]
    UnknownName(String),
    #[error("bytes can only contain ASCII literal characters")]
    NonAsciiBytes,
}

impl LiteralError {
    fn at(offset: usize, problem: LiteralProblem) -> Self {
        Self { offset, problem }
    }

    fn shifted(mut self, by: usize) -> Self {
        self.offset += by;
        self
    }
}

/// Split a token into its decoded prefix and the quoted remainder.
pub fn split_prefix(token: &str) -> Result<(Prefix, &str), LiteralError> {
    let quote_at = token
        .find(&['\'', '"'][..])
        .ok_or(LiteralError::at(0, LiteralProblem::Malformed))?;
    let (prefix, quoted) = token.split_at(quote_at);
    let flags = Prefix::parse(prefix)
        .ok_or_else(|| LiteralError::at(0, LiteralProblem::Prefix(prefix.to_string())))?;
    Ok((flags, quoted))
}

/// Evaluate one string token.
///
/// Formatted strings are only checked for their prefix; their literal parts
/// go through [`unescape`] separately since interpolations sit between them.
pub fn evaluate(token: &str) -> Result<Literal, LiteralError> {
    let (prefix, quoted) = split_prefix(token)?;
    let (body, opening) =
        strip_quotes(quoted).ok_or(LiteralError::at(0, LiteralProblem::Malformed))?;
    let base = token.len() - quoted.len() + opening;

    if prefix.formatted {
        return Ok(Literal::Formatted);
    }
    if prefix.bytes {
        check_bytes(body, prefix.raw).map_err(|e| e.shifted(base))?;
        return Ok(Literal::Bytes);
    }
    if prefix.raw {
        Ok(Literal::Str(body.to_string()))
    } else {
        unescape(body).map(Literal::Str).map_err(|e| e.shifted(base))
    }
}

fn strip_quotes(quoted: &str) -> Option<(&str, usize)> {
    for delimiter in ["\"\"\"", "'''", "\"", "'"] {
        if quoted.len() >= 2 * delimiter.len()
            && quoted.starts_with(delimiter)
            && quoted.ends_with(delimiter)
        {
            let body = &quoted[delimiter.len()..quoted.len() - delimiter.len()];
            return Some((body, delimiter.len()));
        }
    }
    None
}

/// Apply backslash escapes the way the Python tokenizer does for `str`
/// literals.
///
/// Unrecognized escapes are kept verbatim. Truncated `\x`, `\u`, `\U`
/// escapes, out-of-range code points and bad `\N{...}` names are errors.
/// Lone surrogates, which `str` can hold but `String` cannot, become U+FFFD.
pub fn unescape(body: &str) -> Result<String, LiteralError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, next)) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\r' => {
                if chars.peek().map(|&(_, c)| c) == Some('\n') {
                    chars.next();
                }
            }
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|&(_, d)| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let mut value = 0u32;
                for _ in 0..width {
                    let digit = chars
                        .peek()
                        .and_then(|&(_, d)| d.to_digit(16))
                        .ok_or(LiteralError::at(at, LiteralProblem::TruncatedEscape(next)))?;
                    value = value * 16 + digit;
                    chars.next();
                }
                if value > u32::from(char::MAX) {
                    return Err(LiteralError::at(at, LiteralProblem::IllegalCodePoint));
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'N' => {
                let malformed = || LiteralError::at(at, LiteralProblem::MalformedName);
                if chars.next_if(|&(_, c)| c == '{').is_none() {
                    return Err(malformed());
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(malformed()),
                    }
                }
                if name.is_empty() {
                    return Err(malformed());
                }
                let ch = unicode_names2::character(&name.to_ascii_uppercase())
                    .ok_or_else(|| LiteralError::at(at, LiteralProblem::UnknownName(name)))?;
                out.push(ch);
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    Ok(out)
}

/// Validate a `bytes` literal body. Only `\x` takes a fixed number of digits;
/// `\u`, `\U` and `\N` are ordinary unknown escapes in bytes.
fn check_bytes(body: &str, raw: bool) -> Result<(), LiteralError> {
    if let Some((at, _)) = body.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(LiteralError::at(at, LiteralProblem::NonAsciiBytes));
    }
    if raw {
        return Ok(());
    }
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'x') {
            let digits = bytes.get(i + 2..i + 4).unwrap_or_default();
            if digits.len() != 2 || !digits.iter().all(u8::is_ascii_hexdigit) {
                return Err(LiteralError::at(i, LiteralProblem::TruncatedEscape('x')));
            }
        }
        i += 2;
    }
    Ok(())
}
