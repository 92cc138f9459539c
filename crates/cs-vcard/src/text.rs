//! Card text layer: line unfolding/folding, property parsing, escaping

/// Maximum octets per physical line before folding
const FOLD_LIMIT: usize = 75;

/// A single unfolded card property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, uppercased
    pub name: String,
    /// TYPE parameter values (and bare legacy parameters), original case
    pub types: Vec<String>,
    /// Remaining parameters as (KEY, value) with uppercased keys
    pub params: Vec<(String, String)>,
    /// Raw property value, still escaped
    pub value: String,
}

impl Property {
    /// First value for a non-TYPE parameter key
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Undo line folding: a line starting with space or tab continues the
/// previous one
pub fn unfold(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix(' ').or_else(|| line.strip_prefix('\t')) {
            if let Some(last) = lines.last_mut() {
                last.push_str(rest);
                continue;
            }
        }
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    lines
}

/// Fold a physical line at the 75-octet limit, breaking on char boundaries
pub fn fold(line: &str) -> String {
    if line.len() <= FOLD_LIMIT {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / FOLD_LIMIT * 3);
    let mut width = 0;
    for c in line.chars() {
        if width + c.len_utf8() > FOLD_LIMIT && !out.is_empty() {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(c);
        width += c.len_utf8();
    }
    out
}

/// Parse one unfolded line into a property. Returns `None` for lines
/// without a name/value separator.
pub fn parse_property(line: &str) -> Option<Property> {
    let mut in_quotes = false;
    let mut colon = None;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => {
                colon = Some(i);
                break;
            }
            _ => {}
        }
    }
    let colon = colon?;
    let head = &line[..colon];
    let value = line[colon + 1..].to_string();

    let mut segments = split_quoted(head, ';').into_iter();
    let name = segments.next()?.trim().to_ascii_uppercase();
    if name.is_empty() {
        return None;
    }

    let mut types = Vec::new();
    let mut params = Vec::new();
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match segment.split_once('=') {
            Some((key, values)) => {
                let key = key.trim().to_ascii_uppercase();
                for v in split_quoted(values, ',') {
                    let v = unquote(v.trim()).to_string();
                    if key == "TYPE" {
                        types.push(v);
                    } else {
                        params.push((key.clone(), v));
                    }
                }
            }
            // bare parameter, legacy style: TEL;HOME:...
            None => types.push(unquote(segment).to_string()),
        }
    }

    Some(Property {
        name,
        types,
        params,
        value,
    })
}

/// Split on a separator, ignoring separators inside double quotes
fn split_quoted(text: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in text.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == separator && !in_quotes => {
                parts.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    parts.push(current);
    parts
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

/// Escape a text value for a card property
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Undo text escaping
pub fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Split a compound value on unescaped semicolons, unescaping each component
pub fn split_components(value: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for c in value.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            current.push(c);
            escaped = true;
        } else if c == ';' {
            parts.push(unescape_text(&current));
            current.clear();
        } else {
            current.push(c);
        }
    }
    parts.push(unescape_text(&current));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfold_continuation_lines() {
        let lines = unfold("NOTE:part one\r\n  and part two\r\nTEL:+15550100\r\n");
        assert_eq!(lines, vec!["NOTE:part one and part two", "TEL:+15550100"]);
    }

    #[test]
    fn test_fold_round_trips_through_unfold() {
        let long = format!("NOTE:{}", "x".repeat(200));
        let folded = fold(&long);
        assert!(folded.lines().all(|l| l.len() <= 76));
        assert_eq!(unfold(&folded), vec![long]);
    }

    #[test]
    fn test_parse_property_with_params() {
        let prop = parse_property("TEL;TYPE=CELL,VOICE:+15550100").unwrap();
        assert_eq!(prop.name, "TEL");
        assert_eq!(prop.types, vec!["CELL", "VOICE"]);
        assert_eq!(prop.value, "+15550100");

        let legacy = parse_property("tel;HOME:+15550101").unwrap();
        assert_eq!(legacy.name, "TEL");
        assert_eq!(legacy.types, vec!["HOME"]);
    }

    #[test]
    fn test_parse_property_quoted_param() {
        let prop = parse_property("TEL;TYPE=\"Emergency: line\":+15550100").unwrap();
        assert_eq!(prop.types, vec!["Emergency: line"]);
        assert_eq!(prop.value, "+15550100");
    }

    #[test]
    fn test_parse_property_rejects_bare_text() {
        assert!(parse_property("this is not a property").is_none());
    }

    #[test]
    fn test_escape_round_trip() {
        let original = "Doe; \\ Jane,\nApt 2";
        assert_eq!(unescape_text(&escape_text(original)), original);
    }

    #[test]
    fn test_split_components_respects_escapes() {
        let parts = split_components("Doe\\;Jr;Jane;;Dr.;");
        assert_eq!(parts, vec!["Doe;Jr", "Jane", "", "Dr.", ""]);
    }
}
