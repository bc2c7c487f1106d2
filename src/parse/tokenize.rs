// src/parse/tokenize.rs

/// Split one line into field values.
///
/// A comma only separates fields when the text before it (since the last
/// accepted separator) holds an even number of `"` characters. Quotes are
/// stripped from every emitted value.
///
/// This is a parity heuristic, not a quote state machine: `""` escapes and
/// quoted fields spanning several lines are not understood.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let mut end = rest.find(',').unwrap_or(rest.len());

        // odd parity: the comma sits inside an open quoted field
        while end < rest.len() && quote_count(&rest[..end]) % 2 == 1 {
            end = match rest[end + 1..].find(',') {
                Some(next) => end + 1 + next,
                None => rest.len(),
            };
        }

        values.push(strip_quotes(&rest[..end]));
        rest = rest.get(end + 1..).unwrap_or("");
    }

    values
}

fn quote_count(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'"').count()
}

fn strip_quotes(s: &str) -> String {
    s.replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_quoted_comma_inside_field() {
        assert_eq!(tokenize_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn strips_quotes_from_values() {
        assert_eq!(tokenize_line(r#""x","y""#), vec!["x", "y"]);
    }

    #[test]
    fn single_field_without_comma() {
        assert_eq!(tokenize_line("lonely"), vec!["lonely"]);
        assert_eq!(tokenize_line(r#""quoted""#), vec!["quoted"]);
    }

    #[test]
    fn empty_line_has_no_fields() {
        assert!(tokenize_line("").is_empty());
    }

    #[test]
    fn several_commas_inside_one_quoted_field() {
        assert_eq!(
            tokenize_line(r#"1,"Smith, John, Jr.",42"#),
            vec!["1", "Smith, John, Jr.", "42"]
        );
    }

    #[test]
    fn unterminated_quote_swallows_rest_of_line() {
        assert_eq!(tokenize_line(r#"a,"b,c,d"#), vec!["a", "b,c,d"]);
    }

    #[test]
    fn leading_comma_gives_empty_first_field() {
        assert_eq!(tokenize_line(",a"), vec!["", "a"]);
        assert_eq!(tokenize_line("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_comma_does_not_add_a_field() {
        assert_eq!(tokenize_line("a,b,"), vec!["a", "b"]);
    }

    #[test]
    fn non_ascii_text_survives() {
        assert_eq!(
            tokenize_line(r#"Zoë,"Ångström, Å",東京"#),
            vec!["Zoë", "Ångström, Å", "東京"]
        );
    }
}
