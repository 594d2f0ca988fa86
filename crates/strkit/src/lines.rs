//! Line splitting and trimming helpers

/// Split `text` at every `delimiter`
///
/// A trailing delimiter does not produce an empty last line, so
/// `lines_to_text` and `text_to_lines` invert each other for the same
/// delimiter. Empty text yields no lines. An empty delimiter yields the
/// whole text as a single line.
pub fn text_to_lines(text: &str, delimiter: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![text.to_string()];
    }

    let body = text.strip_suffix(delimiter).unwrap_or(text);
    body.split(delimiter).map(str::to_string).collect()
}

/// Join `lines`, writing `delimiter` after every line including the last
pub fn lines_to_text<S: AsRef<str>>(lines: &[S], delimiter: &str) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push_str(delimiter);
    }
    out
}

/// Strip every leading and trailing character that appears in `set`
pub fn trim_chars<'a>(text: &'a str, set: &str) -> &'a str {
    text.trim_matches(|c| set.contains(c))
}

/// Append `c` unless `text` already ends with it
pub fn end_with_char(text: &mut String, c: char) {
    if !text.ends_with(c) {
        text.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_lines_and_back() {
        let input = "Now is the time\r\nfor all good men\r\nto come to the aid of their country";
        let lines = text_to_lines(input, "\r\n");
        assert_eq!(
            lines,
            vec![
                "Now is the time",
                "for all good men",
                "to come to the aid of their country"
            ]
        );

        assert_eq!(
            lines_to_text(&lines, "\n"),
            "Now is the time\nfor all good men\nto come to the aid of their country\n"
        );
        assert_eq!(
            lines_to_text(&lines, ""),
            "Now is the timefor all good mento come to the aid of their country"
        );
    }

    #[test]
    fn test_text_to_lines_edges() {
        assert!(text_to_lines("", "\n").is_empty());
        assert_eq!(text_to_lines("a\nb\n", "\n"), vec!["a", "b"]);
        assert_eq!(text_to_lines("a\n\nb", "\n"), vec!["a", "", "b"]);
        assert_eq!(text_to_lines("abc", ""), vec!["abc"]);
        assert_eq!(text_to_lines("\n", "\n"), vec![""]);

        let lines = ["x", "y"];
        assert_eq!(text_to_lines(&lines_to_text(&lines, ";"), ";"), lines);
    }

    #[test]
    fn test_trim_chars() {
        assert_eq!(trim_chars("abc", " \t"), "abc");
        assert_eq!(trim_chars(" abc ", " \t"), "abc");
        assert_eq!(trim_chars(" a c  ", " \t"), "a c");
        assert_eq!(trim_chars(" \tabc\t ", " \t"), "abc");
        assert_eq!(trim_chars("", " \t"), "");
        assert_eq!(trim_chars("   ", " \t"), "");
        assert_eq!(trim_chars("xxaxx", ""), "xxaxx");
    }

    #[test]
    fn test_end_with_char() {
        for (input, c, expected) in [
            ("", 'a', "a"),
            ("", '\\', "\\"),
            ("a", 'a', "a"),
            ("a", 'b', "ab"),
            ("abcdefghij", 'a', "abcdefghija"),
            ("abcdefghij", '\\', "abcdefghij\\"),
        ] {
            let mut text = input.to_string();
            end_with_char(&mut text, c);
            assert_eq!(text, expected);
        }
    }
}
