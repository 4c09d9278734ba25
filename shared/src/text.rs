//! Plain-text helpers for the HTML bodies the editor produces.

/// Strip tags, decode the common entities and collapse whitespace.
///
/// A `<` only opens a tag when followed by a letter, `/`, `!` or `?`;
/// otherwise it is kept as text.
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut chars = html.chars().peekable();
    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        if c == '<' && chars.peek().is_some_and(|next| opens_tag(*next)) {
            in_tag = true;
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn opens_tag(next: char) -> bool {
    next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?')
}

/// Number of whitespace-separated words in the rendered text.
pub fn word_count(html: &str) -> usize {
    plain_text(html).split_whitespace().count()
}

/// First `max_chars` characters of the rendered text, with an ellipsis when
/// cut.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = plain_text(html);
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_entities() {
        assert_eq!(
            plain_text("<p>Hello&nbsp;<strong>world</strong></p><p>a &amp; b</p>"),
            "Hello world a & b"
        );
    }

    #[test]
    fn empty_editor_markup_has_no_words() {
        assert_eq!(word_count("<p><br></p>"), 0);
        assert_eq!(word_count("<p>one two</p><p>three</p>"), 3);
    }

    #[test]
    fn bare_less_than_is_text() {
        let html = "<p>1 < 2 and the rest of the article</p>";
        assert_eq!(plain_text(html), "1 < 2 and the rest of the article");
        assert_eq!(word_count(html), 8);
        assert_eq!(excerpt(html, 5), "1 < 2…");
        assert_eq!(plain_text("a<3 <!-- note --> b"), "a<3 b");
    }

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        assert_eq!(excerpt("<p>héllo wörld</p>", 5), "héllo…");
        assert_eq!(excerpt("<p>short</p>", 20), "short");
    }
}
