use crate::CaptionImage;
use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let pattern = format!(
            r"\{{%[[:space:]]*{}[[:space:]]+(?P<markup>(?s:.*?))%\}}",
            crate::TAG_NAME
        );

        Regex::new(&pattern).unwrap()
    })
}

/// Replaces every `{% imgcap ... %}` occurrence with its rendered HTML.
///
/// A tag may span several lines.
pub fn expand(input: &str) -> String {
    tag_regex()
        .replace_all(input, |caps: &regex::Captures<'_>| {
            log::trace!("Expanding imgcap tag {:?}", &caps[0]);

            CaptionImage::new(&caps["markup"]).render()
        })
        .to_string()
}

pub fn render(input: &str) -> String {
    let mut output = String::new();
    let input = expand(input);

    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_FOOTNOTES);

    let parser = pulldown_cmark::Parser::new_ext(&input, options);
    pulldown_cmark::html::push_html(&mut output, parser);

    output
}

#[cfg(test)]
mod test {
    #[test]
    fn expand_inline_tag() {
        let output = super::expand("Before {% imgcap /a.png 10 20 Hi %} after");

        assert_eq!(
            output,
            "Before <span class='caption-wrapper'><img class='caption' src='/a.png' width='10' height='20' alt='Hi' title='Hi'><span class='caption-text'>Hi</span></span> after"
        );
    }

    #[test]
    fn expand_each_occurrence() {
        let output = super::expand("{% imgcap left /a.png %}\n{%imgcap /b.png B %}");

        assert!(output.contains("<span class='caption-wrapper left'><img class='caption' src='/a.png'"));
        assert!(output.contains("src='/b.png' width='' height='' alt='B' title='B'"));
        assert!(!output.contains("{%"));
    }

    #[test]
    fn expand_malformed_tag() {
        let output = super::expand("{% imgcap no image here %}");

        assert_eq!(output, crate::Error::MalformedMarkup.to_string());
    }

    #[test]
    fn expand_multiline_tag() {
        let output = super::expand("{% imgcap wide\n/a.png 10 20\nHi %}");

        assert_eq!(
            output,
            "<span class='caption-wrapper wide'><img class='caption' src='/a.png' width='10' height='20' alt='Hi' title='Hi'><span class='caption-text'>Hi</span></span>"
        );
    }

    #[test]
    fn expand_leaves_other_text() {
        let input = "{% raw %} 50% off {% endraw %}";

        assert_eq!(super::expand(input), input);
    }

    #[test]
    fn render_markdown() {
        let output = super::render("# Gallery\n\n{% imgcap /a.png Sunset %}\n");

        assert!(output.contains("<h1>Gallery</h1>"));
        assert!(output.contains("<span class='caption-text'>Sunset</span>"));
    }
}
