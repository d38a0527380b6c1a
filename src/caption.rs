use crate::Error;
use regex::Regex;
use std::sync::OnceLock;

/// `[class(es) ]url[ width height][ title]`
fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)(?P<class>[^[:space:]].*[[:space:]]+)?(?P<scheme>https?://|/)(?P<path>[^[:space:]]+)(?P<size>[[:space:]]+[0-9]+[[:space:]]+[0-9]+)?(?P<title>[[:space:]]+.+)?",
        )
        .unwrap()
    })
}

/// Whitespace is ASCII only: `[ \t\n\x0b\x0c\r]`, plus NUL when trimming.
fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b' || c == '\0'
}

/// One parsed `imgcap` occurrence.
///
/// Built once from the tag markup and read-only afterwards. An occurrence
/// without `src` is permanently invalid and renders the syntax error message.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde_derive::Serialize)]
pub struct CaptionImage {
    class: String,
    src: Option<String>,
    width: String,
    height: String,
    title: Option<String>,
}

impl CaptionImage {
    pub fn new(markup: &str) -> Self {
        let caps = match markup_regex().captures(markup) {
            Some(caps) => caps,
            None => {
                log::warn!("Malformed imgcap markup: {:?}", markup);

                return Self::default();
            }
        };

        let mut image = Self {
            class: caps.name("class").map_or("", |m| m.as_str()).to_string(),
            src: Some(format!("{}{}", &caps["scheme"], &caps["path"])),
            title: caps
                .name("title")
                .map(|m| m.as_str().trim_matches(is_blank).to_string()),
            ..Self::default()
        };

        if let Some(size) = caps.name("size") {
            let mut dimensions = size.as_str().split_whitespace();

            if let (Some(width), Some(height)) = (dimensions.next(), dimensions.next()) {
                image.width = width.to_string();
                image.height = height.to_string();
            }
        }

        log::debug!("Parsed imgcap markup {:?} into {:?}", markup, image);

        image
    }

    pub fn is_valid(&self) -> bool {
        self.src.is_some()
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn src(&self) -> Result<&str, Error> {
        self.src.as_deref().ok_or(Error::MalformedMarkup)
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Values are interpolated as is, without any HTML escaping.
    pub fn render(&self) -> String {
        let src = match self.src() {
            Ok(src) => src,
            Err(err) => return err.to_string(),
        };

        let wrapper = format!("caption-wrapper {}", self.class);
        let title = self.title().unwrap_or_default();

        format!(
            "<span class='{}'><img class='caption' src='{src}' width='{}' height='{}' alt='{title}' title='{title}'><span class='caption-text'>{title}</span></span>",
            wrapper.trim_end_matches(is_blank),
            self.width,
            self.height,
        )
    }
}

impl std::fmt::Display for CaptionImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
