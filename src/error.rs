#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    MalformedMarkup,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let s = match self {
            Error::MalformedMarkup => r#"Error processing input, expected syntax: <img class="[class name(s)]" src="/url/to/image" title="[width height] [title text]" >"#,
        };

        write!(f, "{}", s)
    }
}

impl std::error::Error for Error {
}
