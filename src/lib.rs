#![warn(warnings)]

//! Caption image tag for Tera templates and Markdown pages.
//!
//! ```text
//! {% imgcap [class(es)] /url/to/image [width height] [title text] %}
//! ```

mod caption;
mod error;

pub mod filters;
pub mod markdown;

pub use caption::CaptionImage;
pub use error::Error;

/// Name the tag, filter and function are registered under.
pub const TAG_NAME: &str = "imgcap";

/// Registers the `imgcap` filter and function, and the `markdown` filter.
pub fn register(template: &mut tera::Tera) {
    template.register_filter(TAG_NAME, crate::filters::imgcap);
    template.register_function(TAG_NAME, crate::filters::imgcap_function);
    template.register_filter("markdown", crate::filters::markdown);
}
