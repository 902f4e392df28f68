//! @acp:module "Page"
//! @acp:summary "Static HTML page output"
//! @acp:domain cli
//! @acp:layer output
//!
//! Page output
//!
//! Rendering of the static HTML page and the cover lookup it depends on.

pub mod cover;
pub mod renderer;

pub use cover::CoverImage;
pub use renderer::{escape_html, render_page, PageRenderer, DATE_FORMAT};
