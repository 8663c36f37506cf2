//! Shell page rendering.
//!
//! Mounting a view means serving the minimal page that names it. View
//! internals are not this service's concern; the page carries only the
//! title and a mount point tagged with the view name.

use crate::views::ViewSpec;

/// Render the shell page for a mounted view.
pub fn render(view: &ViewSpec, path: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>{title}</title>\n\
         </head>\n\
         <body>\n\
           <div id=\"app\" data-view=\"{name}\" data-path=\"{path}\"></div>\n\
         </body>\n\
         </html>\n",
        title = escape(&view.title),
        name = escape(&view.name),
        path = escape(path),
    )
}

/// Minimal HTML attribute/text escaping.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
