//! HTML Document Shell
//!
//! Wraps a rendered [`Page`] in a full document with a navigation bar.

use crate::router::Route;
use crate::views::page::escape_html;
use crate::views::Page;

/// Render `page` as a complete HTML document
pub fn document(title: &str, page: &Page) -> String {
    let nav = Route::ALL
        .iter()
        .filter_map(|route| {
            route
                .path()
                .map(|path| format!("    <a href=\"{}\">{}</a>", path, route.label()))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - Weatherdeck</title>\n\
         </head>\n\
         <body>\n\
         <nav>\n{nav}\n</nav>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        nav = nav,
        body = page.to_html(),
    )
}
