//! HTML rendering seam for the browser views.
//!
//! Handlers hand a [`Page`] and the view projection to a [`PageRenderer`];
//! the built-in [`HtmlPageRenderer`] produces small self-contained documents
//! and fragments. Every interpolated value is HTML-escaped.

use std::fmt::Write as _;

use crate::domain::BookPageView;

/// Pages the server can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    BookTable,
    AuthorTable,
    YearTable,
    SearchBar,
}

/// Turns a page and its data into HTML.
#[cfg_attr(test, mockall::automock)]
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: Page, books: &[BookPageView]) -> String;
}

/// Escape text for use in element content and quoted attributes.
///
/// # Examples
/// ```
/// use bookstore::inbound::http::render::escape_html;
///
/// assert_eq!(escape_html("<b>\"Poe\" & co</b>"), "&lt;b&gt;&quot;Poe&quot; &amp; co&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Built-in renderer producing plain HTML tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPageRenderer;

impl HtmlPageRenderer {
    fn table(headers: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
        let mut html = String::from("<table>\n<thead><tr>");
        for header in headers {
            let _ = write!(html, "<th>{}</th>", escape_html(header));
        }
        html.push_str("</tr></thead>\n<tbody>\n");
        for cells in rows {
            html.push_str("<tr>");
            for cell in cells {
                let _ = write!(html, "<td>{}</td>", escape_html(&cell));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");
        html
    }

    fn index() -> String {
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head><meta charset=\"utf-8\"><title>Bookstore</title></head>\n",
            "<body>\n",
            "<h1>Bookstore</h1>\n",
            "<nav>\n",
            "<a href=\"/books\">Books</a>\n",
            "<a href=\"/authors\">Authors</a>\n",
            "<a href=\"/years\">Years</a>\n",
            "<a href=\"/search\">Search</a>\n",
            "</nav>\n",
            "</body>\n",
            "</html>\n",
        )
        .to_owned()
    }

    fn search_bar() -> String {
        concat!(
            "<form class=\"search\" action=\"/books\" method=\"get\">\n",
            "<input type=\"search\" name=\"q\" placeholder=\"Search books\">\n",
            "<button type=\"submit\">Search</button>\n",
            "</form>\n",
        )
        .to_owned()
    }
}

impl PageRenderer for HtmlPageRenderer {
    fn render(&self, page: Page, books: &[BookPageView]) -> String {
        match page {
            Page::Index => Self::index(),
            Page::SearchBar => Self::search_bar(),
            Page::BookTable => Self::table(
                &["ID", "Name", "Author", "ISBN", "Pages", "Year"],
                books.iter().map(|book| {
                    vec![
                        book.id.clone(),
                        book.name.clone(),
                        book.author.clone(),
                        book.isbn.clone(),
                        book.pages.to_string(),
                        book.year.to_string(),
                    ]
                }),
            ),
            Page::AuthorTable => Self::table(
                &["Author", "Name"],
                books
                    .iter()
                    .map(|book| vec![book.author.clone(), book.name.clone()]),
            ),
            Page::YearTable => Self::table(
                &["Year", "Name"],
                books
                    .iter()
                    .map(|book| vec![book.year.to_string(), book.name.clone()]),
            ),
        }
    }
}
