//! Browser views over the catalogue.
//!
//! ```text
//! GET /          index page
//! GET /books     book table
//! GET /authors   author table
//! GET /years     year table
//! GET /search    search bar fragment
//! GET /create    204, the creation form is client-side
//! ```
//!
//! Table pages query the store on every request and only render once the
//! query succeeds; a failed query answers with the JSON error envelope.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::render::Page;
use crate::inbound::http::state::HttpState;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

async fn render_table(state: &HttpState, page: Page) -> ApiResult<HttpResponse> {
    let books = state.books.list_book_pages().await?;
    Ok(html(state.pages.render(page, &books)))
}

#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> HttpResponse {
    html(state.pages.render(Page::Index, &[]))
}

#[get("/books")]
pub async fn book_table(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_table(&state, Page::BookTable).await
}

#[get("/authors")]
pub async fn author_table(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_table(&state, Page::AuthorTable).await
}

#[get("/years")]
pub async fn year_table(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_table(&state, Page::YearTable).await
}

#[get("/search")]
pub async fn search_bar(state: web::Data<HttpState>) -> HttpResponse {
    html(state.pages.render(Page::SearchBar, &[]))
}

#[get("/create")]
pub async fn create_form() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
