//! HTTP inbound adapter exposing the JSON API and browser views.

pub mod books;
pub mod error;
pub mod health;
pub mod pages;
pub mod render;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the catalogue API, the views and the health probes.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app
/// data. Undecodable JSON bodies answer `400 Invalid book data`.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use bookstore::inbound::http::{configure, health::HealthState, state::HttpState};
///
/// fn app(state: HttpState) -> App<
///     impl actix_web::dev::ServiceFactory<
///         actix_web::dev::ServiceRequest,
///         Config = (),
///         Response = actix_web::dev::ServiceResponse,
///         Error = actix_web::Error,
///         InitError = (),
///     >,
/// > {
///     App::new()
///         .app_data(web::Data::new(state))
///         .app_data(web::Data::new(HealthState::new()))
///         .configure(configure)
/// }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(
            web::scope("/api")
                .service(books::list_books)
                .service(books::create_book)
                .service(books::update_book)
                .service(books::delete_book),
        )
        .service(health::ready)
        .service(health::live)
        .service(pages::index)
        .service(pages::book_table)
        .service(pages::author_table)
        .service(pages::year_table)
        .service(pages::search_bar)
        .service(pages::create_form);
}
