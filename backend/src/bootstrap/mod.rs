//! Startup wiring: configuration, store selection and catalogue seeding.

mod config;
mod startup;

pub use config::{BookstoreSettings, DATABASE_URI_FALLBACK_VAR};
pub use startup::{
    CatalogueStore, StartupError, load_seed_file, open_catalogue_store, seed_catalogue_on_startup,
};
