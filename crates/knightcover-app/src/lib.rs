//! Desktop app for exploring minimal knight covers.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::KnightcoverApp;

mod action;
mod app;
mod demo;
mod flow;
mod persistence;
mod state;
mod ui;
pub mod version;
mod view_model_builder;
mod worker;
