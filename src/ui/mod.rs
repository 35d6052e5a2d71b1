//! Terminal frontend.

mod app;
mod theme;
mod view;

pub use app::run;
