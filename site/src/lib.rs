//! # site
//!
//! The portfolio page: project catalog, theme toggle, and the Leptos views
//! that render them.
//!
//! With the `ssr` feature the `portfolio` binary renders pages to HTML
//! strings for the live preview and the static build. With `hydrate` the
//! crate compiles to a small WASM bundle whose only job is to bind the
//! theme toggle button on page load.
//!
//! ## Building the bundle
//!
//! Pages import `static/pkg/site.js` (see [`app::BUNDLE_ASSET`]). Produce it
//! from the workspace root with:
//!
//! ```text
//! cargo build -p site --lib --target wasm32-unknown-unknown --features hydrate --release
//! wasm-bindgen --target web --no-typescript --out-dir static/pkg --out-name site \
//!     target/wasm32-unknown-unknown/release/site.wasm
//! ```
//!
//! `wasm-bindgen` must match the `wasm-bindgen` crate version in `Cargo.lock`.
//! Without the bundle every page still renders, but the toggle button does
//! nothing; `portfolio build` warns when it is missing.

pub mod app;
pub mod catalog;
pub mod components;
pub mod links;
pub mod pages;
pub mod theme;
pub mod tools;

pub use catalog::{CatalogError, ProjectCatalog, ProjectRecord, Section};
pub use links::Links;
pub use theme::{ThemeMode, ThemeSurface};
pub use tools::{ToolRegistry, ToolsError};

/// WASM entry point: attach the theme toggle to the rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    theme::bind_document();
}
