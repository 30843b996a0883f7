// W3BOTS pitch deck - browser build (Leptos 0.8 CSR)

use std::sync::Arc;

use leptos::prelude::*;
use pitchdeck::catalog::Catalog;
use pitchdeck::components::DeckPage;
use pitchdeck::model::{ApplyTheme, Theme};
use pitchdeck::styles::DECK_CSS;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes the theme as the class of `<html>`, where the stylesheet reads it.
fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    match root {
        Some(root) => root.set_class_name(theme.as_str()),
        None => console::warn_1(&JsValue::from_str("[pitchdeck] no document element to theme")),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            console::error_1(&JsValue::from_str(&format!("[pitchdeck] {e}")));
            return;
        }
    };
    for violation in catalog.parity_violations() {
        console::warn_1(&JsValue::from_str(&format!("[pitchdeck] catalog: {violation}")));
    }

    let catalog = Arc::new(catalog);
    let applier: Arc<dyn ApplyTheme> = Arc::new(apply_to_document);
    leptos::mount::mount_to_body(move || {
        view! {
            <style>{DECK_CSS}</style>
            <DeckPage catalog=catalog applier=applier />
        }
    });
}
