//! Drag-and-drop target with a hidden file input for click-to-browse.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::upload::{FileHandle, UploadOrigin};

/// Handwriting sample drop zone.
///
/// Reports the first file of a drop or a browse selection along with how it
/// arrived; validation is up to the caller.
#[component]
pub fn DropZone(
    /// Main line of text, e.g. the current file name
    #[prop(into)]
    headline: Signal<String>,
    /// Called with the picked file (if any) and its origin
    #[prop(into)]
    on_file: Callback<(Option<FileHandle>, UploadOrigin)>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "handwriting-file-input";

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
            .map(|file| FileHandle::from(&file));
        on_file.run((file, UploadOrigin::Drop));
    };

    let on_input_change = move |ev: web_sys::Event| {
        on_file.run((first_selected_file(&ev), UploadOrigin::Browse));
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone-active=move || is_over.get()
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <input
                type="file"
                id=file_input_id
                accept="image/*"
                style="display: none"
                on:change=on_input_change
            />
            <label for=file_input_id class="drop-zone-content">
                <div class="drop-icon">"\u{2b06}"</div>
                <p class="drop-main">{move || headline.get()}</p>
                <p class="drop-hint">"or click to browse (JPG, PNG, PDF)"</p>
            </label>
        </div>
    }
}

/// First file of an `<input type="file">` change event.
pub fn first_selected_file(ev: &web_sys::Event) -> Option<FileHandle> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .map(|file| FileHandle::from(&file))
}
