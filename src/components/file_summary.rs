use leptos::prelude::*;

use crate::upload::FileHandle;

/// Name and size of a selected file.
#[component]
pub fn FileSummary(file: FileHandle) -> impl IntoView {
    view! {
        <div class="file-summary">
            <span class="file-icon">"\u{1f4c4}"</span>
            <div class="file-summary-text">
                <p class="file-name">{file.name.clone()}</p>
                <p class="file-size">{file.size_label()}</p>
            </div>
        </div>
    }
}
