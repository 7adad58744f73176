//! "Print your homework in your handwriting" page.
//!
//! Users provide a handwriting sample (drop or browse) and either type their
//! homework or attach a PDF. Export only announces itself through a toast.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::drop_zone::{first_selected_file, DropZone};
use crate::components::file_summary::FileSummary;
use crate::components::toaster::use_toaster;
use crate::upload::{FileHandle, HomeworkContent, UploadOrigin, UploadWizard};

#[component]
pub fn HomeworkPage() -> impl IntoView {
    let wizard = RwSignal::new(UploadWizard::new());
    let toaster = use_toaster();
    let upload_section = NodeRef::<Section>::new();
    let pdf_input_id = "pdf-file-input";

    let on_sample = Callback::new(move |(file, origin): (Option<FileHandle>, UploadOrigin)| {
        let toast = wizard
            .try_update(|w| w.upload_handwriting_sample(file, origin))
            .flatten();
        if let Some(toast) = toast {
            toaster.show(toast);
        }
    });

    let on_pdf_change = move |ev: web_sys::Event| {
        let file = first_selected_file(&ev);
        if let Some(toast) = wizard.try_update(|w| w.upload_homework_pdf(file)).flatten() {
            toaster.show(toast);
        }
    };

    let on_export = move |_| {
        let toast = wizard.with_untracked(|w| w.request_export());
        toaster.show(toast);
    };

    let headline = Signal::derive(move || wizard.with(|w| w.drop_zone_headline()));

    view! {
        <div class="page homework-page">
            <style>{include_str!("homework.css")}</style>

            <section class="homework-hero">
                <span class="hero-pill">"\u{2728} AI-Powered Handwriting"</span>
                <h1 class="hero-title">"Print Your Homework in Your Handwriting"</h1>
                <p class="hero-subtitle">
                    "Upload your handwriting sample and let our 3D printer create homework that looks exactly like you wrote it by hand."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-hero btn-lg"
                        on:click=move |_| {
                            if let Some(section) = upload_section.get() {
                                section.scroll_into_view();
                            }
                        }
                    >
                        "Get Started"
                    </button>
                </div>
            </section>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <p class="page-description">"Three simple steps to print your homework"</p>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <strong>"Upload Sample"</strong>
                        <p>"Upload a clear image of your handwriting on paper"</p>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <strong>"Type Content"</strong>
                        <p>"Enter the homework text you want to be written"</p>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <strong>"Print"</strong>
                        <p>"Export to 3D printer and watch it write in your style"</p>
                    </div>
                </div>
            </section>

            <section class="upload-grid" node_ref=upload_section>
                <div class="card">
                    <h3>"Upload Handwriting Sample"</h3>
                    <DropZone headline=headline on_file=on_sample />
                    {move || wizard.with(|w| w.handwriting_sample().cloned()).map(|file| view! {
                        <FileSummary file=file />
                    })}
                </div>

                <div class="card">
                    <h3>"Enter Homework Text"</h3>
                    <textarea
                        class="input homework-text"
                        placeholder="Type or paste your homework content here..."
                        prop:value=move || wizard.with(|w| w.homework_text().to_string())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            wizard.update(|w| {
                                w.set_homework_text(text);
                            });
                        }
                        disabled=move || wizard.with(|w| w.text_locked())
                    ></textarea>

                    <div class="or-divider">
                        <span>"OR"</span>
                    </div>

                    <input
                        type="file"
                        id=pdf_input_id
                        accept="application/pdf"
                        style="display: none"
                        on:change=on_pdf_change
                    />
                    <label for=pdf_input_id class="btn btn-outline btn-block">
                        "\u{2b06} "
                        {move || wizard.with(|w| w.pdf_button_label())}
                    </label>

                    {move || wizard.with(|w| w.homework_pdf().cloned()).map(|file| view! {
                        <FileSummary file=file />
                    })}

                    <div class="export-row">
                        <p class="status-text">{move || wizard.with(|w| w.status_line())}</p>
                        <button class="btn btn-hero" on:click=on_export>
                            "Export for 3D Printer"
                        </button>
                    </div>
                </div>
            </section>

            {move || wizard.with(|w| w.preview().map(render_preview))}
        </div>
    }
}

fn render_preview(content: HomeworkContent<'_>) -> impl IntoView {
    let caption = content.preview_caption();
    let body = match content {
        HomeworkContent::Pdf(file) => view! {
            <div class="preview-pdf">
                <span class="file-icon">"\u{1f4c4}"</span>
                <div>
                    <p class="file-name">{file.name.clone()}</p>
                    <p class="status-text">"Ready for 3D printing"</p>
                </div>
            </div>
        }
        .into_any(),
        HomeworkContent::Text(text) => view! {
            <p class="preview-text">{text.to_string()}</p>
        }
        .into_any(),
    };

    view! {
        <section class="card preview-card">
            <h3>"\u{2728} Preview"</h3>
            <div class="preview-body">{body}</div>
            <p class="preview-caption">{caption}</p>
        </section>
    }
}
