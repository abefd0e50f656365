//! Drag-and-drop uploader with simulated ingestion.
//!
//! Files are staged locally, then "processed" one by one with a fixed
//! latency per file. Each completed file is reported upward through
//! `on_file_uploaded`; the host owns the aggregate list.

use crate::layout::notify::{NoticeKind, NotifyService};
use crate::shared::components::ui::Button;
use crate::shared::format::format_file_size;
use chatcore::{UploadCandidate, UploadQueue, UPLOAD_LATENCY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

fn file_list_entries(files: &web_sys::FileList) -> Vec<(String, u64)> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| (file.name(), file.size() as u64))
        .collect()
}

#[component]
pub fn FileUpload(
    /// Called once per file after its simulated ingestion completes.
    on_file_uploaded: Callback<String>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not provided in context");

    let queue = RwSignal::new(UploadQueue::new());
    let (is_dragging, set_is_dragging) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // One warning per batch, not per file.
    let stage_files = move |entries: Vec<(String, u64)>| {
        let outcome = queue.try_update(|q| q.submit(entries)).unwrap_or_default();
        if !outcome.rejected.is_empty() {
            notify.notify(
                NoticeKind::Warning,
                "Invalid file type",
                "Only PDF, TXT, and MD files are supported.",
            );
        }
    };

    let handle_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let handle_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let handle_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            stage_files(file_list_entries(&files));
        }
    };

    let handle_file_select = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                stage_files(file_list_entries(&files));
            }
            // Allow re-selecting the same file later.
            input.set_value("");
        }
    };

    let handle_upload = move |_| {
        let Some(batch) = queue.try_update(|q| q.begin()).flatten() else {
            return;
        };
        leptos::logging::log!("upload: starting batch of {} file(s)", batch.len());

        spawn_local(async move {
            // Strictly sequential: the nth success notice is emitted before
            // the (n+1)th latency starts.
            for candidate in batch {
                TimeoutFuture::new(UPLOAD_LATENCY_MS).await;
                on_file_uploaded.run(candidate.name.clone());
                notify.notify(
                    NoticeKind::Info,
                    "Document added successfully!",
                    &format!(
                        "\u{2705} {} has been processed and added to your knowledge base.",
                        candidate.name
                    ),
                );
            }
            queue.update(|q| q.finish());
            leptos::logging::log!("upload: batch complete");
        });
    };

    let staged_count = move || queue.with(|q| q.staged().len());
    let is_uploading = move || queue.with(|q| q.is_uploading());

    view! {
        <div class="file-upload">
            <div
                class="file-upload__dropzone"
                class=("file-upload__dropzone--active", is_dragging)
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                <h3 class="file-upload__title">"Drop files here or click to browse"</h3>
                <p class="file-upload__hint">"Supports PDF, TXT, and MD files"</p>
                <Button variant="secondary">"Select Files"</Button>
            </div>

            <input
                node_ref=input_ref
                type="file"
                multiple=true
                accept=".pdf,.txt,.md"
                style="display: none;"
                on:change=handle_file_select
            />

            <Show when=move || { staged_count() > 0 }>
                <div class="file-upload__staged">
                    <h4 class="file-upload__staged-title">"Selected Files:"</h4>
                    <For
                        each=move || {
                            queue.with(|q| q.staged().to_vec()).into_iter().enumerate().collect::<Vec<_>>()
                        }
                        key=|(index, candidate): &(usize, UploadCandidate)| {
                            format!("{}-{}", index, candidate.name)
                        }
                        children=move |(index, candidate): (usize, UploadCandidate)| {
                            view! {
                                <div class="file-upload__row">
                                    <span class="file-upload__name">{candidate.name.clone()}</span>
                                    <span class="file-upload__size">
                                        {format!("({})", format_file_size(candidate.size_bytes))}
                                    </span>
                                    <Button
                                        variant="ghost"
                                        size="sm"
                                        on_click=Callback::new(move |_| {
                                            queue.update(|q| q.remove(index));
                                        })
                                    >
                                        "\u{00d7}"
                                    </Button>
                                </div>
                            }
                        }
                    />

                    <Button
                        class="file-upload__confirm"
                        disabled=Signal::derive(is_uploading)
                        on_click=Callback::new(handle_upload)
                    >
                        {move || {
                            if is_uploading() {
                                "Processing...".to_string()
                            } else {
                                let count = staged_count();
                                format!("Upload {} file{}", count, if count > 1 { "s" } else { "" })
                            }
                        }}
                    </Button>
                </div>
            </Show>
        </div>
    }
}
