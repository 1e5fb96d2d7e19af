use dioxus::html::HasFileData;
use dioxus::prelude::*;
use store::{guess_mime, FileKind, FileStatus, UploadQueue};

use crate::icons::{FaCheck, FaFileImage, FaFilePdf, FaUpload, FaXmark};
use crate::{log_activity, use_activity_log, use_app_config, Icon, LogLevel};

#[cfg(target_arch = "wasm32")]
const PROCESSING_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

#[component]
pub fn UploadView() -> Element {
    let config = use_app_config();
    let mut queue = use_signal(|| UploadQueue::new(config.uploads.clone()));
    let mut drag_active = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut activity_log = use_activity_log();

    let mut enqueue = move |names: Vec<String>| {
        if names.is_empty() {
            return;
        }
        let mut files = queue.write();
        for name in &names {
            files.add(name.clone(), guess_mime(name));
        }
        drop(files);
        log_activity(
            &mut activity_log,
            LogLevel::Info,
            &format!("Queued {} file(s) for cataloging", names.len()),
        );
    };

    let process_files = move |_| {
        if processing() || queue.read().pending() == 0 {
            return;
        }
        processing.set(true);
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(PROCESSING_DELAY).await;

            let count = queue.write().process_all();
            processing.set(false);
            tracing::info!("Processed {} uploads", count);
            log_activity(
                &mut activity_log,
                LogLevel::Success,
                &format!("Processed {count} file(s)"),
            );
        });
    };

    let cancel = move |_| {
        let dropped = queue.write().cancel_pending();
        if dropped > 0 {
            log_activity(
                &mut activity_log,
                LogLevel::Warning,
                &format!("Cancelled {dropped} pending file(s)"),
            );
        }
    };

    let files = queue.read().files().to_vec();
    let empty = queue.read().is_empty();
    let pending = queue.read().pending();

    rsx! {
        div {
            class: "view",
            h1 { class: "view-title", "Upload Materials" }

            div {
                class: if drag_active() { "dropzone active" } else { "dropzone" },
                ondragenter: move |evt: DragEvent| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |_| drag_active.set(false),
                ondrop: move |evt: DragEvent| {
                    evt.prevent_default();
                    drag_active.set(false);
                    if let Some(engine) = evt.files() {
                        enqueue(engine.files());
                    }
                },
                Icon { width: 48, height: 48, icon: FaUpload, class: "dropzone-icon" }
                label {
                    r#for: "file-upload",
                    class: "dropzone-label",
                    span { "Drop files here or click to upload" }
                    input {
                        id: "file-upload",
                        name: "file-upload",
                        r#type: "file",
                        class: "sr-only",
                        multiple: true,
                        accept: ".pdf,.png,.jpg,.jpeg",
                        onchange: move |evt: FormEvent| {
                            if let Some(engine) = evt.files() {
                                enqueue(engine.files());
                            }
                        },
                    }
                }
                p { class: "muted small", "PDF, PNG, JPG up to 10MB each" }
            }

            div {
                class: "card file-list",
                h2 { class: "card-title", "Uploaded Files" }
                if empty {
                    p { class: "muted", "No files queued." }
                }
                ul {
                    for file in files {
                        li {
                            key: "{file.id}",
                            class: "file-row",
                            div {
                                class: "file-name",
                                {match file.kind {
                                    FileKind::Image => rsx! { Icon { width: 20, height: 20, icon: FaFileImage } },
                                    FileKind::Pdf => rsx! { Icon { width: 20, height: 20, icon: FaFilePdf } },
                                }}
                                span { "{file.name}" }
                            }
                            div {
                                class: "file-actions",
                                if file.status == FileStatus::Complete {
                                    Icon { width: 18, height: 18, icon: FaCheck, class: "status-complete" }
                                } else {
                                    div { class: "spinner", title: "Processing" }
                                }
                                button {
                                    class: "icon-button",
                                    title: "Remove",
                                    onclick: move |_| {
                                        queue.write().remove(file.id);
                                    },
                                    Icon { width: 18, height: 18, icon: FaXmark }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-ghost",
                    disabled: processing(),
                    onclick: cancel,
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: processing() || pending == 0,
                    onclick: process_files,
                    if processing() { "Processing..." } else { "Process Files" }
                }
            }
        }
    }
}
