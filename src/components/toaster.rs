use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::ToastSettings;
use crate::toast::{Notification, ToastId, ToastQueue};

/// Shared toast handle, provided once by `App`.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(settings: ToastSettings) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(settings.visible_limit)),
            duration_ms: settings.duration_ms,
        }
    }

    pub fn show(&self, notification: Notification) {
        if notification.is_destructive() {
            log::warn!("Error toast: {}: {}", notification.title, notification.description);
        } else {
            log::debug!("Toast: {}", notification.title);
        }
        let shown = self
            .queue
            .try_update(|queue| {
                let id = queue.push(notification);
                queue.is_visible(id).then_some(id)
            })
            .flatten();

        match shown {
            Some(id) => self.expire_later(id),
            None => log::debug!(
                "Toast queued, {} waiting",
                self.queue.with_untracked(|queue| queue.waiting_count())
            ),
        }
    }

    pub fn dismiss(&self, id: ToastId) {
        let promoted = self.queue.try_update(|queue| queue.dismiss(id)).flatten();
        for id in promoted.unwrap_or_default() {
            self.expire_later(id);
        }
    }

    fn expire_later(&self, id: ToastId) {
        let toaster = *self;
        Timeout::new(self.duration_ms, move || toaster.dismiss(id)).forget();
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Fixed overlay rendering the visible toasts.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            {move || {
                toaster
                    .queue
                    .with(|queue| queue.visible().cloned().collect::<Vec<_>>())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let n = toast.notification;
                        view! {
                            <div class=n.variant.css_class()>
                                <div class="toast-body">
                                    <strong class="toast-title">{n.title}</strong>
                                    <p class="toast-description">{n.description}</p>
                                </div>
                                <button
                                    class="toast-close"
                                    aria-label="Close"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
