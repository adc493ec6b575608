//! Notification toasts
//!
//! Provides stacked toast banners for lead submission feedback. Every toast
//! dismisses itself after its `auto_dismiss_ms`; several may be visible at
//! once.

use crate::core::{MAX_NOTIFICATIONS, Notification, NotificationKind, NotificationPresenter};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications container component
/// Place this once at the application root
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-5 right-5 z-[1000] flex flex-col gap-3 max-w-sm" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    view! {
                        <NotificationToast
                            notification=item.notification
                            id=item.id
                            notifications=notifications
                        />
                    }
                }
            />
        </div>
    }
}

/// Single notification toast
#[component]
fn NotificationToast(
    notification: Notification,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let (is_entered, _set_is_entered) = signal(false);
    let (is_exiting, _set_is_exiting) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::NOTIFICATION_EXIT_MS;
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        let dismiss_ms = notification.auto_dismiss_ms;
        spawn_local(async move {
            // Slide in on the next frame
            TimeoutFuture::new(100).await;
            _set_is_entered.try_set(true);

            TimeoutFuture::new(dismiss_ms).await;
            _set_is_exiting.try_set(true);
            // Wait for exit animation
            TimeoutFuture::new(NOTIFICATION_EXIT_MS).await;
            notifications.try_update(|n| {
                n.retain(|i| i.id != id);
            });
        });
    }

    let (container_class, icon_path) = match notification.kind {
        NotificationKind::Success => ("lead-toast lead-toast-success", icons::CHECK_CIRCLE),
        NotificationKind::Error => ("lead-toast lead-toast-error", icons::ALERT_TRIANGLE),
    };

    let headline = notification.headline.clone();
    let detail = notification.detail.clone();

    view! {
        <div
            class=container_class
            role="status"
            style=move || {
                if is_entered.get() && !is_exiting.get() {
                    "transform: translateX(0);"
                } else {
                    "transform: translateX(400px);"
                }
            }
        >
            <Icon path=icon_path class="w-5 h-5 flex-shrink-0" />
            <div class="flex-1 min-w-0">
                <div>{headline}</div>
                <div class="text-sm opacity-90 mt-1">{detail}</div>
            </div>
            <button
                class="opacity-70 hover:opacity-100 transition-opacity"
                aria-label="Dismiss notification"
                on:click=move |_| {
                    notifications.update(|n| {
                        n.retain(|i| i.id != id);
                    });
                }
            >
                <Icon path=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

/// Handle for pushing notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn success(&self, headline: impl Into<String>, detail: impl Into<String>) {
        self.notify(Notification::success(headline, detail));
    }

    pub fn error(&self, headline: impl Into<String>, detail: impl Into<String>) {
        self.notify(Notification::error(headline, detail));
    }

    /// Clear all notifications
    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationPresenter for NotificationManager {
    fn show(&self, kind: NotificationKind, headline: &str, detail: &str) {
        self.notify(Notification::new(kind, headline, detail));
    }
}

/// Provide a notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager from the component tree
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}
