use crate::icons::*;
use dioxus::prelude::*;
use std::time::Duration;

const TOAST_VISIBLE: Duration = Duration::from_millis(3000);
const TOAST_FADE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub type_: ToastType,
    pub is_closing: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<usize>,
}

impl ToastManager {
    pub fn show(&mut self, message: &str, type_: ToastType) {
        let id = {
            let mut next = self.next_id.write();
            let id = *next;
            *next += 1;
            id
        };

        self.toasts.write().push(Toast {
            id,
            message: message.to_string(),
            type_,
            is_closing: false,
        });

        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(TOAST_VISIBLE).await;
            toasts.with_mut(|t| {
                if let Some(toast) = t.iter_mut().find(|t| t.id == id) {
                    toast.is_closing = true;
                }
            });
            tokio::time::sleep(TOAST_FADE).await;
            toasts.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: usize) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0);

    let mut manager = use_context_provider(|| ToastManager { toasts, next_id });

    rsx! {
        div { class: "contents",
            {children}

            div { class: "fixed top-20 right-4 flex flex-col items-end gap-2 pointer-events-none z-[1000]",
                for toast in toasts() {
                    div {
                        key: "{toast.id}",
                        class: "pointer-events-auto bg-card border border-border text-foreground px-4 py-3 rounded-xl shadow-xl flex items-center gap-3 transition-all duration-300",
                        class: if toast.is_closing { "opacity-0 translate-x-2" } else { "animate-in slide-in-from-right fade-in" },
                        onclick: move |_| manager.dismiss(toast.id),
                        match toast.type_ {
                            ToastType::Info => rsx! {
                                Info { size: 18, class: Some("text-status-info".to_string()) }
                            },
                            ToastType::Success => rsx! {
                                CircleCheck { size: 18, class: Some("text-primary".to_string()) }
                            },
                            ToastType::Error => rsx! {
                                CircleAlert { size: 18, class: Some("text-status-error".to_string()) }
                            },
                        }
                        span { class: "text-sm font-medium", "{toast.message}" }
                    }
                }
            }
        }
    }
}
