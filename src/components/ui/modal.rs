use crate::icons::X;
use dioxus::prelude::*;

#[component]
pub fn Modal(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
    onclose: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-[900] flex items-center justify-center p-4 animate-in fade-in duration-200",
            // Backdrop
            div {
                class: "absolute inset-0 bg-background/80 backdrop-blur-sm",
                onclick: move |e| onclose.call(e),
            }
            div {
                class: "relative w-full max-w-2xl max-h-[90vh] overflow-y-auto bg-card border border-border rounded-2xl shadow-2xl p-6 flex flex-col animate-in zoom-in-95 duration-200",
                div { class: "flex items-start justify-between mb-4",
                    div {
                        h3 { class: "text-lg font-bold", "{title}" }
                        if let Some(sub) = subtitle {
                            p { class: "text-sm text-muted-foreground", "{sub}" }
                        }
                    }
                    button {
                        class: "p-1 rounded-lg hover:bg-accent text-muted-foreground",
                        onclick: move |e| onclose.call(e),
                        X { size: 20 }
                    }
                }
                {children}
            }
        }
    }
}
