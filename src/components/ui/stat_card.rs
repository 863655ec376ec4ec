use dioxus::prelude::*;

#[component]
pub fn StatCard(
    label: String,
    value: String,
    icon: Element,
    #[props(default)] accent: Option<String>,
    #[props(default)] hint: Option<String>,
) -> Element {
    let accent = accent.unwrap_or_else(|| "bg-primary/10 text-primary".to_string());
    rsx! {
        div { class: "bg-card border border-border rounded-2xl p-5 shadow-sm flex items-center gap-4",
            div { class: "p-3 rounded-xl {accent}", {icon} }
            div { class: "min-w-0",
                div { class: "text-xs font-medium text-muted-foreground uppercase tracking-wide", "{label}" }
                div { class: "text-2xl font-bold text-foreground truncate", "{value}" }
                if let Some(hint) = hint {
                    div { class: "text-[11px] text-muted-foreground", "{hint}" }
                }
            }
        }
    }
}
