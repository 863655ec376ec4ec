use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary text-primary-foreground hover:opacity-90 shadow-lg shadow-primary/20",
            ButtonVariant::Outline => "border border-border bg-card hover:bg-accent text-foreground",
            ButtonVariant::Ghost => "hover:bg-accent text-muted-foreground hover:text-foreground",
            ButtonVariant::Danger => "text-status-error hover:bg-status-error/10",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let extra = class.unwrap_or_default();
    let look = variant.classes();
    rsx! {
        button {
            class: "inline-flex items-center justify-center gap-2 h-10 px-4 rounded-xl font-semibold text-sm transition-all active:scale-95 disabled:opacity-50 disabled:pointer-events-none {look} {extra}",
            disabled,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Square icon-only button used in tables and cart rows.
#[component]
pub fn IconButton(
    title: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let look = variant.classes();
    rsx! {
        button {
            class: "w-9 h-9 flex items-center justify-center rounded-lg transition-all active:scale-90 disabled:opacity-40 {look}",
            title,
            disabled,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
