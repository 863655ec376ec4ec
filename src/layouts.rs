use crate::hooks::use_store_client;
use crate::icons::*;
use crate::models::ProductCategory;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MainLayout() -> Element {
    let client = use_store_client();
    let mut menu_open = use_signal(|| false);
    let route = use_route::<Route>();
    let cart_count = client.cart_count();

    rsx! {
        document::Title { "AKKSS Tech | {route.title()}" }
        div { class: "min-h-screen flex flex-col bg-background text-foreground font-sans",
            header { class: "sticky top-0 z-[500] bg-card/95 backdrop-blur-md border-b border-border",
                div { class: "max-w-7xl mx-auto px-4 h-16 flex items-center justify-between",
                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 hover:opacity-80 transition-opacity",
                        div { class: "w-8 h-8 rounded-lg bg-primary flex items-center justify-center",
                            Leaf { size: 18, class: Some("text-primary-foreground".to_string()) }
                        }
                        span { class: "font-bold text-lg tracking-tight", "AKKSS Tech" }
                    }

                    nav { class: "hidden md:flex items-center gap-1",
                        NavItem { to: Route::Home {}, label: "Home" }
                        NavItem { to: Route::Store { category: String::new() }, label: "Store" }
                        NavItem { to: Route::Impact {}, label: "Impact Map" }
                        NavItem { to: Route::Admin {}, label: "Admin" }
                    }

                    div { class: "flex items-center gap-2",
                        Link {
                            to: Route::CartPage {},
                            class: "relative p-2 rounded-xl hover:bg-accent transition-colors",
                            ShoppingCart { size: 22 }
                            if cart_count > 0 {
                                span { class: "absolute -top-1 -right-1 min-w-5 h-5 px-1 rounded-full bg-primary text-primary-foreground text-[11px] font-bold flex items-center justify-center",
                                    "{cart_count}"
                                }
                            }
                        }
                        button {
                            class: "md:hidden p-2 rounded-xl hover:bg-accent",
                            onclick: move |_| menu_open.toggle(),
                            if menu_open() {
                                X { size: 22 }
                            } else {
                                Menu { size: 22 }
                            }
                        }
                    }
                }
                if menu_open() {
                    nav {
                        class: "md:hidden border-t border-border px-4 py-2 flex flex-col",
                        onclick: move |_| menu_open.set(false),
                        NavItem { to: Route::Home {}, label: "Home" }
                        NavItem { to: Route::Store { category: String::new() }, label: "Store" }
                        NavItem { to: Route::Impact {}, label: "Impact Map" }
                        NavItem { to: Route::Admin {}, label: "Admin" }
                    }
                }
            }

            main { class: "flex-1", Outlet::<Route> {} }

            Footer {}
        }
    }
}

#[component]
fn NavItem(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "px-3 py-2 rounded-xl text-sm font-medium text-muted-foreground hover:text-primary transition-colors",
            active_class: "text-primary bg-primary/10",
            "{label}"
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "bg-foreground text-background mt-16",
            div { class: "max-w-7xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-8",
                div {
                    div { class: "flex items-center gap-2 mb-3",
                        Leaf { size: 20, class: Some("text-primary".to_string()) }
                        span { class: "font-bold text-lg", "AKKSS Tech" }
                    }
                    p { class: "text-sm opacity-70",
                        "Sustainable laptops. Every purchase plants a tree and keeps electronics out of landfill."
                    }
                }
                div {
                    h4 { class: "font-semibold mb-3", "Shop" }
                    ul { class: "space-y-2 text-sm opacity-80",
                        for category in ProductCategory::all() {
                            li {
                                Link {
                                    to: Route::Store { category: category.slug().to_string() },
                                    class: "hover:text-primary",
                                    "{category.label()} Laptops"
                                }
                            }
                        }
                    }
                }
                div {
                    h4 { class: "font-semibold mb-3", "Impact" }
                    ul { class: "space-y-2 text-sm opacity-80",
                        li {
                            Link { to: Route::Impact {}, class: "hover:text-primary", "Impact Map" }
                        }
                        li { "Carbon-neutral shipping" }
                        li { "Certified refurbishment" }
                    }
                }
            }
            div { class: "border-t border-background/10 py-4 text-center text-xs opacity-60",
                "© 2025 AKKSS Tech. All rights reserved."
            }
        }
    }
}
