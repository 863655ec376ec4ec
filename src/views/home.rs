use crate::data::get_baseline_locations;
use crate::icons::*;
use crate::models::ProductCategory;
use crate::Route;
use akkss_common::{format, impact::aggregate};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let totals = use_hook(|| aggregate(&get_baseline_locations()));

    rsx! {
        section { class: "bg-gradient-to-br from-accent to-background",
            div { class: "max-w-7xl mx-auto px-4 py-20 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center",
                div { class: "space-y-8",
                    div { class: "space-y-4",
                        h1 { class: "text-4xl md:text-6xl font-bold text-foreground leading-tight",
                            "Sustainable"
                            span { class: "text-primary block", "Technology" }
                            "for a Greener Future"
                        }
                        p { class: "text-xl text-muted-foreground max-w-lg",
                            "Every laptop you buy plants a tree. Join our mission to reduce e-waste and create a sustainable digital world."
                        }
                    }

                    div { class: "flex items-center gap-6 p-6 bg-card/60 rounded-2xl backdrop-blur-sm",
                        Leaf { size: 48, class: Some("text-primary".to_string()) }
                        div {
                            div { class: "text-2xl font-bold text-primary", "{format::count(totals.trees)}" }
                            div { class: "text-sm text-muted-foreground", "Trees Planted" }
                        }
                        div { class: "h-8 w-px bg-border" }
                        div {
                            div { class: "text-2xl font-bold text-primary", "{format::count(totals.laptops)}" }
                            div { class: "text-sm text-muted-foreground", "Laptops Sold" }
                        }
                    }

                    div { class: "flex flex-col sm:flex-row gap-4",
                        Link {
                            to: Route::Store { category: ProductCategory::New.slug().to_string() },
                            class: "inline-flex items-center justify-center gap-2 bg-primary text-primary-foreground px-8 py-4 text-lg font-semibold rounded-xl transition-all hover:scale-105 hover:shadow-lg",
                            Laptop { size: 20 }
                            "I want to buy new"
                        }
                        Link {
                            to: Route::Store { category: ProductCategory::Refurbished.slug().to_string() },
                            class: "inline-flex items-center justify-center gap-2 border border-primary text-primary px-8 py-4 text-lg font-semibold rounded-xl transition-all hover:bg-primary hover:text-primary-foreground",
                            Leaf { size: 20 }
                            "I want to buy refurbished"
                        }
                    }

                    p { class: "text-sm text-muted-foreground",
                        "🌱 By choosing refurbished, you save "
                        span { class: "font-semibold text-primary", "300kg CO₂" }
                        " per laptop"
                    }
                }

                div { class: "relative hidden lg:flex items-center justify-center",
                    div { class: "w-full aspect-[4/3] rounded-2xl bg-card shadow-2xl flex items-center justify-center",
                        Laptop { size: 160, class: Some("text-primary/70".to_string()) }
                    }
                    div { class: "absolute -top-4 -right-4 bg-primary text-primary-foreground p-3 rounded-full shadow-lg",
                        Leaf { size: 24 }
                    }
                    Link {
                        to: Route::Impact {},
                        class: "absolute -bottom-4 -left-4 bg-card p-3 rounded-full shadow-lg",
                        MapPin { size: 24, class: Some("text-primary".to_string()) }
                    }
                }
            }
        }

        section { class: "py-20 bg-card",
            div { class: "max-w-7xl mx-auto px-4",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-foreground mb-4", "Why Choose AKKSS Tech?" }
                    p { class: "text-xl text-muted-foreground max-w-3xl mx-auto",
                        "We're not just selling laptops. We're building a sustainable future, one device at a time."
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    Feature {
                        title: "One Laptop, One Tree",
                        body: "For every laptop purchased, we plant a tree in partnership with global reforestation organizations.",
                        icon: rsx! { Leaf { size: 32 } },
                    }
                    Feature {
                        title: "Track Your Impact",
                        body: "See exactly where your tree was planted and track the environmental impact of your purchase.",
                        icon: rsx! { MapPin { size: 32 } },
                    }
                    Feature {
                        title: "Quality Guaranteed",
                        body: "All our laptops, new and refurbished, come with comprehensive warranties and quality assurance.",
                        icon: rsx! { Laptop { size: 32 } },
                    }
                }
            }
        }
    }
}

#[component]
fn Feature(title: &'static str, body: &'static str, icon: Element) -> Element {
    rsx! {
        div { class: "text-center p-8 rounded-2xl bg-accent/50 hover:bg-accent transition-colors duration-300",
            div { class: "bg-primary text-primary-foreground p-4 rounded-full w-16 h-16 mx-auto mb-6 flex items-center justify-center",
                {icon}
            }
            h3 { class: "text-xl font-semibold text-foreground mb-4", "{title}" }
            p { class: "text-muted-foreground", "{body}" }
        }
    }
}
