use dioxus::prelude::*;

#[component]
fn IconBase(
    size: u32,
    #[props(default)] class: Option<String>,
    #[props(default)] fill: Option<String>,
    #[props(default = 2)] stroke_width: u32,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    let fill = fill.unwrap_or("none".to_string());
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill,
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class,
            {children}
        }
    }
}

#[component]
pub fn Leaf(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z" }
            path { d: "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" }
        }
    }
}

#[component]
pub fn Laptop(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16" }
        }
    }
}

#[component]
pub fn MapPin(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub fn Globe(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" }
            path { d: "M2 12h20" }
        }
    }
}

#[component]
pub fn ShoppingCart(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "8", cy: "21", r: "1" }
            circle { cx: "19", cy: "21", r: "1" }
            path { d: "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" }
        }
    }
}

#[component]
pub fn Menu(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        }
    }
}

#[component]
pub fn X(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M18 6 6 18" }
            path { d: "M6 6l12 12" }
        }
    }
}

#[component]
pub fn Filter(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            polygon { points: "22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" }
        }
    }
}

#[component]
pub fn Zap(size: u32, #[props(default)] class: Option<String>, #[props(default)] fill: Option<String>) -> Element {
    rsx! {
        IconBase { size, class, fill,
            path { d: "M13 2 3 14h9l-1 8 10-12h-9l1-8z" }
        }
    }
}

#[component]
pub fn Search(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn Star(size: u32, #[props(default)] class: Option<String>, #[props(default)] fill: Option<String>) -> Element {
    rsx! {
        IconBase { size, class, fill,
            path { d: "M11.525 2.223a.6.6 0 0 1 .95 0l2.31 3.407a.6.6 0 0 0 .434.24l4.105.442a.6.6 0 0 1 .332 1.02l-3.068 2.77a.6.6 0 0 0-.185.57l.84 4.052a.6.6 0 0 1-.87.632l-3.604-2.033a.6.6 0 0 0-.57 0l-3.604 2.033a.6.6 0 0 1-.87-.632l.84-4.052a.6.6 0 0 0-.185-.57l-3.068-2.77a.6.6 0 0 1 .332-1.02l4.105-.442a.6.6 0 0 0 .434-.24l2.31-3.407Z" }
        }
    }
}

#[component]
pub fn Heart(size: u32, #[props(default)] class: Option<String>, #[props(default)] fill: Option<String>) -> Element {
    rsx! {
        IconBase { size, class, fill,
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        }
    }
}

#[component]
pub fn Plus(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        }
    }
}

#[component]
pub fn Minus(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M5 12h14" }
        }
    }
}

#[component]
pub fn Trash(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M3 6h18" }
            path { d: "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" }
            path { d: "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" }
            line { x1: "10", x2: "10", y1: "11", y2: "17" }
            line { x1: "14", x2: "14", y1: "11", y2: "17" }
        }
    }
}

#[component]
pub fn Pencil(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z" }
            path { d: "m15 5 4 4" }
        }
    }
}

#[component]
pub fn Package(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "m7.5 4.27 9 5.15" }
            path { d: "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" }
            path { d: "m3.3 7 8.7 5 8.7-5" }
            path { d: "M12 22V12" }
        }
    }
}

#[component]
pub fn BarChart(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M3 3v18h18" }
            path { d: "M18 17V9" }
            path { d: "M13 17V5" }
            path { d: "M8 17v-3" }
        }
    }
}

#[component]
pub fn Users(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        }
    }
}

#[component]
pub fn TrendingUp(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        }
    }
}

#[component]
pub fn Truck(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2" }
            path { d: "M15 18H9" }
            path { d: "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14" }
            circle { cx: "17", cy: "18", r: "2" }
            circle { cx: "7", cy: "18", r: "2" }
        }
    }
}

#[component]
pub fn Shield(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
        }
    }
}

#[component]
pub fn Loader(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M12 2v4" }
            path { d: "m16.2 7.8 2.9-2.9" }
            path { d: "M18 12h4" }
            path { d: "m16.2 16.2 2.9 2.9" }
            path { d: "M12 18v4" }
            path { d: "m4.9 19.1 2.9-2.9" }
            path { d: "M2 12h4" }
            path { d: "m4.9 4.9 2.9 2.9" }
        }
    }
}

#[component]
pub fn RefreshCw(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M3 21v-5h5" }
        }
    }
}

#[component]
pub fn ArrowRight(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}

#[component]
pub fn ArrowLeft(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "m12 19-7-7 7-7" }
            path { d: "M19 12H5" }
        }
    }
}

#[component]
pub fn Check(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}

#[component]
pub fn Info(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        }
    }
}

#[component]
pub fn CircleCheck(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

#[component]
pub fn CircleAlert(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        }
    }
}
