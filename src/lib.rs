#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod layouts;
pub mod models;
pub mod services;
pub mod state;
pub mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use components::toast::ToastProvider;
use layouts::MainLayout;
use state::StoreStateProvider;
use views::{admin::Admin, cart::CartPage, home::Home, impact::Impact, store::Store};

pub const WINDOW_WIDTH: f64 = 1280.0;
pub const WINDOW_HEIGHT: f64 = 860.0;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/impact")]
        Impact {},
        #[route("/store?:category")]
        Store { category: String },
        #[route("/cart")]
        CartPage {},
        #[route("/admin")]
        Admin {},
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Impact {} => "Impact Map",
            Route::Store { .. } => "Store",
            Route::CartPage {} => "Cart",
            Route::Admin {} => "Admin",
        }
    }
}

pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        ToastProvider {
            StoreStateProvider { Router::<Route> {} }
        }
    }
}

pub fn run_app() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "akkss=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::config();
    tracing::info!(
        "Starting AKKSS Tech (map centre {:?}, refresh delay {:?})",
        cfg.map_center,
        cfg.refresh_delay
    );

    let window = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("AKKSS Tech")
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(true),
        )
        .with_menu(None)
        .with_resource_directory(".");

    LaunchBuilder::new().with_cfg(window).launch(App);
}
