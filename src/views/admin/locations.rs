use super::{Editing, FormField};
use crate::components::toast::{use_toast, ToastType};
use crate::components::{Button, ButtonVariant, IconButton, Modal};
use crate::icons::*;
use crate::models::{LocationDraft, RegionGroup};
use crate::state::StoreState;
use akkss_common::format;
use dioxus::prelude::*;
use tracing::info;

#[component]
pub fn LocationManager() -> Element {
    let mut store = use_context::<StoreState>();
    let mut toast = use_toast();
    let mut editing = use_signal(|| None::<Editing>);
    let mut draft = use_signal(LocationDraft::default);

    let locations = store.locations.read().clone();

    let mut save = move || {
        let Some(target) = *editing.peek() else {
            return;
        };
        let result = match target {
            Editing::New => {
                let id = store.locations.peek().iter().map(|l| l.id).max().unwrap_or(0) + 1;
                draft.peek().create(id).map(|record| {
                    info!("Location {} added: {}", record.id, record.name);
                    store.locations.write().push(record);
                })
            }
            Editing::Existing(id) => {
                let mut locations = store.locations.write();
                match locations.iter_mut().find(|l| l.id == id) {
                    Some(slot) => draft.peek().apply(slot.clone()).map(|record| {
                        info!("Location {} updated", record.id);
                        *slot = record;
                    }),
                    None => Ok(()),
                }
            }
        };
        match result {
            Ok(()) => {
                toast.show("Location saved", ToastType::Success);
                editing.set(None);
            }
            Err(e) => toast.show(&e.user_friendly_message(), ToastType::Error),
        }
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-2xl font-bold", "Impact Locations" }
                    p { class: "text-sm text-muted-foreground", "{locations.len()} locations tracked" }
                }
                Button {
                    onclick: move |_| {
                        draft.set(LocationDraft::default());
                        editing.set(Some(Editing::New));
                    },
                    Plus { size: 16 }
                    "Add Location"
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for location in locations {
                    div {
                        key: "{location.id}",
                        class: "bg-card border border-border rounded-2xl p-5",
                        div { class: "flex items-start justify-between mb-3",
                            div {
                                h3 { class: "font-semibold", "{location.name}" }
                                p { class: "text-sm text-muted-foreground flex items-center gap-1",
                                    MapPin { size: 14 }
                                    "{location.city} · {location.region_group.label()}"
                                }
                            }
                            div { class: "flex gap-1",
                                IconButton {
                                    title: "Edit".to_string(),
                                    variant: ButtonVariant::Ghost,
                                    onclick: {
                                        let location = location.clone();
                                        move |_| {
                                            draft.set(LocationDraft::from_record(&location));
                                            editing.set(Some(Editing::Existing(location.id)));
                                        }
                                    },
                                    Pencil { size: 16 }
                                }
                                IconButton {
                                    title: "Delete".to_string(),
                                    variant: ButtonVariant::Danger,
                                    onclick: move |_| {
                                        store.locations.write().retain(|l| l.id != location.id);
                                        info!("Location {} deleted", location.id);
                                        toast.show("Location deleted", ToastType::Info);
                                    },
                                    Trash { size: 16 }
                                }
                            }
                        }
                        div { class: "grid grid-cols-3 gap-2 text-center text-sm",
                            div {
                                div { class: "font-bold text-green-600", "{format::count(location.trees_planted)}" }
                                div { class: "text-xs text-muted-foreground", "Trees" }
                            }
                            div {
                                div { class: "font-bold text-blue-600", "{format::count(location.laptops_sold)}" }
                                div { class: "text-xs text-muted-foreground", "Laptops" }
                            }
                            div {
                                div { class: "font-bold text-purple-600", "{format::tonnes(location.co2_saved)}" }
                                div { class: "text-xs text-muted-foreground", "CO₂" }
                            }
                        }
                    }
                }
            }

            if let Some(target) = editing() {
                Modal {
                    title: target.heading("Location"),
                    subtitle: Some("Coordinates must be valid latitude and longitude".to_string()),
                    onclose: move |_| editing.set(None),
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        FormField {
                            label: "Name",
                            value: draft.read().name.clone(),
                            oninput: move |v| draft.write().name = v,
                        }
                        FormField {
                            label: "City",
                            value: draft.read().city.clone(),
                            oninput: move |v| draft.write().city = v,
                        }
                        label { class: "block md:col-span-2",
                            span { class: "block text-sm font-medium mb-1", "Region" }
                            select {
                                class: "w-full px-3 py-2 border border-border rounded-lg bg-background",
                                onchange: move |e| {
                                    if let Some(region) = RegionGroup::from_label(&e.value()) {
                                        draft.write().region_group = region;
                                    }
                                },
                                for region in RegionGroup::all() {
                                    option {
                                        value: "{region.label()}",
                                        selected: draft.read().region_group == *region,
                                        "{region.label()}"
                                    }
                                }
                            }
                        }
                        FormField {
                            label: "Latitude",
                            input_type: "number",
                            value: draft.read().lat.clone(),
                            oninput: move |v| draft.write().lat = v,
                        }
                        FormField {
                            label: "Longitude",
                            input_type: "number",
                            value: draft.read().lng.clone(),
                            oninput: move |v| draft.write().lng = v,
                        }
                        FormField {
                            label: "Trees Planted",
                            input_type: "number",
                            value: draft.read().trees_planted.clone(),
                            oninput: move |v| draft.write().trees_planted = v,
                        }
                        FormField {
                            label: "Laptops Sold",
                            input_type: "number",
                            value: draft.read().laptops_sold.clone(),
                            oninput: move |v| draft.write().laptops_sold = v,
                        }
                        FormField {
                            label: "CO₂ Saved (tonnes)",
                            input_type: "number",
                            value: draft.read().co2_saved.clone(),
                            oninput: move |v| draft.write().co2_saved = v,
                        }
                    }
                    div { class: "flex justify-end gap-2 mt-6",
                        Button { variant: ButtonVariant::Outline, onclick: move |_| editing.set(None), "Cancel" }
                        Button { onclick: move |_| save(), Check { size: 16 } "Save" }
                    }
                }
            }
        }
    }
}
