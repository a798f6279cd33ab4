use dioxus::prelude::*;

use crate::{
    client::{
        component::{Modal, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::banner::{BannerDto, CreateBannerDto, UpdateBannerDto},
};

#[component]
pub fn AdminBanners() -> Element {
    let rows = use_signal(Vec::<BannerDto>::new);
    let error = use_signal(|| None::<ApiError>);
    let refetch = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    // (banner id, desired active state); DELETE deactivates, PUT restores.
    let mut toggle_target = use_signal(|| None::<(i32, bool)>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::banner::{deactivate_banner, get_banners, update_banner};

        let mut rows = rows;
        let mut error = error;
        let future = use_resource(move || async move {
            let _ = refetch();
            get_banners(false).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        rows.set(data.clone());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.clone())),
                }
            }
        });

        let mut refetch = refetch;
        let toggle_future = use_resource(move || async move {
            let Some((id, activate)) = toggle_target() else {
                return None;
            };
            if activate {
                Some(
                    update_banner(
                        id,
                        UpdateBannerDto {
                            active: Some(true),
                            ..Default::default()
                        },
                    )
                    .await
                    .map(|_| ()),
                )
            } else {
                Some(deactivate_banner(id).await)
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = toggle_future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    error.set(Some(err.clone()));
                }
                toggle_target.set(None);
                refetch.set(refetch() + 1);
            }
        });
    }

    rsx!(
        Title { "Banners | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Banners" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        "Add banner"
                    }
                }
                p {
                    class: "text-sm opacity-70",
                    "Deleting a banner only deactivates it; reactivate it at any time."
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err.message}" }
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Order" }
                                th { "Title" }
                                th { "Image" }
                                th { class: "text-center", "Active" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for banner in rows() {
                                tr {
                                    class: if banner.active { "" } else { "opacity-50" },
                                    td { "{banner.sort_order}" }
                                    td { "{banner.title}" }
                                    td { class: "font-mono text-sm", "{banner.image}" }
                                    td {
                                        class: "text-center",
                                        if banner.active { "yes" } else { "no" }
                                    }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            if banner.active {
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| toggle_target.set(Some((banner.id, false))),
                                                    "Deactivate"
                                                }
                                            } else {
                                                button {
                                                    class: "btn btn-sm btn-primary",
                                                    onclick: move |_| toggle_target.set(Some((banner.id, true))),
                                                    "Reactivate"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            CreateBannerModal { show: show_create, refetch }
        }
    )
}

#[component]
fn CreateBannerModal(show: Signal<bool>, refetch: Signal<u32>) -> Element {
    let mut title = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut sort_order = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::banner::create_banner;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }

            let payload = CreateBannerDto {
                image: image.peek().clone(),
                title: title.peek().clone(),
                sort_order: sort_order.peek().trim().parse().unwrap_or(0),
            };

            Some(create_banner(payload).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                        title.set(String::new());
                        image.set(String::new());
                        sort_order.set(String::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.clone())),
                }
                saving.set(false);
            }
        });
    }

    rsx!(Modal {
        show,
        title: "Add banner",
        prevent_close: saving(),
        div {
            class: "flex flex-col gap-3",
            if let Some(err) = error() {
                div { class: "alert alert-error text-sm", "{err.message}" }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Image filename (from an upload)",
                value: "{image}",
                oninput: move |evt| image.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Sort order (0 first)",
                value: "{sort_order}",
                oninput: move |evt| sort_order.set(evt.value()),
            }
            div {
                class: "modal-action",
                button {
                    class: "btn",
                    disabled: saving(),
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving(),
                    onclick: move |_| saving.set(true),
                    "Create"
                }
            }
        }
    })
}
