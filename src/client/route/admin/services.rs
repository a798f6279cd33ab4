use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, Modal, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::service::{CreateServiceDto, ServiceDto, ServiceTypeDto, UpdateServiceDto},
};

fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

#[component]
pub fn AdminServices() -> Element {
    let rows = use_signal(Vec::<ServiceDto>::new);
    let types = use_signal(Vec::<ServiceTypeDto>::new);
    let error = use_signal(|| None::<ApiError>);
    let refetch = use_signal(|| 0u32);
    let mut type_filter = use_signal(|| None::<i32>);

    let mut show_create = use_signal(|| false);
    let mut edit_target = use_signal(|| None::<ServiceDto>);
    let mut delete_target = use_signal(|| None::<ServiceDto>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::service::{get_service_types, get_services};

        let mut rows = rows;
        let mut error = error;
        let future = use_resource(move || async move {
            let _ = refetch();
            get_services(type_filter(), None).await
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

        let mut types = types;
        let type_future = use_resource(|| async { get_service_types().await });
        use_effect(move || {
            if let Some(Ok(data)) = type_future.read_unchecked().as_ref() {
                types.set(data.clone());
            }
        });
    }

    rsx!(
        Title { "Services | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-4",
                div {
                    class: "flex justify-between items-center gap-4",
                    h1 { class: "text-2xl font-bold", "Services" }
                    div {
                        class: "flex gap-2",
                        select {
                            class: "select select-bordered",
                            onchange: move |evt| type_filter.set(evt.value().parse().ok()),
                            option { value: "", "All types" }
                            for service_type in types() {
                                option { value: "{service_type.id}", "{service_type.name}" }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create.set(true),
                            "Add service"
                        }
                    }
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
                                th { "Name" }
                                th { "Type" }
                                th { "Location" }
                                th { class: "text-right", "Price range" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for service in rows() {
                                {
                                    let edit_row = service.clone();
                                    let delete_row = service.clone();
                                    rsx!(tr {
                                        td { "{service.name}" }
                                        td { "{service.service_type_name}" }
                                        td { "{service.location}" }
                                        td {
                                            class: "text-right",
                                            match (service.price_min, service.price_max) {
                                                (Some(min), Some(max)) => rsx!("${min:.0} – ${max:.0}"),
                                                (Some(min), None) => rsx!("from ${min:.0}"),
                                                (None, Some(max)) => rsx!("up to ${max:.0}"),
                                                (None, None) => rsx!("—"),
                                            }
                                        }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm btn-primary",
                                                    onclick: move |_| edit_target.set(Some(edit_row.clone())),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| delete_target.set(Some(delete_row.clone())),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    })
                                }
                            }
                        }
                    }
                }
            }
            CreateServiceModal { show: show_create, types, refetch }
            EditServiceModal { target: edit_target, types, refetch }
            DeleteServiceModal { target: delete_target, refetch }
        }
    )
}

#[component]
fn CreateServiceModal(
    show: Signal<bool>,
    types: Signal<Vec<ServiceTypeDto>>,
    refetch: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut service_type_id = use_signal(|| None::<i32>);
    let mut location = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut price_min = use_signal(String::new);
    let mut price_max = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::service::create_service;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some(service_type_id) = *service_type_id.peek() else {
                return Some(Err(ApiError {
                    status: 400,
                    message: "Pick a service type".to_string(),
                }));
            };

            let payload = CreateServiceDto {
                name: name.peek().clone(),
                service_type_id,
                location: location.peek().clone(),
                description: description.peek().clone(),
                price_min: parse_price(&price_min.peek()),
                price_max: parse_price(&price_max.peek()),
                image: None,
            };

            Some(create_service(payload).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                        name.set(String::new());
                        location.set(String::new());
                        description.set(String::new());
                        price_min.set(String::new());
                        price_max.set(String::new());
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
        title: "Add service",
        prevent_close: saving(),
        div {
            class: "flex flex-col gap-3",
            if let Some(err) = error() {
                div { class: "alert alert-error text-sm", "{err.message}" }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| service_type_id.set(evt.value().parse().ok()),
                option { value: "", "Pick a service type" }
                for service_type in types() {
                    option { value: "{service_type.id}", "{service_type.name}" }
                }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Location",
                value: "{location}",
                oninput: move |evt| location.set(evt.value()),
            }
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            div {
                class: "flex gap-2",
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Min price",
                    value: "{price_min}",
                    oninput: move |evt| price_min.set(evt.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Max price",
                    value: "{price_max}",
                    oninput: move |evt| price_max.set(evt.value()),
                }
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

#[component]
fn EditServiceModal(
    target: Signal<Option<ServiceDto>>,
    types: Signal<Vec<ServiceTypeDto>>,
    refetch: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut service_type_id = use_signal(|| None::<i32>);
    let mut location = use_signal(String::new);
    let mut price_min = use_signal(String::new);
    let mut price_max = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    use_effect(move || {
        if let Some(service) = target() {
            name.set(service.name.clone());
            service_type_id.set(Some(service.service_type_id));
            location.set(service.location.clone());
            price_min.set(
                service
                    .price_min
                    .map(|price| price.to_string())
                    .unwrap_or_default(),
            );
            price_max.set(
                service
                    .price_max
                    .map(|price| price.to_string())
                    .unwrap_or_default(),
            );
            error.set(None);
            show.set(true);
        }
    });
    use_effect(move || {
        if !show() {
            target.set(None);
        }
    });

    #[cfg(feature = "web")]
    {
        use crate::client::api::service::update_service;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some(service) = target.peek().clone() else {
                return None;
            };

            let payload = UpdateServiceDto {
                name: Some(name.peek().clone()),
                service_type_id: *service_type_id.peek(),
                location: Some(location.peek().clone()),
                price_min: parse_price(&price_min.peek()),
                price_max: parse_price(&price_max.peek()),
                ..Default::default()
            };

            Some(update_service(service.id, payload).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                    }
                    Err(err) => error.set(Some(err.clone())),
                }
                saving.set(false);
            }
        });
    }

    rsx!(Modal {
        show,
        title: "Edit service",
        prevent_close: saving(),
        div {
            class: "flex flex-col gap-3",
            if let Some(err) = error() {
                div { class: "alert alert-error text-sm", "{err.message}" }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| service_type_id.set(evt.value().parse().ok()),
                for service_type in types() {
                    option {
                        value: "{service_type.id}",
                        selected: Some(service_type.id) == service_type_id(),
                        "{service_type.name}"
                    }
                }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Location",
                value: "{location}",
                oninput: move |evt| location.set(evt.value()),
            }
            div {
                class: "flex gap-2",
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Min price",
                    value: "{price_min}",
                    oninput: move |evt| price_min.set(evt.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Max price",
                    value: "{price_max}",
                    oninput: move |evt| price_max.set(evt.value()),
                }
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
                    "Save"
                }
            }
        }
    })
}

#[component]
fn DeleteServiceModal(target: Signal<Option<ServiceDto>>, refetch: Signal<u32>) -> Element {
    let mut show = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    use_effect(move || {
        if target().is_some() {
            error.set(None);
            show.set(true);
        }
    });
    use_effect(move || {
        if !show() {
            target.set(None);
        }
    });

    #[cfg(feature = "web")]
    {
        use crate::client::api::service::delete_service;

        let future = use_resource(move || async move {
            if !deleting() {
                return None;
            }
            let Some(service) = target.peek().clone() else {
                return None;
            };
            Some(delete_service(service.id).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                    }
                    Err(err) => error.set(Some(err.clone())),
                }
                deleting.set(false);
            }
        });
    }

    let name = target
        .read()
        .as_ref()
        .map(|service| service.name.clone())
        .unwrap_or_default();

    rsx!(ConfirmationModal {
        show,
        title: "Delete service",
        message: rsx!(
            div {
                if let Some(err) = error() {
                    div { class: "alert alert-error text-sm mb-2", "{err.message}" }
                }
                p { "Delete the service \"{name}\"?" }
            }
        ),
        confirm_text: "Delete",
        confirm_class: "btn-error",
        is_processing: deleting(),
        on_confirm: move |_| deleting.set(true),
    })
}
