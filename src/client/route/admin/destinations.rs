use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, Modal, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::{
        category::CategoryDto,
        destination::{CreateDestinationDto, DestinationDto, UpdateDestinationDto},
    },
};

#[component]
pub fn AdminDestinations() -> Element {
    let rows = use_signal(Vec::<DestinationDto>::new);
    let categories = use_signal(Vec::<CategoryDto>::new);
    let error = use_signal(|| None::<ApiError>);
    let refetch = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    let mut edit_target = use_signal(|| None::<DestinationDto>);
    let mut delete_target = use_signal(|| None::<DestinationDto>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::{category::get_categories, destination::get_destinations};

        let mut rows = rows;
        let mut error = error;
        let future = use_resource(move || async move {
            let _ = refetch();
            get_destinations(None, None, None).await
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

        let mut categories = categories;
        let category_future = use_resource(|| async { get_categories().await });
        use_effect(move || {
            if let Some(Ok(data)) = category_future.read_unchecked().as_ref() {
                categories.set(data.clone());
            }
        });
    }

    rsx!(
        Title { "Destinations | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Destinations" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        "Add destination"
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
                                th { "Slug" }
                                th { "Category" }
                                th { class: "text-center", "Featured" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for destination in rows() {
                                {
                                    let edit_row = destination.clone();
                                    let delete_row = destination.clone();
                                    rsx!(tr {
                                        td { "{destination.name}" }
                                        td { class: "font-mono text-sm", "{destination.slug}" }
                                        td { "{destination.category_name}" }
                                        td {
                                            class: "text-center",
                                            if destination.featured { "★" } else { "—" }
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
            CreateDestinationModal { show: show_create, categories, refetch }
            EditDestinationModal { target: edit_target, categories, refetch }
            DeleteDestinationModal { target: delete_target, refetch }
        }
    )
}

#[component]
fn CreateDestinationModal(
    show: Signal<bool>,
    categories: Signal<Vec<CategoryDto>>,
    refetch: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut category_id = use_signal(|| None::<i32>);
    let mut summary = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut main_image = use_signal(String::new);
    let mut featured = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::destination::create_destination;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some(category_id) = *category_id.peek() else {
                return Some(Err(ApiError {
                    status: 400,
                    message: "Pick a category".to_string(),
                }));
            };

            let payload = CreateDestinationDto {
                name: name.peek().clone(),
                category_id,
                summary: summary.peek().clone(),
                description: description.peek().clone(),
                main_image: Some(main_image.peek().clone())
                    .filter(|image| !image.is_empty()),
                hero_image: None,
                featured: *featured.peek(),
                latitude: None,
                longitude: None,
            };

            Some(create_destination(payload).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                        name.set(String::new());
                        summary.set(String::new());
                        description.set(String::new());
                        main_image.set(String::new());
                        featured.set(false);
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
        title: "Add destination",
        prevent_close: saving(),
        div {
            class: "flex flex-col gap-3",
            if let Some(err) = error() {
                div { class: "alert alert-error text-sm", "{err.message}" }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Name (the slug is derived from it)",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| category_id.set(evt.value().parse().ok()),
                option { value: "", "Pick a category" }
                for category in categories() {
                    option { value: "{category.id}", "{category.name}" }
                }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Summary",
                value: "{summary}",
                oninput: move |evt| summary.set(evt.value()),
            }
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Description (markdown)",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Main image filename",
                value: "{main_image}",
                oninput: move |evt| main_image.set(evt.value()),
            }
            label {
                class: "label cursor-pointer justify-start gap-2",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: featured(),
                    onchange: move |evt| featured.set(evt.checked()),
                }
                span { "Featured" }
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
fn EditDestinationModal(
    target: Signal<Option<DestinationDto>>,
    categories: Signal<Vec<CategoryDto>>,
    refetch: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut category_id = use_signal(|| None::<i32>);
    let mut summary = use_signal(String::new);
    let mut featured = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    use_effect(move || {
        if let Some(destination) = target() {
            name.set(destination.name.clone());
            category_id.set(Some(destination.category_id));
            summary.set(destination.summary.clone());
            featured.set(destination.featured);
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
        use crate::client::api::destination::update_destination;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some(destination) = target.peek().clone() else {
                return None;
            };

            let payload = UpdateDestinationDto {
                name: Some(name.peek().clone()),
                category_id: *category_id.peek(),
                summary: Some(summary.peek().clone()),
                featured: Some(*featured.peek()),
                ..Default::default()
            };

            Some(update_destination(destination.id, payload).await)
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
        title: "Edit destination",
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
                onchange: move |evt| category_id.set(evt.value().parse().ok()),
                for category in categories() {
                    option {
                        value: "{category.id}",
                        selected: Some(category.id) == category_id(),
                        "{category.name}"
                    }
                }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Summary",
                value: "{summary}",
                oninput: move |evt| summary.set(evt.value()),
            }
            label {
                class: "label cursor-pointer justify-start gap-2",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: featured(),
                    onchange: move |evt| featured.set(evt.checked()),
                }
                span { "Featured" }
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
fn DeleteDestinationModal(target: Signal<Option<DestinationDto>>, refetch: Signal<u32>) -> Element {
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
        use crate::client::api::destination::delete_destination;

        let future = use_resource(move || async move {
            if !deleting() {
                return None;
            }
            let Some(destination) = target.peek().clone() else {
                return None;
            };
            Some(delete_destination(destination.id).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                    }
                    // A featured destination comes back as a conflict; the
                    // message tells the operator to unfeature it first.
                    Err(err) => error.set(Some(err.clone())),
                }
                deleting.set(false);
            }
        });
    }

    let name = target
        .read()
        .as_ref()
        .map(|destination| destination.name.clone())
        .unwrap_or_default();

    rsx!(ConfirmationModal {
        show,
        title: "Delete destination",
        message: rsx!(
            div {
                if let Some(err) = error() {
                    div { class: "alert alert-error text-sm mb-2", "{err.message}" }
                }
                p { "Delete \"{name}\"? Its gallery, events and links go with it." }
            }
        ),
        confirm_text: "Delete",
        confirm_class: "btn-error",
        is_processing: deleting(),
        on_confirm: move |_| deleting.set(true),
    })
}
