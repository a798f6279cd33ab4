use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, Modal, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
};

#[component]
pub fn AdminCategories() -> Element {
    let rows = use_signal(Vec::<CategoryDto>::new);
    let error = use_signal(|| None::<ApiError>);
    let refetch = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    let mut edit_target = use_signal(|| None::<CategoryDto>);
    let mut delete_target = use_signal(|| None::<CategoryDto>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::category::get_categories;

        let mut rows = rows;
        let mut error = error;
        let future = use_resource(move || async move {
            let _ = refetch();
            get_categories().await
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
    }

    rsx!(
        Title { "Categories | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Categories" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        "Add category"
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
                                th { "Description" }
                                th { "Image" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for category in rows() {
                                {
                                    let edit_row = category.clone();
                                    let delete_row = category.clone();
                                    rsx!(tr {
                                        td { "{category.name}" }
                                        td { class: "max-w-md truncate", "{category.description}" }
                                        td { {category.image.clone().unwrap_or_else(|| "—".to_string())} }
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
            CreateCategoryModal { show: show_create, refetch }
            EditCategoryModal { target: edit_target, refetch }
            DeleteCategoryModal { target: delete_target, refetch }
        }
    )
}

#[component]
fn CreateCategoryModal(show: Signal<bool>, refetch: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::category::create_category;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let image = Some(image.peek().clone()).filter(|image| !image.is_empty());
            Some(
                create_category(CreateCategoryDto {
                    name: name.peek().clone(),
                    description: description.peek().clone(),
                    image,
                })
                .await,
            )
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                        name.set(String::new());
                        description.set(String::new());
                        image.set(String::new());
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
        title: "Add category",
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
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Image filename (from an upload)",
                value: "{image}",
                oninput: move |evt| image.set(evt.value()),
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
fn EditCategoryModal(target: Signal<Option<CategoryDto>>, refetch: Signal<u32>) -> Element {
    let mut show = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    // Seed the form whenever a row is selected.
    use_effect(move || {
        if let Some(category) = target() {
            name.set(category.name.clone());
            description.set(category.description.clone());
            image.set(category.image.clone().unwrap_or_default());
            error.set(None);
            show.set(true);
        }
    });

    // Closing the modal clears the selection.
    use_effect(move || {
        if !show() {
            target.set(None);
        }
    });

    #[cfg(feature = "web")]
    {
        use crate::client::api::category::update_category;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some(category) = target.peek().clone() else {
                return None;
            };

            // Explicit null clears the image; an untouched empty field also
            // clears — the form shows the stored value, so emptying it is a
            // deliberate clear.
            let image = image.peek().clone();
            let payload = UpdateCategoryDto {
                name: Some(name.peek().clone()),
                description: Some(description.peek().clone()),
                image: Some(Some(image).filter(|image| !image.is_empty())),
            };

            Some(update_category(category.id, payload).await)
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
        title: "Edit category",
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
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Image filename (empty to clear)",
                value: "{image}",
                oninput: move |evt| image.set(evt.value()),
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
fn DeleteCategoryModal(target: Signal<Option<CategoryDto>>, refetch: Signal<u32>) -> Element {
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
        use crate::client::api::category::delete_category;

        let future = use_resource(move || async move {
            if !deleting() {
                return None;
            }
            let Some(category) = target.peek().clone() else {
                return None;
            };
            Some(delete_category(category.id).await)
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
        .map(|category| category.name.clone())
        .unwrap_or_default();

    rsx!(ConfirmationModal {
        show,
        title: "Delete category",
        message: rsx!(
            div {
                if let Some(err) = error() {
                    div { class: "alert alert-error text-sm mb-2", "{err.message}" }
                }
                p { "Delete the category \"{name}\"? Destinations must be moved out of it first." }
            }
        ),
        confirm_text: "Delete",
        confirm_class: "btn-error",
        is_processing: deleting(),
        on_confirm: move |_| deleting.set(true),
    })
}
