use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, Modal, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::{
        destination::DestinationDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn AdminEvents() -> Element {
    let rows = use_signal(Vec::<EventDto>::new);
    let destinations = use_signal(Vec::<DestinationDto>::new);
    let error = use_signal(|| None::<ApiError>);
    let refetch = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    let mut edit_target = use_signal(|| None::<EventDto>);
    let mut delete_target = use_signal(|| None::<EventDto>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::{destination::get_destinations, event::get_events};

        let mut rows = rows;
        let mut error = error;
        let future = use_resource(move || async move {
            let _ = refetch();
            get_events(None).await
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

        let mut destinations = destinations;
        let destination_future =
            use_resource(|| async { get_destinations(None, None, None).await });
        use_effect(move || {
            if let Some(Ok(data)) = destination_future.read_unchecked().as_ref() {
                destinations.set(data.clone());
            }
        });
    }

    rsx!(
        Title { "Events | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Events" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        "Add event"
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
                                th { "Date" }
                                th { "Title" }
                                th { "Destination" }
                                th { "Location" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for event in rows() {
                                {
                                    let edit_row = event.clone();
                                    let delete_row = event.clone();
                                    rsx!(tr {
                                        td { class: "font-mono text-sm", "{event.date}" }
                                        td { "{event.title}" }
                                        td { "{event.destination_name}" }
                                        td { "{event.location}" }
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
            CreateEventModal { show: show_create, destinations, refetch }
            EditEventModal { target: edit_target, refetch }
            DeleteEventModal { target: delete_target, refetch }
        }
    )
}

#[component]
fn CreateEventModal(
    show: Signal<bool>,
    destinations: Signal<Vec<DestinationDto>>,
    refetch: Signal<u32>,
) -> Element {
    let mut destination_id = use_signal(|| None::<i32>);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::event::create_event;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some(destination_id) = *destination_id.peek() else {
                return Some(Err(ApiError {
                    status: 400,
                    message: "Pick a destination".to_string(),
                }));
            };
            let Some(date) = parse_date(&date.peek()) else {
                return Some(Err(ApiError {
                    status: 400,
                    message: "Date must be YYYY-MM-DD".to_string(),
                }));
            };

            let payload = CreateEventDto {
                destination_id,
                title: title.peek().clone(),
                description: description.peek().clone(),
                date,
                location: location.peek().clone(),
                image: None,
            };

            Some(create_event(payload).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                        title.set(String::new());
                        description.set(String::new());
                        date.set(String::new());
                        location.set(String::new());
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
        title: "Add event",
        prevent_close: saving(),
        div {
            class: "flex flex-col gap-3",
            if let Some(err) = error() {
                div { class: "alert alert-error text-sm", "{err.message}" }
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| destination_id.set(evt.value().parse().ok()),
                option { value: "", "Pick a destination" }
                for destination in destinations() {
                    option { value: "{destination.id}", "{destination.name}" }
                }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "date",
                value: "{date}",
                oninput: move |evt| date.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Location",
                value: "{location}",
                oninput: move |evt| location.set(evt.value()),
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
fn EditEventModal(target: Signal<Option<EventDto>>, refetch: Signal<u32>) -> Element {
    let mut show = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    use_effect(move || {
        if let Some(event) = target() {
            title.set(event.title.clone());
            date.set(event.date.format("%Y-%m-%d").to_string());
            location.set(event.location.clone());
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
        use crate::client::api::event::update_event;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some(event) = target.peek().clone() else {
                return None;
            };

            let payload = UpdateEventDto {
                title: Some(title.peek().clone()),
                date: parse_date(&date.peek()),
                location: Some(location.peek().clone()),
                ..Default::default()
            };

            Some(update_event(event.id, payload).await)
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
        title: "Edit event",
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
                r#type: "date",
                value: "{date}",
                oninput: move |evt| date.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Location",
                value: "{location}",
                oninput: move |evt| location.set(evt.value()),
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
fn DeleteEventModal(target: Signal<Option<EventDto>>, refetch: Signal<u32>) -> Element {
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
        use crate::client::api::event::delete_event;

        let future = use_resource(move || async move {
            if !deleting() {
                return None;
            }
            let Some(event) = target.peek().clone() else {
                return None;
            };
            Some(delete_event(event.id).await)
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

    let title = target
        .read()
        .as_ref()
        .map(|event| event.title.clone())
        .unwrap_or_default();

    rsx!(ConfirmationModal {
        show,
        title: "Delete event",
        message: rsx!(
            div {
                if let Some(err) = error() {
                    div { class: "alert alert-error text-sm mb-2", "{err.message}" }
                }
                p { "Delete the event \"{title}\"?" }
            }
        ),
        confirm_text: "Delete",
        confirm_class: "btn-error",
        is_processing: deleting(),
        on_confirm: move |_| deleting.set(true),
    })
}
