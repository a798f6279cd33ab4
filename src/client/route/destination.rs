use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        store::session::SessionState,
    },
    model::{
        destination::DestinationDto, event::EventDto, favorite::FavoriteDto,
        gallery::GalleryImageDto, service::ServiceDto,
    },
};

/// Renders markdown to HTML for the long-form description.
fn render_markdown(source: &str) -> String {
    let parser = pulldown_cmark::Parser::new(source);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

#[component]
pub fn DestinationDetail(slug: String) -> Element {
    let destination = use_signal(|| None::<DestinationDto>);
    let error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::destination::get_destination_by_slug;

        let mut destination = destination;
        let mut error = error;
        let fetch_slug = slug.clone();
        let future = use_resource(move || {
            let slug = fetch_slug.clone();
            async move { get_destination_by_slug(&slug).await }
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        destination.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        destination.set(None);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    rsx! {
        if let Some(destination) = destination() {
            Title { "{destination.name} | {SITE_NAME}" }
            DestinationBody { destination }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn DestinationBody(destination: DestinationDto) -> Element {
    let description_html = render_markdown(&destination.description);
    let destination_id = destination.id;

    rsx!(Page {
        if let Some(hero) = &destination.hero_image {
            div {
                class: "h-72 -mt-4 -mx-4 mb-6 overflow-hidden",
                img {
                    class: "w-full h-full object-cover",
                    src: "/uploads/{hero}",
                    alt: "{destination.name}",
                }
            }
        }
        div {
            class: "max-w-4xl mx-auto space-y-8",
            div {
                class: "flex items-start justify-between gap-4",
                div {
                    h1 { class: "text-3xl font-bold", "{destination.name}" }
                    p { class: "text-sm uppercase opacity-60", "{destination.category_name}" }
                    if let (Some(lat), Some(lon)) = (destination.latitude, destination.longitude) {
                        p { class: "text-xs opacity-60", "{lat:.4}, {lon:.4}" }
                    }
                }
                FavoriteButton { destination_id }
            }
            p { class: "text-lg opacity-80", "{destination.summary}" }
            div {
                class: "prose max-w-none",
                dangerous_inner_html: "{description_html}",
            }
            Gallery { destination_id }
            LinkedServices { destination_id }
            UpcomingEvents { destination_id }
        }
    })
}

/// Heart toggle wired to the favorites API; hidden for anonymous visitors.
#[component]
fn FavoriteButton(destination_id: i32) -> Element {
    let session = use_context::<Signal<SessionState>>();
    let favorite = use_signal(|| None::<FavoriteDto>);
    let mut toggling = use_signal(|| false);

    let user_id = session.read().user_id();

    #[cfg(feature = "web")]
    {
        use crate::client::api::favorite::{create_favorite, delete_favorite, get_favorites_by_user};

        let mut favorite = favorite;

        // Resolve the current state from the user's favorites.
        let existing_future = use_resource(move || async move {
            match user_id {
                Some(user_id) => get_favorites_by_user(user_id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        });
        use_effect(move || {
            if let Some(favorites) = existing_future.read_unchecked().as_ref() {
                favorite.set(
                    favorites
                        .iter()
                        .find(|row| row.destination_id == destination_id)
                        .cloned(),
                );
            }
        });

        let toggle_future = use_resource(move || async move {
            if !toggling() {
                return None;
            }
            let Some(user_id) = user_id else {
                return None;
            };

            match favorite.peek().clone() {
                Some(existing) => Some(delete_favorite(existing.id).await.map(|_| None)),
                None => Some(create_favorite(user_id, destination_id).await.map(Some)),
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = toggle_future.read_unchecked().as_ref() {
                if let Ok(state) = result {
                    favorite.set(state.clone());
                }
                toggling.set(false);
            }
        });
    }

    if user_id.is_none() {
        return rsx!();
    }

    rsx!(button {
        class: if favorite.read().is_some() { "btn btn-primary" } else { "btn btn-outline" },
        disabled: toggling(),
        onclick: move |_| toggling.set(true),
        if favorite.read().is_some() { "♥ Saved" } else { "♡ Save" }
    })
}

#[component]
fn Gallery(destination_id: i32) -> Element {
    let images = use_signal(Vec::<GalleryImageDto>::new);

    #[cfg(feature = "web")]
    {
        use crate::client::api::gallery::get_gallery_by_destination;

        let mut images = images;
        let future =
            use_resource(move || async move { get_gallery_by_destination(destination_id).await });
        use_effect(move || {
            if let Some(Ok(data)) = future.read_unchecked().as_ref() {
                images.set(data.clone());
            }
        });
    }

    rsx! {
        if !images.read().is_empty() {
            section {
                h2 { class: "text-xl font-bold mb-3", "Gallery" }
                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-2",
                    for image in images() {
                        img {
                            class: "rounded-box h-32 w-full object-cover",
                            src: "/uploads/{image.image}",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LinkedServices(destination_id: i32) -> Element {
    let services = use_signal(Vec::<ServiceDto>::new);

    #[cfg(feature = "web")]
    {
        use crate::client::api::destination::get_destination_services;

        let mut services = services;
        let future =
            use_resource(move || async move { get_destination_services(destination_id).await });
        use_effect(move || {
            if let Some(Ok(data)) = future.read_unchecked().as_ref() {
                services.set(data.clone());
            }
        });
    }

    rsx! {
        if !services.read().is_empty() {
            section {
                h2 { class: "text-xl font-bold mb-3", "Services" }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for service in services() {
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                h3 { class: "card-title text-base", "{service.name}" }
                                p { class: "text-xs uppercase opacity-60", "{service.service_type_name}" }
                                p { class: "text-sm opacity-70", "{service.location}" }
                                if let (Some(min), Some(max)) = (service.price_min, service.price_max) {
                                    p { class: "text-sm", "${min:.0} – ${max:.0}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingEvents(destination_id: i32) -> Element {
    let events = use_signal(Vec::<EventDto>::new);

    #[cfg(feature = "web")]
    {
        use crate::client::api::event::get_events;

        let mut events = events;
        let future = use_resource(move || async move { get_events(Some(destination_id)).await });
        use_effect(move || {
            if let Some(Ok(data)) = future.read_unchecked().as_ref() {
                events.set(data.clone());
            }
        });
    }

    rsx! {
        if !events.read().is_empty() {
            section {
                h2 { class: "text-xl font-bold mb-3", "Events" }
                div {
                    class: "space-y-2",
                    for event in events() {
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body py-3 flex-row items-center gap-4",
                                p { class: "font-mono text-sm", "{event.date}" }
                                div {
                                    class: "flex-1",
                                    p { class: "font-bold", "{event.title}" }
                                    p { class: "text-sm opacity-70", "{event.location}" }
                                }
                                FollowButton { event_id: event.id }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Follow toggle for one event; hidden for anonymous visitors. Unfollowing
/// needs the follow row id, so the current state is resolved from the
/// event's follower rows.
#[component]
fn FollowButton(event_id: i32) -> Element {
    let session = use_context::<Signal<SessionState>>();
    let follow_id = use_signal(|| None::<i32>);
    let mut toggling = use_signal(|| false);

    let user_id = session.read().user_id();

    #[cfg(feature = "web")]
    {
        use crate::client::api::event::{follow_event, get_event_followers, unfollow_event};

        let mut follow_id = follow_id;

        let existing_future = use_resource(move || async move {
            get_event_followers(event_id).await.unwrap_or_default()
        });
        use_effect(move || {
            if let Some(followers) = existing_future.read_unchecked().as_ref() {
                follow_id.set(
                    followers
                        .iter()
                        .find(|row| Some(row.user_id) == user_id)
                        .map(|row| row.id),
                );
            }
        });

        let toggle_future = use_resource(move || async move {
            if !toggling() {
                return None;
            }
            let Some(user_id) = user_id else {
                return None;
            };

            match *follow_id.peek() {
                Some(id) => Some(unfollow_event(id).await.map(|_| None)),
                None => Some(follow_event(user_id, event_id).await.map(|row| Some(row.id))),
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = toggle_future.read_unchecked().as_ref() {
                if let Ok(state) = result {
                    follow_id.set(*state);
                }
                toggling.set(false);
            }
        });
    }

    if user_id.is_none() {
        return rsx!();
    }

    rsx!(button {
        class: if follow_id.read().is_some() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
        disabled: toggling(),
        onclick: move |_| toggling.set(true),
        if follow_id.read().is_some() { "Following" } else { "Follow" }
    })
}
