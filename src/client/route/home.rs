use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, router::Route},
    model::{banner::BannerDto, category::CategoryDto, destination::DestinationDto},
};

#[component]
pub fn Home() -> Element {
    let banners = use_signal(Vec::<BannerDto>::new);
    let categories = use_signal(Vec::<CategoryDto>::new);
    let featured = use_signal(Vec::<DestinationDto>::new);

    #[cfg(feature = "web")]
    {
        use crate::client::api::{
            banner::get_banners, category::get_categories, destination::get_destinations,
        };

        let mut banners = banners;
        let banner_future = use_resource(|| async { get_banners(true).await });
        use_effect(move || {
            if let Some(Ok(data)) = banner_future.read_unchecked().as_ref() {
                banners.set(data.clone());
            }
        });

        let mut categories = categories;
        let category_future = use_resource(|| async { get_categories().await });
        use_effect(move || {
            if let Some(Ok(data)) = category_future.read_unchecked().as_ref() {
                categories.set(data.clone());
            }
        });

        let mut featured = featured;
        let featured_future =
            use_resource(|| async { get_destinations(None, Some(true), None).await });
        use_effect(move || {
            if let Some(Ok(data)) = featured_future.read_unchecked().as_ref() {
                featured.set(data.clone());
            }
        });
    }

    rsx!(
        Title { "{SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-10",
                BannerCarousel { banners }

                section {
                    h2 { class: "text-2xl font-bold mb-4", "Browse by category" }
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        for category in categories() {
                            Link {
                                to: Route::Search { q: category.name.clone() },
                                div {
                                    class: "card bg-base-200 hover:bg-base-300",
                                    div {
                                        class: "card-body",
                                        h3 { class: "card-title text-base", "{category.name}" }
                                        p { class: "text-sm opacity-70 line-clamp-2", "{category.description}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    h2 { class: "text-2xl font-bold mb-4", "Featured destinations" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        for destination in featured() {
                            DestinationCard { destination }
                        }
                    }
                }
            }
        }
    )
}

/// Rotating banner strip. Advances on a timer and on manual dot clicks.
#[component]
fn BannerCarousel(banners: Signal<Vec<BannerDto>>) -> Element {
    let mut index = use_signal(|| 0usize);

    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(6_000).await;
            let count = banners.read().len();
            if count > 0 {
                index.set((index() + 1) % count);
            }
        }
    });

    let current = banners.read().get(index()).cloned();

    rsx!(
        if let Some(banner) = current {
            div {
                class: "relative h-64 rounded-box overflow-hidden",
                img {
                    class: "w-full h-full object-cover",
                    src: "/uploads/{banner.image}",
                    alt: "{banner.title}",
                }
                div {
                    class: "absolute bottom-0 w-full p-4 bg-gradient-to-t from-black/70 to-transparent",
                    p { class: "text-white text-xl font-bold", "{banner.title}" }
                }
                div {
                    class: "absolute bottom-2 right-4 flex gap-1",
                    for dot in 0..banners.read().len() {
                        button {
                            class: if dot == index() { "w-2 h-2 rounded-full bg-white" } else { "w-2 h-2 rounded-full bg-white/40" },
                            onclick: move |_| index.set(dot),
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn DestinationCard(destination: DestinationDto) -> Element {
    rsx!(Link {
        to: Route::DestinationDetail { slug: destination.slug.clone() },
        div {
            class: "card bg-base-200 hover:bg-base-300 overflow-hidden",
            if let Some(image) = &destination.main_image {
                img {
                    class: "h-40 w-full object-cover",
                    src: "/uploads/{image}",
                    alt: "{destination.name}",
                }
            }
            div {
                class: "card-body",
                h3 { class: "card-title text-base", "{destination.name}" }
                p { class: "text-xs uppercase opacity-60", "{destination.category_name}" }
                p { class: "text-sm opacity-70 line-clamp-2", "{destination.summary}" }
            }
        }
    })
}
