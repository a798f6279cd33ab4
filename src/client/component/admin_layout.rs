use dioxus::prelude::*;

use crate::client::{
    component::{Header, LoadingPage, Page, Sidebar},
    router::Route,
    store::session::SessionState,
};

/// Shell for every admin route: header, sidebar, and an access gate that
/// only lets admin sessions through.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_context::<Signal<SessionState>>();

    let fetched = session.read().fetched;
    let is_admin = session.read().is_admin();

    rsx!(div {
        Header {}
        if !fetched {
            LoadingPage {}
        } else if is_admin {
            div {
                class: "flex",
                Sidebar {}
                main {
                    class: "flex-1",
                    Outlet::<Route> {}
                }
            }
        } else {
            Page {
                class: "flex flex-col items-center justify-center gap-4",
                p { "The admin area requires an administrator account." }
                Link {
                    to: Route::Login {},
                    class: "btn btn-primary",
                    "Log in"
                }
            }
        }
    })
}
