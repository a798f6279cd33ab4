use dioxus::prelude::*;

use crate::client::{
    component::Page, constant::SITE_NAME, model::error::ApiError, router::Route,
    store::session::SessionState,
};

#[component]
pub fn Login() -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::auth::login;

        let future = use_resource(move || async move {
            if submitting() {
                Some(login(email(), password()).await)
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(user) => {
                        let is_admin = user.role == crate::model::user::RoleDto::Admin;
                        session.set(SessionState {
                            user: Some(user.clone()),
                            fetched: true,
                        });
                        submitting.set(false);
                        if is_admin {
                            navigator.push(Route::AdminDashboard {});
                        } else {
                            navigator.push(Route::Home {});
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.clone()));
                        submitting.set(false);
                    }
                }
            }
        });
    }

    rsx!(
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            form {
                class: "card bg-base-200 w-full max-w-sm",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    error.set(None);
                    submitting.set(true);
                },
                div {
                    class: "card-body gap-4",
                    h1 { class: "card-title", "Log in" }
                    if let Some(err) = error() {
                        div { class: "alert alert-error text-sm", "{err.message}" }
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Log in"
                    }
                }
            }
        }
    )
}
