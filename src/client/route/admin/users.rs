use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, Modal, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::user::{CreateUserDto, RoleDto, UpdateUserDto, UserDto},
};

#[component]
pub fn AdminUsers() -> Element {
    let rows = use_signal(Vec::<UserDto>::new);
    let error = use_signal(|| None::<ApiError>);
    let refetch = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    // (user, promote-to-admin?) — role changes go through a confirmation.
    let mut role_target = use_signal(|| None::<(UserDto, RoleDto)>);
    let mut delete_target = use_signal(|| None::<UserDto>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::user::get_users;

        let mut rows = rows;
        let mut error = error;
        let future = use_resource(move || async move {
            let _ = refetch();
            get_users().await
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
        Title { "Users | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Users" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        "Add user"
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
                                th { "Email" }
                                th { "Role" }
                                th { "Joined" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for user in rows() {
                                {
                                    let role_row = user.clone();
                                    let delete_row = user.clone();
                                    let other_role = match user.role {
                                        RoleDto::Admin => RoleDto::User,
                                        RoleDto::User => RoleDto::Admin,
                                    };
                                    rsx!(tr {
                                        td { "{user.full_name}" }
                                        td { "{user.email}" }
                                        td {
                                            match user.role {
                                                RoleDto::Admin => rsx!(span { class: "badge badge-primary", "admin" }),
                                                RoleDto::User => rsx!(span { class: "badge", "user" }),
                                            }
                                        }
                                        td { class: "font-mono text-sm", {user.created_at.format("%Y-%m-%d").to_string()} }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| role_target.set(Some((role_row.clone(), other_role))),
                                                    match other_role {
                                                        RoleDto::Admin => "Make admin",
                                                        RoleDto::User => "Make user",
                                                    }
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
            CreateUserModal { show: show_create, refetch }
            ChangeRoleModal { target: role_target, refetch }
            DeleteUserModal { target: delete_target, refetch }
        }
    )
}

#[component]
fn CreateUserModal(show: Signal<bool>, refetch: Signal<u32>) -> Element {
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut admin = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::user::create_user;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }

            let payload = CreateUserDto {
                full_name: full_name.peek().clone(),
                email: email.peek().clone(),
                password: password.peek().clone(),
                role: Some(if *admin.peek() {
                    RoleDto::Admin
                } else {
                    RoleDto::User
                }),
            };

            Some(create_user(payload).await)
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch.set(refetch() + 1);
                        show.set(false);
                        full_name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        admin.set(false);
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
        title: "Add user",
        prevent_close: saving(),
        div {
            class: "flex flex-col gap-3",
            if let Some(err) = error() {
                div { class: "alert alert-error text-sm", "{err.message}" }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Full name",
                value: "{full_name}",
                oninput: move |evt| full_name.set(evt.value()),
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
            label {
                class: "label cursor-pointer justify-start gap-2",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: admin(),
                    onchange: move |evt| admin.set(evt.checked()),
                }
                span { "Administrator" }
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
fn ChangeRoleModal(target: Signal<Option<(UserDto, RoleDto)>>, refetch: Signal<u32>) -> Element {
    let mut show = use_signal(|| false);
    let mut saving = use_signal(|| false);
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
        use crate::client::api::user::update_user;

        let future = use_resource(move || async move {
            if !saving() {
                return None;
            }
            let Some((user, role)) = target.peek().clone() else {
                return None;
            };

            let payload = UpdateUserDto {
                role: Some(role),
                ..Default::default()
            };

            Some(update_user(user.id, payload).await)
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

    let (name, role_label) = target
        .read()
        .as_ref()
        .map(|(user, role)| {
            (
                user.full_name.clone(),
                match role {
                    RoleDto::Admin => "an administrator",
                    RoleDto::User => "a regular user",
                },
            )
        })
        .unwrap_or(("".to_string(), "a regular user"));

    rsx!(ConfirmationModal {
        show,
        title: "Change role",
        message: rsx!(
            div {
                if let Some(err) = error() {
                    div { class: "alert alert-error text-sm mb-2", "{err.message}" }
                }
                p { "Make {name} {role_label}?" }
            }
        ),
        confirm_text: "Change role",
        confirm_class: "btn-primary",
        is_processing: saving(),
        on_confirm: move |_| saving.set(true),
    })
}

#[component]
fn DeleteUserModal(target: Signal<Option<UserDto>>, refetch: Signal<u32>) -> Element {
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
        use crate::client::api::user::delete_user;

        let future = use_resource(move || async move {
            if !deleting() {
                return None;
            }
            let Some(user) = target.peek().clone() else {
                return None;
            };
            Some(delete_user(user.id).await)
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
        .map(|user| user.full_name.clone())
        .unwrap_or_default();

    rsx!(ConfirmationModal {
        show,
        title: "Delete user",
        message: rsx!(
            div {
                if let Some(err) = error() {
                    div { class: "alert alert-error text-sm mb-2", "{err.message}" }
                }
                p { "Delete the account for \"{name}\"? Their favorites and follows go with it." }
            }
        ),
        confirm_text: "Delete",
        confirm_class: "btn-error",
        is_processing: deleting(),
        on_confirm: move |_| deleting.set(true),
    })
}
