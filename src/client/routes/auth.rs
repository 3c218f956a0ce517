use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use validator::Validate;
use voyager::model::user::{LoginDto, RegisterDto};

use crate::client::{components::Page, router::Route, store::user::UserState};

#[component]
fn FormError(error: Option<String>) -> Element {
    rsx!(
        if let Some(error) = error {
            div { class: "alert alert-error", role: "alert",
                span { "{error}" }
            }
        }
    )
}

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let navigator = use_navigator();

    let mut form = use_signal(LoginDto::default);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let payload = form.read().clone();
            if let Err(errors) = payload.validate() {
                error.set(Some(errors.to_string()));
                return;
            }

            let csrf_token = user_state.read().csrf_token().to_string();
            submitting.set(true);

            spawn(async move {
                match crate::client::util::api::login(&csrf_token, &payload).await {
                    Ok(user) => {
                        user_state.write().user = Some(user);
                        navigator.push(Route::Dashboard {});
                    }
                    Err(err) => error.set(Some(err)),
                }
                submitting.set(false);
            });
        }
    };

    rsx!(
        Title { "Login | Voyager" }
        Page { class: "flex justify-center",
            form { class: "card bg-base-100 shadow-sm w-full max-w-96 mt-12",
                onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Login" }
                    FormError { error: error() }
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Username",
                        autocomplete: "username",
                        value: "{form.read().username}",
                        oninput: move |evt| form.write().username = evt.value(),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: "{form.read().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "Login"
                    }
                    p { class: "text-sm",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    )
}

#[component]
pub fn Register() -> Element {
    #[allow(unused_variables)]
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let navigator = use_navigator();

    let mut form = use_signal(RegisterDto::default);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let payload = form.read().clone();
            if let Err(errors) = payload.validate() {
                error.set(Some(errors.to_string()));
                return;
            }

            let csrf_token = user_state.read().csrf_token().to_string();
            submitting.set(true);

            spawn(async move {
                match crate::client::util::api::register(&csrf_token, &payload).await {
                    Ok(_) => {
                        navigator.push(Route::Login {});
                    }
                    Err(err) => error.set(Some(err)),
                }
                submitting.set(false);
            });
        }
    };

    rsx!(
        Title { "Register | Voyager" }
        Page { class: "flex justify-center",
            form { class: "card bg-base-100 shadow-sm w-full max-w-96 mt-12",
                onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Create an account" }
                    FormError { error: error() }
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Username (3-50 characters)",
                        autocomplete: "username",
                        value: "{form.read().username}",
                        oninput: move |evt| form.write().username = evt.value(),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password (at least 6 characters)",
                        autocomplete: "new-password",
                        value: "{form.read().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "Register"
                    }
                    p { class: "text-sm",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Login" }
                    }
                }
            }
        }
    )
}
