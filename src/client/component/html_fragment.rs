//! Dynamic HTML fragment rendering.
//!
//! Static HTML snippets live under `/fragments` on the server and are
//! injected into content-driven views. The loader never fails: any fetch
//! problem resolves to a fallback snippet naming the failed path, so a
//! missing fragment can never blank the page around it.

use dioxus::prelude::*;

/// Fallback markup shown in place of a fragment that could not be loaded.
pub fn fallback_snippet(path: &str) -> String {
    format!(r#"<div class="alert alert-error">Failed to load {path}</div>"#)
}

/// Renders a server-side HTML fragment. Nothing is injected while the
/// fetch is pending.
#[component]
pub fn HtmlFragment(path: String) -> Element {
    let mut html = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::fragment::load_fragment;

        let fetch_path = path.clone();
        let future = use_resource(move || {
            let path = fetch_path.clone();
            async move { load_fragment(&path).await }
        });

        use_effect(move || {
            if let Some(content) = future.read_unchecked().as_ref() {
                html.set(Some(content.clone()));
            }
        });
    }

    match html() {
        Some(content) => rsx!(div { dangerous_inner_html: "{content}" }),
        None => rsx!(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fallback_names_the_failed_path() {
        let snippet = fallback_snippet("/fragments/settings.html");
        assert!(snippet.contains("/fragments/settings.html"));
        assert!(snippet.contains("alert-error"));
    }
}
