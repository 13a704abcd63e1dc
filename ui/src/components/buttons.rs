use dioxus::prelude::*;

/// Pill button with the gradient border used across the page.
#[component]
pub fn GradientButton(
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] kind: String,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "{kind}",
            class: "gbutton {class}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            span { class: "gbutton__inner", {children} }
        }
    }
}

#[component]
pub fn GradientLink(href: String, #[props(default)] new_tab: bool, children: Element) -> Element {
    rsx! {
        a {
            class: "gbutton",
            href: "{href}",
            target: if new_tab { "_blank" },
            rel: if new_tab { "noopener noreferrer" },
            span { class: "gbutton__inner", {children} }
        }
    }
}
