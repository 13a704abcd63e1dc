//! Transient confirmation messages ("E-mail copiado!").

use dioxus::prelude::*;

use crate::core::timing;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    message: String,
    tone: ToastTone,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    current: Signal<Option<Toast>>,
    issued: Signal<u64>,
}

impl ToastHandle {
    /// Show `message`, replacing any toast on screen. It clears itself after
    /// [`TOAST_DURATION_MS`] unless a newer toast replaced it.
    ///
    /// The dismiss timer is a task of the calling component, so it is dropped
    /// together with that component.
    pub fn show(&self, message: impl Into<String>, tone: ToastTone) {
        let (mut current, mut issued) = (self.current, self.issued);
        let id = *issued.peek() + 1;
        issued.set(id);
        current.set(Some(Toast {
            id,
            message: message.into(),
            tone,
        }));

        spawn(async move {
            timing::sleep_ms(TOAST_DURATION_MS).await;
            let still_showing = current.peek().as_ref().map(|t| t.id) == Some(id);
            if still_showing {
                current.set(None);
            }
        });
    }
}

pub fn use_provide_toast() -> ToastHandle {
    use_context_provider(|| ToastHandle {
        current: Signal::new(None),
        issued: Signal::new(0),
    })
}

pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

#[component]
pub fn ToastOutlet() -> Element {
    let handle = use_toast();
    let current = (handle.current)();

    rsx! {
        if let Some(toast) = current {
            div {
                class: match toast.tone {
                    ToastTone::Info => "toast",
                    ToastTone::Error => "toast toast--error",
                },
                role: "status",
                "{toast.message}"
            }
        }
    }
}
