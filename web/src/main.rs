use dioxus::prelude::*;

use ui::i18n;
use ui::views::{Home, Privacy, Terms};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/privacidade")]
    Privacy {},
    #[route("/termos")]
    Terms {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Loader must be ready before the first `t!` lookup.
    use_hook(i18n::init);

    // Global language code; components read it to re-render after a switch.
    let initial = use_hook(i18n::current_language);
    use_context_provider(|| Signal::new(initial));

    rsx! {
        document::Title { "Guilherme Suporte TI" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        Router::<Route> {}
    }
}
