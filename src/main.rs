mod demo;
mod icons;
mod landing;
mod select;

use dioxus::prelude::*;

use demo::{DemoBasic, DemoRefresh};
use landing::Landing;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/basic")]
    DemoBasic {},
    #[route("/refresh")]
    DemoRefresh {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            style: "min-height: 100vh; background: #0f0f1a;",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
