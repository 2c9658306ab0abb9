use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod application;
mod validation;
mod submission;
mod workflow;
mod form_state;
mod components {
    pub mod anchor;
    pub mod header;
    pub mod faq;
    pub mod modal;
    pub mod reveal;
    pub mod application_form;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found" dir="rtl" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                    <h1>{"الصفحة غير موجودة"}</h1>
                    <Link<Route> to={Route::Home}>{"العودة إلى الصفحة الرئيسية"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();

    gloo_console::log!("Hydra Land Staff Application Website Loaded Successfully!");
    gloo_console::log!("Note: This is a frontend-only implementation. To enable email functionality, you need to:");
    gloo_console::log!("1. Set up a backend server");
    gloo_console::log!("2. Configure an email delivery service");
    gloo_console::log!("3. Replace the simulated submitter with one that posts to your backend endpoint");
}
