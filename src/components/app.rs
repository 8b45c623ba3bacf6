use yew::prelude::*;

use super::{AlertModal, CrudComedores, CrudPaises, Dashboard, Header, Historial, Home, View};
use crate::context::{AlertProvider, UserProvider};

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(View::default);

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |next: View| {
            log::debug!("🧭 Navegando a {}", next.label());
            view.set(next);
        })
    };

    let content = match *view {
        View::Home => html! { <Home /> },
        View::Comedores => html! { <CrudComedores on_navigate={on_navigate.clone()} /> },
        View::Paises => html! { <CrudPaises /> },
        View::Dashboard => html! { <Dashboard /> },
        View::Historial => html! { <Historial /> },
    };

    html! {
        <AlertProvider>
            <UserProvider>
                <div class="app">
                    <Header current={*view} on_navigate={on_navigate} />
                    <main class="app-main">
                        { content }
                    </main>
                </div>
                <AlertModal />
            </UserProvider>
        </AlertProvider>
    }
}
