use yew::prelude::*;

/// Vistas de la consola
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Comedores,
    Paises,
    Dashboard,
    Historial,
}

impl View {
    pub const NAV: [View; 5] = [View::Home, View::Comedores, View::Paises, View::Dashboard, View::Historial];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Inicio",
            View::Comedores => "Comedores",
            View::Paises => "Países",
            View::Dashboard => "Dashboard",
            View::Historial => "Historial",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: View,
    pub on_navigate: Callback<View>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <div class="app-brand">{"MOG"}</div>
            <nav class="app-nav">
                { for View::NAV.iter().map(|view| {
                    let view = *view;
                    let on_navigate = props.on_navigate.clone();
                    let class = if view == props.current { "nav-link active" } else { "nav-link" };
                    html! {
                        <button class={class} onclick={Callback::from(move |_| on_navigate.emit(view))}>
                            { view.label() }
                        </button>
                    }
                }) }
            </nav>
        </header>
    }
}
