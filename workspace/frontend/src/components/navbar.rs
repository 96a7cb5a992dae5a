use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <nav class="navbar navbar-dark bg-primary shadow-sm mb-4">
            <div class="container">
                <span class="navbar-brand mb-0 h1" id="page-title">
                    <i class="fas fa-smog"></i>{" "}{ &props.title }
                </span>
            </div>
        </nav>
    }
}
