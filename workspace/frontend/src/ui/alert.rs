use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AlertKind {
    #[default]
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Danger => "alert-danger",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AlertKind::Danger | AlertKind::Warning => "fas fa-exclamation-triangle",
            AlertKind::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: String,
    #[prop_or_default]
    pub kind: AlertKind,
}

/// Bootstrap alert with an icon; the message is rendered as text, never as markup.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    if props.kind == AlertKind::Danger {
        log::warn!("Displaying error to user: {}", props.message);
    }

    html! {
        <div class={classes!("alert", props.kind.class())} role="alert">
            <i class={props.kind.icon()}></i>
            {" "}{&props.message}
        </div>
    }
}
