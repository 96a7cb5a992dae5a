use yew::prelude::*;
use compute::view::{ModelStatusView, PanelState};
use crate::api_client::model_status::get_model_status;
use crate::hooks::use_fetch_with_refetch;
use crate::ui::alert::Alert;
use crate::ui::loading::LoadingSpinner;

/// Availability of the two prediction models, fetched fresh on every mount.
#[function_component(ModelStatus)]
pub fn model_status() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_model_status);

    let panel = match fetch_state.result() {
        Some(result) => ModelStatusView::panel(result),
        None => PanelState::Loading,
    };

    let on_refresh = Callback::from(move |_: MouseEvent| {
        log::debug!("User refreshed model status");
        refetch.emit(());
    });

    html! {
        <div class="card shadow-sm mb-4">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span><i class="fas fa-server"></i>{" Model Status"}</span>
                <button
                    class="btn btn-sm btn-outline-secondary"
                    onclick={on_refresh}
                    disabled={fetch_state.is_loading()}
                    title="Refresh model status"
                >
                    <i class="fas fa-sync-alt"></i>
                </button>
            </div>
            <div class="card-body" id="model-status">
                {match panel {
                    PanelState::Idle | PanelState::Loading => html! { <LoadingSpinner /> },
                    PanelState::Failed(message) => html! { <Alert message={message} /> },
                    PanelState::Ready(view) => html! { <ModelStatusTable view={view} /> },
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ModelStatusTableProps {
    view: ModelStatusView,
}

#[function_component(ModelStatusTable)]
fn model_status_table(props: &ModelStatusTableProps) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Model"}</th>
                        <th>{"Status"}</th>
                        <th>{"Last Updated"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.view.rows.iter().map(|row| html! {
                        <tr key={row.model.as_str()}>
                            <td>{row.name}</td>
                            <td>
                                <span class={classes!("model-status-badge", row.badge_class())}>
                                    {row.badge_text()}
                                </span>
                            </td>
                            <td>{&row.last_updated}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
