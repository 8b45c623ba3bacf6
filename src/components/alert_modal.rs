use yew::prelude::*;

use crate::context::use_alert;

/// Diálogo bloqueante global; muestra el primero de la cola
#[function_component(AlertModal)]
pub fn alert_modal() -> Html {
    let alert = use_alert();
    let Some(current) = alert.current() else {
        return html! {};
    };
    let dialog = current.dialog;

    let on_confirm = {
        let alert = alert.clone();
        Callback::from(move |_| alert.resolve(true))
    };
    let on_cancel = {
        let alert = alert.clone();
        Callback::from(move |_| alert.resolve(false))
    };

    html! {
        <div class="modal active">
            <div class="modal-overlay"></div>
            <div class={classes!("modal-content", "modal-small", dialog.kind.class())}
                 onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <span class="alert-icon">{ dialog.kind.icon() }</span>
                    <h2>{ &dialog.title }</h2>
                </div>
                <div class="modal-body">
                    <p class="alert-text">{ &dialog.text }</p>
                    <div class="choice-buttons">
                        <button class="btn-choice btn-confirm" onclick={on_confirm}>
                            { &dialog.confirm_label }
                        </button>
                        if let Some(cancel_label) = dialog.cancel_label.clone() {
                            <button class="btn-choice btn-cancel" onclick={on_cancel}>
                                { cancel_label }
                            </button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
