// ============================================================================
// ALERT CONTEXT - Cola de diálogos modales bloqueantes
// ============================================================================
// Se muestra un diálogo a la vez; al resolverse se emite su callback
// ============================================================================

use std::collections::VecDeque;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::AlertDialog;

/// Diálogo en cola con sus acciones
#[derive(Clone, PartialEq)]
pub struct PendingAlert {
    pub dialog: AlertDialog,
    pub on_confirm: Option<Callback<()>>,
    pub on_cancel: Option<Callback<()>>,
}

impl PendingAlert {
    pub fn new(dialog: AlertDialog) -> Self {
        Self { dialog, on_confirm: None, on_cancel: None }
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct AlertQueue {
    items: VecDeque<PendingAlert>,
}

impl AlertQueue {
    pub fn current(&self) -> Option<&PendingAlert> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub enum AlertAction {
    Push(PendingAlert),
    Dismiss,
}

impl Reducible for AlertQueue {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            AlertAction::Push(alert) => items.push_back(alert),
            AlertAction::Dismiss => {
                items.pop_front();
            }
        }
        Rc::new(AlertQueue { items })
    }
}

/// Acceso a la cola desde hooks y componentes
#[derive(Clone, PartialEq)]
pub struct AlertContext {
    queue: Option<UseReducerHandle<AlertQueue>>,
}

impl AlertContext {
    pub fn current(&self) -> Option<PendingAlert> {
        self.queue.as_ref().and_then(|q| q.current().cloned())
    }

    pub fn show(&self, dialog: AlertDialog) {
        self.push(PendingAlert::new(dialog));
    }

    /// Diálogo con dos botones; cada uno dispara su callback al cerrarse
    pub fn confirm(&self, dialog: AlertDialog, on_confirm: Callback<()>, on_cancel: Callback<()>) {
        self.push(PendingAlert { dialog, on_confirm: Some(on_confirm), on_cancel: Some(on_cancel) });
    }

    /// Cierra el diálogo visible
    pub fn resolve(&self, confirmed: bool) {
        let Some(queue) = self.queue.as_ref() else {
            return;
        };
        let Some(alert) = queue.current().cloned() else {
            return;
        };
        queue.dispatch(AlertAction::Dismiss);

        let callback = if confirmed { alert.on_confirm } else { alert.on_cancel };
        if let Some(callback) = callback {
            callback.emit(());
        }
    }

    fn push(&self, alert: PendingAlert) {
        match self.queue.as_ref() {
            Some(queue) => queue.dispatch(AlertAction::Push(alert)),
            None => log::warn!("⚠️ Diálogo sin AlertProvider: {}", alert.dialog.text),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProviderProps {
    pub children: Children,
}

#[function_component(AlertProvider)]
pub fn alert_provider(props: &AlertProviderProps) -> Html {
    let queue = use_reducer(AlertQueue::default);
    let context = AlertContext { queue: Some(queue) };

    html! {
        <ContextProvider<AlertContext> context={context}>
            { props.children.clone() }
        </ContextProvider<AlertContext>>
    }
}

#[hook]
pub fn use_alert() -> AlertContext {
    use_context::<AlertContext>().unwrap_or(AlertContext { queue: None })
}
