use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Html,
}

/// Centered overlay; clicking the backdrop closes it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/40 p-4" onclick={on_backdrop}>
            <div
                class="w-full max-w-md rounded-2xl bg-[var(--surface)] p-6 shadow-2xl"
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onclick={stop}
            >
                <h2 class="mb-4 text-lg font-semibold">{ props.title.clone() }</h2>
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static(t::DELETE))]
    pub confirm_label: AttrValue,
    #[prop_or(false)]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <Modal title={props.title.clone()} on_close={props.on_cancel.clone()}>
            <p class="mb-6 text-sm text-[var(--muted)]">{ props.message.clone() }</p>
            <div class="flex justify-end gap-3">
                <button type="button" class="btn-secondary" onclick={on_cancel} disabled={props.busy}>
                    { t::CANCEL }
                </button>
                <button type="button" class="btn-danger" onclick={on_confirm} disabled={props.busy}>
                    { if props.busy { t::SAVING.to_string() } else { props.confirm_label.to_string() } }
                </button>
            </div>
        </Modal>
    }
}
