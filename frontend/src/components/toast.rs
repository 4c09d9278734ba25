use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::{config::TOAST_DISMISS_MS, i18n::current::toast as t, notify::NoticeKind};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub kind: NoticeKind,
    pub message: String,
    pub on_close: Callback<()>,
}

/// One notification; closes itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let auto_timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), TOAST_DISMISS_MS)
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(props.message.clone(), move |_| {
            auto_timeout.reset();
        });
    }

    let (icon, accent) = match props.kind {
        NoticeKind::Success => ("✓", "border-emerald-500/40 text-emerald-700 dark:text-emerald-200"),
        NoticeKind::Error => ("⚠️", "border-red-500/40 text-red-700 dark:text-red-200"),
    };

    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "flex",
                "w-80",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "border",
                "bg-[var(--surface)]",
                "px-4",
                "py-3",
                "text-sm",
                "shadow-xl",
                accent
            )}
            role={if props.kind == NoticeKind::Error { "alert" } else { "status" }}
        >
            <span class="text-lg" aria-hidden="true">{ icon }</span>
            <p class="flex-1 text-[var(--text)]">{ props.message.clone() }</p>
            <button
                type="button"
                class="inline-flex h-6 w-6 items-center justify-center rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
