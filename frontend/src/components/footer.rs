use yew::prelude::*;

use crate::i18n::current::footer as t;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="border-t border-[var(--border)] py-6 text-center text-xs text-[var(--muted)]">
            { t::COPYRIGHT }
        </footer>
    }
}
