use web_sys::Element;
use yew::prelude::*;

use crate::utils::sanitize_html;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render article HTML into a host element. The markup is sanitized first
/// and Yew never diffs the host's children.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host_ref = use_node_ref();
    let clean = use_memo(props.html.clone(), |html| sanitize_html(html));

    {
        let host_ref = host_ref.clone();
        use_effect_with(clean, move |clean| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(clean.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={props.class.clone()} />
    }
}
