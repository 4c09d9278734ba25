use journal_shared::Category;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
    pub categories: std::rc::Rc<Vec<Category>>,
    /// Selected id; `None` selects the placeholder.
    pub value: Option<String>,
    /// Text of the empty option.
    pub placeholder: AttrValue,
    pub on_change: Callback<Option<String>>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Dropdown over every category; the empty option maps to `None`.
#[function_component(CategorySelect)]
pub fn category_select(props: &CategorySelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                on_change.emit((!value.is_empty()).then_some(value));
            }
        })
    };
    let selected = props.value.clone().unwrap_or_default();

    html! {
        <select
            id={props.id.clone()}
            class={classes!("form-input", props.class.clone())}
            onchange={on_change}
            disabled={props.disabled}
        >
            <option value="" selected={selected.is_empty()}>{ props.placeholder.clone() }</option>
            { for props.categories.iter().map(|category| html! {
                <option
                    key={category.id.clone()}
                    value={category.id.clone()}
                    selected={category.id == selected}
                >
                    { &category.name }
                </option>
            }) }
        </select>
    }
}
