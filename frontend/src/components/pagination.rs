use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[derive(Debug, PartialEq, Eq)]
enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let slots = visible_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "transition-colors",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex flex-wrap items-center justify-center gap-2" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={current_page <= 1}
                onclick={prev_onclick}
                aria-label={t::ARIA_PREV}
            >
                {"<"}
            </button>
            { for slots.into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let is_current = page == current_page;
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        is_current.then_some("bg-[var(--primary)] text-white border-transparent pointer-events-none")
                    );
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                            aria-current={is_current.then(|| AttrValue::from("page"))}
                            disabled={is_current}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}")}
                        class="px-2 select-none text-[var(--muted)]"
                        aria-hidden="true"
                    >
                        {"..."}
                    </span>
                },
            }) }
            <button
                type="button"
                class={base_btn_classes}
                disabled={current_page >= total_pages}
                onclick={next_onclick}
                aria-label={t::ARIA_NEXT}
            >
                {">"}
            </button>
        </nav>
    }
}

/// First, last, and a window of five around `current`, with ellipses for
/// the gaps. Seven pages or fewer are all shown.
fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = vec![PageSlot::Page(1)];

    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total.saturating_sub(4).max(2), total - 1)
    } else {
        (current - 2, current + 2)
    };

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }

    slots.push(PageSlot::Page(total));
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(slots: &[PageSlot]) -> Vec<Option<usize>> {
        slots
            .iter()
            .map(|slot| match slot {
                PageSlot::Page(page) => Some(*page),
                PageSlot::Ellipsis(_) => None,
            })
            .collect()
    }

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(pages(&visible_slots(2, 4)), vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn near_start_has_only_right_ellipsis() {
        assert_eq!(
            pages(&visible_slots(2, 20)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
    }

    #[test]
    fn middle_has_both_ellipses() {
        assert_eq!(
            pages(&visible_slots(10, 20)),
            vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(20)]
        );
    }

    #[test]
    fn near_end_has_only_left_ellipsis() {
        assert_eq!(
            pages(&visible_slots(19, 20)),
            vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
        );
    }
}
