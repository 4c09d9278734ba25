use std::rc::Rc;

use yew::prelude::*;

use crate::components::toast::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notices {
    next_id: u64,
    items: Vec<Notice>,
}

pub enum NoticeAction {
    Push(NoticeKind, String),
    Dismiss(u64),
}

/// Toasts kept on screen at once; older ones are dropped first.
const MAX_VISIBLE: usize = 4;

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push(kind, message) => {
                next.next_id += 1;
                next.items.push(Notice {
                    id: next.next_id,
                    kind,
                    message,
                });
                if next.items.len() > MAX_VISIBLE {
                    let overflow = next.items.len() - MAX_VISIBLE;
                    next.items.drain(..overflow);
                }
            },
            NoticeAction::Dismiss(id) => next.items.retain(|notice| notice.id != id),
        }
        Rc::new(next)
    }
}

/// Fire-and-forget handle for transient notifications.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: Option<UseReducerDispatcher<Notices>>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&self, kind: NoticeKind, message: String) {
        match self.dispatcher.as_ref() {
            Some(dispatcher) => dispatcher.dispatch(NoticeAction::Push(kind, message)),
            None => crate::utils::log_error("notify", &message),
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    let dispatcher = use_context::<UseReducerDispatcher<Notices>>();
    Notifier {
        dispatcher,
    }
}

#[derive(Properties, PartialEq)]
pub struct NotifierProviderProps {
    pub children: Html,
}

#[function_component(NotifierProvider)]
pub fn notifier_provider(props: &NotifierProviderProps) -> Html {
    let notices = use_reducer(Notices::default);
    let dispatcher = notices.dispatcher();

    html! {
        <ContextProvider<UseReducerDispatcher<Notices>> context={dispatcher.clone()}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-3" aria-live="polite">
                { for notices.items.iter().map(|notice| {
                    let on_close = {
                        let dispatcher = dispatcher.clone();
                        let id = notice.id;
                        Callback::from(move |_| dispatcher.dispatch(NoticeAction::Dismiss(id)))
                    };
                    html! {
                        <Toast
                            key={notice.id}
                            kind={notice.kind}
                            message={notice.message.clone()}
                            on_close={on_close}
                        />
                    }
                }) }
            </div>
        </ContextProvider<UseReducerDispatcher<Notices>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let notices = Rc::new(Notices::default());
        let notices = notices.reduce(NoticeAction::Push(NoticeKind::Error, "a".into()));
        let notices = notices.reduce(NoticeAction::Push(NoticeKind::Success, "b".into()));
        assert_eq!(notices.items.len(), 2);

        let first = notices.items[0].id;
        let notices = notices.reduce(NoticeAction::Dismiss(first));
        assert_eq!(notices.items.len(), 1);
        assert_eq!(notices.items[0].message, "b");
    }

    #[test]
    fn oldest_toasts_are_dropped() {
        let mut notices = Rc::new(Notices::default());
        for i in 0..6 {
            notices = notices.reduce(NoticeAction::Push(NoticeKind::Error, i.to_string()));
        }
        assert_eq!(notices.items.len(), MAX_VISIBLE);
        assert_eq!(notices.items[0].message, "2");
    }
}
