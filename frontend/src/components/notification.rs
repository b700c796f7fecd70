use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{self, TIMINGS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notification notification-success",
            NoticeKind::Error => "notification notification-error",
        }
    }
}

/// Current toast and a way to raise a new one. A newer toast replaces the
/// old one along with its dismiss timer.
#[derive(Clone)]
pub struct Notifier {
    pub current: Option<Notice>,
    pub notify: Callback<Notice>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_notifier() -> Notifier {
    let current = use_state(|| None::<Notice>);
    let timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let dismiss = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |_: ()| {
            timer.borrow_mut().take();
            current.set(None);
        })
    };

    let notify = {
        let current = current.clone();
        Callback::from(move |notice: Notice| {
            current.set(Some(notice));
            let current = current.clone();
            let handle = Timeout::new(config::millis(TIMINGS.notification), move || {
                current.set(None);
            });
            *timer.borrow_mut() = Some(handle);
        })
    };

    Notifier {
        current: (*current).clone(),
        notify,
        dismiss,
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let onclick = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class={notice.class()} role="status" {onclick}>
            <span class="notification-message">{&notice.message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_classes_follow_kind() {
        assert_eq!(Notice::error("x").class(), "notification notification-error");
        assert_eq!(Notice::success("x").class(), "notification notification-success");
    }
}
