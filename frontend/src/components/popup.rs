use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::notification::Notice;
use crate::config::{self, TIMINGS};
use crate::form::{submit_lead, Field, LeadForm, Popup, SessionStore};

#[derive(Properties, PartialEq)]
pub struct LeadPopupProps {
    pub on_notify: Callback<Notice>,
}

#[function_component(LeadPopup)]
pub fn lead_popup(props: &LeadPopupProps) -> Html {
    let popup: Rc<RefCell<Popup<SessionStore>>> = use_mut_ref(|| Popup::new(SessionStore));
    let auto_timer = use_mut_ref(|| None::<Timeout>);
    let form = use_state(LeadForm::default);
    let invalid = use_state(Vec::<Field>::new);
    let redraw = use_force_update();

    // Auto-open once per session unless the visitor already sent the form.
    {
        let popup = popup.clone();
        let auto_timer = auto_timer.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                if popup.borrow_mut().schedule_auto_open() {
                    let popup = popup.clone();
                    let handle = Timeout::new(config::millis(TIMINGS.popup_auto_open), move || {
                        if popup.borrow_mut().auto_open_fired() {
                            log::info!("lead popup auto-opened");
                            redraw.force_update();
                        }
                    });
                    *auto_timer.borrow_mut() = Some(handle);
                }
                move || {
                    auto_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let popup = popup.clone();
        let redraw = redraw.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && popup.borrow().is_open() {
                popup.borrow_mut().close();
                redraw.force_update();
            }
        });
    }

    let open = {
        let popup = popup.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            popup.borrow_mut().open();
            redraw.force_update();
        })
    };

    let close = {
        let popup = popup.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            popup.borrow_mut().close();
            redraw.force_update();
        })
    };

    let on_field = |field: Field| {
        let form = form.clone();
        let invalid = invalid.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if invalid.contains(&field) {
                invalid.set(invalid.iter().copied().filter(|f| *f != field).collect());
            }
        })
    };

    let onsubmit = {
        let popup = popup.clone();
        let auto_timer = auto_timer.clone();
        let form = form.clone();
        let invalid = invalid.clone();
        let on_notify = props.on_notify.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let prepared = popup.borrow_mut().prepare_submit(&form, Local::now());
            let payload = match prepared {
                Ok(Some(payload)) => payload,
                Ok(None) => return,
                Err(validation) => {
                    invalid.set(
                        Field::ALL
                            .into_iter()
                            .filter(|field| validation.has_error(*field))
                            .collect(),
                    );
                    if let Some(message) = validation.first_message() {
                        on_notify.emit(Notice::error(message));
                    }
                    return;
                }
            };
            invalid.set(Vec::new());
            redraw.force_update();

            let popup = popup.clone();
            let auto_timer = auto_timer.clone();
            let form = form.clone();
            let on_notify = on_notify.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                match submit_lead(&payload).await {
                    Ok(()) => {
                        if popup.borrow_mut().submitted() {
                            auto_timer.borrow_mut().take();
                        }
                        form.set(LeadForm::default());
                        on_notify.emit(Notice::success("Thank you! We will get in touch with you shortly."));
                    }
                    Err(e) => {
                        log::error!("lead submission failed: {}", e);
                        popup.borrow_mut().submit_failed();
                        on_notify.emit(Notice::error("Something went wrong. Please try again."));
                    }
                }
                redraw.force_update();
            });
        })
    };

    let close_backdrop = close.clone();
    let input_class = |field: Field| classes!("form-input", invalid.contains(&field).then_some("error"));
    let state = popup.borrow();
    let submitting = state.is_submitting();

    html! {
        <>
            <button class="enquire-button" onclick={open}>{"Enquire Now"}</button>
            if state.is_open() {
                <div id="popup-overlay" class="popup-overlay" onclick={close_backdrop}>
                    <div
                        id="popup-form"
                        class="popup"
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    >
                        <button class="popup-close" aria-label="Close" onclick={close}>{"×"}</button>
                        <h2>{"Get in touch"}</h2>
                        <form {onsubmit} novalidate=true>
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                class={input_class(Field::Name)}
                                value={form.name.clone()}
                                oninput={on_field(Field::Name).reform(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    input.value()
                                })}
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Email"
                                class={input_class(Field::Email)}
                                value={form.email.clone()}
                                oninput={on_field(Field::Email).reform(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    input.value()
                                })}
                            />
                            <input
                                type="tel"
                                name="phone"
                                placeholder="Phone"
                                class={input_class(Field::Phone)}
                                value={form.phone.clone()}
                                oninput={on_field(Field::Phone).reform(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    input.value()
                                })}
                            />
                            <textarea
                                name="message"
                                placeholder="Message (optional)"
                                class={input_class(Field::Message)}
                                value={form.message.clone()}
                                oninput={on_field(Field::Message).reform(|e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    input.value()
                                })}
                            />
                            <button type="submit" class="popup-submit" disabled={submitting}>
                                if submitting {
                                    <span class="loading-spinner"></span>{"Sending..."}
                                } else {
                                    {"Submit"}
                                }
                            </button>
                        </form>
                    </div>
                </div>
            }
        </>
    }
}
