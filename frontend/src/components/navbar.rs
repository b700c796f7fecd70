use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config::{self, TIMINGS};
use crate::nav::{MobileMenu, NavLinks, NavbarTone};
use crate::scroll::{DocumentLayout, FrameGate, ScrollEngine, SectionId, SectionLocator, WindowScroll};

#[derive(Clone, PartialEq)]
pub struct NavSection {
    pub id: SectionId,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub navbar_id: &'static str,
    pub sections: Vec<NavSection>,
}

/// Everything the scroll-spy and the click handlers share.
#[derive(Clone)]
struct Spy {
    nav: Rc<RefCell<NavLinks>>,
    gate: Rc<RefCell<FrameGate>>,
    locator: Rc<SectionLocator>,
    engine: Rc<WindowScroll>,
    redraw: UseForceUpdateHandle,
}

impl Spy {
    /// Scroll event: at most one locator pass per animation frame.
    fn on_scroll_event(&self) {
        if !self.gate.borrow_mut().request() {
            return;
        }
        let Some(window) = window() else {
            self.gate.borrow_mut().fire();
            return;
        };
        let spy = self.clone();
        let frame = Closure::once_into_js(move || spy.update());
        if window.request_animation_frame(frame.unchecked_ref()).is_err() {
            self.gate.borrow_mut().fire();
        }
    }

    fn update(&self) {
        self.gate.borrow_mut().fire();
        let offset = self.engine.offset();
        let current = self.locator.locate(offset, &DocumentLayout);

        let mut nav = self.nav.borrow_mut();
        let retoned = nav.set_tone(NavbarTone::from_offset(offset));
        let moved = nav.on_scroll(current);
        drop(nav);

        if retoned || moved {
            self.redraw.force_update();
        }
    }

    fn jump_to(&self, target: &SectionId) {
        let ticket = self.nav.borrow_mut().on_user_click(target);
        self.redraw.force_update();
        self.engine.scroll_to(target);

        let nav = self.nav.clone();
        Timeout::new(config::millis(TIMINGS.nav_suspend), move || {
            if nav.borrow_mut().resume(ticket) {
                log::debug!("scroll-spy resumed");
            }
        })
        .forget();
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let ids: Vec<SectionId> = props.sections.iter().map(|s| s.id.clone()).collect();
    let nav = {
        let ids = ids.clone();
        use_mut_ref(move || NavLinks::new(ids, NavbarTone::Transparent))
    };
    let gate = use_mut_ref(FrameGate::new);
    let locator = {
        let ids = ids.clone();
        use_memo(
            move |_| SectionLocator::new(ids, TIMINGS.section_trigger_px, TIMINGS.top_threshold_px),
            (),
        )
    };
    let engine = {
        let navbar_id = props.navbar_id;
        use_memo(move |_| WindowScroll::new(navbar_id), ())
    };
    let menu = use_state(MobileMenu::default);
    let redraw = use_force_update();

    let spy = Spy {
        nav: nav.clone(),
        gate,
        locator,
        engine,
        redraw,
    };

    {
        let spy = spy.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let listener = {
                    let spy = spy.clone();
                    Closure::wrap(Box::new(move || spy.on_scroll_event()) as Box<dyn FnMut()>)
                };
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
                // Initial state on load.
                spy.update();

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    let link = |section: &NavSection, mobile: bool| {
        let state = nav.borrow();
        let style = state.style_of(&section.id);
        let onclick = {
            let spy = spy.clone();
            let menu = menu.clone();
            let target = section.id.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if mobile {
                    menu.set(menu.close());
                }
                spy.jump_to(&target);
            })
        };
        let onmouseenter = {
            let spy = spy.clone();
            let target = section.id.clone();
            Callback::from(move |_: MouseEvent| {
                spy.nav.borrow_mut().hover(&target);
                spy.redraw.force_update();
            })
        };
        let onmouseleave = {
            let spy = spy.clone();
            let target = section.id.clone();
            Callback::from(move |_: MouseEvent| {
                spy.nav.borrow_mut().leave(&target);
                spy.redraw.force_update();
            })
        };
        html! {
            <a
                href={section.id.href()}
                class={style.class()}
                data-section={section.id.to_string()}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                {section.label}
            </a>
        }
    };

    let tone = nav.borrow().tone();

    html! {
        <nav id={props.navbar_id} class={classes!("navbar", tone.class())}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Landing"}</a>
                <div class="nav-links">
                    { for props.sections.iter().map(|s| link(s, false)) }
                </div>
                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={menu.class()}>
                { for props.sections.iter().map(|s| link(s, true)) }
            </div>
        </nav>
    }
}
