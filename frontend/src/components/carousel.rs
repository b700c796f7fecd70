use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{Carousel, TimerCommand};
use crate::config::{self, TIMINGS};

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    /// DOM id of the slider container, e.g. `desktop-slider`.
    pub id: AttrValue,
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub class: Classes,
}

/// Owns the autoplay interval for one carousel. Replacing the handle
/// cancels the previous interval.
#[derive(Clone)]
struct Autoplayer {
    carousel: Rc<RefCell<Carousel>>,
    interval: Rc<RefCell<Option<Interval>>>,
    redraw: UseForceUpdateHandle,
}

impl Autoplayer {
    fn apply(&self, command: TimerCommand) {
        match command {
            TimerCommand::Keep => {}
            TimerCommand::Stop => {
                self.interval.borrow_mut().take();
            }
            TimerCommand::Restart => {
                let carousel = self.carousel.clone();
                let redraw = self.redraw.clone();
                let interval = Interval::new(config::millis(TIMINGS.carousel_autoplay), move || {
                    if carousel.borrow_mut().tick().is_some() {
                        redraw.force_update();
                    }
                });
                *self.interval.borrow_mut() = Some(interval);
            }
        }
    }

    fn run(&self, transition: impl FnOnce(&mut Carousel) -> TimerCommand) {
        let command = transition(&mut self.carousel.borrow_mut());
        self.apply(command);
        self.redraw.force_update();
    }
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let count = props.slides.len();
    let carousel = use_mut_ref(move || Carousel::new(count));
    let interval = use_mut_ref(|| None::<Interval>);
    let resize_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();

    let player = Autoplayer {
        carousel: carousel.clone(),
        interval,
        redraw,
    };

    {
        let player = player.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                log::info!("carousel #{} ready with {} slides", id, count);
                if count > 0 {
                    player.apply(TimerCommand::Restart);
                }
                move || {
                    player.interval.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let player = player.clone();
        use_event_with_window("resize", move |_: Event| {
            let player = player.clone();
            let debounce = Timeout::new(config::millis(TIMINGS.resize_debounce), move || {
                player.run(Carousel::reset);
            });
            *resize_timer.borrow_mut() = Some(debounce);
        });
    }

    let onmouseenter = {
        let player = player.clone();
        Callback::from(move |_: MouseEvent| player.run(Carousel::pause))
    };
    let onmouseleave = {
        let player = player.clone();
        Callback::from(move |_: MouseEvent| player.run(Carousel::resume))
    };
    let ontouchstart = {
        let player = player.clone();
        Callback::from(move |_: TouchEvent| player.run(Carousel::pause))
    };
    let ontouchend = {
        let player = player.clone();
        Callback::from(move |_: TouchEvent| player.run(Carousel::resume))
    };
    let on_prev = {
        let player = player.clone();
        Callback::from(move |_: MouseEvent| player.run(Carousel::previous))
    };
    let on_next = {
        let player = player.clone();
        Callback::from(move |_: MouseEvent| player.run(Carousel::next))
    };

    let state = carousel.borrow();
    if state.count() == 0 {
        return html! { <div id={props.id.clone()} class={classes!("slider", props.class.clone())}></div> };
    }

    let dots = state.dots().into_iter().enumerate().map(|(i, active)| {
        let player = player.clone();
        let onclick = Callback::from(move |_: MouseEvent| player.run(|c| c.go_to(i)));
        html! {
            <button
                class={classes!("slider-dot", active.then_some("active"))}
                aria-label={format!("Go to slide {}", i + 1)}
                {onclick}
            />
        }
    });

    html! {
        <div
            id={props.id.clone()}
            class={classes!("slider", props.class.clone())}
            {onmouseenter}
            {onmouseleave}
            {ontouchstart}
            {ontouchend}
        >
            <div class="slider-track" style={format!("transform: {};", state.translate())}>
                { for props.slides.iter().map(|slide| html! {
                    <div class="slide">
                        <img src={slide.src.clone()} alt={slide.alt.clone()} loading="lazy" />
                    </div>
                }) }
            </div>
            <button class="slider-prev" aria-label="Previous slide" onclick={on_prev}>{"‹"}</button>
            <button class="slider-next" aria-label="Next slide" onclick={on_next}>{"›"}</button>
            <div class="slider-dots">{ for dots }</div>
        </div>
    }
}
