use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlImageElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, TIMINGS};
use crate::lightbox::{Key, Lightbox, Phase};

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

/// Runs the timed half of each lightbox transition. Only one phase timer is
/// alive at a time; scheduling a new one cancels the last.
#[derive(Clone)]
struct Director {
    lightbox: Rc<RefCell<Lightbox>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    redraw: UseForceUpdateHandle,
}

impl Director {
    fn act(&self, transition: impl FnOnce(&mut Lightbox) -> bool) {
        let changed = transition(&mut self.lightbox.borrow_mut());
        if changed {
            self.redraw.force_update();
            self.follow_up();
        }
    }

    fn follow_up(&self) {
        let phase = self.lightbox.borrow().phase();
        match phase {
            Phase::Opening => self.reveal_next_frame(),
            Phase::SlidingOut { .. } => self.after(TIMINGS.lightbox_slide_out, Lightbox::slide_out_done),
            Phase::Loading { .. } => self.preload(),
            Phase::SlidingIn { .. } => self.after(TIMINGS.lightbox_slide_in, Lightbox::slide_in_done),
            Phase::Closing => self.after(TIMINGS.lightbox_close, Lightbox::closed),
            Phase::Shown | Phase::Closed => {
                self.timer.borrow_mut().take();
            }
        }
    }

    /// The overlay mounts without `show`; adding it a frame later lets the
    /// open transition run. Input unlocks once that transition has played.
    fn reveal_next_frame(&self) {
        self.timer.borrow_mut().take();
        let Some(window) = window() else {
            self.reveal();
            return;
        };
        let director = self.clone();
        let frame = Closure::once_into_js(move || director.reveal());
        if let Err(e) = window.request_animation_frame(frame.unchecked_ref()) {
            log::debug!("animation frame unavailable: {:?}", e);
            self.reveal();
        }
    }

    fn reveal(&self) {
        if self.lightbox.borrow_mut().reveal() {
            self.redraw.force_update();
            self.after(TIMINGS.lightbox_open, Lightbox::opened);
        }
    }

    fn after(&self, delay: std::time::Duration, transition: fn(&mut Lightbox) -> bool) {
        let director = self.clone();
        let handle = Timeout::new(config::millis(delay), move || director.act(transition));
        *self.timer.borrow_mut() = Some(handle);
    }

    /// Loads the next image off-screen so the swap never shows a half-decoded
    /// frame. A failed load still swaps; the browser shows its broken-image
    /// placeholder rather than leaving the lightbox stuck.
    fn preload(&self) {
        self.timer.borrow_mut().take();
        let Some(src) = self.lightbox.borrow().pending_source().map(str::to_owned) else {
            return;
        };
        let Ok(image) = HtmlImageElement::new() else {
            self.act(Lightbox::loaded);
            return;
        };

        let director = self.clone();
        let done = Closure::once_into_js(move || director.act(Lightbox::loaded));
        image.set_onload(Some(done.unchecked_ref()));
        image.set_onerror(Some(done.unchecked_ref()));
        image.set_src(&src);
    }
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let sources: Vec<String> = props.images.iter().map(|i| i.src.to_string()).collect();
    let lightbox = use_mut_ref(move || Lightbox::new(sources));
    let timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();

    let director = Director {
        lightbox: lightbox.clone(),
        timer,
        redraw,
    };

    {
        let director = director.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let key = Key::from_key_name(&e.key());
            if key != Key::Other && director.lightbox.borrow().phase() == Phase::Shown {
                e.prevent_default();
            }
            director.act(|lightbox| lightbox.on_key(key));
        });
    }

    {
        let director = director.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    director.timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let thumbnails = props.images.iter().map(|image| {
        let director = director.clone();
        let src = image.src.to_string();
        let onclick = Callback::from(move |_: MouseEvent| {
            let src = src.clone();
            director.act(move |lightbox| lightbox.open(&src));
        });
        html! {
            <button class="gallery-item" {onclick}>
                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
            </button>
        }
    });

    let state = lightbox.borrow();
    let overlay = if state.is_open() {
        let on_close = {
            let director = director.clone();
            Callback::from(move |_: MouseEvent| director.act(Lightbox::close))
        };
        let on_backdrop = {
            let director = director.clone();
            Callback::from(move |_: MouseEvent| director.act(Lightbox::close))
        };
        let on_prev = {
            let director = director.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                director.act(Lightbox::previous)
            })
        };
        let on_next = {
            let director = director.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                director.act(Lightbox::next)
            })
        };
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
        let visual = state.overlay_class();
        let alt = props
            .images
            .get(state.index())
            .map(|i| i.alt.clone())
            .unwrap_or_else(|| AttrValue::from(""));

        html! {
            <div id="lightbox" class={visual} onclick={on_backdrop}>
                <button class="lightbox-close" aria-label="Close" onclick={on_close}>{"×"}</button>
                <button class="lightbox-prev" aria-label="Previous image" onclick={on_prev}>{"‹"}</button>
                <img
                    id="lightbox-image"
                    class={state.placement().class()}
                    src={state.current().unwrap_or_default().to_string()}
                    {alt}
                    onclick={stop}
                />
                <button class="lightbox-next" aria-label="Next image" onclick={on_next}>{"›"}</button>
                <div class="lightbox-counter">
                    {format!("{} / {}", state.index() + 1, props.images.len())}
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            <div class="gallery-grid">{ for thumbnails }</div>
            { overlay }
        </>
    }
}
