use yew::prelude::*;

use crate::components::carousel::{Slide, Slider};
use crate::components::lightbox::{Gallery, GalleryImage};
use crate::components::navbar::{NavBar, NavSection};
use crate::components::notification::{use_notifier, Toast};
use crate::components::popup::LeadPopup;
use crate::config;
use crate::scroll::SectionId;

fn slides(prefix: &str) -> Vec<Slide> {
    (1..=5)
        .map(|n| Slide {
            src: AttrValue::from(format!("/assets/{}-banner-{}.jpg", prefix, n)),
            alt: AttrValue::from(format!("Banner {}", n)),
        })
        .collect()
}

fn gallery_images() -> Vec<GalleryImage> {
    (1..=8)
        .map(|n| GalleryImage {
            src: AttrValue::from(format!("/assets/gallery-{}.jpg", n)),
            alt: AttrValue::from(format!("Gallery image {}", n)),
        })
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let notifier = use_notifier();

    let sections: Vec<NavSection> = config::SECTIONS
        .iter()
        .map(|(id, label)| NavSection {
            id: SectionId::from(*id),
            label: *label,
        })
        .collect();

    html! {
        <div class="landing-page">
            <NavBar navbar_id={config::NAVBAR_ID} {sections} />

            <section id="home" class="hero">
                <Slider id="desktop-slider" class={classes!("desktop-only")} slides={slides("desktop")} />
                <Slider id="mobile-slider" class={classes!("mobile-only")} slides={slides("mobile")} />
            </section>

            <section id="overview" class="section">
                <h2>{"Overview"}</h2>
                <p>{"Thoughtfully planned homes with open views, generous light and room to grow."}</p>
            </section>

            <section id="amenities" class="section">
                <h2>{"Amenities"}</h2>
                <ul class="amenities-list">
                    <li>{"Clubhouse"}</li>
                    <li>{"Swimming pool"}</li>
                    <li>{"Landscaped gardens"}</li>
                    <li>{"Fitness centre"}</li>
                </ul>
            </section>

            <section id="gallery" class="section">
                <h2>{"Gallery"}</h2>
                <Gallery images={gallery_images()} />
            </section>

            <section id="location" class="section">
                <h2>{"Location"}</h2>
                <p>{"Minutes from schools, hospitals and the business district."}</p>
            </section>

            <section id="contact" class="section">
                <h2>{"Contact"}</h2>
                <p>{"Leave your details and our team will reach out."}</p>
            </section>

            <LeadPopup on_notify={notifier.notify.clone()} />
            <Toast notice={notifier.current.clone()} on_dismiss={notifier.dismiss.clone()} />
        </div>
    }
}
