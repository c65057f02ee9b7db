//! Horizontal strip of illustrative photos.

use dioxus::prelude::*;

/// Display info for a photo in the strip.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoInfo {
    pub src: String,
    pub alt: String,
}

/// Three-across photo strip used on marketing and confirmation cards.
#[component]
pub fn PhotoStrip(photos: Vec<PhotoInfo>) -> Element {
    rsx! {
        div {
            class: "photo-strip",
            for photo in photos.iter() {
                div {
                    class: "photo-tile",
                    title: "{photo.alt}",
                    img {
                        class: "photo-tile-img floaty",
                        src: "{photo.src}",
                        alt: "{photo.alt}",
                    }
                }
            }
        }
    }
}
