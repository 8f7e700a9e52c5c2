// SPDX-License-Identifier: MPL-2.0
//! Vector icons embedded as SVG sources.
//!
//! Handles are parsed once on first access and cached in a `OnceLock`.
//! Icons are drawn with `currentColor`, so [`tinted`] can recolor them to
//! match the active color scheme.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const IMAGE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="4" width="18" height="16" rx="2"/><circle cx="8.5" cy="9.5" r="1.5"/><path d="M21 16l-5-5-9 9"/></svg>"#;

const CHEVRON_LEFT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"><path d="M15 5l-7 7 7 7"/></svg>"#;

const CHEVRON_RIGHT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"><path d="M9 5l7 7-7 7"/></svg>"#;

const HAND_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M9 11V4.5a1.5 1.5 0 0 1 3 0V10"/><path d="M12 10V8.5a1.5 1.5 0 0 1 3 0V11"/><path d="M15 11v-1a1.5 1.5 0 0 1 3 0v5a6 6 0 0 1-6 6h-1a6 6 0 0 1-5-2.7L3.4 14.6a1.5 1.5 0 0 1 2.4-1.8L9 16"/></svg>"#;

define_icon!(image, IMAGE_SVG, "Picture frame with a mountain and a sun.");
define_icon!(chevron_left, CHEVRON_LEFT_SVG, "Chevron pointing left.");
define_icon!(chevron_right, CHEVRON_RIGHT_SVG, "Chevron pointing right.");
define_icon!(hand_pointer, HAND_SVG, "Pointing hand, used for the swipe hint.");

/// Gives an icon a square size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Draws an icon's strokes in `color`.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_sources_are_svg_documents() {
        for source in [IMAGE_SVG, CHEVRON_LEFT_SVG, CHEVRON_RIGHT_SVG, HAND_SVG] {
            assert!(source.starts_with("<svg"));
            assert!(source.ends_with("</svg>"));
            assert!(source.contains("currentColor"));
        }
    }

    #[test]
    fn icons_can_be_built_repeatedly() {
        let _first = sized(image(), 24.0);
        let _second = tinted(chevron_right(), Color::WHITE);
        let _third = chevron_left();
        let _fourth = hand_pointer();
    }
}
