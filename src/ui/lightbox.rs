//! Tabbed screenshot gallery and the lightbox overlay on top of it.
//!
//! The gallery only tracks which tab is displayed. The lightbox holds at most
//! one enlarged image; selecting another replaces it, and it is cleared by the
//! close button or a click on the backdrop, never by a click on the image.

use serde::{Deserialize, Serialize};

/// Highlight colour of a gallery tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Purple,
    Blue,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    pub title: &'static str,
    pub description: &'static str,
    pub src: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryTab {
    pub id: &'static str,
    pub label: &'static str,
    pub accent: Accent,
    pub shots: &'static [Screenshot],
}

impl GalleryTab {
    /// Reference to one of this tab's images.
    pub fn image(&'static self, src: &str) -> Option<ImageRef> {
        self.shots
            .iter()
            .find(|shot| shot.src == src)
            .map(|shot| ImageRef { tab: self, shot })
    }
}

/// An image as selected from a specific tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    #[serde(serialize_with = "serialize_tab_id")]
    tab: &'static GalleryTab,
    shot: &'static Screenshot,
}

fn serialize_tab_id<S: serde::Serializer>(
    tab: &&'static GalleryTab,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(tab.id)
}

impl ImageRef {
    pub fn tab_id(&self) -> &'static str {
        self.tab.id
    }

    pub fn src(&self) -> &'static str {
        self.shot.src
    }
}

/// Which tab of the gallery is displayed.
#[derive(Debug, Clone)]
pub struct Gallery {
    tabs: &'static [GalleryTab],
    active: usize,
}

impl Gallery {
    /// Gallery showing its first tab.
    ///
    /// # Panics
    ///
    /// If `tabs` is empty.
    pub fn new(tabs: &'static [GalleryTab]) -> Self {
        assert!(!tabs.is_empty(), "gallery needs at least one tab");
        Self { tabs, active: 0 }
    }

    pub fn tabs(&self) -> &'static [GalleryTab] {
        self.tabs
    }

    pub fn active_tab(&self) -> &'static GalleryTab {
        let tabs = self.tabs;
        &tabs[self.active]
    }

    /// Display the tab with `id`. Unknown ids leave the gallery unchanged.
    pub fn show_tab(&mut self, id: &str) -> Option<&'static GalleryTab> {
        let index = self.tabs.iter().position(|tab| tab.id == id)?;
        self.active = index;
        Some(self.active_tab())
    }
}

/// Where a click on the open overlay landed. Read from the `close` query
/// parameter as `button`, `backdrop` or `image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayClick {
    #[serde(rename = "button")]
    CloseButton,
    Backdrop,
    Image,
}

#[derive(Debug, Clone, Default)]
pub struct ImageLightbox {
    current: Option<ImageRef>,
}

impl ImageLightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enlarge `image`, replacing whatever was shown.
    pub fn select(&mut self, image: ImageRef) {
        tracing::debug!(tab = image.tab_id(), src = image.src(), "Lightbox opened");
        self.current = Some(image);
    }

    pub fn dismiss(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("Lightbox dismissed");
        }
    }

    /// Route a click on the overlay. Clicks on the image itself keep it open.
    pub fn handle(&mut self, click: OverlayClick) {
        match click {
            OverlayClick::CloseButton | OverlayClick::Backdrop => self.dismiss(),
            OverlayClick::Image => {}
        }
    }

    pub fn current(&self) -> Option<&ImageRef> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
