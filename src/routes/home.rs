//! Handler for the demonstration page.
//!
//! The page works without script: query parameters drive each state machine
//! and the response is the rendered result. The bundled script enhances the
//! same markup in the browser.

use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};
use serde::Deserialize;
use tracing::instrument;

use crate::content::{KEY_CONCEPTS, SCREENSHOT_TABS, TERRAFORM_BLOCKS};
use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::middleware::RequestId;
use crate::relay::StaticExport;
use crate::state::AppState;
use crate::ui::hover::PLACEHOLDER;
use crate::ui::lightbox::OverlayClick;
use crate::ui::{ConnectivityProbe, Gallery, HoverPairViewer, ImageLightbox};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Run the backend probe before rendering
    #[serde(default)]
    pub probe: bool,
    /// Snippet id to focus; empty clears the focus
    pub focus: Option<String>,
    /// Gallery tab to display
    pub tab: Option<String>,
    /// Image of the displayed tab to enlarge
    pub image: Option<String>,
    /// Click on the open lightbox: `button`, `backdrop` or `image`
    pub close: Option<OverlayClick>,
}

/// Page state for one render.
struct Page {
    probe: ConnectivityProbe,
    viewer: HoverPairViewer,
    gallery: Gallery,
    lightbox: ImageLightbox,
}

impl Page {
    async fn from_query(state: &AppState, query: &PageQuery) -> Result<Self, AppError> {
        let mut viewer = HoverPairViewer::new(TERRAFORM_BLOCKS);
        match query.focus.as_deref() {
            None => {}
            Some("") => viewer.unfocus(),
            Some(id) => {
                let key = viewer
                    .key_of(id)
                    .ok_or_else(|| AppError::SnippetNotFound(id.to_string()))?;
                viewer.focus(key);
            }
        }

        let mut gallery = Gallery::new(SCREENSHOT_TABS);
        if let Some(tab) = query.tab.as_deref() {
            gallery
                .show_tab(tab)
                .ok_or_else(|| AppError::TabNotFound(tab.to_string()))?;
        }

        let mut lightbox = ImageLightbox::new();
        if let Some(src) = query.image.as_deref() {
            let image = gallery
                .active_tab()
                .image(src)
                .ok_or_else(|| AppError::ImageNotFound(src.to_string()))?;
            lightbox.select(image);
        }
        if let Some(click) = query.close {
            lightbox.handle(click);
        }

        let mut probe = ConnectivityProbe::new(state.probe_failure_message());
        if query.probe {
            if state.config.deploy.source.serves_relay() {
                probe.start_probe(&state.relay).await;
            } else {
                probe.start_probe(&StaticExport).await;
            }
        }

        Ok(Self {
            probe,
            viewer,
            gallery,
            lightbox,
        })
    }

    fn context(&self, state: &AppState) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("config", &state.config.ui);
        context.insert("backend_url", &state.config.backend.base_url);
        context.insert("relay_enabled", &state.config.deploy.source.serves_relay());

        context.insert("probe", self.probe.state());
        context.insert("failure_message", self.probe.failure_message());

        context.insert("snippets", &self.viewer.entries());
        context.insert("focused", &self.viewer.focused());
        context.insert("explanation", self.viewer.current_explanation());
        context.insert("placeholder", PLACEHOLDER);

        context.insert("tabs", self.gallery.tabs());
        context.insert("active_tab", self.gallery.active_tab());
        context.insert("lightbox", &self.lightbox.current());
        context.insert("lightbox_open", &self.lightbox.is_open());

        context.insert("concepts", KEY_CONCEPTS);
        context
    }
}

/// Page handler.
#[instrument(name = "home::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppErrorResponse> {
    let page = Page::from_query(&state, &query)
        .await
        .with_request_id(&request_id)?;

    let html = state
        .tera
        .render("home.html", &page.context(&state))
        .with_request_id(&request_id)?;
    Ok(Html(html))
}
