// file: src/controller.rs
// description: search client controller tying the API, the view and the download sink together
// reference: submit / render / export flow of the search page

use crate::api::SearchApi;
use crate::exporter::{DownloadSink, ExportFormat};
use crate::models::{Query, ResultItem};
use crate::ui::messages;
use crate::ui::{Controls, RenderedItem, ResultArea, ResultView};
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
    Rendered,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent and nothing changed.
    Ignored,
    /// The response was rendered with this many result blocks.
    Rendered(usize),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    NeedsQuery,
    Failed,
    Saved(PathBuf),
}

/// Owns the query field, the result area and the export controls.
///
/// `submit` and `download` take `&mut self`, so a second search cannot start
/// while one is pending; the view additionally sees `Controls::submit` turned
/// off for the duration of the request.
pub struct SearchClient<A, V, S> {
    api: A,
    view: V,
    sink: S,
    input: String,
    area: ResultArea,
    controls: Controls,
    state: SearchState,
}

impl<A, V, S> SearchClient<A, V, S>
where
    A: SearchApi,
    V: ResultView,
    S: DownloadSink,
{
    pub fn new(api: A, view: V, sink: S) -> Self {
        Self {
            api,
            view,
            sink,
            input: String::new(),
            area: ResultArea::Empty,
            controls: Controls::default(),
            state: SearchState::Idle,
        }
    }

    /// Replaces the contents of the query field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn area(&self) -> &ResultArea {
        &self.area
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(query) = Query::parse(&self.input) else {
            debug!("Ignoring blank query");
            return SubmitOutcome::Ignored;
        };

        info!("Searching for: {}", query);
        self.state = SearchState::Searching;
        self.controls.submit = false;
        self.area = ResultArea::info(messages::SEARCHING);
        self.present();

        let response = self.api.search(&query).await;
        self.controls.submit = true;

        match response {
            Ok(response) => SubmitOutcome::Rendered(self.render(&response.results)),
            Err(e) => {
                error!("Search for {:?} failed: {}", query.as_str(), e);
                self.area = ResultArea::error(messages::SEARCH_FAILED);
                self.controls.set_exports(false);
                self.state = SearchState::Errored;
                self.present();
                SubmitOutcome::Failed
            }
        }
    }

    /// Replaces the result area with `results`, in the given order, and
    /// returns the number of blocks shown.
    pub fn render(&mut self, results: &[ResultItem]) -> usize {
        if results.is_empty() {
            self.area = ResultArea::info(messages::NOTHING_FOUND);
            self.controls.set_exports(false);
        } else {
            self.area = ResultArea::Items(results.iter().map(RenderedItem::from).collect());
            self.controls.set_exports(true);
        }

        self.state = SearchState::Rendered;
        self.present();
        self.area.block_count()
    }

    /// Exports the query currently in the input field. The displayed results
    /// and export controls are left as they are.
    pub async fn download(&mut self, format: ExportFormat) -> DownloadOutcome {
        let Some(query) = Query::parse(&self.input) else {
            self.view.alert(messages::ENTER_QUERY_FIRST);
            return DownloadOutcome::NeedsQuery;
        };

        info!("Exporting {:?} as {}", query.as_str(), format);
        let bytes = match self.api.download(&query, format).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Export of {:?} as {} failed: {}", query.as_str(), format, e);
                self.view.alert(messages::DOWNLOAD_FAILED);
                return DownloadOutcome::Failed;
            }
        };

        match self.sink.save(format.filename(), &bytes) {
            Ok(path) => DownloadOutcome::Saved(path),
            Err(e) => {
                error!("Saving {} failed: {}", format.filename(), e);
                self.view.alert(messages::DOWNLOAD_FAILED);
                DownloadOutcome::Failed
            }
        }
    }

    fn present(&mut self) {
        self.view.present(&self.area, &self.controls);
    }
}
