//! Application state and the event reducer.

use super::{AppEvent, AppView, ParseTicket};
use crate::data::parse_upload;
use crate::notifications::{Toast, ToastManager};
use crate::settings::Settings;
use crate::types::Dataset;
use crate::upload::UploadFile;
use std::sync::Arc;

/// The single shared application state.
///
/// Mutated only through [`AppState::update`]; read-only during rendering.
pub struct AppState {
    view: AppView,
    /// The current dataset. Replaced atomically on successful parse,
    /// cleared on reset, shared read-only with the renderer.
    dataset: Option<Arc<Dataset>>,
    settings: Settings,
    /// Ticket of the most recently accepted file.
    latest_ticket: u64,
    /// Bumped after every attempt (success or failure) and on reset, so the
    /// host can re-arm its file input; some input mechanisms do not fire
    /// twice for the identical file path otherwise.
    file_input_key: u64,
    /// Toast notification manager
    pub toasts: ToastManager,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            view: AppView::Upload,
            dataset: None,
            settings,
            latest_ticket: 0,
            file_input_key: 0,
            toasts: ToastManager::new(),
        }
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    /// Output boundary: the validated dataset, if any.
    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn file_input_key(&self) -> u64 {
        self.file_input_key
    }

    /// Ticket of the most recently accepted file.
    pub fn current_ticket(&self) -> ParseTicket {
        ParseTicket(self.latest_ticket)
    }

    /// Single-threaded reducer. Every state transition goes through here.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::FileAccepted => {
                self.latest_ticket += 1;
                tracing::debug!("Accepted file, ticket {}", self.latest_ticket);
            }
            AppEvent::ParseSucceeded { ticket, dataset } => {
                if self.is_stale(ticket) {
                    tracing::debug!("Discarding stale parse success (ticket {})", ticket.0);
                    return;
                }
                tracing::debug!(
                    "Parse succeeded: {} rows x {} cols",
                    dataset.row_count(),
                    dataset.column_count()
                );
                self.dataset = Some(Arc::new(dataset));
                self.view = AppView::Viewing;
                self.file_input_key += 1;
            }
            AppEvent::ParseFailed { ticket, error } => {
                if self.is_stale(ticket) {
                    tracing::debug!("Discarding stale parse failure (ticket {})", ticket.0);
                    return;
                }
                tracing::warn!("Parse failed: {}", error);
                self.toasts.push(Toast::error(error.user_message()));
                // Prior dataset and view stay untouched; only the input
                // affordance is re-armed for a retry.
                self.file_input_key += 1;
            }
            AppEvent::Reset => {
                self.dataset = None;
                self.view = AppView::Upload;
                self.file_input_key += 1;
            }
        }
    }

    /// Accept, parse and complete an upload in one synchronous step.
    ///
    /// This is the common path for hosts that parse on the triggering event;
    /// hosts that defer completion feed the resulting events through
    /// [`Self::update`] themselves and the ticket keeps ordering honest.
    pub fn upload(&mut self, file: &UploadFile) -> ParseTicket {
        self.update(AppEvent::FileAccepted);
        let ticket = self.current_ticket();

        let event = match parse_upload(file, &self.settings) {
            Ok(dataset) => AppEvent::ParseSucceeded { ticket, dataset },
            Err(error) => AppEvent::ParseFailed { ticket, error },
        };
        self.update(event);
        ticket
    }

    /// Clear the dataset and return to the upload view.
    pub fn reset(&mut self) {
        self.update(AppEvent::Reset);
    }

    fn is_stale(&self, ticket: ParseTicket) -> bool {
        ticket.0 != self.latest_ticket
    }
}
