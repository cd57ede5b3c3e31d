//! dropgrid — drop a delimited text file, view it as a virtualized data table.
//!
//! The crate is split along the two halves of the problem:
//!
//! - [`data`] turns raw file bytes into a validated [`types::Dataset`]
//!   (size/type checks, tokenization, column derivation, row mapping).
//! - [`table`] renders only the visible slice of a potentially large row set:
//!   a pure viewport-window calculation plus the stateful [`table::TableView`]
//!   a rendering host pulls rows from.
//!
//! [`app`] ties the two together as an event-driven state machine with
//! last-write-wins sequencing for overlapping uploads. The widget toolkit,
//! theming and drag-and-drop capture are the host's concern: any mechanism
//! that yields an [`upload::UploadFile`] can feed the pipeline, and the host
//! adapts [`table::ViewportWindow`] bounds to its own paint calls.

pub mod app;
pub mod constants;
pub mod data;
pub mod logging;
pub mod notifications;
pub mod settings;
pub mod table;
pub mod types;
pub mod upload;
