//! Desktop front end for the prize draw flow.
//!
//! Two screens share one [`app::PrizeDrawApp`]: the entry form and the draw
//! machine. Remote calls run on worker threads and are applied on the UI
//! thread, so draw state has a single writer.

pub mod app;
pub mod config;
pub mod ui;
