//! Shared test mocks and utilities for the Folio bookstore.

mod clock;
mod order_processor;
mod repository;

pub use clock::FixedClock;
pub use order_processor::{FailingOrderProcessor, RecordingOrderProcessor};
pub use repository::FailingBookRepository;
