#![allow(dead_code)]

pub mod service;

pub use service::{rows, service_error, Call, FakePrizeService, RecordingPause};
