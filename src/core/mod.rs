pub mod gesture;
pub mod mapper;
pub mod poller;
pub mod srt;
