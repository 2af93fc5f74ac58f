//! Clip download machinery.
//!
//! [`ClipFetcher`] drives an [`Extractor`] with bounded retries and decides
//! success by checking the destination file, not the tool's exit status.

mod downloader;
mod extractor;
mod fetch;
pub mod retry;
mod window;

pub use downloader::CommandDownloader;
pub use extractor::{ClipSpec, ExtractError, Extractor};
pub use fetch::{ClipFetcher, ClipRequest, FetchOutcome};
pub use window::ClipWindow;
