pub mod document;
pub mod engine;
pub mod export;
pub mod host;
pub mod io;
pub mod ipv4;
pub mod report;
pub mod stats;

pub mod prelude {
    pub use crate::engine::{Engine, ParseReport};
    pub use crate::host::HostRecord;
}
