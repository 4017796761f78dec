//! # protolink
//!
//! Pluggable link protocols for authoring tools: each registered scheme gets
//! a browse action (follow the link in the editing session) and a resolve
//! action (rewrite or drop the link when a document is published).
//!
//! ## Example
//!
//! ```no_run
//! use protolink::{Placement, ProtocolRegistry, SystemNavigator};
//!
//! let registry = ProtocolRegistry::with_defaults().unwrap();
//!
//! assert_eq!(registry.resolve("info://emacs#Top"), None);
//! assert_eq!(
//!     registry.resolve("google://rust").as_deref(),
//!     Some("http://www.google.com/search?q=rust")
//! );
//!
//! registry
//!     .browse("man://ls:1", Placement::SameWindow, &mut SystemNavigator)
//!     .unwrap();
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod navigator;
pub mod registry;

pub use config::{ProtocolConfig, ProtocolEntry};
pub use error::{Error, Result};
pub use handlers::{BrowseContext, HandlerKey, Navigate, Transform};
pub use navigator::{Navigation, Navigator, Placement, RecordingNavigator, SystemNavigator};
pub use registry::{ProtocolDescriptor, ProtocolRegistry};

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    /// Returns the publish-time form of a link, or None if it should be dropped.
    #[pyfunction]
    fn resolve_url(url: String) -> PyResult<Option<String>> {
        let registry = ProtocolRegistry::with_defaults()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
        Ok(registry.resolve(&url))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn protolink(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(resolve_url, m)?)?;
        Ok(())
    }
}
