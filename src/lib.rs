//! Paramsync - project remote parameter store values onto annotated cluster objects.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Resolve a manifest and write it back
//! │   ├── inspect       # Show the recognised annotations
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── annotations   # Annotation extraction (two alias namespaces)
//!     ├── config        # paramsync.toml settings
//!     ├── decompose     # StringList splitting, path key sanitizing
//!     ├── object        # Cluster object model
//!     ├── provider/     # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   ├── memory    # Fixture-backed store
//!     │   └── aws       # AWS SSM (feature `aws`)
//!     ├── resolver      # Parameter type dispatch
//!     ├── resolved      # ResolvedConfig: materialization
//!     └── store/        # Object persistence
//!         ├── mod       # ObjectStore trait
//!         └── fs        # JSON file output
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::annotations::Annotations;
pub use crate::core::config::Settings;
pub use crate::core::object::{ConfigObject, ObjectMeta};
pub use crate::core::provider::{MemoryStore, ParameterStore};
pub use crate::core::resolved::ResolvedConfig;
pub use crate::core::store::{FileObjectStore, ObjectStore};
pub use crate::core::types::ParamType;
