//! Namespace definitions
//!
//! A namespace groups up to six repository path patterns (public, internal and
//! restricted, each for primary and thirdparty repositories) with the groups
//! allowed to write to them.
//!
//! ## Example Document
//!
//! ```yaml
//! namespaces:
//!   - name: team-a
//!     publicPattern: "com/example/team-a/**"
//!     restrictedPattern: "com/example/team-a-secret/**"
//!     publicThirdpartyPattern: "org/vendor/**"
//!     write: [team-a-devs]
//! ```

pub mod loader;
pub mod types;

pub use loader::{load_namespaces, load_namespaces_from_str, validate_namespaces};
pub use types::{
    NamespaceDefinition, NamespaceDocument, RepositoryKind, Visibility, VisibilityPatterns,
};
