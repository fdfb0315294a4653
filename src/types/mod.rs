//! Companion type-declaration packages.
//!
//! After `ny add` in a TypeScript project, packages that do not ship their
//! own declarations get the matching `@types/*` package added as a dev
//! dependency, if the registry has one.

pub mod plan;
pub mod registry;

pub use plan::{
    bare_name, has_bundled_types, is_typescript_project, plan_types, types_package_name, TypesPlan,
};
pub use registry::{NpmRegistry, PackageRegistry};
