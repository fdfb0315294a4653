//! Deciding which `@types/*` packages to add.

use std::path::{Path, PathBuf};

use super::registry::PackageRegistry;
use crate::detection::find_in_parents;
use crate::manifest::{PackageJson, MANIFEST_FILE};

/// Packages that need a companion types package, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypesPlan {
    /// Requested packages lacking declarations.
    pub packages: Vec<String>,
    /// The `@types/*` packages to add for them.
    pub types_packages: Vec<String>,
}

impl TypesPlan {
    /// Whether there is nothing to install.
    pub fn is_empty(&self) -> bool {
        self.types_packages.is_empty()
    }
}

/// Whether `dir` belongs to a TypeScript project.
pub fn is_typescript_project(dir: &Path) -> bool {
    find_in_parents(dir, "tsconfig.json").is_some()
}

/// Package name without a version or tag: `foo@^1` → `foo`,
/// `@scope/foo@next` → `@scope/foo`.
pub fn bare_name(spec: &str) -> &str {
    let search_from = usize::from(spec.starts_with('@'));
    match spec[search_from..].find('@') {
        Some(at) => &spec[..search_from + at],
        None => spec,
    }
}

/// DefinitelyTyped name for a package: `foo` → `@types/foo`,
/// `@scope/foo` → `@types/scope__foo`.
pub fn types_package_name(package: &str) -> String {
    let name = bare_name(package);
    match name.strip_prefix('@') {
        Some(scoped) => format!("@types/{}", scoped.replace('/', "__")),
        None => format!("@types/{}", name),
    }
}

fn installed_package_dir(dir: &Path, package: &str) -> Option<PathBuf> {
    let manifest = Path::new("node_modules").join(package).join(MANIFEST_FILE);
    find_in_parents(dir, manifest).and_then(|path| path.parent().map(Path::to_path_buf))
}

/// Whether the installed copy of `package` ships its own declarations.
///
/// A package that is not installed, or whose manifest cannot be read,
/// counts as having none.
pub fn has_bundled_types(dir: &Path, package: &str) -> bool {
    let Some(package_dir) = installed_package_dir(dir, package) else {
        return false;
    };

    match PackageJson::load(&package_dir.join(MANIFEST_FILE)) {
        Ok(manifest) if manifest.declares_types() => true,
        Ok(_) => package_dir.join("index.d.ts").is_file(),
        Err(e) => {
            tracing::debug!("Ignoring unreadable manifest of {}: {}", package, e);
            false
        }
    }
}

/// Work out which companion types packages to add for `packages`.
///
/// Each package is judged on its own installed metadata only, so the
/// outcome does not depend on the order packages were requested in. The
/// registry is consulted last, and a failed lookup counts as "not
/// published".
pub fn plan_types(dir: &Path, packages: &[String], registry: &dyn PackageRegistry) -> TypesPlan {
    let mut plan = TypesPlan::default();

    for package in packages {
        let name = bare_name(package);
        if name.starts_with("@types/") {
            continue;
        }
        if has_bundled_types(dir, name) {
            tracing::debug!("{} ships its own types", name);
            continue;
        }

        let types_package = types_package_name(name);
        if plan.types_packages.contains(&types_package) {
            continue;
        }
        if installed_package_dir(dir, &types_package).is_some() {
            tracing::debug!("{} is already installed", types_package);
            continue;
        }

        match registry.has_package(&types_package) {
            Ok(true) => {
                plan.packages.push(name.to_string());
                plan.types_packages.push(types_package);
            }
            Ok(false) => tracing::debug!("{} is not published", types_package),
            Err(e) => tracing::debug!("Registry lookup for {} failed: {}", types_package, e),
        }
    }

    plan
}
