//! Crate-path resolution for the interactor derive macros.
//!
//! Derived impls name items of `interactor_core` (`hooks::HookDecl`,
//! `validation::Rule`, ...). A consumer reaches those items either through a
//! direct, possibly renamed, dependency on the core or through the
//! `interactor` facade, which glob re-exports the core at its root. Both
//! routes expose the same module tree, so only the leading segment differs.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Package name of the core crate.
pub const CORE: &str = "interactor_core";

/// Package name of the facade crate.
pub const FACADE: &str = "interactor";

/// Manifest names tried in order; the first dependency found wins.
const ROUTES: [&str; 2] = [CORE, FACADE];

/// Returns the leading path segment under which the consumer sees the core.
///
/// Falls back to `interactor_core` when neither crate is a dependency, so
/// the compile error names the crate the consumer is missing.
pub fn core_path() -> TokenStream {
    let segment = ROUTES
        .iter()
        .find_map(|package| crate_name(package).ok().map(|found| segment(package, found)))
        .unwrap_or_else(|| CORE.to_string());

    let ident = format_ident!("{}", segment);
    quote!(#ident)
}

/// The identifier a found crate is referenced by.
///
/// Inside the core itself this is the package name, which the core
/// aliases with `extern crate self`.
fn segment(package: &str, found: FoundCrate) -> String {
    match found {
        FoundCrate::Itself => package.replace('-', "_"),
        FoundCrate::Name(name) => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renamed_dependency_uses_its_alias() {
        let found = FoundCrate::Name("core_alias".to_string());
        assert_eq!(segment(CORE, found), "core_alias");
    }

    #[test]
    fn itself_uses_the_package_name() {
        assert_eq!(segment(CORE, FoundCrate::Itself), "interactor_core");
    }

    #[test]
    fn core_route_is_tried_first() {
        assert_eq!(ROUTES, [CORE, FACADE]);
    }
}
