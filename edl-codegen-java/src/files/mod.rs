//! One module per generated compilation unit.

mod base_exception;
mod category_exception;
mod container_base;
mod container_exception;
mod docs_md;
mod error_exception;
mod handler;
mod handler_base;

pub use base_exception::BaseException;
pub use category_exception::CategoryException;
pub use container_base::ContainerBase;
pub use container_exception::ContainerException;
pub use docs_md::DocsMd;
pub use error_exception::ErrorException;
pub use handler::Handler;
pub use handler_base::HandlerBase;

use edl_ir::{CategoryDef, Spec};

/// The custom params a category's constructor threads, ancestors first.
///
/// A category inherits its ancestors' params positionally: the chain is
/// walked root-first so a child's constructor can pass the inherited slice
/// straight to `super(...)`.
pub(crate) fn chain_params<'a>(
    spec: &'a Spec,
    category: &'a CategoryDef,
) -> Vec<(&'a String, &'a String)> {
    let mut chain = spec.ancestry(&category.name);
    chain.reverse();
    chain.iter().flat_map(|c| c.params.iter()).collect()
}

/// The params a category's constructor receives from its parent chain,
/// excluding its own.
pub(crate) fn inherited_params<'a>(
    spec: &'a Spec,
    category: &'a CategoryDef,
) -> Vec<(&'a String, &'a String)> {
    match category.parent.as_deref().and_then(|p| spec.categories.get(p)) {
        Some(parent) => chain_params(spec, parent),
        None => Vec::new(),
    }
}
