pub mod resolver;

pub use resolver::{Breadcrumb, IconRef, SourceIdentityResolver, GENERIC_ICON};
