//! Type descriptors for the mapping registry.
//!
//! Host types are described once, at the registration boundary, as plain
//! values: a fully qualified name, a [`TypeKind`], the declared properties and
//! an optional supertype link. Everything the registry needs to decide about a
//! type (is it primitive, what is its boxed form, can it carry properties) is
//! answered from that value, never by runtime introspection.
//!
//! Type identity is the fully qualified name. Two [`Type`] handles built
//! independently with the same name are the same type.

/// Capability predicates over type descriptors.
pub mod capability;
/// Type descriptor values and shared handles.
pub mod descriptor;
/// Primitive scalar kinds.
pub mod primitive;

pub use capability::{boxed_equivalent, is_boxed, is_enum_constant_body, is_primitive, might_contain_properties, primitive_of};
pub use descriptor::{Property, RecordBuilder, STRING_TYPE_NAME, Type, TypeInfo, TypeKind};
pub use primitive::Primitive;
