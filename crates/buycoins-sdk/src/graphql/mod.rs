/*
[INPUT]:  Operation descriptors and caller arguments
[OUTPUT]: GraphQL documents and variable maps ready for transport
[POS]:    GraphQL layer - query composer
[UPDATE]: When adding operations or document syntax
*/

pub mod document;
pub mod fields;
pub mod operation;
pub mod operations;
pub mod pagination;

pub use document::{Document, OperationKind, Selection};
pub use operation::{ArgumentSpec, Arguments, ComposedQuery, Operation, Placement};
pub use pagination::PaginationArgs;
