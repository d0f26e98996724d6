//! Domain types for gene-based summary statistics.

mod gene;

pub use gene::{
    Field, FieldError, FieldErrorKind, GeneRecord, RecordFields, ValidationError, parse_p_value,
    parse_position,
};
