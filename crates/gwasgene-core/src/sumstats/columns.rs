//! Header resolution: map record fields to column indices.

use crate::domain::Field;

use super::error::{SumstatError, SumstatResult};

/// Column index of each record field within a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    name: usize,
    chromosome: usize,
    position: usize,
    p_value: usize,
}

impl ColumnMap {
    /// Resolve the columns of a header.
    ///
    /// For each field the first alias (in [`Field::aliases`] order) present in
    /// the header wins. Unknown columns are ignored.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> SumstatResult<Self> {
        let find = |field: Field| {
            field
                .aliases()
                .iter()
                .find_map(|alias| header.iter().position(|col| col.as_ref() == *alias))
        };

        let resolved = Field::ALL.map(|field| (field, find(field)));
        let missing: Vec<Field> = resolved
            .iter()
            .filter(|(_, idx)| idx.is_none())
            .map(|(field, _)| *field)
            .collect();

        match resolved {
            [
                (_, Some(name)),
                (_, Some(chromosome)),
                (_, Some(position)),
                (_, Some(p_value)),
            ] => Ok(Self {
                name,
                chromosome,
                position,
                p_value,
            }),
            _ => Err(SumstatError::MissingColumns { missing }),
        }
    }

    /// Column index for a field.
    pub const fn index(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name,
            Field::Chromosome => self.chromosome,
            Field::Position => self.position,
            Field::PValue => self.p_value,
        }
    }
}
