use super::{aggregate::all_items, range_text, unsigned, wire_u64, Codec};
use crate::{
    field::{Candidate, Canonical, ValidationErrorType},
    types::id::Id,
    value::ChangeValue,
};
use serde_json::Value;
use std::marker::PhantomData;

const ID_INPUT: &str = "int, str or id";

/// Accept one identifier. `0` and `null` mean unset.
fn accept_id<M>(candidate: &Candidate) -> Result<Option<Id<M>>, ValidationErrorType> {
    let value = match candidate {
        Candidate::Null => return Ok(None),
        Candidate::Integer(value) => unsigned(*value)?,
        Candidate::String(value) => {
            let value = value
                .parse::<i128>()
                .map_err(|_| ValidationErrorType::value_error("a decimal snowflake"))?;

            unsigned(value)?
        }
        Candidate::Domain(ChangeValue::Id(id)) => return Ok(Some(id.cast())),
        _ => return Err(ValidationErrorType::type_error(ID_INPUT)),
    };

    Ok(Id::new_checked(value))
}

fn decode_id<M>(raw: Option<&Value>) -> Option<Id<M>> {
    wire_u64(raw).and_then(Id::new_checked)
}

/// An optional identifier, a decimal string on the wire.
///
/// Input may be an integer or a decimal string; negative values are value
/// errors and floats are type errors.
pub struct IdCodec<M> {
    phantom: PhantomData<fn(M) -> M>,
}

impl<M> IdCodec<M> {
    pub const fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<M> Default for IdCodec<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Codec for IdCodec<M> {
    type Value = Option<Id<M>>;

    fn decode(&self, raw: Option<&Value>) -> Option<Id<M>> {
        decode_id(raw)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        wire_u64(Some(raw)).is_some()
    }

    fn encode(&self, value: &Option<Id<M>>) -> Value {
        value.map_or(Value::Null, |id| Value::String(id.to_string()))
    }

    fn is_default(&self, value: &Option<Id<M>>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<Id<M>>, ValidationErrorType> {
        accept_id(candidate)
    }
}

/// A set of identifiers, kept sorted ascending without duplicates.
pub struct IdArrayCodec<M> {
    canonical: Canonical,
    max_items: Option<usize>,
    phantom: PhantomData<fn(M) -> M>,
}

impl<M> IdArrayCodec<M> {
    pub const fn new() -> Self {
        Self {
            canonical: Canonical::EmptyAsNone,
            max_items: None,
            phantom: PhantomData,
        }
    }

    /// Bound the number of identifiers.
    pub const fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);

        self
    }

    fn finish(&self, mut ids: Vec<Id<M>>) -> Option<Vec<Id<M>>> {
        ids.sort_unstable();
        ids.dedup();

        self.canonical.normalize(Some(ids), Vec::is_empty)
    }
}

impl<M> Default for IdArrayCodec<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Codec for IdArrayCodec<M> {
    type Value = Option<Vec<Id<M>>>;

    fn decode(&self, raw: Option<&Value>) -> Option<Vec<Id<M>>> {
        let items = raw?.as_array()?;

        self.finish(items.iter().filter_map(|item| decode_id(Some(item))).collect())
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        all_items(raw, |item| wire_u64(Some(item)).is_some())
    }

    fn encode(&self, value: &Option<Vec<Id<M>>>) -> Value {
        match value {
            Some(ids) => ids.iter().map(|id| Value::String(id.to_string())).collect(),
            None => self.canonical.empty_array(),
        }
    }

    fn is_default(&self, value: &Option<Vec<Id<M>>>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<Vec<Id<M>>>, ValidationErrorType> {
        let ids = match candidate {
            Candidate::Null => return Ok(None),
            Candidate::Array(items) => items
                .iter()
                .filter_map(|item| accept_id(item).transpose())
                .collect::<Result<Vec<_>, _>>()?,
            Candidate::Domain(ChangeValue::Ids(ids)) => ids.iter().map(|id| id.cast()).collect(),
            _ => return Err(ValidationErrorType::type_error("array of ids")),
        };

        if let Some(max) = self.max_items {
            if ids.len() > max {
                return Err(ValidationErrorType::value_error(range_text(
                    None,
                    Some(max as i128),
                    " items",
                )));
            }
        }

        Ok(self.finish(ids))
    }
}
