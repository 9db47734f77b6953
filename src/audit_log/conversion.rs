//! Conversion entries and the groups that index them.

use super::{
    converters::{GetConverter, PutConverter, Validator},
    domain::value_domain,
};
use crate::{
    field::{Candidate, Canonical, ValidationError},
    value::{ChangeValue, ValueDomain},
};
use serde_json::Value;
use std::{
    collections::HashMap,
    error::Error,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

/// The converter triplet of one audited attribute within one group.
///
/// Entries are declared as `static`s and never change afterwards. Groups
/// refer to them by `&'static` reference, so an entry shared by several
/// groups exists once.
#[derive(Clone, Copy)]
pub struct ConversionEntry {
    attribute_name: &'static str,
    wire_key: &'static str,
    domain: ValueDomain,
    get_converter: GetConverter,
    put_converter: PutConverter,
    validator: Validator,
}

impl ConversionEntry {
    pub const fn new(
        attribute_name: &'static str,
        wire_key: &'static str,
        domain: ValueDomain,
        get_converter: GetConverter,
        put_converter: PutConverter,
        validator: Validator,
    ) -> Self {
        Self {
            attribute_name,
            wire_key,
            domain,
            get_converter,
            put_converter,
            validator,
        }
    }

    pub const fn attribute_name(&self) -> &'static str {
        self.attribute_name
    }

    /// Key the attribute is reported under in audit log changes.
    pub const fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    /// Domain of the values the get converter produces.
    pub const fn domain(&self) -> ValueDomain {
        self.domain
    }

    pub const fn get_converter(&self) -> GetConverter {
        self.get_converter
    }

    pub const fn put_converter(&self) -> PutConverter {
        self.put_converter
    }

    pub const fn validator(&self) -> Validator {
        self.validator
    }
}

impl Debug for ConversionEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ConversionEntry")
            .field("attribute_name", &self.attribute_name)
            .field("wire_key", &self.wire_key)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ConversionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.attribute_name == other.attribute_name
            && self.wire_key == other.wire_key
            && self.domain == other.domain
            && self.get_converter as usize == other.get_converter as usize
            && self.put_converter as usize == other.put_converter as usize
            && self.validator as usize == other.validator as usize
    }
}

impl Eq for ConversionEntry {}

/// Declare a `static` [`ConversionEntry`] backed by a field.
///
/// ```ignore
/// conversion!(static POSITION = role::fields::POSITION => Integer;);
/// ```
macro_rules! conversion {
    ($( $(#[$meta:meta])* $vis:vis static $name:ident = $field:path => $domain:ident; )+) => {
        $(
            $(#[$meta])*
            $vis static $name: $crate::audit_log::ConversionEntry =
                $crate::audit_log::ConversionEntry::new(
                    $field.name(),
                    $field.key(),
                    $crate::value::ValueDomain::$domain,
                    {
                        fn get(
                            raw: Option<&::serde_json::Value>,
                        ) -> Option<$crate::value::ChangeValue> {
                            $field.parse_change(raw)
                        }

                        get
                    },
                    $crate::audit_log::converters::put_change,
                    {
                        fn validate(
                            candidate: $crate::field::Candidate,
                        ) -> Result<Option<$crate::value::ChangeValue>, $crate::field::ValidationError>
                        {
                            $field.validate_change(candidate)
                        }

                        validate
                    },
                );
        )+
    };
}

pub(crate) use conversion;

/// Side of a change a wire key's value belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Placement {
    /// The key reports the attribute itself.
    Direct,
    /// The key reports values added to the attribute. They are the `after`
    /// side.
    Added,
    /// The key reports values removed from the attribute. They are the
    /// `before` side.
    Removed,
}

/// An entry resolved through a group, with the rules the group applies to
/// it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolved {
    entry: &'static ConversionEntry,
    placement: Placement,
    canonical: Canonical,
}

impl Resolved {
    pub const fn entry(&self) -> &'static ConversionEntry {
        self.entry
    }

    pub const fn placement(&self) -> Placement {
        self.placement
    }

    pub const fn canonical(&self) -> Canonical {
        self.canonical
    }

    /// Read one side of a change.
    pub fn get(&self, raw: Option<&Value>) -> Option<ChangeValue> {
        self.canonical
            .normalize_change((self.entry.get_converter)(raw))
    }

    /// Write one side of a change.
    ///
    /// An unset sequence attribute that treats empty as unset is written as
    /// `[]`.
    pub fn put(&self, value: Option<&ChangeValue>) -> Value {
        match value {
            None if self.entry.domain.is_sequence() => self.canonical.empty_array(),
            value => (self.entry.put_converter)(value),
        }
    }

    /// Validate external input for one side of a change.
    ///
    /// # Errors
    ///
    /// Returns the field's [`ValidationError`].
    pub fn validate(
        &self,
        candidate: impl Into<Candidate>,
    ) -> Result<Option<ChangeValue>, ValidationError> {
        (self.entry.validator)(candidate.into())
            .map(|value| self.canonical.normalize_change(value))
    }
}

/// The conversions of one entity kind, indexed by wire key and by attribute
/// name.
#[derive(Clone, Debug)]
pub struct ConversionGroup {
    name: &'static str,
    entries: Vec<&'static ConversionEntry>,
    by_key: HashMap<&'static str, Resolved>,
    by_name: HashMap<&'static str, Resolved>,
    aliases: HashMap<(&'static str, Placement), &'static str>,
}

impl ConversionGroup {
    pub fn builder(name: &'static str) -> ConversionGroupBuilder {
        ConversionGroupBuilder::new(name)
    }

    /// Name of the group, used in diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &'static ConversionEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a wire key, aliases included.
    pub fn get_converter(&self, wire_key: &str) -> Option<Resolved> {
        self.by_key.get(wire_key).copied()
    }

    /// Resolve an attribute name for writing.
    pub fn put_converter(&self, attribute_name: &str) -> Option<Resolved> {
        self.by_name.get(attribute_name).copied()
    }

    /// Resolve an attribute name for validation.
    pub fn validator(&self, attribute_name: &str) -> Option<Resolved> {
        self.put_converter(attribute_name)
    }

    /// Every wire key the group understands, aliases included.
    pub fn get_converters(&self) -> impl Iterator<Item = (&'static str, Resolved)> + '_ {
        self.by_key.iter().map(|(key, resolved)| (*key, *resolved))
    }

    /// Every attribute name the group can write.
    pub fn put_converters(&self) -> impl Iterator<Item = (&'static str, Resolved)> + '_ {
        self.by_name.iter().map(|(name, resolved)| (*name, *resolved))
    }

    /// Every attribute name the group can validate.
    pub fn validators(&self) -> impl Iterator<Item = (&'static str, Resolved)> + '_ {
        self.put_converters()
    }

    /// Wire key reporting added or removed values of an attribute.
    pub fn alias(&self, attribute_name: &str, placement: Placement) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|((name, alias_placement), _)| {
                *name == attribute_name && *alias_placement == placement
            })
            .map(|(_, key)| *key)
    }
}

/// Collects the entries and aliases of a [`ConversionGroup`].
#[derive(Clone, Debug)]
#[must_use = "builders have no effect if unused"]
pub struct ConversionGroupBuilder {
    name: &'static str,
    entries: Vec<&'static ConversionEntry>,
    aliases: Vec<(&'static str, &'static str, Placement)>,
}

impl ConversionGroupBuilder {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
            aliases: Vec::new(),
        }
    }

    pub fn entry(mut self, entry: &'static ConversionEntry) -> Self {
        self.entries.push(entry);

        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = &'static ConversionEntry>) -> Self {
        self.entries.extend(entries);

        self
    }

    /// Report values under `wire_key` as values added to or removed from
    /// `attribute_name`.
    pub fn alias(
        mut self,
        wire_key: &'static str,
        attribute_name: &'static str,
        placement: Placement,
    ) -> Self {
        self.aliases.push((wire_key, attribute_name, placement));

        self
    }

    /// Index the group.
    ///
    /// Registering the same entry twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryErrorType::DuplicateAttribute`] or
    /// [`RegistryErrorType::DuplicateKey`] error if two different entries
    /// claim the same attribute or wire key.
    ///
    /// Returns a [`RegistryErrorType::UnknownAttribute`] error if an
    /// attribute is missing from the value domain table, and a
    /// [`RegistryErrorType::InadmissibleDomain`] error if the table does not
    /// admit the entry's domain.
    ///
    /// Returns a [`RegistryErrorType::UnknownAliasTarget`] error if an alias
    /// names an attribute without an entry.
    pub fn build(self) -> Result<ConversionGroup, RegistryError> {
        let group = self.name;
        let mut entries = Vec::with_capacity(self.entries.len());
        let mut by_key = HashMap::with_capacity(self.entries.len() + self.aliases.len());
        let mut by_name = HashMap::with_capacity(self.entries.len());

        for entry in self.entries {
            let name = entry.attribute_name();

            if let Some(existing) = by_name.get(name).map(|resolved: &Resolved| resolved.entry) {
                if existing == entry {
                    continue;
                }

                return Err(RegistryError::new(
                    group,
                    RegistryErrorType::DuplicateAttribute { name },
                ));
            }

            let rule = value_domain(name).ok_or_else(|| {
                RegistryError::new(group, RegistryErrorType::UnknownAttribute { name })
            })?;

            if !rule.admits(entry.domain()) {
                return Err(RegistryError::new(
                    group,
                    RegistryErrorType::InadmissibleDomain {
                        name,
                        domain: entry.domain(),
                    },
                ));
            }

            let resolved = Resolved {
                entry,
                placement: Placement::Direct,
                canonical: rule.canonical,
            };

            if by_key.insert(entry.wire_key(), resolved).is_some() {
                return Err(RegistryError::new(
                    group,
                    RegistryErrorType::DuplicateKey {
                        key: entry.wire_key(),
                    },
                ));
            }

            by_name.insert(name, resolved);
            entries.push(entry);
        }

        let mut aliases = HashMap::with_capacity(self.aliases.len());

        for (key, name, placement) in self.aliases {
            let target = by_name.get(name).copied().ok_or_else(|| {
                RegistryError::new(
                    group,
                    RegistryErrorType::UnknownAliasTarget { alias: key, name },
                )
            })?;

            if by_key
                .insert(key, Resolved { placement, ..target })
                .is_some()
            {
                return Err(RegistryError::new(
                    group,
                    RegistryErrorType::DuplicateKey { key },
                ));
            }

            aliases.insert((name, placement), key);
        }

        Ok(ConversionGroup {
            name: group,
            entries,
            by_key,
            by_name,
            aliases,
        })
    }
}

/// A conversion group could not be built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryError {
    group: &'static str,
    kind: RegistryErrorType,
}

impl RegistryError {
    const fn new(group: &'static str, kind: RegistryErrorType) -> Self {
        Self { group, kind }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &RegistryErrorType {
        &self.kind
    }

    /// Name of the group that failed to build.
    pub const fn group(&self) -> &'static str {
        self.group
    }

    /// Consume the error, returning the group name and the owned error type.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (&'static str, RegistryErrorType) {
        (self.group, self.kind)
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("conversion group `")?;
        f.write_str(self.group)?;
        f.write_str("`: ")?;

        match &self.kind {
            RegistryErrorType::DuplicateAttribute { name } => {
                write!(f, "attribute `{name}` is registered with two entries")
            }
            RegistryErrorType::DuplicateKey { key } => {
                write!(f, "wire key `{key}` is claimed by two entries")
            }
            RegistryErrorType::UnknownAttribute { name } => {
                write!(f, "attribute `{name}` is missing from the value domain table")
            }
            RegistryErrorType::InadmissibleDomain { name, domain } => write!(
                f,
                "attribute `{name}` does not admit {} values",
                domain.name()
            ),
            RegistryErrorType::UnknownAliasTarget { alias, name } => {
                write!(f, "alias `{alias}` targets unregistered attribute `{name}`")
            }
        }
    }
}

impl Error for RegistryError {}

/// Type of [`RegistryError`] that occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum RegistryErrorType {
    /// Two different entries share an attribute name.
    DuplicateAttribute { name: &'static str },
    /// Two different entries or aliases share a wire key.
    DuplicateKey { key: &'static str },
    /// The attribute is not in the value domain table.
    UnknownAttribute { name: &'static str },
    /// The entry produces a domain the table does not admit.
    InadmissibleDomain {
        name: &'static str,
        domain: ValueDomain,
    },
    /// An alias names an attribute without an entry.
    UnknownAliasTarget {
        alias: &'static str,
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::{
        conversion, ConversionEntry, ConversionGroup, Placement, RegistryErrorType,
    };
    use crate::{
        field::{BoolCodec, Field, IdArrayCodec, IntCodec, StringCodec},
        types::id::{marker::RoleMarker, Id},
        value::ChangeValue,
    };
    use serde_json::{json, Value};
    use static_assertions::assert_impl_all;

    const POSITION: Field<IntCodec> = Field::named("position", IntCodec::new(0).min(0));
    const OTHER_POSITION: Field<IntCodec> = Field::named("position", IntCodec::new(0));
    const SEPARATED: Field<BoolCodec> = Field::new("separated", "hoist", BoolCodec::new(false));
    const HOIST: Field<BoolCodec> = Field::named("hoist", BoolCodec::new(false));
    const UNKNOWN: Field<BoolCodec> = Field::named("not_a_real_attribute", BoolCodec::new(false));
    const NAME: Field<StringCodec> = Field::named("name", StringCodec::new());
    const ROLE_IDS: Field<IdArrayCodec<RoleMarker>> =
        Field::named("role_ids", IdArrayCodec::new());

    conversion! {
        static POSITION_ENTRY = POSITION => Integer;
        static OTHER_POSITION_ENTRY = OTHER_POSITION => Integer;
        static SEPARATED_ENTRY = SEPARATED => Bool;
        static HOIST_ENTRY = HOIST => Bool;
        static UNKNOWN_ENTRY = UNKNOWN => Bool;
        static NAME_AS_BOOL = NAME => Bool;
        static ROLE_IDS_ENTRY = ROLE_IDS => Ids;
    }

    assert_impl_all!(ConversionEntry: Send, Sync);
    assert_impl_all!(ConversionGroup: Send, Sync);

    #[test]
    fn entry_equality() {
        let copy: ConversionEntry = POSITION_ENTRY;

        assert_eq!(copy, POSITION_ENTRY);
        assert_ne!(POSITION_ENTRY, OTHER_POSITION_ENTRY);
    }

    #[test]
    fn identical_entries_are_deduplicated() {
        let group = ConversionGroup::builder("test")
            .entry(&POSITION_ENTRY)
            .entry(&POSITION_ENTRY)
            .build()
            .unwrap();

        assert_eq!(group.len(), 1);
    }

    #[test]
    fn conflicting_entries_fail() {
        let err = ConversionGroup::builder("test")
            .entry(&POSITION_ENTRY)
            .entry(&OTHER_POSITION_ENTRY)
            .build()
            .unwrap_err();

        assert_eq!(err.group(), "test");
        assert_eq!(
            err.kind(),
            &RegistryErrorType::DuplicateAttribute { name: "position" }
        );
    }

    #[test]
    fn conflicting_keys_fail() {
        let err = ConversionGroup::builder("test")
            .entry(&SEPARATED_ENTRY)
            .entry(&HOIST_ENTRY)
            .build()
            .unwrap_err();

        assert!(matches!(err.kind(), RegistryErrorType::UnknownAttribute { name: "hoist" }));

        let err = ConversionGroup::builder("test")
            .entry(&SEPARATED_ENTRY)
            .alias("hoist", "separated", Placement::Added)
            .build()
            .unwrap_err();

        assert_eq!(err.kind(), &RegistryErrorType::DuplicateKey { key: "hoist" });
    }

    #[test]
    fn table_is_enforced() {
        let err = ConversionGroup::builder("test")
            .entry(&UNKNOWN_ENTRY)
            .build()
            .unwrap_err();
        assert!(matches!(err.kind(), RegistryErrorType::UnknownAttribute { .. }));

        let err = ConversionGroup::builder("test")
            .entry(&NAME_AS_BOOL)
            .build()
            .unwrap_err();
        assert!(matches!(err.kind(), RegistryErrorType::InadmissibleDomain { name: "name", .. }));
        assert_eq!(
            err.to_string(),
            "conversion group `test`: attribute `name` does not admit bool values"
        );
    }

    #[test]
    fn unknown_alias_target() {
        let err = ConversionGroup::builder("test")
            .alias("$add", "roles", Placement::Added)
            .build()
            .unwrap_err();

        assert_eq!(
            err.kind(),
            &RegistryErrorType::UnknownAliasTarget {
                alias: "$add",
                name: "roles",
            }
        );
    }

    #[test]
    fn resolution() {
        let group = ConversionGroup::builder("test")
            .entries([&SEPARATED_ENTRY, &ROLE_IDS_ENTRY])
            .alias("$add_role_ids", "role_ids", Placement::Added)
            .build()
            .unwrap();

        let separated = group.get_converter("hoist").unwrap();
        assert_eq!(separated.entry().attribute_name(), "separated");
        assert_eq!(separated.get(Some(&json!(true))), Some(ChangeValue::Bool(true)));
        assert!(group.get_converter("separated").is_none());
        assert!(group.put_converter("separated").is_some());

        let added = group.get_converter("$add_role_ids").unwrap();
        assert_eq!(added.placement(), Placement::Added);
        assert_eq!(group.alias("role_ids", Placement::Added), Some("$add_role_ids"));
        assert_eq!(group.alias("role_ids", Placement::Removed), None);
        assert_eq!(group.get_converters().count(), 3);
        assert_eq!(group.validators().count(), 2);
    }

    #[test]
    fn canonical_rules_apply() {
        let group = ConversionGroup::builder("test")
            .entry(&ROLE_IDS_ENTRY)
            .build()
            .unwrap();
        let role_ids = group.put_converter("role_ids").unwrap();

        assert_eq!(role_ids.get(Some(&json!([]))), None);
        assert_eq!(role_ids.put(None), json!([]));
        assert_eq!(
            role_ids.validate(vec!["2", "1"]),
            Ok(Some(ChangeValue::Ids(vec![Id::new(1), Id::new(2)])))
        );
        assert_eq!(role_ids.validate(Vec::<u64>::new()), Ok(None));
        assert!(role_ids.validate(1.5).is_err());
    }

    #[test]
    fn validation_goes_through_the_field() {
        let group = ConversionGroup::builder("test")
            .entry(&POSITION_ENTRY)
            .build()
            .unwrap();
        let position = group.validator("position").unwrap();

        assert_eq!(position.validate(1), Ok(Some(ChangeValue::Integer(1))));
        assert!(position.validate(-1).unwrap_err().is_value());
        assert_eq!(position.put(None), Value::Null);
    }
}
