//! Declaration model for parameterized fixtures.
//!
//! A fixture declaration carries the raw, ordered argument list supplied at
//! the declaration site, plus skip metadata and a human description. The
//! argument list may mix type selectors (for generic instantiation) with
//! plain constructor values; the split between the two is derived lazily on
//! first read and memoized, with an explicit override for declaration sites
//! where automatic inference is undesired.

use serde::{Deserialize, Serialize};

use crate::properties::PropertyStore;
use crate::value::Value;

/// A tagged value naming a type to instantiate a generic fixture with.
///
/// Selectors are ordinary data, not runtime type inspection: recognizing one
/// is a variant check, never a downcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSelector {
    #[serde(rename = "type")]
    pub name: String,
}

impl TypeSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One declared fixture argument: either a type selector or a plain value.
///
/// In manifest form a selector is written as a `{ type: Name }` map and a
/// value as its plain scalar or sequence form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureArg {
    Selector(TypeSelector),
    Value(Value),
}

impl FixtureArg {
    pub fn is_selector(&self) -> bool {
        matches!(self, FixtureArg::Selector(_))
    }

    pub fn as_selector(&self) -> Option<&TypeSelector> {
        match self {
            FixtureArg::Selector(selector) => Some(selector),
            FixtureArg::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FixtureArg::Selector(_) => None,
            FixtureArg::Value(value) => Some(value),
        }
    }
}

impl From<TypeSelector> for FixtureArg {
    fn from(selector: TypeSelector) -> Self {
        FixtureArg::Selector(selector)
    }
}

impl From<Value> for FixtureArg {
    fn from(value: Value) -> Self {
        FixtureArg::Value(value)
    }
}

/// The memoized outcome of splitting a raw argument list.
///
/// `None` on the declaration means the split has not run yet; `Some` means it
/// has run (or was overridden) and will not run again.
#[derive(Debug, Clone)]
struct Partitioned {
    type_args: Vec<TypeSelector>,
    constructor_args: Vec<FixtureArg>,
}

/// A parameterized fixture declaration.
///
/// Populated once at the declaration site, then read by whatever instantiates
/// the fixture. The lazy getters take `&mut self`: the split mutates the
/// memo, and exclusive access is the caller's responsibility.
///
/// ```rust
/// use trellis::{FixtureArg, FixtureDeclaration, TypeSelector, Value};
///
/// let mut decl = FixtureDeclaration::new(vec![
///     TypeSelector::new("Int").into(),
///     Value::Number(5.0).into(),
/// ]);
/// assert_eq!(decl.type_args(), [TypeSelector::new("Int")]);
/// assert_eq!(decl.constructor_args(), [FixtureArg::Value(Value::Number(5.0))]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureDeclaration {
    raw: Vec<FixtureArg>,
    partition: Option<Partitioned>,
    description: Option<String>,
    ignore_reason: Option<String>,
    ignored: bool,
}

impl FixtureDeclaration {
    /// Creates a declaration from the raw argument list supplied at the
    /// declaration site. A declaration with no arguments is `Self::default()`.
    ///
    /// No splitting happens here; it runs on the first read of
    /// [`type_args`](Self::type_args) or
    /// [`constructor_args`](Self::constructor_args).
    pub fn new(raw: Vec<FixtureArg>) -> Self {
        Self {
            raw,
            ..Self::default()
        }
    }

    /// The arguments exactly as declared, selectors and values interleaved.
    pub fn raw_args(&self) -> &[FixtureArg] {
        &self.raw
    }

    /// The leading run of type selectors, derived on first read.
    pub fn type_args(&mut self) -> &[TypeSelector] {
        &self.partitioned().type_args
    }

    /// The arguments remaining after the type-selector prefix, derived on
    /// first read. A selector that appears after a plain value stays here.
    pub fn constructor_args(&mut self) -> &[FixtureArg] {
        &self.partitioned().constructor_args
    }

    /// Replaces the derived type arguments and marks the split as already
    /// done. The raw and constructor argument lists are left exactly as they
    /// were at the time of the call; a caller overriding the split owns the
    /// consistency of the result.
    pub fn set_type_args(&mut self, type_args: Vec<TypeSelector>) {
        let constructor_args = match self.partition.take() {
            Some(partitioned) => partitioned.constructor_args,
            None => self.raw.clone(),
        };
        self.partition = Some(Partitioned {
            type_args,
            constructor_args,
        });
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = Some(text.into());
    }

    /// Whether the fixture should be skipped by the instantiation engine.
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Sets the skip flag directly, leaving any recorded reason in place.
    pub fn set_ignored(&mut self, ignored: bool) {
        self.ignored = ignored;
    }

    pub fn ignore_reason(&self) -> Option<&str> {
        self.ignore_reason.as_deref()
    }

    /// Records why the fixture is skipped. A non-empty reason marks the
    /// fixture ignored; an empty or absent one clears the flag.
    pub fn set_ignore_reason(&mut self, reason: Option<String>) {
        self.ignored = reason.as_deref().is_some_and(|r| !r.is_empty());
        self.ignore_reason = reason;
    }

    /// Copies the description into `properties` under `key`, only if the
    /// store does not already hold that key and a description exists.
    /// Repeated calls have no further effect after the first write.
    pub fn apply_description<P: PropertyStore + ?Sized>(&self, properties: &mut P, key: &str) {
        if properties.contains(key) {
            return;
        }
        if let Some(text) = self.description.as_deref() {
            properties.set(key, Value::String(text.to_owned()));
        }
    }

    /// Splits the raw list on first call; later calls return the memo.
    ///
    /// The split is a single left-to-right scan: the maximal prefix of type
    /// selectors becomes the type arguments, the suffix becomes the
    /// constructor arguments, and their concatenation is the raw list.
    fn partitioned(&mut self) -> &Partitioned {
        let raw = &self.raw;
        self.partition.get_or_insert_with(|| {
            let split = raw.iter().take_while(|arg| arg.is_selector()).count();
            Partitioned {
                type_args: raw[..split]
                    .iter()
                    .filter_map(FixtureArg::as_selector)
                    .cloned()
                    .collect(),
                constructor_args: raw[split..].to_vec(),
            }
        })
    }
}
