// Copyright (c) 2025 - Cowboy AI, Inc.
//! Managed Resource Entity
//!
//! A resource is one typed, named unit of desired state as produced by a
//! manifest statement: a [`Reference`] for identity, an ordered parameter
//! store, a tag set and source-location metadata.
//!
//! # Namevar handling
//!
//! When the resource is bound to a registered type, the `name` parameter is
//! an alias for the type's namevar. Writing `name` stores under the namevar
//! and reading `name` returns the namevar value, falling back to the title.
//! Unbound resources treat `name` as an ordinary parameter.

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, trace};

use super::{CatalogId, ParameterKey, Parameters, Reference, TagSet, Tagging, Value};
use crate::errors::{ResourceError, ResourceResult};
use crate::registry::{namevar_for, TypeRegistry};

/// A managed resource
///
/// # Invariants
/// - Type and title are non-empty and never change
/// - Parameter keys are canonical [`ParameterKey`]s
/// - The type name is always a tag; the title is a tag only if it is a valid tag name
///
/// # Examples
///
/// ```rust
/// use cim_resource::{Resource, Tagging};
///
/// let mut resource = Resource::new("file", "/etc/motd").unwrap();
/// resource.set("Owner", "root");
///
/// assert_eq!(resource.to_ref(), "File[/etc/motd]");
/// assert_eq!(resource.get("owner").unwrap().as_str(), Some("root"));
/// assert!(resource.is_tagged("file"));
/// ```
#[derive(Debug, Clone)]
pub struct Resource {
    reference: Reference,
    parameters: Parameters,
    tags: TagSet,
    namevar: Option<ParameterKey>,
    file: Option<String>,
    line: Option<u32>,
    implicit: bool,
    exported: bool,
    virtual_: bool,
    catalog: Option<CatalogId>,
}

impl Resource {
    /// Create a resource that is not bound to any registered type
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> ResourceResult<Self> {
        Self::builder().kind(kind).title(title).build()
    }

    /// Create a resource bound to its type in `types`
    ///
    /// If the registry has no entry for the type, the resource is unbound.
    pub fn with_types<R: TypeRegistry + ?Sized>(
        kind: impl Into<String>,
        title: impl Into<String>,
        types: &R,
    ) -> ResourceResult<Self> {
        Self::builder().kind(kind).title(title).types(types).build()
    }

    /// Builder pattern for fluent construction
    pub fn builder<'a>() -> ResourceBuilder<'a> {
        ResourceBuilder::default()
    }

    fn from_parts(reference: Reference, namevar: Option<ParameterKey>) -> Self {
        let mut tags = TagSet::new();
        for candidate in [reference.kind(), reference.title()] {
            if tags.insert(candidate).is_err() {
                debug!(tag = candidate, "Skipping automatic tag");
            }
        }

        Self {
            reference,
            parameters: Parameters::new(),
            tags,
            namevar,
            file: None,
            line: None,
            implicit: false,
            exported: false,
            virtual_: false,
            catalog: None,
        }
    }

    // ==================== Identity ====================

    /// Resource type name
    pub fn kind(&self) -> &str {
        self.reference.kind()
    }

    /// Resource title
    pub fn title(&self) -> &str {
        self.reference.title()
    }

    /// Identity of this resource
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Reference string, `Type[title]`
    pub fn to_ref(&self) -> String {
        self.reference.to_string()
    }

    // ==================== Type binding ====================

    /// Check if the resource is bound to a registered type
    pub fn is_builtin(&self) -> bool {
        self.namevar.is_some()
    }

    /// Namevar of the bound type
    pub fn namevar(&self) -> Option<&ParameterKey> {
        self.namevar.as_ref()
    }

    /// Bind (or rebind) the resource to its type in `types`
    ///
    /// A value stored under a plain `name` key moves to the namevar slot
    /// unless that slot is already set.
    pub fn bind_types<R: TypeRegistry + ?Sized>(&mut self, types: &R) {
        self.namevar = namevar_for(types, self.kind());

        let Some(namevar) = self.namevar.clone() else {
            debug!(resource = %self.reference, "Type not registered, resource left unbound");
            return;
        };

        if !namevar.is_name() && !self.parameters.contains_key(&namevar) {
            if let Some(value) = self.parameters.remove(ParameterKey::NAME) {
                trace!(resource = %self.reference, namevar = %namevar, "Moving name to namevar");
                self.parameters.insert(namevar, value);
            }
        }
    }

    /// Resolve a caller-supplied key to its storage slot
    fn parameter_key(&self, key: impl Into<ParameterKey>) -> ParameterKey {
        let key = key.into();
        match &self.namevar {
            Some(namevar) if key.is_name() => namevar.clone(),
            _ => key,
        }
    }

    // ==================== Parameters ====================

    /// Read a parameter
    ///
    /// For bound resources, `name` reads the namevar and falls back to the
    /// title when the namevar is unset.
    pub fn get(&self, key: impl Into<ParameterKey>) -> Option<Cow<'_, Value>> {
        let key = key.into();

        if let Some(namevar) = self.namevar.as_ref().filter(|_| key.is_name()) {
            let value = match self.parameters.get(namevar) {
                Some(value) => Cow::Borrowed(value),
                None => Cow::Owned(Value::from(self.title())),
            };
            return Some(value);
        }

        self.parameters.get(key).map(Cow::Borrowed)
    }

    /// Write a parameter, returning the previous value
    pub fn set(&mut self, key: impl Into<ParameterKey>, value: impl Into<Value>) -> Option<Value> {
        let key = self.parameter_key(key);
        self.parameters.insert(key, value)
    }

    /// Check if a parameter has been set
    pub fn contains_key(&self, key: impl Into<ParameterKey>) -> bool {
        self.parameters.contains_key(self.parameter_key(key))
    }

    /// Remove a parameter; removing an absent key is a no-op
    pub fn remove(&mut self, key: impl Into<ParameterKey>) -> Option<Value> {
        let key = self.parameter_key(key);
        self.parameters.remove(key)
    }

    /// Parameter names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &ParameterKey> {
        self.parameters.keys()
    }

    /// Parameters in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, ParameterKey, Value> {
        self.parameters.iter()
    }

    /// Number of parameters set
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Borrow the stored parameters
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Owned copy of the parameters with the identity parameter defaulted
    ///
    /// The namevar (bound) or `name` (unbound) is filled with the title when
    /// unset. Changes to the returned map never reach the resource.
    pub fn to_map(&self) -> Parameters {
        let mut map = self.parameters.clone();
        let identity = self
            .namevar
            .clone()
            .unwrap_or_else(|| ParameterKey::new(ParameterKey::NAME));

        if !map.contains_key(&identity) {
            map.insert(identity, self.title());
        }
        map
    }

    // ==================== Metadata ====================

    /// Manifest file the resource was declared in
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Set the declaring manifest file
    pub fn set_file(&mut self, file: impl Into<String>) {
        self.file = Some(file.into());
    }

    /// Line of the declaration
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Set the declaration line
    pub fn set_line(&mut self, line: u32) {
        self.line = Some(line);
    }

    /// Check if the resource was generated rather than declared
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Mark the resource as generated
    pub fn set_implicit(&mut self, implicit: bool) {
        self.implicit = implicit;
    }

    /// Check if the resource is exported for collection by other nodes
    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Mark the resource as exported
    pub fn set_exported(&mut self, exported: bool) {
        self.exported = exported;
    }

    /// Check if the resource is virtual (declared but not realized)
    pub fn is_virtual(&self) -> bool {
        self.virtual_
    }

    /// Mark the resource as virtual
    pub fn set_virtual(&mut self, virtual_: bool) {
        self.virtual_ = virtual_;
    }

    // ==================== Catalog ====================

    /// Owning catalog, if attached
    pub fn catalog(&self) -> Option<CatalogId> {
        self.catalog
    }

    /// Attach the resource to a catalog
    pub fn attach_to(&mut self, catalog: CatalogId) {
        self.catalog = Some(catalog);
    }

    /// Detach the resource from its catalog
    pub fn detach(&mut self) -> Option<CatalogId> {
        self.catalog.take()
    }

    /// Check if the resource belongs to a catalog
    pub fn is_attached(&self) -> bool {
        self.catalog.is_some()
    }
}

impl Tagging for Resource {
    fn tag_set(&self) -> &TagSet {
        &self.tags
    }

    fn tag_set_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference && self.parameters == other.parameters
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference)
    }
}

impl<'a> IntoIterator for &'a Resource {
    type Item = (&'a ParameterKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ParameterKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

type NamevarResolver<'a> = Box<dyn Fn(&str) -> Option<ParameterKey> + 'a>;

/// Builder for [`Resource`] with fluent API
///
/// `build` fails with [`ResourceError::Arity`] if the type or title was
/// never supplied. Initial parameters go through [`Resource::set`], so a
/// `name` parameter lands in the namevar slot of a bound type.
#[derive(Default)]
pub struct ResourceBuilder<'a> {
    kind: Option<String>,
    title: Option<String>,
    parameters: Vec<(ParameterKey, Value)>,
    tags: Vec<String>,
    resolver: Option<NamevarResolver<'a>>,
    file: Option<String>,
    line: Option<u32>,
    implicit: bool,
    exported: bool,
    virtual_: bool,
    catalog: Option<CatalogId>,
}

impl<'a> ResourceBuilder<'a> {
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Bind the resource to its type in `types`
    pub fn types<R: TypeRegistry + ?Sized>(mut self, types: &'a R) -> Self {
        self.resolver = Some(Box::new(move |kind| namevar_for(types, kind)));
        self
    }

    pub fn parameter(mut self, key: impl Into<ParameterKey>, value: impl Into<Value>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }

    pub fn parameters<K, V>(mut self, parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<ParameterKey>,
        V: Into<Value>,
    {
        self.parameters
            .extend(parameters.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn implicit(mut self, implicit: bool) -> Self {
        self.implicit = implicit;
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn virtual_(mut self, virtual_: bool) -> Self {
        self.virtual_ = virtual_;
        self
    }

    pub fn catalog(mut self, catalog: CatalogId) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> ResourceResult<Resource> {
        let kind = self.kind.ok_or(ResourceError::missing("type"))?;
        let title = self.title.ok_or(ResourceError::missing("title"))?;
        let reference = Reference::new(kind, title)?;

        let namevar = self.resolver.and_then(|resolve| resolve(reference.kind()));
        let mut resource = Resource::from_parts(reference, namevar);

        for (key, value) in self.parameters {
            resource.set(key, value);
        }
        for tag in &self.tags {
            resource.tag(tag)?;
        }

        resource.file = self.file;
        resource.line = self.line;
        resource.implicit = self.implicit;
        resource.exported = self.exported;
        resource.virtual_ = self.virtual_;
        resource.catalog = self.catalog;

        Ok(resource)
    }
}

impl fmt::Debug for ResourceBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBuilder")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("parameters", &self.parameters)
            .field("bound", &self.resolver.is_some())
            .finish_non_exhaustive()
    }
}
