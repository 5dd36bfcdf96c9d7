// Identifier types. Registry and tag keys are typed so a biome key cannot
// be handed to a dimension lookup by accident.

use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A namespaced identifier, `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    /// Namespace half, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// Path half, may contain `/` separators.
    pub path: Cow<'static, str>,
}

impl ResourceLocation {
    /// Namespace of everything the base game ships.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";
    /// Namespace of cross-project conventions, mostly tags.
    pub const COMMON_NAMESPACE: &'static str = "c";

    /// An identifier in the vanilla namespace.
    #[must_use]
    pub fn vanilla(path: String) -> Self {
        ResourceLocation {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Owned(path),
        }
    }

    /// An identifier in the vanilla namespace, usable in constants.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        ResourceLocation {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// An identifier in the `c` convention namespace, usable in constants.
    #[must_use]
    pub const fn common_static(path: &'static str) -> Self {
        ResourceLocation {
            namespace: Cow::Borrowed(Self::COMMON_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Whether `namespace_char` may appear in a namespace.
    #[must_use]
    pub fn valid_namespace_char(namespace_char: char) -> bool {
        namespace_char == '_'
            || namespace_char == '-'
            || namespace_char.is_ascii_lowercase()
            || namespace_char.is_ascii_digit()
            || namespace_char == '.'
    }

    /// Whether `path_char` may appear in a path.
    #[must_use]
    pub fn valid_path_char(path_char: char) -> bool {
        path_char == '_'
            || path_char == '-'
            || path_char.is_ascii_lowercase()
            || path_char.is_ascii_digit()
            || path_char == '/'
            || path_char == '.'
    }

    /// Whether `namespace` is a well-formed namespace.
    #[must_use]
    pub fn validate_namespace(namespace: &str) -> bool {
        !namespace.is_empty() && namespace.chars().all(Self::valid_namespace_char)
    }

    /// Whether `path` is a well-formed path.
    #[must_use]
    pub fn validate_path(path: &str) -> bool {
        !path.is_empty() && path.chars().all(Self::valid_path_char)
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, path)) = s.split_once(':') else {
            return Err(format!("Invalid resource location: {s}"));
        };

        if !ResourceLocation::validate_namespace(namespace) {
            return Err(format!("Invalid namespace: {namespace}"));
        }

        if !ResourceLocation::validate_path(path) {
            return Err(format!("Invalid path: {path}"));
        }

        Ok(ResourceLocation {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Identity of one entry of one registry.
///
/// The marker type `T` only exists at compile time; keys for different
/// registries never compare equal to each other by construction.
pub struct ResourceKey<T> {
    registry: ResourceLocation,
    location: ResourceLocation,
    // fn() so the marker never affects Send/Sync
    _marker: PhantomData<fn() -> T>,
}

impl<T> ResourceKey<T> {
    /// A key for `location` inside `registry`.
    #[must_use]
    pub const fn new(registry: ResourceLocation, location: ResourceLocation) -> Self {
        ResourceKey {
            registry,
            location,
            _marker: PhantomData,
        }
    }

    /// A key for a vanilla entry, usable in constants.
    #[must_use]
    pub const fn vanilla(registry: ResourceLocation, path: &'static str) -> Self {
        Self::new(registry, ResourceLocation::vanilla_static(path))
    }

    /// Name of the registry this key belongs to.
    #[must_use]
    pub const fn registry(&self) -> &ResourceLocation {
        &self.registry
    }

    /// Identifier of the entry inside the registry.
    #[must_use]
    pub const fn location(&self) -> &ResourceLocation {
        &self.location
    }
}

// Manual impls: the marker type must not pick up trait bounds.

impl<T> Clone for ResourceKey<T> {
    fn clone(&self) -> Self {
        Self::new(self.registry.clone(), self.location.clone())
    }
}

impl<T> fmt::Debug for ResourceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceKey[{} / {}]", self.registry, self.location)
    }
}

impl<T> Display for ResourceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.location, f)
    }
}

impl<T> PartialEq for ResourceKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.registry == other.registry && self.location == other.location
    }
}

impl<T> Eq for ResourceKey<T> {}

impl<T> Hash for ResourceKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.registry.hash(state);
        self.location.hash(state);
    }
}

impl<T> PartialOrd for ResourceKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ResourceKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.registry
            .cmp(&other.registry)
            .then_with(|| self.location.cmp(&other.location))
    }
}

/// Identity of one tag over the entries of one registry.
pub struct TagKey<T> {
    registry: ResourceLocation,
    location: ResourceLocation,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TagKey<T> {
    /// A tag named `location` over `registry`.
    #[must_use]
    pub const fn new(registry: ResourceLocation, location: ResourceLocation) -> Self {
        TagKey {
            registry,
            location,
            _marker: PhantomData,
        }
    }

    /// A vanilla tag, usable in constants.
    #[must_use]
    pub const fn vanilla(registry: ResourceLocation, path: &'static str) -> Self {
        Self::new(registry, ResourceLocation::vanilla_static(path))
    }

    /// A convention-namespace tag, usable in constants.
    #[must_use]
    pub const fn common(registry: ResourceLocation, path: &'static str) -> Self {
        Self::new(registry, ResourceLocation::common_static(path))
    }

    /// Name of the registry this tag spans.
    #[must_use]
    pub const fn registry(&self) -> &ResourceLocation {
        &self.registry
    }

    /// Identifier of the tag.
    #[must_use]
    pub const fn location(&self) -> &ResourceLocation {
        &self.location
    }
}

impl<T> Clone for TagKey<T> {
    fn clone(&self) -> Self {
        Self::new(self.registry.clone(), self.location.clone())
    }
}

impl<T> fmt::Debug for TagKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagKey[{} / #{}]", self.registry, self.location)
    }
}

impl<T> Display for TagKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.location)
    }
}

impl<T> PartialEq for TagKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.registry == other.registry && self.location == other.location
    }
}

impl<T> Eq for TagKey<T> {}

impl<T> Hash for TagKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.registry.hash(state);
        self.location.hash(state);
    }
}
