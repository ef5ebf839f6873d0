//! Named storage for fields and other simulation objects.

use crate::error::RegistryError;
use crate::time::RunTime;
use geofield_core::{FieldValue, ObjectId, TimeIndex};
use geofield_field::{GeometricField, PatchFamily};
use geofield_mesh::GeoMesh;
use indexmap::IndexMap;
use std::any::{type_name, Any};

/// An object that can live in an [`ObjectRegistry`].
pub trait RegisteredObject: Any + Send + Sync {
    /// Registry key.
    fn object_name(&self) -> &str;
}

impl dyn RegisteredObject {
    /// Attempt to downcast to a concrete type.
    pub fn downcast_ref<O: RegisteredObject>(&self) -> Option<&O> {
        (self as &dyn Any).downcast_ref::<O>()
    }

    /// Attempt to downcast to a concrete mutable type.
    pub fn downcast_mut<O: RegisteredObject>(&mut self) -> Option<&mut O> {
        (self as &mut dyn Any).downcast_mut::<O>()
    }
}

impl<T, F, M> RegisteredObject for GeometricField<T, F, M>
where
    T: FieldValue,
    F: PatchFamily<Geo = M>,
    M: GeoMesh,
{
    fn object_name(&self) -> &str {
        self.name()
    }
}

struct Entry {
    id: ObjectId,
    object: Box<dyn RegisteredObject>,
}

/// Owns named objects and the simulation clock.
///
/// Names are unique. Every registration, including a
/// [`replace`](Self::replace), gets a fresh [`ObjectId`], so holders of
/// an id can tell whether the object under a name has been swapped.
/// Iteration order is registration order.
///
/// # Examples
///
/// ```
/// use geofield_core::Dimensions;
/// use geofield_field::{PatchFieldSelector, VolScalarField};
/// use geofield_mesh::{PatchDef, PolyMesh};
/// use geofield_registry::ObjectRegistry;
/// use std::sync::Arc;
///
/// let mesh = Arc::new(PolyMesh::new(1, 0, vec![PatchDef::new("wall", vec![0])]).unwrap());
/// let p = VolScalarField::uniform(
///     "p", mesh, Dimensions::PRESSURE, 1e5, "zeroGradient", &PatchFieldSelector::default(),
/// )
/// .unwrap();
///
/// let mut registry = ObjectRegistry::default();
/// registry.store(p).unwrap();
/// assert_eq!(registry.lookup::<VolScalarField>("p").unwrap().internal_field()[0], 1e5);
/// ```
pub struct ObjectRegistry {
    objects: IndexMap<String, Entry>,
    time: RunTime,
}

impl ObjectRegistry {
    /// An empty registry driven by `time`.
    pub fn new(time: RunTime) -> Self {
        Self {
            objects: IndexMap::new(),
            time,
        }
    }

    /// The simulation clock.
    pub fn time(&self) -> &RunTime {
        &self.time
    }

    /// The simulation clock, for the time loop to advance.
    pub fn time_mut(&mut self) -> &mut RunTime {
        &mut self.time
    }

    /// Shorthand for `self.time().time_index()`.
    pub fn time_index(&self) -> TimeIndex {
        self.time.time_index()
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Register `object` under its own name.
    ///
    /// Returns `Err(RegistryError::DuplicateName)` if the name is taken.
    pub fn store<O: RegisteredObject>(&mut self, object: O) -> Result<ObjectId, RegistryError> {
        let name = object.object_name().to_string();
        if self.objects.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }
        let id = ObjectId::next();
        tracing::info!(object = %name, %id, ty = type_name::<O>(), "object stored");
        self.objects.insert(
            name,
            Entry {
                id,
                object: Box::new(object),
            },
        );
        Ok(id)
    }

    /// Register `object`, replacing any object of the same name in place.
    ///
    /// The name keeps its position in iteration order and gets a fresh
    /// [`ObjectId`].
    pub fn replace<O: RegisteredObject>(&mut self, object: O) -> ObjectId {
        let name = object.object_name().to_string();
        let id = ObjectId::next();
        let entry = Entry {
            id,
            object: Box::new(object),
        };
        match self.objects.get_mut(&name) {
            Some(old) => {
                if old.object.downcast_ref::<O>().is_none() {
                    tracing::warn!(object = %name, ty = type_name::<O>(), "replaced object of a different type");
                }
                tracing::info!(object = %name, old = %old.id, new = %id, "object replaced");
                *old = entry;
            }
            None => {
                tracing::info!(object = %name, %id, ty = type_name::<O>(), "object stored");
                self.objects.insert(name, entry);
            }
        }
        id
    }

    /// The object named `name`, as type `O`.
    pub fn lookup<O: RegisteredObject>(&self, name: &str) -> Result<&O, RegistryError> {
        let entry = self.objects.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;
        entry
            .object
            .downcast_ref::<O>()
            .ok_or_else(|| RegistryError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<O>(),
            })
    }

    /// The object named `name`, mutably, as type `O`.
    pub fn lookup_mut<O: RegisteredObject>(&mut self, name: &str) -> Result<&mut O, RegistryError> {
        let entry = self
            .objects
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;
        entry
            .object
            .downcast_mut::<O>()
            .ok_or_else(|| RegistryError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<O>(),
            })
    }

    /// Registration id of the object named `name`.
    pub fn object_id(&self, name: &str) -> Option<ObjectId> {
        self.objects.get(name).map(|e| e.id)
    }

    /// Returns `true` if an object is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Returns `true` if an object of type `O` is registered under `name`.
    pub fn contains_type<O: RegisteredObject>(&self, name: &str) -> bool {
        self.objects
            .get(name)
            .is_some_and(|e| e.object.downcast_ref::<O>().is_some())
    }

    /// Remove and return the object named `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn RegisteredObject>> {
        let entry = self.objects.shift_remove(name)?;
        tracing::info!(object = %name, id = %entry.id, "object removed");
        Some(entry.object)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.objects.keys().map(String::as_str)
    }

    /// Names of the objects of type `O`, in registration order.
    pub fn names_of<O: RegisteredObject>(&self) -> impl Iterator<Item = &str> + '_ {
        self.objects
            .iter()
            .filter(|(_, e)| e.object.downcast_ref::<O>().is_some())
            .map(|(name, _)| name.as_str())
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new(RunTime::default())
    }
}

impl std::fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectRegistry")
            .field("time", &self.time)
            .field("objects", &self.objects.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named(&'static str, u32);

    impl RegisteredObject for Named {
        fn object_name(&self) -> &str {
            self.0
        }
    }

    #[derive(Debug)]
    struct Other(&'static str);

    impl RegisteredObject for Other {
        fn object_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn store_rejects_duplicates() {
        let mut r = ObjectRegistry::default();
        r.store(Named("a", 1)).unwrap();
        assert_eq!(
            r.store(Named("a", 2)).unwrap_err(),
            RegistryError::DuplicateName { name: "a".into() }
        );
        assert_eq!(r.lookup::<Named>("a").unwrap().1, 1);
    }

    #[test]
    fn replace_assigns_new_id_and_keeps_order() {
        let mut r = ObjectRegistry::default();
        let a = r.store(Named("a", 1)).unwrap();
        r.store(Named("b", 1)).unwrap();
        let a2 = r.replace(Named("a", 2));
        assert_ne!(a, a2);
        assert_eq!(r.object_id("a"), Some(a2));
        assert_eq!(r.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.lookup::<Named>("a").unwrap().1, 2);
    }

    #[test]
    fn lookup_reports_type_mismatch() {
        let mut r = ObjectRegistry::default();
        r.store(Other("x")).unwrap();
        assert!(matches!(
            r.lookup::<Named>("x").unwrap_err(),
            RegistryError::TypeMismatch { .. }
        ));
        assert!(matches!(
            r.lookup::<Named>("y").unwrap_err(),
            RegistryError::NotFound { .. }
        ));
        assert!(r.contains("x"));
        assert!(!r.contains_type::<Named>("x"));
    }

    #[test]
    fn lookup_mut_edits_in_place() {
        let mut r = ObjectRegistry::default();
        r.store(Named("a", 1)).unwrap();
        r.lookup_mut::<Named>("a").unwrap().1 = 5;
        assert_eq!(r.lookup::<Named>("a").unwrap().1, 5);
    }

    #[test]
    fn remove_and_filter_by_type() {
        let mut r = ObjectRegistry::default();
        r.store(Named("a", 1)).unwrap();
        r.store(Other("b")).unwrap();
        r.store(Named("c", 1)).unwrap();
        assert_eq!(r.names_of::<Named>().collect::<Vec<_>>(), vec!["a", "c"]);

        let removed = r.remove("a").unwrap();
        assert_eq!(removed.downcast_ref::<Named>(), Some(&Named("a", 1)));
        assert!(r.remove("a").is_none());
        assert_eq!(r.len(), 2);
        assert!(r.object_id("a").is_none());
    }
}
