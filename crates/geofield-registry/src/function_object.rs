//! The [`FunctionObject`] trait and an ordered list of function objects.
//!
//! Function objects run alongside the time loop. Each step the loop calls
//! [`FunctionObjectList::execute`], and on output steps
//! [`FunctionObjectList::write`]; mesh changes are forwarded so objects
//! holding mesh-sized state can adapt.

use crate::error::FunctionObjectError;
use crate::registry::ObjectRegistry;
use geofield_mesh::{Mesh, MeshMap};

/// A computation driven by the time loop against the object registry.
///
/// # Object safety
///
/// This trait is object-safe; [`FunctionObjectList`] stores
/// `Box<dyn FunctionObject>`.
///
/// # Examples
///
/// ```
/// use geofield_registry::{FunctionObject, FunctionObjectError, ObjectRegistry};
///
/// struct CountSteps(u32);
///
/// impl FunctionObject for CountSteps {
///     fn name(&self) -> &str { "countSteps" }
///     fn execute(&mut self, _registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
///         self.0 += 1;
///         Ok(())
///     }
///     fn write(&mut self, _registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
///         Ok(())
///     }
/// }
///
/// let mut f = CountSteps(0);
/// f.execute(&mut ObjectRegistry::default()).unwrap();
/// assert_eq!(f.0, 1);
/// ```
pub trait FunctionObject: Send {
    /// Instance name for logs and errors.
    fn name(&self) -> &str;

    /// Called once per time step.
    fn execute(&mut self, registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError>;

    /// Called on output steps.
    fn write(&mut self, registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError>;

    /// Called once when the run finishes. Default: no-op.
    fn end(&mut self, _registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
        Ok(())
    }

    /// Called when the clock is set explicitly. Default: no-op.
    fn time_set(&mut self, _registry: &ObjectRegistry) {}

    /// Called after a topology change. Default: no-op.
    fn update_mesh(&mut self, _map: &MeshMap) {}

    /// Called after mesh points moved. Default: no-op.
    fn move_points(&mut self, _mesh: &dyn Mesh) {}
}

/// Function objects run in insertion order.
///
/// A failing object stops the pass and its error is returned; objects
/// after it do not run for that call.
#[derive(Default)]
pub struct FunctionObjectList {
    objects: Vec<Box<dyn FunctionObject>>,
}

impl FunctionObjectList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a function object.
    pub fn push(&mut self, object: Box<dyn FunctionObject>) {
        self.objects.push(object);
    }

    /// Number of function objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Names in run order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.objects.iter().map(|o| o.name())
    }

    /// Run [`FunctionObject::execute`] on every object.
    pub fn execute(&mut self, registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
        self.run("execute", registry, |o, r| o.execute(r))
    }

    /// Run [`FunctionObject::write`] on every object.
    pub fn write(&mut self, registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
        self.run("write", registry, |o, r| o.write(r))
    }

    /// Run [`FunctionObject::end`] on every object.
    pub fn end(&mut self, registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
        self.run("end", registry, |o, r| o.end(r))
    }

    /// Forward a clock change to every object.
    pub fn time_set(&mut self, registry: &ObjectRegistry) {
        for object in &mut self.objects {
            object.time_set(registry);
        }
    }

    /// Forward a topology change to every object.
    pub fn update_mesh(&mut self, map: &MeshMap) {
        for object in &mut self.objects {
            object.update_mesh(map);
        }
    }

    /// Forward point motion to every object.
    pub fn move_points(&mut self, mesh: &dyn Mesh) {
        for object in &mut self.objects {
            object.move_points(mesh);
        }
    }

    fn run(
        &mut self,
        stage: &'static str,
        registry: &mut ObjectRegistry,
        mut call: impl FnMut(&mut dyn FunctionObject, &mut ObjectRegistry) -> Result<(), FunctionObjectError>,
    ) -> Result<(), FunctionObjectError> {
        for object in &mut self.objects {
            if let Err(e) = call(object.as_mut(), registry) {
                tracing::warn!(object = object.name(), stage, error = %e, "function object failed");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FunctionObjectList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
