//! The geometric field: interior values, boundary slots, mesh, and time stamp.

use crate::boundary::{BoundaryField, BoundaryFieldMut, RebuildReport};
use crate::internal::InternalField;
use crate::patch_field::PatchFamily;
use crate::selector::PatchFieldSelector;
use crate::spec::{BoundarySpec, FieldConfig, InitialValues, PatchFieldSpec, PatchValue};
use geofield_core::{Dimensions, FieldError, FieldValue, TimeIndex};
use geofield_mesh::{remap, GeoMesh, Mesh, MeshMap, NullMesh};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A physical quantity discretised over a mesh.
///
/// Generic over the value type `T`, the patch family `F`, and the mesh
/// category `M` (which must be `F`'s category). The field owns its
/// interior values and one boundary slot per mesh patch, and carries the
/// time index at which its values were last computed.
///
/// # Time index
///
/// The time index is written by the owner of the field once per
/// evaluation cycle through [`time_index_mut`](Self::time_index_mut) and
/// read by consumers deciding whether cached values are current. It is
/// not validated.
///
/// # Null sentinel
///
/// [`null`](Self::null) returns a process-wide empty instance for this
/// exact instantiation. Test for it with [`is_null`](Self::is_null);
/// reading its values is a precondition violation.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use geofield_core::{Dimensions, TimeIndex};
/// use geofield_field::{PatchFieldSelector, VolScalarField};
/// use geofield_mesh::{PatchDef, PolyMesh};
///
/// let mesh = Arc::new(
///     PolyMesh::new(2, 0, vec![PatchDef::new("left", vec![0]), PatchDef::new("right", vec![1])])
///         .unwrap(),
/// );
/// let mut p = VolScalarField::uniform(
///     "p",
///     mesh,
///     Dimensions::PRESSURE,
///     1.0,
///     "calculated",
///     &PatchFieldSelector::default(),
/// )
/// .unwrap();
///
/// *p.time_index_mut() = TimeIndex(3);
/// assert_eq!(p.time_index(), TimeIndex(3));
/// assert_eq!(p.boundary_field().len(), 2);
/// ```
///
/// Write access reaches values and individual slots, never the containers,
/// so the interior size, the dimensions, and the slot list stay tied to the
/// mesh:
///
/// ```compile_fail
/// # use std::sync::Arc;
/// # use geofield_core::Dimensions;
/// # use geofield_field::{BoundaryField, PatchFieldSelector, VolScalarField};
/// # use geofield_mesh::{PatchDef, PolyMesh};
/// # let mesh = Arc::new(PolyMesh::new(1, 0, vec![PatchDef::new("wall", vec![0])]).unwrap());
/// # let mut p = VolScalarField::uniform(
/// #     "p", mesh, Dimensions::PRESSURE, 1.0, "calculated", &PatchFieldSelector::default(),
/// # ).unwrap();
/// *p.boundary_field_mut() = BoundaryField::empty();
/// ```
///
/// ```compile_fail
/// # use std::sync::Arc;
/// # use geofield_core::Dimensions;
/// # use geofield_field::{InternalField, PatchFieldSelector, VolScalarField};
/// # use geofield_mesh::{PatchDef, PolyMesh};
/// # let mesh = Arc::new(PolyMesh::new(1, 0, vec![PatchDef::new("wall", vec![0])]).unwrap());
/// # let mut p = VolScalarField::uniform(
/// #     "p", mesh, Dimensions::PRESSURE, 1.0, "calculated", &PatchFieldSelector::default(),
/// # ).unwrap();
/// *p.internal_field_mut() = InternalField::new(vec![], Dimensions::LENGTH);
/// ```
pub struct GeometricField<T: FieldValue, F: PatchFamily, M: GeoMesh> {
    name: String,
    mesh: Arc<dyn Mesh>,
    internal: InternalField<T>,
    boundary: BoundaryField<T, F>,
    time_index: TimeIndex,
    default_patch_type: String,
    sentinel: bool,
    _geo: PhantomData<fn() -> M>,
}

impl<T, F, M> GeometricField<T, F, M>
where
    T: FieldValue,
    F: PatchFamily<Geo = M>,
    M: GeoMesh,
{
    /// Build a field from a configuration.
    ///
    /// Returns `Err` if the initial values do not match the mesh element
    /// count, if the boundary spec does not line up with the mesh patches,
    /// if any patch type or the default patch type is unknown to
    /// `selector`, or if a patch value is missing or mis-sized.
    pub fn new(
        mesh: Arc<dyn Mesh>,
        config: FieldConfig<T>,
        selector: &PatchFieldSelector<T, F>,
    ) -> Result<Self, FieldError> {
        let size = M::size(mesh.as_ref());
        let values = match config.initial {
            InitialValues::Uniform(value) => vec![value; size],
            InitialValues::List(values) if values.len() == size => values,
            InitialValues::List(values) => {
                return Err(FieldError::InternalSizeMismatch {
                    expected: size,
                    found: values.len(),
                })
            }
        };
        if !selector.contains(&config.default_patch_type) {
            return Err(FieldError::UnknownPatchType {
                patch: String::from("<default>"),
                type_name: config.default_patch_type,
            });
        }
        let boundary = BoundaryField::new(mesh.as_ref(), &config.boundary, &values, selector)?;
        tracing::debug!(
            field = %config.name,
            geo = M::NAME,
            value = T::TYPE_NAME,
            size,
            patches = boundary.len(),
            "field constructed"
        );
        Ok(Self {
            name: config.name,
            mesh,
            internal: InternalField::new(values, config.dimensions),
            boundary,
            time_index: config.time_index,
            default_patch_type: config.default_patch_type,
            sentinel: false,
            _geo: PhantomData,
        })
    }

    /// A field with `value` everywhere and the same patch type on every patch.
    pub fn uniform(
        name: impl Into<String>,
        mesh: Arc<dyn Mesh>,
        dimensions: Dimensions,
        value: T,
        patch_type: &str,
        selector: &PatchFieldSelector<T, F>,
    ) -> Result<Self, FieldError> {
        let boundary = BoundarySpec::uniform(
            mesh.as_ref(),
            PatchFieldSpec::new(patch_type).with_value(PatchValue::Uniform(value)),
        );
        let config = FieldConfig::new(name, dimensions, value).with_boundary(boundary);
        Self::new(mesh, config, selector)
    }

    /// The process-wide null field of this instantiation.
    ///
    /// Built on first call; every call returns the same reference, and no
    /// two instantiations share one.
    pub fn null() -> &'static Self {
        crate::null::null_object(|| Self {
            name: String::new(),
            mesh: Arc::new(NullMesh::new()),
            internal: InternalField::new(Vec::new(), Dimensions::DIMENSIONLESS),
            boundary: BoundaryField::empty(),
            time_index: TimeIndex::ZERO,
            default_patch_type: crate::CALCULATED.to_string(),
            sentinel: true,
            _geo: PhantomData,
        })
    }

    /// Returns `true` for the null sentinel.
    pub fn is_null(&self) -> bool {
        self.sentinel
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical dimensions of the values.
    pub fn dimensions(&self) -> Dimensions {
        self.internal.dimensions()
    }

    /// The mesh this field is discretised over.
    pub fn mesh(&self) -> &Arc<dyn Mesh> {
        &self.mesh
    }

    /// Number of interior values.
    pub fn size(&self) -> usize {
        self.internal.len()
    }

    /// Behavior used for patches inserted by topology changes.
    pub fn default_patch_type(&self) -> &str {
        &self.default_patch_type
    }

    /// Interior values.
    pub fn internal_field(&self) -> &InternalField<T> {
        debug_assert!(!self.sentinel, "read through the null field");
        &self.internal
    }

    /// Mutable interior values.
    ///
    /// Only the values are writable; the element count and dimensions
    /// stay fixed to the mesh and configuration.
    pub fn internal_field_mut(&mut self) -> &mut [T] {
        debug_assert!(!self.sentinel, "write through the null field");
        self.internal.as_mut_slice()
    }

    /// Boundary slots.
    pub fn boundary_field(&self) -> &BoundaryField<T, F> {
        debug_assert!(!self.sentinel, "read through the null field");
        &self.boundary
    }

    /// Mutable boundary slots.
    ///
    /// Slots can be edited or swapped one at a time; the slot list itself
    /// only changes through [`update_mesh`](Self::update_mesh).
    pub fn boundary_field_mut(&mut self) -> BoundaryFieldMut<'_, T, F> {
        debug_assert!(!self.sentinel, "write through the null field");
        BoundaryFieldMut::new(&mut self.boundary)
    }

    /// Interior and boundary together, for computing both in one pass.
    pub fn parts_mut(&mut self) -> (&mut [T], BoundaryFieldMut<'_, T, F>) {
        debug_assert!(!self.sentinel, "write through the null field");
        (
            self.internal.as_mut_slice(),
            BoundaryFieldMut::new(&mut self.boundary),
        )
    }

    /// Time index at which the values were last computed.
    pub fn time_index(&self) -> TimeIndex {
        self.time_index
    }

    /// The time-index stamp, for the owner to update in place.
    pub fn time_index_mut(&mut self) -> &mut TimeIndex {
        debug_assert!(!self.sentinel, "write through the null field");
        &mut self.time_index
    }

    /// Evaluate every boundary slot against the current interior values.
    pub fn correct_boundary_conditions(&mut self) {
        self.boundary
            .evaluate(self.mesh.as_ref(), self.internal.as_slice());
    }

    /// Forward point motion on the current mesh to every boundary slot.
    pub fn move_points(&mut self) {
        self.boundary.move_points(self.mesh.as_ref());
    }

    /// Returns `true` if the boundary slots match `mesh`'s patches in order.
    pub fn is_synced_with(&self, mesh: &dyn Mesh) -> bool {
        self.boundary.is_synced_with(mesh)
    }

    /// Adopt the mesh produced by a topology edit.
    ///
    /// Interior values follow the element map of `M` (cells or points),
    /// inserted elements starting at zero; the boundary is rebuilt by
    /// patch identity (see [`BoundaryField::rebuild`]).
    ///
    /// Returns `Err(FieldError::MeshMismatch)` if `map` does not run from
    /// this field's mesh to `mesh`. On any `Err` the field is unchanged.
    pub fn update_mesh(
        &mut self,
        mesh: Arc<dyn Mesh>,
        map: &MeshMap,
        selector: &PatchFieldSelector<T, F>,
    ) -> Result<RebuildReport, FieldError> {
        if map.source() != self.mesh.instance_id() {
            return Err(FieldError::MeshMismatch {
                reason: format!(
                    "map starts at mesh {} but field '{}' is on mesh {}",
                    map.source(),
                    self.name,
                    self.mesh.instance_id()
                ),
            });
        }
        if map.target() != mesh.instance_id() {
            return Err(FieldError::MeshMismatch {
                reason: format!(
                    "map ends at mesh {} but the new mesh is {}",
                    map.target(),
                    mesh.instance_id()
                ),
            });
        }
        let size = M::size(mesh.as_ref());
        let element_map = M::element_map(map);
        if let Some(element_map) = element_map {
            if element_map.len() != size {
                return Err(FieldError::MeshMismatch {
                    reason: format!(
                        "{} map has {} entries for {size} elements",
                        M::NAME,
                        element_map.len()
                    ),
                });
            }
        }
        let values = remap(self.internal.as_slice(), element_map, size, T::zero());
        let report = self.boundary.rebuild(
            mesh.as_ref(),
            map,
            &values,
            selector,
            &self.default_patch_type,
        )?;
        self.internal.replace_values(values);
        self.mesh = mesh;
        tracing::debug!(
            field = %self.name,
            revision = self.mesh.topology_revision(),
            size,
            "field moved to new mesh"
        );
        Ok(report)
    }
}

impl<T: FieldValue, F: PatchFamily, M: GeoMesh> Clone for GeometricField<T, F, M> {
    /// Deep copy. A copy of the null sentinel is an ordinary empty field.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            mesh: Arc::clone(&self.mesh),
            internal: self.internal.clone(),
            boundary: self.boundary.clone(),
            time_index: self.time_index,
            default_patch_type: self.default_patch_type.clone(),
            sentinel: false,
            _geo: PhantomData,
        }
    }
}

impl<T: FieldValue, F: PatchFamily, M: GeoMesh> fmt::Debug for GeometricField<T, F, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sentinel {
            return write!(f, "GeometricField::null<{}, {}, {}>", T::TYPE_NAME, F::NAME, M::NAME);
        }
        f.debug_struct("GeometricField")
            .field("name", &self.name)
            .field("geo", &M::NAME)
            .field("dimensions", &self.internal.dimensions())
            .field("size", &self.internal.len())
            .field("boundary", &self.boundary)
            .field("time_index", &self.time_index)
            .finish()
    }
}
