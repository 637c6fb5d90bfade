use crate::schema::app::{Entity, EntityId, PropertyId, Schema};
use crate::Error;

use std::{cell::RefCell, fmt, rc::Rc, sync::Arc};

/// Stands in for an entity instance while a selector runs.
///
/// Reading a property with [`get`](Self::get) does not produce data. It
/// appends the property to the recording shared by every recorder of one
/// evaluation and returns a recorder for whatever the property holds:
/// another entity, which can be navigated further, or a scalar, which ends
/// the path.
///
/// ```
/// use rowbind_core::binding;
/// use rowbind_core::schema::app::{Schema, Type};
/// use std::sync::Arc;
///
/// let mut builder = Schema::builder();
/// let department = builder.declare("Department");
/// let employee = builder.declare("Employee");
/// builder.entity(department).scalar("name", Type::String);
/// builder.entity(employee).entity("department", department);
/// let schema = Arc::new(builder.build().unwrap());
///
/// let path = binding::detect_properties(&schema.entity_ref(employee), |e| {
///     e.get("department").get("name")
/// })
/// .unwrap();
///
/// assert_eq!(path.display(&schema).to_string(), "department.name");
/// ```
#[derive(Clone)]
pub struct Recorder {
    schema: Arc<Schema>,

    /// The entity reads resolve against. `None` once the path reached a
    /// scalar.
    scope: Option<EntityId>,

    /// Length of the recorded path when this recorder was handed out. Reads
    /// are only valid while the path has not grown past it.
    depth: usize,

    recording: Rc<RefCell<Recording>>,
}

/// State shared by all recorders of a single selector evaluation.
#[derive(Debug, Default)]
pub(super) struct Recording {
    pub(super) path: Vec<PropertyId>,

    /// First invalid read, if any. Reads after it are not recorded.
    pub(super) error: Option<Error>,
}

impl Recorder {
    pub(super) fn root(
        schema: Arc<Schema>,
        entity: EntityId,
        recording: Rc<RefCell<Recording>>,
    ) -> Self {
        Self {
            schema,
            scope: Some(entity),
            depth: 0,
            recording,
        }
    }

    /// Reads property `name` off the simulated entity.
    ///
    /// Reading a property the entity does not declare is a programming error
    /// in the selector; it is reported when the evaluation finishes. So is
    /// reading off a recorder the path already moved past, such as the root
    /// after `e.get("department")`. Reads on a recorder that reached a scalar
    /// are ignored.
    pub fn get(&self, name: &str) -> Recorder {
        let Some(entity_id) = self.scope else {
            log::trace!("ignoring read of `{name}` past a scalar property");
            return self.terminal();
        };

        let entity = self.schema.entity(entity_id);
        let mut recording = self.recording.borrow_mut();

        if recording.error.is_some() {
            return self.terminal();
        }

        let Some(property) = entity.property_by_name(name) else {
            recording.error = Some(Error::unknown_property(&entity.name, name));
            return self.terminal();
        };

        if recording.path.len() != self.depth {
            recording.error = Some(Error::branched_path(&entity.name, name));
            return self.terminal();
        }

        log::trace!("recorded read of `{}::{}`", entity.name, property.name);
        recording.path.push(property.id);

        Recorder {
            schema: self.schema.clone(),
            scope: property.target(),
            depth: recording.path.len(),
            recording: self.recording.clone(),
        }
    }

    /// The entity this recorder simulates, or `None` past a scalar.
    pub fn entity(&self) -> Option<&Entity> {
        self.scope.map(|id| self.schema.entity(id))
    }

    /// True once the path reached a scalar property.
    pub fn is_terminal(&self) -> bool {
        self.scope.is_none()
    }

    fn terminal(&self) -> Recorder {
        Recorder {
            schema: self.schema.clone(),
            scope: None,
            depth: self.depth,
            recording: self.recording.clone(),
        }
    }
}

impl fmt::Debug for Recorder {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity() {
            Some(entity) => write!(fmt, "Recorder({})", entity.name),
            None => fmt.write_str("Recorder(<scalar>)"),
        }
    }
}
