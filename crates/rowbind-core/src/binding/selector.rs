use super::{recorder::Recording, PropertyPath, Recorder};
use crate::schema::app::EntityRef;
use crate::{Error, Result};

use std::{cell::RefCell, rc::Rc};

/// Runs `selector` against a recorder for `entity` and returns the property
/// path it read.
///
/// The selector's return value is discarded; only the reads matter. Fails if
/// the selector read an undeclared property, branched off an entity the path
/// already left, or read nothing at all.
pub fn detect_properties<R>(
    entity: &EntityRef,
    selector: impl FnOnce(Recorder) -> R,
) -> Result<PropertyPath> {
    let recording = Rc::new(RefCell::new(Recording::default()));
    let root = Recorder::root(entity.schema().clone(), entity.id(), recording.clone());

    drop(selector(root));

    let Recording { path, error } = recording.take();

    if let Some(err) = error {
        return Err(err);
    }

    if path.is_empty() {
        return Err(Error::empty_binding_path());
    }

    Ok(PropertyPath::from(path))
}
