//! Template Source Port
//!
//! Where `create` gets the files of a new project from.

use std::path::Path;

use crate::error::Tunn8nResult;

pub trait TemplateSource {
    /// Human-readable origin, for messages
    fn describe(&self) -> String;

    /// Fails with `TemplateMissing` when the template cannot be used
    fn check(&self) -> Tunn8nResult<()>;

    /// Copy every top-level entry into `dest` (which must exist).
    ///
    /// Returns the names of the top-level entries created, in copy order.
    fn materialize(&self, dest: &Path) -> Tunn8nResult<Vec<String>>;
}

impl<T: TemplateSource + ?Sized> TemplateSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn check(&self) -> Tunn8nResult<()> {
        (**self).check()
    }

    fn materialize(&self, dest: &Path) -> Tunn8nResult<Vec<String>> {
        (**self).materialize(dest)
    }
}
