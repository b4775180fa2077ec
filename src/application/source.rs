//! Source loading shared by the use cases

use std::path::PathBuf;

use tracing::debug;

use crate::domain::entities::{Model, ModelBuilder};
use crate::domain::ports::FileSystem;
use crate::error::{DmodelError, DmodelResult};
use crate::parser;

/// Read every source through the file system port into one model
///
/// Files are parsed in the order given; the first failure aborts.
pub fn load_sources<FS: FileSystem>(fs: &FS, files: &[PathBuf]) -> DmodelResult<Model> {
    let mut builder = ModelBuilder::new();
    for file in files {
        parser::check_extension(file)?;
        let source = fs.read(file).map_err(|source| DmodelError::Read {
            file: file.clone(),
            source,
        })?;
        parser::parse_str(&source, file, &mut builder)?;
        debug!(file = %file.display(), "parsed source");
    }

    let model = builder.build()?;
    debug!(
        entities = model.entity_count(),
        datatypes = model.datatypes().len(),
        "model loaded"
    );
    Ok(model)
}
