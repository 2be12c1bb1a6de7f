//! Plain-text matrix files: one row per line, values space-separated.

use std::path::Path;

use matrix_engine::Matrix;
use tokio::fs;

use crate::error::Error;

/// Loads a matrix from `path`.
///
/// Fails with [`Error::NotFound`] if the file is missing, or with an
/// engine parse/shape error if the contents are not a rectangular
/// grid of floats.
pub async fn load(path: impl AsRef<Path>) -> Result<Matrix, Error> {
    let path = path.as_ref();
    if !fs::try_exists(path).await? {
        return Err(Error::NotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path).await?;
    Ok(text.parse::<Matrix>()?)
}

/// Stores a matrix at `path`, overwriting any existing file.
pub async fn store(path: impl AsRef<Path>, matrix: &Matrix) -> Result<(), Error> {
    fs::write(path, matrix.to_string()).await?;
    Ok(())
}
