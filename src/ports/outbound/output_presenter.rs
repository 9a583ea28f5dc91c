use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (file, stdout)
/// where the rendered manifest is written.
pub trait OutputPresenter {
    /// Presents the rendered manifest
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
