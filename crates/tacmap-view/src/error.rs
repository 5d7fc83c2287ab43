use thiserror::Error;

use crate::geo::ProjectionError;
use crate::provider::ProviderError;

/// Why a render pass or a coordinate lookup did not complete.
///
/// Neither case is recovered from inside the view. Commands recorded before
/// the failure stay in the draw list; hosts clear it and retry on the next
/// redraw.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
