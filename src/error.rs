use thiserror::Error;

/// Errors generated while deriving matrices or updating the scene.
///
/// Degenerate input never silently turns into NaN entries; it is reported through one of these
/// variants instead, and the scene keeps its previous (valid) state.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A vector or a mesh had no usable extent, e.g. normalizing a zero-length vector
    #[error("Degenerate geometry: {what}")]
    DegenerateGeometry {
        /// What went wrong
        what: &'static str,
    },

    /// The camera basis could not be built because the eye sits on the center, or the up
    /// vector is parallel to the viewing direction
    #[error("Could not derive a camera basis: the up vector is parallel to the viewing direction or the eye equals the center")]
    DegenerateBasis,

    /// The projection volume has no extent along at least one axis
    #[error("Degenerate projection: {reason}")]
    DegenerateProjection {
        /// Which parameter made the projection degenerate
        reason: &'static str,
    },

    /// The window was resized to a size with no area, which happens when it is minimized
    #[error("Cannot derive a projection for a {width}x{height} viewport")]
    DegenerateViewport {
        /// The new width
        width: u32,
        /// The new height
        height: u32,
    },

    /// A scene needs at least one model to select
    #[error("The scene has no models")]
    NoModels,

    /// The scene configuration could not be parsed
    #[error("Could not parse the scene configuration: {0}")]
    Config(#[from] serde_json::Error),
}
