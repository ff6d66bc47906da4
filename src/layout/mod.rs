/// Layout module
///
/// Everything that turns the current window size into concrete sizes:
/// - Design-unit scaling (scale.rs)
/// - Gallery grid geometry and virtualization window (grid.rs)

pub mod scale;
pub mod grid;

pub use scale::Viewport;
