// Library crate: exposes the testable, GL-free modules for integration tests.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod state;

/// Subset of viewport code with no GL or egui dependency (mesh building,
/// ray picking). The full viewport (camera, renderer) stays in the binary.
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
