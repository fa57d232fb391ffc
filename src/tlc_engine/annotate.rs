//! Annotation module
//!
//! Label layout, the overlay draw list, pick tests and display-to-buffer coordinate mapping.
//! Layout is a pure function of the geometry and config; both the overlay and label
//! hit-testing consume its output, so hit boxes never depend on a prior draw.

mod metrics;
mod layout;
mod overlay;
mod coords;


pub use metrics::{MonospaceMetrics, TextMetrics};
pub use layout::{
    LABEL_GAP,
    LabelPlacement,
    MARKER_RADIUS,
    TextAlign,
    HIT_MARGIN,
    label_text,
    layout_labels,
};
pub use overlay::{LineKind, Overlay, OverlayCommand, build_overlay};
pub use hit_test::{PICK_RADIUS, hit_test_label, hit_test_spot};
pub use coords::canvas_coords;
