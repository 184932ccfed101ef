pub use crate::galaxy::{generate, GalaxyConfig, GalaxyConfigUi, PointCloud, PointCount};
