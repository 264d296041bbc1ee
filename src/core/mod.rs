pub mod camera;
pub mod constants;
pub mod controls;
pub mod gesture;
pub mod scene;

pub use camera::Camera;
pub use controls::Controls;
pub use gesture::GestureTracker;
pub use scene::Scene;
