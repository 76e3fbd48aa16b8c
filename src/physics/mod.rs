pub mod material;
pub mod stepper;
pub mod world;

pub use material::ContactMaterial;
pub use rapier3d::dynamics::RigidBodyHandle;
pub use stepper::FixedStepper;
pub use world::{PhysicsWorld, Pose};
