//! Adapter implementations of the port traits

mod wizard_world;

pub use wizard_world::WizardWorldClient;
