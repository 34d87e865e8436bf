//! Capability traits implemented outside ecsig

pub mod keygen;

pub use keygen::KeyPairGenerator;
