// Adapters: the two interchangeable record-store implementations plus the
// file-backed state store. Backend choice happens in config, not here.

pub mod local;
pub mod remote;
pub mod state;

pub use local::LocalStore;
pub use remote::RemoteStore;
pub use state::FileStateStore;
