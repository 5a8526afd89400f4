pub mod models;
pub use models::{
    EmulatorLookupRequest,
    EmulatorLookupResponse,
    EmulatorUpdateRequest,
    EmulatorUser,
};
