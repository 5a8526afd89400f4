macro_rules! muse {
    ($module:ident, {$($item:ident),* $(,)?}) => {
        pub mod $module;
        pub use $module::{ $($item),* };
    };
}

muse!(custom_claims, {CustomClaims, RESERVED_CLAIM_NAMES, MAX_CLAIMS_PAYLOAD_BYTES});
muse!(user_record, {UserRecord});
