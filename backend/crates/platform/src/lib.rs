//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations used by the feature crates:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random bytes)
//! - Password hashing (Argon2id, NIST SP 800-63B policy)
//! - An injectable clock
//! - Per-key async mutexes
//! - The list-query pipeline (search, sort, paginate) shared by resources

pub mod clock;
pub mod crypto;
pub mod keyed_lock;
pub mod password;
pub mod query;
