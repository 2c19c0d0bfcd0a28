//! Pure domain logic: key derivation, payload validation, plurality
//! tally, and receipt construction. Nothing in this module touches the
//! KV capability.

pub mod keys;
pub mod receipt;
pub mod tally;
pub mod validate;

pub use receipt::{make_commit_receipt, make_done_receipt, make_record_receipt};
pub use tally::{is_commit_done, most_common, Plurality};
pub use validate::{check_commit_payload, classify_height, is_member, valid_title, HeightClass};
