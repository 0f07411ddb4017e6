//! Persisted shapes of the three record types.
//!
//! Documents use camelCase keys with a `_id` ObjectId and a `createdAt`
//! BSON datetime, so collections written by earlier versions of the site
//! read back unchanged. Unknown keys (such as a `__v` version counter) are ignored.

pub mod contact_document;
pub mod project_document;
pub mod sponsor_document;

use bson::DateTime;
use bson::oid::ObjectId;

/// Identity assigned to every record at insert time
pub(crate) fn new_identity() -> (ObjectId, DateTime) {
    (ObjectId::new(), DateTime::now())
}
