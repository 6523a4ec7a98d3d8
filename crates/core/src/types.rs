/// Character ids are signed 64-bit integers assigned by the store.
pub type DbId = i64;
