// Saved resumes: owner-scoped persistence behind the `ResumeStore` trait.
// Every query filters on the caller's user id; a record owned by someone else
// is indistinguishable from one that does not exist.

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod store;
