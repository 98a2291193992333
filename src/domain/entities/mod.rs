pub mod store_credentials;
pub mod submission_context;
pub mod waitlist_entry;
pub mod waitlist_outcome;
