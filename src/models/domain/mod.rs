pub mod completion;
pub mod quiz;
pub mod user;
pub use completion::CompletionRecord;
pub use quiz::Quiz;
pub use user::User;
