pub mod answer_service;
pub mod listing_service;
pub mod patch_merger;
pub mod quiz_service;
pub mod user_service;

pub use answer_service::AnswerService;
pub use listing_service::ListingService;
pub use quiz_service::QuizService;
pub use user_service::UserService;
