//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod like_repo;
pub mod movie_repo;
pub mod payment_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;
pub mod view_repo;
pub mod watchlist_repo;

pub use comment_repo::CommentRepo;
pub use like_repo::LikeRepo;
pub use movie_repo::MovieRepo;
pub use payment_repo::PaymentRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use view_repo::ViewRepo;
pub use watchlist_repo::WatchlistRepo;
