pub mod blog;
pub mod review;
pub mod tag;
pub mod user;

pub use blog::PostgresBlogRepository;
pub use review::PostgresReviewRepository;
pub use tag::PostgresTagRepository;
pub use user::PostgresUserRepository;
