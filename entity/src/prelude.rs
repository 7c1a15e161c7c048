pub use super::blog_post::Entity as BlogPost;
pub use super::book::Entity as Book;
pub use super::site_user::Entity as SiteUser;
