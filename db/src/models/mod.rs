pub mod category;
pub mod order;
pub mod product;
pub mod user;
pub mod wishlist;

pub use category::Entity as Category;
pub use order::Entity as Order;
pub use product::Entity as Product;
pub use user::Entity as User;
pub use wishlist::Entity as Wishlist;
