mod books;
mod users;

pub use books::books_json;
pub use users::users_json;
