pub mod media;
pub mod posters;
pub mod reviews;
