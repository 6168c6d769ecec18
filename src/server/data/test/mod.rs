mod category;
mod comment;
mod genre;
mod review;
mod title;
mod user;
