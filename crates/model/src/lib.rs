#![no_std]
extern crate alloc;

pub mod category;
pub mod question;
pub mod request;
