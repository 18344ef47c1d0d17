mod common;

mod catalog;
