mod common;

mod failures;
