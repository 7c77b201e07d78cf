pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod hands;
pub mod keyboard;
pub mod layouts;
pub mod report;

pub use corpus::Corpus;
pub use error::{KeResult, KeyEvalError};
pub use hands::Hands;
pub use keyboard::{Finger, Hand, Key, Keyboard, Row};
pub use report::LayoutReport;
// cmd and reports are binary modules (see main.rs).
