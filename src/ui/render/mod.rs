mod all;
mod footer;
mod log;
mod page;
mod signup;

use self::log::log;
use super::*;
use footer::footer;
use page::page;
use signup::signup;

pub use all::all as render;
