pub(crate) use self::{demo::*, generate::*};

mod demo;
mod generate;
