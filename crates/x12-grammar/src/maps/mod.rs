//! Authored grammars, one module per supported transaction set.

mod t834;
mod t835;
mod t837p;

pub(crate) use t834::GRAMMAR_834;
pub(crate) use t835::GRAMMAR_835;
pub(crate) use t837p::GRAMMAR_837P;
