/// Well-formedness check command.
pub mod check;
/// Selector lookup command.
pub mod get;
/// Tree rendering for decoded values.
pub mod print;
/// Whole-document display command.
pub mod show;
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;
