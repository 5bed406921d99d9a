pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;
