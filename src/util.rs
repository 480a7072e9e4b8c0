pub(crate) mod linalg;

#[cfg(test)]
pub(crate) mod testing;
